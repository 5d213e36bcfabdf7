//! Repository operations over the todo collection.
//!
//! Every operation loads the full collection fresh from the store; mutating
//! operations save the full collection back before returning. There is no
//! cross-call caching and no locking, so concurrent mutations race exactly
//! as whole-file-rewrite persistence implies.

use crate::models::{next_id, NewTodo, Todo, TodoPatch};
use crate::storage::TodoStore;
use crate::{Error, Result};

/// All todos, in stored (insertion) order.
pub fn list_all(store: &TodoStore) -> Result<Vec<Todo>> {
    store.load_all()
}

/// First todo with the given id, or NotFound.
pub fn get_by_id(store: &TodoStore, id: u64) -> Result<Todo> {
    let todos = store.load_all()?;
    todos
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| Error::not_found(id))
}

/// Create a todo: next id is max existing + 1 (or 1 when empty), completed
/// starts false, the creation timestamp is now. Appends and persists.
pub fn create(store: &TodoStore, new: NewTodo) -> Result<Todo> {
    let mut todos = store.load_all()?;
    let todo = Todo::new(next_id(&todos), new.title, new.description);
    todos.push(todo.clone());
    store.save_all(&todos)?;
    Ok(todo)
}

/// Merge the provided fields onto the record with the given id. The stored
/// id is preserved regardless of the request body. Persists and returns the
/// updated record, or NotFound.
pub fn update(store: &TodoStore, id: u64, patch: TodoPatch) -> Result<Todo> {
    let mut todos = store.load_all()?;
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| Error::not_found(id))?;

    patch.apply(todo);
    let updated = todo.clone();
    store.save_all(&todos)?;
    Ok(updated)
}

/// Remove exactly the entry with the given id, by position. Persists, or
/// signals NotFound; a repeat delete of the same id is NotFound again.
pub fn delete(store: &TodoStore, id: u64) -> Result<()> {
    let mut todos = store.load_all()?;
    let pos = todos
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| Error::not_found(id))?;

    todos.remove(pos);
    store.save_all(&todos)?;
    Ok(())
}
