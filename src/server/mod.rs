//! Web server exposing the todo CRUD API.
//!
//! Routes map one-to-one onto the repository operations; handlers translate
//! `Error` values into status codes and `{"error": ...}` JSON bodies.
//! Cross-origin requests are permitted from any origin.

pub mod docs;

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::models::{NewTodo, Todo, TodoPatch};
use crate::storage::TodoStore;
use crate::{repo, Error};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Storage adapter; stateless, so no lock is held across requests
    pub store: Arc<TodoStore>,
}

/// Default listening port when PORT is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Build the application router over the given store.
pub fn router(store: Arc<TodoStore>) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/docs", get(docs::serve_docs))
        .layer(CorsLayer::permissive())
        .with_state(AppState { store })
}

/// Start the API server. The store must already be initialized.
pub async fn start_server(
    store: TodoStore,
    port: u16,
    host: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(Arc::new(store));

    let host_addr: std::net::IpAddr = host
        .parse()
        .map_err(|e| format!("Invalid host address '{}': {}", host, e))?;
    let addr = SocketAddr::from((host_addr, port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("todofile API listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Error wrapper mapping library errors to HTTP responses.
///
/// `NotFound` becomes 404; anything else (file IO, malformed JSON on disk)
/// becomes 500. The body is always `{"error": <message>}`.
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("storage error: {}", self.0);
        }
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Parse an id path segment. A non-numeric segment behaves as NotFound
/// rather than a bad request, since no record carries a non-integer id.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError(Error::NotFound(raw.to_string())))
}

/// GET /todos - full collection in stored order
async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = repo::list_all(&state.store)?;
    Ok(Json(todos))
}

/// GET /todos/{id}
async fn get_todo(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = repo::get_by_id(&state.store, parse_id(&id)?)?;
    Ok(Json(todo))
}

/// POST /todos - create with server-assigned id, responds 201
async fn create_todo(
    State(state): State<AppState>,
    Json(new): Json<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = repo::create(&state.store, new)?;
    tracing::debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id} - partial merge; an `id` field in the body is ignored
async fn update_todo(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Todo>, ApiError> {
    let todo = repo::update(&state.store, parse_id(&id)?, patch)?;
    tracing::debug!(id = todo.id, "updated todo");
    Ok(Json(todo))
}

/// DELETE /todos/{id} - responds 204 with no body
async fn delete_todo(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    repo::delete(&state.store, id)?;
    tracing::debug!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
