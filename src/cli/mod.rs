//! CLI argument definitions for todofile.

use clap::Parser;
use std::path::PathBuf;

/// Todofile - serve a REST todo API backed by a single JSON file.
#[derive(Parser, Debug)]
#[command(name = "todofile")]
#[command(author, version, about = "REST todo API backed by a single JSON file", long_about = None)]
pub struct Cli {
    /// Port to listen on. Can also be set via the PORT environment variable.
    #[arg(short, long, env = "PORT", default_value_t = crate::server::DEFAULT_PORT)]
    pub port: u16,

    /// Host address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Path to the JSON file backing the todo collection. Created containing
    /// an empty array if it does not exist yet.
    #[arg(short, long, env = "TODOFILE", default_value = "todos.json")]
    pub file: PathBuf,
}
