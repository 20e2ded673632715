//! Local stand-in for the public todos API.
//!
//! Serves a fixed fixture at `GET /todos`, honouring `_limit` the way the
//! upstream does. Any other path falls through to axum's 404.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

const FIXTURE: &str = include_str!("../fixtures/todos.json");

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

pub type Db = Arc<Vec<Todo>>;

/// The bundled fixture: 25 todos, the first 20 belong to user 1 and 11 of
/// those are completed.
pub fn fixture() -> Vec<Todo> {
    serde_json::from_str(FIXTURE).unwrap_or_default()
}

pub fn app() -> Router {
    app_with(fixture())
}

pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(todos);
    Router::new().route("/todos", get(list_todos)).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn list_todos(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Todo>> {
    let limit = params.limit.unwrap_or(db.len());
    Json(db.iter().take(limit).cloned().collect())
}
