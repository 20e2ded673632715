use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_without_limit_returns_everything() {
    let resp = app().oneshot(get("/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 25);
}

#[tokio::test]
async fn list_todos_honours_limit() {
    let resp = app().oneshot(get("/todos?_limit=20")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 20);
    let ids: Vec<u64> = todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn list_todos_limit_larger_than_data() {
    let resp = app().oneshot(get("/todos?_limit=500")).await.unwrap();

    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 25);
}

#[tokio::test]
async fn list_todos_limit_zero_is_empty() {
    let resp = app().oneshot(get("/todos?_limit=0")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

#[tokio::test]
async fn list_todos_bad_limit_returns_400() {
    let resp = app().oneshot(get("/todos?_limit=many")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_todos_custom_data() {
    let todos = vec![Todo {
        user_id: 9,
        id: 900,
        title: "custom".to_string(),
        completed: true,
    }];
    let resp = app_with(todos.clone()).oneshot(get("/todos?_limit=20")).await.unwrap();

    let body: Vec<Todo> = body_json(resp).await;
    assert_eq!(body, todos);
}

#[tokio::test]
async fn body_uses_upstream_field_names() {
    let resp = app().oneshot(get("/todos?_limit=1")).await.unwrap();

    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!([{"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false}])
    );
}

// --- unknown routes ---

#[tokio::test]
async fn unknown_path_returns_404() {
    let resp = app().oneshot(get("/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_is_not_allowed() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/todos")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
