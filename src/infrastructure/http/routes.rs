//! HTTP Routes
//!
//! API Endpoints:
//! - /pets                  GET     列出所有宠物
//! - /pets/add              POST    添加宠物
//! - /pets/:id              GET     获取宠物详情
//! - /pets/owner/:owner     GET     按主人列出宠物
//! - /pets/update/:id       PUT     更新宠物
//! - /pets/remove/:id       DELETE  删除宠物
//! - /commands/ping         GET     健康检查

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/pets", pet_routes())
        .nest("/commands", command_routes())
}

/// Pet 路由
fn pet_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_pets))
        .route("/add", post(handlers::add_pet))
        .route("/:id", get(handlers::get_pet))
        .route("/owner/:owner", get(handlers::list_pets_by_owner))
        .route("/update/:id", put(handlers::update_pet))
        .route("/remove/:id", delete(handlers::delete_pet))
}

/// Commands 路由
fn command_routes() -> Router<Arc<AppState>> {
    Router::new().route("/ping", get(handlers::ping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::infrastructure::memory::InMemoryPetStore;

    fn app() -> Router {
        let state = AppState::new(Arc::new(InMemoryPetStore::seeded()));
        create_routes().with_state(Arc::new(state))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_ping_returns_pong() {
        let request = Request::builder()
            .uri("/commands/ping")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "pong");
    }

    #[tokio::test]
    async fn test_get_pet_returns_json() {
        let request = Request::builder()
            .uri("/pets/1")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let pet: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            pet,
            serde_json::json!({ "id": 1, "name": "Medor", "age": 12, "owner": "Peter" })
        );
    }

    #[tokio::test]
    async fn test_update_missing_pet_returns_not_found() {
        let request = Request::builder()
            .method("PUT")
            .uri("/pets/update/99")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"id":99,"name":"Ghost","age":1,"owner":"Nobody"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "Pet not found.");
    }

    #[tokio::test]
    async fn test_update_uses_path_id_over_body_id() {
        let request = Request::builder()
            .method("PUT")
            .uri("/pets/update/2")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"id":77,"name":"Mistigri","age":6,"owner":"Jack"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let pet: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(pet["id"], 2);
        assert_eq!(pet["age"], 6);
    }

    #[tokio::test]
    async fn test_non_integer_path_id_is_bad_request() {
        let request = Request::builder()
            .uri("/pets/abc")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrongly_typed_body_field_is_unprocessable() {
        let request = Request::builder()
            .method("PUT")
            .uri("/pets/update/1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Medor","age":"old","owner":"Peter"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_add_without_owner_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/pets/add")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"id":8,"name":"Tom","age":2}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
