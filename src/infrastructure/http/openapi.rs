//! OpenAPI documentation
//!
//! 由 handler 上的 `#[utoipa::path]` 注解生成，挂载于 `/api-docs/openapi.json`

use utoipa::OpenApi;

use super::dto::{UserPayload, UserResponse};
use super::error::ErrorResponse;
use super::handlers::PingResponse;

/// OpenAPI document for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        description = "CRUD over a single user resource with unique names."
    ),
    tags(
        (name = "Users", description = "Create, list, update and delete users"),
        (name = "Health", description = "Liveness probe")
    ),
    paths(
        crate::infrastructure::http::handlers::list_users,
        crate::infrastructure::http::handlers::create_user,
        crate::infrastructure::http::handlers::update_user,
        crate::infrastructure::http::handlers::delete_user,
        crate::infrastructure::http::handlers::ping
    ),
    components(schemas(UserPayload, UserResponse, ErrorResponse, PingResponse))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_crud_routes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        assert!(paths["/users"].get("get").is_some());
        assert!(paths["/users"].get("post").is_some());
        assert!(paths["/users/{id}"].get("put").is_some());
        assert!(paths["/users/{id}"].get("delete").is_some());
        assert!(doc["components"]["schemas"].get("UserResponse").is_some());
    }

    #[test]
    fn test_conflict_documented_on_writes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["paths"]["/users"]["post"]["responses"].get("409").is_some());
        assert!(doc["paths"]["/users/{id}"]["put"]["responses"].get("409").is_some());
    }
}
