use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/:id",
            get(get_item)
                .put(replace_item)
                .patch(patch_item)
                .delete(delete_item),
        )
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    (StatusCode::OK, Json(services.items().list_active())).into_response()
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let fields = match dto::fields_from_body(body) {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match services.items().create(fields) {
        Ok(item) => (StatusCode::CREATED, Json(dto::ItemResponse::new(dto::CREATED, item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.items().get_by_id(&id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn replace_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let fields = match dto::fields_from_body(body) {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match services.items().replace(&id, fields) {
        Ok(item) => (StatusCode::OK, Json(dto::ItemResponse::new(dto::REPLACED, item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn patch_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let fields = match dto::fields_from_body(body) {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match services.items().patch(&id, fields) {
        Ok(outcome) => (StatusCode::OK, Json(dto::PatchResponse::from(outcome))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.items().delete(&id) {
        Ok(item) => (StatusCode::OK, Json(dto::ItemResponse::new(dto::DELETED, item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
