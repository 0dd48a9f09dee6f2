//! # REST API Routes
//!
//! Axum route table for the programmer collection.
//!
//! | Method | Path   | Result                                   |
//! |--------|--------|------------------------------------------|
//! | GET    | `/`    | 200, every record                        |
//! | POST   | `/`    | 201, the created record                  |
//! | GET    | `/:id` | 200 record, or 404 envelope              |
//! | PUT    | `/:id` | 200 `Updated Successfully`, or 404       |
//! | GET    | other  | 404 `Route not found` envelope           |
//! | other  | any    | 404, empty body                          |

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::schema::Record;

use super::body::read_body;
use super::errors::{RestError, RestResult};
use super::handler::RestHandler;

/// Plain-text body returned by a successful update
pub const UPDATE_SUCCESS_MESSAGE: &str = "Updated Successfully";

/// Shared state type
type HandlerState<H> = Arc<H>;

/// Build the Axum router over `handler`
pub fn routes<H: RestHandler + 'static>(handler: Arc<H>) -> Router {
    Router::new()
        .route(
            "/",
            get(list_handler::<H>)
                .post(create_handler::<H>)
                .fallback(fallback_handler),
        )
        .route(
            "/:id",
            get(get_handler::<H>)
                .put(update_handler::<H>)
                .fallback(fallback_handler),
        )
        .fallback(fallback_handler)
        .with_state(handler)
}

/// List records handler
async fn list_handler<H: RestHandler + 'static>(
    State(handler): State<HandlerState<H>>,
) -> RestResult<Json<Vec<Record>>> {
    Ok(Json(handler.list()?))
}

/// Get single record handler
async fn get_handler<H: RestHandler + 'static>(
    State(handler): State<HandlerState<H>>,
    Path(id): Path<String>,
) -> RestResult<Json<Record>> {
    match handler.get(&id) {
        Ok(record) => Ok(Json(record)),
        Err(err) => {
            tracing::debug!(sid = %id, "programmer not found");
            Err(err)
        }
    }
}

/// Update record handler
async fn update_handler<H: RestHandler + 'static>(
    State(handler): State<HandlerState<H>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    bytes: Bytes,
) -> RestResult<&'static str> {
    let body = read_body(&headers, &bytes)?;
    handler.update(&id, &body)?;
    Ok(UPDATE_SUCCESS_MESSAGE)
}

/// Create record handler
async fn create_handler<H: RestHandler + 'static>(
    State(handler): State<HandlerState<H>>,
    headers: HeaderMap,
    bytes: Bytes,
) -> RestResult<(StatusCode, Json<Record>)> {
    let body = read_body(&headers, &bytes)?;
    let created = handler.create(&body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Unmatched paths and unrouted methods on known paths.
///
/// GET gets the error envelope, every other method a bare 404.
async fn fallback_handler(method: Method) -> Response {
    if method == Method::GET {
        RestError::RouteNotFound.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
