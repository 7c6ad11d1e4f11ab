//! Name routes - the full HTTP surface of the service.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::db::Store;
use crate::error::{ServerError, ServerResult};
use crate::models::{StoreNameRequest, StoreNameResponse};

/// POST /store - Store a new name
///
/// The body rejection is mapped by hand: a missing or malformed `name`
/// must produce the uniform 500 error shape, not axum's default 4xx
/// rejection statuses.
pub async fn store_name(
    State(store): State<Store>,
    payload: Result<Json<StoreNameRequest>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<StoreNameResponse>)> {
    let Json(req) =
        payload.map_err(|rejection| ServerError::InvalidRequest(rejection.body_text()))?;

    store.insert_name(&req.name)?;

    Ok((
        StatusCode::CREATED,
        Json(StoreNameResponse {
            message: format!("Name {} stored successfully", req.name),
        }),
    ))
}

/// GET /names - List all stored names as `[id, value]` pairs
pub async fn list_names(State(store): State<Store>) -> ServerResult<Json<Vec<(i64, String)>>> {
    let records = store.list_names()?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}
