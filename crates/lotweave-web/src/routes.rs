//! Router and request handlers.
//!
//! Every mutating handler performs the same cycle the original tool did:
//! load the whole collection, mutate in memory, save the whole collection.
//! The authoritative state is always what a fresh load returns.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use lotweave_core::{FieldMap, LotRecord, replace_all, validate_new};
use lotweave_store::{Store, export_csv};

use crate::error::{Error, Result};

/// Shared handler state: just the store handle.
#[derive(Clone)]
pub struct AppState {
    store: Store,
}

/// Build the application router over the given store.
pub fn router(store: Store) -> Router {
    Router::new()
        .route("/lots", get(list_lots).post(add_lot).put(replace_lots))
        .route("/lots/{lot_number}", delete(delete_lot))
        .route("/export.csv", get(export))
        .with_state(AppState { store })
}

/// Rows affected by a delete.
#[derive(Debug, Serialize)]
struct Deleted {
    deleted: usize,
}

/// Size of the record set after a grid replacement.
#[derive(Debug, Serialize)]
struct Replaced {
    records: usize,
}

/// `GET /lots` — the full collection, in display order.
async fn list_lots(State(state): State<AppState>) -> Json<Vec<LotRecord>> {
    Json(state.store.load().into_records())
}

/// `POST /lots` — validate a raw form submission and admit it.
async fn add_lot(
    State(state): State<AppState>,
    Json(fields): Json<FieldMap>,
) -> Result<(StatusCode, Json<LotRecord>)> {
    let mut collection = state.store.load();
    let record = validate_new(&fields, &collection).map_err(Error::Validation)?;
    collection.push(record.clone());
    state.store.save(&collection)?;
    info!(lot_number = %record.lot_number, "lot saved");
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /lots` — grid-edit path: replace the whole record set.
async fn replace_lots(
    State(state): State<AppState>,
    Json(records): Json<Vec<LotRecord>>,
) -> Result<Json<Replaced>> {
    let mut collection = state.store.load();
    replace_all(&mut collection, records).map_err(Error::Validation)?;
    state.store.save(&collection)?;
    info!(records = collection.len(), "collection replaced");
    Ok(Json(Replaced {
        records: collection.len(),
    }))
}

/// `DELETE /lots/{lot_number}` — remove every record with this key.
///
/// A key that matches nothing is a no-op reported as zero rows, not an
/// error; the backing file is only rewritten when something changed.
async fn delete_lot(
    State(state): State<AppState>,
    Path(lot_number): Path<String>,
) -> Result<Json<Deleted>> {
    let mut collection = state.store.load();
    let deleted = collection.remove(&lot_number);
    if deleted > 0 {
        state.store.save(&collection)?;
        info!(%lot_number, deleted, "lot deleted");
    }
    Ok(Json(Deleted { deleted }))
}

/// `GET /export.csv` — the in-memory collection, serialized exactly like
/// the backing file.
async fn export(State(state): State<AppState>) -> Result<Response> {
    let body = export_csv(&state.store.load())?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"lots_export.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}
