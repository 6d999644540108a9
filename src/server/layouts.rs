//! Layout endpoints. Repository calls touch the filesystem, so they run on
//! the blocking pool; writes additionally hold `write_lock`.

use super::{AppState, HttpError};
use crate::error::Result as GardenResult;
use crate::model::{GardenLayout, LayoutDraft, LayoutPlacement, PlacementDraft};
use crate::storage::LayoutRepository;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct Created {
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    fn ok() -> Json<Self> {
        Json(Self { ok: true })
    }
}

async fn with_repo<T, F>(state: &AppState, f: F) -> Result<T, HttpError>
where
    F: FnOnce(LayoutRepository) -> GardenResult<T> + Send + 'static,
    T: Send + 'static,
{
    let repo = state.layouts();
    let outcome = tokio::task::spawn_blocking(move || f(repo))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Layout task failed");
            HttpError::with_details("Internal error", HttpError::INTERNAL_ERROR, e.to_string())
        })?;
    Ok(outcome?)
}

pub async fn list_layouts(
    State(state): State<AppState>,
) -> Result<Json<Vec<GardenLayout>>, HttpError> {
    let layouts = with_repo(&state, |repo| repo.list()).await?;
    Ok(Json(layouts))
}

pub async fn create_layout(
    State(state): State<AppState>,
    Json(draft): Json<LayoutDraft>,
) -> Result<(StatusCode, Json<Created>), HttpError> {
    let _guard = state.write_lock.lock().await;
    let layout = with_repo(&state, move |repo| repo.create(draft)).await?;
    Ok((StatusCode::CREATED, Json(Created { id: layout.id })))
}

pub async fn get_layout(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<GardenLayout>, HttpError> {
    let layout = with_repo(&state, move |repo| repo.get(id)).await?;
    Ok(Json(layout))
}

pub async fn update_layout(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(draft): Json<LayoutDraft>,
) -> Result<Json<Ack>, HttpError> {
    let _guard = state.write_lock.lock().await;
    with_repo(&state, move |repo| repo.update(id, draft)).await?;
    Ok(Ack::ok())
}

pub async fn delete_layout(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Ack>, HttpError> {
    let _guard = state.write_lock.lock().await;
    with_repo(&state, move |repo| repo.delete(id)).await?;
    Ok(Ack::ok())
}

pub async fn place_plant(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(draft): Json<PlacementDraft>,
) -> Result<(StatusCode, Json<LayoutPlacement>), HttpError> {
    let catalog = Arc::clone(&state.catalog);
    let _guard = state.write_lock.lock().await;
    let placement = with_repo(&state, move |repo| {
        let plant = catalog.get(draft.plant_id)?;
        let layout = repo.get(id)?;
        let neighbors = catalog.neighbors(&layout, plant, draft.grid_x, draft.grid_y);
        for other in neighbors.conflicts {
            tracing::warn!(
                layout = id,
                plant = %plant.name,
                neighbor = %other.name,
                "Placed next to an incompatible plant"
            );
        }
        repo.place_plant(id, plant, draft.grid_x, draft.grid_y)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(placement)))
}
