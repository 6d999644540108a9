use super::{AppState, HttpError};
use crate::advisor::Advisory;
use crate::catalog::{CalendarOverview, PlantFilter};
use crate::error::GardenError;
use crate::model::{Category, Plant};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub plants: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        plants: state.catalog.len(),
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct PlantQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

pub async fn list_plants(
    State(state): State<AppState>,
    Query(query): Query<PlantQuery>,
) -> Result<Json<Vec<Plant>>, HttpError> {
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(str::parse::<Category>)
        .transpose()?;
    let filter = PlantFilter {
        category,
        search: query.search,
    };

    let plants = state.catalog.search(&filter).into_iter().cloned().collect();
    Ok(Json(plants))
}

pub async fn get_plant(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Plant>, HttpError> {
    Ok(Json(state.catalog.get(id)?.clone()))
}

pub async fn calendar(State(state): State<AppState>) -> Json<CalendarOverview> {
    Json(state.catalog.calendar(&state.config.climate, &state.frost))
}

/// Raw `?month=` value. Blank means the clock's month.
#[derive(Debug, Default, Deserialize)]
pub struct NowQuery {
    pub month: Option<String>,
}

impl NowQuery {
    pub fn month(&self) -> Result<Option<u32>, GardenError> {
        let raw = self
            .month
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty());
        let Some(raw) = raw else {
            return Ok(None);
        };
        raw.parse::<u32>().map(Some).map_err(|_| {
            GardenError::Validation(format!(
                "Month must be a number between 1 and 12, got '{}'",
                raw
            ))
        })
    }
}

pub async fn now(
    State(state): State<AppState>,
    Query(query): Query<NowQuery>,
) -> Result<Json<Advisory>, HttpError> {
    let month = query.month()?;
    Ok(Json(state.advisor().advise(month)?))
}
