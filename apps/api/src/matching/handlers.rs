//! Axum route handlers for the Consultants API.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::matching::filters::{ExperienceRange, ShortlistFilters};
use crate::matching::shortlist::build_shortlist;
use crate::models::consultant::ConsultantRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistQuery {
    pub job_description: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub experience: ExperienceRange,
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RangeOption {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCatalog {
    pub locations: Vec<String>,
    pub experience_ranges: Vec<RangeOption>,
}

/// GET /api/consultants
///
/// Ranked shortlist for a job description, optionally narrowed by filters.
/// A blank or missing description yields an empty list.
pub async fn handle_shortlist(
    State(state): State<AppState>,
    Query(params): Query<ShortlistQuery>,
) -> Response {
    let job_description = params.job_description.as_deref().unwrap_or_default().trim();
    if job_description.is_empty() {
        return Json(Vec::<ConsultantRecord>::new()).into_response();
    }

    let roster = state.roster.snapshot();
    let shortlist = build_shortlist(
        job_description,
        roster.consultants(),
        state.config.shortlist_cap,
    );
    debug!(
        "Shortlist built: {} matched, {} filler",
        shortlist.matched,
        shortlist.filler()
    );

    let filters = ShortlistFilters {
        location: params.location,
        experience: params.experience,
        keyword: params.keyword,
    };
    let consultants = filters.apply(shortlist.consultants);

    // Serialized here, while the snapshot is still borrowed
    Json(consultants).into_response()
}

/// GET /api/consultants/:id
pub async fn handle_get_consultant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let roster = state.roster.snapshot();
    let consultant = roster
        .find(&id)
        .ok_or_else(|| AppError::NotFound(format!("Consultant with ID \"{id}\" not found")))?;
    Ok(Json(consultant).into_response())
}

/// GET /api/filters
///
/// Options for the filter panel: roster locations and experience buckets.
pub async fn handle_filter_catalog(State(state): State<AppState>) -> Json<FilterCatalog> {
    let roster = state.roster.snapshot();
    Json(FilterCatalog {
        locations: roster.locations().into_iter().map(str::to_string).collect(),
        experience_ranges: ExperienceRange::SELECTABLE
            .iter()
            .map(|range| RangeOption {
                label: range.label(),
                value: range.value(),
            })
            .collect(),
    })
}
