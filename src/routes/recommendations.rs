use account::{DailyCheckin, UserProfile};
use axum::{
    extract::{Path, State},
    Json,
};
use recommendation::{filter_allergen_safe, generate_weekly, TimeOfDay, TimeScoredItem};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::clock;
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub favorite_ids: Vec<String>,
    #[serde(default)]
    pub checkin: Option<DailyCheckin>,
}

#[derive(Debug, Serialize)]
pub struct WeeklyRecommendationsResponse {
    pub recommendations: Vec<TimeScoredItem>,
}

#[derive(Debug, Serialize)]
pub struct CurrentSlotResponse {
    pub time_of_day: TimeOfDay,
    pub recommendations: Vec<TimeScoredItem>,
}

fn weekly_for(state: &AppState, request: &RecommendationsRequest) -> Vec<TimeScoredItem> {
    let safe_items = filter_allergen_safe(&state.catalog, &request.profile);
    generate_weekly(
        &safe_items,
        &request.profile,
        &request.favorite_ids,
        request.checkin.as_ref(),
    )
}

/// POST /api/recommendations - the weekly set for an inline profile.
///
/// Stateless: the profile, favorites and latest check-in travel in the
/// request, so identical requests produce identical responses.
pub async fn post_weekly_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> Json<WeeklyRecommendationsResponse> {
    Json(WeeklyRecommendationsResponse {
        recommendations: weekly_for(&state, &request),
    })
}

/// POST /api/recommendations/current - only the slot matching server time.
///
/// The single place the wall clock feeds a recommendation; callers needing
/// reproducibility use the weekly endpoint and pick a slot themselves.
pub async fn post_current_slot_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> Json<CurrentSlotResponse> {
    let time_of_day = clock::current_time_of_day();
    let recommendations = weekly_for(&state, &request)
        .into_iter()
        .filter(|s| s.time_of_day == time_of_day)
        .collect();

    Json(CurrentSlotResponse {
        time_of_day,
        recommendations,
    })
}

/// GET /api/users/{user_id}/recommendations - weekly set resolved through
/// the external profile store.
pub async fn get_user_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<WeeklyRecommendationsResponse>, AppError> {
    let profile = state
        .profile_store
        .profile(&user_id)
        .await?
        .ok_or_else(|| AppError::UserNotFound(user_id.clone()))?;
    let favorite_ids = state.profile_store.favorite_item_ids(&user_id).await?;
    let checkin = state.profile_store.latest_checkin(&user_id).await?;

    let request = RecommendationsRequest {
        profile,
        favorite_ids,
        checkin,
    };
    Ok(Json(WeeklyRecommendationsResponse {
        recommendations: weekly_for(&state, &request),
    }))
}
