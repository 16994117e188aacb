use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::Tip;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TipSearchParams {
    /// Free text matched against title and content
    pub q: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
}

pub async fn search_tips(
    State(state): State<AppState>,
    Query(params): Query<TipSearchParams>,
) -> Result<Json<Vec<Tip>>> {
    let limit = params.limit.unwrap_or(state.config.tip_search_limit);

    let tips = state
        .store
        .search_tips(params.q.as_deref(), params.category.as_deref(), Some(limit))
        .await?;

    Ok(Json(tips))
}

pub async fn tip_categories(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.store.get_tip_categories().await?))
}
