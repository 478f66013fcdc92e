//! HTTP handlers for the dashboard endpoints

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::AiProvider;
use crate::core::query;
use crate::core::{DashError, RepPage, RepQuery, SalesRep, ValidationError};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The record collection, immutable after load
    pub records: Arc<Vec<SalesRep>>,

    /// The AI capability answering free-text questions
    pub ai: Arc<dyn AiProvider>,
}

/// Request body for the AI endpoint
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// The free-text question; required and non-empty
    #[serde(default)]
    pub question: String,
}

/// Response body for the AI endpoint
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// List sales representatives
///
/// GET /api/sales-reps?page=&page_size=&sort_by=&sort_order=&id=&name=&role=&region=
///
/// Filters combine with AND; the response carries one page plus
/// pagination metadata. A page past the end is an empty page, not an
/// error.
pub async fn list_sales_reps(
    State(state): State<AppState>,
    Query(params): Query<RepQuery>,
) -> Json<RepPage> {
    debug!(
        page = params.page(),
        page_size = params.page_size(),
        sort_by = %params.sort_by,
        "listing sales reps"
    );
    Json(query::run(&state.records, &params))
}

/// Answer a free-text question through the AI provider
///
/// POST /api/ai with `{"question": "..."}`. A missing or empty question
/// is a 400; provider failures surface as 500 carrying the failure
/// detail. The provider is never called when validation fails.
pub async fn ask_ai(
    State(state): State<AppState>,
    Json(body): Json<AskRequest>,
) -> Result<Json<AskResponse>, DashError> {
    if body.question.is_empty() {
        return Err(ValidationError::MissingQuestion.into());
    }

    debug!(question_len = body.question.len(), "forwarding question to AI provider");
    let answer = state.ai.complete(&body.question).await?;

    Ok(Json(AskResponse { answer }))
}
