use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, instrument, warn};

use crate::{
    app_state::AppState,
    check::dtos::{CheckQuery, ErrorResponse},
    extractor::{self, Report},
};

#[utoipa::path(
    get,
    path = "/api/check",
    tag = "seo",
    params(CheckQuery),
    responses(
        (status = 200, description = "SEO report for the page", body = Report),
        (status = 400, description = "No URL supplied", body = ErrorResponse),
        (status = 500, description = "The page could not be fetched", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn check_page(State(state): State<AppState>, Query(query): Query<CheckQuery>) -> Response {
    let url = match query.validate() {
        Ok(url) => url,
        Err(error) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
        }
    };

    match state.fetcher.fetch(url).await {
        Ok(page) => {
            let report = extractor::analyze(url, &page.body_utf8);
            info!(url, score = report.score, "page checked");
            Json(report).into_response()
        }
        Err(err) => {
            warn!(url, error = %err, timeout = err.is_timeout(), "fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
