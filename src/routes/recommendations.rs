use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::RecommendationRequest,
    routes::AppState,
    services::recommendations,
};

/// Handler for recommendations endpoint
///
/// Well-formed JSON of the wrong shape gets the same generic error as an
/// upstream failure. Bodies that are not JSON keep axum's rejection.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(JsonRejection::JsonDataError(e)) => {
            return Err(AppError::InvalidRequestBody(e.body_text()))
        }
        Err(rejection) => return Ok(rejection.into_response()),
    };

    tracing::info!(
        request_id = %request_id,
        model = %state.model.name(),
        favorites_count = request.favorite_books.len(),
        "Processing recommendation request"
    );

    let recommendations =
        recommendations::get_recommendations(state.model.as_ref(), &request.favorite_books)
            .await?;

    tracing::info!(
        request_id = %request_id,
        model = %state.model.name(),
        "Recommendations generated"
    );

    Ok(Json(recommendations).into_response())
}
