use serde_json::Value;

use crate::{
    error::AppResult, prompt::build_recommendation_prompt, services::providers::GenerativeModel,
};

/// Asks the model for books to read next
///
/// The reply must parse as JSON; whatever shape it has is returned as-is.
/// No check is made that it is a list of `Recommendation`s.
pub async fn get_recommendations(
    model: &dyn GenerativeModel,
    favorite_books: &[String],
) -> AppResult<Value> {
    let prompt = build_recommendation_prompt(favorite_books);
    let reply = model.generate_content(&prompt).await?;

    let recommendations: Value = serde_json::from_str(&reply).map_err(|e| {
        tracing::warn!(error = %e, reply = %reply, "Model reply is not valid JSON");
        e
    })?;

    Ok(recommendations)
}
