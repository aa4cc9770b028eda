use serde::{Deserialize, Serialize};

/// Body of `POST /api/recommendations`
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// Titles the user likes, in the order given. Missing means empty.
    #[serde(default)]
    pub favorite_books: Vec<String>,
}

/// A single suggested book, in the shape the prompt asks the model to emit
///
/// Replies are forwarded untyped, so this documents the expected shape
/// rather than enforcing it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub author: String,
    /// Short pitch, roughly 20 to 30 characters
    pub reason: String,
}

/// Error body returned with a 500
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_reads_camel_case_field() {
        let request: RecommendationRequest =
            serde_json::from_str(r#"{"favoriteBooks": ["ノルウェイの森", "海辺のカフカ"]}"#)
                .unwrap();
        assert_eq!(request.favorite_books, vec!["ノルウェイの森", "海辺のカフカ"]);
    }

    #[test]
    fn test_missing_favorites_defaults_to_empty() {
        let request: RecommendationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, RecommendationRequest::default());
    }

    #[test]
    fn test_recommendation_deserialization() {
        let json = r#"{"title": "1Q84", "author": "村上春樹", "reason": "二つの月が導く壮大な物語"}"#;
        let recommendation: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(recommendation.title, "1Q84");
        assert_eq!(recommendation.author, "村上春樹");
    }
}
