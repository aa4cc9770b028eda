/// Generative model abstraction
///
/// The recommendation flow only needs "send a prompt, get text back", so each
/// backend implements that one call. Handlers hold an
/// `Arc<dyn GenerativeModel>` built once at startup.
use crate::error::AppResult;

pub mod gemini;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Submit a prompt and return the model's raw text reply
    ///
    /// No timeout or retry is applied; a hung upstream hangs the caller.
    async fn generate_content(&self, prompt: &str) -> AppResult<String>;

    /// Model name for logging and debugging
    fn name(&self) -> &str;
}
