use async_trait::async_trait;
use crate::errors::GateResult;

/// Raw HTTP access to the hub. Implementations own the session state
/// (cookies), so a successful sign-in is visible to every later call made
/// through the same instance.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url` and return the body; non-2xx answers are errors.
    async fn get_text(&self, url: &str) -> GateResult<String>;

    /// POST an url-encoded form and return the response status code.
    async fn post_form(&self, url: &str, form: Vec<(String, String)>) -> GateResult<u16>;
}
