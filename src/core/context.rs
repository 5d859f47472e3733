use tokio_util::sync::CancellationToken;
use uuid::Uuid;

// RequestContext travels unchanged from the caller into the book store. It carries
// the request id used in diagnostics and the cancellation signal the backend honors.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: String,
    cancellation: CancellationToken,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::with_request_id(Uuid::new_v4().to_string().as_str())
    }

    pub fn with_request_id(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn request_id(&self) -> &str {
        self.request_id.as_str()
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    // resolves once the request has been cancelled
    pub async fn cancelled(&self) {
        self.cancellation.cancelled().await
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::context::RequestContext;

    #[tokio::test]
    async fn test_should_build_context() {
        let ctx = RequestContext::with_request_id("req-1");
        assert_eq!("req-1", ctx.request_id());
        assert!(!ctx.is_cancelled());
        assert_ne!(RequestContext::new().request_id(), RequestContext::new().request_id());
    }

    #[tokio::test]
    async fn test_should_share_cancellation_with_clones() {
        let ctx = RequestContext::new();
        let copy = ctx.clone();
        ctx.cancel();
        assert!(copy.is_cancelled());
        copy.cancelled().await;
    }
}
