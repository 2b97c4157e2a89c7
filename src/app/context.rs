use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag shared between the executor and a worker.
///
/// Requesting cancellation never interrupts a running body; it only flips the
/// flag that a body may poll through [`TestContext::is_cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Passed to every suite method invocation.
#[derive(Debug, Clone)]
pub struct TestContext {
    suite: &'static str,
    method: &'static str,
    token: CancellationToken,
}

impl TestContext {
    pub fn new(suite: &'static str, method: &'static str) -> Self {
        Self {
            suite,
            method,
            token: CancellationToken::new(),
        }
    }

    pub fn with_token(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    pub fn suite(&self) -> &'static str {
        self.suite
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    /// `true` once the harness gave up waiting on this invocation.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
