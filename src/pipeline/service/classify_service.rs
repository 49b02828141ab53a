use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use crate::pipeline::context::frame_context::FrameContext;
use crate::pipeline::context::state::ClassifiedState;
use crate::pipeline::context::state::IngestedState;
use crate::pipeline::session::SessionEngine;
use futures::task::Context;
use futures::task::Poll;
use futures::Future;
use tokio::sync::Mutex;
use tower::Service;

/// Tower service running one frame context through the session engine.
///
/// The engine is shared behind a mutex so the coordinator's revert timers
/// can reach the same session; detector callbacks are single-producer, so
/// the lock is uncontended in practice.
#[derive(Clone)]
pub struct ClassifyService {
    engine: Arc<Mutex<SessionEngine>>,
}

impl ClassifyService {
    pub fn new(engine: Arc<Mutex<SessionEngine>>) -> Self {
        Self { engine }
    }
}

impl Service<FrameContext<IngestedState>> for ClassifyService {
    type Response = FrameContext<ClassifiedState>;
    type Error = Box<dyn std::error::Error + Send + Sync + 'static>;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: FrameContext<IngestedState>) -> Self::Future {
        let engine = self.engine.clone();

        Box::pin(async move {
            let result = engine.lock().await.ingest(req.frame(), Instant::now());
            Ok(req.into_classified(result))
        })
    }
}
