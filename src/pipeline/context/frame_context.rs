use crate::common::frame::PoseFrame;
use crate::pipeline::context::metrics::FrameMetrics;
use crate::pipeline::context::state::ClassifiedState;
use crate::pipeline::context::state::IngestedState;
use crate::pipeline::session::IngestResult;
use std::sync::Arc;
use std::time::{Duration, Instant};

// FrameContext with compile-time state tracking
pub struct FrameContext<S> {
    frame: Arc<PoseFrame>,
    metrics: FrameMetrics,
    processing_start: Instant,
    state: S,
}

impl<S> FrameContext<S> {
    pub fn frame(&self) -> &PoseFrame {
        &self.frame
    }

    pub fn metrics(&self) -> &FrameMetrics {
        &self.metrics
    }

    pub fn elapsed(&self) -> Duration {
        self.processing_start.elapsed()
    }
}

impl FrameContext<IngestedState> {
    pub fn new(frame: PoseFrame) -> Self {
        Self {
            frame: Arc::new(frame),
            metrics: FrameMetrics::new(),
            processing_start: Instant::now(),
            state: IngestedState,
        }
    }

    pub fn into_classified(mut self, result: IngestResult) -> FrameContext<ClassifiedState> {
        self.metrics.record_classify_duration(self.elapsed());
        FrameContext::<ClassifiedState> {
            frame: self.frame,
            metrics: self.metrics,
            processing_start: self.processing_start,
            state: ClassifiedState { result },
        }
    }
}

impl FrameContext<ClassifiedState> {
    pub fn result(&self) -> &IngestResult {
        &self.state.result
    }

    pub fn into_result(self) -> IngestResult {
        self.state.result
    }
}
