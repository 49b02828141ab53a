use std::time::Duration;

/// Metrics collected during frame processing
pub struct FrameMetrics {
    classify_duration: Option<Duration>,
}

impl FrameMetrics {
    pub fn new() -> Self {
        Self {
            classify_duration: None,
        }
    }

    pub fn record_classify_duration(&mut self, duration: Duration) {
        self.classify_duration = Some(duration);
    }

    pub fn classify_duration(&self) -> Option<Duration> {
        self.classify_duration
    }
}
