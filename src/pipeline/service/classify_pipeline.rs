use crate::error::PipelineError;
use crate::pipeline::context::frame_context::FrameContext;
use crate::pipeline::context::state::ClassifiedState;
use crate::pipeline::context::state::IngestedState;
use crate::pipeline::service::classify_service::ClassifyService;
use crate::pipeline::session::SessionEngine;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tower::timeout::TimeoutLayer;
use tower::util::BoxService;
use tower::Service;
use tower::ServiceBuilder;
use tower::ServiceExt;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The classification step behind optional tower middleware.
pub struct ClassifyPipeline {
    service: BoxService<FrameContext<IngestedState>, FrameContext<ClassifiedState>, BoxError>,
}

impl ClassifyPipeline {
    pub fn builder(engine: Arc<Mutex<SessionEngine>>) -> ClassifyPipelineBuilder {
        ClassifyPipelineBuilder {
            engine,
            classify_timeout: None,
        }
    }

    pub async fn process(
        &mut self,
        context: FrameContext<IngestedState>,
    ) -> Result<FrameContext<ClassifiedState>, PipelineError> {
        let service = self.service.ready().await.map_err(box_error)?;
        service.call(context).await.map_err(box_error)
    }
}

fn box_error(error: BoxError) -> PipelineError {
    if error.is::<tower::timeout::error::Elapsed>() {
        PipelineError::Timeout
    } else {
        PipelineError::Classify(error.to_string())
    }
}

pub struct ClassifyPipelineBuilder {
    engine: Arc<Mutex<SessionEngine>>,
    classify_timeout: Option<Duration>,
}

impl ClassifyPipelineBuilder {
    // Bounds how long a single classification pass may take.
    pub fn classify_timeout(mut self, classify_timeout: Duration) -> Self {
        self.classify_timeout = Some(classify_timeout);
        self
    }

    pub fn build(self) -> ClassifyPipeline {
        let service = ServiceBuilder::new()
            .option_layer(self.classify_timeout.map(TimeoutLayer::new))
            .service(ClassifyService::new(self.engine));

        ClassifyPipeline {
            service: BoxService::new(service),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{CameraFacing, Exercise, PoseFrame};

    #[tokio::test]
    async fn pipeline_with_timeout_still_classifies() {
        let engine = Arc::new(Mutex::new(SessionEngine::new(
            Exercise::None,
            CameraFacing::Back,
            Duration::from_millis(800),
            Duration::from_millis(2000),
        )));
        let mut pipeline = ClassifyPipeline::builder(engine)
            .classify_timeout(Duration::from_secs(1))
            .build();

        let context = FrameContext::new(PoseFrame::from_points(&[(0, 0.5, 0.5)], 640, 480));
        let classified = pipeline.process(context).await.unwrap();
        assert!(!classified.result().output.evaluated);
    }
}
