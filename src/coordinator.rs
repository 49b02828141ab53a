use crate::{
    common::{CameraFacing, Exercise, PoseFrame},
    config::Configuration,
    pipeline::service::ClassifyPipeline,
    pipeline::session::{FrameOutput, RevertHandle, SessionEngine},
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Event delivered to the UI layer.
#[derive(Debug, Clone, Serialize)]
pub enum UiEvent {
    Frame(FrameOutput),
    /// Feedback changed outside a frame, i.e. a revert timer fired.
    Feedback(String),
}

/// Owns the frame-processing task: frames arrive on an mpsc channel from
/// the external detector, run through the classify pipeline, and the
/// resulting UI events flow back out on a second channel.
pub struct Coordinator {
    pipeline_task: tokio::task::JoinHandle<()>,
    cancel_token: CancellationToken,
    engine: Arc<Mutex<SessionEngine>>,
    frame_tx: Sender<PoseFrame>,
    output_rx: Option<Receiver<UiEvent>>,
}

impl Coordinator {
    fn new(
        configuration: Configuration,
        engine: Arc<Mutex<SessionEngine>>,
        mut pipeline: ClassifyPipeline,
    ) -> Self {
        let cancel_token = CancellationToken::new();
        let (frame_tx, mut frame_rx) =
            tokio::sync::mpsc::channel::<PoseFrame>(configuration.frame_buffer_size);
        let (output_tx, output_rx) =
            tokio::sync::mpsc::channel::<UiEvent>(configuration.output_buffer_size);

        let task_engine = engine.clone();
        let task_cancel = cancel_token.clone();
        let enable_metrics = configuration.enable_metrics;
        let pipeline_task = tokio::spawn(async move {
            loop {
                let frame = tokio::select! {
                    _ = task_cancel.cancelled() => break,
                    frame = frame_rx.recv() => match frame {
                        Some(frame) => frame,
                        None => break,
                    },
                };

                let context = crate::pipeline::context::FrameContext::new(frame);
                match pipeline.process(context).await {
                    Ok(classified) => {
                        if enable_metrics {
                            tracing::debug!(
                                duration = ?classified.metrics().classify_duration(),
                                "frame classified"
                            );
                        }
                        let result = classified.into_result();
                        if let Some(revert) = result.revert {
                            Self::arm_revert(
                                task_engine.clone(),
                                output_tx.clone(),
                                task_cancel.clone(),
                                revert,
                            );
                        }
                        if output_tx.send(UiEvent::Frame(result.output)).await.is_err() {
                            tracing::info!("UI side hung up, stopping pipeline task");
                            break;
                        }
                    }
                    Err(e) => tracing::error!("Pipeline error: {}", e),
                }
            }
        });

        Self {
            pipeline_task,
            cancel_token,
            engine,
            frame_tx,
            output_rx: Some(output_rx),
        }
    }

    /// Arms the feedback revert for a just-completed repetition. Stale
    /// tokens no-op inside the engine, so a newer repetition's feedback
    /// survives earlier timers without explicit cancellation.
    fn arm_revert(
        engine: Arc<Mutex<SessionEngine>>,
        output_tx: Sender<UiEvent>,
        cancel_token: CancellationToken,
        revert: RevertHandle,
    ) {
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel_token.cancelled() => {}
                _ = tokio::time::sleep(revert.delay) => {
                    let feedback = {
                        let mut engine = engine.lock().await;
                        engine.apply_revert(revert.token);
                        engine.state().feedback.clone()
                    };
                    let _ = output_tx.send(UiEvent::Feedback(feedback)).await;
                }
            }
        });
    }

    /// Handle for the external detector to push frames into.
    pub fn frame_sender(&self) -> Sender<PoseFrame> {
        self.frame_tx.clone()
    }

    /// UI event stream; yields `None` after the first call.
    pub fn take_outputs(&mut self) -> Option<Receiver<UiEvent>> {
        self.output_rx.take()
    }

    /// Starts a fresh session for the newly selected exercise.
    pub async fn set_exercise(&self, exercise: Exercise) {
        self.engine.lock().await.set_exercise(exercise);
        tracing::info!(?exercise, "session reset");
    }

    pub async fn set_facing(&self, facing: CameraFacing) {
        self.engine.lock().await.set_facing(facing);
    }

    pub fn stop(&self) {
        self.cancel_token.cancel();
        self.pipeline_task.abort();
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.stop();
    }
}

pub struct CoordinatorBuilder {
    configuration: Configuration,
    exercise: Exercise,
    facing: CameraFacing,
    classify_timeout: Option<Duration>,
}

impl CoordinatorBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            exercise: Exercise::None,
            facing: CameraFacing::default(),
            classify_timeout: None,
        }
    }

    // Selects the exercise the session starts with.
    pub fn exercise(mut self, exercise: Exercise) -> Self {
        self.exercise = exercise;
        self
    }

    // Selects the capturing camera, this drives overlay mirroring.
    pub fn facing(mut self, facing: CameraFacing) -> Self {
        self.facing = facing;
        self
    }

    // Bounds a single classification pass, this will add a tower timeout.
    pub fn classify_timeout(mut self, classify_timeout: Duration) -> Self {
        self.classify_timeout = Some(classify_timeout);
        self
    }

    pub fn build(self) -> Coordinator {
        let engine = Arc::new(Mutex::new(SessionEngine::new(
            self.exercise,
            self.facing,
            Duration::from_millis(self.configuration.eval_interval_ms),
            Duration::from_millis(self.configuration.feedback_revert_ms),
        )));

        let mut pipeline = ClassifyPipeline::builder(engine.clone());
        if let Some(classify_timeout) = self.classify_timeout {
            pipeline = pipeline.classify_timeout(classify_timeout);
        }

        Coordinator::new(self.configuration, engine, pipeline.build())
    }
}
