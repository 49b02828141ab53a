pub mod common;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod pipeline;

pub use error::{AppError, ConfigError, PipelineError};

pub use common::{BodyLandmark, CameraFacing, Exercise, Landmark, PoseFrame};
pub use config::Configuration;
pub use coordinator::{Coordinator, CoordinatorBuilder, UiEvent};
pub use pipeline::{FrameOutput, SessionEngine, SessionState};
