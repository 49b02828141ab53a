pub mod engine;
pub mod reducer;
pub mod state;

pub use engine::{FrameOutput, IngestResult, SessionEngine};
pub use reducer::{classify_frame, revert_feedback, RevertHandle, StepOutcome};
pub use state::{RepPhase, SessionState, DETECTING};
