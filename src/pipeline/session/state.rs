use crate::common::{Exercise, PoseFrame};
use serde::Serialize;

/// Feedback placeholder shown while no repetition verdict is live.
pub const DETECTING: &str = "Detecting...";

/// Start/Middle cycle of a tracked repetition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RepPhase {
    #[default]
    Start,
    Middle,
}

/// Entire persistent state of one exercise session.
///
/// A plain value threaded through the reducer; switching exercises discards
/// it wholesale rather than mutating it.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub exercise: Exercise,
    pub phase: RepPhase,
    pub good_reps: u32,
    pub bad_reps: u32,
    pub feedback: String,
    /// Deepest frame captured during a squat's Middle phase; owned clone,
    /// never an alias of the producer's buffer.
    pub best_pose: Option<PoseFrame>,
    /// Generation counter for feedback writes; a scheduled revert only
    /// applies while its token is still current.
    pub feedback_token: u64,
}

impl SessionState {
    pub fn new(exercise: Exercise) -> Self {
        Self {
            exercise,
            phase: RepPhase::Start,
            good_reps: 0,
            bad_reps: 0,
            feedback: DETECTING.to_string(),
            best_pose: None,
            feedback_token: 0,
        }
    }
}
