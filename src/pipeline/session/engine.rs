//! Synchronous per-session entry point.
//!
//! One engine lives for the duration of an exercise session. It is invoked
//! once per detector callback (callbacks are never concurrent) and applies
//! the throttle, the validity gate, and the reducer in order. Overlay
//! geometry is refreshed on every frame regardless of throttling.

use crate::common::{CameraFacing, Exercise, PoseFrame};
use crate::pipeline::overlay::{skeleton_geometry, SkeletonGeometry};
use crate::pipeline::session::reducer::{
    classify_frame, mark_undetected, revert_feedback, RevertHandle,
};
use crate::pipeline::session::state::SessionState;
use crate::pipeline::throttle::EvalThrottle;
use crate::pipeline::validity::is_pose_valid;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Snapshot of everything the UI layer displays after one frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameOutput {
    pub overlay: SkeletonGeometry,
    pub feedback: String,
    pub good_reps: u32,
    pub bad_reps: u32,
    /// False for throttled or unclassified frames.
    pub evaluated: bool,
}

/// One frame's worth of engine results.
#[derive(Debug)]
pub struct IngestResult {
    pub output: FrameOutput,
    /// Present when a completed repetition armed a feedback revert.
    pub revert: Option<RevertHandle>,
}

pub struct SessionEngine {
    state: SessionState,
    throttle: EvalThrottle,
    facing: CameraFacing,
    revert_delay: Duration,
}

impl SessionEngine {
    pub fn new(
        exercise: Exercise,
        facing: CameraFacing,
        eval_interval: Duration,
        revert_delay: Duration,
    ) -> Self {
        Self {
            state: SessionState::new(exercise),
            throttle: EvalThrottle::new(eval_interval),
            facing,
            revert_delay,
        }
    }

    /// Starts a fresh session, discarding all previous state.
    pub fn set_exercise(&mut self, exercise: Exercise) {
        self.state = SessionState::new(exercise);
        self.throttle = EvalThrottle::new(self.throttle.interval());
    }

    pub fn set_facing(&mut self, facing: CameraFacing) {
        self.facing = facing;
    }

    pub fn exercise(&self) -> Exercise {
        self.state.exercise
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Processes one detector callback.
    pub fn ingest(&mut self, frame: &PoseFrame, now: Instant) -> IngestResult {
        let overlay = skeleton_geometry(frame, self.facing);

        if self.state.exercise == Exercise::None {
            return self.result(overlay, false, None);
        }

        if !self.throttle.should_evaluate(now) {
            return self.result(overlay, false, None);
        }

        if !is_pose_valid(frame, self.state.exercise.required_landmarks()) {
            self.state = mark_undetected(std::mem::take(&mut self.state));
            return self.result(overlay, false, None);
        }

        let outcome = classify_frame(frame, std::mem::take(&mut self.state), self.revert_delay);
        self.state = outcome.state;
        self.result(overlay, true, outcome.revert)
    }

    /// Applies a fired feedback-revert timer; stale tokens no-op.
    pub fn apply_revert(&mut self, token: u64) {
        self.state = revert_feedback(std::mem::take(&mut self.state), token);
    }

    fn result(
        &self,
        overlay: SkeletonGeometry,
        evaluated: bool,
        revert: Option<RevertHandle>,
    ) -> IngestResult {
        IngestResult {
            output: FrameOutput {
                overlay,
                feedback: self.state.feedback.clone(),
                good_reps: self.state.good_reps,
                bad_reps: self.state.bad_reps,
                evaluated,
            },
            revert,
        }
    }
}
