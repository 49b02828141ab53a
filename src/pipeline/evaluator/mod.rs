//! Per-exercise form evaluators.
//!
//! Each evaluator is a pure function from a full landmark set to a list of
//! form defects, consulted only at the moment a repetition completes. An
//! empty list means good form; the state machine decides good/bad from the
//! defect count, never from the text.

pub mod curl;
pub mod press;
pub mod squat;

use crate::common::landmark::BodyLandmark;
use crate::common::{Exercise, Landmark, PoseFrame};
use crate::pipeline::geometry::invert_y;
use serde::Serialize;
use std::fmt;

/// A single correctable defect observed in a repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormDefect {
    // Squat
    GoDeeper,
    KneesCavingIn,
    BackNotUpright,
    // Bicep curl
    LoweringTooFast,
    FullyContracted,
    ElbowDrift,
    // Shoulder press
    ArmsFullyUp,
    WeightDropping,
    ElbowsFlared,
}

impl fmt::Display for FormDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FormDefect::GoDeeper => "Go deeper",
            FormDefect::KneesCavingIn => "Push knees out more",
            FormDefect::BackNotUpright => "Keep your back upright",
            FormDefect::LoweringTooFast => "Lower weight slowly",
            FormDefect::FullyContracted => "Fully contracted",
            FormDefect::ElbowDrift => "Keep elbow static",
            FormDefect::ArmsFullyUp => "Arms fully up",
            FormDefect::WeightDropping => "Control weight down",
            FormDefect::ElbowsFlared => "Keep elbows slightly forward",
        };
        f.write_str(text)
    }
}

/// Runs the evaluator matching the exercise; `None` reports nothing.
pub fn evaluate(exercise: Exercise, frame: &PoseFrame) -> Vec<FormDefect> {
    match exercise {
        Exercise::None => Vec::new(),
        Exercise::Squats => squat::evaluate(frame),
        Exercise::BicepCurls => curl::evaluate(frame),
        Exercise::ShoulderPress => press::evaluate(frame),
    }
}

/// Fetches a joint in y-up coordinates. Callers are expected to have passed
/// the validity gate; an unresolved joint degrades to the origin, which the
/// angle math clamps to zero rather than faulting.
pub(crate) fn joint(frame: &PoseFrame, landmark: BodyLandmark) -> Landmark {
    invert_y(frame.landmark(landmark).unwrap_or_default())
}
