use crate::common::landmark::BodyLandmark::*;
use crate::common::PoseFrame;
use crate::pipeline::evaluator::{joint, FormDefect};
use crate::pipeline::geometry::joint_angle;

/// Maximum lateral drift between shoulder and elbow in normalized units
/// before the elbow counts as swinging.
const ELBOW_DRIFT_LIMIT: f32 = 0.18;

/// Left and right elbow angle (shoulder-elbow-wrist), degrees.
pub(crate) fn elbow_angles(frame: &PoseFrame) -> (f32, f32) {
    let left = joint_angle(
        joint(frame, LeftShoulder),
        joint(frame, LeftElbow),
        joint(frame, LeftWrist),
    );
    let right = joint_angle(
        joint(frame, RightShoulder),
        joint(frame, RightElbow),
        joint(frame, RightWrist),
    );
    (left, right)
}

pub fn evaluate(frame: &PoseFrame) -> Vec<FormDefect> {
    let mut defects = Vec::new();

    let (left, right) = elbow_angles(frame);
    if left > 160.0 && right > 160.0 {
        defects.push(FormDefect::LoweringTooFast);
    }
    if left < 30.0 && right < 30.0 {
        defects.push(FormDefect::FullyContracted);
    }

    let left_drift = (joint(frame, LeftShoulder).x - joint(frame, LeftElbow).x).abs();
    let right_drift = (joint(frame, RightShoulder).x - joint(frame, RightElbow).x).abs();
    if left_drift > ELBOW_DRIFT_LIMIT || right_drift > ELBOW_DRIFT_LIMIT {
        defects.push(FormDefect::ElbowDrift);
    }

    defects
}
