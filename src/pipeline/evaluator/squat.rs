use crate::common::landmark::BodyLandmark::*;
use crate::common::PoseFrame;
use crate::pipeline::evaluator::{joint, FormDefect};
use crate::pipeline::geometry::joint_angle;

/// Left and right knee angle (hip-knee-ankle), degrees.
pub(crate) fn knee_angles(frame: &PoseFrame) -> (f32, f32) {
    let left = joint_angle(
        joint(frame, LeftHip),
        joint(frame, LeftKnee),
        joint(frame, LeftAnkle),
    );
    let right = joint_angle(
        joint(frame, RightHip),
        joint(frame, RightKnee),
        joint(frame, RightAnkle),
    );
    (left, right)
}

fn torso_angles(frame: &PoseFrame) -> (f32, f32) {
    let left = joint_angle(
        joint(frame, LeftEar),
        joint(frame, LeftShoulder),
        joint(frame, LeftHip),
    );
    let right = joint_angle(
        joint(frame, RightEar),
        joint(frame, RightShoulder),
        joint(frame, RightHip),
    );
    (left, right)
}

/// Knee tracks over the foot when knee and ankle sit on the same side of
/// the hip laterally.
fn knees_track_feet(frame: &PoseFrame) -> bool {
    let sides = [(LeftHip, LeftKnee, LeftAnkle), (RightHip, RightKnee, RightAnkle)];
    sides.iter().all(|&(hip, knee, ankle)| {
        let hip_x = joint(frame, hip).x;
        let knee_offset = joint(frame, knee).x - hip_x;
        let ankle_offset = joint(frame, ankle).x - hip_x;
        knee_offset.signum() == ankle_offset.signum()
    })
}

pub fn evaluate(frame: &PoseFrame) -> Vec<FormDefect> {
    let mut defects = Vec::new();

    let (left_knee, right_knee) = knee_angles(frame);
    if !(left_knee <= 100.0 || right_knee <= 100.0) {
        defects.push(FormDefect::GoDeeper);
    }

    if !knees_track_feet(frame) {
        defects.push(FormDefect::KneesCavingIn);
    }

    let (left_torso, right_torso) = torso_angles(frame);
    if (left_torso + right_torso) / 2.0 < 140.0 {
        defects.push(FormDefect::BackNotUpright);
    }

    defects
}
