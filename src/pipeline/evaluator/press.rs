use crate::common::landmark::BodyLandmark::*;
use crate::common::PoseFrame;
use crate::pipeline::evaluator::{joint, FormDefect};
use crate::pipeline::geometry::{flare_angle, joint_angle};

/// Degrees of elbow flare off the horizontal before the elbows count as
/// drifting behind the shoulder line.
const FLARE_LIMIT: f32 = 45.0;

/// Left and right torso-shoulder-elbow angle (hip-shoulder-elbow), degrees.
pub(crate) fn shoulder_angles(frame: &PoseFrame) -> (f32, f32) {
    let left = joint_angle(
        joint(frame, LeftHip),
        joint(frame, LeftShoulder),
        joint(frame, LeftElbow),
    );
    let right = joint_angle(
        joint(frame, RightHip),
        joint(frame, RightShoulder),
        joint(frame, RightElbow),
    );
    (left, right)
}

pub fn evaluate(frame: &PoseFrame) -> Vec<FormDefect> {
    let mut defects = Vec::new();

    let (left, right) = shoulder_angles(frame);
    if left < 50.0 && right < 50.0 {
        defects.push(FormDefect::ArmsFullyUp);
    }
    if left > 90.0 && right > 90.0 {
        defects.push(FormDefect::WeightDropping);
    }

    let left_flare = flare_angle(joint(frame, LeftShoulder), joint(frame, LeftElbow));
    let right_flare = flare_angle(joint(frame, RightShoulder), joint(frame, RightElbow));
    if left_flare > FLARE_LIMIT || right_flare > FLARE_LIMIT {
        defects.push(FormDefect::ElbowsFlared);
    }

    defects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::evaluator::fixtures;

    #[test]
    fn rack_position_is_clean() {
        assert!(evaluate(&fixtures::press_rack()).is_empty());
    }

    #[test]
    fn lockout_shoulder_angles_cross_press_threshold() {
        let (left, right) = shoulder_angles(&fixtures::press_lockout());
        assert!(left > 160.0 && right > 160.0);
    }

    #[test]
    fn tucked_elbows_flag_arms_fully_up() {
        // Elbows pulled almost against the torso drop the shoulder angle
        // below fifty degrees.
        let frame = PoseFrame::from_points(
            &[
                (11, 0.40, 0.30),
                (12, 0.60, 0.30),
                (13, 0.44, 0.48),
                (14, 0.56, 0.48),
                (23, 0.40, 0.60),
                (24, 0.60, 0.60),
            ],
            640,
            480,
        );
        let defects = evaluate(&frame);
        assert!(defects.contains(&FormDefect::ArmsFullyUp));
    }

    #[test]
    fn elbows_out_wide_flag_weight_dropping() {
        // Elbows lifted out level with the shoulders.
        let frame = PoseFrame::from_points(
            &[
                (11, 0.40, 0.30),
                (12, 0.60, 0.30),
                (13, 0.20, 0.28),
                (14, 0.80, 0.28),
                (23, 0.40, 0.60),
                (24, 0.60, 0.60),
            ],
            640,
            480,
        );
        let defects = evaluate(&frame);
        assert!(defects.contains(&FormDefect::WeightDropping));
        assert!(!defects.contains(&FormDefect::ElbowsFlared));
    }

    #[test]
    fn steep_elbow_vector_flags_flare() {
        // Elbow well above and barely ahead of the shoulder: steep vector.
        let frame = PoseFrame::from_points(
            &[
                (11, 0.40, 0.30),
                (12, 0.60, 0.30),
                (13, 0.45, 0.20),
                (14, 0.45, 0.35),
                (23, 0.40, 0.60),
                (24, 0.60, 0.60),
            ],
            640,
            480,
        );
        assert!(evaluate(&frame).contains(&FormDefect::ElbowsFlared));
    }
}
