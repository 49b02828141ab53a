use crate::common::PoseFrame;

/// True iff every required landmark index is resolved in the frame.
///
/// This is the sole gate in front of the evaluators, which index landmarks
/// unconditionally; a partially occluded pose must never reach them.
pub fn is_pose_valid(frame: &PoseFrame, required: &[usize]) -> bool {
    required.iter().all(|&index| frame.get(index).is_some())
}
