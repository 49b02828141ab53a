use crate::common::landmark::BodyLandmark::*;
use serde::{Deserialize, Serialize};

/// Exercise selected in the surrounding UI. `None` disables classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exercise {
    #[default]
    None,
    Squats,
    BicepCurls,
    ShoulderPress,
}

const SQUAT_LANDMARKS: &[usize] = &[
    LeftEar as usize,
    RightEar as usize,
    LeftShoulder as usize,
    RightShoulder as usize,
    LeftHip as usize,
    RightHip as usize,
    LeftKnee as usize,
    RightKnee as usize,
    LeftAnkle as usize,
    RightAnkle as usize,
];

const CURL_LANDMARKS: &[usize] = &[
    LeftShoulder as usize,
    RightShoulder as usize,
    LeftElbow as usize,
    RightElbow as usize,
    LeftWrist as usize,
    RightWrist as usize,
];

const PRESS_LANDMARKS: &[usize] = &[
    LeftShoulder as usize,
    RightShoulder as usize,
    LeftElbow as usize,
    RightElbow as usize,
    LeftHip as usize,
    RightHip as usize,
];

impl Exercise {
    /// Landmark indices that must be resolved before this exercise's
    /// evaluator may run.
    pub fn required_landmarks(self) -> &'static [usize] {
        match self {
            Exercise::None => &[],
            Exercise::Squats => SQUAT_LANDMARKS,
            Exercise::BicepCurls => CURL_LANDMARKS,
            Exercise::ShoulderPress => PRESS_LANDMARKS,
        }
    }
}

/// Which camera the surrounding UI is capturing from; the front camera
/// mirrors the overlay horizontally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}
