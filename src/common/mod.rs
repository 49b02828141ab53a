pub mod exercise;
pub mod frame;
pub mod landmark;

pub use exercise::{CameraFacing, Exercise};
pub use frame::{PoseFrame, LANDMARK_COUNT};
pub use landmark::{BodyLandmark, Landmark};
