use crate::common::landmark::{BodyLandmark, Landmark};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Number of entries in the standard body-pose topology.
pub const LANDMARK_COUNT: usize = 33;

/// One detector callback's worth of landmarks.
///
/// A slot is `None` when the detector could not resolve that joint in the
/// current image. The frame owns its landmark storage, so retaining a clone
/// across callbacks never aliases the producer's reusable buffer.
#[derive(Debug, Clone)]
pub struct PoseFrame {
    landmarks: [Option<Landmark>; LANDMARK_COUNT],
    width: u32,
    height: u32,
    captured_at: DateTime<Utc>,
    frame_id: Uuid,
}

impl PoseFrame {
    pub fn new(
        landmarks: [Option<Landmark>; LANDMARK_COUNT],
        width: u32,
        height: u32,
        captured_at: DateTime<Utc>,
        frame_id: Uuid,
    ) -> Self {
        Self {
            landmarks,
            width,
            height,
            captured_at,
            frame_id,
        }
    }

    /// Builds a frame from sparse `(index, x, y)` entries, every other slot
    /// left unresolved.
    pub fn from_points(points: &[(usize, f32, f32)], width: u32, height: u32) -> Self {
        let mut landmarks = [None; LANDMARK_COUNT];
        for &(index, x, y) in points {
            if index < LANDMARK_COUNT {
                landmarks[index] = Some(Landmark::new(x, y, 0.0));
            }
        }
        Self::new(landmarks, width, height, Utc::now(), Uuid::new_v4())
    }

    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.landmarks.get(index).copied().flatten()
    }

    pub fn landmark(&self, joint: BodyLandmark) -> Option<Landmark> {
        self.get(joint.index())
    }

    pub fn landmarks(&self) -> &[Option<Landmark>; LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn frame_id(&self) -> Uuid {
        self.frame_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_slots_read_as_none() {
        let frame = PoseFrame::from_points(&[(11, 0.4, 0.2), (12, 0.6, 0.2)], 640, 480);
        assert!(frame.landmark(BodyLandmark::LeftShoulder).is_some());
        assert!(frame.landmark(BodyLandmark::LeftKnee).is_none());
        assert!(frame.get(LANDMARK_COUNT + 5).is_none());
    }

    #[test]
    fn cloning_frame_copies_landmark_storage() {
        let f1 = PoseFrame::from_points(&[(0, 0.5, 0.5)], 640, 480);
        let mut f2 = f1.clone();
        f2.landmarks[0] = None;
        assert!(f1.get(0).is_some());
    }
}
