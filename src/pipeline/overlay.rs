//! Skeleton overlay geometry.
//!
//! Pure coordinate remap from normalized landmark space to pixel space for
//! the UI's skeleton drawing; independent of the classification logic.

use crate::common::landmark::BodyLandmark::{self, *};
use crate::common::{CameraFacing, PoseFrame};
use serde::Serialize;

/// Bone connections of the 33-point body topology, face and fingertip
/// details omitted.
const SKELETON_EDGES: &[(BodyLandmark, BodyLandmark)] = &[
    // Torso
    (LeftShoulder, RightShoulder),
    (LeftShoulder, LeftHip),
    (RightShoulder, RightHip),
    (LeftHip, RightHip),
    // Arms
    (LeftShoulder, LeftElbow),
    (LeftElbow, LeftWrist),
    (RightShoulder, RightElbow),
    (RightElbow, RightWrist),
    // Legs
    (LeftHip, LeftKnee),
    (LeftKnee, LeftAnkle),
    (RightHip, RightKnee),
    (RightKnee, RightAnkle),
    // Feet
    (LeftAnkle, LeftHeel),
    (LeftHeel, LeftFootIndex),
    (RightAnkle, RightHeel),
    (RightHeel, RightFootIndex),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayPoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlaySegment {
    pub from: OverlayPoint,
    pub to: OverlayPoint,
}

/// Pixel-space points and bone segments for one frame.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkeletonGeometry {
    pub points: Vec<OverlayPoint>,
    pub segments: Vec<OverlaySegment>,
}

/// Remaps every resolved landmark to pixel space, mirroring x for the
/// front camera, and connects the resolved bone pairs.
pub fn skeleton_geometry(frame: &PoseFrame, facing: CameraFacing) -> SkeletonGeometry {
    let width = frame.width() as f32;
    let height = frame.height() as f32;

    let project = |index: usize| -> Option<OverlayPoint> {
        let landmark = frame.get(index)?;
        let x = match facing {
            CameraFacing::Front => (1.0 - landmark.x) * width,
            CameraFacing::Back => landmark.x * width,
        };
        Some(OverlayPoint {
            x,
            y: landmark.y * height,
        })
    };

    let points = (0..crate::common::LANDMARK_COUNT)
        .filter_map(project)
        .collect();

    let segments = SKELETON_EDGES
        .iter()
        .filter_map(|&(a, b)| {
            Some(OverlaySegment {
                from: project(a.index())?,
                to: project(b.index())?,
            })
        })
        .collect();

    SkeletonGeometry { points, segments }
}
