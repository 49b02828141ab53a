//! Angle math over detected landmarks.
//!
//! The detector's y axis grows downward, while the joint-angle math assumes
//! standard Cartesian orientation, so every landmark feeding an angle must
//! pass through [`invert_y`] first. All angle functions are total: degenerate
//! geometry and floating-point domain errors clamp to `0.0` rather than
//! producing NaN.

use crate::common::Landmark;

/// Flips a landmark into y-up coordinates: `y' = 1 - y`, x and z unchanged.
pub fn invert_y(landmark: Landmark) -> Landmark {
    Landmark::new(landmark.x, 1.0 - landmark.y, landmark.z)
}

/// Angle in degrees at vertex `b` between the rays `b->a` and `b->c`,
/// in `[0, 180]`. Coincident points resolve to `0.0`.
pub fn joint_angle(a: Landmark, b: Landmark, c: Landmark) -> f32 {
    let v1 = (a.x - b.x, a.y - b.y);
    let v2 = (c.x - b.x, c.y - b.y);

    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();
    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    let cos = (v1.0 * v2.0 + v1.1 * v2.1) / (mag1 * mag2);
    let degrees = cos.clamp(-1.0, 1.0).acos().to_degrees();
    if degrees.is_nan() {
        0.0
    } else {
        degrees
    }
}

/// Absolute angle in degrees between the shoulder->elbow vector and the
/// horizontal axis, folded to `[0, 90]` so left and right arms measure
/// alike. `0.0` when the two points coincide.
pub fn flare_angle(shoulder: Landmark, elbow: Landmark) -> f32 {
    let dx = elbow.x - shoulder.x;
    let dy = elbow.y - shoulder.y;
    let mag = (dx * dx + dy * dy).sqrt();
    if mag == 0.0 {
        return 0.0;
    }

    let degrees = (dx.abs() / mag).clamp(-1.0, 1.0).acos().to_degrees().abs();
    if degrees.is_nan() {
        0.0
    } else {
        degrees
    }
}
