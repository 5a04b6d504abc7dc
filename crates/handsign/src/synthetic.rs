//! Synthetic hand poses.
//!
//! Builds idealized landmark sets in which every finger is either perfectly straight or curled by
//! 90° at each of its joints. Useful as test fixtures and for checking a classifier setup without a
//! camera.

use nalgebra::{Point3, Similarity3, Vector3};

use crate::{
    gesture::FingerStates,
    landmark::{Finger, HandLandmarks},
};

const WRIST: [f32; 3] = [0.5, 0.9, 0.0];

/// Angle of each finger relative to the image's up direction, thumb first.
const FAN_DEGREES: [f32; 5] = [-60.0, -25.0, -5.0, 15.0, 35.0];

/// Distance from the wrist to the base of each finger.
const BASE_DISTANCE: f32 = 0.15;
const SEGMENT_LENGTH: f32 = 0.05;

/// Computes landmark positions for a hand whose fingers are curled according to `states`.
///
/// The hand is upright in the image plane (fingers pointing towards negative Y). Closed fingers
/// curl away from the camera (towards negative Z) and back towards the palm.
pub fn positions(states: FingerStates) -> [[f32; 3]; HandLandmarks::NUM_LANDMARKS] {
    let wrist = Vector3::from(WRIST);
    let mut out = [[0.0; 3]; HandLandmarks::NUM_LANDMARKS];
    out[0] = WRIST;

    for finger in Finger::ALL {
        let angle = FAN_DEGREES[finger.index()].to_radians();
        let dir = Vector3::new(angle.sin(), -angle.cos(), 0.0);
        let steps = if states.is_closed(finger) {
            [-Vector3::z(), -dir, Vector3::z()]
        } else {
            [dir; 3]
        };

        let base = finger.base() as usize;
        let mut pos = wrist + dir * BASE_DISTANCE;
        out[base] = [pos.x, pos.y, pos.z];
        for (i, step) in steps.iter().enumerate() {
            pos += step * SEGMENT_LENGTH;
            out[base + i + 1] = [pos.x, pos.y, pos.z];
        }
    }

    out
}

/// Builds a hand whose fingers are curled according to `states`.
pub fn hand(states: FingerStates) -> HandLandmarks {
    HandLandmarks::from_finite(positions(states))
}

/// Builds a hand like [`hand`], then rotates, scales and moves it with `transform`.
pub fn transformed_hand(states: FingerStates, transform: &Similarity3<f32>) -> HandLandmarks {
    let positions = positions(states).map(|[x, y, z]| {
        let p = transform.transform_point(&Point3::new(x, y, z));
        [p.x, p.y, p.z]
    });
    HandLandmarks::from_finite(positions)
}
