//! Finger curvature model.
//!
//! The bend of a joint is measured as the deviation from a straight line through the joint and its
//! two neighboring landmarks: `π - angle(prev - joint, next - joint)`. A straight joint has a
//! curvature of 0, a joint folded back onto itself has a curvature of π.
//!
//! A finger's curvature is the sum over its three joints (see [`Finger::joints`]). For the lowest
//! joint of every finger, the wrist is used as the previous neighbor, so that the bend is measured
//! relative to the palm.

use std::f32::consts::{FRAC_PI_2, PI};

use nalgebra::Vector3;

use crate::{
    error::{Error, Result},
    landmark::{Finger, HandLandmarks, LandmarkIdx},
};

/// Total curvature (in radians) above which a finger counts as closed.
pub const CLOSED_THRESHOLD: f32 = FRAC_PI_2;

/// Computes the angle between `u` and `v` in radians, in range `0.0..=π`.
///
/// Returns [`None`] if either vector has zero length.
pub fn angle_between(u: &Vector3<f32>, v: &Vector3<f32>) -> Option<f32> {
    let norms = u.norm() * v.norm();
    if norms == 0.0 || !norms.is_finite() {
        return None;
    }

    // Rounding can push the cosine of (anti-)parallel vectors slightly past ±1.
    let cos = (u.dot(v) / norms).clamp(-1.0, 1.0);
    Some(cos.acos())
}

/// Returns the landmarks before and after `joint` that determine its bend.
///
/// This is the landmark preceding and following `joint`, except for the first joint of a finger,
/// whose preceding landmark is replaced by the wrist.
///
/// # Panics
///
/// Panics if `joint` is the wrist or a fingertip, since those have no two neighbors on the same
/// finger.
pub fn joint_neighbors(joint: LandmarkIdx) -> (LandmarkIdx, LandmarkIdx) {
    let j = joint as usize;
    assert!(
        j != 0 && j % 4 != 0,
        "{joint:?} is not an interior finger joint"
    );

    let prev = if (j - 1) % 4 == 0 {
        LandmarkIdx::Wrist
    } else {
        LandmarkIdx::ALL[j - 1]
    };
    (prev, LandmarkIdx::ALL[j + 1])
}

/// Computes the curvature at a single finger joint, in range `0.0..=π`.
///
/// Returns [`Error::DegenerateGeometry`] if the joint coincides with one of its neighbors.
///
/// # Panics
///
/// Panics if `joint` is the wrist or a fingertip (see [`joint_neighbors`]).
pub fn joint_curvature(hand: &HandLandmarks, joint: LandmarkIdx) -> Result<f32> {
    let (prev, next) = joint_neighbors(joint);
    let pos = hand.position(joint);
    let u = hand.position(prev) - pos;
    let v = hand.position(next) - pos;

    let angle = angle_between(&u, &v).ok_or(Error::DegenerateGeometry { joint })?;
    Ok(PI - angle)
}

/// Computes the total curvature of a finger by summing the curvature of its joints.
pub fn finger_curvature(hand: &HandLandmarks, finger: Finger) -> Result<f32> {
    finger
        .joints()
        .into_iter()
        .map(|joint| joint_curvature(hand, joint))
        .sum()
}

/// Returns whether a finger with the given total curvature is closed.
///
/// A curvature of exactly [`CLOSED_THRESHOLD`] still counts as open.
#[inline]
pub fn is_closed(curvature: f32) -> bool {
    curvature > CLOSED_THRESHOLD
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    use crate::{gesture::FingerStates, synthetic};

    use super::*;

    #[test]
    fn angles() {
        let x = Vector3::x();
        let y = Vector3::y();
        assert_relative_eq!(angle_between(&x, &y).unwrap(), FRAC_PI_2);
        assert_relative_eq!(angle_between(&x, &x).unwrap(), 0.0);
        assert_relative_eq!(angle_between(&x, &-x).unwrap(), PI);
        assert_relative_eq!(
            angle_between(&x, &Vector3::new(1.0, 1.0, 0.0)).unwrap(),
            FRAC_PI_4,
            epsilon = 1e-6
        );
        // Scale doesn't matter.
        assert_relative_eq!(
            angle_between(&(x * 0.001), &(y * 300.0)).unwrap(),
            FRAC_PI_2
        );

        assert_eq!(angle_between(&Vector3::zeros(), &y), None);
        assert_eq!(angle_between(&x, &Vector3::zeros()), None);
    }

    #[test]
    fn nearly_parallel_is_not_nan() {
        let u = Vector3::new(0.1, 0.2, 0.3);
        let v = u * 3.0;
        let angle = angle_between(&u, &v).unwrap();
        assert!(!angle.is_nan());
        assert!(angle >= 0.0);

        let angle = angle_between(&u, &-v).unwrap();
        assert!(!angle.is_nan());
        assert!(angle <= PI);
    }

    #[test]
    fn neighbors() {
        use LandmarkIdx::*;

        assert_eq!(joint_neighbors(ThumbCmc), (Wrist, ThumbMcp));
        assert_eq!(joint_neighbors(ThumbMcp), (ThumbCmc, ThumbIp));
        assert_eq!(joint_neighbors(ThumbIp), (ThumbMcp, ThumbTip));
        assert_eq!(joint_neighbors(IndexFingerMcp), (Wrist, IndexFingerPip));
        assert_eq!(
            joint_neighbors(MiddleFingerPip),
            (MiddleFingerMcp, MiddleFingerDip)
        );
        assert_eq!(joint_neighbors(PinkyMcp), (Wrist, PinkyPip));
        assert_eq!(joint_neighbors(PinkyDip), (PinkyPip, PinkyTip));
    }

    #[test]
    #[should_panic]
    fn wrist_has_no_neighbors() {
        joint_neighbors(LandmarkIdx::Wrist);
    }

    #[test]
    #[should_panic]
    fn tip_has_no_neighbors() {
        joint_neighbors(LandmarkIdx::RingFingerTip);
    }

    #[test]
    #[should_panic = "is not an interior finger joint"]
    fn tip_has_no_curvature() {
        let hand = synthetic::hand(FingerStates::ALL_OPEN);
        let _ = joint_curvature(&hand, LandmarkIdx::ThumbTip);
    }

    #[test]
    fn threshold() {
        assert!(!is_closed(CLOSED_THRESHOLD));
        assert!(is_closed(CLOSED_THRESHOLD + 1e-4));
        assert!(!is_closed(CLOSED_THRESHOLD - 1e-4));
        assert!(!is_closed(0.0));
        assert!(is_closed(PI));
    }

    #[test]
    fn straight_and_curled_fingers() {
        let open = synthetic::hand(FingerStates::ALL_OPEN);
        let closed = synthetic::hand(FingerStates::ALL_CLOSED);

        for finger in Finger::ALL {
            for joint in finger.joints() {
                assert_relative_eq!(
                    joint_curvature(&open, joint).unwrap(),
                    0.0,
                    epsilon = 1e-2
                );
                assert_relative_eq!(
                    joint_curvature(&closed, joint).unwrap(),
                    FRAC_PI_2,
                    epsilon = 1e-3
                );
            }

            let c = finger_curvature(&open, finger).unwrap();
            assert!(!is_closed(c), "{finger:?}: {c}");
            let c = finger_curvature(&closed, finger).unwrap();
            assert!(is_closed(c), "{finger:?}: {c}");
        }
    }

    #[test]
    fn first_joint_is_measured_against_wrist() {
        use LandmarkIdx::*;

        // Put the thumb tip (the landmark preceding the index MCP) at a right angle to the index
        // finger. The MCP joint must still be measured against the wrist, and so stay straight.
        let mut positions = synthetic::positions(FingerStates::ALL_OPEN);
        let mcp = positions[IndexFingerMcp as usize];
        positions[ThumbTip as usize] = [mcp[0], mcp[1], mcp[2] + 0.1];
        let hand = HandLandmarks::try_from(&positions[..]).unwrap();
        assert_relative_eq!(
            joint_curvature(&hand, IndexFingerMcp).unwrap(),
            0.0,
            epsilon = 1e-2
        );

        // Bend the index finger by 90° at the MCP, relative to the palm.
        positions[IndexFingerPip as usize] = [mcp[0], mcp[1], mcp[2] - 0.1];
        positions[IndexFingerDip as usize] = [mcp[0], mcp[1], mcp[2] - 0.2];
        positions[IndexFingerTip as usize] = [mcp[0], mcp[1], mcp[2] - 0.3];
        let hand = HandLandmarks::try_from(&positions[..]).unwrap();
        assert_relative_eq!(
            joint_curvature(&hand, IndexFingerMcp).unwrap(),
            FRAC_PI_2,
            epsilon = 1e-3
        );
    }

    #[test]
    fn degenerate_joint() {
        let mut positions = synthetic::positions(FingerStates::ALL_OPEN);
        positions[LandmarkIdx::MiddleFingerDip as usize] =
            positions[LandmarkIdx::MiddleFingerPip as usize];
        let hand = HandLandmarks::try_from(&positions[..]).unwrap();

        assert_eq!(
            joint_curvature(&hand, LandmarkIdx::MiddleFingerPip),
            Err(Error::DegenerateGeometry {
                joint: LandmarkIdx::MiddleFingerPip
            })
        );
        assert!(finger_curvature(&hand, Finger::Middle).is_err());
        assert!(finger_curvature(&hand, Finger::Index).is_ok());
    }

    #[test]
    fn curvature_bounds() {
        let mut rng = fastrand::Rng::with_seed(0x5EED);
        for _ in 0..1000 {
            let positions = (0..HandLandmarks::NUM_LANDMARKS)
                .map(|_| [rng.f32(), rng.f32(), rng.f32() - 0.5])
                .collect::<Vec<_>>();
            let hand = HandLandmarks::try_from(&positions[..]).unwrap();
            for finger in Finger::ALL {
                for joint in finger.joints() {
                    let c = joint_curvature(&hand, joint).unwrap();
                    assert!((0.0..=PI).contains(&c), "{joint:?}: {c}");
                }
            }
        }
    }
}
