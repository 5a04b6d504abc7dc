//! Gesture estimation for a single hand.

use nalgebra::Vector3;

use crate::{
    curvature::{self, finger_curvature},
    error::{Error, Result},
    gesture::{self, FingerStates, GestureLabel},
    landmark::{Finger, HandLandmarks, LandmarkIdx},
};

/// Classifies the pose of one hand.
///
/// The finger curvatures and open/closed states are computed once, when the estimator is created,
/// and don't change afterwards. Creating an estimator has no side effects and depends only on the
/// landmarks, so hands can be classified independently from any thread.
#[derive(Debug, Clone)]
pub struct GestureEstimator<'a> {
    landmarks: &'a HandLandmarks,
    curvatures: [f32; 5],
    states: FingerStates,
}

impl<'a> GestureEstimator<'a> {
    /// Computes the finger states of `landmarks`.
    ///
    /// Fails with [`Error::DegenerateGeometry`] if any finger joint coincides with one of its
    /// neighboring landmarks. No partial result is produced in that case.
    ///
    /// [`Error::DegenerateGeometry`]: crate::Error::DegenerateGeometry
    pub fn new(landmarks: &'a HandLandmarks) -> Result<Self> {
        let mut curvatures = [0.0; 5];
        let states = FingerStates::try_from_fn(|finger| {
            let c = finger_curvature(landmarks, finger)?;
            curvatures[finger.index()] = c;
            Ok::<_, Error>(curvature::is_closed(c))
        })?;

        Ok(Self {
            landmarks,
            curvatures,
            states,
        })
    }

    pub fn landmarks(&self) -> &'a HandLandmarks {
        self.landmarks
    }

    pub fn finger_states(&self) -> FingerStates {
        self.states
    }

    /// Returns the total curvature of `finger` in radians.
    pub fn finger_curvature(&self, finger: Finger) -> f32 {
        self.curvatures[finger.index()]
    }

    /// Returns the gesture shown by the hand, or the raw finger states if it isn't a known one.
    pub fn gesture(&self) -> GestureLabel {
        gesture::classify(self.states)
    }

    /// Computes the direction the index finger points in, in the image plane.
    ///
    /// The angle is measured from the index finger's base to its tip, in radians in range
    /// `-π..=π`, with `0` pointing along the image's X axis. Since image Y points down, positive
    /// angles point downwards.
    pub fn pointing_direction(&self) -> f32 {
        let base = self.landmarks.get(LandmarkIdx::IndexFingerMcp);
        let tip = self.landmarks.get(LandmarkIdx::IndexFingerTip);
        (tip.y() - base.y()).atan2(tip.x() - base.x())
    }

    /// Returns the position of the index fingertip.
    pub fn pointing_fingertip(&self) -> Vector3<f32> {
        self.landmarks.position(LandmarkIdx::IndexFingerTip)
    }
}

/// Classifies the gesture shown by `landmarks`.
///
/// Shorthand for creating a [`GestureEstimator`] and calling [`GestureEstimator::gesture`].
pub fn estimate(landmarks: &HandLandmarks) -> Result<GestureLabel> {
    Ok(GestureEstimator::new(landmarks)?.gesture())
}
