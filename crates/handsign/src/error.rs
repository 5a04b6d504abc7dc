//! Error type shared by the landmark and estimation code.

use std::fmt;

use crate::landmark::LandmarkIdx;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The landmark set does not describe a full hand.
    ///
    /// Raised for a landmark count other than 21, for landmarks missing a coordinate, and for
    /// non-finite coordinates.
    InvalidInput { reason: String },
    /// Two landmarks around `joint` coincide, so the angle at that joint is undefined.
    DegenerateGeometry { joint: LandmarkIdx },
}

impl Error {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid hand landmarks: {reason}"),
            Self::DegenerateGeometry { joint } => write!(
                f,
                "degenerate geometry at joint {joint:?} ({}): neighboring landmarks coincide",
                *joint as usize
            ),
        }
    }
}

impl std::error::Error for Error {}
