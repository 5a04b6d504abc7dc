//! Hand landmarks as produced by a hand-tracking network.

use nalgebra::Vector3;

use crate::error::{Error, Result};

type Position = [f32; 3];

/// A landmark in 3D space.
///
/// X and Y are normalized to the input image (`0.0..=1.0` inside the image, Y pointing down), Z is
/// a relative depth without a fixed unit.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Landmark {
    pos: Position,
    visibility: Option<f32>,
    presence: Option<f32>,
}

impl Landmark {
    pub fn new(position: Position) -> Self {
        Self {
            pos: position,
            visibility: None,
            presence: None,
        }
    }

    pub fn with_visibility(self, visibility: f32) -> Self {
        Self {
            visibility: Some(visibility),
            ..self
        }
    }

    pub fn with_presence(self, presence: f32) -> Self {
        Self {
            presence: Some(presence),
            ..self
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Returns the position as a vector, for geometric computations.
    #[inline]
    pub fn vector(&self) -> Vector3<f32> {
        Vector3::from(self.pos)
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos[1]
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.pos[2]
    }

    /// The detector's visibility estimate, if it provided one.
    pub fn visibility(&self) -> Option<f32> {
        self.visibility
    }

    /// The detector's presence estimate, if it provided one.
    pub fn presence(&self) -> Option<f32> {
        self.presence
    }
}

impl From<Position> for Landmark {
    fn from(position: Position) -> Self {
        Self::new(position)
    }
}

/// The full set of landmarks of one detected hand.
///
/// A [`HandLandmarks`] always contains exactly [`HandLandmarks::NUM_LANDMARKS`] landmarks with
/// finite coordinates, indexed by [`LandmarkIdx`].
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    landmarks: [Landmark; Self::NUM_LANDMARKS],
}

impl HandLandmarks {
    pub const NUM_LANDMARKS: usize = 21;

    /// Validates and collects the landmarks of one hand.
    ///
    /// Returns [`Error::InvalidInput`] if there are not exactly 21 landmarks, or if any coordinate
    /// is not finite.
    pub fn new<I: IntoIterator<Item = Landmark>>(landmarks: I) -> Result<Self> {
        let landmarks = landmarks.into_iter().collect::<Vec<_>>();
        let len = landmarks.len();
        let landmarks: [Landmark; Self::NUM_LANDMARKS] =
            landmarks.try_into().map_err(|_| {
                Error::invalid_input(format!(
                    "expected {} landmarks, got {len}",
                    Self::NUM_LANDMARKS
                ))
            })?;

        for (index, lm) in landmarks.iter().enumerate() {
            if let Some(coord) = lm.pos.iter().find(|c| !c.is_finite()) {
                return Err(Error::invalid_input(format!(
                    "landmark {index} has non-finite coordinate {coord}"
                )));
            }
        }

        Ok(Self { landmarks })
    }

    /// Wraps positions that are known to be finite.
    pub(crate) fn from_finite(positions: [Position; Self::NUM_LANDMARKS]) -> Self {
        debug_assert!(positions.iter().flatten().all(|c| c.is_finite()));
        Self {
            landmarks: positions.map(Landmark::new),
        }
    }

    /// Builds a hand from loosely typed coordinate lists, eg. deserialized detector output.
    ///
    /// Every entry must start with the three coordinates `x`, `y` and `z`, optionally followed by
    /// the detector's visibility and presence estimates, in that order.
    pub fn from_coordinates<C: AsRef<[f32]>>(coordinates: &[C]) -> Result<Self> {
        let landmarks = coordinates
            .iter()
            .enumerate()
            .map(|(index, values)| match values.as_ref() {
                &[x, y, z] => Ok(Landmark::new([x, y, z])),
                &[x, y, z, visibility] => Ok(Landmark::new([x, y, z]).with_visibility(visibility)),
                &[x, y, z, visibility, presence] => Ok(Landmark::new([x, y, z])
                    .with_visibility(visibility)
                    .with_presence(presence)),
                other => Err(Error::invalid_input(format!(
                    "landmark {index} has {} values, expected x, y, z[, visibility[, presence]]",
                    other.len()
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(landmarks)
    }

    #[inline]
    pub fn get(&self, index: LandmarkIdx) -> Landmark {
        self.landmarks[index as usize]
    }

    /// Returns the position of a landmark as a vector.
    #[inline]
    pub fn position(&self, index: LandmarkIdx) -> Vector3<f32> {
        self.get(index).vector()
    }

    pub fn iter(&self) -> impl Iterator<Item = Landmark> + Clone + '_ {
        self.landmarks.iter().copied()
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.landmarks
    }
}

impl TryFrom<Vec<Landmark>> for HandLandmarks {
    type Error = Error;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self> {
        Self::new(landmarks)
    }
}

impl TryFrom<&[Position]> for HandLandmarks {
    type Error = Error;

    fn try_from(positions: &[Position]) -> Result<Self> {
        Self::new(positions.iter().copied().map(Landmark::new))
    }
}

/// Names for the hand pose landmarks.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **IP**: Interphalangeal joint of the thumb.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl LandmarkIdx {
    /// All landmark names, in index order.
    pub const ALL: [Self; HandLandmarks::NUM_LANDMARKS] = {
        use LandmarkIdx::*;
        [
            Wrist,
            ThumbCmc,
            ThumbMcp,
            ThumbIp,
            ThumbTip,
            IndexFingerMcp,
            IndexFingerPip,
            IndexFingerDip,
            IndexFingerTip,
            MiddleFingerMcp,
            MiddleFingerPip,
            MiddleFingerDip,
            MiddleFingerTip,
            RingFingerMcp,
            RingFingerPip,
            RingFingerDip,
            RingFingerTip,
            PinkyMcp,
            PinkyPip,
            PinkyDip,
            PinkyTip,
        ]
    };

    /// Returns the landmark with the given index, or [`None`] if `index` is 21 or more.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the finger this landmark belongs to ([`None`] for the wrist).
    pub fn finger(self) -> Option<Finger> {
        match self as usize {
            0 => None,
            i => Finger::ALL.get((i - 1) / 4).copied(),
        }
    }
}

/// The five fingers of a hand, ordered from thumb to pinky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Self; 5] = [
        Self::Thumb,
        Self::Index,
        Self::Middle,
        Self::Ring,
        Self::Pinky,
    ];

    /// The position of this finger in thumb-to-pinky order.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The lowest landmark of the finger (CMC for the thumb, MCP for the others).
    pub fn base(self) -> LandmarkIdx {
        LandmarkIdx::ALL[4 * self.index() + 1]
    }

    pub fn tip(self) -> LandmarkIdx {
        LandmarkIdx::ALL[4 * self.index() + 4]
    }

    /// The landmarks at which this finger can bend.
    ///
    /// These are the three landmarks between the wrist and the fingertip, ie. the landmarks with
    /// indices `4f+1` through `4f+3` for finger `f`.
    pub fn joints(self) -> [LandmarkIdx; 3] {
        let first = 4 * self.index() + 1;
        [
            LandmarkIdx::ALL[first],
            LandmarkIdx::ALL[first + 1],
            LandmarkIdx::ALL[first + 2],
        ]
    }
}
