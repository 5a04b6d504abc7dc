//! Static gesture catalogue and lookup.

use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    landmark::Finger,
};

/// Open/closed state of all five fingers of a hand, ordered from thumb to pinky.
///
/// `true` means that the finger is closed (curled), `false` means that it is open (extended).
///
/// Displays as a 5-character string with one `C` (closed) or `O` (open) per finger, eg. `OCCCO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FingerStates([bool; 5]);

impl FingerStates {
    pub const ALL_OPEN: Self = Self([false; 5]);
    pub const ALL_CLOSED: Self = Self([true; 5]);

    /// Creates a [`FingerStates`] from the closed-ness of each finger, thumb first.
    pub const fn new(closed: [bool; 5]) -> Self {
        Self(closed)
    }

    /// Computes the state of every finger with a closure that returns whether it is closed.
    pub fn from_fn(mut is_closed: impl FnMut(Finger) -> bool) -> Self {
        Self(Finger::ALL.map(&mut is_closed))
    }

    /// Tries the same as [`FingerStates::from_fn`], but with a fallible closure.
    pub fn try_from_fn<E>(
        mut is_closed: impl FnMut(Finger) -> Result<bool, E>,
    ) -> Result<Self, E> {
        let mut closed = [false; 5];
        for finger in Finger::ALL {
            closed[finger.index()] = is_closed(finger)?;
        }
        Ok(Self(closed))
    }

    #[inline]
    pub fn is_closed(&self, finger: Finger) -> bool {
        self.0[finger.index()]
    }

    #[inline]
    pub fn is_open(&self, finger: Finger) -> bool {
        !self.is_closed(finger)
    }

    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }
}

impl fmt::Display for FingerStates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for closed in self.0 {
            f.write_str(if closed { "C" } else { "O" })?;
        }
        Ok(())
    }
}

impl FromStr for FingerStates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut closed = [false; 5];
        let mut len = 0;
        for c in s.chars() {
            let slot = closed.get_mut(len).ok_or_else(|| {
                Error::invalid_input(format!("finger state string '{s}' is longer than 5"))
            })?;
            *slot = match c {
                'C' => true,
                'O' => false,
                _ => {
                    return Err(Error::invalid_input(format!(
                        "invalid finger state '{c}' in '{s}' (expected 'C' or 'O')"
                    )))
                }
            };
            len += 1;
        }

        if len != closed.len() {
            return Err(Error::invalid_input(format!(
                "finger state string '{s}' must have 5 characters"
            )));
        }
        Ok(Self(closed))
    }
}

/// A named static hand gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// All fingers extended.
    Open,
    /// Fist.
    Closed,
    /// Index and middle finger extended.
    Peace,
    ThumbsUp,
    /// Only the index finger extended.
    Pointing,
    /// Index finger and pinky extended.
    Rock,
    /// Index, middle and ring finger extended.
    Salute,
}

impl Gesture {
    pub fn name(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Peace => "PEACE",
            Self::ThumbsUp => "THUMBS_UP",
            Self::Pointing => "POINTING",
            Self::Rock => "ROCK",
            Self::Salute => "SALUTE",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const C: bool = true;
const O: bool = false;

/// The gesture catalogue, in lookup order.
///
/// Every entry has a distinct [`FingerStates`].
pub const GESTURES: &[(Gesture, FingerStates)] = &[
    (Gesture::Open, FingerStates::new([O, O, O, O, O])),
    (Gesture::Closed, FingerStates::new([C, C, C, C, C])),
    (Gesture::Peace, FingerStates::new([C, O, O, C, C])),
    (Gesture::ThumbsUp, FingerStates::new([O, C, C, C, C])),
    (Gesture::Pointing, FingerStates::new([C, O, C, C, C])),
    (Gesture::Rock, FingerStates::new([C, O, C, C, O])),
    (Gesture::Salute, FingerStates::new([C, O, O, O, C])),
];

/// Result of classifying a hand pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureLabel {
    /// The pose matches an entry in [`GESTURES`].
    Gesture(Gesture),
    /// The pose matches no known gesture. Displays as the raw finger states.
    Unrecognized(FingerStates),
}

impl GestureLabel {
    /// Returns the recognized gesture, if any.
    pub fn gesture(&self) -> Option<Gesture> {
        match self {
            Self::Gesture(g) => Some(*g),
            Self::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gesture(g) => fmt::Display::fmt(g, f),
            Self::Unrecognized(states) => fmt::Display::fmt(states, f),
        }
    }
}

/// Looks up the gesture whose finger states match `states` exactly.
///
/// Always succeeds: poses that aren't in [`GESTURES`] yield [`GestureLabel::Unrecognized`].
pub fn classify(states: FingerStates) -> GestureLabel {
    GESTURES
        .iter()
        .find(|(_, s)| *s == states)
        .map_or(GestureLabel::Unrecognized(states), |(g, _)| {
            GestureLabel::Gesture(*g)
        })
}
