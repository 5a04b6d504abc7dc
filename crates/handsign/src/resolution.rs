//! Types for representing image resolutions.

use std::{fmt, str::FromStr};

use anyhow::{bail, Context};

/// Resolution (`width x height`) of an image, window, camera, or display.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// 1080p resolution: `1920x1080`
    pub const RES_1080P: Self = Self {
        width: 1920,
        height: 1080,
    };

    /// 720p resolution: `1280x720`
    pub const RES_720P: Self = Self {
        width: 1280,
        height: 720,
    };

    /// Creates a new [`Resolution`] of `width x height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the width of this [`Resolution`].
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of this [`Resolution`].
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Parses the `WIDTHxHEIGHT` format produced by [`Display`][fmt::Display].
impl FromStr for Resolution {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let Some((width, height)) = s.split_once('x') else {
            bail!("invalid resolution '{s}', expected WIDTHxHEIGHT");
        };
        let width = width
            .trim()
            .parse()
            .with_context(|| format!("invalid width in resolution '{s}'"))?;
        let height = height
            .trim()
            .parse()
            .with_context(|| format!("invalid height in resolution '{s}'"))?;
        if width == 0 || height == 0 {
            bail!("resolution '{s}' must not be empty");
        }

        Ok(Self::new(width, height))
    }
}
