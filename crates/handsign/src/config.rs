//! Environment-based configuration of the overlay.
//!
//! * `HANDSIGN_RESOLUTION`: resolution of the camera image the landmarks were detected in, as
//!   `WIDTHxHEIGHT`. Used to place labels and render trails. Defaults to `1280x720`.
//! * `HANDSIGN_LABEL_MARGIN`: distance in pixels between a hand's bounding rectangle and its
//!   label. Defaults to `20`.

use std::env::{self, VarError};

use anyhow::{anyhow, Context};

use crate::resolution::Resolution;

const DEFAULT_RESOLUTION: Resolution = Resolution::RES_720P;
const DEFAULT_LABEL_MARGIN: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub resolution: Resolution,
    pub label_margin: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            label_margin: DEFAULT_LABEL_MARGIN,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Reads the configuration through `lookup`, which behaves like [`env::var`].
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, VarError>,
    ) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(res) = var(&lookup, "HANDSIGN_RESOLUTION")? {
            config.resolution = res
                .parse()
                .context("invalid value set for `HANDSIGN_RESOLUTION` variable")?;
        }
        if let Some(margin) = var(&lookup, "HANDSIGN_LABEL_MARGIN")? {
            config.label_margin = margin.trim().parse().with_context(|| {
                format!("invalid value set for `HANDSIGN_LABEL_MARGIN` variable: '{margin}'")
            })?;
        }

        log::debug!("using {:?}", config);
        Ok(config)
    }
}

fn var(
    lookup: &impl Fn(&str) -> Result<String, VarError>,
    name: &str,
) -> anyhow::Result<Option<String>> {
    match lookup(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(s)) => Err(anyhow!(
            "invalid value set for `{name}` variable: {}",
            s.to_string_lossy()
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, ffi::OsString};

    use super::*;

    fn lookup<'a>(
        vars: &'a [(&'a str, &'a str)],
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        let vars = vars.iter().copied().collect::<HashMap<_, _>>();
        move |name| {
            vars.get(name)
                .map(|v| v.to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.resolution, Resolution::RES_720P);
        assert_eq!(config.label_margin, 20);
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HANDSIGN_RESOLUTION", "1920x1080"),
            ("HANDSIGN_LABEL_MARGIN", " 35 "),
        ]))
        .unwrap();
        assert_eq!(config.resolution, Resolution::RES_1080P);
        assert_eq!(config.label_margin, 35);
    }

    #[test]
    fn invalid_values() {
        assert!(Config::from_lookup(lookup(&[("HANDSIGN_RESOLUTION", "big")])).is_err());
        assert!(Config::from_lookup(lookup(&[("HANDSIGN_LABEL_MARGIN", "lots")])).is_err());
        assert!(Config::from_lookup(|_| Err(VarError::NotUnicode(OsString::from("?")))).is_err());
    }
}
