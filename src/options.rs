//! Caller-facing knobs for a squeeze invocation.

use crate::error::{Error, Result};

/// Compression aggressiveness and budget for one invocation.
#[derive(Debug, Clone)]
pub struct Options {
    /// `-1` derives the aggressiveness from `profile`; otherwise `0..=9`.
    pub aggressiveness: i8,
    /// `0` means unbounded.
    pub max_tokens: usize,
    /// `""`, `"local"`, or `"api"`.
    pub profile: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            aggressiveness: -1,
            max_tokens: 0,
            profile: String::new(),
        }
    }
}

/// Resource ceilings independent of `Options`.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// `<=0` normalises to 1024.
    pub max_memory_mb: i64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { max_memory_mb: 1024 }
    }
}

/// Validates `options` and resolves its aggressiveness to a concrete `0..=9`
/// value, deriving it from `profile` when `aggressiveness == -1`.
pub fn normalize_aggressiveness(options: &Options) -> Result<u8> {
    match options.profile.as_str() {
        "" | "local" | "api" => {}
        other => {
            return Err(Error::InvalidOptions(format!("unknown profile: {other:?}")));
        }
    }

    if options.aggressiveness == -1 {
        return Ok(match options.profile.as_str() {
            "local" => 6,
            _ => 4,
        });
    }

    if (0..=9).contains(&options.aggressiveness) {
        Ok(options.aggressiveness as u8)
    } else {
        Err(Error::InvalidOptions(format!(
            "aggressiveness {} outside -1 or 0..=9",
            options.aggressiveness
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minus_one_derives_from_profile() {
        let mut o = Options {
            aggressiveness: -1,
            profile: "local".into(),
            ..Default::default()
        };
        assert_eq!(normalize_aggressiveness(&o).unwrap(), 6);
        o.profile = "api".into();
        assert_eq!(normalize_aggressiveness(&o).unwrap(), 4);
        o.profile = String::new();
        assert_eq!(normalize_aggressiveness(&o).unwrap(), 4);
    }

    #[test]
    fn explicit_aggressiveness_passes_through() {
        let o = Options {
            aggressiveness: 7,
            ..Default::default()
        };
        assert_eq!(normalize_aggressiveness(&o).unwrap(), 7);
    }

    #[test]
    fn out_of_range_aggressiveness_is_invalid() {
        let o = Options {
            aggressiveness: 10,
            ..Default::default()
        };
        assert!(normalize_aggressiveness(&o).is_err());
    }

    #[test]
    fn unknown_profile_is_invalid() {
        let o = Options {
            profile: "bogus".into(),
            ..Default::default()
        };
        assert!(normalize_aggressiveness(&o).is_err());
    }
}
