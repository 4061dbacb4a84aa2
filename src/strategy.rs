use crate::error::{Result, StegoError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a code point is written into a pixel's channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Perturbation {
    /// Whole value on one randomly chosen channel
    #[default]
    Simple,
    /// Value spread across all three channels
    Split,
}

impl std::str::FromStr for Perturbation {
    type Err = StegoError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "simple" | "single" => Ok(Self::Simple),
            "split" | "distributed" => Ok(Self::Split),
            _ => Err(StegoError::UnsupportedStrategy(format!(
                "perturbation: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Perturbation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Split => write!(f, "split"),
        }
    }
}

/// Which pixels carry data and in what order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Consecutive pixels from the top-left corner
    #[default]
    Sequential,
    /// One random pixel inside each of |secret| equal intervals
    Spread,
}

impl std::str::FromStr for Placement {
    type Err = StegoError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "seq" | "sequential" => Ok(Self::Sequential),
            "spread" => Ok(Self::Spread),
            _ => Err(StegoError::UnsupportedStrategy(format!("placement: {}", s))),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "seq"),
            Self::Spread => write!(f, "spread"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_perturbation() {
        assert_eq!("simple".parse::<Perturbation>().unwrap(), Perturbation::Simple);
        assert_eq!("SPLIT".parse::<Perturbation>().unwrap(), Perturbation::Split);
        assert_eq!(
            "distributed".parse::<Perturbation>().unwrap(),
            Perturbation::Split
        );
        assert!("lsb".parse::<Perturbation>().is_err());
    }

    #[test]
    fn test_parse_placement() {
        assert_eq!("seq".parse::<Placement>().unwrap(), Placement::Sequential);
        assert_eq!("spread".parse::<Placement>().unwrap(), Placement::Spread);
        assert!("random".parse::<Placement>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for p in [Placement::Sequential, Placement::Spread] {
            assert_eq!(p.to_string().parse::<Placement>().unwrap(), p);
        }
        for p in [Perturbation::Simple, Perturbation::Split] {
            assert_eq!(p.to_string().parse::<Perturbation>().unwrap(), p);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Placement::Spread).unwrap(), "\"spread\"");
        assert_eq!(serde_json::to_string(&Perturbation::Split).unwrap(), "\"split\"");
    }
}
