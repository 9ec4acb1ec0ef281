use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TopsisError;

/// Preferred direction of a criterion column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Higher raw values are better (`+`).
    Benefit,
    /// Lower raw values are better (`-`).
    Cost,
}

impl Impact {
    pub const fn symbol(self) -> char {
        match self {
            Self::Benefit => '+',
            Self::Cost => '-',
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Benefit => Self::Cost,
            Self::Cost => Self::Benefit,
        }
    }

    /// Picks the ideal value for this direction out of a column's extrema.
    pub const fn ideal_of(self, min: f64, max: f64) -> f64 {
        match self {
            Self::Benefit => max,
            Self::Cost => min,
        }
    }

    pub const fn negative_ideal_of(self, min: f64, max: f64) -> f64 {
        match self {
            Self::Benefit => min,
            Self::Cost => max,
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Impact {
    type Err = TopsisError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim();
        match token {
            "+" => return Ok(Self::Benefit),
            "-" => return Ok(Self::Cost),
            _ => {}
        }
        if token.eq_ignore_ascii_case("benefit") {
            Ok(Self::Benefit)
        } else if token.eq_ignore_ascii_case("cost") {
            Ok(Self::Cost)
        } else {
            Err(TopsisError::InvalidImpact(raw.to_string()))
        }
    }
}

/// Parses a compact impact string such as `"+--"`, one symbol per column.
/// Whitespace and commas between symbols are ignored.
pub fn parse_impacts(raw: &str) -> Result<Vec<Impact>, TopsisError> {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c {
            '+' => Ok(Impact::Benefit),
            '-' => Ok(Impact::Cost),
            other => Err(TopsisError::InvalidImpact(other.to_string())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbols_and_words() {
        assert_eq!("+".parse::<Impact>(), Ok(Impact::Benefit));
        assert_eq!(" - ".parse::<Impact>(), Ok(Impact::Cost));
        assert_eq!("Benefit".parse::<Impact>(), Ok(Impact::Benefit));
        assert_eq!("COST".parse::<Impact>(), Ok(Impact::Cost));
        assert_eq!(
            "up".parse::<Impact>(),
            Err(TopsisError::InvalidImpact("up".to_string()))
        );
    }

    #[test]
    fn parses_compact_impact_string() {
        let impacts = parse_impacts("+, -,-").expect("valid impacts");
        assert_eq!(impacts, vec![Impact::Benefit, Impact::Cost, Impact::Cost]);
        assert!(parse_impacts("+x").is_err());
    }

    #[test]
    fn ideal_follows_direction() {
        assert_eq!(Impact::Benefit.ideal_of(1.0, 3.0), 3.0);
        assert_eq!(Impact::Cost.ideal_of(1.0, 3.0), 1.0);
        assert_eq!(Impact::Benefit.negative_ideal_of(1.0, 3.0), 1.0);
        assert_eq!(Impact::Cost.negative_ideal_of(1.0, 3.0), 3.0);
        assert_eq!(Impact::Cost.flipped(), Impact::Benefit);
        assert_eq!(Impact::Benefit.to_string(), "+");
    }
}
