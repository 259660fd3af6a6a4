use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IsomerError;

/// Seasons as an integer-backed flag set.
///
/// Any `i32` is a valid `Season`, including bit patterns with no named
/// combination. Display falls back to the decimal value in that case.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(i32);

macro_rules! named_seasons {
    ( $( ($konst:ident, $name:literal, $value:expr) ),* $(,)? ) => {
        impl Season {
            $(
                pub const $konst: Season = Season($value);
            )*

            /// Named members as `(name, value)`, in declaration order.
            pub const NAMED: &'static [(&'static str, Season)] = &[
                $( ($name, Season::$konst) ),*
            ];
        }
    };
}

named_seasons![
    (WINTER, "Winter", 1),
    (SPRING, "Spring", 2),
    (SUMMER, "Summer", 4),
    (FALL, "Fall", 8),
    (WINTER_OR_SPRING, "WinterOrSpring", 1 | 2),
];

impl Season {
    pub const fn from_int(value: i32) -> Self {
        Season(value)
    }

    pub const fn to_int(self) -> i32 {
        self.0
    }

    /// Returns the name of the member equal to this value, if any.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, season)| *season == self)
            .map(|(name, _)| *name)
    }

    pub fn is_defined(self) -> bool {
        self.name().is_some()
    }

    /// Returns true if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Season) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns a one-line remark about the season.
    ///
    /// Only the four single seasons get a remark. `WINTER_OR_SPRING` is a
    /// named member but still takes the fallback line.
    pub fn describe(self) -> String {
        match self {
            Season::SUMMER => "Let's go to the beach".to_string(),
            Season::WINTER => "Oh the weather outside is frightful".to_string(),
            Season::SPRING => "Watch out for allergies".to_string(),
            Season::FALL => "Not too hot, not too cold".to_string(),
            other => format!("I've never heard of {}", other),
        }
    }

    /// Splits the value into named members, largest value first.
    ///
    /// Returns `None` when bits remain that no named member covers.
    fn decompose(self) -> Option<Vec<(&'static str, Season)>> {
        let mut by_value: Vec<_> = Self::NAMED.to_vec();
        by_value.sort_by(|a, b| b.1.cmp(&a.1));

        let mut remaining = self.0;
        let mut parts = Vec::new();
        for (name, season) in by_value {
            if season.0 != 0 && remaining & season.0 == season.0 {
                remaining &= !season.0;
                parts.push((name, season));
            }
        }

        if remaining != 0 {
            return None;
        }
        parts.reverse();
        Some(parts)
    }
}

impl From<i32> for Season {
    fn from(value: i32) -> Self {
        Season::from_int(value)
    }
}

impl From<Season> for i32 {
    fn from(season: Season) -> Self {
        season.to_int()
    }
}

impl BitOr for Season {
    type Output = Season;

    fn bitor(self, rhs: Self) -> Self::Output {
        Season(self.0 | rhs.0)
    }
}

impl BitOrAssign for Season {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Season {
    type Output = Season;

    fn bitand(self, rhs: Self) -> Self::Output {
        Season(self.0 & rhs.0)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return f.write_str(name);
        }
        if self.0 != 0 {
            if let Some(parts) = self.decompose() {
                let names: Vec<_> = parts.iter().map(|(name, _)| *name).collect();
                return f.write_str(&names.join(", "));
            }
        }
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = IsomerError;

    /// Parses a decimal integer or a comma-separated list of member names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i32>() {
            return Ok(Season(value));
        }
        debug!(input = trimmed, "not an integer, parsing as season names");

        let mut season = Season::default();
        for part in trimmed.split(',') {
            let part = part.trim();
            let (_, named) = Self::NAMED
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(part))
                .ok_or_else(|| IsomerError::UnknownSeason(part.to_string()))?;
            season |= *named;
        }
        Ok(season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_values() {
        assert_eq!(Season::WINTER.to_int(), 1);
        assert_eq!(Season::SPRING.to_int(), 2);
        assert_eq!(Season::SUMMER.to_int(), 4);
        assert_eq!(Season::FALL.to_int(), 8);
        assert_eq!(Season::WINTER_OR_SPRING, Season::WINTER | Season::SPRING);
    }

    #[test]
    fn int_round_trip() {
        for n in [i32::MIN, -1, 0, 1, 3, 42, 1 << 20, i32::MAX] {
            assert_eq!(Season::from_int(n).to_int(), n);
            assert_eq!(i32::from(Season::from(n)), n);
        }
    }

    #[test]
    fn describe_single_seasons() {
        assert!(Season::SUMMER.describe().contains("beach"));
        assert!(Season::WINTER.describe().contains("frightful"));
        assert!(Season::SPRING.describe().contains("allergies"));
        assert!(Season::FALL.describe().contains("Not too hot, not too cold"));
    }

    #[test]
    fn describe_composite_falls_back() {
        assert_eq!(
            Season::from_int(3).describe(),
            "I've never heard of WinterOrSpring"
        );
    }

    #[test]
    fn describe_undefined_value() {
        let line = Season::from_int(42).describe();
        assert_eq!(line, "I've never heard of 42");
    }

    #[test]
    fn display_exact_names() {
        assert_eq!(Season::SPRING.to_string(), "Spring");
        assert_eq!(Season::from_int(3).to_string(), "WinterOrSpring");
    }

    #[test]
    fn display_combinations() {
        assert_eq!(Season::from_int(10).to_string(), "Spring, Fall");
        assert_eq!(Season::from_int(11).to_string(), "WinterOrSpring, Fall");
        assert_eq!(Season::from_int(15).to_string(), "WinterOrSpring, Summer, Fall");
    }

    #[test]
    fn display_fallback_to_integer() {
        assert_eq!(Season::from_int(0).to_string(), "0");
        assert_eq!(Season::from_int(42).to_string(), "42");
        assert_eq!(Season::from_int(16).to_string(), "16");
        assert_eq!(Season::from_int(-1).to_string(), "-1");
    }

    #[test]
    fn defined_and_contains() {
        assert!(Season::WINTER_OR_SPRING.is_defined());
        assert!(!Season::from_int(42).is_defined());
        assert!(Season::WINTER_OR_SPRING.contains(Season::SPRING));
        assert!(!Season::WINTER_OR_SPRING.contains(Season::FALL));
        assert_eq!(Season::from_int(42) & Season::FALL, Season::FALL);
    }

    #[test]
    fn parse_integers_and_names() {
        assert_eq!("42".parse::<Season>().unwrap(), Season::from_int(42));
        assert_eq!(" -7 ".parse::<Season>().unwrap(), Season::from_int(-7));
        assert_eq!("summer".parse::<Season>().unwrap(), Season::SUMMER);
        assert_eq!("Winter, fall".parse::<Season>().unwrap().to_int(), 9);
        assert_eq!(
            "WinterOrSpring".parse::<Season>().unwrap(),
            Season::WINTER_OR_SPRING
        );
    }

    #[test]
    fn parse_unknown_name() {
        let err = "winter, monsoon".parse::<Season>().unwrap_err();
        assert_eq!(err, IsomerError::UnknownSeason("monsoon".to_string()));
    }
}
