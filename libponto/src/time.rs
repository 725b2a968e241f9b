use crate::error::FormatError;
use crate::parser;

use std::fmt;
use std::str::FromStr;

/// Signed count of minutes. Durations, clock readings and the hour bank all
/// share this unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minutes(i64);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    pub const fn new(minutes: i64) -> Self {
        Minutes(minutes)
    }

    pub const fn from_hm(hours: i64, minutes: i64) -> Self {
        Minutes(hours * 60 + minutes)
    }

    pub fn abs(self) -> Minutes {
        Minutes(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Render without the `+` of non-negative values, `-` is kept.
    pub fn unsigned(self) -> String {
        self.to_string().replacen('+', "", 1)
    }
}

/// `±HH:MM`, the sign is always present.
impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{}{:02}:{:02}", sign, magnitude / 60, magnitude % 60)
    }
}

impl FromStr for Minutes {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_time(s)
    }
}

impl std::ops::Add for Minutes {
    type Output = Minutes;

    fn add(self, rhs: Minutes) -> Self::Output {
        Minutes(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Minutes {
    fn add_assign(&mut self, rhs: Minutes) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Minutes {
    type Output = Minutes;

    fn sub(self, rhs: Minutes) -> Self::Output {
        Minutes(self.0 - rhs.0)
    }
}

impl std::ops::Neg for Minutes {
    type Output = Minutes;

    fn neg(self) -> Self::Output {
        Minutes(-self.0)
    }
}
