use crate::config::RulesConfig;
use crate::error::LevelError;

/// Move level, always within `RulesConfig::MIN_LEVEL..=RulesConfig::MAX_LEVEL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(RulesConfig::MIN_LEVEL);
    pub const MAX: Level = Level(RulesConfig::MAX_LEVEL);

    pub const fn new(value: u8) -> Result<Self, LevelError> {
        if value < RulesConfig::MIN_LEVEL || value > RulesConfig::MAX_LEVEL {
            return Err(LevelError::OutOfRange {
                value,
                min: RulesConfig::MIN_LEVEL,
                max: RulesConfig::MAX_LEVEL,
            });
        }
        Ok(Self(value))
    }

    /// Builds a level, pinning out-of-range input to the nearest bound.
    pub const fn clamped(value: u8) -> Self {
        if value < RulesConfig::MIN_LEVEL {
            Self::MIN
        } else if value > RulesConfig::MAX_LEVEL {
            Self::MAX
        } else {
            Self(value)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Level as a signed operand for the scoring formulas.
    pub const fn value(self) -> i32 {
        self.0 as i32
    }

    #[must_use]
    pub const fn saturating_inc(self) -> Self {
        Self::clamped(self.0.saturating_add(1))
    }

    #[must_use]
    pub const fn saturating_dec(self) -> Self {
        Self::clamped(self.0.saturating_sub(1))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl core::fmt::Display for Level {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
