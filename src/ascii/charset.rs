//! Character ramps for ASCII rendering.

use std::fmt;
use std::str::FromStr;

use super::RasterError;

/// Classic dense-to-sparse ramp (10 levels).
/// Black maps to `@`, white to space. Reads well on light backgrounds.
pub const CLASSIC_CHARSET: &str = "@%#*+=-:. ";

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
/// Works well on dark terminals.
pub const STANDARD_CHARSET: &str = " .:-=+*#%@";

/// Block character set (5 levels).
/// Uses Unicode block characters for higher perceived resolution.
pub const BLOCKS_CHARSET: &str = " ░▒▓█";

/// Minimal character set (4 levels).
/// Clean, less noisy look.
pub const MINIMAL_CHARSET: &str = " .:#";

/// Ordered characters used to approximate gray levels.
///
/// Index 0 is used for black (sample 0) and the last index for white
/// (sample == max value). Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRamp {
    chars: Vec<char>,
}

impl CharacterRamp {
    /// Build a ramp from characters, darkest sample first.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self, RasterError> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(RasterError::EmptyRamp);
        }
        Ok(Self { chars })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of levels. Always at least 1.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn first(&self) -> char {
        self.chars[0]
    }

    pub fn last(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    /// Character at `index`, clamped to the last level.
    pub fn at(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }
}

impl FromStr for CharacterRamp {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}

impl Default for CharacterRamp {
    fn default() -> Self {
        CharSet::default().ramp()
    }
}

impl fmt::Display for CharacterRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Built-in ramp presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Dense-to-sparse ASCII ramp (10 levels)
    #[default]
    Classic,
    /// Sparse-to-dense ASCII ramp (10 levels)
    Standard,
    /// Block character set (5 levels) using Unicode blocks
    Blocks,
    /// Minimal character set (4 levels) for a clean look
    Minimal,
}

impl CharSet {
    /// All presets, in display order.
    pub const ALL: [CharSet; 4] = [
        CharSet::Classic,
        CharSet::Standard,
        CharSet::Blocks,
        CharSet::Minimal,
    ];

    /// Raw characters of this preset.
    pub fn chars(&self) -> &'static str {
        match self {
            CharSet::Classic => CLASSIC_CHARSET,
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
            CharSet::Minimal => MINIMAL_CHARSET,
        }
    }

    pub fn ramp(&self) -> CharacterRamp {
        CharacterRamp {
            chars: self.chars().chars().collect(),
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Classic => "classic",
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }

    /// Look up a preset by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}
