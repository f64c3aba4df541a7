//! Five-level intensity alphabet and its commit-count mapping

/// Symbols of the intensity alphabet, ordered by commit count
pub const ALPHABET: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Symbol used for empty cells and out-of-range lookups
pub const BLANK: char = ' ';

/// One pixel intensity of the contribution graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Intensity {
    /// No contributions
    #[default]
    Blank,
    /// Lightest shade
    Level1,
    /// Second shade
    Level2,
    /// Third shade
    Level3,
    /// Darkest shade
    Level4,
}

impl Intensity {
    /// All levels in alphabet order
    pub const ALL: [Self; 5] = [
        Self::Blank,
        Self::Level1,
        Self::Level2,
        Self::Level3,
        Self::Level4,
    ];

    /// Level for a symbol, `None` when the symbol is outside the alphabet
    pub fn from_symbol(symbol: char) -> Option<Self> {
        ALPHABET
            .iter()
            .position(|&candidate| candidate == symbol)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Symbol drawn for this level
    pub const fn symbol(self) -> char {
        match self {
            Self::Blank => ALPHABET[0],
            Self::Level1 => ALPHABET[1],
            Self::Level2 => ALPHABET[2],
            Self::Level3 => ALPHABET[3],
            Self::Level4 => ALPHABET[4],
        }
    }

    /// Commits needed in one day to reach this level
    pub const fn commit_count(self) -> u32 {
        self as u32
    }

    /// Level for a normalized ink amount in `[0, 1]`, saturating outside it
    pub fn from_ink(ink: f64) -> Self {
        let level = (ink.clamp(0.0, 1.0) * 4.0).round() as usize;
        Self::ALL.get(level).copied().unwrap_or(Self::Level4)
    }
}

/// Commits due for a persisted marker
///
/// The marker must be exactly one alphabet symbol; anything else maps to zero.
pub fn commits_for_marker(marker: &str) -> u32 {
    let mut chars = marker.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Intensity::from_symbol(symbol).map_or(0, Intensity::commit_count),
        _ => 0,
    }
}
