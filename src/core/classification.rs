//! Per-letter feedback kinds
//!
//! Variants are declared in ascending precedence so the derived ordering is the
//! highlight precedence: `Correct > Misplaced > Absent`.

use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    /// Letter is not in the secret (or every occurrence is already accounted for)
    Absent,
    /// Letter is in the secret at another position
    Misplaced,
    /// Letter is in the secret at this position
    Correct,
}

impl Classification {
    /// Numeric precedence: Correct(2) > Misplaced(1) > Absent(0)
    #[inline]
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Misplaced => 1,
            Self::Correct => 2,
        }
    }

    /// Single-character code used in text patterns
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse one pattern character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_matches_precedence() {
        assert!(Classification::Correct > Classification::Misplaced);
        assert!(Classification::Misplaced > Classification::Absent);
        assert_eq!(Classification::Correct.precedence(), 2);
        assert_eq!(Classification::Misplaced.precedence(), 1);
        assert_eq!(Classification::Absent.precedence(), 0);
    }

    #[test]
    fn symbols_parse_back() {
        for class in [
            Classification::Correct,
            Classification::Misplaced,
            Classification::Absent,
        ] {
            assert_eq!(Classification::from_symbol(class.symbol()), Some(class));
            assert_eq!(Classification::from_symbol(class.emoji()), Some(class));
        }
        assert_eq!(Classification::from_symbol('x'), None);
    }
}
