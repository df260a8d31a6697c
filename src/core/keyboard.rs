//! Best-ever letter highlights for the on-screen keyboard
//!
//! Each letter keeps the strongest classification it has received in any accepted guess
//! this game. Entries only ever move up in precedence.

use super::{Classification, Feedback, Word};
use rustc_hash::FxHashMap;

/// Letter → best classification observed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPrecedenceMap {
    best: FxHashMap<u8, Classification>,
}

impl LetterPrecedenceMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `classification` for `letter` if it beats the current entry
    ///
    /// Returns `true` when the stored highlight changed. Merging an equal or weaker
    /// classification is a no-op.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Classification, LetterPrecedenceMap};
    ///
    /// let mut map = LetterPrecedenceMap::new();
    /// assert!(map.merge(b's', Classification::Correct));
    /// assert!(!map.merge(b's', Classification::Absent));
    /// assert_eq!(map.get(b's'), Some(Classification::Correct));
    /// ```
    pub fn merge(&mut self, letter: u8, classification: Classification) -> bool {
        match self.best.get(&letter) {
            Some(&current) if current >= classification => false,
            _ => {
                self.best.insert(letter, classification);
                true
            }
        }
    }

    /// Fold every letter of an accepted guess into the map
    ///
    /// Returns the letters whose highlight was upgraded, in guess order, with their new
    /// classification. A letter upgraded twice within one guess appears twice.
    pub fn merge_feedback(
        &mut self,
        guess: &Word,
        feedback: &Feedback,
    ) -> Vec<(u8, Classification)> {
        guess
            .as_bytes()
            .iter()
            .zip(feedback.classifications())
            .filter_map(|(&letter, &class)| self.merge(letter, class).then_some((letter, class)))
            .collect()
    }

    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Classification> {
        self.best.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Iterate entries in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Classification)> + '_ {
        let mut entries: Vec<_> = self.best.iter().map(|(&l, &c)| (l, c)).collect();
        entries.sort_unstable_by_key(|&(l, _)| l);
        entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::{Absent, Correct, Misplaced};

    #[test]
    fn first_merge_always_inserts() {
        let mut map = LetterPrecedenceMap::new();
        assert!(map.merge(b'a', Absent));
        assert_eq!(map.get(b'a'), Some(Absent));
    }

    #[test]
    fn upgrades_but_never_downgrades() {
        let mut map = LetterPrecedenceMap::new();
        assert!(map.merge(b'e', Absent));
        assert!(map.merge(b'e', Misplaced));
        assert!(map.merge(b'e', Correct));
        assert!(!map.merge(b'e', Misplaced));
        assert!(!map.merge(b'e', Absent));
        assert_eq!(map.get(b'e'), Some(Correct));
    }

    #[test]
    fn misplaced_is_not_downgraded_to_absent() {
        let mut map = LetterPrecedenceMap::new();
        map.merge(b'o', Misplaced);
        assert!(!map.merge(b'o', Absent));
        assert_eq!(map.get(b'o'), Some(Misplaced));
    }

    #[test]
    fn merge_is_idempotent() {
        let mut once = LetterPrecedenceMap::new();
        once.merge(b'r', Misplaced);
        let mut twice = once.clone();
        assert!(!twice.merge(b'r', Misplaced));
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_feedback_reports_upgrades_only() {
        let secret = Word::new("sissy").unwrap();
        let guess = Word::new("assay").unwrap();
        let feedback = Feedback::evaluate(&secret, &guess).unwrap();

        let mut map = LetterPrecedenceMap::new();
        let upgrades = map.merge_feedback(&guess, &feedback);

        // a absent, s misplaced then correct, y correct; second 'a' adds nothing
        assert_eq!(
            upgrades,
            vec![(b'a', Absent), (b's', Misplaced), (b's', Correct), (b'y', Correct)]
        );
        assert_eq!(map.get(b's'), Some(Correct));
        assert_eq!(map.get(b'a'), Some(Absent));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn iter_is_alphabetical() {
        let mut map = LetterPrecedenceMap::new();
        map.merge(b'z', Absent);
        map.merge(b'a', Correct);
        let letters: Vec<u8> = map.iter().map(|(l, _)| l).collect();
        assert_eq!(letters, vec![b'a', b'z']);
    }
}
