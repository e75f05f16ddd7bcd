//! Set of every distinct chord seen while training.
//!
//! Informational only. Scoring never consults it.

use std::collections::BTreeSet;

/// Distinct chord tokens, kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    chords: BTreeSet<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every chord in `chords`.
    ///
    /// # Returns
    ///
    /// How many of `chords` were not already present. Repeats within
    /// `chords` count once.
    ///
    /// # Examples
    ///
    /// ```
    /// use chordclass::vocabulary::Vocabulary;
    ///
    /// let mut vocabulary = Vocabulary::new();
    /// assert_eq!(vocabulary.extend(&["c", "g", "c"]), 2);
    /// assert_eq!(vocabulary.extend(&["g", "am"]), 1);
    /// assert!(vocabulary.contains("am"));
    /// ```
    pub fn extend<S: AsRef<str>>(&mut self, chords: &[S]) -> usize {
        chords
            .iter()
            .filter(|chord| self.chords.insert(chord.as_ref().to_string()))
            .count()
    }

    /// Whether `chord` has been recorded. Matching is exact, so `C` and `c`
    /// are different chords.
    pub fn contains(&self, chord: &str) -> bool {
        self.chords.contains(chord)
    }

    /// Number of distinct chords.
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    /// True until the first chord is recorded.
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Chords in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.chords.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_counts_only_new_chords() {
        let mut vocabulary = Vocabulary::new();
        assert_eq!(vocabulary.extend(&["c", "g", "c"]), 2);
        assert_eq!(vocabulary.extend(&["g", "am"]), 1);
        assert_eq!(vocabulary.len(), 3);
    }

    #[test]
    fn test_iter_is_sorted() {
        let mut vocabulary = Vocabulary::new();
        vocabulary.extend(&["g", "am", "c"]);
        let chords: Vec<&str> = vocabulary.iter().collect();
        assert_eq!(chords, vec!["am", "c", "g"]);
        assert!(vocabulary.contains("am"));
        assert!(!vocabulary.contains("bm"));
    }
}
