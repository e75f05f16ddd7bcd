//! Per-label counts gathered in a single pass over the corpus.

use crate::error::{Error, Result};
use crate::song::Corpus;
use crate::vocabulary::Vocabulary;
use log::debug;
use std::collections::HashMap;

/// Raw counts that the model is derived from.
///
/// Label and chord keys are exactly those observed in the corpus. A chord
/// absent from a label's table was never seen with that label.
///
/// The only constructor is [`LabelStatistics::from_corpus`], so every value
/// describes at least one song and `total()` is never zero.
#[derive(Debug, Clone)]
pub struct LabelStatistics {
    /// Labels in order of first appearance.
    labels: Vec<String>,
    label_counts: HashMap<String, usize>,
    chord_counts: HashMap<String, HashMap<String, usize>>,
    vocabulary: Vocabulary,
    total: usize,
}

impl LabelStatistics {
    /// Count songs per label and chord occurrences per label.
    ///
    /// Also records every chord seen in the vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCorpus`] when the corpus is empty, since every
    /// derived quantity is divided by the corpus size.
    pub fn from_corpus(corpus: &Corpus) -> Result<Self> {
        if corpus.is_empty() {
            return Err(Error::InvalidCorpus(
                "cannot train on an empty corpus".to_string(),
            ));
        }

        let mut stats = Self {
            labels: Vec::new(),
            label_counts: HashMap::new(),
            chord_counts: HashMap::new(),
            vocabulary: Vocabulary::new(),
            total: 0,
        };
        for song in corpus {
            stats.vocabulary.extend(song.chords.as_slice());

            match stats.label_counts.get_mut(&song.difficulty) {
                Some(count) => *count += 1,
                None => {
                    stats.labels.push(song.difficulty.clone());
                    stats.label_counts.insert(song.difficulty.clone(), 1);
                }
            }

            let per_chord = stats
                .chord_counts
                .entry(song.difficulty.clone())
                .or_default();
            for chord in &song.chords {
                *per_chord.entry(chord.clone()).or_insert(0) += 1;
            }

            stats.total += 1;
        }

        for label in &stats.labels {
            debug!(
                "Label `{label}': {} songs, {} distinct chords",
                stats.label_count(label),
                stats.chord_counts.get(label).map_or(0, HashMap::len)
            );
        }

        Ok(stats)
    }

    /// Labels in order of first appearance in the corpus.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of songs carrying `label`; zero for unknown labels.
    pub fn label_count(&self, label: &str) -> usize {
        self.label_counts.get(label).copied().unwrap_or(0)
    }

    /// Occurrences of `chord` across all songs carrying `label`.
    pub fn chord_count(&self, label: &str, chord: &str) -> usize {
        self.chord_counts
            .get(label)
            .and_then(|chords| chords.get(chord))
            .copied()
            .unwrap_or(0)
    }

    /// Nonzero chord counts for `label`.
    pub fn chord_counts(&self, label: &str) -> Option<&HashMap<String, usize>> {
        self.chord_counts.get(label)
    }

    /// Distinct chords across all labels.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Corpus size. Always at least one.
    pub fn total(&self) -> usize {
        self.total
    }

    pub(crate) fn into_vocabulary(self) -> Vocabulary {
        self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_corpus() -> Corpus {
        let mut corpus = Corpus::new();
        corpus.add_song("one", &["c", "g", "c"], "easy");
        corpus.add_song("two", &["c", "f"], "easy");
        corpus.add_song("three", &["cm", "g"], "hard");
        corpus
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        let result = LabelStatistics::from_corpus(&Corpus::new());
        assert!(matches!(result, Err(Error::InvalidCorpus(_))));
    }

    #[test]
    fn test_statistics_always_describe_songs() {
        let stats = LabelStatistics::from_corpus(&small_corpus()).unwrap();
        assert!(stats.total() > 0);
        assert!(!stats.labels().is_empty());
    }

    #[test]
    fn test_label_counts_sum_to_corpus_size() {
        let stats = LabelStatistics::from_corpus(&small_corpus()).unwrap();
        let sum: usize = stats.labels().iter().map(|l| stats.label_count(l)).sum();

        assert_eq!(sum, stats.total());
        assert_eq!(stats.label_count("easy"), 2);
        assert_eq!(stats.label_count("hard"), 1);
        assert_eq!(stats.label_count("medium"), 0);
    }

    #[test]
    fn test_repeated_chords_count_separately() {
        let stats = LabelStatistics::from_corpus(&small_corpus()).unwrap();
        assert_eq!(stats.chord_count("easy", "c"), 3);
        assert_eq!(stats.chord_count("easy", "g"), 1);
        assert_eq!(stats.chord_count("hard", "g"), 1);
        assert_eq!(stats.chord_count("hard", "c"), 0);
    }

    #[test]
    fn test_labels_follow_first_appearance() {
        let mut corpus = Corpus::new();
        corpus.add_song("a", &["c"], "hard");
        corpus.add_song("b", &["c"], "easy");
        corpus.add_song("c", &["c"], "hard");

        let stats = LabelStatistics::from_corpus(&corpus).unwrap();
        assert_eq!(stats.labels(), &["hard".to_string(), "easy".to_string()]);
    }

    #[test]
    fn test_empty_chord_list_only_counts_label() {
        let mut corpus = Corpus::new();
        corpus.add_song::<&str>("silence", &[], "easy");

        let stats = LabelStatistics::from_corpus(&corpus).unwrap();
        assert_eq!(stats.label_count("easy"), 1);
        assert!(stats.chord_counts("easy").unwrap().is_empty());
        assert!(stats.vocabulary().is_empty());
    }

    #[test]
    fn test_vocabulary_is_union_across_labels() {
        let stats = LabelStatistics::from_corpus(&small_corpus()).unwrap();
        let chords: Vec<&str> = stats.vocabulary().iter().collect();
        assert_eq!(chords, vec!["c", "cm", "f", "g"]);
    }
}
