//! Label priors and chord likelihoods derived from [`LabelStatistics`].
//!
//! Both quantities are normalized by the total corpus size. For likelihoods
//! this differs from textbook Naive Bayes, which divides by the per-label
//! song count; the scores produced by [`crate::algorithm`] depend on the
//! corpus-size divisor.

use crate::error::Result;
use crate::song::Corpus;
use crate::stats::LabelStatistics;
use crate::vocabulary::Vocabulary;
use log::{debug, info};
use std::collections::HashMap;

/// Read-only result of one training pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    labels: Vec<String>,
    priors: HashMap<String, f64>,
    /// Sparse: only (label, chord) pairs with a nonzero count are stored.
    likelihoods: HashMap<String, HashMap<String, f64>>,
    vocabulary: Vocabulary,
    corpus_size: usize,
}

/// Build a fresh model from `corpus`.
///
/// # Errors
///
/// Returns [`crate::error::Error::InvalidCorpus`] for an empty corpus.
///
/// # Examples
///
/// ```
/// use chordclass::{model, song::Corpus};
///
/// let mut corpus = Corpus::new();
/// corpus.add_song("tooManyCooks", &["c", "g", "f"], "easy");
/// corpus.add_song("bulletproof", &["d#m", "g#", "b"], "hard");
///
/// let model = model::train(&corpus)?;
/// assert_eq!(model.prior("easy"), Some(0.5));
/// assert_eq!(model.likelihood("easy", "b"), None);
/// # Ok::<(), chordclass::error::Error>(())
/// ```
pub fn train(corpus: &Corpus) -> Result<Model> {
    let stats = LabelStatistics::from_corpus(corpus)?;
    let model = Model::from_statistics(stats);
    info!(
        "Trained on {} songs: {} labels, {} distinct chords",
        model.corpus_size,
        model.labels.len(),
        model.vocabulary.len()
    );
    Ok(model)
}

impl Model {
    /// Derive priors and likelihoods from counts already gathered.
    ///
    /// [`LabelStatistics`] can only be built by
    /// [`LabelStatistics::from_corpus`], which rejects an empty corpus, so
    /// the divisor here is never zero. Use [`train`] unless the raw counts
    /// are needed as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use chordclass::model::Model;
    /// use chordclass::reference::reference_corpus;
    /// use chordclass::stats::LabelStatistics;
    ///
    /// let stats = LabelStatistics::from_corpus(&reference_corpus())?;
    /// let easy_songs = stats.label_count("easy");
    /// let model = Model::from_statistics(stats);
    /// assert_eq!(easy_songs, 3);
    /// assert_eq!(model.corpus_size(), 9);
    /// # Ok::<(), chordclass::error::Error>(())
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn from_statistics(stats: LabelStatistics) -> Self {
        let total = stats.total() as f64;

        let priors: HashMap<String, f64> = stats
            .labels()
            .iter()
            .map(|label| (label.clone(), stats.label_count(label) as f64 / total))
            .collect();

        let likelihoods: HashMap<String, HashMap<String, f64>> = stats
            .labels()
            .iter()
            .map(|label| {
                let per_chord = stats
                    .chord_counts(label)
                    .into_iter()
                    .flatten()
                    .filter(|(_, &count)| count > 0)
                    .map(|(chord, &count)| (chord.clone(), count as f64 / total))
                    .collect();
                (label.clone(), per_chord)
            })
            .collect();

        for label in stats.labels() {
            debug!("Prior for `{label}': {}", priors[label]);
        }

        let labels = stats.labels().to_vec();
        let corpus_size = stats.total();
        Self {
            labels,
            priors,
            likelihoods,
            vocabulary: stats.into_vocabulary(),
            corpus_size,
        }
    }

    /// Labels in order of first appearance in the corpus.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Share of training songs carrying `label`.
    ///
    /// # Returns
    ///
    /// * `Some(prior)` - a value in `(0, 1]`
    /// * `None` - `label` never appeared in training
    pub fn prior(&self, label: &str) -> Option<f64> {
        self.priors.get(label).copied()
    }

    /// Likelihood of `chord` under `label`, or `None` when the pair was never
    /// observed. `None` is distinct from a stored zero, which never occurs.
    pub fn likelihood(&self, label: &str, chord: &str) -> Option<f64> {
        self.likelihoods
            .get(label)
            .and_then(|chords| chords.get(chord))
            .copied()
    }

    /// Every distinct chord seen in training.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of songs the model was trained on. Never zero.
    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn corpus() -> Corpus {
        let mut corpus = Corpus::new();
        corpus.add_song("one", &["c", "g", "c"], "easy");
        corpus.add_song("two", &["c", "f"], "easy");
        corpus.add_song("three", &["cm", "g"], "hard");
        corpus.add_song("four", &["bm7"], "medium");
        corpus
    }

    #[test]
    fn test_priors_sum_to_one() {
        let model = train(&corpus()).unwrap();
        let sum: f64 = model.labels().iter().filter_map(|l| model.prior(l)).sum();
        assert!((sum - 1.0).abs() < 1e-12, "Priors summed to {sum}");
        assert_eq!(model.prior("easy"), Some(0.5));
        assert_eq!(model.prior("hard"), Some(0.25));
    }

    #[test]
    fn test_likelihood_divides_by_corpus_size() {
        let model = train(&corpus()).unwrap();
        // 3 occurrences of `c` among easy songs, 4 songs in total.
        assert_eq!(model.likelihood("easy", "c"), Some(3.0 / 4.0));
        assert_eq!(model.likelihood("hard", "g"), Some(1.0 / 4.0));
    }

    #[test]
    fn test_unobserved_pairs_are_absent() {
        let model = train(&corpus()).unwrap();
        assert_eq!(model.likelihood("hard", "c"), None);
        assert_eq!(model.likelihood("easy", "never-seen"), None);
        assert_eq!(model.likelihood("unknown-label", "c"), None);
    }

    #[test]
    fn test_training_is_idempotent() {
        let corpus = corpus();
        let first = train(&corpus).unwrap();
        let second = train(&corpus).unwrap();

        assert_eq!(first, second);
        for label in first.labels() {
            assert_eq!(
                first.prior(label).map(f64::to_bits),
                second.prior(label).map(f64::to_bits)
            );
        }
    }

    #[test]
    fn test_train_rejects_empty_corpus() {
        assert!(matches!(train(&Corpus::new()), Err(Error::InvalidCorpus(_))));
    }

    #[test]
    fn test_no_model_without_songs() {
        let result = LabelStatistics::from_corpus(&Corpus::new()).map(Model::from_statistics);
        assert!(matches!(result, Err(Error::InvalidCorpus(_))));
    }

    #[test]
    fn test_from_statistics_matches_train() {
        let corpus = corpus();
        let stats = LabelStatistics::from_corpus(&corpus).unwrap();
        let model = Model::from_statistics(stats);

        assert_eq!(model, train(&corpus).unwrap());
        assert!(model.corpus_size() > 0);
    }

    #[test]
    fn test_model_exposes_vocabulary() {
        let model = train(&corpus()).unwrap();
        assert_eq!(model.vocabulary().len(), 5);
        assert_eq!(model.corpus_size(), 4);
    }
}
