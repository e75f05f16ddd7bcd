//! Difficulty scoring for an unlabelled chord sequence.
//!
//! Each known label gets an unnormalized score:
//!
//! ```text
//! score(label) = (prior(label) + s) * Π (likelihood(label, chord) + s)
//! ```
//!
//! where the product runs over the query chords in input order and skips
//! every chord that was never observed with `label` (a factor of exactly 1).
//! With `s > 0` every other factor exceeds 1, so matching chords can only
//! raise a score. Scores are meant to be compared, not read as probabilities.

use crate::error::{Error, Result};
use crate::model::Model;
use log::trace;
use rayon::prelude::*;

/// Smoothing constant used by the reference scoring scheme.
pub const DEFAULT_SMOOTHING: f64 = 1.01;

/// Immutable scoring parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringContext {
    smoothing: f64,
}

impl Default for ScoringContext {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl ScoringContext {
    /// Scoring parameters with a custom smoothing constant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSmoothing`] unless `smoothing` is finite and
    /// strictly positive.
    pub fn with_smoothing(smoothing: f64) -> Result<Self> {
        if smoothing.is_finite() && smoothing > 0.0 {
            Ok(Self { smoothing })
        } else {
            Err(Error::InvalidSmoothing(smoothing))
        }
    }

    /// Additive smoothing constant `s`.
    #[must_use]
    pub const fn smoothing(&self) -> f64 {
        self.smoothing
    }
}

/// Per-label scores, in the model's label order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scores {
    entries: Vec<(String, f64)>,
}

impl Scores {
    /// Score for `label`, or `None` if the model never saw it.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|&(_, score)| score)
    }

    /// Highest-scoring label. Ties go to the label seen first in training.
    pub fn best(&self) -> Option<(&str, f64)> {
        self.entries
            .iter()
            .fold(None, |best: Option<&(String, f64)>, entry| match best {
                Some(current) if current.1 >= entry.1 => Some(current),
                _ => Some(entry),
            })
            .map(|(label, score)| (label.as_str(), *score))
    }

    /// All labels sorted by descending score; equal scores keep label order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }

    /// `(label, score)` pairs in the model's label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(label, score)| (label.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Score `chords` against every label in `model`.
///
/// Multiplication follows the query order exactly so that results are
/// reproducible bit for bit. An empty query scores each label by
/// `prior + s` alone.
///
/// # Examples
///
/// ```
/// use chordclass::algorithm::{classify, ScoringContext};
/// use chordclass::{model, reference};
///
/// let model = model::train(&reference::reference_corpus())?;
/// let scores = classify(&model, &["d", "g", "e", "dm"], &ScoringContext::default());
/// assert_eq!(scores.best().map(|(label, _)| label), Some("easy"));
/// # Ok::<(), chordclass::error::Error>(())
/// ```
#[must_use]
pub fn classify<S: AsRef<str>>(model: &Model, chords: &[S], context: &ScoringContext) -> Scores {
    let entries = model
        .labels()
        .iter()
        .map(|label| (label.clone(), score_label(model, label, chords, context)))
        .collect();
    Scores { entries }
}

fn score_label<S: AsRef<str>>(
    model: &Model,
    label: &str,
    chords: &[S],
    context: &ScoringContext,
) -> f64 {
    let seed = model.prior(label).unwrap_or(0.0) + context.smoothing;
    chords.iter().fold(seed, |total, chord| {
        let chord = chord.as_ref();
        match model.likelihood(label, chord) {
            Some(likelihood) => {
                trace!("`{label}' x `{chord}': factor {}", likelihood + context.smoothing);
                total * (likelihood + context.smoothing)
            }
            None => total,
        }
    })
}

/// Score many queries against one model in parallel.
///
/// Results are returned in the same order as `queries`.
#[must_use]
pub fn batch_classify<S>(model: &Model, queries: &[Vec<S>], context: &ScoringContext) -> Vec<Scores>
where
    S: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|query| classify(model, query.as_slice(), context))
        .collect()
}
