//! Built-in reference corpus: nine songs, three per difficulty.
//!
//! Handy for trying the classifier without building a corpus first, and
//! used by the tests as a fixed numeric baseline.
//!
//! | Difficulty | Songs |
//! |---|---|
//! | easy | imagine, somewhereOverTheRainbow, tooManyCooks |
//! | medium | iWillFollowYouIntoTheDark, babyOneMoreTime, creep |
//! | hard | paperBag, toxic, bulletproof |

use crate::song::{Corpus, Song};

const REFERENCE_SONGS: &[(&str, &[&str], &str)] = &[
    ("imagine", &["c", "cmaj7", "f", "am", "dm", "g", "e7"], "easy"),
    ("somewhereOverTheRainbow", &["c", "em", "f", "g", "am"], "easy"),
    ("tooManyCooks", &["c", "g", "f"], "easy"),
    ("iWillFollowYouIntoTheDark", &["f", "dm", "bb", "c", "a", "bbm"], "medium"),
    ("babyOneMoreTime", &["cm", "g", "bb", "eb", "fm", "ab"], "medium"),
    ("creep", &["g", "gsus4", "b", "bsus4", "c", "cmsus4", "cm6"], "medium"),
    (
        "paperBag",
        &["bm7", "e", "c", "g", "b7", "f", "em", "a", "cmaj7", "em7", "a7", "f7", "b"],
        "hard",
    ),
    ("toxic", &["cm", "eb", "g", "cdim", "eb7", "d7", "db7", "ab", "gmaj7", "g7"], "hard"),
    ("bulletproof", &["d#m", "g#", "b", "f#", "g#m", "c#"], "hard"),
];

lazy_static::lazy_static! {
    static ref REFERENCE_CORPUS: Corpus = REFERENCE_SONGS
        .iter()
        .map(|&(name, chords, difficulty)| Song::new(name, chords, difficulty))
        .collect();
}

/// A copy of the reference corpus.
///
/// Songs come back in the order listed in the module docs, so labels first
/// appear as easy, medium, hard.
///
/// # Examples
///
/// ```
/// use chordclass::algorithm::{classify, ScoringContext};
/// use chordclass::{model, reference};
///
/// let corpus = reference::reference_corpus();
/// assert_eq!(corpus.len(), 9);
///
/// let model = model::train(&corpus)?;
/// let scores = classify(&model, &["d", "g", "e", "dm"], &ScoringContext::default());
/// assert_eq!(scores.get("easy"), Some(2.023094827160494));
/// # Ok::<(), chordclass::error::Error>(())
/// ```
pub fn reference_corpus() -> Corpus {
    REFERENCE_CORPUS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::DifficultyScale;

    #[test]
    fn test_three_songs_per_difficulty() {
        let corpus = reference_corpus();
        assert_eq!(corpus.len(), 9);
        for name in DifficultyScale::default().names() {
            let count = corpus.iter().filter(|s| &s.difficulty == name).count();
            assert_eq!(count, 3, "Expected three `{name}' songs");
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let corpus = reference_corpus();
        let first = corpus.iter().next().unwrap();
        let last = corpus.iter().last().unwrap();
        assert_eq!(first.name, "imagine");
        assert_eq!(last.name, "bulletproof");
        assert_eq!(last.difficulty, "hard");
    }
}
