//! Guess how hard a song is to play from the chords it uses.
//!
//! Core modules:
//! - [`song`] - Training songs and the corpus
//! - [`stats`] - Per-label song and chord counts
//! - [`model`] - Label priors and chord likelihoods
//! - [`algorithm`] - Smoothed difficulty scoring
//! - [`classifier`] - Shareable handle with atomic retraining
//!
//! ### Supporting Modules
//!
//! - [`vocabulary`] - Distinct chords seen in training
//! - [`reference`] - Built-in nine-song reference corpus
//! - [`config`] - Data directory and runtime configuration
//! - [`cli`] - Command-line interface definitions
//! - [`completion`] - Shell completion generation
//! - [`error`] - Error types
//!
//! ## Quick Start Example
//!
//! ```
//! use chordclass::classifier::Classifier;
//! use chordclass::song::Corpus;
//!
//! let mut corpus = Corpus::new();
//! corpus.add_song("imagine", &["c", "cmaj7", "f", "am", "dm", "g", "e7"], "easy");
//! corpus.add_song("toxic", &["cm", "eb", "g", "cdim", "eb7", "d7"], "hard");
//!
//! let classifier = Classifier::new();
//! classifier.train(&corpus)?;
//!
//! let scores = classifier.classify(&["c", "f", "am"])?;
//! assert_eq!(scores.best().map(|(label, _)| label), Some("easy"));
//! # Ok::<(), chordclass::error::Error>(())
//! ```
//!
//! ## Scoring
//!
//! Training turns the corpus into a prior per difficulty (its share of the
//! songs) and a likelihood per (difficulty, chord) pair (that chord's
//! occurrences among the difficulty's songs, divided by the corpus size).
//! Classification starts each difficulty at `prior + 1.01` and multiplies in
//! `likelihood + 1.01` for every query chord seen with that difficulty.
//! Chords never seen with a difficulty leave its score alone. Scores are
//! relative: compare them, don't sum them.

pub mod algorithm;
pub mod classifier;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod model;
pub mod reference;
pub mod song;
pub mod stats;
pub mod vocabulary;
