//! # Command-Line Interface Module
//!
//! Clap derive definitions for the `chordclass` binary.
//!
//! ## Commands
//!
//! - `classify`: Score a chord sequence against every known difficulty
//! - `train`: Train on the corpus and print priors
//! - `add-song`: Append a labelled song to the corpus file
//! - `init-reference`: Write the built-in reference corpus to the corpus file
//! - `vocabulary`: List every distinct chord in the corpus
//!
//! ## Examples
//!
//! ```bash
//! chordclass init-reference
//! chordclass classify f#m7 a dadd9 dmaj7 bm bm7 d f#m
//! chordclass add-song wonderwall --difficulty medium em7 g dsus4 a7sus4
//! chordclass add-song toxic --index 2 cm eb g cdim
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "chordclass")]
#[command(about = "Chordclass: guess how hard a song is to play from its chords")]
#[command(version)]
pub struct Args {
    /// Corpus file to train on (defaults to the data directory)
    #[arg(long, global = true, env = "CHORDCLASS_CORPUS", value_hint = clap::ValueHint::FilePath)]
    pub corpus: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Where training data comes from.
#[derive(ClapArgs, Debug, Clone, Copy, Default)]
pub struct Source {
    /// Train on the built-in reference corpus instead of the corpus file
    #[arg(long)]
    pub reference: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score chords against every difficulty
    ///
    /// Trains on the corpus, then prints one unnormalized score per
    /// difficulty. Higher means more likely; scores are only comparable
    /// within one query.
    Classify {
        /// Chord tokens in playing order
        #[arg(required = true)]
        chords: Vec<String>,

        /// Additive smoothing constant
        #[arg(long, env = "CHORDCLASS_SMOOTHING")]
        smoothing: Option<f64>,

        #[command(flatten)]
        source: Source,
    },

    /// Train and show label priors
    ///
    /// Prints each difficulty's song count and prior, plus the number of
    /// distinct chords in the corpus.
    Train {
        #[command(flatten)]
        source: Source,
    },

    /// Append a song to the corpus file
    ///
    /// Give the difficulty either as a label with --difficulty, stored
    /// verbatim (so `-d 2` is the label "2"), or as a position in the
    /// configured difficulty scale with --index.
    AddSong {
        /// Song name
        name: String,

        /// Difficulty label, stored as given
        #[arg(short, long, required_unless_present = "index", conflicts_with = "index")]
        difficulty: Option<String>,

        /// Index into the configured difficulty scale (0 = easiest)
        #[arg(short, long)]
        index: Option<usize>,

        /// Chord tokens in playing order
        chords: Vec<String>,
    },

    /// Write the reference corpus to the corpus file
    InitReference {
        /// Overwrite an existing corpus file
        #[arg(long)]
        force: bool,
    },

    /// List every distinct chord in the corpus
    Vocabulary {
        #[command(flatten)]
        source: Source,
    },

    /// Generate shell completions
    ///
    /// Usage: chordclass completion bash > ~/.local/share/bash-completion/completions/chordclass
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
