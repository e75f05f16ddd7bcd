//! # Chordclass
//!
//! Command-line front end: trains on a corpus of labelled songs and scores
//! chord sequences by playing difficulty.
//!
//! ## Usage
//!
//! ```bash
//! # Seed the corpus with the reference songs
//! chordclass init-reference
//!
//! # Add your own
//! chordclass add-song wonderwall --difficulty medium em7 g dsus4 a7sus4
//! chordclass add-song toxic --index 2 cm eb g cdim
//!
//! # Score a chord sequence
//! chordclass classify d g e dm
//! ```

use anyhow::{bail, Context, Result};
use chordclass::algorithm::{self, ScoringContext};
use chordclass::cli::{self, Command, Source};
use chordclass::config::RuntimeConfig;
use chordclass::model::Model;
use chordclass::song::Corpus;
use chordclass::stats::LabelStatistics;
use chordclass::{completion, model, reference};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use std::io;

/// Main entry point.
///
/// Logging is controlled via `RUST_LOG`:
/// - `RUST_LOG=debug chordclass train` - per-label statistics
/// - `RUST_LOG=chordclass::algorithm=trace chordclass classify d g` - every scoring factor
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    if let Command::Completion { shell } = args.command {
        let mut cmd = cli::Args::command();
        completion::write_completions(shell, &mut cmd, &mut io::stdout());
        return Ok(());
    }

    let mut config = RuntimeConfig::load()?;
    if let Some(path) = args.corpus {
        config.corpus_path = path;
    }
    debug!("Using corpus file {}", config.corpus_path.display());

    match args.command {
        Command::Classify { chords, smoothing, source } => {
            let context = ScoringContext::with_smoothing(smoothing.unwrap_or(config.smoothing))?;
            let model = model::train(&load_corpus(&config, source)?)?;
            let scores = algorithm::classify(&model, chords.as_slice(), &context);

            for (label, score) in scores.iter() {
                println!("{label:<12} {score}");
            }
            if let Some((label, _)) = scores.best() {
                println!("Most likely: {label}");
            }
        }
        Command::Train { source } => {
            let stats = LabelStatistics::from_corpus(&load_corpus(&config, source)?)?;
            let model = Model::from_statistics(stats.clone());

            println!("{} songs, {} distinct chords", model.corpus_size(), model.vocabulary().len());
            for label in model.labels() {
                let songs = stats.label_count(label);
                let prior = model.prior(label).unwrap_or_default();
                println!("{label:<12} {songs:>4} songs  prior {prior}");
            }
        }
        Command::AddSong { name, difficulty, index, chords } => {
            let mut corpus = if config.corpus_path.exists() {
                Corpus::load(&config.corpus_path)?
            } else {
                Corpus::new()
            };

            match (index, difficulty) {
                (Some(index), _) => {
                    corpus.add_rated_song(&name, chords.as_slice(), index, &config.difficulties)?;
                }
                (None, Some(label)) => corpus.add_song(&name, chords.as_slice(), &label),
                (None, None) => bail!("Give the difficulty with --difficulty or --index"),
            }
            corpus.save(&config.corpus_path).with_context(|| {
                format!("Failed to write corpus {}", config.corpus_path.display())
            })?;
            info!("Added `{name}' ({} chords)", chords.len());
            println!("Corpus now has {} songs", corpus.len());
        }
        Command::InitReference { force } => {
            if config.corpus_path.exists() && !force {
                bail!(
                    "Corpus already exists at {}. Use --force to overwrite.",
                    config.corpus_path.display()
                );
            }
            let corpus = reference::reference_corpus();
            corpus.save(&config.corpus_path)?;
            println!("Wrote {} songs to {}", corpus.len(), config.corpus_path.display());
        }
        Command::Vocabulary { source } => {
            let model = model::train(&load_corpus(&config, source)?)?;
            for chord in model.vocabulary().iter() {
                println!("{chord}");
            }
        }
        // Written above, before any config is read.
        Command::Completion { .. } => {}
    }

    Ok(())
}

fn load_corpus(config: &RuntimeConfig, source: Source) -> Result<Corpus> {
    if source.reference {
        return Ok(reference::reference_corpus());
    }
    Corpus::load(&config.corpus_path).with_context(|| {
        format!(
            "Failed to read corpus {}. Run `chordclass init-reference` or pass --reference.",
            config.corpus_path.display()
        )
    })
}
