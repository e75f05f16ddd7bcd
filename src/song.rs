//! Songs and the training corpus.
//!
//! A [`Corpus`] is an append-only, insertion-ordered list of labelled songs.
//! It can be read from and written to a JSON file so the CLI has somewhere
//! to keep the user's songs between runs.

use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// One labelled training song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Identifier, usually the title.
    pub name: String,
    /// Chord tokens in the order they appear. Repeats are kept.
    pub chords: Vec<String>,
    /// Difficulty label, e.g. `easy`.
    pub difficulty: String,
}

impl Song {
    /// Build a song, copying every chord token as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use chordclass::song::Song;
    ///
    /// let song = Song::new("creep", &["g", "b", "c", "cm"], "medium");
    /// assert_eq!(song.chords.len(), 4);
    /// assert_eq!(song.difficulty, "medium");
    /// ```
    pub fn new<S: AsRef<str>>(name: &str, chords: &[S], difficulty: &str) -> Self {
        Self {
            name: name.to_string(),
            chords: chords.iter().map(|c| c.as_ref().to_string()).collect(),
            difficulty: difficulty.to_string(),
        }
    }
}

/// Ordered list of difficulty names, addressed by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DifficultyScale {
    names: Vec<String>,
}

impl DifficultyScale {
    /// Scale whose index `i` maps to `names[i]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chordclass::song::DifficultyScale;
    ///
    /// let scale = DifficultyScale::new(&["beginner", "advanced"]);
    /// assert_eq!(scale.name(1)?, "advanced");
    /// assert!(scale.name(2).is_err());
    /// # Ok::<(), chordclass::error::Error>(())
    /// ```
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            names: names.iter().map(|n| n.as_ref().to_string()).collect(),
        }
    }

    /// Name at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDifficulty`] when `index` is out of range.
    pub fn name(&self, index: usize) -> Result<&str> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(Error::UnknownDifficulty {
                index,
                available: self.names.len(),
            })
    }

    /// All names, index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for DifficultyScale {
    fn default() -> Self {
        Self::new(&["easy", "medium", "hard"])
    }
}

/// Append-only collection of training songs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    songs: Vec<Song>,
}

impl Corpus {
    /// Create an empty corpus. Training on it fails until a song is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a song. No validation beyond what the types already enforce.
    pub fn add_song<S: AsRef<str>>(&mut self, name: &str, chords: &[S], difficulty: &str) {
        self.songs.push(Song::new(name, chords, difficulty));
    }

    /// Append a song whose difficulty is given as an index into `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDifficulty`] if `index` is outside the scale;
    /// the corpus is left unchanged.
    pub fn add_rated_song<S: AsRef<str>>(
        &mut self,
        name: &str,
        chords: &[S],
        index: usize,
        scale: &DifficultyScale,
    ) -> Result<()> {
        let difficulty = scale.name(index)?;
        self.add_song(name, chords, difficulty);
        Ok(())
    }

    /// Songs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    /// Number of songs, i.e. the divisor used for priors and likelihoods.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Read a corpus from a JSON array of songs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened and
    /// [`Error::Json`] if it is not an array of songs.
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let corpus: Corpus = serde_json::from_reader(reader)?;
        debug!("Loaded {} songs from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Write the corpus as JSON, replacing `path` atomically.
    ///
    /// Missing parent directories are created. The data goes to a temporary
    /// file next to `path` first, so readers never see a partial corpus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on any filesystem failure.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, self)?;
            writer.flush()?;
        }
        temp_file.persist(path)?;

        debug!("Saved {} songs to {}", self.len(), path.display());
        Ok(())
    }
}

impl FromIterator<Song> for Corpus {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        Self {
            songs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}
