//! Shareable classifier handle with atomic retraining.
//!
//! A [`Classifier`] starts untrained. Each successful [`Classifier::train`]
//! builds a complete [`Model`] off to the side and then swaps it in under a
//! short write lock, so concurrent [`Classifier::classify`] calls see either
//! the old model or the new one, never a partial one. A failed training
//! pass leaves the previous model in place.

use crate::algorithm::{self, ScoringContext, Scores};
use crate::error::{Error, Result};
use crate::model::{self, Model};
use crate::song::Corpus;
use log::{debug, warn};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct Classifier {
    model: RwLock<Option<Arc<Model>>>,
    context: ScoringContext,
}

impl Classifier {
    /// Untrained classifier with the default smoothing constant.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: ScoringContext) -> Self {
        Self {
            model: RwLock::new(None),
            context,
        }
    }

    /// Train on `corpus` and publish the resulting model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCorpus`] for an empty corpus. The previously
    /// published model, if any, stays active.
    pub fn train(&self, corpus: &Corpus) -> Result<Arc<Model>> {
        let fresh = match model::train(corpus) {
            Ok(model) => Arc::new(model),
            Err(e) => {
                warn!("Training failed, keeping previous model: {e}");
                return Err(e);
            }
        };

        // The slot holds one Arc; a poisoned lock cannot hold a torn value.
        let mut slot = self.model.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&fresh));
        debug!("Published model trained on {} songs", fresh.corpus_size());
        Ok(fresh)
    }

    /// Current model, if training has succeeded at least once.
    pub fn model(&self) -> Option<Arc<Model>> {
        self.model
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_trained(&self) -> bool {
        self.model().is_some()
    }

    pub fn context(&self) -> &ScoringContext {
        &self.context
    }

    /// Score `chords` against the published model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelNotTrained`] before the first successful
    /// training pass.
    pub fn classify<S: AsRef<str>>(&self, chords: &[S]) -> Result<Scores> {
        let model = self.model().ok_or(Error::ModelNotTrained)?;
        Ok(algorithm::classify(&model, chords, &self.context))
    }
}
