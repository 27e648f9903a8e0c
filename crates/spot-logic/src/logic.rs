//! Session orchestrator
//!
//! [`Logic`] owns the [`Model`] and the storage. Each line of input is
//! parsed against the current alias table, executed, and, if the command can
//! change the model, the tracker and preferences are saved.

use crate::command::CommandResult;
use crate::dispatcher::CommandDispatcher;
use crate::error::LogicError;
use spot_model::{AliasTable, Model, StudySpot, Tracker, UserPrefs};
use spot_storage::{sample_tracker, Storage, StorageError};

/// Parses, executes and persists user commands
#[derive(Debug)]
pub struct Logic<S: Storage> {
    model: Model,
    storage: S,
    dispatcher: CommandDispatcher,
}

impl<S: Storage> Logic<S> {
    /// Create from an existing model
    #[must_use]
    pub fn new(model: Model, storage: S) -> Self {
        Self {
            model,
            storage,
            dispatcher: CommandDispatcher::with_defaults(),
        }
    }

    /// Start a session from whatever the storage holds
    ///
    /// A missing tracker file starts from sample data. An unreadable tracker
    /// or preferences file starts empty; the file is overwritten by the next
    /// save.
    #[must_use]
    pub fn load(storage: S) -> Self {
        let tracker = match storage.load_tracker() {
            Ok(Some(tracker)) => tracker,
            Ok(None) => {
                tracing::info!(
                    path = %storage.tracker_path().display(),
                    "data file not found, starting with sample data"
                );
                sample_tracker().unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "sample data invalid, starting empty");
                    Tracker::new()
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load data file, starting empty");
                Tracker::new()
            }
        };

        let prefs = match storage.load_prefs() {
            Ok(prefs) => prefs.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not load preferences, using defaults");
                UserPrefs::new()
            }
        };

        Self::new(Model::new(tracker, prefs), storage)
    }

    /// Handle one line of input
    ///
    /// # Errors
    /// - [`LogicError::Parse`] or [`LogicError::Command`] if the input is
    ///   rejected; the model is unchanged
    /// - [`LogicError::Storage`] if saving failed after the command ran; the
    ///   in-memory change is kept
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, LogicError> {
        tracing::debug!(input, "handling input");
        let command = self.dispatcher.parse(input, self.model.aliases())?;
        let result = command.execute(&mut self.model)?;

        if command.is_mutating() {
            self.save()?;
        }
        Ok(result)
    }

    /// Save tracker and preferences
    ///
    /// # Errors
    /// Returns [`StorageError`] if either write fails.
    pub fn save(&self) -> Result<(), StorageError> {
        self.storage
            .save_tracker(self.model.tracker())
            .and_then(|()| self.storage.save_prefs(self.model.prefs()))
            .map_err(|e| {
                tracing::warn!(error = %e, "saving failed");
                e
            })
    }

    #[inline]
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Spots currently visible
    #[inline]
    #[must_use]
    pub fn filtered_spots(&self) -> Vec<&StudySpot> {
        self.model.filtered_spots()
    }

    #[inline]
    #[must_use]
    pub fn aliases(&self) -> &AliasTable {
        self.model.aliases()
    }

    #[inline]
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
