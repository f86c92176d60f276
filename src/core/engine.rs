use crate::core::store::RecordStore;
use crate::core::submission;
use crate::domain::model::EXPORT_FILENAME;
use crate::domain::ports::{ExportTarget, FormSurface};
use crate::utils::error::Result;

/// Drives one cataloguing session: reads submit events from the form
/// surface, runs validation and append, re-renders the table after every
/// event, and offers the CSV export whenever the store is non-empty.
pub struct InventoryEngine<S: FormSurface, E: ExportTarget> {
    surface: S,
    export: E,
    store: RecordStore,
}

impl<S: FormSurface, E: ExportTarget> InventoryEngine<S, E> {
    pub fn new(surface: S, export: E) -> Self {
        Self {
            surface,
            export,
            store: RecordStore::new(),
        }
    }

    /// Runs until the surface reports the session is over. Returns the
    /// number of records registered during the session.
    pub fn run(&mut self) -> Result<usize> {
        while let Some(submission) = self.surface.next_submission()? {
            let outcome = submission::submit(&mut self.store, submission);
            self.surface.show_outcome(&outcome)?;

            if self.store.is_empty() {
                continue;
            }

            self.surface.show_table(&self.store.snapshot_table())?;
            if self.surface.offer_export()? {
                let data = self.store.export_csv()?;
                self.export.write_export(EXPORT_FILENAME, &data)?;
                tracing::info!(records = self.store.len(), "CSV export written");
            }
        }

        Ok(self.store.len())
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}
