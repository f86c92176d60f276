use crate::domain::model::{SubmitOutcome, Submission, TableSnapshot};
use crate::utils::error::Result;

/// The rendering surface the core talks to. One call per submit event; the
/// surface owns all presentation concerns (layout, styling, prompts).
pub trait FormSurface {
    /// Collects the next submit event. `Ok(None)` ends the session.
    fn next_submission(&mut self) -> Result<Option<Submission>>;

    /// Presents the verdict of one submission: the fixed success line on
    /// acceptance, the warning list on rejection.
    fn show_outcome(&mut self, outcome: &SubmitOutcome) -> Result<()>;

    /// Renders the accumulated table. Only invoked when it is non-empty.
    fn show_table(&mut self, table: &TableSnapshot) -> Result<()>;

    /// Offers the CSV download action. Returns whether the user took it.
    fn offer_export(&mut self) -> Result<bool>;
}

// Lets callers lend a surface to the engine and inspect it afterwards.
impl<T: FormSurface + ?Sized> FormSurface for &mut T {
    fn next_submission(&mut self) -> Result<Option<Submission>> {
        (**self).next_submission()
    }

    fn show_outcome(&mut self, outcome: &SubmitOutcome) -> Result<()> {
        (**self).show_outcome(outcome)
    }

    fn show_table(&mut self, table: &TableSnapshot) -> Result<()> {
        (**self).show_table(table)
    }

    fn offer_export(&mut self) -> Result<bool> {
        (**self).offer_export()
    }
}

/// Destination for the exported CSV artifact.
pub trait ExportTarget {
    fn write_export(&self, filename: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    fn verbose(&self) -> bool;
}
