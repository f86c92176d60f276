pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::terminal::TerminalSurface;
pub use config::{cli::LocalExport, CliConfig};
pub use core::{engine::InventoryEngine, store::RecordStore};
pub use domain::model::{ArtworkRecord, SubmitOutcome, Submission, TableSnapshot};
pub use utils::error::{InventoryError, Result};
