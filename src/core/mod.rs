pub mod engine;
pub mod store;
pub mod submission;
pub mod validator;

pub use crate::domain::model::{ArtworkRecord, SubmitOutcome, Submission, TableSnapshot};
pub use crate::domain::ports::{ConfigProvider, ExportTarget, FormSurface};
pub use crate::utils::error::Result;
