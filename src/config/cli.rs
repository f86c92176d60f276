use crate::domain::ports::ExportTarget;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Writes the CSV export artifact under a local base directory.
#[derive(Debug, Clone)]
pub struct LocalExport {
    base_path: String,
}

impl LocalExport {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl ExportTarget for LocalExport {
    fn write_export(&self, filename: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(filename);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
