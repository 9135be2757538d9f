//! File-backed form source

use std::path::{Path, PathBuf};

use crate::domain::entities::{FormConventions, FormSnapshot};
use crate::domain::ports::FormSource;
use crate::error::TallyResult;

use super::documents::load_form;

/// Reads the form document from disk on every `read()`.
#[derive(Debug, Clone)]
pub struct FileFormSource {
    path: PathBuf,
    conventions: FormConventions,
}

impl FileFormSource {
    pub fn new(path: impl Into<PathBuf>, conventions: FormConventions) -> Self {
        Self {
            path: path.into(),
            conventions,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FormSource for FileFormSource {
    fn read(&self) -> TallyResult<FormSnapshot> {
        let document = load_form(&self.path)?;
        Ok(document.snapshot(&self.conventions))
    }
}
