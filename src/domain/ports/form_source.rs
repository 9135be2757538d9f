//! Form Source Port
//!
//! "Read current form state": the only capability the engine needs from the
//! form layer. Implementations re-read on every call; nothing is cached.

use crate::domain::entities::{FormConventions, FormDocument, FormSnapshot};
use crate::error::TallyResult;

pub trait FormSource {
    /// Read the form as it is right now.
    fn read(&self) -> TallyResult<FormSnapshot>;
}

/// Form source backed by an in-memory document.
///
/// Used by interactive sessions and replays, which mutate the document
/// directly when a checkbox is toggled.
#[derive(Debug, Clone)]
pub struct InMemoryFormSource {
    document: FormDocument,
    conventions: FormConventions,
}

impl InMemoryFormSource {
    pub fn new(document: FormDocument, conventions: FormConventions) -> Self {
        Self {
            document,
            conventions,
        }
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut FormDocument {
        &mut self.document
    }
}

impl FormSource for InMemoryFormSource {
    fn read(&self) -> TallyResult<FormSnapshot> {
        Ok(self.document.snapshot(&self.conventions))
    }
}
