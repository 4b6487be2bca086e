use std::collections::HashMap;
use sbom_model::prelude::*;

/// Mock DocumentReader serving documents from memory
#[derive(Default)]
pub struct MockDocumentReader {
    documents: HashMap<DocumentSource, Vec<u8>>,
    pub should_fail: bool,
}

impl MockDocumentReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, name: &str, content: &str) -> Self {
        self.documents
            .insert(DocumentSource::from_arg(name), content.as_bytes().to_vec());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            documents: HashMap::new(),
            should_fail: true,
        }
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, source: &DocumentSource) -> Result<Vec<u8>> {
        if self.should_fail {
            anyhow::bail!("Mock document read failure");
        }
        self.documents
            .get(source)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock document not found: {}", source))
    }
}
