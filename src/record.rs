/// Body of an emitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    /// Sanitized content already inside its CDATA envelope; written verbatim.
    Payload(String),
    /// Plain diagnostic text; escaped when written.
    Placeholder(String),
}

impl RecordBody {
    pub fn as_str(&self) -> &str {
        match self {
            RecordBody::Payload(s) | RecordBody::Placeholder(s) => s,
        }
    }
}

/// One entry of the output document. Indices are 1-based and dense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub index: usize,
    pub source: String,
    pub body: RecordBody,
}
