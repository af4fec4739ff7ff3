/// A rendered export: what a download would carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub content: String,
    pub filename: String,
    pub media_type: &'static str,
}

impl ExportedFile {
    pub fn new(content: String, filename: String, media_type: &'static str) -> Self {
        Self {
            content,
            filename,
            media_type,
        }
    }
}
