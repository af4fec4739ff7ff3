use crate::shared::Result;
use std::path::PathBuf;

/// PrintSpooler port for handing a rendered document to the host's print dialog
///
/// No PDF bytes are produced by this crate: the PDF export is the HTML
/// export opened in a viewer that offers printing to PDF.
pub trait PrintSpooler {
    /// Opens `html` in a viewer surface and asks it to print, returning
    /// the location of the document handed to the viewer
    ///
    /// # Errors
    /// Returns an error if the viewer cannot be launched
    fn print(&self, html: &str) -> Result<PathBuf>;
}
