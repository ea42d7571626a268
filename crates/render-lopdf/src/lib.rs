//! PDF output backed by `lopdf`. The backend builds the whole document
//! in memory and writes it to disk on finalize; fonts are the base-14
//! set with WinAnsi encoding, images are embedded without re-encoding,
//! and form controls become AcroForm fields.

mod forms;
pub mod images;
pub mod metrics;
mod renderer;

pub use renderer::PdfBackend;
