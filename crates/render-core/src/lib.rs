pub mod error;
pub mod recording;
pub mod traits;
pub mod types;

pub use error::RenderError;
pub use recording::{DrawEvent, RecordingBackend};
pub use traits::DocumentBackend;
pub use types::FormControl;
