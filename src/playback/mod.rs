//! Real-time playback: backend contract, cpal binding, and the driver.

mod backend;
mod driver;
mod output;

pub use backend::{AudioBackend, OutputStream, PlaybackError, RenderCallback, StreamDesc};
pub use driver::{DEFAULT_PERIOD_SIZE, PlaybackDriver, StreamState};
pub use output::{CpalBackend, CpalStream};
