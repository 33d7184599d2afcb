pub mod recording_kernel;
pub mod traits;
pub mod types;

pub use recording_kernel::RecordingKernel;
pub use traits::*;
pub use types::*;
