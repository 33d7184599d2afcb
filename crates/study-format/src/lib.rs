pub mod errors;
pub mod load;
pub mod metadata;
pub mod save;
pub mod snapshot;

pub use errors::{LoadError, SaveError};
pub use load::{load_study, Study};
pub use metadata::StudyMetadata;
pub use save::{save_study, FORMAT_ID, FORMAT_VERSION};
pub use snapshot::{ExportRecord, StudyDomain};
