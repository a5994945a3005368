mod error;
mod generator;
mod guid;
mod types;
mod writer;

pub use error::WriteError;
pub use generator::generate;
pub use guid::{GuidSource, RandomGuids};
pub use types::{CustomCommand, ProfileDocument, ProfileRecord};
pub use writer::{DEFAULT_FILE_NAME, file_stem, write_multi_file, write_single_file};
