mod error;
mod host;
mod include;
mod resolver;

pub use error::{Diagnostic, ResolveError};
pub use host::HostEntry;
pub use resolver::{DEFAULT_MAX_DEPTH, Resolution, ResolveOptions, Resolver};
