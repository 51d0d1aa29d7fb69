pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::registry::{RegistryError, SubjectRegistry};
pub use domain::subject::{Subject, SubjectDraft};
