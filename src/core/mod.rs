// Public modules
pub mod error;
pub mod identity;
pub mod materialize;
pub mod paths;
pub mod provision;
pub mod template;
pub mod validate;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use identity::ProjectIdentity;
pub use materialize::MaterializeReport;
pub use provision::{provision, ProvisionOutcome};
pub use template::Replacements;
