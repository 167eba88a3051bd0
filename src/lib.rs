pub mod advisory;
pub mod audit;
pub mod config;
pub mod dependency;
pub mod error;
pub mod github;
pub mod init;
pub mod output;
pub mod policy;

// Re-export main types for easy access
pub use audit::{ComplianceReport, InventoryOutcome};
pub use dependency::Dependency;
pub use error::{AuditError, Result};
pub use github::{GitHubClient, RepoSlug, RepositorySummary};
pub use policy::{LicensePolicy, Violation, ViolationLevel};
