pub mod config;
pub mod loader;
pub mod matcher;
pub mod checker;

// Re-export main types
pub use config::LicensePolicy;
pub use loader::{load_policy, parse_policy, PolicyFormat};
pub use matcher::ViolationLevel;
pub use checker::{check_compliance, Violation};
