pub mod check;
pub mod config;
pub mod init;
pub mod report;

pub use check::handle_check;
pub use config::handle_config;
pub use init::handle_init;
pub use report::handle_report;

use crate::cli::OnFetchError;
use repo_license_auditor::config::FetchErrorPolicy;

impl From<OnFetchError> for FetchErrorPolicy {
    fn from(value: OnFetchError) -> Self {
        match value {
            OnFetchError::Fail => FetchErrorPolicy::Fail,
            OnFetchError::Skip => FetchErrorPolicy::Skip,
        }
    }
}
