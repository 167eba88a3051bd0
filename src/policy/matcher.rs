use serde::{Deserialize, Serialize};
use super::config::LicensePolicy;

/// 違反レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationLevel {
    Allowed,
    Blocked,
    NotAllowed,
}

impl LicensePolicy {
    pub fn is_blocked(&self, license: &str) -> bool {
        self.blocked_licenses.contains(license)
    }

    pub fn is_allowed(&self, license: &str) -> bool {
        self.allowed_licenses.contains(license)
    }

    /// ライセンスの違反レベルをチェック
    pub fn check_license(&self, license: &str) -> ViolationLevel {
        // Blocked wins even when the license is also allowed
        if self.is_blocked(license) {
            return ViolationLevel::Blocked;
        }

        if self.is_allowed(license) {
            return ViolationLevel::Allowed;
        }

        ViolationLevel::NotAllowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_license_levels() {
        let policy = LicensePolicy::new(["MIT", "Apache-2.0"], ["GPL-3.0"]);

        assert_eq!(policy.check_license("MIT"), ViolationLevel::Allowed);
        assert_eq!(policy.check_license("Apache-2.0"), ViolationLevel::Allowed);
        assert_eq!(policy.check_license("GPL-3.0"), ViolationLevel::Blocked);
        assert_eq!(policy.check_license("MPL-2.0"), ViolationLevel::NotAllowed);
    }

    #[test]
    fn test_blocked_takes_precedence_over_allowed() {
        let policy = LicensePolicy::new(["GPL-3.0"], ["GPL-3.0"]);
        assert_eq!(policy.check_license("GPL-3.0"), ViolationLevel::Blocked);
    }

    #[test]
    fn test_matching_is_exact() {
        let policy = LicensePolicy::new(["MIT"], Vec::<String>::new());
        assert_eq!(policy.check_license("mit"), ViolationLevel::NotAllowed);
        assert_eq!(policy.check_license("MIT-0"), ViolationLevel::NotAllowed);
    }
}
