use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// ライセンスポリシー設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicensePolicy {
    /// ポリシー名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ポリシーの説明
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 許可されたライセンス
    #[serde(default)]
    pub allowed_licenses: IndexSet<String>,
    /// 禁止されたライセンス
    #[serde(default)]
    pub blocked_licenses: IndexSet<String>,
}

impl LicensePolicy {
    pub fn new<A, B>(allowed: A, blocked: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            name: None,
            description: None,
            allowed_licenses: allowed.into_iter().map(Into::into).collect(),
            blocked_licenses: blocked.into_iter().map(Into::into).collect(),
        }
    }
}
