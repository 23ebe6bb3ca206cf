use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub documents: DocumentSettings,
}

/// Where a dirty document ends up after the user confirms its close.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Only documents that were never saved leave the workspace; located
    /// documents are left for whoever owns the save path to remove.
    #[default]
    UntitledOnly,
    Always,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    pub dirty_marker: String,
    pub untitled_prefix: String,
    pub removal_policy: RemovalPolicy,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            dirty_marker: "*".to_string(),
            untitled_prefix: "Untitled".to_string(),
            removal_policy: RemovalPolicy::UntitledOnly,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
