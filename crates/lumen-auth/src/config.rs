//! Authentication configuration bundle.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default cloud region for generation jobs.
pub const DEFAULT_LOCATION: &str = "us-central1";

/// Configuration bundle for credential resolution.
///
/// All four credential descriptors are optional; the resolver picks the
/// first satisfiable one in priority order. Field names match the keys
/// the host engine stores in its library settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthConfig {
    /// Path to a workload-identity federation config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_identity_config_path: Option<PathBuf>,
    /// Path to a service-account key file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_file_path: Option<PathBuf>,
    /// Cloud project id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Inline service-account key JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_credentials_json: Option<String>,
    /// Cloud region for generation jobs.
    pub location: String,
}

impl AuthConfig {
    /// Environment variable holding the workload-identity config path.
    pub const ENV_WORKLOAD_IDENTITY_CONFIG_PATH: &'static str =
        "GOOGLE_WORKLOAD_IDENTITY_CONFIG_PATH";
    /// Environment variable holding the service-account file path.
    pub const ENV_SERVICE_ACCOUNT_FILE_PATH: &'static str = "GOOGLE_SERVICE_ACCOUNT_FILE_PATH";
    /// Environment variable holding the project id.
    pub const ENV_PROJECT_ID: &'static str = "GOOGLE_CLOUD_PROJECT_ID";
    /// Environment variable holding inline credentials JSON.
    pub const ENV_APPLICATION_CREDENTIALS_JSON: &'static str =
        "GOOGLE_APPLICATION_CREDENTIALS_JSON";
    /// Environment variable overriding the location.
    pub const ENV_LOCATION: &'static str = "GOOGLE_CLOUD_LOCATION";

    /// Creates an empty configuration with the default location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads the `GOOGLE_*` variables the node library documents; unset
    /// variables leave their descriptors absent.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |value: String| (!value.trim().is_empty()).then_some(value);

        Self {
            workload_identity_config_path: lookup(Self::ENV_WORKLOAD_IDENTITY_CONFIG_PATH)
                .and_then(non_empty)
                .map(PathBuf::from),
            service_account_file_path: lookup(Self::ENV_SERVICE_ACCOUNT_FILE_PATH)
                .and_then(non_empty)
                .map(PathBuf::from),
            project_id: lookup(Self::ENV_PROJECT_ID).and_then(non_empty),
            application_credentials_json: lookup(Self::ENV_APPLICATION_CREDENTIALS_JSON)
                .and_then(non_empty),
            location: lookup(Self::ENV_LOCATION)
                .and_then(non_empty)
                .unwrap_or_else(|| DEFAULT_LOCATION.to_owned()),
        }
    }

    /// Sets the workload-identity config path.
    #[must_use]
    pub fn with_workload_identity_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.workload_identity_config_path = Some(path.into());
        self
    }

    /// Sets the service-account file path.
    #[must_use]
    pub fn with_service_account_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.service_account_file_path = Some(path.into());
        self
    }

    /// Sets the project id.
    #[must_use]
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Sets the inline credentials JSON.
    #[must_use]
    pub fn with_application_credentials_json(mut self, json: impl Into<String>) -> Self {
        self.application_credentials_json = Some(json.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Returns the workload-identity config path, if set.
    #[must_use]
    pub fn workload_identity_config_path(&self) -> Option<&Path> {
        self.workload_identity_config_path.as_deref()
    }

    /// Returns the service-account file path, if set.
    #[must_use]
    pub fn service_account_file_path(&self) -> Option<&Path> {
        self.service_account_file_path.as_deref()
    }

    /// Returns the project id, if set.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Returns the inline credentials JSON, if set.
    #[must_use]
    pub fn application_credentials_json(&self) -> Option<&str> {
        self.application_credentials_json.as_deref()
    }

    /// Returns the configured location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns `true` when no credential descriptor is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workload_identity_config_path.is_none()
            && self.service_account_file_path.is_none()
            && self.project_id.is_none()
            && self.application_credentials_json.is_none()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            workload_identity_config_path: None,
            service_account_file_path: None,
            project_id: None,
            application_credentials_json: None,
            location: DEFAULT_LOCATION.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_is_empty() {
        let config = AuthConfig::new();
        assert!(config.is_empty());
        assert_eq!(config.location(), DEFAULT_LOCATION);
    }

    #[test]
    fn test_from_lookup_reads_documented_keys() {
        let mut env = HashMap::new();
        env.insert(AuthConfig::ENV_PROJECT_ID, "p1");
        env.insert(AuthConfig::ENV_SERVICE_ACCOUNT_FILE_PATH, "/keys/sa.json");
        env.insert(AuthConfig::ENV_LOCATION, "europe-west4");

        let config = AuthConfig::from_lookup(|key| env.get(key).map(|v| (*v).to_owned()));
        assert_eq!(config.project_id(), Some("p1"));
        assert_eq!(
            config.service_account_file_path(),
            Some(Path::new("/keys/sa.json"))
        );
        assert_eq!(config.location(), "europe-west4");
        assert!(config.workload_identity_config_path().is_none());
        assert!(config.application_credentials_json().is_none());
    }

    #[test]
    fn test_from_lookup_ignores_blank_values() {
        let config = AuthConfig::from_lookup(|key| {
            (key == AuthConfig::ENV_PROJECT_ID).then(|| "   ".to_owned())
        });
        assert!(config.is_empty());
        assert_eq!(config.location(), DEFAULT_LOCATION);
    }

    #[test]
    fn test_camel_case_keys() {
        let json = r#"{
            "serviceAccountFilePath": "/keys/sa.json",
            "projectId": "p1"
        }"#;
        let config: AuthConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.project_id(), Some("p1"));
        assert_eq!(
            config.service_account_file_path(),
            Some(Path::new("/keys/sa.json"))
        );
        assert_eq!(config.location(), DEFAULT_LOCATION);
    }
}
