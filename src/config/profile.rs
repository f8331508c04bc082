use crate::domain::model::Variant;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BootError, Result};
use crate::utils::validation::{validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Boot profile loaded from a TOML file. Covers the same settings as the
/// command line flags; handy for checked-in per-environment setups.
///
/// ```toml
/// [source]
/// base_url = "http://localhost:8080/"
/// variant = "account-cash"
///
/// [page]
/// template = "./page/template.html"
/// mount = "./page/index.html"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootProfile {
    pub source: SourceSection,
    pub page: PageSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub base_url: String,
    pub variant: Variant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSection {
    pub template: String,
    pub mount: String,
}

impl BootProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BootError::ConfigError {
            field: "profile".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for BootProfile {
    fn validate(&self) -> Result<()> {
        validate_url("source.base_url", &self.source.base_url)?;
        validate_path("page.template", &self.page.template)?;
        validate_path("page.mount", &self.page.mount)
    }
}

impl ConfigProvider for BootProfile {
    fn base_url(&self) -> &str {
        &self.source.base_url
    }

    fn variant(&self) -> Variant {
        self.source.variant
    }

    fn template_path(&self) -> &str {
        &self.page.template
    }

    fn output_path(&self) -> &str {
        &self.page.mount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"
[source]
base_url = "http://localhost:8080/"
variant = "account-cash"

[page]
template = "./page/template.html"
mount = "./page/index.html"
"#;

    #[test]
    fn parses_a_full_profile() {
        let profile = BootProfile::from_toml_str(PROFILE).unwrap();

        assert_eq!(profile.variant(), Variant::AccountCash);
        assert_eq!(profile.base_url(), "http://localhost:8080/");
        assert_eq!(profile.template_path(), "./page/template.html");
        assert_eq!(profile.output_path(), "./page/index.html");
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn unknown_variant_is_a_config_error() {
        let err = BootProfile::from_toml_str(
            r#"
[source]
base_url = "http://localhost:8080/"
variant = "mystery"

[page]
template = "t"
mount = "m"
"#,
        )
        .unwrap_err();

        assert!(matches!(err, BootError::ConfigError { .. }));
    }

    #[test]
    fn validation_rejects_a_bad_base_url() {
        let mut profile = BootProfile::from_toml_str(PROFILE).unwrap();
        profile.source.base_url = "ftp://nope".to_string();

        assert!(profile.validate().is_err());
    }
}
