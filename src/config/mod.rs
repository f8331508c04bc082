pub mod cli;
pub mod profile;

#[cfg(feature = "cli")]
use crate::domain::model::Variant;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dash-boot")]
#[command(about = "Fetches account and options data and renders the dashboard page")]
pub struct BootConfig {
    /// Server the data endpoints hang off of.
    #[arg(long, default_value = "http://localhost:8080/")]
    pub base_url: String,

    /// Which endpoints to query and which fields to surface.
    #[arg(long, value_enum, default_value = "options-only")]
    pub variant: Variant,

    /// File holding the page template markup.
    #[arg(long, default_value = "./page/template.html")]
    pub template_path: String,

    /// File the rendered markup is written to.
    #[arg(long, default_value = "./page/index.html")]
    pub output_path: String,

    /// TOML profile overriding the flags above.
    #[arg(long)]
    pub profile: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for BootConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn variant(&self) -> Variant {
        self.variant
    }

    fn template_path(&self) -> &str {
        &self.template_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

#[cfg(feature = "cli")]
impl Validate for BootConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("template_path", &self.template_path)?;
        validate_path("output_path", &self.output_path)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn default_flags_validate() {
        let config = BootConfig::parse_from(["dash-boot"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.variant, Variant::OptionsOnly);
    }

    #[test]
    fn variant_flag_selects_capabilities() {
        let config = BootConfig::parse_from(["dash-boot", "--variant", "account-cash"]);
        assert_eq!(config.variant, Variant::AccountCash);
        assert!(config.variant.extracts_cash());
    }

    #[test]
    fn bad_base_url_fails_validation() {
        let config = BootConfig::parse_from(["dash-boot", "--base-url", "ftp://nope"]);
        assert!(config.validate().is_err());
    }
}
