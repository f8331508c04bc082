use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use url::Url;

use crate::utils::error::Result;

/// Identifies one request out of the fixed boot-time set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestId {
    Options,
    UserInfo,
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::Options => write!(f, "options"),
            RequestId::UserInfo => write!(f, "userInfo"),
        }
    }
}

/// A request identifier bound to the URL it is fetched from. The set is
/// fixed per variant, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub id: RequestId,
    pub url: Url,
}

impl RequestSpec {
    pub fn new(id: RequestId, url: Url) -> Self {
        Self { id, url }
    }
}

/// Outcome of a single dispatched request: the decoded body, or the failure
/// that sinks the whole cycle. Consumed exactly once by the join.
pub type FetchResult = Result<Value>;

/// Which endpoints a deployment queries and which fields it surfaces.
///
/// One pipeline parameterized by capability accessors replaces the three
/// near-duplicate bootstrap scripts this grew out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Variant {
    /// Login state comes from the options payload itself.
    OptionsOnly,
    /// A dedicated user-info endpoint provides the login state.
    Account,
    /// Like `Account`, and also surfaces the cash available for trading.
    AccountCash,
}

impl Variant {
    /// Whether login state comes from the dedicated user-info endpoint
    /// instead of the options payload.
    pub fn fetches_user_info(self) -> bool {
        !matches!(self, Variant::OptionsOnly)
    }

    pub fn extracts_cash(self) -> bool {
        matches!(self, Variant::AccountCash)
    }

    /// The fixed request set for this variant. Requests are dispatched in
    /// this order, but nothing may rely on completion order.
    pub fn request_specs(self, base: &Url) -> Result<Vec<RequestSpec>> {
        let mut specs = vec![RequestSpec::new(RequestId::Options, base.join("options")?)];
        if self.fetches_user_info() {
            specs.push(RequestSpec::new(RequestId::UserInfo, base.join("user/info")?));
        }
        Ok(specs)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::OptionsOnly => write!(f, "options-only"),
            Variant::Account => write!(f, "account"),
            Variant::AccountCash => write!(f, "account-cash"),
        }
    }
}

/// The key/value view handed to the template renderer. Built once per boot
/// cycle, only after every request has settled successfully, and owned by
/// the render step that built it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationModel {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
    #[serde(rename = "availableFortrading", skip_serializing_if = "Option::is_none")]
    pub available_for_trading: Option<f64>,
    pub options: Value,
    pub suggestions: Value,
}

/// Lifecycle of the boot pipeline. `Fetching` begins at construction, not at
/// the load event. `Rendered` and `Failed` are terminal for the lifetime of
/// the page: no retry, no re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    Idle,
    Fetching,
    Rendered,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_only_variant_queries_a_single_endpoint() {
        let base = Url::parse("http://localhost:8080/").unwrap();
        let specs = Variant::OptionsOnly.request_specs(&base).unwrap();

        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].id, RequestId::Options);
        assert_eq!(specs[0].url.as_str(), "http://localhost:8080/options");
    }

    #[test]
    fn account_variants_add_the_user_info_endpoint() {
        let base = Url::parse("http://localhost:8080").unwrap();

        for variant in [Variant::Account, Variant::AccountCash] {
            let specs = variant.request_specs(&base).unwrap();
            assert_eq!(specs.len(), 2);
            assert_eq!(specs[1].id, RequestId::UserInfo);
            assert_eq!(specs[1].url.as_str(), "http://localhost:8080/user/info");
        }
    }

    #[test]
    fn model_serializes_with_the_page_field_names() {
        let model = PresentationModel {
            logged_in: true,
            available_for_trading: Some(500.0),
            options: serde_json::json!([1, 2]),
            suggestions: serde_json::json!([]),
        };

        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["loggedIn"], serde_json::json!(true));
        assert_eq!(value["availableFortrading"], serde_json::json!(500.0));
        assert_eq!(value["options"], serde_json::json!([1, 2]));
    }

    #[test]
    fn absent_cash_field_is_omitted_entirely() {
        let model = PresentationModel {
            logged_in: false,
            available_for_trading: None,
            options: Value::Null,
            suggestions: Value::Null,
        };

        let value = serde_json::to_value(&model).unwrap();
        assert!(value.get("availableFortrading").is_none());
    }
}
