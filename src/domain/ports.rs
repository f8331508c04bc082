use crate::domain::model::{PresentationModel, RequestSpec, Variant};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Opaque source of structured data, one request at a time.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_json(&self, spec: &RequestSpec) -> Result<Value>;
}

/// Template-rendering collaborator. Pure and synchronous; must not fail.
pub trait Renderer {
    fn render(&self, template: &str, model: &PresentationModel) -> String;
}

/// The host page: owns the template markup and the single mount point the
/// boot pipeline writes into.
pub trait Page {
    /// The pre-existing template markup.
    fn template(&self) -> Result<String>;

    /// Replaces the mount point content wholly.
    fn replace(&mut self, markup: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn variant(&self) -> Variant;
    fn template_path(&self) -> &str;
    fn output_path(&self) -> &str;
}
