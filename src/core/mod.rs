pub mod boot;
pub mod derive;
pub mod render;
pub mod source;

pub use crate::domain::model::{BootState, PresentationModel, RequestId, RequestSpec, Variant};
pub use crate::domain::ports::{ConfigProvider, DataSource, Page, Renderer};
pub use crate::utils::error::Result;
