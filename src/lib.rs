pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::BootConfig;
pub use config::{cli::FilePage, profile::BootProfile};
pub use core::{boot::BootLoader, render::TagRenderer, source::HttpSource};
pub use domain::model::{BootState, PresentationModel, RequestId, RequestSpec, Variant};
pub use utils::error::{BootError, Result};
