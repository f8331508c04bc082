use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::core::derive::derive_model;
use crate::core::{
    BootState, DataSource, Page, Renderer, RequestId, RequestSpec, Result, Variant,
};
use crate::domain::model::FetchResult;
use crate::utils::error::BootError;

/// Translator-facing fallback shown in the mount point when any part of the
/// boot cycle fails.
pub const LOAD_ERROR_MESSAGE: &str =
    "Error loading options... Try reloading. If it happens again, let us know!";

/// Orchestrates the startup fetch-join-render cycle exactly once per page
/// load.
///
/// Construction dispatches every configured request immediately so network
/// latency overlaps with whatever else the host does before the load event.
/// The load event maps to [`BootLoader::finish`], which consumes the loader:
/// once `Rendered` or `Failed` is reached there is no retry and no
/// re-render.
pub struct BootLoader {
    variant: Variant,
    in_flight: Vec<(RequestId, JoinHandle<FetchResult>)>,
    state: BootState,
}

impl BootLoader {
    /// Dispatches all requests and returns the loader holding the in-flight
    /// tasks. Must be called from within a tokio runtime.
    pub fn start(source: Arc<dyn DataSource>, variant: Variant, specs: Vec<RequestSpec>) -> Self {
        tracing::debug!("Dispatching {} boot requests ({})", specs.len(), variant);

        let mut in_flight = Vec::with_capacity(specs.len());
        for spec in specs {
            let source = Arc::clone(&source);
            let id = spec.id;
            in_flight.push((id, tokio::spawn(async move { source.fetch_json(&spec).await })));
        }

        Self {
            variant,
            in_flight,
            state: BootState::Fetching,
        }
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    /// The page-load entry point, invoked by the hosting environment once.
    ///
    /// Joins every outstanding request all-or-nothing, derives the
    /// presentation model, renders the page template and replaces the mount
    /// point content. Any failure along the way writes the fixed error
    /// message instead.
    pub async fn finish<R, P>(mut self, renderer: &R, page: &mut P) -> BootState
    where
        R: Renderer,
        P: Page,
    {
        let variant = self.variant;
        let model = match self
            .join()
            .await
            .and_then(|settled| derive_model(variant, settled))
        {
            Ok(model) => model,
            Err(e) => return self.fail(page, &e),
        };

        let template = match page.template() {
            Ok(template) => template,
            Err(e) => return self.fail(page, &e),
        };

        let markup = renderer.render(&template, &model);
        if let Err(e) = page.replace(&markup) {
            return self.fail(page, &e);
        }

        tracing::info!("✅ Rendered the page ({} bytes of markup)", markup.len());
        self.state = BootState::Rendered;
        self.state
    }

    /// Waits for every dispatched request. Tasks settle in whatever order
    /// the network decides; awaiting them in dispatch order only sequences
    /// the collection, not the requests themselves. The first failure wins
    /// and the remaining tasks run to completion unobserved.
    async fn join(&mut self) -> Result<HashMap<RequestId, Value>> {
        let mut settled = HashMap::with_capacity(self.in_flight.len());
        for (id, handle) in self.in_flight.drain(..) {
            let value = handle.await??;
            settled.insert(id, value);
        }
        Ok(settled)
    }

    fn fail<P: Page>(&mut self, page: &mut P, error: &BootError) -> BootState {
        tracing::error!("❌ Boot cycle failed: {}", error);
        if let Err(write_err) = page.replace(LOAD_ERROR_MESSAGE) {
            tracing::error!("Could not write the error message to the page: {}", write_err);
        }
        self.state = BootState::Failed;
        self.state
    }
}
