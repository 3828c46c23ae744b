#![deny(clippy::all)]

//! Facebook Marketing and weather tools, served over MCP.
//!
//! Every tool answers with a string. Graph collection tools wrap their records in a
//! JSON-RPC shaped [`envelope`]; the others answer with short messages or JSON text,
//! and report upstream failures in-band.

pub mod accounts;
pub mod ad_sets;
pub mod envelope;
pub mod products;
pub mod targeting;
pub mod tools;
pub mod types;
pub mod weather;

use graph_async::GraphConfig;

/// Shared state for the marketing tools.
///
/// Holds one Graph client and one weather client, both configured once at startup
/// and reused across MCP calls.
#[derive(Debug, Clone)]
pub struct MarketingTools {
    pub(crate) graph: graph_async::Client<GraphConfig>,
    pub(crate) weather: openweather_async::Client,
}

impl MarketingTools {
    /// Create clients from `FB_*` and `OPEN_WEATHER_*` environment variables.
    ///
    /// # Panics
    /// Panics if a reqwest HTTP client cannot be built.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clients(graph_async::Client::new(), openweather_async::Client::new())
    }

    /// Use pre-configured clients.
    #[must_use]
    pub const fn with_clients(
        graph: graph_async::Client<GraphConfig>,
        weather: openweather_async::Client,
    ) -> Self {
        Self { graph, weather }
    }

    /// The Graph API client
    #[must_use]
    pub const fn graph(&self) -> &graph_async::Client<GraphConfig> {
        &self.graph
    }

    /// The weather client
    #[must_use]
    pub const fn weather(&self) -> &openweather_async::Client {
        &self.weather
    }
}

impl Default for MarketingTools {
    fn default() -> Self {
        Self::new()
    }
}

pub use envelope::Envelope;
pub use tools::build_registry;
pub use types::ToolText;
