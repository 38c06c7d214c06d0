use std::sync::Arc;

use crate::config::Config;
use crate::render::latex::LatexOptions;
use crate::scoring::ats::{AtsScorer, HeuristicAtsScorer};

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: every request brings its own resume snapshot.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable ATS scorer. Default: HeuristicAtsScorer.
    pub scorer: Arc<dyn AtsScorer>,
    /// Export options shared by download, copy and code view so all three match.
    pub latex: LatexOptions,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let latex = config.latex_options();
        Self {
            config,
            scorer: Arc::new(HeuristicAtsScorer),
            latex,
        }
    }
}
