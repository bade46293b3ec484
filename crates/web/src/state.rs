use std::sync::Arc;

use {
    mediascope_analytics::FilterOptions,
    mediascope_config::Limits,
    mediascope_corpus::Corpus,
};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<Corpus>,
    pub limits: Arc<Limits>,
    /// Dropdown choices depend only on the full corpus, so they are computed once.
    pub options: Arc<FilterOptions>,
}

impl AppState {
    pub fn new(corpus: Corpus, limits: Limits) -> Self {
        let options = FilterOptions::from_corpus(&corpus, &limits);
        Self {
            corpus: Arc::new(corpus),
            limits: Arc::new(limits),
            options: Arc::new(options),
        }
    }
}
