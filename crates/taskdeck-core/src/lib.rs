pub mod card;
pub mod config;
pub mod error;
pub mod form;
pub mod overlay;
pub mod page;
pub mod partition;
pub mod store;
pub mod task;

use tracing::info;

/// Builds the initial page from config: seed records go through the store so
/// they get ids the usual way.
#[tracing::instrument(skip_all)]
pub fn bootstrap(cfg: &config::AppConfig) -> Result<page::PageState, error::StoreError> {
    let store = store::TaskStore::seeded(cfg.seed())?;
    info!(tasks = store.len(), "task page ready");
    Ok(page::PageState::new(store))
}
