use crate::catalog::CatalogSource;

/// Shared application state: the catalog location resolved at startup.
/// Read-only after construction, so cloning per request needs no locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogSource,
}
