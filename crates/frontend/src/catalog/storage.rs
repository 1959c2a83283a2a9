//! Persistence boundary for the last-selected brand and category.
//!
//! Two independent string keys; no relationship between them is enforced.
//! Stale values are resolved by the restoration step, not here.

use web_sys::window;

const ACTIVE_BRAND_KEY: &str = "activeBrand";
const ACTIVE_CATEGORY_KEY: &str = "activeCategory";

/// Side-effecting storage for the two selection keys. Injected into the
/// navigation service so tests can run without a browser storage backend.
pub trait SelectionStore: Send + Sync {
    fn load_brand(&self) -> Option<String>;
    fn load_category(&self) -> Option<String>;
    fn save_brand(&self, id: &str);
    fn save_category(&self, id: &str);
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `SelectionStore` backed by the browser's localStorage. All operations
/// degrade silently when storage is unavailable.
pub struct LocalSelectionStore;

impl SelectionStore for LocalSelectionStore {
    fn load_brand(&self) -> Option<String> {
        local_storage()?.get_item(ACTIVE_BRAND_KEY).ok()?
    }

    fn load_category(&self) -> Option<String> {
        local_storage()?.get_item(ACTIVE_CATEGORY_KEY).ok()?
    }

    fn save_brand(&self, id: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(ACTIVE_BRAND_KEY, id);
        }
    }

    fn save_category(&self, id: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(ACTIVE_CATEGORY_KEY, id);
        }
    }
}
