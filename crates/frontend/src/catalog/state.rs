//! Navigation state: which brand and category are selected, selection
//! persistence, and the reveal schedule for product cards.
//!
//! Selection cascades (brand click auto-selecting its first category,
//! restoration replaying the persisted selection) are direct method calls
//! on the service, not synthesized DOM events.

use crate::catalog::storage::SelectionStore;
use contracts::{Brand, Catalog, Category};
use leptos::prelude::*;
use std::sync::Arc;

/// Delay step between consecutive card reveals.
pub const STAGGER_STEP_MS: u32 = 150;

/// Reveal delay for card `index` (zero-based, document order).
pub fn reveal_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

/// Application-wide navigation state.
///
/// At most one brand is active at a time, and at most one category within
/// it. `reveal_epoch` advances on every selection; scheduled reveal tasks
/// capture the epoch at scheduling time and no-op once superseded, so a
/// newer selection cancels all pending reveals.
#[derive(Clone)]
pub struct NavigationService {
    active_brand: RwSignal<Option<String>>,
    active_category: RwSignal<Option<String>>,
    reveal_epoch: RwSignal<u64>,
    store: Arc<dyn SelectionStore>,
}

impl NavigationService {
    pub fn new(store: Arc<dyn SelectionStore>) -> Self {
        Self {
            active_brand: RwSignal::new(None),
            active_category: RwSignal::new(None),
            reveal_epoch: RwSignal::new(0),
            store,
        }
    }

    pub fn is_active_brand(&self, id: &str) -> bool {
        self.active_brand.with(|b| b.as_deref() == Some(id))
    }

    pub fn is_active_category(&self, id: &str) -> bool {
        self.active_category.with(|c| c.as_deref() == Some(id))
    }

    /// Current reveal epoch (tracked read).
    pub fn epoch(&self) -> u64 {
        self.reveal_epoch.get()
    }

    /// Current reveal epoch without registering a reactive dependency.
    /// Used by scheduled reveal tasks to detect supersession.
    pub fn epoch_untracked(&self) -> u64 {
        self.reveal_epoch.get_untracked()
    }

    fn advance_epoch(&self) {
        self.reveal_epoch.update(|e| *e += 1);
    }

    /// Brand click. Idempotent: re-selecting the active brand re-runs the
    /// same reset. Persists the brand, cancels pending reveals, clears the
    /// category selection, then selects the brand's first active category
    /// (if it has one) as the default.
    ///
    /// A brand without active products keeps no category selected and
    /// leaves the persisted category untouched.
    pub fn select_brand(&self, brand: &Brand) {
        self.store.save_brand(&brand.id);
        self.active_brand.set(Some(brand.id.clone()));
        self.active_category.set(None);
        self.advance_epoch();

        if let Some(first) = brand.first_active_category() {
            self.select_category(&first.id);
        }
    }

    /// Category click. Idempotent per category: re-selecting restarts the
    /// staggered reveal of its grid.
    pub fn select_category(&self, category_id: &str) {
        self.store.save_category(category_id);
        self.active_category.set(Some(category_id.to_string()));
        self.advance_epoch();
    }

    /// Re-applies the persisted selection after the catalog has rendered.
    /// Unmatched persisted values are silently ignored; with no usable
    /// persisted brand the first brand in document order is selected.
    pub fn restore(&self, catalog: &Catalog) {
        let saved_brand = self.store.load_brand();
        let saved_category = self.store.load_category();

        if let Some((brand, category)) =
            restore_plan(catalog, saved_brand.as_deref(), saved_category.as_deref())
        {
            self.select_brand(brand);
            if let Some(category) = category {
                self.select_category(&category.id);
            }
        }
    }
}

/// Decides what the restoration step selects.
///
/// Returns the brand to select and, when the persisted category still
/// exists under the persisted brand, that category to select after the
/// brand's default cascade. A persisted category is only honored when the
/// persisted brand itself matched; under first-brand fallback the default
/// first-category selection stands.
fn restore_plan<'a>(
    catalog: &'a Catalog,
    saved_brand: Option<&str>,
    saved_category: Option<&str>,
) -> Option<(&'a Brand, Option<&'a Category>)> {
    let matched = saved_brand.and_then(|id| catalog.brand(id));
    let brand = matched.or_else(|| catalog.brands.first())?;

    let category = if matched.is_some() {
        saved_category.and_then(|id| brand.active_categories().find(|c| c.id == id))
    } else {
        None
    };

    Some((brand, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::storage::SelectionStore;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        brand: Mutex<Option<String>>,
        category: Mutex<Option<String>>,
    }

    impl SelectionStore for MemoryStore {
        fn load_brand(&self) -> Option<String> {
            self.brand.lock().unwrap().clone()
        }

        fn load_category(&self) -> Option<String> {
            self.category.lock().unwrap().clone()
        }

        fn save_brand(&self, id: &str) {
            *self.brand.lock().unwrap() = Some(id.to_string());
        }

        fn save_category(&self, id: &str) {
            *self.category.lock().unwrap() = Some(id.to_string());
        }
    }

    fn catalog() -> Catalog {
        serde_json::from_str(
            r#"{"brands": [
                {"id": "acme", "categories": [
                    {"id": "shoes", "name": "Shoes", "products": [{"title": "S", "image": "s.webp", "active": true}]},
                    {"id": "hats", "name": "Hats", "products": [{"title": "H", "image": "h.webp", "active": true}]}
                ]},
                {"id": "zenith", "categories": [
                    {"id": "bags", "name": "Bags", "products": [{"title": "B", "image": "b.webp", "active": true}]}
                ]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn memory_store_round_trips_both_keys() {
        let store = MemoryStore::default();
        assert_eq!(store.load_brand(), None);
        assert_eq!(store.load_category(), None);

        store.save_brand("acme");
        store.save_category("hats");
        assert_eq!(store.load_brand(), Some("acme".to_string()));
        assert_eq!(store.load_category(), Some("hats".to_string()));
    }

    #[test]
    fn restore_replays_persisted_brand_and_category() {
        let catalog = catalog();
        let (brand, category) = restore_plan(&catalog, Some("acme"), Some("hats")).unwrap();
        assert_eq!(brand.id, "acme");
        assert_eq!(category.unwrap().id, "hats");
    }

    #[test]
    fn restore_ignores_category_missing_under_brand() {
        let catalog = catalog();
        // "bags" belongs to zenith, not acme: the brand's default category
        // selection stands.
        let (brand, category) = restore_plan(&catalog, Some("acme"), Some("bags")).unwrap();
        assert_eq!(brand.id, "acme");
        assert!(category.is_none());
    }

    #[test]
    fn restore_falls_back_to_first_brand_when_saved_brand_is_gone() {
        let catalog = catalog();
        let (brand, category) = restore_plan(&catalog, Some("retired"), Some("shoes")).unwrap();
        assert_eq!(brand.id, "acme");
        // The stale category is not re-applied under the fallback brand.
        assert!(category.is_none());
    }

    #[test]
    fn restore_defaults_to_first_brand_with_nothing_persisted() {
        let catalog = catalog();
        let (brand, category) = restore_plan(&catalog, None, None).unwrap();
        assert_eq!(brand.id, "acme");
        assert!(category.is_none());
    }

    #[test]
    fn restore_does_nothing_on_empty_catalog() {
        let catalog = Catalog::default();
        assert!(restore_plan(&catalog, Some("acme"), Some("shoes")).is_none());
        assert!(restore_plan(&catalog, None, None).is_none());
    }

    #[test]
    fn reveal_delays_step_by_150ms() {
        assert_eq!(reveal_delay_ms(0), 0);
        assert_eq!(reveal_delay_ms(1), 150);
        assert_eq!(reveal_delay_ms(4), 600);
    }
}
