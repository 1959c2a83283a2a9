pub mod brand_nav;
pub mod brand_section;
pub mod page;
pub mod product_card;
pub mod product_grid;

use crate::catalog::state::NavigationService;
use leptos::prelude::*;

/// Hook to use the navigation service provided at the app root.
pub fn use_navigation() -> NavigationService {
    use_context::<NavigationService>()
        .expect("NavigationService not found. Provide it in the app root.")
}
