use crate::catalog::state::NavigationService;
use crate::catalog::storage::LocalSelectionStore;
use crate::catalog::ui::page::CatalogPage;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    // Provide the navigation service to the whole app via context.
    provide_context(NavigationService::new(Arc::new(LocalSelectionStore)));

    view! {
        <CatalogPage />
    }
}
