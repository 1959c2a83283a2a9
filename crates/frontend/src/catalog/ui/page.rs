//! Page shell: loads the catalog once, dismisses the loading overlay on
//! both outcomes, and kicks off selection restoration.

use crate::catalog::api::fetch_catalog;
use crate::catalog::ui::brand_nav::BrandNav;
use crate::catalog::ui::brand_section::BrandSection;
use crate::catalog::ui::use_navigation;
use contracts::Catalog;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Shown in place of the catalog when the document cannot be loaded.
const LOAD_ERROR_MESSAGE: &str = "⚠️ فشل تحميل المنتجات. حاول مرة أخرى لاحقًا.";

/// The loading overlay lives in `index.html` so it is visible while the
/// wasm binary itself is still loading.
const LOADER_OVERLAY_ID: &str = "loader-overlay";

fn dismiss_loader() {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(LOADER_OVERLAY_ID));
    if let Some(element) = element {
        let _ = element.class_list().add_1("hidden");
    }
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let nav = use_navigation();
    let (catalog, set_catalog) = signal::<Option<Catalog>>(None);
    let (load_failed, set_load_failed) = signal(false);

    // One load per page visit, never retried. The loader overlay is
    // dismissed on both paths.
    spawn_local(async move {
        match fetch_catalog().await {
            Ok(data) => {
                log::info!("catalog loaded: {} brands", data.brands.len());
                set_catalog.set(Some(data.clone()));
                nav.restore(&data);
            }
            Err(err) => {
                log::error!("failed to load products.json: {err}");
                set_load_failed.set(true);
            }
        }
        dismiss_loader();
    });

    view! {
        <main class="brands-page">
            {move || {
                if load_failed.get() {
                    return view! {
                        <section id="products-section" class="products-section">
                            <p class="error">{LOAD_ERROR_MESSAGE}</p>
                        </section>
                    }
                    .into_any();
                }
                match catalog.get() {
                    Some(data) => {
                        let sections = data
                            .brands
                            .iter()
                            .filter(|b| b.has_active_products())
                            .map(|brand| view! { <BrandSection brand=brand.clone() /> })
                            .collect_view();
                        view! {
                            <BrandNav brands=data.brands.clone() />
                            <section id="products-section" class="products-section">
                                {sections}
                            </section>
                        }
                        .into_any()
                    }
                    None => view! {
                        <section id="products-section" class="products-section"></section>
                    }
                    .into_any(),
                }
            }}
        </main>
    }
}
