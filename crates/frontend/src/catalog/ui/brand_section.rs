use crate::catalog::ui::product_grid::ProductGrid;
use crate::catalog::ui::use_navigation;
use contracts::{Brand, Category};
use leptos::prelude::*;

/// One `.brand-products` block: the brand description (raw markup, the
/// document author is trusted), the category selector list, and one grid
/// per active category.
#[component]
pub fn BrandSection(brand: Brand) -> impl IntoView {
    let nav = use_navigation();

    // Categories that survived filtering. A brand that ends up with no
    // selector entries renders nothing at all, even if an earlier
    // activity check let it through.
    let categories: Vec<Category> = brand.active_categories().cloned().collect();
    if categories.is_empty() {
        return ().into_any();
    }

    let brand_id = brand.id.clone();
    let is_active = Memo::new({
        let nav = nav.clone();
        let id = brand_id.clone();
        move |_| nav.is_active_brand(&id)
    });

    let entries = categories
        .iter()
        .map(|category| {
            let id_attr = category.id.clone();
            let name = category.name.clone();
            let entry_active = Memo::new({
                let nav = nav.clone();
                let id = category.id.clone();
                move |_| is_active.get() && nav.is_active_category(&id)
            });
            let on_click = {
                let nav = nav.clone();
                let id = category.id.clone();
                move |_| nav.select_category(&id)
            };
            view! {
                <li
                    data-category=id_attr
                    class:active=move || entry_active.get()
                    on:click=on_click
                >
                    {name}
                </li>
            }
        })
        .collect_view();

    let grids = categories
        .iter()
        .map(|category| {
            view! { <ProductGrid brand_id=brand_id.clone() category=category.clone() /> }
        })
        .collect_view();

    view! {
        <div
            class="brand-products"
            class:active=move || is_active.get()
            data-brand=brand.id.clone()
        >
            <p class="brand-description" inner_html=brand.description.clone()></p>
            <ul
                class="category-list"
                style:display=move || if is_active.get() { "flex" } else { "none" }
            >
                {entries}
            </ul>
            {grids}
        </div>
    }
    .into_any()
}
