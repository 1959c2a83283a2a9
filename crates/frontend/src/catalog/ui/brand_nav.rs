use crate::catalog::ui::use_navigation;
use contracts::Brand;
use leptos::prelude::*;

/// Brand selector list. Every brand in the document gets an entry, whether
/// or not it currently has a rendered section; selecting a brand without
/// active products simply shows nothing below.
#[component]
pub fn BrandNav(brands: Vec<Brand>) -> impl IntoView {
    let nav = use_navigation();

    view! {
        <nav class="brand-nav">
            <ul>
                {brands
                    .into_iter()
                    .map(|brand| {
                        let id_attr = brand.id.clone();
                        let label = brand.id.clone();
                        let is_active = Memo::new({
                            let nav = nav.clone();
                            let id = brand.id.clone();
                            move |_| nav.is_active_brand(&id)
                        });
                        let on_click = {
                            let nav = nav.clone();
                            move |_| nav.select_brand(&brand)
                        };
                        view! {
                            <li
                                class="brand"
                                class:active=move || is_active.get()
                                data-brand=id_attr
                                on:click=on_click
                            >
                                {label}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
