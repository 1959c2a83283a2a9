use crate::catalog::state::reveal_delay_ms;
use crate::catalog::ui::product_card::ProductCard;
use crate::catalog::ui::use_navigation;
use contracts::{Category, Product};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Product grid for one category. Hidden unless its brand and category are
/// both the active selection; while shown, cards reveal with a staggered
/// delay of `index * 150` ms.
#[component]
pub fn ProductGrid(brand_id: String, category: Category) -> impl IntoView {
    let nav = use_navigation();

    let products: Vec<Product> = category.active_products().cloned().collect();
    let count = products.len();

    let is_active = Memo::new({
        let nav = nav.clone();
        let brand_id = brand_id.clone();
        let category_id = category.id.clone();
        move |_| nav.is_active_brand(&brand_id) && nav.is_active_category(&category_id)
    });

    // Number of cards currently revealed (cards 0..revealed carry the
    // `show` marking).
    let revealed = RwSignal::new(0usize);

    // Runs on every selection change. Cards always reset to their
    // pre-animation state; the active grid then schedules one reveal task
    // per card. Tasks carry the epoch current at scheduling time and do
    // nothing once a later selection has advanced it.
    Effect::new({
        let nav = nav.clone();
        move |_| {
            let epoch = nav.epoch();
            revealed.set(0);
            if !is_active.get() {
                return;
            }
            for index in 0..count {
                let nav = nav.clone();
                spawn_local(async move {
                    TimeoutFuture::new(reveal_delay_ms(index)).await;
                    if nav.epoch_untracked() == epoch {
                        revealed.update(|n| *n = (*n).max(index + 1));
                    }
                });
            }
        }
    });

    view! {
        <div
            class="products-grid"
            class:hidden=move || !is_active.get()
            data-category=category.id.clone()
        >
            {products
                .into_iter()
                .enumerate()
                .map(|(index, product)| {
                    let shown = Signal::derive(move || index < revealed.get());
                    view! { <ProductCard product=product revealed=shown /> }
                })
                .collect_view()}
        </div>
    }
}
