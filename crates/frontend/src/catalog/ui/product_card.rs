use crate::shared::images::{resolve_image_src, FALLBACK_IMAGE};
use contracts::Product;
use leptos::prelude::*;

/// One product card: image, title, and a description paragraph that is
/// omitted entirely when the product has none.
#[component]
pub fn ProductCard(product: Product, revealed: Signal<bool>) -> impl IntoView {
    let (src, set_src) = signal(resolve_image_src(&product.image));
    let (fallback_applied, set_fallback_applied) = signal(false);

    // Substitute the placeholder exactly once, then disarm: a failing
    // placeholder must not loop.
    let on_error = move |_| {
        if !fallback_applied.get_untracked() {
            set_fallback_applied.set(true);
            set_src.set(FALLBACK_IMAGE.to_string());
        }
    };

    let description = product.description_text().map(str::to_string);

    view! {
        <div class="product-card" class:show=move || revealed.get()>
            <img src=move || src.get() alt=product.title.clone() on:error=on_error />
            <h3>{product.title.clone()}</h3>
            {description.map(|text| view! { <p>{text}</p> })}
        </div>
    }
}
