use crate::shared::api::{self, endpoints};
use crate::shared::components::number_format::format_rupees;
use crate::shared::icons::icon;
use contracts::domain::product::{Product, ProductsResponse};
use leptos::prelude::*;

async fn fetch_products() -> Result<Vec<Product>, String> {
    let resp: ProductsResponse = api::get_json(&endpoints::products()).await?;
    Ok(resp.products)
}

fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

fn prev_index(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

/// Products tab: card grid of the buffalo catalog.
#[component]
pub fn ProductGallery() -> impl IntoView {
    let (products, set_products) = signal(Vec::<Product>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        leptos::task::spawn_local(async move {
            match fetch_products().await {
                Ok(list) => {
                    set_products.set(list);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::error!("failed to fetch products: {}", e);
                    set_products.set(Vec::new());
                    set_error.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    leptos::task::spawn_local(async move {
        load();
    });

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 60px); overflow: auto; padding: 10px;">
            <div style="display: flex; align-items: center; gap: 10px; margin-bottom: 10px;">
                <h2 style="margin: 0;">{"Products"}</h2>
                <button class="button button--secondary" title="Refresh" on:click=move |_| load()>
                    {icon("refresh")}
                </button>
                {move || is_loading.get().then(|| view! {
                    <span style="color: #888; font-size: 13px;">{"Loading..."}</span>
                })}
            </div>

            {move || error.get().map(|e| view! {
                <div style="padding: 10px; color: #dc2626;">{"Failed to load products: "}{e}</div>
            })}

            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px;">
                {move || products.get().into_iter().map(|product| view! {
                    <ProductCard product=product />
                }).collect_view()}
            </div>

            {move || (!is_loading.get() && products.get().is_empty() && error.get().is_none()).then(|| view! {
                <div style="color: #888; padding: 2rem; text-align: center;">{"No products in the catalog"}</div>
            })}
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    // Out-of-stock cards are rendered desaturated
    let card_filter = if product.in_stock {
        "none"
    } else {
        "grayscale(1)"
    };
    let (badge_text, badge_color) = if product.in_stock {
        ("In Stock", "#10b981")
    } else {
        ("Out of Stock", "#9ca3af")
    };

    view! {
        <div style=format!(
            "border: 1px solid #e5e7eb; border-radius: 8px; overflow: hidden; background: white; filter: {};",
            card_filter
        )>
            <div style="position: relative;">
                <ProductImageCarousel images=product.buffalo_images.clone() breed=product.breed.clone() />
                <span style=format!(
                    "position: absolute; top: 8px; right: 8px; background: {}; color: white; padding: 2px 8px; border-radius: 4px; font-size: 12px; font-weight: 500;",
                    badge_color
                )>
                    {badge_text}
                </span>
            </div>
            <div style="padding: 12px;">
                <div style="display: flex; justify-content: space-between; align-items: baseline;">
                    <h3 style="margin: 0; font-size: 16px;">{product.breed.clone()}</h3>
                    <span style="color: #888; font-size: 12px;">{product.id.clone()}</span>
                </div>
                <div style="color: #666; font-size: 13px; margin: 4px 0;">
                    {format!("{} yrs · {}", product.age, product.location)}
                </div>
                <p style="font-size: 13px; color: #444; margin: 6px 0;">{product.description.clone()}</p>
                <div style="display: flex; justify-content: space-between; font-size: 14px; margin-top: 8px;">
                    <span><strong>{format_rupees(product.price)}</strong></span>
                    <span style="color: #666;">{"Insurance "}{format_rupees(product.insurance)}</span>
                </div>
            </div>
        </div>
    }
}

/// Image carousel with wraparound; navigation only shows for multi-image
/// products.
#[component]
fn ProductImageCarousel(images: Vec<String>, breed: String) -> impl IntoView {
    let images = StoredValue::new(images);
    let (index, set_index) = signal(0usize);

    let count = images.with_value(|i| i.len());

    let next = move |_| set_index.update(|i| *i = next_index(*i, count));
    let prev = move |_| set_index.update(|i| *i = prev_index(*i, count));

    view! {
        <div style="position: relative; height: 180px; background: #f3f4f6;">
            {move || {
                images.with_value(|imgs| imgs.get(index.get()).cloned()).map(|src| view! {
                    <img
                        src=src
                        alt=breed.clone()
                        style="width: 100%; height: 100%; object-fit: cover;"
                    />
                })
            }}

            {(count > 1).then(|| view! {
                <button
                    style="position: absolute; left: 4px; top: 50%; transform: translateY(-50%); background: rgba(0,0,0,0.4); color: white; border: none; border-radius: 50%; width: 28px; height: 28px; cursor: pointer; display: flex; align-items: center; justify-content: center;"
                    on:click=prev
                >
                    {icon("chevron-left")}
                </button>
                <button
                    style="position: absolute; right: 4px; top: 50%; transform: translateY(-50%); background: rgba(0,0,0,0.4); color: white; border: none; border-radius: 50%; width: 28px; height: 28px; cursor: pointer; display: flex; align-items: center; justify-content: center;"
                    on:click=next
                >
                    {icon("chevron-right")}
                </button>
                <div style="position: absolute; bottom: 6px; left: 0; right: 0; display: flex; justify-content: center; gap: 4px;">
                    {(0..count).map(|dot| view! {
                        <span style=move || format!(
                            "width: 6px; height: 6px; border-radius: 50%; background: {};",
                            if index.get() == dot { "white" } else { "rgba(255,255,255,0.5)" }
                        )></span>
                    }).collect_view()}
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps_both_ways() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(1, 3), 0);
    }

    #[test]
    fn test_single_image_is_stationary() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }
}
