use dioxus::prelude::*;
use product_core::{
    compute_rating, format_rating, price_label, star_fills, swatch_hex, CarouselState,
    ColorSelections, Direction, Product, ProductKey, VisibleCount,
};

use crate::fetch::{use_products, PRODUCTS_ENDPOINT};
use crate::viewport::use_visible_count;

const PRODUCT_LIST_CSS: Asset = asset!("/assets/product_list.css");

/// The product list page: fetches the catalog once and shows it in a carousel.
///
/// `visible` decides how many cards fit on screen: a fixed number, or one that follows the
/// viewport width and orientation.
#[component]
pub fn ProductList(
    #[props(default = PRODUCTS_ENDPOINT.to_string(), into)] endpoint: String,
    #[props(default)] visible: VisibleCount,
) -> Element {
    let products = use_products(endpoint);
    let visible_count = use_visible_count(visible);

    rsx! {
        document::Stylesheet { href: PRODUCT_LIST_CSS }
        ProductCarousel { products: products(), visible_count }
    }
}

/// A horizontally scrolling strip of product cards with arrow controls.
///
/// Owns the scroll position and the per-product color picks.
#[component]
pub fn ProductCarousel(products: Vec<Product>, visible_count: usize) -> Element {
    let mut carousel = use_signal(CarouselState::default);
    let mut selections = use_signal(ColorSelections::default);

    let visible_count = visible_count.max(1);
    let product_count = products.len();
    let position = carousel().clamped(product_count, visible_count);
    let offset = position.offset_percent(visible_count);

    rsx! {
        div { class: "page-wrapper",
            h1 { class: "page-title", "Product List" }

            div { class: "product-slider-container",
                button {
                    class: "arrow-btn left",
                    aria_label: "previous",
                    disabled: !position.can_scroll_left(),
                    onclick: move |_| carousel.write().scroll(Direction::Left, product_count, visible_count),
                    "◀"
                }

                div { class: "product-slider",
                    div {
                        class: "product-slider-inner",
                        style: "transform: translateX(-{offset}%)",
                        {products.into_iter().enumerate().map(|(index, product)| {
                            let key = ProductKey::for_product(&product, index);
                            let color = selections.read().display_color(&key, &product).to_string();
                            let label = product.label(index);
                            let card_key = format!("{index}-{key}");

                            rsx! {
                                ProductCard {
                                    key: "{card_key}",
                                    product,
                                    label,
                                    color,
                                    on_select: move |color: String| selections.write().select(key.clone(), color),
                                }
                            }
                        })}
                    }
                }

                button {
                    class: "arrow-btn right",
                    aria_label: "next",
                    disabled: !position.can_scroll_right(product_count, visible_count),
                    onclick: move |_| carousel.write().scroll(Direction::Right, product_count, visible_count),
                    "▶"
                }
            }
        }
    }
}

#[component]
fn ProductCard(
    product: Product,
    label: String,
    color: String,
    on_select: EventHandler<String>,
) -> Element {
    let rating = compute_rating(&product);
    let price = price_label(&product);
    let rating_text = format_rating(rating);

    rsx! {
        div { class: "product-card",
            div { class: "product-image-wrap",
                if let Some(url) = product.image_for(&color) {
                    img { src: "{url}", alt: "{label}", loading: "lazy" }
                } else {
                    div { class: "placeholder", "No Image" }
                }
            }

            h3 { class: "product-title", "{label}" }
            p { class: "product-price", "{price}" }

            div { class: "color-options",
                {product.colors().map(|swatch| {
                    let active = swatch == color;
                    let class = if active { "color-btn active" } else { "color-btn" };
                    let tint = swatch_hex(swatch);
                    let swatch = swatch.to_string();

                    rsx! {
                        button {
                            key: "{swatch}",
                            class,
                            title: "{swatch}",
                            background_color: tint,
                            aria_pressed: active,
                            onclick: move |_| on_select.call(swatch.clone()),
                        }
                    }
                })}
            }

            div { class: "rating-section",
                Stars { rating }
                span { class: "rating-text", "{rating_text}" }
            }
        }
    }
}

#[component]
fn Stars(rating: f64) -> Element {
    rsx! {
        div { class: "stars",
            {star_fills(rating).into_iter().enumerate().map(|(index, fill)| {
                let percent = fill.percent();
                rsx! {
                    span {
                        key: "{index}",
                        class: "star dynamic",
                        style: "--fill: {percent}%",
                        "★"
                    }
                }
            })}
        }
    }
}
