//! Run with:
//!
//! ```sh
//! dx serve --platform web
//! ```

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use product_core::VisibleCount;
use product_ui::ProductList;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    dioxus::launch(app);
}

fn app() -> Element {
    rsx! {
        document::Title { "Product List" }
        ProductList { visible: VisibleCount::Responsive }
    }
}
