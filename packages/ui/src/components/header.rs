use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaDollarSign, FaHouse};
use dioxus_free_icons::Icon;

/// Top bar with the brand on the left and navigation links as children.
#[component]
pub fn Header(children: Element) -> Element {
    rsx! {
        header {
            class: "app-header",
            div {
                class: "app-brand",
                Icon { icon: FaHouse, width: 20, height: 20 }
                span { "Home Control" }
                Icon { icon: FaDollarSign, width: 16, height: 16 }
            }
            nav { class: "app-nav", {children} }
        }
    }
}
