use dioxus::prelude::*;

use super::recent_views::RecentViews;
use super::selector::Selector;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-view",

            Selector {}
            RecentViews {}
        }
    }
}
