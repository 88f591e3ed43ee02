use dioxus::prelude::*;

use super::app::FortuneContext;
use crate::state::button_layouts;

/// Vertical stack of fortune buttons
#[component]
pub fn Sidebar() -> Element {
    let context = use_context::<FortuneContext>();
    let mut controller = context.controller;
    let buttons = context.view.buttons.read();
    let layouts = button_layouts(buttons.len(), context.button_height);

    rsx! {
        div {
            class: "sidebar",
            for (layout, text) in layouts.into_iter().zip(buttons.iter()) {
                button {
                    key: "{layout.index}",
                    style: "top: {layout.top}px;",
                    onclick: move |_| controller.write().click_button(layout.index),
                    "{text}"
                }
            }
        }
    }
}
