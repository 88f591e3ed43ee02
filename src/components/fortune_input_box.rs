use dioxus::prelude::*;

use super::app::FortuneContext;

/// The shared input used to edit whichever button was clicked
#[component]
pub fn FortuneInputBox() -> Element {
    let context = use_context::<FortuneContext>();
    let mut controller = context.controller;
    let editor = context.view.editor.read().clone();
    let is_visible = editor.is_some();
    let text = editor.unwrap_or_default();

    rsx! {
        div {
            class: "fortuneInputBox",
            style: if is_visible { "display: block;" } else { "display: none;" },

            input {
                r#type: "text",
                value: "{text}",
                oninput: move |evt| controller.write().input(evt.value()),
                onkeyup: move |evt| {
                    if evt.key() == Key::Enter {
                        controller.write().press_enter();
                    }
                },
                // Fires when the input loses focus with a changed value
                onchange: move |_| controller.write().blur(),
            }

            button {
                class: "saveButton",
                onclick: move |_| controller.write().click_save(),
                "Save"
            }
        }
    }
}
