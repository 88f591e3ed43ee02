use dioxus::document;
use dioxus::prelude::*;
use indoc::indoc;

use super::fortune_input_box::FortuneInputBox;
use super::sidebar::Sidebar;
use crate::config::CONFIG;
use crate::fortunes::{FortuneLoader, FortuneStorage, LocalStorage, RemoteFortunes};
use crate::state::{SidebarController, SignalView};

pub type AppController = SidebarController<SignalView, LocalStorage>;

/// Shared by the sidebar components
#[derive(Clone, Copy)]
pub struct FortuneContext {
    pub controller: Signal<AppController>,
    pub view: SignalView,
    pub button_height: f64,
}

/// Report Escape pressed anywhere in the window
const JS_ESCAPE_LISTENER: &str = indoc! {r#"
    new Promise(() => {
        window.addEventListener('keyup', (event) => {
            if (event.key === 'Escape') {
                dioxus.send(event.key);
            }
        });
    })
"#};

#[component]
pub fn App() -> Element {
    let config = use_hook(|| CONFIG.read().clone());
    let storage = use_hook(|| FortuneStorage::from_config(&config.storage));
    let remote = use_hook(|| RemoteFortunes::from_config(&config.remote));

    let context = use_context_provider(|| {
        let view = SignalView::new();
        FortuneContext {
            controller: Signal::new(SidebarController::new(view, storage.clone())),
            view,
            button_height: config.sidebar.button_height,
        }
    });
    let mut controller = context.controller;

    // Buttons appear once the loader settles on a list
    use_future(move || {
        let loader = FortuneLoader::new(storage.clone(), remote.clone());
        async move {
            let fortunes = loader.load().await;
            controller.write().render(fortunes);
        }
    });

    use_future(move || async move {
        let mut eval = document::eval(JS_ESCAPE_LISTENER);
        while let Ok(key) = eval.recv::<String>().await {
            if key == "Escape" {
                controller.write().press_escape();
            }
        }
    });

    rsx! {
        main {
            class: "fortune-teller",
            Sidebar {}
            FortuneInputBox {}
        }
    }
}
