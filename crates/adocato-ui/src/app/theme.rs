//! Wires the dark-mode button to the toggle endpoint.

use crate::app::{WebDom, report};
use crate::core::contract::PageContract;
use crate::core::error::UiResult;
use crate::core::theme::DarkModeToggle;
use crate::i18n::UiLabels;
use crate::services::api::ToggleClient;
use gloo::console;
use gloo::events::EventListener;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

pub(crate) fn bind(
    dom: &Rc<WebDom>,
    contract: &Rc<PageContract>,
    labels: &Rc<UiLabels>,
) -> UiResult<()> {
    let toggle = Rc::new(DarkModeToggle::new(
        Rc::clone(dom),
        Rc::clone(contract),
        Rc::clone(labels),
    )?);
    let client = ToggleClient::new(toggle.endpoint());
    let button = toggle.button().clone();
    // Requests are not serialized; concurrent clicks resolve in arrival order.
    EventListener::new(&button, "click", move |_event| {
        let toggle = Rc::clone(&toggle);
        let client = client.clone();
        spawn_local(async move {
            match toggle.complete(client.toggle().await) {
                Ok(mode) => console::debug!("theme applied", mode.as_str()),
                Err(err) => report("dark-mode", &err),
            }
        });
    })
    .forget();
    Ok(())
}
