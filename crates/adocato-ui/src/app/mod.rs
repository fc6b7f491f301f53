//! Browser bootstrap: wires each page behavior once the document is ready.
//!
//! # Design
//! - Behaviors are bound independently; one failing to bind never blocks the others.
//! - Listeners and timers live for the whole page and are forgotten after registration.

use crate::core::error::UiError;
use crate::i18n::{TranslationBundle, UiLabels};
use gloo::console;
use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;

mod config;
mod dom;
mod flash;
mod preview;
mod theme;

pub(crate) use dom::WebDom;

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

/// Entry point: bind behaviors now, or at `DOMContentLoaded` if the document is still loading.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = gloo::utils::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| boot()).forget();
    } else {
        boot();
    }
}

fn boot() {
    if BOOTED.with(|booted| booted.replace(true)) {
        return;
    }
    let document = gloo::utils::document();
    let contract = Rc::new(config::load_contract(&document));
    let locale = config::load_locale(&document);
    let labels = Rc::new(UiLabels::from_bundle(&TranslationBundle::new(locale)));
    let dom = Rc::new(WebDom::new(document));

    if let Err(err) = preview::bind(&dom, &contract, &labels) {
        report_bind("preview", &err);
    }
    flash::bind(&dom, &contract);
    if let Err(err) = theme::bind(&dom, &contract, &labels) {
        report_bind("dark-mode", &err);
    }
    console::debug!("page behaviors ready", locale.code());
}

/// Pages only render the markup for the behaviors they use.
fn report_bind(behavior: &'static str, err: &UiError) {
    if let UiError::MissingElement { id } = err {
        console::debug!("behavior skipped; element absent", behavior, id.as_str());
    } else {
        report(behavior, err);
    }
}

/// Log a behavior failure; the page itself is left as it was.
pub(crate) fn report(behavior: &'static str, err: &UiError) {
    console::warn!("page behavior failed", behavior, err.to_string(), format!("{err:?}"));
}
