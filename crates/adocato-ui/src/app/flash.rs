//! Wires notification dismissal: delegated clicks plus the page-ready timer.

use crate::app::{WebDom, report};
use crate::core::contract::PageContract;
use crate::core::flash::{FlashDismisser, Scheduler};
use gloo::console;
use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Browser timers; handles are forgotten so a scheduled task cannot be cancelled.
struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let _ = Timeout::new(delay_ms, task).forget();
    }
}

pub(crate) fn bind(dom: &Rc<WebDom>, contract: &Rc<PageContract>) {
    let flash = Rc::new(FlashDismisser::new(Rc::clone(dom), Rc::clone(contract)));
    if !flash.arm_auto_dismiss(&TimeoutScheduler, |err| report("flash", err)) {
        console::debug!("auto-dismiss already armed");
    }

    let document = dom.document().clone();
    EventListener::new(&document, "click", move |event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        if let Err(err) = flash.dismiss_target(&target) {
            report("flash", &err);
        }
    })
    .forget();
}
