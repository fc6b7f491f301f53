//! Flash notification dismissal.
//!
//! # Design
//! - Manual dismissal acts on the control's immediate parent and never touches the container.
//! - Automatic dismissal removes the whole container once, after a fixed delay from page-ready.
//! - The timer is armed through a [`Scheduler`] so tests can drive time explicitly.

use std::cell::Cell;
use std::rc::Rc;

use crate::core::contract::PageContract;
use crate::core::dom::Dom;
use crate::core::error::{UiError, UiResult};

/// One-shot deferred execution.
pub trait Scheduler {
    /// Run `task` once after `delay_ms` milliseconds. There is no cancellation.
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Dismissal behavior for one page.
pub struct FlashDismisser<D: Dom> {
    dom: Rc<D>,
    contract: Rc<PageContract>,
    armed: Cell<bool>,
}

impl<D: Dom + 'static> FlashDismisser<D> {
    /// Bind the dismisser to a document.
    #[must_use]
    pub const fn new(dom: Rc<D>, contract: Rc<PageContract>) -> Self {
        Self {
            dom,
            contract,
            armed: Cell::new(false),
        }
    }

    /// Hide then remove the notification owning `control`.
    ///
    /// Returns `false` when the control has no parent (already detached).
    ///
    /// # Errors
    ///
    /// Returns the DOM error raised while hiding; the notification stays attached.
    pub fn dismiss_control(&self, control: &D::Node) -> UiResult<bool> {
        let Some(notification) = self.dom.parent(control) else {
            return Ok(false);
        };
        self.dom.hide(&notification)?;
        self.dom.remove(&notification);
        Ok(true)
    }

    /// Dismiss the notification whose control contains `target`, if any.
    ///
    /// Used for delegated click handling; clicks elsewhere are ignored.
    ///
    /// # Errors
    ///
    /// See [`Self::dismiss_control`].
    pub fn dismiss_target(&self, target: &D::Node) -> UiResult<bool> {
        match self.dom.closest(target, &self.contract.dismiss_selector) {
            Some(control) => self.dismiss_control(&control),
            None => Ok(false),
        }
    }

    /// Hide then remove the notification container with everything inside it.
    ///
    /// Returns `false` when the container is already gone.
    ///
    /// # Errors
    ///
    /// Returns the DOM error raised while hiding; the container stays attached.
    pub fn dismiss_container(&self) -> UiResult<bool> {
        let Some(container) = self.dom.element_by_id(&self.contract.messages_container_id) else {
            return Ok(false);
        };
        self.dom.hide(&container)?;
        self.dom.remove(&container);
        Ok(true)
    }

    /// Schedule container removal after the configured delay.
    ///
    /// Only the first call arms the timer; later calls return `false`. A failure when the
    /// timer fires is handed to `on_error`.
    #[must_use]
    pub fn arm_auto_dismiss<S, F>(self: &Rc<Self>, scheduler: &S, on_error: F) -> bool
    where
        S: Scheduler,
        F: FnOnce(&UiError) + 'static,
    {
        if self.armed.replace(true) {
            return false;
        }
        let this = Rc::clone(self);
        scheduler.once(
            self.contract.auto_dismiss_ms,
            Box::new(move || {
                if let Err(err) = this.dismiss_container() {
                    on_error(&err);
                }
            }),
        );
        true
    }
}
