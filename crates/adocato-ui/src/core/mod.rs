//! Core, DOM-free behaviors and helpers for the page scripts.
pub mod contract;
pub mod dom;
pub mod error;
pub mod flash;
pub mod preview;
pub mod theme;

#[cfg(test)]
pub(crate) mod fixture;
