//! Utility helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic so
//! the handlers stay testable off-browser.

pub mod browser;
