//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `html` builds escaped list markup and `dom` isolates browser access so
//! page logic stays testable natively.

pub mod dom;
pub mod html;
