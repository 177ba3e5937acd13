//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and forms; they read and write state passed
//! in as signals and report mutations upward through callbacks.

pub mod category_add_modal;
pub mod nav_bar;
pub mod word_row_card;
