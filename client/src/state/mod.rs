//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each page owns its state in an `RwSignal`; the logic lives here as plain
//! structs so it can be tested without a reactive runtime.

pub mod categories;
pub mod category_form;
pub mod words;
