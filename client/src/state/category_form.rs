//! Add-category modal state.
//!
//! Field values survive closing the dialog and are only cleared by a
//! successful submit.

#[cfg(test)]
#[path = "category_form_test.rs"]
mod category_form_test;

use crate::net::types::{Category, ModelAction};

/// Visibility and controlled inputs of the add-category modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryModalState {
    pub show: bool,
    pub name: String,
    pub description: String,
}

impl CategoryModalState {
    pub fn open(&mut self) {
        self.show = true;
    }

    pub fn close(&mut self) {
        self.show = false;
    }

    /// Build the POST action for the current fields, close the dialog and
    /// reset the form.
    pub fn submit(&mut self) -> ModelAction<Category> {
        let name = std::mem::take(&mut self.name);
        let description = std::mem::take(&mut self.description);
        self.close();
        ModelAction::post(Category::new(name, description))
    }
}
