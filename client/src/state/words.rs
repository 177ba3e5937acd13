//! Editable word rows for one category.
//!
//! DESIGN
//! ======
//! Rows are plain values addressed by index; the page re-reads them through
//! the owning signal. Nothing here touches the network: a valid submission
//! only yields the collected [`Word`]s.

#[cfg(test)]
#[path = "words_test.rs"]
mod words_test;

use crate::net::types::Word;

pub const WORD_FIELD_MIN_CHARS: usize = 2;
pub const WORD_FIELD_MAX_CHARS: usize = 250;

/// Validation failure for a single term or definition input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooShort,
    TooLong,
}

impl FieldError {
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Required => "This field is required.".to_owned(),
            Self::TooShort => format!("Use at least {WORD_FIELD_MIN_CHARS} characters."),
            Self::TooLong => format!("Use at most {WORD_FIELD_MAX_CHARS} characters."),
        }
    }
}

/// Check one field against the 2..=250 character rule.
///
/// # Errors
///
/// Returns the first rule the value breaks.
pub fn validate_field(value: &str) -> Result<(), FieldError> {
    let chars = value.chars().count();
    if chars == 0 {
        Err(FieldError::Required)
    } else if chars < WORD_FIELD_MIN_CHARS {
        Err(FieldError::TooShort)
    } else if chars > WORD_FIELD_MAX_CHARS {
        Err(FieldError::TooLong)
    } else {
        Ok(())
    }
}

/// Per-row validation outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowErrors {
    pub term: Option<FieldError>,
    pub definition: Option<FieldError>,
}

impl RowErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term.is_none() && self.definition.is_none()
    }
}

/// Word editor state: ordered rows plus whether a submit was attempted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordsState {
    pub rows: Vec<Word>,
    /// Inline feedback is shown only after the first submit attempt.
    pub show_errors: bool,
}

impl Default for WordsState {
    fn default() -> Self {
        Self { rows: vec![Word::default()], show_errors: false }
    }
}

impl WordsState {
    /// Seed the editor from stored words; an empty list keeps one blank row.
    pub fn load(&mut self, words: Vec<Word>) {
        if words.is_empty() {
            *self = Self::default();
        } else {
            self.rows = words;
            self.show_errors = false;
        }
    }

    /// True until the user adds, removes, edits or submits rows.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    /// [`load`](Self::load) stored words unless the user already started
    /// editing. Returns whether the rows were replaced.
    pub fn seed(&mut self, words: Vec<Word>) -> bool {
        if !self.is_pristine() {
            return false;
        }
        self.load(words);
        true
    }

    /// Append one blank row.
    pub fn add_row(&mut self) {
        self.rows.push(Word::default());
    }

    /// Remove the row at `index`. Returns `false` (and changes nothing) when
    /// the index is out of range.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    pub fn set_term(&mut self, index: usize, value: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.term = value;
        }
    }

    pub fn set_definition(&mut self, index: usize, value: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.definition = value;
        }
    }

    #[must_use]
    pub fn row_errors(&self, index: usize) -> RowErrors {
        self.rows.get(index).map_or_else(RowErrors::default, |row| RowErrors {
            term: validate_field(&row.term).err(),
            definition: validate_field(&row.definition).err(),
        })
    }

    /// Errors worth rendering for `index` right now.
    #[must_use]
    pub fn visible_errors(&self, index: usize) -> RowErrors {
        if self.show_errors { self.row_errors(index) } else { RowErrors::default() }
    }

    /// Validate every row and return the collected words.
    ///
    /// # Errors
    ///
    /// Returns `(index, errors)` for each invalid row; the submission is
    /// blocked and error display is switched on.
    pub fn submit(&mut self) -> Result<Vec<Word>, Vec<(usize, RowErrors)>> {
        self.show_errors = true;
        let invalid: Vec<(usize, RowErrors)> = (0..self.rows.len())
            .map(|i| (i, self.row_errors(i)))
            .filter(|(_, errors)| !errors.is_empty())
            .collect();
        if invalid.is_empty() { Ok(self.rows.clone()) } else { Err(invalid) }
    }
}

/// Write a submitted word list to the diagnostic log.
pub fn log_submission(category: &str, words: &[Word]) {
    leptos::logging::log!("words for '{category}': {words:?}");
}
