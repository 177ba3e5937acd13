//! Wire DTOs for the `/api/categories` REST resource.
//!
//! DESIGN
//! ======
//! Field names match the JSON the server emits. `amount` is derived on the
//! server, so it tolerates absent, `null` and float-encoded counts.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A named grouping of flashcards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique name; doubles as the route key (`/categories/{name}`).
    pub name: String,
    pub description: String,
    /// Number of words stored in the category.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: u32,
}

impl Category {
    /// Build a category as the add form does: no words yet.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into(), amount: 0 }
    }
}

/// A term/definition pair belonging to a category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub term: String,
    pub definition: String,
}

/// Kind of mutation carried by a [`ModelAction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Post,
    Delete,
}

/// A single pending mutation handed from a form or row control up to the
/// component that owns the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAction<T> {
    pub payload: T,
    pub action: Action,
}

impl<T> ModelAction<T> {
    #[must_use]
    pub fn post(payload: T) -> Self {
        Self { payload, action: Action::Post }
    }

    #[must_use]
    pub fn delete(payload: T) -> Self {
        Self { payload, action: Action::Delete }
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom(format!("amount {int} out of range")));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer amount"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
