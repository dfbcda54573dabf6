use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an API document (the `_id` field).
///
/// The API issues opaque string identifiers.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Borrow the raw identifier
    fn as_str(&self) -> &str;

    /// Convert the identifier to an owned string
    fn as_string(&self) -> String {
        self.as_str().to_string()
    }
}
