//! Person domain record.
//!
//! # Responsibility
//! - Define the single entity managed by this crate.
//! - Fix the wire field names used by request/response payloads.
//!
//! # Invariants
//! - `id` is assigned exactly once, by the store, at creation time.
//! - `id == 0` is the "not persisted" sentinel; no stored row ever has it.
//! - The store never rewrites `id` on update.

use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = i64;

/// A single person record.
///
/// Field values are free-form strings; format validation (email shape,
/// IP syntax) is a caller concern, not enforced by this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Surrogate key. `0` on values that have not been persisted yet;
    /// inbound payloads may carry any value here and the store ignores it
    /// on create.
    #[serde(default)]
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ip_address: String,
}

impl Person {
    /// Creates an unpersisted record (`id == 0`).
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        ip_address: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ip_address: ip_address.into(),
        }
    }

    /// Returns whether this value has been persisted by the store.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}
