//! Domain model for person records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by storage and callers.
//!
//! # Invariants
//! - Every persisted record carries a store-assigned integer id.
//! - `id == 0` means "not persisted", never a stored row.

pub mod person;
