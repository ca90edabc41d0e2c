//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data-access contract between callers and the SQLite store.
//! - Isolate SQL text and transaction handling from service orchestration.
//!
//! # Invariants
//! - Reads are all-or-nothing: a row-scan failure discards partial results.
//! - Writes run inside one transaction each and never commit after a
//!   statement failure.

pub mod person_repo;
