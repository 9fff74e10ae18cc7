//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persistence contract the translatable core relies on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Lookups are keyed by (owner type, owner id) only.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod translation_repo;
