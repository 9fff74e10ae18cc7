//! Domain model for translation records.
//!
//! # Responsibility
//! - Define the translation record and its owner reference.
//! - Define the per-owner collection enforcing one record per
//!   (attribute, locale) pair.
//!
//! # Invariants
//! - Uniqueness of (attribute, locale) inside one owner is enforced in memory
//!   by `TranslationCollection`, not by storage constraints.

pub mod collection;
pub mod translation;
