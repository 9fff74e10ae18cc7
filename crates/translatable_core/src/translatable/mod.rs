//! Translatable entity capability.
//!
//! # Responsibility
//! - Recognize dynamically named accessors (`name`, `name_en`, `name_en=`).
//! - Keep the per-type set of translatable attribute names.
//! - Route recognized accessors into an entity's translation collection,
//!   applying locale fallback.
//!
//! # Invariants
//! - Recognition is a pure function of the name and the registered set.
//! - Unrecognized names are never swallowed; they reach the host unchanged.

pub mod accessor;
pub mod entity;
pub mod registry;
