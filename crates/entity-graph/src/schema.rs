//! Entity metadata schema.
//!
//! [`args`] holds the raw, flat declarations a registration layer collects
//! for each mapped class. [`Builder`] resolves them into an [`EntityGraph`]:
//! one [`metadata::EntityMetadata`] per declared table, inherited members
//! folded in, foreign keys and junction tables synthesized, and every
//! relation linked to the entity it targets.

pub mod args;

mod builder;
pub use builder::Builder;

pub mod metadata;
pub use metadata::EntityGraph;

mod name;
pub use name::Name;

pub mod naming;
pub use naming::NamingStrategy;

mod verify;

use crate::Result;
