//! Model to entity mappers
//!
//! This module provides conversions between database rows (this crate) and
//! domain entities (cookbook-core): `From<Model> for Entity` converts fetched
//! rows to domain objects. Soft-delete columns stay behind in the model.

mod recipe;
mod user;
