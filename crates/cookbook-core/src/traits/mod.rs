//! Repository traits (ports)

mod repositories;

pub use repositories::{CrudRepository, DynRecipeRepository, DynUserRepository, RepoResult};
