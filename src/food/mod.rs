//! Food registry
//!
//! Keyed collections of raw materials, products and recipes, and the
//! factories for recipes and menus that resolve names against them.

pub mod error;
pub mod registry;

pub use error::{ElementKind, FoodError, FoodResult};
pub use registry::{Food, RecipeEditor};
