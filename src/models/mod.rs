//! Data models
//!
//! Nutritional elements: raw materials, products, recipes and menus.

mod element;
mod menu;
mod nutrition;
mod product;
mod raw_material;
mod recipe;

pub use element::{total_calories, total_nutrition, NutritionalElement};
pub use menu::{Menu, MenuItem};
pub use nutrition::Nutrition;
pub use product::Product;
pub use raw_material::RawMaterial;
pub use recipe::{Ingredient, Recipe};
