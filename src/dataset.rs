//! Dataset input
//!
//! A JSON document describing raw materials, products, recipes and menus,
//! used by the `diet` binary to populate a [`Food`] registry.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::food::{Food, FoodError, FoodResult};
use crate::models::{Menu, NutritionalElement, Product, RawMaterial};

/// Dataset error types
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Food(#[from] FoodError),
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Everything needed to populate a registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub raw_materials: Vec<RawMaterial>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub recipes: Vec<RecipeDef>,
    #[serde(default)]
    pub menus: Vec<MenuDef>,
}

/// A recipe and its ingredients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDef {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientDef>,
}

/// An ingredient line, grams unless another weight unit is given
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientDef {
    pub material: String,
    pub quantity: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "g".to_string()
}

/// A menu: recipe portions in grams and product units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDef {
    pub name: String,
    #[serde(default)]
    pub recipes: Vec<MenuRecipeDef>,
    #[serde(default)]
    pub products: Vec<MenuProductDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRecipeDef {
    pub name: String,
    pub grams: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuProductDef {
    pub name: String,
    #[serde(default = "default_units")]
    pub units: u32,
}

fn default_units() -> u32 {
    1
}

impl Dataset {
    /// Read a dataset from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> DatasetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Register raw materials, products and recipes, in that order
    pub fn build(&self) -> DatasetResult<Food> {
        let mut food = Food::new();

        for raw in &self.raw_materials {
            food.define_raw_material(
                raw.name(),
                raw.calories(),
                raw.proteins(),
                raw.carbs(),
                raw.fat(),
            )?;
        }

        for product in &self.products {
            food.define_product(
                product.name(),
                product.calories(),
                product.proteins(),
                product.carbs(),
                product.fat(),
            )?;
        }

        for recipe in &self.recipes {
            let mut editor = food.create_recipe(recipe.name.as_str())?;
            for ingredient in &recipe.ingredients {
                editor.add_ingredient_in(
                    &ingredient.material,
                    ingredient.quantity,
                    &ingredient.unit,
                )?;
            }
        }

        info!(
            "Loaded {} raw materials, {} products, {} recipes",
            self.raw_materials.len(),
            self.products.len(),
            self.recipes.len()
        );

        Ok(food)
    }
}

impl MenuDef {
    /// Build this menu against a populated registry
    pub fn build<'food>(&self, food: &'food Food) -> FoodResult<Menu<'food>> {
        let mut menu = food.create_menu(self.name.as_str());
        for recipe in &self.recipes {
            menu.add_recipe(&recipe.name, recipe.grams)?;
        }
        for product in &self.products {
            menu.add_products(&product.name, product.units)?;
        }
        Ok(menu)
    }
}
