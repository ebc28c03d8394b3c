//! Nutrition report
//!
//! Serializable summary of every element in a registry plus the menus of a
//! dataset, printed by the `diet` binary.

use serde::Serialize;

use crate::build_info::BuildInfo;
use crate::dataset::Dataset;
use crate::food::{Food, FoodResult};
use crate::models::{MenuItem, NutritionalElement};

/// Values of one element; `None` where a value is undefined (empty recipe)
#[derive(Debug, Clone, Serialize)]
pub struct ElementSummary {
    pub name: String,
    pub per_100g: bool,
    pub calories: Option<f64>,
    pub proteins: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

fn defined(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}

impl ElementSummary {
    pub fn of<E: NutritionalElement + ?Sized>(element: &E) -> Self {
        Self {
            name: element.name().to_string(),
            per_100g: element.per_100g(),
            calories: defined(element.calories()),
            proteins: defined(element.proteins()),
            carbs: defined(element.carbs()),
            fat: defined(element.fat()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuSummary {
    #[serde(flatten)]
    pub totals: ElementSummary,
    pub items: Vec<MenuItem>,
}

/// Full report, element listings sorted by name
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub build: BuildInfo,
    pub raw_materials: Vec<ElementSummary>,
    pub products: Vec<ElementSummary>,
    pub recipes: Vec<ElementSummary>,
    pub menus: Vec<MenuSummary>,
    pub total_menu_calories: f64,
}

impl Report {
    pub fn build(food: &Food, dataset: &Dataset) -> FoodResult<Self> {
        let menus = dataset
            .menus
            .iter()
            .map(|def| def.build(food))
            .collect::<FoodResult<Vec<_>>>()?;

        Ok(Self {
            build: BuildInfo::current(),
            raw_materials: food.raw_materials().into_iter().map(ElementSummary::of).collect(),
            products: food.products().into_iter().map(ElementSummary::of).collect(),
            recipes: food.recipes().into_iter().map(ElementSummary::of).collect(),
            total_menu_calories: crate::models::total_calories(&menus),
            menus: menus
                .iter()
                .map(|menu| MenuSummary {
                    totals: ElementSummary::of(menu),
                    items: menu.items().to_vec(),
                })
                .collect(),
        })
    }
}
