//! Diet
//!
//! Nutritional values of raw materials, packaged products, recipes built
//! from raw materials, and menus built from recipes and products.

pub mod build_info;
pub mod dataset;
pub mod food;
pub mod models;
pub mod nutrition;
pub mod report;
