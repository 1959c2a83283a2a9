pub mod catalog;

pub use catalog::{Brand, Catalog, Category, Product};
