pub mod category;

pub use category::{leaf_categories, Category};
