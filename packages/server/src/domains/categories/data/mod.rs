pub mod category;

pub use category::{CategoriesData, CategoryData, CategoryGroupData};
