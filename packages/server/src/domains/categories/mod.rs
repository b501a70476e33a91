//! Categories domain - service types and the group taxonomy used for coarse filtering

pub mod data;
pub mod models;
pub mod taxonomy;

pub use data::{CategoriesData, CategoryData, CategoryGroupData};
pub use models::{leaf_categories, Category};
pub use taxonomy::{
    find_group, group_for_leaf, member_slugs, CategoryFilter, CategoryGroup, SeedCategory,
    CATEGORY_GROUPS, SERVICE_CATEGORIES,
};
