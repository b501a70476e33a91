use serde::Serialize;

use crate::domains::categories::models::Category;
use crate::domains::categories::taxonomy::{
    group_for_leaf, member_slugs, CategoryGroup, SeedCategory, SERVICE_CATEGORIES,
};

/// A taxonomy group with its member categories resolved to display names.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroupData {
    pub name: &'static str,
    pub slug: &'static str,
    pub categories: Vec<SeedCategory>,
}

impl From<&'static CategoryGroup> for CategoryGroupData {
    fn from(group: &'static CategoryGroup) -> Self {
        Self {
            name: group.name,
            slug: group.slug,
            categories: member_slugs(group.slug)
                .iter()
                .filter_map(|slug| SERVICE_CATEGORIES.iter().find(|c| c.slug == *slug))
                .copied()
                .collect(),
        }
    }
}

/// A stored category with the slug of the taxonomy group it falls under.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryData {
    #[serde(flatten)]
    pub category: Category,
    pub group: Option<&'static str>,
}

impl From<Category> for CategoryData {
    fn from(category: Category) -> Self {
        let group = group_for_leaf(&category.slug).map(|g| g.slug);
        Self { category, group }
    }
}

/// Category picker payload
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesData {
    pub groups: Vec<CategoryGroupData>,
    /// Leaf categories held by at least one active provider.
    pub in_use: Vec<CategoryData>,
}
