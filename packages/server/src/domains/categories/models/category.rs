use serde::{Deserialize, Serialize};

use crate::common::CategoryId;

/// A stored category row. Leaf categories point at their group via `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
}

/// Keep only leaf categories, sorted by name.
///
/// Catalogs that predate the parent hierarchy have no `parent_id` anywhere;
/// in that case every row is a leaf.
pub fn leaf_categories(mut categories: Vec<Category>) -> Vec<Category> {
    let has_hierarchy = categories.iter().any(|c| c.parent_id.is_some());
    if has_hierarchy {
        categories.retain(|c| c.parent_id.is_some());
    }
    categories.sort_by(|a, b| a.name.cmp(&b.name));
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, parent_id: Option<CategoryId>) -> Category {
        Category {
            id: CategoryId::new(),
            name: name.to_string(),
            slug: crate::common::utils::slugify(name),
            parent_id,
        }
    }

    #[test]
    fn drops_groups_when_hierarchy_exists() {
        let group = category("Instalações", None);
        let leaves = leaf_categories(vec![
            category("Encanador", Some(group.id)),
            group.clone(),
            category("Eletricista", Some(group.id)),
        ]);

        let names: Vec<_> = leaves.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Eletricista", "Encanador"]);
    }

    #[test]
    fn flat_catalog_is_returned_whole() {
        let leaves = leaf_categories(vec![category("Pintor", None), category("DJ", None)]);
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].name, "DJ");
    }
}
