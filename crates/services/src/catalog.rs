//! Category catalog: identifiers, display names and theme colours.
//!
//! Question topics refer to categories by name, while play configuration
//! selects them by id. The page background colour is a derived read from the
//! current question's topic and is never stored in the session.

use std::collections::HashSet;
use std::path::Path;

use quiz_core::CategoryFilter;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two categories share an id.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateId(category.id.clone()));
            }
        }
        Ok(Self { categories })
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, or see [`CategoryCatalog::new`].
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Category> = serde_json::from_str(raw)?;
        Self::new(categories)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, or see
    /// [`CategoryCatalog::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            count = catalog.categories.len(),
            "loaded category catalog"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Theme colour for a question topic, if the topic is a known category name.
    #[must_use]
    pub fn color_for_topic(&self, topic: &str) -> Option<&str> {
        self.by_name(topic).map(|c| c.color.as_str())
    }

    /// Translate a filter of category ids into the topic names questions carry.
    ///
    /// An empty filter resolves to `None`, meaning no restriction.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownCategory` for the first id not in the catalog.
    pub fn resolve_filter(
        &self,
        ids: &CategoryFilter,
    ) -> Result<Option<CategoryFilter>, CatalogError> {
        let names = ids
            .iter()
            .map(|id| {
                self.by_id(id)
                    .map(|c| c.name.as_str())
                    .ok_or_else(|| CatalogError::UnknownCategory(id.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CategoryFilter::from_iter_nonempty(names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r##"[
        {"id": "sci", "name": "Science", "color": "#0ea5e9"},
        {"id": "art", "name": "Art", "color": "#f59e0b"}
    ]"##;

    #[test]
    fn looks_up_by_id_and_name() {
        let catalog = CategoryCatalog::from_json_str(CATALOG).unwrap();
        assert_eq!(catalog.by_id("art").unwrap().name, "Art");
        assert_eq!(catalog.color_for_topic("Science"), Some("#0ea5e9"));
        assert_eq!(catalog.color_for_topic("Sports"), None);
    }

    #[test]
    fn resolves_ids_to_topic_names() {
        let catalog = CategoryCatalog::from_json_str(CATALOG).unwrap();
        let ids = CategoryFilter::parse("sci,art").unwrap();

        let names = catalog.resolve_filter(&ids).unwrap().unwrap();
        assert_eq!(names.iter().collect::<Vec<_>>(), vec!["Art", "Science"]);
    }

    #[test]
    fn unknown_id_is_rejected() {
        let catalog = CategoryCatalog::from_json_str(CATALOG).unwrap();
        let ids = CategoryFilter::parse("sci,geo").unwrap();
        assert!(matches!(
            catalog.resolve_filter(&ids),
            Err(CatalogError::UnknownCategory(id)) if id == "geo"
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r##"[
            {"id": "sci", "name": "Science", "color": "#000"},
            {"id": "sci", "name": "Physics", "color": "#fff"}
        ]"##;
        assert!(matches!(
            CategoryCatalog::from_json_str(raw),
            Err(CatalogError::DuplicateId(id)) if id == "sci"
        ));
    }
}
