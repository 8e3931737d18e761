//! Class Catalog

use std::borrow::Cow;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::ids::ClassId;

/// Read-only snapshot of class display names, keyed by class id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ClassCatalog {
    names: FxHashMap<ClassId, String>,
}

impl ClassCatalog {
    /// Display name of a class, if the catalog knows it.
    pub fn get(&self, id: &ClassId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Display name of a class, or a placeholder naming the id when unknown.
    pub fn display_name(&self, id: &ClassId) -> Cow<'_, str> {
        self.get(id)
            .map_or_else(|| Cow::Owned(unknown_class(id)), Cow::Borrowed)
    }

    /// Number of classes in the catalog.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<I: Into<ClassId>, N: Into<String>> FromIterator<(I, N)> for ClassCatalog {
    fn from_iter<T: IntoIterator<Item = (I, N)>>(iter: T) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }
}

/// Resolves a class name against an optional catalog. Never fails.
pub fn class_name<'c>(catalog: Option<&'c ClassCatalog>, id: &ClassId) -> Cow<'c, str> {
    match catalog {
        Some(catalog) => catalog.display_name(id),
        None => Cow::Owned(unknown_class(id)),
    }
}

fn unknown_class(id: &ClassId) -> String {
    format!("Unknown class ({id})")
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn resolves_known_classes() {
        let catalog = ClassCatalog::from_iter([("1", "Vinyasa Flow")]);

        assert_eq!(catalog.display_name(&ClassId::new("1")), "Vinyasa Flow");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn unknown_class_renders_placeholder() {
        let catalog = ClassCatalog::from_iter([("1", "Vinyasa Flow")]);

        assert_eq!(
            catalog.display_name(&ClassId::new("9")),
            "Unknown class (9)"
        );
    }

    #[test]
    fn missing_catalog_renders_placeholder() {
        assert_eq!(class_name(None, &ClassId::new("3")), "Unknown class (3)");
    }

    #[test]
    fn deserializes_from_a_map() -> TestResult {
        let catalog: ClassCatalog = serde_json::from_str(r#"{ "1": "Hatha", "2": "Yin" }"#)?;

        assert_eq!(catalog.get(&ClassId::new("2")), Some("Yin"));

        Ok(())
    }
}
