//! Taxonomy terms: product categories and tags.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::TermId;

/// The taxonomy a term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    Category,
    Tag,
}

/// A category or tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Term {
    /// Unique term identifier.
    pub id: TermId,
    /// URL-friendly slug, used in the query string.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Parent term (None for root terms and for all tags).
    #[serde(default)]
    pub parent_id: Option<TermId>,
    /// Manual sort position.
    #[serde(default)]
    pub position: i32,
}

impl Term {
    pub fn new(id: impl Into<TermId>, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            parent_id: None,
            position: 0,
        }
    }

    /// Builder: place under a parent term.
    pub fn with_parent(mut self, parent: impl Into<TermId>) -> Self {
        self.parent_id = Some(parent.into());
        self
    }

    /// Builder: set the manual sort position.
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Check if this is a root term.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Parent links of a taxonomy, keyed by slug.
///
/// Parents that are missing from the taxonomy end the chain, and a
/// malformed cycle is cut after visiting every term once.
#[derive(Debug, Clone, Default)]
pub struct TermTree {
    parents: HashMap<String, String>,
}

impl TermTree {
    pub fn new(terms: &[Term]) -> Self {
        let slug_by_id: HashMap<&TermId, &str> =
            terms.iter().map(|t| (&t.id, t.slug.as_str())).collect();

        let parents = terms
            .iter()
            .filter_map(|t| {
                let parent = t.parent_id.as_ref()?;
                let parent_slug = slug_by_id.get(parent)?;
                Some((t.slug.clone(), parent_slug.to_string()))
            })
            .collect();

        Self { parents }
    }

    /// Ancestor slugs of `slug`, nearest first.
    pub fn ancestors(&self, slug: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut current = slug;
        while let Some(parent) = self.parents.get(current) {
            if parent == slug || out.len() > self.parents.len() {
                break;
            }
            out.push(parent.as_str());
            current = parent;
        }
        out
    }

    /// Whether `slug` is `root` or one of its descendants.
    pub fn is_within(&self, slug: &str, root: &str) -> bool {
        slug == root || self.ancestors(slug).contains(&root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> Vec<Term> {
        vec![
            Term::new("1", "clothing", "Clothing"),
            Term::new("2", "shoes", "Shoes").with_parent("1"),
            Term::new("3", "boots", "Boots").with_parent("2"),
            Term::new("4", "bags", "Bags"),
        ]
    }

    #[test]
    fn test_root_term() {
        let terms = taxonomy();
        assert!(terms[0].is_root());
        assert!(!terms[1].is_root());
    }

    #[test]
    fn test_hierarchy() {
        let tree = TermTree::new(&taxonomy());

        assert_eq!(tree.ancestors("boots"), vec!["shoes", "clothing"]);
        assert!(tree.is_within("boots", "clothing"));
        assert!(tree.is_within("shoes", "shoes"));
        assert!(!tree.is_within("clothing", "shoes"));
        assert!(!tree.is_within("bags", "clothing"));
        assert!(tree.ancestors("bags").is_empty());
    }

    #[test]
    fn test_cycle_terminates() {
        let terms = vec![
            Term::new("1", "a", "A").with_parent("2"),
            Term::new("2", "b", "B").with_parent("1"),
        ];
        let tree = TermTree::new(&terms);
        assert_eq!(tree.ancestors("a"), vec!["b"]);
    }

    #[test]
    fn test_term_from_json_defaults() {
        let term: Term = serde_json::from_str(r#"{"id":"7","slug":"sale","name":"Sale"}"#).unwrap();
        assert!(term.is_root());
        assert_eq!(term.position, 0);
    }
}
