//! The static technology catalog and stack archetype table.
//!
//! Both tables are immutable once built. Lookups that miss return `None`
//! and bulk helpers silently skip unknown ids; a liked id that has been
//! retired from the catalog is an expected situation, not an error.

mod archetypes;
mod technologies;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use crate::error::{Result, StackSwipeError};
use crate::model::{Category, StackArchetype, Technology};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog = Catalog::assemble(technologies::technologies(), archetypes::archetypes());
    for issue in catalog.validate() {
        tracing::warn!("catalog: {}", issue);
    }
    catalog
});

/// Technology catalog plus archetype table, with O(1) lookup indices.
#[derive(Debug, Clone)]
pub struct Catalog {
    technologies: Vec<Technology>,
    archetypes: Vec<StackArchetype>,
    tech_index: HashMap<String, usize>,
    archetype_index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in catalog, built on first access.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a custom catalog, rejecting duplicate ids, duplicate archetype
    /// keys, an empty archetype table, and archetypes that reference
    /// technologies missing from the catalog.
    pub fn new(technologies: Vec<Technology>, archetypes: Vec<StackArchetype>) -> Result<Self> {
        let catalog = Self::assemble(technologies, archetypes);
        let issues = catalog.validate();
        if !issues.is_empty() {
            return Err(StackSwipeError::InvalidInput(format!(
                "invalid catalog: {}",
                issues.join("; ")
            )));
        }
        Ok(catalog)
    }

    /// Index the tables without validating. On duplicate keys the first entry wins.
    fn assemble(technologies: Vec<Technology>, archetypes: Vec<StackArchetype>) -> Self {
        let mut tech_index = HashMap::with_capacity(technologies.len());
        for (i, tech) in technologies.iter().enumerate() {
            tech_index.entry(tech.id.clone()).or_insert(i);
        }
        let mut archetype_index = HashMap::with_capacity(archetypes.len());
        for (i, stack) in archetypes.iter().enumerate() {
            archetype_index.entry(stack.key.clone()).or_insert(i);
        }
        Self {
            technologies,
            archetypes,
            tech_index,
            archetype_index,
        }
    }

    /// Check the table invariants. Returns one message per problem found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for tech in &self.technologies {
            if !seen.insert(tech.id.as_str()) {
                issues.push(format!("duplicate technology id '{}'", tech.id));
            }
        }

        if self.archetypes.is_empty() {
            issues.push("archetype table is empty".to_string());
        }

        let mut seen = HashSet::new();
        for stack in &self.archetypes {
            if !seen.insert(stack.key.as_str()) {
                issues.push(format!("duplicate archetype key '{}'", stack.key));
            }
            for id in &stack.techs {
                if !self.tech_index.contains_key(id) {
                    issues.push(format!(
                        "archetype '{}' references unknown technology '{}'",
                        stack.key, id
                    ));
                }
            }
        }

        issues
    }

    pub fn by_id(&self, id: &str) -> Option<&Technology> {
        self.tech_index.get(id).map(|&i| &self.technologies[i])
    }

    pub fn all(&self) -> &[Technology] {
        &self.technologies
    }

    pub fn archetype(&self, key: &str) -> Option<&StackArchetype> {
        self.archetype_index.get(key).map(|&i| &self.archetypes[i])
    }

    /// Archetypes in table order.
    pub fn archetypes(&self) -> &[StackArchetype] {
        &self.archetypes
    }

    pub fn by_category(&self, category: Category) -> Vec<&Technology> {
        self.technologies
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Resolve ids to catalog entries in catalog order. Unknown ids are
    /// skipped and duplicates collapse to a single entry.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Technology> {
        let wanted: HashSet<&str> = ids.iter().map(|s| s.as_ref()).collect();
        self.technologies
            .iter()
            .filter(|t| wanted.contains(t.id.as_str()))
            .collect()
    }

    /// The technologies that make up an archetype, skipping stale ids.
    /// Empty when the key is unknown.
    pub fn archetype_techs(&self, key: &str) -> Vec<&Technology> {
        self.archetype(key)
            .map(|stack| stack.techs.iter().filter_map(|id| self.by_id(id)).collect())
            .unwrap_or_default()
    }

    /// Distinct categories among the resolvable ids.
    pub fn categories_of<S: AsRef<str>>(&self, ids: &[S]) -> BTreeSet<Category> {
        ids.iter()
            .filter_map(|id| self.by_id(id.as_ref()))
            .map(|t| t.category)
            .collect()
    }

    /// Group the resolvable ids by category, largest group first. Equal-size
    /// groups keep `Category::ALL` order.
    pub fn group_by_category<S: AsRef<str>>(&self, ids: &[S]) -> Vec<(Category, Vec<&Technology>)> {
        let mut groups: BTreeMap<Category, Vec<&Technology>> = BTreeMap::new();
        for tech in self.resolve(ids) {
            groups.entry(tech.category).or_default().push(tech);
        }
        let mut groups: Vec<_> = groups.into_iter().collect();
        groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        groups
    }
}
