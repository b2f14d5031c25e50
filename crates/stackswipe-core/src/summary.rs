//! The full result for a liked set: best stack, per-stack overlap,
//! recommendations and the liked technologies grouped by category.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{Result, StackSwipeError};
use crate::matcher::{best_stack, score_stacks};
use crate::model::{Category, Recommendation, StackArchetype, StackMatch, Technology};
use crate::recommend::recommendations;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackResult {
    pub best_stack: String,
    pub stack: StackArchetype,
    /// Overlap with every archetype, in table order.
    pub matches: Vec<StackMatch>,
    pub recommendations: Vec<Recommendation>,
    pub liked_by_category: Vec<CategoryGroup>,
    /// Liked ids the catalog doesn't know.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown_ids: Vec<String>,
    pub share_text: String,
}

impl StackResult {
    /// Overlap detail for the best stack.
    pub fn best_match(&self) -> Option<&StackMatch> {
        self.matches.iter().find(|m| m.key == self.best_stack)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub technologies: Vec<Technology>,
}

pub fn summarize<S: AsRef<str>>(catalog: &Catalog, liked: &[S]) -> Result<StackResult> {
    let key = best_stack(catalog, liked);
    let stack = catalog
        .archetype(key)
        .cloned()
        .ok_or_else(|| StackSwipeError::NotFound(format!("archetype '{key}'")))?;

    let liked_by_category = catalog
        .group_by_category(liked)
        .into_iter()
        .map(|(category, techs)| CategoryGroup {
            category,
            technologies: techs.into_iter().cloned().collect(),
        })
        .collect();

    let unknown_ids = liked
        .iter()
        .map(|s| s.as_ref())
        .filter(|id| catalog.by_id(id).is_none())
        .map(str::to_string)
        .collect();

    Ok(StackResult {
        best_stack: key.to_string(),
        share_text: stack.share_text(),
        stack,
        matches: score_stacks(catalog, liked),
        recommendations: recommendations(catalog, liked),
        liked_by_category,
        unknown_ids,
    })
}
