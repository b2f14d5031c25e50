use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::model::StackMatch;

/// Archetype returned when nothing in the liked set overlaps any archetype.
/// Catalogs without it fall back to their first archetype instead.
pub const DEFAULT_STACK: &str = "MERN";

/// Pick the archetype with the largest overlap with `liked`.
///
/// Overlap is set membership, so an id liked twice counts once. Only a
/// strictly greater count replaces the current best: ties go to the archetype
/// earlier in the table, and the default holder is kept when every archetype
/// scores zero.
pub fn best_stack<'a, S: AsRef<str>>(catalog: &'a Catalog, liked: &[S]) -> &'a str {
    let liked: HashSet<&str> = liked.iter().map(|s| s.as_ref()).collect();

    let mut best = default_stack(catalog);
    let mut best_count = 0;
    for stack in catalog.archetypes() {
        let count = stack
            .techs
            .iter()
            .filter(|t| liked.contains(t.as_str()))
            .count();
        if count > best_count {
            best = stack.key.as_str();
            best_count = count;
        }
    }

    tracing::debug!(stack = best, matched = best_count, "best stack selected");
    best
}

/// [`DEFAULT_STACK`] when the table has it, else the table's first key.
pub fn default_stack(catalog: &Catalog) -> &str {
    if catalog.archetype(DEFAULT_STACK).is_some() {
        return DEFAULT_STACK;
    }
    catalog
        .archetypes()
        .first()
        .map(|stack| stack.key.as_str())
        .unwrap_or(DEFAULT_STACK)
}

/// Overlap of `liked` with every archetype, in table order.
pub fn score_stacks<S: AsRef<str>>(catalog: &Catalog, liked: &[S]) -> Vec<StackMatch> {
    let liked: HashSet<&str> = liked.iter().map(|s| s.as_ref()).collect();
    catalog
        .archetypes()
        .iter()
        .map(|stack| StackMatch {
            key: stack.key.clone(),
            matched: stack
                .techs
                .iter()
                .filter(|t| liked.contains(t.as_str()))
                .count(),
            total: stack.techs.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, StackArchetype, StackColor, Technology};

    fn catalog() -> &'static Catalog {
        Catalog::builtin()
    }

    #[test]
    fn test_builtin_default_is_mern() {
        assert_eq!(default_stack(catalog()), "MERN");
    }

    #[test]
    fn test_empty_returns_default() {
        assert_eq!(best_stack::<&str>(catalog(), &[]), DEFAULT_STACK);
    }

    #[test]
    fn test_unknown_ids_return_default() {
        assert_eq!(best_stack(catalog(), &["cobol", "fortran"]), DEFAULT_STACK);
    }

    #[test]
    fn test_full_mern_match() {
        assert_eq!(
            best_stack(catalog(), &["react", "express", "mongodb", "nodejs"]),
            "MERN"
        );
    }

    #[test]
    fn test_python_web() {
        assert_eq!(
            best_stack(catalog(), &["python", "django", "redis"]),
            "pythonWeb"
        );
    }

    #[test]
    fn test_order_independent() {
        let a = best_stack(catalog(), &["docker", "kubernetes", "go"]);
        let b = best_stack(catalog(), &["go", "docker", "kubernetes"]);
        assert_eq!(a, b);
        assert_eq!(a, "cloudNative");
    }

    #[test]
    fn test_duplicates_do_not_inflate() {
        // One MERN id repeated four times must not beat two distinct T3 ids.
        let liked = ["nodejs", "nodejs", "nodejs", "nodejs", "prisma", "tailwind"];
        assert_eq!(best_stack(catalog(), &liked), "T3");
    }

    #[test]
    fn test_tie_goes_to_earlier_archetype() {
        // "react" is in MERN, JAMstack and modernFrontend; MERN comes first.
        assert_eq!(best_stack(catalog(), &["react"]), "MERN");
        // "nextjs" + "typescript" scores 2 in both T3 and JAMstack; T3 comes first.
        assert_eq!(best_stack(catalog(), &["nextjs", "typescript"]), "T3");
    }

    #[test]
    fn test_higher_overlap_beats_earlier() {
        // 1 in MERN, 2 in serverless, 3 in modernFrontend.
        assert_eq!(
            best_stack(catalog(), &["react", "tailwind", "reactquery"]),
            "modernFrontend"
        );
    }

    #[test]
    fn test_custom_catalog_defaults_to_first_key() {
        let custom = Catalog::new(
            vec![
                Technology::new("htmx", "htmx", Category::Frontend, ""),
                Technology::new("go", "Go", Category::Language, ""),
            ],
            vec![StackArchetype::new("gotth", "GoTTH", "", StackColor::Blue, &["go", "htmx"])],
        )
        .unwrap();
        assert_eq!(default_stack(&custom), "gotth");
        assert_eq!(best_stack(&custom, &["react"]), "gotth");
        assert_eq!(best_stack(&custom, &["go"]), "gotth");
    }

    #[test]
    fn test_score_stacks_table_order() {
        let scores = score_stacks(catalog(), &["react", "typescript"]);
        assert_eq!(scores.len(), 10);
        assert_eq!(scores[0].key, "MERN");
        assert_eq!(scores[0].matched, 1);
        let jam = scores.iter().find(|m| m.key == "JAMstack").unwrap();
        assert_eq!(jam.matched, 2);
        assert_eq!(jam.total, 4);
    }
}
