//! Swipe deck and session state.
//!
//! A deck is a shuffled, size-capped slice of the catalog. The session walks
//! it one card at a time, recording likes and passes, and hands the liked
//! list to a [`PreferenceStore`] when done.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::{Category, Technology};
use crate::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Like,
    Pass,
}

/// Cards drawn from the catalog for one swipe session.
#[derive(Debug, Clone)]
pub struct SwipeDeck<'a> {
    cards: Vec<&'a Technology>,
}

impl<'a> SwipeDeck<'a> {
    /// Draw up to `deck_size` shuffled cards from `categories`. An empty
    /// category list draws from the whole catalog.
    pub fn new<R: Rng + ?Sized>(
        catalog: &'a Catalog,
        categories: &[Category],
        deck_size: usize,
        rng: &mut R,
    ) -> Self {
        let mut cards: Vec<&Technology> = catalog
            .all()
            .iter()
            .filter(|t| categories.is_empty() || categories.contains(&t.category))
            .collect();
        cards.shuffle(rng);
        cards.truncate(deck_size);
        tracing::debug!(cards = cards.len(), ?categories, "dealt swipe deck");
        Self { cards }
    }

    /// A deck in the given order, without shuffling.
    pub fn from_cards(cards: Vec<&'a Technology>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[&'a Technology] {
        &self.cards
    }
}

#[derive(Debug, Clone)]
pub struct SwipeSession<'a> {
    deck: SwipeDeck<'a>,
    position: usize,
    liked: Vec<String>,
    passed: Vec<String>,
}

impl<'a> SwipeSession<'a> {
    pub fn new(deck: SwipeDeck<'a>) -> Self {
        Self {
            deck,
            position: 0,
            liked: Vec::new(),
            passed: Vec::new(),
        }
    }

    /// The card on top of the deck, `None` once every card is reviewed.
    pub fn current(&self) -> Option<&'a Technology> {
        self.deck.cards.get(self.position).copied()
    }

    /// Record a decision on the current card and advance. Returns the card
    /// that was swiped, or `None` when the deck is already exhausted.
    pub fn swipe(&mut self, direction: Direction) -> Option<&'a Technology> {
        let tech = self.current()?;
        match direction {
            Direction::Like => self.liked.push(tech.id.clone()),
            Direction::Pass => self.passed.push(tech.id.clone()),
        }
        self.position += 1;
        Some(tech)
    }

    /// Percentage of the deck reviewed, in `[0, 100]`.
    pub fn progress(&self) -> f32 {
        if self.deck.is_empty() {
            return 0.0;
        }
        let reviewed = (self.liked.len() + self.passed.len()) as f32;
        (reviewed / self.deck.len() as f32 * 100.0).min(100.0)
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.deck.len()
    }

    pub fn liked(&self) -> &[String] {
        &self.liked
    }

    pub fn passed(&self) -> &[String] {
        &self.passed
    }

    pub fn deck(&self) -> &SwipeDeck<'a> {
        &self.deck
    }

    /// Replace the stored liked list with this session's likes.
    pub fn finish<P: PreferenceStore + ?Sized>(&self, store: &P) -> Result<()> {
        store.save_liked_ids(&self.liked)?;
        tracing::info!(
            liked = self.liked.len(),
            passed = self.passed.len(),
            "swipe session saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferenceStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_deck_capped_at_size() {
        let deck = SwipeDeck::new(Catalog::builtin(), &[], 10, &mut rng());
        assert_eq!(deck.len(), 10);
    }

    #[test]
    fn test_deck_filters_categories() {
        let deck = SwipeDeck::new(
            Catalog::builtin(),
            &[Category::Cloud, Category::Devops],
            10,
            &mut rng(),
        );
        // Only 6 cloud + devops technologies exist
        assert_eq!(deck.len(), 6);
        assert!(deck
            .cards()
            .iter()
            .all(|t| matches!(t.category, Category::Cloud | Category::Devops)));
    }

    #[test]
    fn test_deck_has_no_duplicates() {
        let deck = SwipeDeck::new(Catalog::builtin(), &[], 45, &mut rng());
        let mut ids: Vec<&str> = deck.cards().iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 45);
    }

    #[test]
    fn test_same_seed_same_deck() {
        let a = SwipeDeck::new(Catalog::builtin(), &[], 10, &mut rng());
        let b = SwipeDeck::new(Catalog::builtin(), &[], 10, &mut rng());
        let ids = |d: &SwipeDeck| d.cards().iter().map(|t| t.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_swipe_records_and_advances() {
        let catalog = Catalog::builtin();
        let deck = SwipeDeck::from_cards(catalog.resolve(&["react", "nodejs", "mongodb"]));
        let mut session = SwipeSession::new(deck);

        assert_eq!(session.current().unwrap().id, "react");
        assert_eq!(session.swipe(Direction::Like).unwrap().id, "react");
        session.swipe(Direction::Pass);
        assert!((session.progress() - 200.0 / 3.0).abs() < 0.01);
        session.swipe(Direction::Like);

        assert!(session.is_finished());
        assert_eq!(session.liked(), ["react", "mongodb"]);
        assert_eq!(session.passed(), ["nodejs"]);
        assert!((session.progress() - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_swipe_past_end_is_noop() {
        let deck = SwipeDeck::from_cards(Catalog::builtin().resolve(&["go"]));
        let mut session = SwipeSession::new(deck);
        session.swipe(Direction::Like);
        assert!(session.swipe(Direction::Like).is_none());
        assert_eq!(session.liked().len(), 1);
        assert!(session.progress() <= 100.0);
    }

    #[test]
    fn test_empty_deck() {
        let session = SwipeSession::new(SwipeDeck::from_cards(Vec::new()));
        assert!(session.is_finished());
        assert!(session.current().is_none());
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_finish_replaces_stored_list() {
        let store = MemoryPreferenceStore::with_liked(&["angular"]);
        let deck = SwipeDeck::from_cards(Catalog::builtin().resolve(&["vue", "flask"]));
        let mut session = SwipeSession::new(deck);
        session.swipe(Direction::Like);
        session.swipe(Direction::Pass);
        session.finish(&store).unwrap();
        assert_eq!(store.load_liked_ids().unwrap(), vec!["vue"]);
    }
}
