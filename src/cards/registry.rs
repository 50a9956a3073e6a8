//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores all card definitions for a game, shared behind
//! `Arc` so every placeable dealt from it points at the same data.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::CardDataError;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use tile_push::{CardDefinition, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Knight")).unwrap();
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Knight");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON array of card definitions.
    ///
    /// ```
    /// use tile_push::{ArrowStrength, CardId, CardRegistry, Direction};
    ///
    /// let json = r#"[
    ///     { "id": 1, "name": "Ram",
    ///       "arrows": [
    ///         { "strength": "Double", "effect": "Push" },
    ///         { "strength": "None" },
    ///         { "strength": "Single" },
    ///         { "strength": "None" }
    ///       ] }
    /// ]"#;
    ///
    /// let registry = CardRegistry::from_json(json).unwrap();
    /// let ram = registry.get(CardId::new(1)).unwrap();
    /// assert_eq!(ram.arrow_at(Direction::Down).strength, ArrowStrength::Single);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CardDataError> {
        let definitions: Vec<CardDefinition> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for card in definitions {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Register a card definition. Fails if the ID is already taken.
    pub fn register(&mut self, card: CardDefinition) -> Result<Arc<CardDefinition>, CardDataError> {
        if self.cards.contains_key(&card.id) {
            return Err(CardDataError::DuplicateCard(card.id));
        }
        let card = Arc::new(card);
        self.cards.insert(card.id, Arc::clone(&card));
        Ok(card)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<CardDefinition>> {
        self.cards.get(&id)
    }

    /// Find a card definition by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Arc<CardDefinition>> {
        self.cards.values().find(|c| c.name == name)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry
            .register(CardDefinition::new(CardId::new(1), "Test Card"))
            .unwrap();

        let found = registry.get(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Test Card");

        assert!(registry.get(CardId::new(99)).is_none());
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = CardRegistry::new();
        registry
            .register(CardDefinition::new(CardId::new(1), "Card A"))
            .unwrap();

        let result = registry.register(CardDefinition::new(CardId::new(1), "Card B"));
        assert!(matches!(result, Err(CardDataError::DuplicateCard(id)) if id == CardId::new(1)));
        assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Card A");
    }

    #[test]
    fn test_register_returns_shared_definition() {
        let mut registry = CardRegistry::new();
        let card = registry
            .register(CardDefinition::new(CardId::new(2), "Shared"))
            .unwrap();

        assert!(Arc::ptr_eq(&card, registry.get(CardId::new(2)).unwrap()));
    }

    #[test]
    fn test_find_by_name() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(1), "A")).unwrap();
        registry.register(CardDefinition::new(CardId::new(2), "B")).unwrap();

        assert_eq!(registry.find_by_name("B").unwrap().id, CardId::new(2));
        assert!(registry.find_by_name("C").is_none());
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn test_from_json_duplicate() {
        let json = r#"[ { "id": 1, "name": "A" }, { "id": 1, "name": "B" } ]"#;
        assert!(matches!(
            CardRegistry::from_json(json),
            Err(CardDataError::DuplicateCard(_))
        ));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            CardRegistry::from_json("not json"),
            Err(CardDataError::Parse(_))
        ));
    }
}
