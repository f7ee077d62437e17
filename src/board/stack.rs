//! Per-theater card stacks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Cards one player has played into one theater, in play order.
///
/// Index 0 is the first card played. Stacks only grow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TheaterStack {
    /// A player holds six cards, so six covers every stack without spilling.
    cards: SmallVec<[Card; 6]>,
}

impl TheaterStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Play a card on top of the stack.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a row depth, if the stack reaches it.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<Card> {
        self.cards.get(row).copied()
    }

    /// Most recently played card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl FromIterator<Card> for TheaterStack {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_play_order() {
        let mut stack = TheaterStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);

        let first = Card::encode(true, 0, 1);
        let second = Card::face_down();
        stack.push(first);
        stack.push(second);

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.get(0), Some(first));
        assert_eq!(stack.get(1), Some(second));
        assert_eq!(stack.get(2), None);
        assert_eq!(stack.top(), Some(second));
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![first, second]);
    }

    #[test]
    fn test_from_iter() {
        let stack: TheaterStack = (1..=3).map(|rank| Card::encode(true, 2, rank)).collect();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.top().unwrap().rank(), 3);
    }
}
