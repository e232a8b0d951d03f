//! Property-based tests for deck invariants.

use std::collections::HashSet;

use pokerdeck::{Card, DECK_SIZE, Deck, DeckOptions, DrawError};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Top,
    Random,
    Hand,
    Shuffle,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Top),
        Just(Op::Random),
        Just(Op::Hand),
        Just(Op::Shuffle),
    ]
}

fn remaining_set(deck: &Deck) -> HashSet<Card> {
    deck.remaining().iter().copied().collect()
}

proptest! {
    /// Shuffling only reorders the cards left in the deck.
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>(), drawn in 0..DECK_SIZE) {
        let mut deck = Deck::new(DeckOptions::default(), seed);
        for _ in 0..drawn {
            deck.draw_random().unwrap();
        }
        let before = remaining_set(&deck);

        deck.shuffle();

        prop_assert_eq!(remaining_set(&deck), before);
        prop_assert_eq!(deck.remaining_count(), DECK_SIZE - drawn);
        prop_assert_eq!(deck.dealt_count(), drawn);
    }

    /// Every operation keeps each card in exactly one of the two collections
    /// and moves exactly as many cards as it reports.
    #[test]
    fn operations_preserve_partition(
        seed in any::<u64>(),
        ops in proptest::collection::vec(op(), 0..80),
    ) {
        let mut deck = Deck::new(DeckOptions::default(), seed);

        for op in ops {
            let before = deck.remaining_count();
            let dealt_before = deck.dealt_count();

            let moved = match op {
                Op::Top => deck.draw_top().map(|_| 1),
                Op::Random => deck.draw_random().map(|_| 1),
                Op::Hand => deck.draw_hand().map(|hand| hand.len()),
                Op::Shuffle => {
                    deck.shuffle();
                    Ok(0)
                }
            };

            match moved {
                Ok(count) => {
                    prop_assert_eq!(deck.remaining_count(), before - count);
                    prop_assert_eq!(deck.dealt_count(), dealt_before + count);
                }
                Err(DrawError::EmptyDeck) => {
                    prop_assert_eq!(before, 0);
                    prop_assert_eq!(deck.remaining_count(), 0);
                }
                Err(DrawError::InsufficientCards { requested, remaining }) => {
                    prop_assert_eq!(requested, 5);
                    prop_assert_eq!(remaining, before);
                    prop_assert!(before < 5);
                    prop_assert_eq!(deck.remaining_count(), before);
                }
            }

            let remaining = remaining_set(&deck);
            prop_assert_eq!(remaining.len(), deck.remaining_count());
            prop_assert!(deck.dealt().all(|card| !remaining.contains(card)));
            prop_assert_eq!(deck.remaining_count() + deck.dealt_count(), DECK_SIZE);
        }
    }
}
