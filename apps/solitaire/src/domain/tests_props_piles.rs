/// Property-based tests for foundation and tableau acceptance
use proptest::prelude::*;

use crate::domain::cards_logic::stacks_on_tableau;
use crate::domain::{test_gens, test_prelude, Card, CardTarget, Foundation, Rank, Tableau};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// A foundation holding Ace..k accepts exactly the next rank of its suit.
    #[test]
    fn prop_foundation_accepts_next_rank_only(
        suit in test_gens::suit(),
        held in 0usize..=13,
        candidate in test_gens::card(),
    ) {
        let cards: Vec<Card> = Rank::ALL[..held].iter().map(|&r| Card::face_up(suit, r)).collect();
        let foundation = Foundation::from_cards(suit, cards).unwrap();
        let expected = candidate.suit() == suit && candidate.rank().index() as usize == held + 1;
        prop_assert_eq!(foundation.can_accept(&candidate), expected);
        prop_assert_eq!(foundation.is_complete(), held == 13);
    }

    /// Moving onto an empty column succeeds iff the run's bottom card is a King.
    #[test]
    fn prop_transfer_to_empty_needs_king(run in test_gens::descending_run()) {
        let mut source = Tableau::from_cards(run.clone()).unwrap();
        let mut target = Tableau::new();
        let moved = source.transfer_to(&mut target);
        prop_assert_eq!(moved, run[0].rank() == Rank::King);
        if moved {
            prop_assert!(source.is_empty());
            prop_assert_eq!(target.cards(), run.as_slice());
        } else {
            prop_assert_eq!(source.cards(), run.as_slice());
            prop_assert!(target.is_empty());
        }
    }

    /// Moving onto a non-empty column lifts the lowest card that stacks on
    /// the target's top together with everything above it.
    #[test]
    fn prop_transfer_attaches_at_target_top(
        run in test_gens::descending_run(),
        top in test_gens::card(),
    ) {
        let mut source = Tableau::from_cards(run.clone()).unwrap();
        let mut target = Tableau::from_cards(vec![top]).unwrap();
        let split = run.iter().position(|c| stacks_on_tableau(&top, c));
        let moved = source.transfer_to(&mut target);
        prop_assert_eq!(moved, split.is_some());
        match split {
            Some(i) => {
                prop_assert_eq!(source.cards(), &run[..i]);
                prop_assert_eq!(&target.cards()[1..], &run[i..]);
                let bottom = target.cards()[1];
                prop_assert_eq!(bottom.rank().index() + 1, top.rank().index());
                prop_assert_ne!(bottom.color(), top.color());
            }
            None => {
                prop_assert_eq!(source.cards(), run.as_slice());
                prop_assert_eq!(target.len(), 1);
            }
        }
    }
}
