//! Deck construction, shuffling and the opening deal.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, Rank, Suit};
use super::piles::{Stock, Tableau};
use super::rules::{initial_column_len, DECK_SIZE, TABLEAU_COUNT};

/// Random source for every shuffle in a game. ChaCha keeps seeded games
/// identical across platforms.
pub type GameRng = ChaCha8Rng;

/// Seeded RNG when `seed` is given, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> GameRng {
    match seed {
        Some(s) => GameRng::seed_from_u64(s),
        None => GameRng::from_os_rng(),
    }
}

/// All 52 cards, face-down, suit by suit in their fixed order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Shuffle `cards` and deal them: column `i` receives `i + 1` cards dealt
/// row by row, with only the last card of each column face-up. The rest
/// stay in the stock, face-down.
pub fn deal<R: rand::Rng + ?Sized>(
    mut cards: Vec<Card>,
    rng: &mut R,
) -> ([Tableau; TABLEAU_COUNT], Stock) {
    for card in &mut cards {
        card.turn_down();
    }
    cards.shuffle(rng);

    let mut tableaus: [Tableau; TABLEAU_COUNT] = Default::default();
    for row in 0..TABLEAU_COUNT {
        for (column, tableau) in tableaus.iter_mut().enumerate().skip(row) {
            let Some(card) = cards.pop() else {
                break;
            };
            tableau.deal(card);
            if tableau.len() == initial_column_len(column) {
                tableau.reveal_top_if_any();
            }
        }
    }
    (tableaus, Stock::new(cards))
}
