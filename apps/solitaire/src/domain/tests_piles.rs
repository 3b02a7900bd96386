use crate::domain::piles::pair_mut;
use crate::domain::test_state_helpers::{card, cards};
use crate::domain::{CardTarget, Foundation, Rank, Stock, Suit, Tableau};
use crate::errors::domain::{CorruptSaveKind, DomainError};

fn full_foundation(suit: Suit) -> Foundation {
    Foundation::from_cards(suit, Rank::ALL.iter().map(|&r| card(suit, r)).collect()).unwrap()
}

#[test]
fn foundation_takes_ace_of_its_suit_only() {
    let f = Foundation::new(Suit::Hearts);
    assert!(f.can_accept(&card(Suit::Hearts, Rank::Ace)));
    assert!(!f.can_accept(&card(Suit::Diamonds, Rank::Ace)));
    assert!(!f.can_accept(&card(Suit::Hearts, Rank::Two)));
}

#[test]
fn foundation_climbs_one_rank_at_a_time() {
    let mut f = Foundation::new(Suit::Spades);
    f.place(card(Suit::Spades, Rank::Ace)).unwrap();
    assert!(!f.can_accept(&card(Suit::Spades, Rank::Three)));
    f.place(card(Suit::Spades, Rank::Two)).unwrap();
    assert!(f.can_accept(&card(Suit::Spades, Rank::Three)));
    assert_eq!(f.pile().len(), 2);
    assert!(!f.is_complete());
}

#[test]
fn complete_foundation_accepts_nothing() {
    let f = full_foundation(Suit::Clubs);
    assert!(f.is_complete());
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(!f.can_accept(&card(suit, rank)));
        }
    }
}

#[test]
fn rejected_place_names_the_card_and_leaves_pile_alone() {
    let mut f = Foundation::new(Suit::Diamonds);
    let err = f.place(card(Suit::Diamonds, Rank::Five)).unwrap_err();
    match err {
        DomainError::IllegalMove(msg) => assert!(msg.contains("\u{2666}5"), "{msg}"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(f.pile().is_empty());
}

#[test]
fn foundation_from_cards_checks_order() {
    let err = Foundation::from_cards(Suit::Hearts, cards("h:a,h:3")).unwrap_err();
    assert_eq!(err.corrupt_kind(), Some(CorruptSaveKind::BrokenFoundation));
    let err = Foundation::from_cards(Suit::Hearts, cards("p:a")).unwrap_err();
    assert_eq!(err.corrupt_kind(), Some(CorruptSaveKind::BrokenFoundation));
    let f = Foundation::from_cards(Suit::Hearts, cards("-h:a,h:2")).unwrap();
    assert!(f.pile().cards().iter().all(|c| c.is_face_up()));
}

#[test]
fn empty_tableau_takes_kings_only() {
    let mut t = Tableau::new();
    assert!(!t.can_accept(&card(Suit::Hearts, Rank::Queen)));
    assert!(t.place(card(Suit::Hearts, Rank::Queen)).is_err());
    t.place(card(Suit::Spades, Rank::King)).unwrap();
    t.place(card(Suit::Hearts, Rank::Queen)).unwrap();
    assert_eq!(t.len(), 2);
}

#[test]
fn tableau_needs_face_up_top() {
    let t = Tableau::from_cards(cards("-p:k")).unwrap();
    assert!(!t.can_accept(&card(Suit::Hearts, Rank::Queen)));
}

#[test]
fn reveal_and_draw_top() {
    let mut t = Tableau::from_cards(cards("-p:k,-h:4")).unwrap();
    assert_eq!(t.hidden_len(), 2);
    t.reveal_top_if_any();
    t.reveal_top_if_any();
    assert_eq!(t.hidden_len(), 1);
    let top = t.draw_top().unwrap();
    assert!(top.same_face(&card(Suit::Hearts, Rank::Four)));
    assert!(!t.top().unwrap().is_face_up(), "draw_top must not reveal");
    t.draw_top();
    assert_eq!(t.draw_top(), None);
    t.reveal_top_if_any();
}

#[test]
fn tableau_from_cards_checks_layout() {
    assert!(Tableau::from_cards(cards("-kr:2,h:6")).is_ok());
    assert!(Tableau::from_cards(cards("ka:d,p:b,h:10")).is_ok());
    let err = Tableau::from_cards(cards("h:6,-kr:2")).unwrap_err();
    assert_eq!(err.corrupt_kind(), Some(CorruptSaveKind::BrokenTableau));
    let err = Tableau::from_cards(cards("ka:d,h:b")).unwrap_err();
    assert_eq!(err.corrupt_kind(), Some(CorruptSaveKind::BrokenTableau));
    let err = Tableau::from_cards(cards("ka:d,p:10")).unwrap_err();
    assert_eq!(err.corrupt_kind(), Some(CorruptSaveKind::BrokenTableau));
}

#[test]
fn transfer_moves_whole_run_onto_matching_card() {
    let mut source = Tableau::from_cards(cards("-kr:2,-h:3,p:9,h:8,kr:7")).unwrap();
    let mut target = Tableau::from_cards(cards("ka:10")).unwrap();
    assert!(source.transfer_to(&mut target));
    assert_eq!(target.cards(), cards("ka:10,p:9,h:8,kr:7").as_slice());
    assert_eq!(source.len(), 2);
    assert!(source.top().unwrap().is_face_up(), "new top is revealed");
    assert_eq!(source.hidden_len(), 1);
}

#[test]
fn transfer_picks_the_attachable_suffix() {
    let mut source = Tableau::from_cards(cards("p:9,h:8,kr:7")).unwrap();
    let mut target = Tableau::from_cards(cards("p:9")).unwrap();
    assert!(source.transfer_to(&mut target));
    assert_eq!(source.cards(), cards("p:9").as_slice());
    assert_eq!(target.cards(), cards("p:9,h:8,kr:7").as_slice());
}

#[test]
fn transfer_to_empty_column_needs_a_king_at_the_bottom() {
    let mut source = Tableau::from_cards(cards("-h:2,p:k,h:d")).unwrap();
    let mut empty = Tableau::new();
    assert!(source.transfer_to(&mut empty));
    assert_eq!(empty.cards(), cards("p:k,h:d").as_slice());
    assert!(source.top().unwrap().is_face_up());

    let mut no_king = Tableau::from_cards(cards("p:d,h:b")).unwrap();
    let mut empty = Tableau::new();
    assert!(!no_king.transfer_to(&mut empty));
    assert_eq!(no_king.len(), 2);
    assert!(empty.is_empty());
}

#[test]
fn transfer_can_empty_the_source() {
    let mut source = Tableau::from_cards(cards("h:8,kr:7")).unwrap();
    let mut target = Tableau::from_cards(cards("p:9")).unwrap();
    assert!(source.transfer_to(&mut target));
    assert!(source.is_empty());
}

#[test]
fn failed_transfer_changes_nothing() {
    let mut source = Tableau::from_cards(cards("-h:2,p:9,h:8")).unwrap();
    let mut target = Tableau::from_cards(cards("kr:10")).unwrap();
    let (s0, t0) = (source.clone(), target.clone());
    assert!(!source.transfer_to(&mut target));
    assert_eq!(source, s0);
    assert_eq!(target, t0);
}

#[test]
fn stock_draw_turns_card_up() {
    let mut stock = Stock::new(cards("h:a,p:2"));
    assert!(stock.pile().cards().iter().all(|c| !c.is_face_up()));
    let drawn = stock.draw().unwrap();
    assert!(drawn.is_face_up());
    assert!(drawn.same_face(&card(Suit::Spades, Rank::Two)));
    stock.draw();
    assert_eq!(stock.draw(), None);
}

#[test]
fn pile_equality_sees_face_state() {
    let up = Tableau::from_cards(cards("h:a")).unwrap();
    let down = Tableau::from_cards(cards("-h:a")).unwrap();
    assert_ne!(up, down);
}

#[test]
fn pair_mut_returns_distinct_elements() {
    let mut v = [1, 2, 3];
    let (a, b) = pair_mut(&mut v, 2, 0).unwrap();
    std::mem::swap(a, b);
    assert_eq!(v, [3, 2, 1]);
    assert!(pair_mut(&mut v, 1, 1).is_none());
    assert!(pair_mut(&mut v, 0, 3).is_none());
}
