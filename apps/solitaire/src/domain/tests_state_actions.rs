use crate::domain::dealing::rng_from_seed;
use crate::domain::test_state_helpers::{board_with, board_with_score, card, won_board};
use crate::domain::{DrawResult, GameState, PileRef, Rank, Suit};
use crate::errors::domain::DomainError;

fn game(board: crate::domain::Board) -> GameState {
    GameState::from_board(board, rng_from_seed(Some(11)))
}

/// Runs `action` expecting failure and checks that nothing changed.
fn assert_rejected<F>(state: &mut GameState, action: F) -> DomainError
where
    F: FnOnce(&mut GameState) -> Result<crate::domain::MoveResult, DomainError>,
{
    let board = state.board().clone();
    let turn = state.turn();
    let err = action(state).unwrap_err();
    assert_eq!(state.board(), &board, "failed action mutated the board");
    assert_eq!(state.turn(), turn);
    err
}

#[test]
fn new_game_deals_a_full_deck() {
    let state = GameState::new_game(rng_from_seed(Some(5)));
    assert_eq!(state.board().all_cards().count(), 52);
    assert_eq!(state.board().stock().len(), 24);
    assert!(state.board().waste().is_empty());
    assert_eq!(state.current_score(), 0);
    assert_eq!(state.turn(), 0);
}

#[test]
fn draw_moves_stock_top_to_waste_face_up() {
    let mut state = GameState::new_game(rng_from_seed(Some(5)));
    let DrawResult::Drawn(card) = state.draw() else {
        panic!("stock should not be empty");
    };
    assert!(card.is_face_up());
    assert_eq!(state.board().waste().top(), Some(&card));
    assert!(state.board().waste().top().unwrap().is_face_up());
    assert_eq!(state.board().stock().len(), 23);
    assert_eq!(state.turn(), 1);
}

#[test]
fn draw_on_empty_stock_is_informational() {
    let mut state = game(won_board());
    let before = state.board().clone();
    assert_eq!(state.draw(), DrawResult::StockEmpty);
    assert_eq!(state.board(), &before);
    assert_eq!(state.turn(), 0);
}

#[test]
fn reshuffle_refuses_while_stock_has_cards() {
    let mut state = GameState::new_game(rng_from_seed(Some(5)));
    let err = assert_rejected(&mut state, GameState::reshuffle_stock);
    assert!(matches!(err, DomainError::InvalidAction(ref m) if m.contains("remain")));
}

#[test]
fn reshuffle_turns_waste_back_and_costs_twenty() {
    let mut state = GameState::new_game(rng_from_seed(Some(5)));
    while let DrawResult::Drawn(_) = state.draw() {}
    assert_eq!(state.board().waste().len(), 24);
    let result = state.reshuffle_stock().unwrap();
    assert_eq!(result.score_delta, -20);
    assert_eq!(result.cards_moved, 24);
    assert_eq!(state.current_score(), -20);
    assert!(state.board().waste().is_empty());
    assert_eq!(state.board().stock().len(), 24);
    assert!(state
        .board()
        .stock()
        .pile()
        .cards()
        .iter()
        .all(|c| !c.is_face_up()));
}

#[test]
fn reshuffle_with_empty_waste_still_costs_twenty() {
    let mut state = game(won_board());
    let score = state.current_score();
    let result = state.reshuffle_stock().unwrap();
    assert_eq!(result.score_delta, -20);
    assert_eq!(result.cards_moved, 0);
    assert_eq!(state.current_score(), score - 20);
    assert_eq!(state.turn(), 1);
    assert!(state.board().stock().is_empty());
    assert!(state.board().waste().is_empty());
}

#[test]
fn huge_column_index_is_invalid_not_a_panic() {
    let mut state = GameState::new_game(rng_from_seed(Some(5)));
    let err = assert_rejected(&mut state, |s| s.transfer_tableau(0, usize::MAX));
    assert!(matches!(err, DomainError::InvalidAction(_)));
    let err = assert_rejected(&mut state, |s| s.move_waste_to_tableau(usize::MAX));
    assert!(matches!(err, DomainError::InvalidAction(_)));
    let err = assert_rejected(&mut state, |s| {
        s.move_to_foundation(PileRef::Tableau(usize::MAX))
    });
    assert!(matches!(err, DomainError::InvalidAction(_)));
}

#[test]
fn waste_to_foundation_scores_ten() {
    let mut state = game(board_with(&[("h", "a,2")], "h:3", &[]));
    let result = state.move_to_foundation(PileRef::Waste).unwrap();
    assert_eq!(result.score_delta, 10);
    assert_eq!(state.current_score(), 10);
    assert_eq!(state.board().foundation(Suit::Hearts).pile().len(), 3);
    assert!(state.board().waste().is_empty());
}

#[test]
fn column_to_foundation_reveals_card_below() {
    let mut state = game(board_with(&[], "", &[(3, "-kr:2,h:a")]));
    let result = state.move_to_foundation(PileRef::Tableau(3)).unwrap();
    assert_eq!(result.revealed, Some(card(Suit::Clubs, Rank::Two)));
    let column = &state.board().tableaus()[3];
    assert!(column.top().unwrap().is_face_up());
}

#[test]
fn foundation_rejection_names_the_card() {
    let mut state = game(board_with(&[("p", "a")], "p:3", &[]));
    let err = assert_rejected(&mut state, |s| s.move_to_foundation(PileRef::Waste));
    match err {
        DomainError::IllegalMove(msg) => assert!(msg.contains("\u{2660}3"), "{msg}"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn foundation_from_empty_sources_is_invalid() {
    let mut state = game(board_with(&[], "", &[]));
    let err = assert_rejected(&mut state, |s| s.move_to_foundation(PileRef::Waste));
    assert!(matches!(err, DomainError::InvalidAction(_)));
    let err = assert_rejected(&mut state, |s| s.move_to_foundation(PileRef::Tableau(0)));
    assert!(matches!(err, DomainError::InvalidAction(ref m) if m.contains("column 1")));
    let err = assert_rejected(&mut state, |s| s.move_to_foundation(PileRef::Tableau(7)));
    assert!(matches!(err, DomainError::InvalidAction(_)));
}

#[test]
fn waste_to_tableau_scores_two() {
    let mut state = game(board_with(&[], "ka:d", &[(1, "p:k")]));
    let result = state.move_waste_to_tableau(1).unwrap();
    assert_eq!(result.score_delta, 2);
    assert_eq!(state.board().tableaus()[1].len(), 2);
    assert!(state.board().waste().is_empty());
}

#[test]
fn waste_to_tableau_rejects_wrong_color() {
    let mut state = game(board_with(&[], "h:d", &[(1, "ka:k")]));
    let err = assert_rejected(&mut state, |s| s.move_waste_to_tableau(1));
    assert!(matches!(err, DomainError::IllegalMove(ref m) if m.starts_with("column 2")));
}

#[test]
fn transfer_rejections() {
    let mut state = game(board_with(&[], "", &[(0, "h:8"), (1, "kr:10")]));
    let err = assert_rejected(&mut state, |s| s.transfer_tableau(0, 0));
    assert!(matches!(err, DomainError::InvalidAction(_)));
    let err = assert_rejected(&mut state, |s| s.transfer_tableau(0, 9));
    assert!(matches!(err, DomainError::InvalidAction(_)));
    let err = assert_rejected(&mut state, |s| s.transfer_tableau(4, 0));
    assert!(matches!(err, DomainError::InvalidAction(_)));
    let err = assert_rejected(&mut state, |s| s.transfer_tableau(0, 1));
    match err {
        DomainError::IllegalMove(msg) => {
            assert!(msg.contains("column 1") && msg.contains("column 2"), "{msg}")
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn transfer_moves_run_and_reports_reveal() {
    let mut state = game(board_with(
        &[],
        "",
        &[(0, "-h:2,p:9,h:8"), (1, "ka:10")],
    ));
    let result = state.transfer_tableau(0, 1).unwrap();
    assert_eq!(result.cards_moved, 2);
    assert_eq!(result.score_delta, 0);
    assert_eq!(result.revealed, Some(card(Suit::Hearts, Rank::Two)));
    assert_eq!(state.board().tableaus()[1].len(), 3);
    assert_eq!(state.turn(), 1);
}

#[test]
fn redeal_keeps_every_card_and_costs_hundred() {
    let mut state = game(board_with_score(&[("h", "a,2")], "p:5", &[(0, "kr:k")], 30));
    let result = state.redeal_all();
    assert_eq!(result.score_delta, -100);
    assert_eq!(state.current_score(), -70);
    assert_eq!(state.board().all_cards().count(), 52);
    assert_eq!(state.board().stock().len(), 24);
    assert!(state.board().waste().is_empty());
    assert!(state
        .board()
        .foundations()
        .iter()
        .all(|f| f.pile().is_empty()));
    for (i, t) in state.board().tableaus().iter().enumerate() {
        assert_eq!(t.len(), i + 1);
        assert_eq!(t.hidden_len(), i);
    }
}

#[test]
fn win_needs_every_foundation_complete() {
    assert!(game(won_board()).is_won());
    let ranks_short = "a,2,3,4,5,6,7,8,9,10,b,d";
    let ranks = "a,2,3,4,5,6,7,8,9,10,b,d,k";
    let almost = board_with(
        &[("h", ranks), ("ka", ranks), ("p", ranks), ("kr", ranks_short)],
        "",
        &[],
    );
    assert!(!game(almost).is_won());
}
