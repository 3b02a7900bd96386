//! Undo history: deep copies of the board taken before each action.

use std::collections::VecDeque;

use super::rules::HISTORY_CAPACITY;
use super::state::{Board, GameState};

/// An owned copy of a board, never mutated after capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    id: u64,
    board: Board,
}

impl Snapshot {
    /// Sequence number, increasing in capture order.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}

/// Bounded stack of snapshots; the oldest is evicted past capacity.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    entries: VecDeque<Snapshot>,
    capacity: usize,
    next_id: u64,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl UndoHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::new(),
            capacity,
            next_id: 0,
        }
    }

    /// Copy the current board under the next sequence id.
    pub fn capture(&mut self, state: &GameState) -> Snapshot {
        let id = self.next_id;
        self.next_id += 1;
        Snapshot {
            id,
            board: state.board().clone(),
        }
    }

    /// Push `snapshot` unless its board equals the most recent entry.
    /// Returns whether it was stored.
    pub fn commit(&mut self, snapshot: Snapshot) -> bool {
        if self
            .entries
            .back()
            .is_some_and(|last| last.board == snapshot.board)
        {
            return false;
        }
        self.entries.push_back(snapshot);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        true
    }

    /// Pop the most recent snapshot.
    pub fn undo(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl GameState {
    /// Put the board back to the state held by `snapshot`.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.replace_board(snapshot.into_board());
    }
}
