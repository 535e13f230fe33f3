//! Flood-fill game state machine
//!
//! The game copies a read-only board into an owned dense grid and mutates
//! that state as the player floods colours from the origin. The win and
//! loss rules are deliberately small: the grid must become one colour
//! before the move limit runs out.

use std::fmt;
use std::rc::Rc;

use hashbrown::HashSet;

use gridfill_core::{Coord, DenseGrid, Grid, Result};

/// Progress of a [`FloodGame`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves remain and the grid is not yet uniform
    InProgress,
    /// The grid became uniform within the move limit
    Won,
    /// The move limit ran out first
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        write!(f, "{msg}")
    }
}

/// Observer notified after every state-changing move
pub trait GameListener<T> {
    /// Called with the post-move state and the resulting status
    fn moved(&self, state: &DenseGrid<T>, status: GameStatus);
}

/// Flood-fill game over a board of colours
///
/// Listeners are held in registration order and keyed by `Rc` identity:
/// registering the same listener twice keeps a single entry, so one
/// listener never receives double notifications for a move.
pub struct FloodGame<T> {
    state: DenseGrid<T>,
    move_limit: usize,
    moves_made: usize,
    status: GameStatus,
    listeners: Vec<Rc<dyn GameListener<T>>>,
}

impl<T: Clone + PartialEq> FloodGame<T> {
    /// Start a game from a read-only board
    ///
    /// The board is copied into an internally owned state grid, so later
    /// changes to `board` cannot reach a running game. Fails if `board`
    /// has unpopulated slots.
    pub fn new<G>(board: &G, move_limit: usize) -> Result<Self>
    where
        G: Grid<T>,
    {
        let state = DenseGrid::copy_from(board)?;
        let status = Self::evaluate(&state, 0, move_limit);
        Ok(Self {
            state,
            move_limit,
            moves_made: 0,
            status,
            listeners: Vec::new(),
        })
    }

    /// Flood the origin region with `colour` and advance the game
    ///
    /// All cells 4-connected to the origin through its current colour take
    /// the new colour. Choosing the colour the origin already holds
    /// changes nothing and costs no move, and a finished game ignores
    /// further floods.
    pub fn flood(&mut self, colour: T) -> GameStatus {
        if self.status != GameStatus::InProgress {
            return self.status;
        }
        let old = self.state.as_slice()[0].clone();
        if old == colour {
            return self.status;
        }

        let width = self.state.width();
        let height = self.state.height();
        let mut pending = vec![Coord::new(0, 0)];
        while let Some(c) = pending.pop() {
            if self.state[c] != old {
                continue;
            }
            self.state[c] = colour.clone();
            if c.x + 1 < width {
                pending.push(Coord::new(c.x + 1, c.y));
            }
            if c.x > 0 {
                pending.push(Coord::new(c.x - 1, c.y));
            }
            if c.y + 1 < height {
                pending.push(Coord::new(c.x, c.y + 1));
            }
            if c.y > 0 {
                pending.push(Coord::new(c.x, c.y - 1));
            }
        }

        self.moves_made += 1;
        self.status = Self::evaluate(&self.state, self.moves_made, self.move_limit);
        for listener in &self.listeners {
            listener.moved(&self.state, self.status);
        }
        self.status
    }

    fn evaluate(state: &DenseGrid<T>, moves_made: usize, move_limit: usize) -> GameStatus {
        let first = &state.as_slice()[0];
        if state.iter().all(|cell| cell == first) {
            GameStatus::Won
        } else if moves_made >= move_limit {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Number of distinct colours still on the grid
    pub fn remaining_colours(&self) -> usize
    where
        T: core::hash::Hash + Eq,
    {
        self.state.iter().collect::<HashSet<_>>().len()
    }
}

impl<T> FloodGame<T> {
    /// Current game state
    pub fn state(&self) -> &DenseGrid<T> {
        &self.state
    }

    /// Independent copy of the current state, for comparison
    pub fn snapshot(&self) -> DenseGrid<T>
    where
        T: Clone,
    {
        self.state.clone()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    pub fn move_limit(&self) -> usize {
        self.move_limit
    }

    pub fn moves_left(&self) -> usize {
        self.move_limit.saturating_sub(self.moves_made)
    }

    /// Register a listener, keyed by identity
    ///
    /// Returns whether the listener was newly added; re-registration is a
    /// no-op.
    pub fn add_listener(&mut self, listener: Rc<dyn GameListener<T>>) -> bool {
        if self.listeners.iter().any(|l| Rc::ptr_eq(l, &listener)) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Remove a previously registered listener
    ///
    /// Returns whether it was present.
    pub fn remove_listener(&mut self, listener: &Rc<dyn GameListener<T>>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !Rc::ptr_eq(l, listener));
        self.listeners.len() != before
    }
}
