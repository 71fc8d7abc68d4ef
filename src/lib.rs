//! Core game logic for console tic-tac-toe.
//!
//! Two named players alternate placing marks on a 3x3 board via console
//! text I/O. The crate splits into board storage ([`Board`]), pure rules
//! ([`rules`]), the move-application engine ([`Game`]), and the
//! [`TurnCoordinator`] that drives the prompt/validate/apply/render loop
//! over the [`MoveInput`] and [`GameDisplay`] collaborators.
//!
//! # Example
//!
//! ```
//! use tictactoe_console::{Game, Mark, Player, Position};
//!
//! let mut game = Game::new([
//!     Player::new("Ada".to_string(), Mark::X),
//!     Player::new("Grace".to_string(), Mark::O),
//! ]);
//! game.make_move(Position::Center)?;
//! assert_eq!(*game.state().current_player().mark(), Mark::O);
//! # Ok::<(), tictactoe_console::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod action;
pub mod board;
pub mod cli;
pub mod coordinator;
pub mod game;
pub mod interface;
pub mod player;
pub mod position;
pub mod rules;

pub use action::{Move, MoveError};
pub use board::{Board, BoardError, Cell, Mark};
pub use coordinator::TurnCoordinator;
pub use game::{Game, GameState, GameStatus};
pub use interface::{ConsoleDisplay, ConsoleInput, GameDisplay, MoveInput};
pub use player::Player;
pub use position::Position;
pub use rules::{Verdict, outcome};
