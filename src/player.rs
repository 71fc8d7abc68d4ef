//! Player identity: a name and an assigned mark.

use crate::board::Mark;
use serde::{Deserialize, Serialize};

/// A named participant in the game.
///
/// Immutable after creation; exactly two exist per game, holding distinct
/// marks. The player with [`Mark::X`] moves first.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
)]
pub struct Player {
    /// Display name.
    name: String,
    /// The mark this player places.
    mark: Mark,
}
