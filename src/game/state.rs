//! Game state types.

use serde::{Deserialize, Serialize};

/// Observable game state.
///
/// Dealing, the dealer's turn, and settlement run synchronously inside the
/// call that triggers them, so the states visible between calls are the
/// three below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No round has been dealt yet.
    Idle,
    /// Cards are dealt and the player may hit or stand.
    PlayerTurn,
    /// The round is settled; a new round can be started.
    RoundOver,
}
