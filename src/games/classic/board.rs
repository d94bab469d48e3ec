//! The stock 30-space board.
//!
//! Slot 0 is the start. From there the board cycles through three kinds
//! of space by slot number `i`:
//! - `i % 3 == 0`: street, price `100 + 10i`, rent `10 + i`
//! - `i % 3 == 1`: company, price `150 + 5i`, base fee `5 + i`, fixed fee
//!   on even slots and variable fee on odd ones
//! - `i % 3 == 2`: a square paying a bonus of 50 on even slots, a detour
//!   moving one space ahead on odd ones

use crate::core::{EffectDescriptor, GameConfig, SpaceDescriptor};

/// Number of spaces on the classic board.
pub const CLASSIC_BOARD_LEN: usize = 30;

/// Bonus paid by the classic board's squares.
pub const SQUARE_BONUS: i64 = 50;

/// Descriptors for the classic board, start first.
pub fn classic_spaces() -> Vec<SpaceDescriptor> {
    (0..CLASSIC_BOARD_LEN as i64)
        .map(|i| match (i, i % 3) {
            (0, _) => SpaceDescriptor::special("Start", None),
            (_, 0) => SpaceDescriptor::property(format!("Street {i}"), 100 + i * 10, 10 + i),
            (_, 1) => {
                let strategy = if i % 2 == 0 { "fixed" } else { "variable" };
                SpaceDescriptor::company(format!("Company {i}"), 150 + i * 5, 5 + i, strategy)
            }
            _ if i % 2 == 0 => SpaceDescriptor::special(
                format!("Square {i}"),
                Some(EffectDescriptor::bonus(SQUARE_BONUS)),
            ),
            _ => SpaceDescriptor::special(format!("Detour {i}"), Some(EffectDescriptor::advance(1))),
        })
        .collect()
}

/// A classic game for the named players with default money rules.
pub fn classic_config<I, S>(players: I) -> GameConfig
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    GameConfig::new(players.into_iter().map(Into::into).collect(), classic_spaces())
}
