//! The classic game: a 30-space board of streets, companies and squares,
//! two or more players starting with 500 and a lap bonus of 100.

mod board;
mod game;

pub use board::{classic_config, classic_spaces, CLASSIC_BOARD_LEN, SQUARE_BONUS};
pub use game::ClassicMatch;
