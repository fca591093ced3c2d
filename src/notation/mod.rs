//! Text formats exchanged with the surrounding application
//!
//! - [`position`]: the compact 83-digit position encoding
//! - [`move_list`]: per-ply cell digits replayed from a base position

pub mod move_list;
pub mod position;

pub use move_list::{encode_move_list, parse_move_list, replay, replay_from, Replay};
pub use position::{decode, encode, INITIAL_POSITION, POSITION_LEN};
