pub mod game_loop;

pub use game_loop::{FrameClock, FrameStats, GameLoop};
