pub mod assets;
pub mod rendering;
pub mod services;

pub use assets::SpriteAtlas;
pub use rendering::{AnimationLoop, CanvasSurface};
pub use services::{BrowserRandom, BrowserTimeProvider, ConsoleLogger};
