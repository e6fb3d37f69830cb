pub mod config;
pub mod enemy;
pub mod errors;
pub mod logging;
pub mod random;
pub mod surface;
pub mod world;

pub use config::{GameConfig, SpriteCatalog, SpriteSheet};
pub use enemy::{Behavior, Bounds, Enemy, EnemyKind};
pub use errors::{GameError, GameResult};
pub use random::{RandomSource, ScriptedRandom};
pub use surface::{DrawCommand, DrawSurface, Point, Rect, RecordingSurface};
pub use world::World;
