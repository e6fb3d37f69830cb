use serde::{Deserialize, Serialize};
use strum::VariantArray;

use super::enemy::EnemyKind;
use super::errors::{GameError, GameResult};

/// Sprite sheet layout for one enemy kind. Frames are laid out horizontally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub path: String,
    pub frame_width: f64,
    pub frame_height: f64,
    /// Scale from sheet pixels to world units
    pub scale: f64,
    /// Index of the last animation frame
    pub max_frame: usize,
}

impl SpriteSheet {
    pub fn new(path: &str, frame_width: f64, frame_height: f64) -> Self {
        Self { path: path.to_string(), frame_width, frame_height, scale: 0.5, max_frame: 5 }
    }

    pub fn world_width(&self) -> f64 {
        self.frame_width * self.scale
    }

    pub fn world_height(&self) -> f64 {
        self.frame_height * self.scale
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteCatalog {
    pub worm: SpriteSheet,
    pub ghost: SpriteSheet,
    pub spider: SpriteSheet,
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        Self {
            // the worm sheet is 1374px wide with 6 frames
            worm: SpriteSheet::new("assets/enemy_worm.png", 1374.0 / 6.0, 171.0),
            ghost: SpriteSheet::new("assets/enemy_ghost.png", 261.0, 209.0),
            spider: SpriteSheet::new("assets/enemy_spider.png", 310.0, 175.0),
        }
    }
}

impl SpriteCatalog {
    pub fn get(&self, kind: EnemyKind) -> &SpriteSheet {
        match kind {
            EnemyKind::Worm => &self.worm,
            EnemyKind::Ghost => &self.ghost,
            EnemyKind::Spider => &self.spider,
        }
    }
}

/// Runtime configuration, loadable from JSON. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_id: String,
    pub width: f64,
    pub height: f64,
    pub spawn_interval_ms: f64,
    pub frame_interval_ms: f64,
    pub sprites: SpriteCatalog,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_id: "canvas1".to_string(),
            width: 500.0,
            height: 700.0,
            spawn_interval_ms: 500.0,
            frame_interval_ms: 100.0,
            sprites: SpriteCatalog::default(),
        }
    }
}

impl GameConfig {
    pub fn with_size(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.canvas_id.trim().is_empty() {
            return Err(GameError::Validation("canvas_id must not be empty".to_string()));
        }
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("frame_interval_ms", self.frame_interval_ms),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::Validation(format!("{name} must be positive, got {value}")));
            }
        }
        for &kind in EnemyKind::VARIANTS {
            let sheet = self.sprites.get(kind);
            if sheet.path.is_empty() {
                return Err(GameError::Validation(format!("{kind} sprite path is empty")));
            }
            if !(sheet.frame_width > 0.0 && sheet.frame_height > 0.0 && sheet.scale > 0.0) {
                return Err(GameError::Validation(format!(
                    "{kind} sprite needs positive frame size and scale"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_canvas() {
        let config = GameConfig::default();
        assert_eq!(config.width, 500.0);
        assert_eq!(config.height, 700.0);
        assert_eq!(config.sprites.worm.frame_width, 229.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{"width": 800, "sprites": {"ghost": {
            "path": "g.png", "frame_width": 100, "frame_height": 50, "scale": 1.0, "max_frame": 3
        }}}"#)
        .unwrap();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 700.0);
        assert_eq!(config.sprites.ghost.max_frame, 3);
        assert_eq!(config.sprites.spider.path, "assets/enemy_spider.png");
    }

    #[test]
    fn rejects_bad_values() {
        let err = GameConfig::from_json(r#"{"spawn_interval_ms": 0}"#).unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));

        let err = GameConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }
}
