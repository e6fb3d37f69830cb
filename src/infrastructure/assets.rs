use std::collections::HashMap;

use strum::VariantArray;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::domain::{
    config::SpriteCatalog,
    enemy::EnemyKind,
    errors::{GameError, GameResult},
    logging::LogComponent,
};
use crate::{log_debug, log_warn};

/// Browser images for every enemy sprite sheet.
///
/// A sheet that has not finished loading (or failed to) is reported as not
/// ready and simply isn't drawn.
#[derive(Default)]
pub struct SpriteAtlas {
    sheets: HashMap<EnemyKind, HtmlImageElement>,
}

impl SpriteAtlas {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create one image per kind and start loading it in the background.
    pub fn request(catalog: &SpriteCatalog) -> GameResult<Self> {
        let mut sheets = HashMap::new();
        for &kind in EnemyKind::VARIANTS {
            let path = &catalog.get(kind).path;
            let image = HtmlImageElement::new().map_err(|err| GameError::Asset {
                path: path.clone(),
                reason: format!("{:?}", err),
            })?;
            image.set_src(path);
            sheets.insert(kind, image);
        }
        Ok(Self { sheets })
    }

    /// Like [`SpriteAtlas::request`], but waits for every image to decode.
    /// Decode failures are logged and tolerated.
    pub async fn preload(catalog: &SpriteCatalog) -> GameResult<Self> {
        let atlas = Self::request(catalog)?;
        for &kind in EnemyKind::VARIANTS {
            let Some(image) = atlas.sheets.get(&kind) else {
                continue;
            };
            match JsFuture::from(image.decode()).await {
                Ok(_) => log_debug!(
                    LogComponent::Infrastructure("SpriteAtlas"),
                    "🖼️ {} sheet ready ({}x{})",
                    kind,
                    image.natural_width(),
                    image.natural_height()
                ),
                Err(err) => log_warn!(
                    LogComponent::Infrastructure("SpriteAtlas"),
                    "⚠️ {} sheet failed to load from {}: {:?}",
                    kind,
                    catalog.get(kind).path,
                    err
                ),
            }
        }
        Ok(atlas)
    }

    /// The image for `kind`, if it has decoded successfully.
    pub fn ready_image(&self, kind: EnemyKind) -> Option<&HtmlImageElement> {
        self.sheets
            .get(&kind)
            .filter(|image| image.complete() && image.natural_width() > 0)
    }
}
