use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    enemy::EnemyKind,
    errors::{GameError, GameResult},
    logging::LogComponent,
    surface::{DrawSurface, Point, Rect},
};
use crate::infrastructure::assets::SpriteAtlas;
use crate::log_trace;

/// Canvas 2D implementation of [`DrawSurface`]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    atlas: SpriteAtlas,
}

impl CanvasSurface {
    /// Look up `canvas_id`, size it and grab its 2D context.
    pub fn from_canvas_id(
        canvas_id: &str,
        width: u32,
        height: u32,
        atlas: SpriteAtlas,
    ) -> GameResult<Self> {
        let canvas = gloo::utils::document()
            .get_element_by_id(canvas_id)
            .ok_or_else(|| GameError::Browser(format!("canvas #{} not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GameError::Browser(format!("#{} is not a canvas", canvas_id)))?;
        Self::from_canvas(canvas, width, height, atlas)
    }

    pub fn from_canvas(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
        atlas: SpriteAtlas,
    ) -> GameResult<Self> {
        canvas.set_width(width);
        canvas.set_height(height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| GameError::Browser("Failed to get 2D context".to_string()))?
            .ok_or_else(|| GameError::Browser("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::Browser("Failed to cast to 2D context".to_string()))?;

        Ok(Self { canvas, context, atlas })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, area: Rect) {
        self.context.clear_rect(area.x, area.y, area.width, area.height);
    }

    fn blit(&mut self, sheet: EnemyKind, source: Rect, dest: Rect) {
        let Some(image) = self.atlas.ready_image(sheet) else {
            return;
        };
        let drawn = self
            .context
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                source.x,
                source.y,
                source.width,
                source.height,
                dest.x,
                dest.y,
                dest.width,
                dest.height,
            );
        if let Err(err) = drawn {
            log_trace!(
                LogComponent::Infrastructure("CanvasSurface"),
                "drawImage({}) failed: {:?}",
                sheet,
                err
            );
        }
    }

    fn line(&mut self, from: Point, to: Point) {
        self.context.begin_path();
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.context.stroke();
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn set_opacity(&mut self, alpha: f64) {
        self.context.set_global_alpha(alpha);
    }
}
