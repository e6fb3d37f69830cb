use serde::Serialize;
use std::fmt;

use super::enemy::EnemyKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Drawing target the world paints into.
///
/// Sprite sheets are addressed by enemy kind; the surface owns the images.
/// `save`/`restore` bracket temporary state such as opacity, like the
/// canvas 2D context does.
pub trait DrawSurface {
    fn clear(&mut self, area: Rect);
    fn blit(&mut self, sheet: EnemyKind, source: Rect, dest: Rect);
    fn line(&mut self, from: Point, to: Point);
    fn save(&mut self);
    fn restore(&mut self);
    fn set_opacity(&mut self, alpha: f64);
}

/// Run `draw` with a temporary global opacity, restoring the previous state afterwards.
pub fn with_opacity<S, R>(surface: &mut S, alpha: f64, draw: impl FnOnce(&mut S) -> R) -> R
where
    S: DrawSurface + ?Sized,
{
    surface.save();
    surface.set_opacity(alpha);
    let result = draw(surface);
    surface.restore();
    result
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear(Rect),
    Blit { sheet: EnemyKind, source: Rect, dest: Rect, opacity: f64 },
    Line { from: Point, to: Point },
    Save,
    Restore,
    SetOpacity(f64),
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Clear(r) => write!(f, "clear {} {} {} {}", r.x, r.y, r.width, r.height),
            DrawCommand::Blit { sheet, source: s, dest: d, opacity } => write!(
                f,
                "blit {} [{} {} {} {}] -> [{} {} {} {}] alpha={}",
                sheet, s.x, s.y, s.width, s.height, d.x, d.y, d.width, d.height, opacity
            ),
            DrawCommand::Line { from, to } => {
                write!(f, "line {},{} -> {},{}", from.x, from.y, to.x, to.y)
            }
            DrawCommand::Save => write!(f, "save"),
            DrawCommand::Restore => write!(f, "restore"),
            DrawCommand::SetOpacity(alpha) => write!(f, "opacity {}", alpha),
        }
    }
}

/// Headless surface that records every call, tracking opacity the way a
/// canvas context stack would.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    opacity: f64,
    saved: Vec<f64>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { commands: Vec::new(), opacity: 1.0, saved: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Depth of unmatched `save` calls.
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// One command per line.
    pub fn transcript(&self) -> String {
        self.commands.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, area: Rect) {
        self.commands.push(DrawCommand::Clear(area));
    }

    fn blit(&mut self, sheet: EnemyKind, source: Rect, dest: Rect) {
        self.commands.push(DrawCommand::Blit { sheet, source, dest, opacity: self.opacity });
    }

    fn line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn save(&mut self) {
        self.saved.push(self.opacity);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(opacity) = self.saved.pop() {
            self.opacity = opacity;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn set_opacity(&mut self, alpha: f64) {
        self.opacity = alpha;
        self.commands.push(DrawCommand::SetOpacity(alpha));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_scope_restores_previous_value() {
        let mut surface = RecordingSurface::new();
        with_opacity(&mut surface, 0.7, |s| {
            s.blit(EnemyKind::Ghost, Rect::new(0.0, 0.0, 1.0, 1.0), Rect::new(0.0, 0.0, 1.0, 1.0));
        });
        assert_eq!(surface.opacity(), 1.0);
        assert_eq!(surface.save_depth(), 0);
        assert!(matches!(
            surface.commands()[2],
            DrawCommand::Blit { opacity, .. } if opacity == 0.7
        ));
    }
}
