pub mod animation_loop;
pub mod canvas_renderer;

pub use animation_loop::AnimationLoop;
pub use canvas_renderer::CanvasSurface;
