pub mod effects;
pub mod renderer;

pub use renderer::ui;
