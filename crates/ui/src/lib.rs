mod app;
mod renderer;
mod theme;

pub use app::TrajViewApp;
