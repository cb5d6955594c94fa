pub mod axis;
pub mod plot;

pub use plot::{PlotLayout, render_plot};
