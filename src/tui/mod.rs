pub mod app;
pub mod input;
pub mod render;
pub mod sheet;
pub mod slider;
pub mod theme;

pub use app::run;
