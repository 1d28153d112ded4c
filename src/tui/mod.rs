pub mod app;
pub mod components;
pub mod input;
pub mod render;
pub mod theme;

pub use app::run;
