mod app;
pub mod drag;
pub mod resize;
pub mod scroll;
pub mod views;

pub use app::CadenceApp;
