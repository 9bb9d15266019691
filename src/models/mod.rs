// Module exports for models

pub mod block;
pub mod grid;
pub mod item;
pub mod settings;
