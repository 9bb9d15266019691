// Service module exports

pub mod block_style;
pub mod grid_snap;
pub mod layout;
pub mod sample;
pub mod settings;
