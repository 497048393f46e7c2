pub mod depth;
pub mod render;
pub mod subdivision;
