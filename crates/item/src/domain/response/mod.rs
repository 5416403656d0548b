pub mod item;
pub mod system;
