pub mod date;
pub mod menu;

pub use date::*;
pub use menu::*;
