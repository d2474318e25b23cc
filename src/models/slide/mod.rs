pub mod types;
pub mod validate;
pub mod blocks;

pub use types::*;
pub use validate::*;
