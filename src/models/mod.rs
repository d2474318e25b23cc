pub mod deck;
pub mod seed;
pub mod slide;
