pub mod context;
pub mod echo;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
