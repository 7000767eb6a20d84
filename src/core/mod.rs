pub mod actions;
pub mod adaptive;
pub mod data;
pub mod fractals;
