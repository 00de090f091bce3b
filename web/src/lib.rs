pub mod app;
pub mod assets;
pub mod components;
