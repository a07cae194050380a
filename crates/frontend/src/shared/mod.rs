pub mod config;
pub mod icons;
pub mod theme;
