pub mod theme_mode;

pub use theme_mode::{EffectiveMode, InvalidModeError, ThemeMode};
