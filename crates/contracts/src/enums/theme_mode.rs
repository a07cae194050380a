use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Режим темы, выбранный пользователем.
///
/// `System` defers to the host's ambient light/dark preference; see [`ThemeMode::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

/// Конкретный режим отрисовки после разрешения `system`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveMode {
    Light,
    Dark,
}

/// A string that is not one of `light`, `dark`, `system`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme mode {0:?}, expected one of \"light\", \"dark\", \"system\"")]
pub struct InvalidModeError(pub String);

impl ThemeMode {
    /// Получить код режима (значение в localStorage)
    pub fn code(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// Получить все режимы в порядке переключения
    pub fn all() -> [ThemeMode; 3] {
        [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]
    }

    /// Strict parse: only the exact lowercase literals are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }

    /// Next mode in the fixed cycle light → dark → system → light.
    pub fn next(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, ThemeMode::System)
    }

    /// Resolves `System` against the ambient preference; explicit modes pass through.
    pub fn resolve(&self, prefers_dark: bool) -> EffectiveMode {
        match self {
            ThemeMode::Light => EffectiveMode::Light,
            ThemeMode::Dark => EffectiveMode::Dark,
            ThemeMode::System if prefers_dark => EffectiveMode::Dark,
            ThemeMode::System => EffectiveMode::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeMode::from_code(s).ok_or_else(|| InvalidModeError(s.to_string()))
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl EffectiveMode {
    /// CSS class and `data-theme` value.
    pub fn code(&self) -> &'static str {
        match self {
            EffectiveMode::Light => "light",
            EffectiveMode::Dark => "dark",
        }
    }
}

impl fmt::Display for EffectiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
