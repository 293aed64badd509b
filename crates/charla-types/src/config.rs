//! Chat configuration for charla.
//!
//! `ChatConfig` carries the externally supplied settings for one session:
//! model, sampling temperature, window size, and system instruction.
//! Held for the session, never persisted.

use serde::{Deserialize, Serialize};

/// The one model currently offered for chat.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.3;

/// Temperature bounds accepted by the provider surface.
pub const TEMPERATURE_RANGE: (f64, f64) = (0.0, 1.5);

/// Default number of trailing turns sent per request.
pub const DEFAULT_WINDOW: usize = 24;

/// Window size bounds.
pub const WINDOW_RANGE: (usize, usize) = (4, 64);

/// Default system instruction (the assistant answers in Spanish).
pub const DEFAULT_SYSTEM_PROMPT: &str = "Eres un asistente útil y conciso. \
Responde en español por defecto. Si el usuario pide código, respóndelo en \
bloques bien comentados.";

/// Per-session chat settings.
///
/// Out-of-range values are clamped rather than rejected: the settings come
/// from interactive controls, and snapping to the nearest bound matches how
/// a bounded slider or numeric input behaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Model identifier sent to the provider.
    pub model: String,
    /// Sampling temperature, clamped to [0.0, 1.5].
    pub temperature: f64,
    /// Trailing-turn window size, clamped to [4, 64].
    pub window: usize,
    /// System instruction used to seed (and re-seed) the memory.
    pub system_prompt: String,
}

impl ChatConfig {
    /// Build a config, clamping `temperature` and `window` into range.
    pub fn new(
        model: impl Into<String>,
        temperature: f64,
        window: usize,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            temperature: temperature.clamp(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1),
            window: window.clamp(WINDOW_RANGE.0, WINDOW_RANGE.1),
            system_prompt: system_prompt.into(),
        }
    }

    /// Replace the system instruction. Takes effect on the next memory
    /// reset, not retroactively.
    pub fn set_system_prompt(&mut self, prompt: impl Into<String>) {
        self.system_prompt = prompt.into();
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            window: DEFAULT_WINDOW,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChatConfig::default();
        assert_eq!(config.model, "llama3-8b-8192");
        assert!((config.temperature - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.window, 24);
        assert!(config.system_prompt.contains("español"));
    }

    #[test]
    fn test_temperature_clamped() {
        let config = ChatConfig::new(DEFAULT_MODEL, 2.7, 24, "p");
        assert!((config.temperature - 1.5).abs() < f64::EPSILON);

        let config = ChatConfig::new(DEFAULT_MODEL, -0.4, 24, "p");
        assert!(config.temperature.abs() < f64::EPSILON);
    }

    #[test]
    fn test_window_clamped() {
        let config = ChatConfig::new(DEFAULT_MODEL, 0.3, 2, "p");
        assert_eq!(config.window, 4);

        let config = ChatConfig::new(DEFAULT_MODEL, 0.3, 1000, "p");
        assert_eq!(config.window, 64);
    }

    #[test]
    fn test_in_range_values_untouched() {
        let config = ChatConfig::new(DEFAULT_MODEL, 0.9, 30, "p");
        assert!((config.temperature - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.window, 30);
    }

    #[test]
    fn test_set_system_prompt() {
        let mut config = ChatConfig::default();
        config.set_system_prompt("Sé breve.");
        assert_eq!(config.system_prompt, "Sé breve.");
    }
}
