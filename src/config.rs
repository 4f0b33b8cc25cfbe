// src/config.rs
//
// Tiempos y ajustes de la aplicación. En escritorio se pueden sobrescribir con un YAML.

use crate::error::Error;
use crate::notifications::ToastTimings;
use crate::runner::PASS_PROBABILITY;
use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
pub const CONFIG_ENV: &str = "INTERVIEW_MASTER_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub loading_secs: f64,
    pub search_debounce_secs: f64,
    pub run_delay_secs: f64,
    pub achievement_delay_secs: f64,
    pub toasts: ToastTimings,
    pub preview_chars: usize,
    pub pass_probability: f64,
    pub particles: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            loading_secs: 2.0,
            search_debounce_secs: 0.5,
            run_delay_secs: 1.5,
            achievement_delay_secs: 2.0,
            toasts: ToastTimings::default(),
            preview_chars: 100,
            pass_probability: PASS_PROBABILITY,
            particles: true,
        }
    }
}

impl AppConfig {
    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        let config: AppConfig = serde_yaml::from_str(text).map_err(|source| Error::Parse {
            what: "configuration",
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Configuración efectiva: el fichero de `INTERVIEW_MASTER_CONFIG` si existe,
    /// si no los valores por defecto
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, Error> {
        match std::env::var(CONFIG_ENV).ok().filter(|s| !s.trim().is_empty()) {
            Some(path) => {
                let path = std::path::PathBuf::from(path);
                let text = std::fs::read_to_string(&path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                log::info!("configuration loaded from {}", path.display());
                Self::from_yaml(&text)
            }
            None => Ok(Self::default()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, Error> {
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), Error> {
        let durations = [
            ("loading_secs", self.loading_secs),
            ("search_debounce_secs", self.search_debounce_secs),
            ("run_delay_secs", self.run_delay_secs),
            ("achievement_delay_secs", self.achievement_delay_secs),
            ("toasts.appear_delay_secs", self.toasts.appear_delay_secs),
            ("toasts.visible_secs", self.toasts.visible_secs),
            ("toasts.fade_secs", self.toasts.fade_secs),
        ];
        if let Some((name, value)) = durations.iter().find(|(_, v)| !(*v >= 0.0)) {
            return Err(Error::InvalidConfig(format!("{name} must be >= 0, got {value}")));
        }
        if !(0.0..=1.0).contains(&self.pass_probability) {
            return Err(Error::InvalidConfig(format!(
                "pass_probability must be within 0..=1, got {}",
                self.pass_probability
            )));
        }
        if self.preview_chars == 0 {
            return Err(Error::InvalidConfig("preview_chars must be positive".into()));
        }
        Ok(())
    }
}
