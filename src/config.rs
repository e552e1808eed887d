// ============================================================================
// CONFIGURACIÓN - Logging de la librería
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    pub enable_logging: bool,
    pub log_level: String,
    pub log_module_prefix: Option<String>,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            log_level: "info".to_string(),
            log_module_prefix: None,
        }
    }
}

impl DomConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            enable_logging: option_env!("DOM_UTILS_ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("DOM_UTILS_LOG_LEVEL")
                .unwrap_or("info").to_string(),
            log_module_prefix: option_env!("DOM_UTILS_LOG_MODULE_PREFIX")
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
        }
    }

    /// Parsear configuración JSON (los campos ausentes toman el valor por defecto)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log; cae a `Info` si el valor no es válido
    pub fn level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: DomConfig = DomConfig::from_env();
}
