// =============================================================================
// CONFIG — Configuration en couches
// =============================================================================
//
// Ordre de priorité (le dernier gagne) :
//   1. valeurs par défaut (Settings::default)
//   2. fichier TOML (fpidioms.toml par défaut)
//   3. variables d'environnement FPIDIOMS_*, avec "__" pour l'imbrication
//      ex. FPIDIOMS_DEMO__N=20 → demo.n = 20
//
// Le fichier est optionnel : sans lui, on tourne sur les valeurs par défaut.
//
// =============================================================================

use std::collections::BTreeMap;
use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::core::trace::SinkKind;
use crate::error::Result;

/// Nom du fichier de configuration cherché dans le répertoire courant.
pub const DEFAULT_CONFIG_FILE: &str = "fpidioms.toml";

/// Préfixe des variables d'environnement.
pub const ENV_PREFIX: &str = "FPIDIOMS_";

/// Configuration complète.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
}

/// Niveaux de log : un niveau par défaut et des surcharges par module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Niveau global (error, warn, info, debug, trace)
    pub default: String,
    /// module → niveau, ex. `fpidioms::core = "debug"`
    pub modules: BTreeMap<String, String>,
}

/// Cible des événements émis par le `TracingSink`.
pub const TRACE_TARGET: &str = "fpidioms::trace";

impl Default for LoggingConfig {
    fn default() -> Self {
        // Sans cette entrée, "warn" masquerait les traces du TracingSink
        Self {
            default: "warn".to_string(),
            modules: BTreeMap::from([(TRACE_TARGET.to_string(), "info".to_string())]),
        }
    }
}

impl LoggingConfig {
    /// La directive `EnvFilter` équivalente, ex. `warn,fpidioms=debug`.
    pub fn filter_directive(&self) -> String {
        let mut directive = self.default.clone();
        for (module, level) in &self.modules {
            directive.push_str(&format!(",{}={}", module, level));
        }
        directive
    }
}

/// Paramètres du programme de démonstration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Borne n des folds sur [1, n]
    pub n: u32,
    /// Entrée donnée au calculateur
    pub input: i32,
    /// Où le décorateur écrit ses traces
    pub sink: SinkKind,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            n: 10,
            input: 5,
            sink: SinkKind::Stdout,
        }
    }
}

impl Settings {
    /// Charge depuis `fpidioms.toml` (s'il existe) et l'environnement.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Charge depuis un fichier donné (s'il existe) et l'environnement.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let settings: Settings = Self::figment(path.as_ref())
            .extract()
            .map_err(Box::new)?;
        Ok(settings)
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }
}
