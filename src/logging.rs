// =============================================================================
// LOGGING — Initialisation de `tracing`
// =============================================================================
//
// La bibliothèque émet des événements `tracing` (debug! dans les folds,
// info! via le TracingSink). Le binaire installe UN abonné au démarrage.
//
// Priorité : RUST_LOG si défini, sinon la section [logging] de la config.
//
//   RUST_LOG=debug fpidioms folds
//   RUST_LOG=fpidioms::trace=info fpidioms calculate 5 --sink tracing
//
// Les logs partent sur stderr : stdout reste réservé aux résultats et aux
// traces du StdoutSink.
//
// =============================================================================

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Installe l'abonné global. Seul le premier appel a un effet.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(config.filter_directive())
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .with_filter(filter);

        // Un abonné global déjà installé (tests, appelant) n'est pas une erreur
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}

/// Initialise avec la configuration par défaut (niveau "warn").
pub fn init() {
    init_with_config(&LoggingConfig::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_config(&LoggingConfig {
            default: "trace".into(),
            ..LoggingConfig::default()
        });
        tracing::debug!("logging initialised twice without panicking");
    }

    #[test]
    fn test_default_filter_keeps_tracing_sink_lines() {
        use crate::core::trace::tests::SharedBuf;
        use crate::core::trace::{TraceSink, TracingSink};

        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_env_filter(EnvFilter::new(LoggingConfig::default().filter_directive()))
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut sink = TracingSink;
            sink.emit("input is 5");
            sink.emit("result is 6");
            tracing::info!(target: "fpidioms::core::sequence", "filtered out at warn");
        });

        let out = buf.contents();
        assert!(out.contains("input is 5"));
        assert!(out.contains("result is 6"));
        assert!(!out.contains("filtered out at warn"));
    }
}
