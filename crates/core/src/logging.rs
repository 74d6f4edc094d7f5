//! Système de logging pour la génération de séquences

use tracing_subscriber::{fmt, EnvFilter};

/// Niveau de log par défaut selon la verbosité demandée
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialise le système de logging
///
/// `RUST_LOG` reste prioritaire ; sinon le niveau découle de `verbosity`.
/// Les logs partent sur stderr pour ne pas se mêler aux résultats.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let result = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    // Un subscriber global déjà installé (tests, second appel) est conservé
    if let Err(e) = result {
        tracing::debug!("Logging déjà initialisé: {}", e);
    }
}

/// Macro pour le logging des opérations
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::span!(tracing::Level::INFO, $name);
        let _enter = span.enter();
        tracing::debug!("Début de l'opération: {}", $name);
        let result = $block;
        tracing::debug!("Fin de l'opération: {}", $name);
        result
    }};
}
