use crate::config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn for_env(env: &Environment) -> Self {
        if env.is_prod() {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "tfda_premarket=debug,tower_http=debug,info",
        Environment::Staging => "tfda_premarket=debug,tower_http=info,info",
        Environment::Prod => "tfda_premarket=info,tower_http=info,warn",
    }
}

pub fn init_logging(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    // Source locations only help while developing
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match LogFormat::for_env(env) {
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
        LogFormat::Pretty => registry.with(fmt_layer.pretty()).try_init(),
    };

    if let Err(e) = installed {
        // A global subscriber already exists (tests, embedding).
        tracing::debug!(error = %e, "Logging already initialized");
        return;
    }

    tracing::info!(format = ?LogFormat::for_env(env), "Logging initialized for {:?} environment", env);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prod_logs_as_json_with_quieter_defaults() {
        assert_eq!(LogFormat::for_env(&Environment::Prod), LogFormat::Json);
        assert_eq!(LogFormat::for_env(&Environment::Staging), LogFormat::Pretty);
        assert!(default_directives(&Environment::Prod).ends_with("warn"));
        assert!(default_directives(&Environment::Dev).starts_with("tfda_premarket=debug"));
    }
}
