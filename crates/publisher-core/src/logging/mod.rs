use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
/// Output is JSON on stderr so stdout stays free for command output.
pub fn init_logging(quiet: bool) {
    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(log_directive(quiet).parse().expect("Invalid log directive")),
        )
        .try_init();
}

fn log_directive(quiet: bool) -> &'static str {
    if quiet {
        "publisher=error"
    } else {
        "publisher=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::Directive;

    #[test]
    fn test_log_directives_parse() {
        for quiet in [true, false] {
            let directive: Directive = log_directive(quiet).parse().unwrap();
            assert_eq!(directive.to_string(), log_directive(quiet));
        }
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(true);
        init_logging(false);
    }
}
