use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset, blank or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "cafeteria_menu=info";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn filter_from(spec: Option<&str>) -> EnvFilter {
    spec.filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
