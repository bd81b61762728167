use chrono::SecondsFormat;
use lazy_regex::regex;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

pub(crate) fn get_now() -> String {
    chrono::offset::Local::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Turns an airline name into a single path component.
pub fn sanitize_file_name(name: &str) -> String {
    regex!(r"[/\\]").replace_all(name, "_").into_owned()
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();
}
