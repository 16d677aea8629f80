use tracing_subscriber::filter::EnvFilter;

use crate::config;

static LIB_TARGET: &str = "alonzo_lib";

pub fn set_up(verbosity: u8) {
    let formatter = tracing_subscriber::fmt::format::debug_fn(|writer, _field, value| {
        write!(writer, "{:?}", value)
    });

    let level = max_level(verbosity);
    let mut filter = EnvFilter::try_new("warn").unwrap();
    for target in [config::BIN_NAME, LIB_TARGET] {
        filter = filter.add_directive(format!("{}={}", target, level).parse().unwrap());
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(true)
        .fmt_fields(formatter)
        .init();
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
