// Copyright 2023 Ulvetanna Inc.

use tracing_subscriber::{
	filter::EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::env::boolean_env_flag_set;

/// Installs a formatting subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Setting `SOTERG_LOG_SPANS` also logs every closed span with its timing, which shows the
/// cost of each pipeline stage when combined with `RUST_LOG=debug`. Does nothing if a global
/// subscriber is already installed.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let span_events = if boolean_env_flag_set("SOTERG_LOG_SPANS") {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_span_events(span_events)
				.with_writer(std::io::stderr),
		)
		.try_init()
		.ok();
}
