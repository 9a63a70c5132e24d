// Copyright 2024 Irreducible Inc.

use std::{env, sync::OnceLock};

/// When `RAYON_NUM_THREADS` is `1`, builds the global pool with `use_current_thread` so that
/// batch hashing runs on the calling thread, which keeps traces and profiles readable.
///
/// Rayon only allows the global pool to be built once, so this should be called at the start
/// of `main`. The result is returned by reference because `ThreadPoolBuildError` is not
/// `Clone`.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| {
		// `rayon::current_num_threads` would initialize the default global pool.
		match env::var("RAYON_NUM_THREADS") {
			Ok(v) if v == "1" => rayon::ThreadPoolBuilder::new()
				.num_threads(1)
				.use_current_thread()
				.build_global(),
			_ => Ok(()),
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_adjust_is_idempotent() {
		let first = adjust_thread_pool();
		let second = adjust_thread_pool();
		assert!(std::ptr::eq(first, second));
	}

	#[test]
	fn test_build_error_propagates_with_context() -> anyhow::Result<()> {
		use anyhow::Context;

		adjust_thread_pool()
			.as_ref()
			.context("failed to init thread pool")?;
		Ok(())
	}
}
