//! # Observability & Tracing
//!
//! Subscriber setup shared by binaries and tests.
//!
//! Actors run in their own tasks, so their events carry no caller span. The actor loop emits structured events (`entity_type`, the record id, store `size`),
//! so the subscriber hides the module path (`with_target(false)`) and keeps the compact format.
//!
//! ```bash
//! # lifecycle and mutations
//! RUST_LOG=info cargo run
//!
//! # every request, with payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a sale reads like:
//!
//! ```text
//! INFO Actor started entity_type="Material" size=4
//! INFO Action ok entity_type="Material" id=sulfuric-a4
//! INFO Action ok entity_type="Material" id=ring-pink
//! INFO record_sale{product_name="A7收纳册" quantity=1 ..}: Sale recorded applied=2 skipped=0
//! ```

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Panics if one is already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Subscriber for tests: output goes through the test harness capture and repeated calls are
/// ignored.
pub fn setup_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_test_writer()
        .compact()
        .try_init();
}
