//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `personweb_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("personweb_core ping={}", personweb_core::ping());
    println!("personweb_core version={}", personweb_core::core_version());
}
