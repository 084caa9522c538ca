//! Library wrapper around the `jbean` CLI implementation.
//!
//! `cargo test -p jbean-cli --lib` typechecks the CLI without building the
//! integration-test binaries, so the binary crate root is compiled here as a
//! module.

#[allow(dead_code)]
#[path = "main.rs"]
mod main_bin;
