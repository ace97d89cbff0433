#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod export;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
