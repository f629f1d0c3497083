//! A crate contains command line tooling around the `thop-core` checker: batch solution checking,
//! solution rendering, unconstrained instance generation and experiment running.
//!
//! The binary wires these extensions to command line arguments, see `thop-cli --help`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod extensions;
