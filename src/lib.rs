//! Lane-dodging driving game.
//!
//! The library holds the whole simulation: pure update functions over an
//! immutable `GameState`, driven by abstract input flags and an injected
//! random source.  The binary target adds the terminal front-end.

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod explosion;
pub mod random;
