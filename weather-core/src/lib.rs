//! Core library for the `tui-demos` terminal UI collection.
//!
//! This crate defines:
//! - The wttr.in client and its error taxonomy
//! - The wire envelope and its projection into a display-ready record
//! - Configuration handling
//!
//! It knows nothing about terminals; `tui-demos` renders what it returns.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod model;

pub use client::{DEFAULT_BASE_URL, DEFAULT_LOCATION, WeatherSource, WttrClient};
pub use config::{Config, STARTUP_LOCATION, ThemeVariant};
pub use envelope::WeatherEnvelope;
pub use error::{ErrorKind, WeatherError};
pub use model::{ConditionIcon, WeatherRecord};
