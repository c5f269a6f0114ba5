//! Cassette CLI Library
//!
//! Command-line front end over the Cassette core: upload files into the
//! Durable Store, list the playlist, and drive the playback controller.
//!
//! This library exposes the components for testing purposes.

pub mod app;
pub mod config;
pub mod element;
pub mod error;

pub use app::App;
pub use config::CliConfig;
pub use element::HeadlessElement;
pub use error::{CliError, Result};
