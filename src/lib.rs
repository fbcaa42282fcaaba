//! Direct-mapped cache in front of a flat RAM, driven by a small command language.
//!
//! `ram` and `cache` hold all of the state and stay silent; `session` replays
//! commands against them and `display` renders what happened.

pub mod cache;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod ram;
pub mod session;

pub use cache::{Access, AccessKind, Cache, CacheLine};
pub use command::Command;
pub use config::Geometry;
pub use error::{ConfigError, MemError, ParseError, SessionError};
pub use ram::{BackingStore, Ram};
pub use session::{Session, Summary};

// Addresses are signed so a negative one can be handed in and rejected.
pub type Address = i64;
pub type Word = i32;
