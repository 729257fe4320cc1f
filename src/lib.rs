// Pattern Tales: four classic design patterns told through a fantasy game.
// Each pattern module is self-contained; none of them calls into another.

//! # Pattern Tales
//!
//! Runnable scenes for four object-oriented design patterns:
//!
//! ## Adapter
//! - A spell caster joins a weapons-only tournament through a staff.
//!
//! ## Composite
//! - An inventory tree where categories and items share one `describe` capability.
//!
//! ## Singleton
//! - A process-wide `Registry` created once behind `OnceLock`.
//!
//! ## Strategy
//! - NPCs whose reaction to a threat is a swappable behavior object.
//!
//! Run individual scenes with:
//! ```bash
//! cargo run --bin adapter_demo
//! cargo run --bin composite_demo
//! cargo run --bin singleton_demo
//! cargo run --bin strategy_demo
//! ```

pub mod adapter;
pub mod composite;
pub mod config;
pub mod error;
pub mod logging;
pub mod narrator;
pub mod singleton;
pub mod strategy;

pub use config::DemoConfig;
pub use error::{ConfigError, PatternError, Result};
pub use narrator::{ConsoleNarrator, Narrator, RecordingNarrator};
