//! AP Typing Toolkit
//!
//! Calculators for the four-aspect AP typing scheme:
//! - Shadow types derived from an AP type and its subtype
//! - Intertype relations between AP types
//! - Enneagram and Expanded Instincts triads
//! - Coverage statistics over collections of typings
//!
//! The same command registry backs the CLI, the HTTP server and the chat bot.

pub mod ap;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod server;
pub mod services;
pub mod triads;
pub mod utils;

// Re-exports for convenience
pub use ap::{all_relations, derive_shadow_types, relation, validate_ap_type, validate_subtype, ApType, ShadowSequence, SubtypeCode};
pub use commands::{CommandOutput, CommandRegistry};
pub use config::AppConfig;
pub use error::{TypingError, TypingResult};
pub use format::{OutputFormat, Report};
pub use triads::{classify_triads, get_triads, TriadDomainKind, TriadReport};
