//! Pomo - gettext catalog compiler
//!
//! Pomo is a CLI tool and library that compiles gettext `.po` translation
//! sources into little-endian `.mo` catalogs, and reads those catalogs back
//! for lookups.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, logging)
//! - `config`: Configuration file loading and parsing
//! - `core`: Parser, catalog writer/reader, locale tree scanning, build driver

pub mod cli;
pub mod config;
pub mod core;
