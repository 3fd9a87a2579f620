//! VRC-LIFE Catalog Library
//!
//! This library provides core functionality for the VRC-LIFE catalog
//! browser: loading the portal's JSON catalog documents, filtering them
//! with a conjunctive filter engine, and building typed card views for the
//! terminal UI, CLI, and web API.

// Module declarations
pub mod cards;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod shortcuts;
pub mod tagger;
#[cfg(feature = "ratatui")]
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
