//! # Connect Four Engine
//!
//! The rules engine and adversarial search for Connect Four: board state,
//! legal-move enumeration, win detection, a section-based heuristic
//! evaluator, and depth-limited minimax with alpha-beta pruning that picks
//! the best column for a given player.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, section enumeration, win detection
//! - [`ai`] — Heuristic evaluator, minimax searcher, playing agents
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
