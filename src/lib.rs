//! Classic grid snake: a pure game engine plus a terminal front end.
//!
//! All game semantics live in [`game::GameEngine`], which advances one
//! discrete step per [`game::GameEngine::tick`] call. The engine owns no
//! timer and draws nothing; the host decides when to tick (re-reading
//! [`game::GameEngine::current_interval_ms`] after every call) and renders
//! the [`game::Snapshot`] it exposes.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod ui;
