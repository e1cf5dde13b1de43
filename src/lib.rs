//! Classic grid snake for the terminal.
//!
//! The core modules (`snake`, `game`, `engine`, `food`, `clock`, `score`)
//! never touch the terminal. `input`, `renderer`, and `ui` speak crossterm
//! and ratatui, and `app` ties the two halves together in the session loop.

pub mod app;
pub mod clock;
pub mod config;
pub mod engine;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod ui;
