//! Autoplay Snake: a pathfinding Ex hunts partners across a wrapping grid.

pub mod agent;
pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod label;
pub mod logging;
pub mod message;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod snake;
pub mod speed;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
