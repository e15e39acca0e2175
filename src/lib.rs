//! Bachet's game: a single pile subtraction game between a human player and
//! a random bot. Whoever takes the last item wins.

pub mod actors;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod game;
pub mod generator;
pub mod util;
pub mod validate;
pub mod view;
