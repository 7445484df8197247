//! # Crossy Road
//! Cross the road, eat the good food, dodge the bad.
//!
//! The core simulation lives here and has no SDL dependency; the binary drives it.

pub mod assets;
pub mod collision_system;
pub mod config;
pub mod entity;
pub mod game_logic;
pub mod geometry;
pub mod input;
pub mod road;
pub mod shape;
pub mod world;
