//! A simulator for Conway's Game of Life and its 3D analog,
//! on a square or cubic grid with edge-clamped Moore neighborhoods.

mod cells;
mod config;
mod error;
mod rules;
mod world;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::Config;
pub use error::Error;
pub use rules::Ruleset;
pub use world::{World, World2, World3};
