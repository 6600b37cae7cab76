//! Helpers shared by the renderer and the wiki tooling.

pub mod links;
pub mod tags;
