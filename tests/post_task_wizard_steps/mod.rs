//! Step definitions for task-posting wizard scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
