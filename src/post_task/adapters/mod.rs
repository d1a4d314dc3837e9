//! Adapter implementations for task-posting ports.

pub mod memory;
