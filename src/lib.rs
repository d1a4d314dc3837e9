//! FixFlex: client core for a local-services marketplace.
//!
//! Task posters describe work through a guided wizard and "Flexers" make
//! offers on it. This crate holds the client-side logic that is more than
//! layout: the task-posting wizard and the session context it runs in.
//!
//! # Architecture
//!
//! FixFlex follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, APIs, etc.)
//!
//! # Modules
//!
//! - [`post_task`]: Multi-step task-posting wizard and its submission
//! - [`session`]: Explicit session context with user and categories

pub mod post_task;
pub mod session;
