//! Client session context for the FixFlex marketplace client.
//!
//! The signed-in user and the category catalogue are held in an explicit
//! [`domain::Session`] value. It is restored from a [`ports::SessionStore`]
//! at start-up, updated on sign-in and sign-out, and passed to the features
//! that need it, such as opening the task-posting wizard.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
