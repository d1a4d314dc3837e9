//! Unit tests for the client session.
