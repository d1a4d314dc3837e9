//! Unit tests for the task-posting wizard.

mod validation_tests;
