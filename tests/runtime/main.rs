//! Integration tests for the frase_runtime crate.
//!
//! Tests for the collaborators built on `analyze`:
//! - Derivation trees and step-by-step reports
//! - Batch reports
//! - The REPL, driven through a scripted editor

mod repl_tests;
mod report_tests;
mod tree_tests;
