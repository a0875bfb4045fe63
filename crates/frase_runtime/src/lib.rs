//! REPL, CLI, derivation trees and batch reports for frase.
//!
//! This crate provides:
//! - [`Repl`] - Interactive shell over [`frase_parser::analyze`]
//! - [`DerivationTree`] - ASCII derivation trees for accepted sentences
//! - [`BatchReport`] - Timed batch analysis with aggregate counts
//!
//! Everything here goes through the parser's public entry points; none of
//! it looks at parser internals.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod display;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod repl;
pub mod report;
pub mod tree;

pub use error::{Error, ErrorKind, Result};
pub use repl::Repl;
pub use report::{BatchReport, Summary};
pub use tree::{DerivationTree, explain_steps};
