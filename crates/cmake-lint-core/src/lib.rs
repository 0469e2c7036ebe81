//! # cmake-lint-core
//!
//! Core engine for linting CMake build scripts.
//!
//! This crate turns raw lines into a structured command stream and runs a
//! catalog of style rules over it. It includes:
//!
//! - [`lines`] and [`tokenizer`] for logical lines and commands
//! - [`filter`] and [`pragma`] for layered category filtering
//! - [`Rule`] trait for per-file checks
//! - [`Linter`] for orchestrating rule execution
//! - [`Diagnostic`] and [`Report`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use cmake_lint_core::{LintConfiguration, Linter, SourceFile};
//!
//! let config = LintConfiguration::builder()
//!     .cli_filter("-whitespace/indent")
//!     .build()?;
//!
//! let linter = Linter::builder()
//!     .config(config)
//!     .rule(MyRule::new())
//!     .build();
//!
//! let source = SourceFile::from_content("CMakeLists.txt", &content);
//! print!("{}", linter.lint_source(&source).render());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod source;
mod types;

pub mod filter;
pub mod lines;
pub mod pragma;
pub mod tokenizer;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Linter, LinterBuilder};
pub use config::{Config, ConfigError, LintConfiguration, LintConfigurationBuilder};
pub use context::{FileContext, ParsedFile};
pub use filter::{FilterError, FilterRule, FilterSet, Layer, CATEGORIES};
pub use rule::{Rule, RuleBox};
pub use source::{FinalNewline, SourceFile};
pub use tokenizer::{Argument, Command, TokenizeError};
pub use types::{Diagnostic, DiagnosticReport, Outcome, Report, Severity};
