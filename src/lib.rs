//! # exprtree
//!
//! exprtree is an integer expression engine written in Rust.
//! It tokenizes infix expressions over a single variable `x`, builds a binary
//! expression tree with a shunting-yard style algorithm, evaluates it, rewrites
//! `x * A` into `A * x` and renders the tree as indented text.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{fs, io, path::Path};

use tracing::{debug, info, instrument};

use crate::{
    ast::Node,
    config::Config,
    interpreter::{
        evaluator::core::evaluate, parser::core::parse, renderer::render, transformer::transform,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` tree, its leaves and the binary operators
/// with their precedence and associativity. Trees are built by the parser,
/// read by the evaluator and renderer, and rewritten by the transformer.
pub mod ast;
/// Settings for tokenizing and tree building.
///
/// Groups the tokenize mode, the optional literal range and the maximum tree
/// height, and offers the default and strict profiles.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during tokenizing, tree
/// building or evaluation. Every failure mode is a distinct variant with a
/// human readable `Display` implementation.
///
/// # Responsibilities
/// - Defines `ParseError` for the tokenizer and the tree builder.
/// - Defines `RuntimeError` for the evaluator.
/// - Implements `std::error::Error` for both.
pub mod error;
/// Orchestrates tokenizing, tree building, evaluation, rewriting and
/// rendering.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, transformer and renderer.
/// - Exposes each stage as a standalone function.
pub mod interpreter;

/// Everything produced by one pass of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The expression as given.
    pub expression:  String,
    /// The value bound to `x`.
    pub x:           i64,
    /// The value of the expression.
    pub result:      i64,
    /// The tree after the optional rewrite.
    pub tree:        Node,
    /// Whether the rewrite was applied to `tree`.
    pub transformed: bool,
    /// The rendering of `tree`.
    pub rendered:    String,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Expression: {}", self.expression)?;
        writeln!(f, "x = {}", self.x)?;
        writeln!(f, "Result: {}", self.result)?;
        writeln!(f)?;
        if self.transformed {
            writeln!(f, "Transformed tree:")?;
        } else {
            writeln!(f, "Tree:")?;
        }
        write!(f, "{}", self.rendered)
    }
}

/// Runs the whole pipeline on one expression.
///
/// The expression is tokenized and built into a tree, which is evaluated with
/// `x` bound to the given value. The tree is then rewritten (unless
/// `transform_tree` is `false`) and rendered. Evaluation happens before the
/// rewrite, so the result always refers to the tree as written.
///
/// # Errors
/// Returns the first `ParseError` or `RuntimeError` encountered. No partial
/// report is produced.
///
/// # Examples
/// ```
/// use exprtree::{config::Config, run};
///
/// let report = run("x * 2 + 1", 3, &Config::default(), true).unwrap();
/// assert_eq!(report.result, 7);
/// assert_eq!(report.tree.to_string(), "(+ (* 2 x) 1)");
///
/// // Division by zero is reported as an error.
/// assert!(run("5 / 0", 0, &Config::default(), true).is_err());
/// ```
#[instrument(level = "info", skip(config))]
pub fn run(expression: &str,
           x: i64,
           config: &Config,
           transform_tree: bool)
           -> Result<Report, Box<dyn std::error::Error>> {
    let mut tree = parse(expression, config)?;
    let result = evaluate(&tree, x)?;

    if transform_tree {
        transform(&mut tree);
    }
    let rendered = render(&tree);

    info!(result, "expression evaluated");
    Ok(Report { expression: expression.to_string(),
                x,
                result,
                tree,
                transformed: transform_tree,
                rendered })
}

/// Reads an expression from the first line of a file.
///
/// Only the first line is used; anything after it is ignored, and a trailing
/// `\r` is dropped. An empty file yields an empty string, which the tokenizer
/// rejects as an empty expression.
///
/// # Errors
/// Returns the I/O error if the file cannot be read.
pub fn read_expression(path: impl AsRef<Path>) -> io::Result<String> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().next().unwrap_or_default().to_string())
}

/// Writes the text of `report` to `path`, replacing any existing file.
///
/// # Errors
/// Returns the I/O error if the file cannot be written.
pub fn write_report(path: impl AsRef<Path>, report: &Report) -> io::Result<()> {
    fs::write(path, report.to_string())
}

/// Runs the pipeline and writes the report to `path`.
///
/// The file is only created once the whole pipeline has succeeded, so a
/// failing expression leaves `path` untouched.
///
/// # Errors
/// Returns the pipeline error from [`run`], or a message naming `path` when
/// the report cannot be written.
pub fn run_to_file(expression: &str,
                   x: i64,
                   config: &Config,
                   transform_tree: bool,
                   path: &Path)
                   -> Result<Report, Box<dyn std::error::Error>> {
    let report = run(expression, x, config, transform_tree)?;
    write_report(path, &report).map_err(|e| {
                                   format!("Failed to write the output file '{}': {e}",
                                           path.display())
                               })?;
    debug!(path = %path.display(), "report written");
    Ok(report)
}
