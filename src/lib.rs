/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:      lib.rs
 * Purpose:   Crate root for the MINIPAS compiler front end. Wires together
 *            the lexical analyzer, the recursive-descent syntax/semantic
 *            analyzer, and the boundary modules (configuration, reporting).
 *
 * License:
 * This file is part of the MINIPAS compiler project.
 *
 * MINIPAS is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

//! MINIPAS is a two-stage front end for a small imperative language with
//! nested procedures, integer variables, and simple control flow.
//!
//! # Pipeline
//! ```text
//! Source → Lexer → Token list → Parser → Symbol tables + Diagnostics
//! ```
//!
//! The lexer turns raw source text into an ordered token stream terminated
//! by an end-of-file marker. The parser validates program structure against
//! the grammar, builds variable and procedure tables with lexical-scoping
//! semantics, and collects line-numbered diagnostics with per-line
//! recovery, so a single run reports many errors instead of stopping at
//! the first one.

/// Fixed artifact paths and output directory setup.
pub mod config;

/// Read-forward, non-rewindable cursor used by both analysis stages.
pub mod cursor;

/// Diagnostic records and the per-line error throttle.
pub mod diagnostics;

/// Error types shared across the front end.
pub mod error;

/// Lexical analysis: source text → token stream.
pub mod lexer;

/// Syntax and semantic analysis: token stream → symbol tables.
pub mod parser;

/// Serialization of tokens, tables, and error logs to output artifacts.
pub mod report;
