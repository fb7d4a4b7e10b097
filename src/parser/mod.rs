/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the MINIPAS recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Declaration and statement parsing
 *   - Expression parsing
 *   - Symbol tables and scope resolution
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct and the `Analysis` outcome
/// - Exposes the main `parse(tokens)` entry point
pub mod parser;

/// Declaration and executable-statement productions:
/// - variable / procedure declarations
/// - read / write / assignment / if-then-else
pub mod statements;

/// Expression-level productions:
/// - expr → term → factor, procedure calls, relational operators
pub mod expressions;

/// Symbol tables and scope resolution:
/// - variable / procedure registration
/// - level-based visibility lookups
/// - parameter promotion
pub mod symbols;

/// Shared parser helpers:
/// - token type checks and error-tolerant consumption
/// - line tracking over end-of-line tokens
/// - diagnostic emission
pub mod helpers;

/// Re-export the public surface so callers can use `crate::parser::parse(...)`.
pub use parser::{parse, Analysis, Parser};
pub use symbols::{Procedure, VarKind, Variable};
