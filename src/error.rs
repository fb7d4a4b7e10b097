/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:      error.rs
 * Purpose:   Error types shared across the MINIPAS front end.
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

use crate::diagnostics::Diagnostic;
use std::fmt;

/// An unrecoverable parse error.
///
/// Recoverable errors are collected in the [`DiagnosticLog`] and parsing
/// continues past the bad token. A `FatalError` is different: it unwinds
/// the whole parse. Every production returns `ParseResult` and forwards
/// the error with `?`, so the abort travels from any nested production
/// straight to the top-level parse entry point, which records it and
/// still flushes all partial state to the output artifacts.
///
/// [`DiagnosticLog`]: crate::diagnostics::DiagnosticLog
#[derive(Debug, Clone, PartialEq)]
pub struct FatalError {
    /// 1-based physical source line, counted by end-of-line tokens.
    pub line: usize,

    /// Human-readable error message, without any line prefix.
    pub message: String,
}

impl FatalError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    /// Converts the abort into a log entry, tagged so the error log makes
    /// clear why no further diagnostics follow it.
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic {
            line: self.line,
            message: format!("{} [FATAL]", self.message),
        }
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***LINE {}: {} [FATAL]", self.line, self.message)
    }
}

impl std::error::Error for FatalError {}

/// Result alias used by every parser production.
pub type ParseResult<T> = Result<T, FatalError>;

/// A tokenization error reported by the lexer.
///
/// Lexer errors are always fatal to the pipeline: the driver writes them
/// to the error log and never runs the parser over a broken token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    /// 1-based source line where the bad input appeared.
    pub line: usize,

    /// Human-readable error message.
    pub message: String,
}

impl LexError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for LexError {}
