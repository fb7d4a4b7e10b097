/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:      diagnostics.rs
 * Purpose:   User-visible diagnostic records and the ordered, per-line
 *            throttled log the parser accumulates them in.
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

use serde::Serialize;
use std::fmt;

/// A single user-visible error, tied to a physical source line.
///
/// Rendered as `***LINE <n>: <message>` in the error log. The line number
/// is 1-based and counted by the end-of-line tokens the parser consumes,
/// not by any position data on the token itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***LINE {}: {}", self.line, self.message)
    }
}

/// Ordered, append-only collection of diagnostics with a per-line throttle.
///
/// A single malformed line tends to trip several productions in a row, and
/// reporting each failure would bury the real problem under a cascade. The
/// log therefore retains at most one diagnostic per physical line: an armed
/// flag is consumed by the first report, and re-armed each time the parser
/// crosses an end-of-line token. Reports that arrive while the flag is down
/// are silently dropped.
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
    armed: bool,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            armed: true,
        }
    }

    /// Records a recoverable diagnostic, subject to the per-line throttle.
    ///
    /// The first report on a line is retained; later reports on the same
    /// line are dropped until [`rearm`](Self::rearm) is called.
    pub fn report(&mut self, line: usize, message: impl Into<String>) {
        if !self.armed {
            return;
        }
        self.armed = false;
        self.entries.push(Diagnostic {
            line,
            message: message.into(),
        });
    }

    /// Records a diagnostic unconditionally, bypassing the throttle.
    ///
    /// Used for the fatal abort message, which must always survive.
    pub fn record_unthrottled(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Re-arms the throttle. Called whenever the parser crosses an
    /// end-of-line token.
    pub fn rearm(&mut self) {
        self.armed = true;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Consumes the log, yielding the diagnostics in emission order.
    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new()
    }
}
