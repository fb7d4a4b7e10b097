/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver function used to run the single-pass syntax/semantic analysis over
 * a token stream produced by the lexer.
 *
 * The analysis itself is split across multiple modules:
 * - `statements.rs`   → Declarations and executable statements
 * - `expressions.rs`  → Arithmetic expressions, factors, and conditions
 * - `symbols.rs`      → Variable/procedure tables and scope resolution
 * - `helpers.rs`      → Token matching, consumption, and line tracking
 *
 * This file serves as the **root coordinator** of the parsing process.
 *
 * --------------------------------------------------------------------------
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

use crate::cursor::Cursor;
use crate::diagnostics::{Diagnostic, DiagnosticLog};
use crate::error::ParseResult;
use crate::lexer::token::{Token, TokenType};
use crate::parser::symbols::{Procedure, Variable};
use serde::Serialize;

/// The MINIPAS scope-aware recursive-descent parser.
///
/// One instance performs exactly one analysis pass: it drives the grammar
/// top-down over the token stream, consulting and mutating the symbol
/// tables as declarations and uses are encountered, and routing failures
/// through the diagnostic log. All state is owned exclusively by the
/// parser; there is no sharing across the single-threaded call chain.
pub struct Parser {
    /// 1-based physical line, advanced by consuming end-of-line tokens.
    pub(crate) line: usize,

    /// Lexical nesting, innermost scope last. The top names the owning
    /// procedure for new declarations; its depth is the current level.
    pub(crate) call_stack: Vec<String>,

    /// Next free offset in the flat variable address space.
    pub(crate) next_address: i32,

    /// Every token actually consumed, in order, including recovered bad
    /// tokens and end-of-line markers.
    pub(crate) accepted: Vec<Token>,

    /// Flat, append-only variable table across all procedures.
    pub(crate) variables: Vec<Variable>,

    /// Flat, append-only procedure table.
    pub(crate) procedures: Vec<Procedure>,

    /// Collected recoverable diagnostics plus the final fatal record.
    pub(crate) diagnostics: DiagnosticLog,

    /// Read-forward cursor over the token stream.
    pub(crate) cursor: Cursor<Token>,
}

/// Everything one analysis pass produced, handed to reporting.
///
/// The tables and the accepted trace survive even when the parse aborted:
/// partial state is flushed to the output artifacts, not discarded.
#[derive(Debug, Serialize)]
pub struct Analysis {
    /// True iff the diagnostics list is empty at normal completion.
    pub success: bool,

    /// The accepted-token trace, in consumption order.
    pub accepted: Vec<Token>,

    /// Variable table, in registration order.
    pub variables: Vec<Variable>,

    /// Procedure table, in registration order.
    pub procedures: Vec<Procedure>,

    /// Diagnostics in emission order, at most one per physical line.
    pub diagnostics: Vec<Diagnostic>,
}

/// Public entry point for the MINIPAS parsing phase.
///
/// Runs the full analysis over `tokens` (which must be terminated by an
/// end-of-file token, per the lexer contract) and returns the complete
/// outcome. A fatal error aborts the grammar walk but never the function:
/// the aborting diagnostic is recorded and the partial tables returned.
pub fn parse(tokens: Vec<Token>) -> Analysis {
    let mut parser = Parser::new(tokens);
    let success = parser.run();

    Analysis {
        success,
        accepted: parser.accepted,
        variables: parser.variables,
        procedures: parser.procedures,
        diagnostics: parser.diagnostics.into_entries(),
    }
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            line: 1,
            call_stack: Vec::new(),
            next_address: 0,
            accepted: Vec::new(),
            variables: Vec::new(),
            procedures: Vec::new(),
            diagnostics: DiagnosticLog::new(),
            cursor: Cursor::new(tokens),
        }
    }

    /// Drives the parse to completion and reports overall success.
    ///
    /// Recoverable errors have already been collected along the way; a
    /// fatal error lands here after unwinding every open production and
    /// is recorded past the per-line throttle.
    fn run(&mut self) -> bool {
        if let Err(fatal) = self.parse_program() {
            self.diagnostics.record_unthrottled(fatal.into_diagnostic());
        }
        self.diagnostics.is_empty()
    }

    /// program → subprogram EOF
    fn parse_program(&mut self) -> ParseResult<()> {
        self.parse_subprogram()?;
        self.expect(TokenType::EndOfFile)?;
        Ok(())
    }

    /// subprogram → 'begin' declarations executions 'end'
    ///
    /// The whole-program body runs in the scope named "main". The push and
    /// the pop bracket the body exactly once; a fatal abort inside skips
    /// the pop, but then the stack dies with the parse anyway.
    fn parse_subprogram(&mut self) -> ParseResult<()> {
        self.call_stack.push("main".to_string());

        self.expect(TokenType::Begin)?;
        self.parse_declarations()?;
        self.parse_executions()?;
        self.expect(TokenType::End)?;

        self.call_stack.pop();
        Ok(())
    }
}
