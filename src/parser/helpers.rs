/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:     parser/helpers.rs
 * Purpose:  Token matching, error-tolerant consumption, and line tracking
 *           utilities shared by every parser production.
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

use crate::error::{FatalError, ParseResult};
use crate::lexer::token::{Token, TokenType};
use crate::parser::parser::Parser;

impl Parser {
    /// Checks the current token's type without consuming it.
    pub(crate) fn has_type(&self, expected: TokenType) -> bool {
        self.cursor.current().map_or(false, |t| t.ty == expected)
    }

    /// Returns the current token's lexeme without consuming it.
    pub(crate) fn current_value(&self) -> ParseResult<String> {
        match self.cursor.current() {
            Some(token) => Ok(token.value.clone()),
            None => Err(self.fatal("Unexpected end of token stream")),
        }
    }

    /// Error-tolerant consumption: the workhorse behind every terminal in
    /// the grammar.
    ///
    /// If the current token's type is not `expected`, a recoverable
    /// "Expect X, but got 'y'" diagnostic is emitted — but the token is
    /// consumed and returned regardless, so parsing proceeds past the bad
    /// token. This is the mechanism that keeps most errors non-fatal.
    pub(crate) fn expect(&mut self, expected: TokenType) -> ParseResult<Token> {
        if !self.has_type(expected) {
            let got = self
                .cursor
                .current()
                .map(|t| t.value.clone())
                .unwrap_or_default();
            self.report(format!(
                "Expect {}, but got '{}'",
                expected.describe(),
                got
            ));
        }
        self.consume_token()
    }

    /// Like [`expect`](Self::expect), but with a caller-supplied message
    /// replacing the generic one. Used where the grammar knows a better
    /// explanation, e.g. `Unmatched '('` at a missing right parenthesis.
    pub(crate) fn expect_msg(&mut self, expected: TokenType, message: &str) -> ParseResult<Token> {
        if !self.has_type(expected) {
            self.report(message.to_string());
        }
        self.consume_token()
    }

    /// Consumes one grammar-visible token.
    ///
    /// End-of-line tokens are transparent to grammar rules, so they are
    /// drained on both sides of the real token. Every consumed token —
    /// line markers included — lands in the accepted trace.
    pub(crate) fn consume_token(&mut self) -> ParseResult<Token> {
        self.skip_line_breaks();

        let token = self
            .cursor
            .consume()
            .ok_or_else(|| self.fatal("Unexpected end of token stream"))?;
        self.accepted.push(token.clone());

        self.skip_line_breaks();
        Ok(token)
    }

    /// Drains consecutive end-of-line tokens, advancing the physical line
    /// counter and re-arming the per-line diagnostic throttle for each.
    fn skip_line_breaks(&mut self) {
        while self.has_type(TokenType::EndOfLine) {
            if let Some(token) = self.cursor.consume() {
                self.accepted.push(token);
            }
            self.line += 1;
            self.diagnostics.rearm();
        }
    }

    /// Emits a recoverable diagnostic at the current line.
    pub(crate) fn report(&mut self, message: impl Into<String>) {
        self.diagnostics.report(self.line, message);
    }

    /// Builds (but does not record) a fatal error at the current line.
    /// The caller returns it and lets `?` unwind the parse.
    pub(crate) fn fatal(&self, message: impl Into<String>) -> FatalError {
        FatalError::new(self.line, message)
    }
}
