/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Lexical analysis for the MINIPAS language: turns raw source
 *            text into the ordered token stream the parser consumes.
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

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::lexer::keywords::keyword_type;
use crate::lexer::token::{Token, TokenType};

/// Identifiers longer than this are rejected by the lexer.
pub const MAX_IDENTIFIER_LENGTH: usize = 16;

/// The MINIPAS lexical analyzer.
///
/// Scans the source character by character through a read-forward cursor.
/// Newlines are not discarded: each one becomes an `EndOfLine` token in
/// the stream, because the parser counts physical lines by consuming them.
struct Lexer {
    line: usize,
    cursor: Cursor<char>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

/// Public entry point for the lexing phase.
///
/// Returns every token scanned from `source` (terminated by exactly one
/// `EndOfFile` token) together with any tokenization errors. Characters
/// that fail to scan produce an error and are skipped; the rest of the
/// source is still tokenized so one run reports every bad character.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut lexer = Lexer::new(source);
    lexer.scan();
    (lexer.tokens, lexer.errors)
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            line: 1,
            cursor: Cursor::new(source.trim().chars().collect()),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn scan(&mut self) {
        while self.cursor.is_open() {
            self.scan_token();
        }

        self.tokens.push(Token::new(TokenType::EndOfFile, "EOF"));
    }

    /// Scans a single token (or records a single error) from the stream.
    fn scan_token(&mut self) {
        while matches!(self.cursor.current(), Some(&(' ' | '\t' | '\r'))) {
            self.cursor.consume();
        }

        let Some(initial) = self.cursor.consume() else {
            return;
        };

        if initial.is_alphabetic() {
            self.scan_word(initial);
            return;
        }

        if initial.is_ascii_digit() {
            self.scan_constant(initial);
            return;
        }

        match initial {
            '=' => self.push(TokenType::Equal, "="),
            '-' => self.push(TokenType::Subtract, "-"),
            '*' => self.push(TokenType::Multiply, "*"),
            '(' => self.push(TokenType::LeftParen, "("),
            ')' => self.push(TokenType::RightParen, ")"),
            ';' => self.push(TokenType::Semicolon, ";"),

            '<' => {
                if self.match_next('=') {
                    self.push(TokenType::LessOrEqual, "<=");
                } else if self.match_next('>') {
                    self.push(TokenType::NotEqual, "<>");
                } else {
                    self.push(TokenType::Less, "<");
                }
            }

            '>' => {
                if self.match_next('=') {
                    self.push(TokenType::GreaterOrEqual, ">=");
                } else {
                    self.push(TokenType::Greater, ">");
                }
            }

            // A colon is only valid as the first half of ':='.
            ':' => {
                if self.match_next('=') {
                    self.push(TokenType::Assign, ":=");
                } else {
                    self.errors.push(LexError::new(self.line, "Misused colon"));
                }
            }

            '\n' => {
                self.push(TokenType::EndOfLine, "EOLN");
                self.line += 1;
            }

            other => {
                self.errors.push(LexError::new(
                    self.line,
                    format!("Invalid character '{}'", other),
                ));
            }
        }
    }

    /// Scans a keyword or identifier starting at `initial`.
    fn scan_word(&mut self, initial: char) {
        let mut value = String::from(initial);
        while let Some(&next) = self.cursor.current() {
            if !next.is_alphanumeric() {
                break;
            }
            self.cursor.consume();
            value.push(next);
        }

        if let Some(ty) = keyword_type(&value) {
            self.tokens.push(Token::new(ty, value));
            return;
        }

        if value.chars().count() <= MAX_IDENTIFIER_LENGTH {
            self.tokens.push(Token::new(TokenType::Identifier, value));
            return;
        }

        self.errors.push(LexError::new(
            self.line,
            format!(
                "Identifier name '{}' exceeds {} characters",
                value, MAX_IDENTIFIER_LENGTH
            ),
        ));
    }

    /// Scans an unsigned integer constant starting at `initial`.
    fn scan_constant(&mut self, initial: char) {
        let mut value = String::from(initial);
        while let Some(&next) = self.cursor.current() {
            if !next.is_ascii_digit() {
                break;
            }
            self.cursor.consume();
            value.push(next);
        }
        self.tokens.push(Token::new(TokenType::Constant, value));
    }

    /// Consumes the next character if it equals `expected`.
    fn match_next(&mut self, expected: char) -> bool {
        if self.cursor.current() == Some(&expected) {
            self.cursor.consume();
            true
        } else {
            false
        }
    }

    fn push(&mut self, ty: TokenType, value: impl Into<String>) {
        self.tokens.push(Token::new(ty, value));
    }
}
