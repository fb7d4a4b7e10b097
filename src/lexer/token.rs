/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the fundamental lexical token types exchanged between
 *            the lexing and parsing stages of the MINIPAS front end.
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

/// Width of the value column in the on-disk token list format.
pub const TRACE_VALUE_WIDTH: usize = 16;

/// Represents the **terminal kind** of a lexical token.
///
/// Every kind carries a stable numeric code (1..=25) that appears in the
/// token list artifacts; the codes are part of the on-disk format and must
/// not be reordered.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenType → Parser → Symbol tables
/// ```
///
/// Two kinds are structural rather than grammatical:
/// - `EndOfLine` tokens are transparent to grammar rules but drive the
///   parser's line counter and the per-line diagnostic throttle.
/// - `EndOfFile` is always the final token of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenType {
    Begin = 1,
    End,
    Integer,
    If,
    Then,
    Else,
    Function,
    Read,
    Write,
    Identifier,
    Constant,
    Equal,
    NotEqual,
    LessOrEqual,
    Less,
    GreaterOrEqual,
    Greater,
    Subtract,
    Multiply,
    Assign,
    LeftParen,
    RightParen,
    Semicolon,
    EndOfLine,
    EndOfFile,
}

impl TokenType {
    /// Stable numeric code used in the token list artifacts.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`](Self::code); `None` for codes outside 1..=25.
    pub fn from_code(code: u8) -> Option<TokenType> {
        use TokenType::*;
        let ty = match code {
            1 => Begin,
            2 => End,
            3 => Integer,
            4 => If,
            5 => Then,
            6 => Else,
            7 => Function,
            8 => Read,
            9 => Write,
            10 => Identifier,
            11 => Constant,
            12 => Equal,
            13 => NotEqual,
            14 => LessOrEqual,
            15 => Less,
            16 => GreaterOrEqual,
            17 => Greater,
            18 => Subtract,
            19 => Multiply,
            20 => Assign,
            21 => LeftParen,
            22 => RightParen,
            23 => Semicolon,
            24 => EndOfLine,
            25 => EndOfFile,
            _ => return None,
        };
        Some(ty)
    }

    /// Human-readable name used in "Expect X, but got 'y'" diagnostics.
    pub fn describe(self) -> &'static str {
        use TokenType::*;
        match self {
            Begin => "'begin'",
            End => "'end'",
            Integer => "'integer'",
            If => "'if'",
            Then => "'then'",
            Else => "'else'",
            Function => "'function'",
            Read => "'read'",
            Write => "'write'",
            Identifier => "identifier",
            Constant => "constant",
            Equal => "'='",
            NotEqual => "'<>'",
            LessOrEqual => "'<='",
            Less => "'<'",
            GreaterOrEqual => "'>='",
            Greater => "'>'",
            Subtract => "'-'",
            Multiply => "'*'",
            Assign => "':='",
            LeftParen => "'('",
            RightParen => "')'",
            Semicolon => "';'",
            EndOfLine => "EOLN",
            EndOfFile => "EOF",
        }
    }
}

/// Represents a **single lexical token** produced by the MINIPAS lexer.
///
/// A token pairs a terminal kind with the exact source text that produced
/// it. Tokens are immutable once produced; the parser records every token
/// it consumes (including recovered bad tokens and end-of-line markers)
/// into the accepted-token trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The terminal kind of the token.
    pub ty: TokenType,

    /// The exact source text that produced this token. Preserved verbatim
    /// for error messages and the token list artifacts.
    pub value: String,
}

impl Token {
    pub fn new(ty: TokenType, value: impl Into<String>) -> Self {
        Self {
            ty,
            value: value.into(),
        }
    }

    /// Renders the token in the on-disk token list format: the value
    /// left-padded to a fixed width, one space, then the 2-digit
    /// zero-padded type code.
    pub fn trace_line(&self) -> String {
        format!(
            "{:<width$} {:02}",
            self.value,
            self.ty.code(),
            width = TRACE_VALUE_WIDTH
        )
    }
}

impl fmt::Display for Token {
    /// Prints only the lexeme. Diagnostics care about what the user wrote,
    /// not the internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
