/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines all reserved keywords of the MINIPAS language.
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

use crate::lexer::token::TokenType;

/// Maps a scanned word to its keyword token type, if it is one.
///
/// Keywords are matched **case-insensitively** (`BEGIN`, `Begin`, and
/// `begin` all lex as the same keyword), but the token value keeps the
/// spelling the user wrote.
///
/// Returns `None` for words that should be treated as plain identifiers.
pub fn keyword_type(word: &str) -> Option<TokenType> {
    let ty = match word.to_ascii_lowercase().as_str() {
        "begin" => TokenType::Begin,
        "end" => TokenType::End,
        "integer" => TokenType::Integer,
        "if" => TokenType::If,
        "then" => TokenType::Then,
        "else" => TokenType::Else,
        "function" => TokenType::Function,
        "read" => TokenType::Read,
        "write" => TokenType::Write,
        _ => return None,
    };
    Some(ty)
}

#[cfg(test)]
mod tests {
    use super::keyword_type;
    use crate::lexer::token::TokenType;

    #[test]
    fn keywords_match_case_insensitively() {
        assert_eq!(keyword_type("begin"), Some(TokenType::Begin));
        assert_eq!(keyword_type("BEGIN"), Some(TokenType::Begin));
        assert_eq!(keyword_type("Function"), Some(TokenType::Function));
    }

    #[test]
    fn ordinary_words_are_identifiers() {
        assert_eq!(keyword_type("beginning"), None);
        assert_eq!(keyword_type("x"), None);
    }
}
