/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the MINIPAS lexical analyzer.
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

/// Reserved keyword lookup.
pub mod keywords;

/// The character scanner itself.
pub mod lexer;

/// Token and token-type definitions shared with the parser.
pub mod token;

/// Re-export the public tokenize entry point so callers can use:
/// `crate::lexer::tokenize(...)`
pub use lexer::{tokenize, MAX_IDENTIFIER_LENGTH};
