/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:      report.rs
 * Purpose:   Serialization of the front end's artifacts: token lists, the
 *            accepted-token trace, symbol table dumps, and error logs.
 *            Also the loader that turns a token list file back into the
 *            parser's input stream.
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
use crate::error::LexError;
use crate::lexer::token::{Token, TokenType};
use crate::parser::{Analysis, Procedure, Variable};
use regex::Regex;
use std::fmt::Write as _;
use std::fs;
use std::io;

/// Renders a token list in the on-disk format, one trace line per token.
pub fn render_token_list(tokens: &[Token]) -> String {
    let lines: Vec<String> = tokens.iter().map(Token::trace_line).collect();
    lines.join("\n")
}

/// Parses a token list back into the parser's input stream.
///
/// Each line carries a value and a numeric type code separated by
/// whitespace. Blank or short lines and unknown type codes are skipped,
/// matching the tolerance of the writer's fixed-width padding.
pub fn parse_token_list(text: &str) -> Vec<Token> {
    let line_format = Regex::new(r"^\s*(\S+)\s+(\d+)\s*$").expect("token list line pattern");

    let mut tokens = Vec::new();
    for line in text.lines() {
        let Some(caps) = line_format.captures(line) else {
            continue;
        };
        let Ok(code) = caps[2].parse::<u8>() else {
            continue;
        };
        let Some(ty) = TokenType::from_code(code) else {
            continue;
        };
        tokens.push(Token::new(ty, &caps[1]));
    }
    tokens
}

/// Loads the lexer's token list artifact from disk.
pub fn load_tokens(path: &str) -> io::Result<Vec<Token>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_token_list(&text))
}

/// Writes a token list (lexer output or the parser's accepted trace).
pub fn write_token_list(path: &str, tokens: &[Token]) -> io::Result<()> {
    fs::write(path, render_token_list(tokens))
}

/// Writes the variable table dump, one record per variable in
/// registration order.
pub fn write_variables(path: &str, variables: &[Variable]) -> io::Result<()> {
    let mut records = Vec::with_capacity(variables.len());
    for variable in variables {
        let mut record = String::new();
        let _ = writeln!(record, "Var");
        let _ = writeln!(record, "    Name      = {}", variable.name);
        let _ = writeln!(record, "    Procedure = {}", variable.procedure);
        let _ = writeln!(record, "    Kind      = {}", variable.kind);
        let _ = writeln!(record, "    Type      = {}", variable.value_type);
        let _ = writeln!(record, "    Level     = {}", variable.level);
        let _ = write!(record, "    Offset    = {}", variable.address);
        records.push(record);
    }
    fs::write(path, records.join("\n"))
}

/// Writes the procedure table dump, one record per procedure in
/// registration order.
pub fn write_procedures(path: &str, procedures: &[Procedure]) -> io::Result<()> {
    let mut records = Vec::with_capacity(procedures.len());
    for procedure in procedures {
        let mut record = String::new();
        let _ = writeln!(record, "Proc");
        let _ = writeln!(record, "    Name      = {}", procedure.name);
        let _ = writeln!(record, "    Type      = {}", procedure.return_type);
        let _ = writeln!(record, "    Level     = {}", procedure.level);
        let _ = writeln!(record, "    FirstVar  = {}", procedure.first_variable_address);
        let _ = write!(record, "    LastVar   = {}", procedure.last_variable_address);
        records.push(record);
    }
    fs::write(path, records.join("\n"))
}

/// Writes the parser's error log, one rendered diagnostic per line, in
/// emission order.
pub fn write_errors(path: &str, diagnostics: &[Diagnostic]) -> io::Result<()> {
    let lines: Vec<String> = diagnostics.iter().map(Diagnostic::to_string).collect();
    fs::write(path, lines.join("\n"))
}

/// Writes the lexer's error log.
pub fn write_lex_errors(path: &str, errors: &[LexError]) -> io::Result<()> {
    let lines: Vec<String> = errors.iter().map(LexError::to_string).collect();
    fs::write(path, lines.join("\n"))
}

/// Writes the machine-readable JSON summary of the whole run.
pub fn write_summary(path: &str, analysis: &Analysis) -> io::Result<()> {
    let json = serde_json::to_string_pretty(analysis)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    fs::write(path, json)
}
