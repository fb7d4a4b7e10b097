/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:      main.rs
 * Purpose:   Top-level driver: sequences the lexer and the parser, writes
 *            every output artifact, and maps the outcome to exit codes.
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

use chrono::Local;
use minipas::{config, lexer, parser, report};
use std::env;
use std::fs;
use std::process;

fn main() {
    if let Err(err) = run() {
        eprintln!("minipas: {}", err);
        process::exit(1);
    }
}

fn run() -> std::io::Result<()> {
    config::init()?;

    let source_path = env::args()
        .nth(1)
        .unwrap_or_else(|| config::SOURCE_PATH.to_string());
    let source = fs::read_to_string(&source_path)?;

    // Stage one: lexical analysis. The token list is written even on
    // failure so the artifacts reflect how far the run got.
    let (tokens, lex_errors) = lexer::tokenize(&source);
    report::write_token_list(config::DYD_PATH, &tokens)?;

    if !lex_errors.is_empty() {
        report::write_lex_errors(config::ERR_PATH, &lex_errors)?;
        eprintln!(
            "Compilation aborted due to lexer error. A complete log of this run can be found in: {}",
            config::ERR_PATH
        );
        process::exit(1);
    }

    // Stage two: syntax/semantic analysis over the token list artifact,
    // so the parser consumes exactly the stream the lexer published.
    let tokens = report::load_tokens(config::DYD_PATH)?;
    let analysis = parser::parse(tokens);

    report::write_token_list(config::DYS_PATH, &analysis.accepted)?;
    report::write_variables(config::VAR_PATH, &analysis.variables)?;
    report::write_procedures(config::PRO_PATH, &analysis.procedures)?;
    report::write_errors(config::ERR_PATH, &analysis.diagnostics)?;
    report::write_summary(config::SUMMARY_PATH, &analysis)?;

    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    if analysis.success {
        println!("Compilation successful. ({})", stamp);
    } else {
        for (index, diagnostic) in analysis.diagnostics.iter().enumerate() {
            println!("Error {}: {}", index + 1, diagnostic);
        }
        eprintln!(
            "Compilation aborted due to parser error ({}). A complete log of this run can be found in: {}",
            stamp,
            config::ERR_PATH
        );
        process::exit(1);
    }

    Ok(())
}
