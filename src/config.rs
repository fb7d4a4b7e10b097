/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:      config.rs
 * Purpose:   Fixed artifact paths and output directory setup.
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

use std::fs;
use std::io;

/// Default source file, used when no path is given on the command line.
pub const SOURCE_PATH: &str = "input/test.pas";

/// Error log: lexer errors or parser diagnostics, one per line.
pub const ERR_PATH: &str = "output/output.err";

/// Token list produced by the lexer.
pub const DYD_PATH: &str = "output/output.dyd";

/// Accepted-token trace produced by the parser.
pub const DYS_PATH: &str = "output/output.dys";

/// Variable table dump.
pub const VAR_PATH: &str = "output/output.var";

/// Procedure table dump.
pub const PRO_PATH: &str = "output/output.pro";

/// Machine-readable JSON summary of the whole run.
pub const SUMMARY_PATH: &str = "output/output.json";

/// Creates the output directory if it doesn't exist.
pub fn init() -> io::Result<()> {
    fs::create_dir_all("output")
}
