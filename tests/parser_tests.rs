/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:      tests/parser_tests.rs
 * Purpose:   Behavior tests for the recursive-descent syntax/semantic
 *            analyzer: grammar acceptance, symbol table construction,
 *            scope resolution, and the recoverable/fatal error policy.
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

use minipas::lexer::token::TokenType;
use minipas::lexer::tokenize;
use minipas::parser::{parse, Analysis, VarKind};
use minipas::report::{parse_token_list, render_token_list};

/// Lexes and parses a source snippet, asserting the lexer was clean.
fn analyze(source: &str) -> Analysis {
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty(), "unexpected lexer errors: {:?}", errors);
    parse(tokens)
}

#[test]
fn minimal_program_builds_the_symbol_table() {
    let analysis = analyze("begin integer x; x := 5 end");

    assert!(analysis.success);
    assert!(analysis.diagnostics.is_empty());
    assert!(analysis.procedures.is_empty());

    assert_eq!(analysis.variables.len(), 1);
    let x = &analysis.variables[0];
    assert_eq!(x.name, "x");
    assert_eq!(x.procedure, "main");
    assert_eq!(x.kind, VarKind::Local);
    assert_eq!(x.value_type, "integer");
    assert_eq!(x.level, 1);
    assert_eq!(x.address, 0);
    assert!(x.declared);
}

#[test]
fn accepted_trace_round_trips_through_the_token_list_format() {
    let analysis = analyze("begin integer x;\nx := 5\nend");
    assert!(analysis.success);

    let reloaded = parse_token_list(&render_token_list(&analysis.accepted));
    assert_eq!(reloaded, analysis.accepted);
}

#[test]
fn end_of_line_tokens_land_in_the_accepted_trace() {
    let analysis = analyze("begin integer x;\nx := 1\nend");
    assert!(analysis.success);

    let eoln_count = analysis
        .accepted
        .iter()
        .filter(|t| t.ty == TokenType::EndOfLine)
        .count();
    assert_eq!(eoln_count, 2);
    assert_eq!(analysis.accepted.last().unwrap().ty, TokenType::EndOfFile);
}

#[test]
fn duplicate_declaration_keeps_one_table_entry() {
    let analysis = analyze("begin integer x; integer x; x := 1 end");

    assert!(!analysis.success);
    assert_eq!(analysis.variables.len(), 1);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].line, 1);
    assert_eq!(
        analysis.diagnostics[0].message,
        "Variable 'x' has already been declared"
    );
}

#[test]
fn diagnostics_on_one_line_collapse_to_the_first() {
    // Two duplicate declarations on the same physical line: only the
    // first report survives the per-line throttle.
    let analysis = analyze("begin integer x; integer x; integer x; x := 1 end");
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].line, 1);
}

#[test]
fn the_next_line_is_throttled_independently() {
    let analysis = analyze("begin integer x; integer x;\ninteger x; x := 1 end");
    assert_eq!(analysis.diagnostics.len(), 2);
    assert_eq!(analysis.diagnostics[0].line, 1);
    assert_eq!(analysis.diagnostics[1].line, 2);
}

#[test]
fn undefined_assignment_target_recovers() {
    let analysis = analyze("begin integer x; y := 1 end");

    assert!(!analysis.success);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(
        analysis.diagnostics[0].message,
        "Undefined variable or procedure 'y'"
    );
    // Recovery: the parse ran to completion.
    assert_eq!(analysis.accepted.last().unwrap().ty, TokenType::EndOfFile);
}

#[test]
fn undefined_read_variable_is_reported() {
    let analysis = analyze("begin integer x; read(y) end");

    assert!(!analysis.success);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].message, "Undefined variable 'y'");
}

#[test]
fn body_without_declarations_aborts_immediately() {
    let analysis = analyze("begin x := 5 end");

    assert!(!analysis.success);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(
        analysis.diagnostics[0].message,
        "Every program or procedure should have at least one declaration [FATAL]"
    );
    // The abort happened before the offending token was consumed.
    assert_eq!(analysis.accepted.len(), 1);
    assert_eq!(analysis.accepted[0].value, "begin");
}

#[test]
fn declaration_after_executions_aborts() {
    let analysis = analyze("begin integer x; x := 1; integer y end");

    assert!(!analysis.success);
    let last = analysis.diagnostics.last().unwrap();
    assert_eq!(
        last.message,
        "Please move all declarations to the beginning of the procedure [FATAL]"
    );
}

#[test]
fn unparseable_factor_aborts() {
    let analysis = analyze("begin integer x; x := ; end");

    assert!(!analysis.success);
    let last = analysis.diagnostics.last().unwrap();
    assert_eq!(
        last.message,
        "Expect variable, procedure or constant, but got ';' [FATAL]"
    );
}

#[test]
fn nested_procedure_sees_outer_variables_and_its_own() {
    let analysis = analyze(
        "begin integer m;\n\
         integer function f(a);\n\
         begin integer a;\n\
         integer b;\n\
         b := m - a end;\n\
         m := f(3) end",
    );

    assert!(analysis.success, "diagnostics: {:?}", analysis.diagnostics);

    assert_eq!(analysis.variables.len(), 3);
    let m = &analysis.variables[0];
    assert_eq!((m.name.as_str(), m.level, m.address), ("m", 1, 0));

    let a = &analysis.variables[1];
    assert_eq!(a.name, "a");
    assert_eq!(a.procedure, "f");
    assert_eq!(a.kind, VarKind::Parameter);
    assert_eq!(a.level, 2);
    assert_eq!(a.address, 1);
    assert!(a.declared, "the local declaration promotes the parameter");

    let b = &analysis.variables[2];
    assert_eq!((b.name.as_str(), b.level, b.address), ("b", 2, 2));

    assert_eq!(analysis.procedures.len(), 1);
    let f = &analysis.procedures[0];
    assert_eq!(f.name, "f");
    assert_eq!(f.return_type, "integer");
    assert_eq!(f.level, 2);
    assert_eq!(f.first_variable_address, 1);
    assert_eq!(f.last_variable_address, 2);
}

#[test]
fn inner_variable_is_unreachable_after_the_scope_pops() {
    let analysis = analyze(
        "begin integer m;\n\
         integer function f(a);\n\
         begin integer a;\n\
         integer c;\n\
         c := 1 end;\n\
         c := m end",
    );

    assert!(!analysis.success);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].line, 6);
    assert_eq!(
        analysis.diagnostics[0].message,
        "Undefined variable or procedure 'c'"
    );
    // The record itself survives in the table; only visibility is gone.
    assert!(analysis.variables.iter().any(|v| v.name == "c"));
    assert_eq!(analysis.accepted.last().unwrap().ty, TokenType::EndOfFile);
}

#[test]
fn redeclaring_an_outer_name_in_an_inner_scope_is_permitted() {
    // Duplicate checks are scoped to the owning procedure, so an inner
    // scope may reuse an outer name; lookups stay level-based and accept
    // the first visible record, not the nearest scope.
    let analysis = analyze(
        "begin integer m;\n\
         integer function f(a);\n\
         begin integer a;\n\
         integer m;\n\
         m := 1 end;\n\
         m := 2 end",
    );

    assert!(analysis.success, "diagnostics: {:?}", analysis.diagnostics);
    let m_records: Vec<_> = analysis.variables.iter().filter(|v| v.name == "m").collect();
    assert_eq!(m_records.len(), 2);
    assert_eq!(m_records[0].level, 1);
    assert_eq!(m_records[1].level, 2);
}

#[test]
fn lookup_prefers_the_first_visible_record_over_the_nearest_scope() {
    // The outer local 'x' and the inner unpromoted parameter 'x' are both
    // visible inside the body. Registration order puts the outer record
    // first, so the use resolves to it cleanly; nearest-scope resolution
    // would hit the unpromoted parameter and complain that 'x' has not
    // been declared.
    let analysis = analyze(
        "begin integer x;\n\
         integer function f(x);\n\
         begin integer b;\n\
         b := x end;\n\
         x := 1 end",
    );

    assert!(analysis.success, "diagnostics: {:?}", analysis.diagnostics);
    assert!(analysis.diagnostics.is_empty());

    // The parameter record is still there, still unpromoted; it just
    // never won the lookup.
    let parameter = analysis
        .variables
        .iter()
        .find(|v| v.name == "x" && v.kind == VarKind::Parameter)
        .unwrap();
    assert_eq!(parameter.level, 2);
    assert!(!parameter.declared);
}

#[test]
fn duplicate_procedure_at_one_level_keeps_one_record_but_parsing_continues() {
    let analysis = analyze(
        "begin integer x;\n\
         integer function f(a);\n\
         begin integer a; a := 1 end;\n\
         integer function f(b);\n\
         begin integer b; b := 2 end;\n\
         x := 1 end",
    );

    assert!(!analysis.success);
    assert_eq!(analysis.procedures.len(), 1);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].line, 4);
    assert_eq!(
        analysis.diagnostics[0].message,
        "Procedure 'f' has already been declared"
    );
    // The duplicate's body still parsed in its own scope.
    assert_eq!(analysis.accepted.last().unwrap().ty, TokenType::EndOfFile);
}

#[test]
fn using_an_unpromoted_parameter_is_reported_but_found() {
    let analysis = analyze(
        "begin integer x;\n\
         integer function f(a);\n\
         begin integer b;\n\
         b := a end;\n\
         x := 1 end",
    );

    assert!(!analysis.success);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].line, 4);
    assert_eq!(
        analysis.diagnostics[0].message,
        "Variable 'a' has not been declared"
    );

    let a = analysis.variables.iter().find(|v| v.name == "a").unwrap();
    assert_eq!(a.kind, VarKind::Parameter);
    assert!(!a.declared);
}

#[test]
fn parameter_promotion_reuses_the_slot() {
    let analysis =
        analyze("begin integer x; integer function f(n); begin integer n; n := 1 end; x := f(2) end");

    assert!(analysis.success, "diagnostics: {:?}", analysis.diagnostics);
    let n_records: Vec<_> = analysis.variables.iter().filter(|v| v.name == "n").collect();
    assert_eq!(n_records.len(), 1);
    assert_eq!(n_records[0].kind, VarKind::Parameter);
    assert!(n_records[0].declared);
}

#[test]
fn invalid_relational_operator_recovers() {
    let analysis = analyze("begin integer x; if x := 1 then x := 1 else x := 2 end");

    assert!(!analysis.success);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(
        analysis.diagnostics[0].message,
        ":= is not a valid operator"
    );
    assert_eq!(analysis.accepted.last().unwrap().ty, TokenType::EndOfFile);
}

#[test]
fn well_formed_condition_parses_cleanly() {
    let analysis = analyze("begin integer x; if x = 1 then x := 2 else x := 3 end");
    assert!(analysis.success, "diagnostics: {:?}", analysis.diagnostics);
}

#[test]
fn missing_right_parenthesis_uses_the_dedicated_message() {
    let analysis = analyze("begin integer x; read(x; x := 1 end");

    assert!(!analysis.success);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].message, "Unmatched '('");
}

#[test]
fn mismatched_token_gets_the_generic_expect_message() {
    let analysis = analyze("begin integer x x := 1 end");

    assert!(!analysis.success);
    assert_eq!(analysis.diagnostics.len(), 2);
    assert_eq!(
        analysis.diagnostics[0].message,
        "Expect ';', but got 'x'"
    );
    // The error-tolerant consume swallowed 'x', leaving ':=' to open an
    // execution, which is unrecoverable.
    assert_eq!(
        analysis.diagnostics[1].message,
        "Execution cannot begin with ':=' [FATAL]"
    );
}
