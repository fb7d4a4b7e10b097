/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:     parser/expressions.rs
 * Purpose:  Arithmetic-expression and condition productions of the
 *           MINIPAS grammar.
 *
 * Parsing order follows strict precedence:
 *
 *   expr → term ('-' term)*
 *   term → factor ('*' factor)*
 *   factor → CONSTANT | var | procName '(' expr ')'
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

use crate::error::ParseResult;
use crate::lexer::token::TokenType;
use crate::parser::parser::Parser;

/// The six relational operators accepted between condition operands.
const RELATIONAL_OPERATORS: [TokenType; 6] = [
    TokenType::Equal,
    TokenType::NotEqual,
    TokenType::Less,
    TokenType::LessOrEqual,
    TokenType::Greater,
    TokenType::GreaterOrEqual,
];

impl Parser {
    /// expr → term ('-' term)*
    pub(crate) fn parse_arithmetic_expression(&mut self) -> ParseResult<()> {
        self.parse_term()?;
        while self.has_type(TokenType::Subtract) {
            self.expect(TokenType::Subtract)?;
            self.parse_term()?;
        }
        Ok(())
    }

    /// term → factor ('*' factor)*
    fn parse_term(&mut self) -> ParseResult<()> {
        self.parse_factor()?;
        while self.has_type(TokenType::Multiply) {
            self.expect(TokenType::Multiply)?;
            self.parse_factor()?;
        }
        Ok(())
    }

    /// factor → CONSTANT | var | procCall
    ///
    /// An identifier here is disambiguated by the symbol tables: a visible
    /// variable parses as a variable reference, a visible procedure as a
    /// call. Neither of those, and there is no production left to recover
    /// into — both failure paths are fatal.
    fn parse_factor(&mut self) -> ParseResult<()> {
        if self.has_type(TokenType::Constant) {
            self.expect(TokenType::Constant)?;
            return Ok(());
        }

        if self.has_type(TokenType::Identifier) {
            let name = self.current_value()?;

            if self.find_variable(&name) {
                return self.parse_variable();
            }

            if self.find_procedure(&name) {
                return self.parse_procedure_call();
            }

            let token = self.consume_token()?;
            return Err(self.fatal(format!(
                "Undefined variable or procedure '{}'",
                token.value
            )));
        }

        let token = self.consume_token()?;
        Err(self.fatal(format!(
            "Expect variable, procedure or constant, but got '{}'",
            token.value
        )))
    }

    /// procCall → procName '(' expr ')'
    fn parse_procedure_call(&mut self) -> ParseResult<()> {
        self.parse_procedure_name()?;
        self.expect(TokenType::LeftParen)?;
        self.parse_arithmetic_expression()?;
        self.expect_msg(TokenType::RightParen, "Unmatched '('")?;
        Ok(())
    }

    /// condition → expr relop expr
    pub(crate) fn parse_condition_expression(&mut self) -> ParseResult<()> {
        self.parse_arithmetic_expression()?;
        self.parse_operator()?;
        self.parse_arithmetic_expression()
    }

    /// relop → '=' | '<>' | '<' | '<=' | '>' | '>='
    ///
    /// A non-relational token is consumed with a recoverable diagnostic;
    /// the condition parse then carries on at the right operand.
    fn parse_operator(&mut self) -> ParseResult<()> {
        for op in RELATIONAL_OPERATORS {
            if self.has_type(op) {
                self.expect(op)?;
                return Ok(());
            }
        }

        let token = self.consume_token()?;
        self.report(format!("{} is not a valid operator", token.value));
        Ok(())
    }
}
