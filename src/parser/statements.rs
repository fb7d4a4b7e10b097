/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:     parser/statements.rs
 * Purpose:  Declaration and executable-statement productions of the
 *           MINIPAS grammar.
 *
 * Grammar covered here:
 *
 *   declarations := declaration+            (repeat while next is 'integer')
 *   declaration  := 'integer' declarator ';'
 *   declarator   := IDENT
 *                 | 'function' IDENT '(' IDENT ')' ';' body
 *   executions   := execution (';' execution)*
 *   execution    := 'read' '(' var ')'
 *                 | 'write' '(' var ')'
 *                 | IDENT ':=' expr
 *                 | 'if' condition 'then' execution 'else' execution
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

impl Parser {
    /// declarations → declaration+
    pub(crate) fn parse_declarations(&mut self) -> ParseResult<()> {
        self.parse_declaration()?;
        while self.has_type(TokenType::Integer) {
            self.parse_declaration()?;
        }
        Ok(())
    }

    /// declaration → 'integer' declarator ';'
    ///
    /// The first call inside a body is also the "does this scope declare
    /// anything at all" check: a body that opens with something other than
    /// `integer` is structurally broken, and continuing would misparse the
    /// whole scope, so this one is fatal and consumes nothing.
    fn parse_declaration(&mut self) -> ParseResult<()> {
        if !self.has_type(TokenType::Integer) {
            return Err(self.fatal(
                "Every program or procedure should have at least one declaration",
            ));
        }

        self.expect(TokenType::Integer)?;
        self.parse_declarator()?;
        self.expect(TokenType::Semicolon)?;
        Ok(())
    }

    /// declarator → IDENT | procedure declaration
    ///
    /// The dispatch commits on the current token: a plain identifier is a
    /// variable declaration, `function` opens a procedure declaration, and
    /// anything else cannot be recovered into either production.
    fn parse_declarator(&mut self) -> ParseResult<()> {
        if self.has_type(TokenType::Identifier) {
            return self.parse_variable_declaration();
        }

        if self.has_type(TokenType::Function) {
            return self.parse_procedure_declaration();
        }

        let token = self.consume_token()?;
        Err(self.fatal(format!("'{}' is not a valid variable name", token.value)))
    }

    /// Declares one variable in the current scope.
    fn parse_variable_declaration(&mut self) -> ParseResult<()> {
        let token = self.expect(TokenType::Identifier)?;
        self.register_variable(&token.value);
        Ok(())
    }

    /// Consumes a variable reference and resolves it against the tables.
    pub(crate) fn parse_variable(&mut self) -> ParseResult<()> {
        let token = self.expect(TokenType::Identifier)?;
        if !self.find_variable(&token.value) {
            self.report(format!("Undefined variable '{}'", token.value));
        }
        Ok(())
    }

    /// procedure declaration →
    ///     'function' IDENT '(' IDENT ')' ';' 'begin' ... 'end'
    fn parse_procedure_declaration(&mut self) -> ParseResult<()> {
        self.expect(TokenType::Function)?;
        self.parse_procedure_name_declaration()?;
        self.expect(TokenType::LeftParen)?;
        self.parse_parameter_declaration()?;
        self.expect_msg(TokenType::RightParen, "Unmatched '('")?;
        self.expect(TokenType::Semicolon)?;
        self.parse_procedure_body()
    }

    /// Registers the procedure header. This is also the scope push: the
    /// parameter clause and the body both belong to the new scope.
    fn parse_procedure_name_declaration(&mut self) -> ParseResult<()> {
        let token = self.expect(TokenType::Identifier)?;
        self.register_procedure(&token.value);
        Ok(())
    }

    /// Consumes a procedure reference and resolves it against the tables.
    pub(crate) fn parse_procedure_name(&mut self) -> ParseResult<()> {
        let token = self.expect(TokenType::Identifier)?;
        if !self.find_procedure(&token.value) {
            self.report(format!("Undefined procedure '{}'", token.value));
        }
        Ok(())
    }

    /// Registers the single parameter of a procedure header.
    fn parse_parameter_declaration(&mut self) -> ParseResult<()> {
        let token = self.expect(TokenType::Identifier)?;
        self.register_parameter(&token.value);
        Ok(())
    }

    /// body → 'begin' declarations executions 'end'
    ///
    /// The matching scope push happened at the header; the pop here must
    /// run exactly once per procedure, recoverable errors included.
    fn parse_procedure_body(&mut self) -> ParseResult<()> {
        self.expect(TokenType::Begin)?;
        self.parse_declarations()?;
        self.parse_executions()?;
        self.expect(TokenType::End)?;

        self.call_stack.pop();
        Ok(())
    }

    /// executions → execution (';' execution)*
    pub(crate) fn parse_executions(&mut self) -> ParseResult<()> {
        self.parse_execution()?;
        while self.has_type(TokenType::Semicolon) {
            self.expect(TokenType::Semicolon)?;
            self.parse_execution()?;
        }
        Ok(())
    }

    /// Dispatches one executable statement on the current token.
    fn parse_execution(&mut self) -> ParseResult<()> {
        // ------------------------------------------------------------
        // I/O STATEMENTS
        // ------------------------------------------------------------
        if self.has_type(TokenType::Read) {
            return self.parse_read();
        }

        if self.has_type(TokenType::Write) {
            return self.parse_write();
        }

        // ------------------------------------------------------------
        // ASSIGNMENT (variable or procedure return value)
        // ------------------------------------------------------------
        if self.has_type(TokenType::Identifier) {
            return self.parse_assignment();
        }

        // ------------------------------------------------------------
        // CONDITIONAL
        // ------------------------------------------------------------
        if self.has_type(TokenType::If) {
            return self.parse_condition();
        }

        // A declaration here means the declaration block ended too early.
        if self.has_type(TokenType::Integer) {
            self.consume_token()?;
            return Err(self.fatal(
                "Please move all declarations to the beginning of the procedure",
            ));
        }

        let token = self.consume_token()?;
        Err(self.fatal(format!("Execution cannot begin with '{}'", token.value)))
    }

    /// execution → 'read' '(' var ')'
    fn parse_read(&mut self) -> ParseResult<()> {
        self.expect(TokenType::Read)?;
        self.expect(TokenType::LeftParen)?;
        self.parse_variable()?;
        self.expect_msg(TokenType::RightParen, "Unmatched '('")?;
        Ok(())
    }

    /// execution → 'write' '(' var ')'
    fn parse_write(&mut self) -> ParseResult<()> {
        self.expect(TokenType::Write)?;
        self.expect(TokenType::LeftParen)?;
        self.parse_variable()?;
        self.expect_msg(TokenType::RightParen, "Unmatched '('")?;
        Ok(())
    }

    /// execution → IDENT ':=' expr
    ///
    /// The target is resolved before committing to a production: a
    /// visible variable parses as a variable reference, a visible
    /// procedure as a return-value assignment. An identifier matching
    /// neither is consumed with a diagnostic and the assignment parse
    /// continues, so one bad name doesn't take the statement down.
    fn parse_assignment(&mut self) -> ParseResult<()> {
        let name = self.current_value()?;

        if self.find_variable(&name) {
            self.parse_variable()?;
        } else if self.find_procedure(&name) {
            self.parse_procedure_name()?;
        } else {
            let token = self.consume_token()?;
            self.report(format!(
                "Undefined variable or procedure '{}'",
                token.value
            ));
        }

        self.expect(TokenType::Assign)?;
        self.parse_arithmetic_expression()
    }

    /// execution → 'if' condition 'then' execution 'else' execution
    fn parse_condition(&mut self) -> ParseResult<()> {
        self.expect(TokenType::If)?;
        self.parse_condition_expression()?;
        self.expect(TokenType::Then)?;
        self.parse_execution()?;
        self.expect(TokenType::Else)?;
        self.parse_execution()
    }
}
