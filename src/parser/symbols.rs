/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:     parser/symbols.rs
 * Purpose:  Symbol tables for variables and procedures, plus the
 *           scope-resolution operations the grammar invokes at every
 *           declaration and identifier use.
 *
 * Scoping model: a symbol declared at level L is visible to any scope
 * whose nesting depth is >= L. Lookups scan the flat table in
 * registration order and accept the first record passing the visibility
 * test, so redeclaration across levels is NOT resolved nearest-scope
 * first. Duplicate checks compare only within the same owning scope, so
 * shadowing across levels is permitted.
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

use crate::parser::parser::Parser;
use serde::Serialize;
use std::fmt;

/// Sentinel for "this procedure has no variables yet".
const NO_ADDRESS: i32 = -1;

/// How a variable entered its owning procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VarKind {
    /// Declared in the procedure's declaration block.
    Local,

    /// Introduced by the procedure's parameter clause. Starts out
    /// undeclared and is promoted when a matching local declaration
    /// is seen.
    Parameter,
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarKind::Local => write!(f, "local"),
            VarKind::Parameter => write!(f, "parameter"),
        }
    }
}

/// One record of the variable table.
///
/// Records are never deleted: the complete table, across all procedures,
/// survives to the end of the run for reporting — even for symbols whose
/// scope has long since popped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub name: String,

    /// Owning procedure; "main" for top-level declarations.
    pub procedure: String,

    pub kind: VarKind,

    /// The language has a single built-in type.
    pub value_type: String,

    /// Nesting depth of the declaring scope (1 = main).
    pub level: usize,

    /// Offset within the flat variable address space.
    pub address: i32,

    /// False only for parameters awaiting promotion.
    pub declared: bool,
}

/// One record of the procedure table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Procedure {
    pub name: String,

    /// The language has a single built-in return type.
    pub return_type: String,

    /// Nesting depth of the procedure's *body* (declaring depth + 1).
    pub level: usize,

    /// Bounds of the contiguous address range of this procedure's
    /// variables; -1 until the first variable is registered.
    pub first_variable_address: i32,
    pub last_variable_address: i32,
}

impl Parser {
    /// Name of the innermost scope, the owner of new declarations.
    pub(crate) fn current_scope(&self) -> &str {
        self.call_stack.last().map(String::as_str).unwrap_or("main")
    }

    /// Registers a variable declaration in the current scope.
    ///
    /// Declaring a name that matches a parameter of the owning procedure
    /// does not create a new record: the parameter and the local are the
    /// same logical slot, and the declaration promotes the parameter to
    /// declared. The promotion mutates the authoritative table entry.
    pub(crate) fn register_variable(&mut self, name: &str) {
        let line = self.line;
        let depth = self.call_stack.len();
        let owner = self.current_scope().to_string();

        if let Some(parameter) = find_parameter(&mut self.variables, name, &owner) {
            if parameter.declared {
                // The slot was already claimed by an earlier declaration.
                self.diagnostics
                    .report(line, format!("Variable '{}' has already been declared", name));
            } else {
                parameter.declared = true;
            }
            return;
        }

        if self
            .variables
            .iter()
            .any(|v| v.kind == VarKind::Local && v.name == name && v.procedure == owner)
        {
            self.report(format!("Variable '{}' has already been declared", name));
            return;
        }

        let address = self.next_address;
        self.next_address += 1;

        self.variables.push(Variable {
            name: name.to_string(),
            procedure: owner,
            kind: VarKind::Local,
            value_type: "integer".to_string(),
            level: depth,
            address,
            declared: true,
        });

        self.update_procedure_bounds(address);
    }

    /// Registers a procedure parameter in the current scope.
    ///
    /// The parameter starts out `declared = false`; it becomes usable only
    /// once the body declares it (see `register_variable`).
    pub(crate) fn register_parameter(&mut self, name: &str) {
        let depth = self.call_stack.len();
        let owner = self.current_scope().to_string();

        if self
            .variables
            .iter()
            .any(|v| v.kind == VarKind::Parameter && v.name == name && v.procedure == owner)
        {
            self.report(format!("Parameter '{}' has already been declared", name));
            return;
        }

        let address = self.next_address;
        self.next_address += 1;

        self.variables.push(Variable {
            name: name.to_string(),
            procedure: owner,
            kind: VarKind::Parameter,
            value_type: "integer".to_string(),
            level: depth,
            address,
            declared: false,
        });

        self.update_procedure_bounds(address);
    }

    /// Resolves a variable use in the current scope.
    ///
    /// A hit is any record whose name matches and whose level does not
    /// exceed the current nesting depth; the first such record wins. A
    /// hit on an undeclared parameter emits "has not been declared" but
    /// still counts as found, so callers can proceed without cascading
    /// errors. Returns false only when nothing matches at all — the
    /// caller then owns the "undefined" diagnostic.
    pub(crate) fn find_variable(&mut self, name: &str) -> bool {
        let depth = self.call_stack.len();
        let line = self.line;

        if let Some(variable) = self
            .variables
            .iter()
            .find(|v| v.name == name && v.level <= depth)
        {
            if !variable.declared {
                self.diagnostics
                    .report(line, format!("Variable '{}' has not been declared", name));
            }
            return true;
        }
        false
    }

    /// Registers a procedure header and enters its scope.
    ///
    /// A duplicate name at the same level skips the table append but the
    /// scope push still happens, so descent into the body continues and
    /// the matching pop at body end stays balanced.
    pub(crate) fn register_procedure(&mut self, name: &str) {
        let level = self.call_stack.len() + 1;

        if self
            .procedures
            .iter()
            .any(|p| p.name == name && p.level == level)
        {
            self.report(format!("Procedure '{}' has already been declared", name));
        } else {
            self.procedures.push(Procedure {
                name: name.to_string(),
                return_type: "integer".to_string(),
                level,
                first_variable_address: NO_ADDRESS,
                last_variable_address: NO_ADDRESS,
            });
        }

        self.call_stack.push(name.to_string());
    }

    /// Resolves a procedure use: any record whose name matches and whose
    /// level does not exceed the current depth + 1.
    pub(crate) fn find_procedure(&self, name: &str) -> bool {
        let depth = self.call_stack.len();
        self.procedures
            .iter()
            .any(|p| p.name == name && p.level <= depth + 1)
    }

    /// Widens the owning procedure's variable address range to cover the
    /// freshly assigned `address`. "main" has no procedure record, so the
    /// update is a no-op at the top level.
    fn update_procedure_bounds(&mut self, address: i32) {
        let owner = self.current_scope().to_string();
        if let Some(procedure) = self.procedures.iter_mut().find(|p| p.name == owner) {
            if procedure.first_variable_address == NO_ADDRESS {
                procedure.first_variable_address = address;
            }
            procedure.last_variable_address = address;
        }
    }
}

/// Looks up the owning procedure's parameter by name, yielding a mutable
/// handle into the authoritative table so promotion is never applied to a
/// detached copy.
fn find_parameter<'a>(
    variables: &'a mut [Variable],
    name: &str,
    owner: &str,
) -> Option<&'a mut Variable> {
    variables
        .iter_mut()
        .find(|v| v.kind == VarKind::Parameter && v.name == name && v.procedure == owner)
}
