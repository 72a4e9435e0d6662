//! Renders a syntax tree back to Yul source.
//!
//! Output is canonical rather than faithful: comments and original spacing
//! are gone, nested blocks are indented by four spaces and string literals
//! are re-escaped. Parsing the printed text with the same dialect yields a
//! tree equal to the input apart from spans.

use crate::ast::{
    Assignment, Block, Case, Expression, ForLoop, FunctionCall, FunctionDefinition, If, Literal,
    LiteralKind, Statement, Switch, TypedName, VariableDeclaration,
};
use std::fmt::Write;

const INDENT: &str = "    ";

/// Stateless Yul pretty-printer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsmPrinter;

impl AsmPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn block(&self, block: &Block) -> String {
        if block.statements.is_empty() {
            return "{ }".to_string();
        }

        let mut out = String::from("{");
        for statement in &block.statements {
            out.push('\n');
            out.push_str(INDENT);
            out.push_str(&indent(&self.statement(statement)));
        }
        out.push_str("\n}");
        out
    }

    pub fn statement(&self, statement: &Statement) -> String {
        match statement {
            Statement::Block(block) => self.block(block),
            Statement::If(node) => self.if_statement(node),
            Statement::Switch(node) => self.switch(node),
            Statement::ForLoop(node) => self.for_loop(node),
            Statement::Break(_) => "break".to_string(),
            Statement::Continue(_) => "continue".to_string(),
            Statement::Leave(_) => "leave".to_string(),
            Statement::Expression(node) => self.expression(&node.expression),
            Statement::VariableDeclaration(node) => self.variable_declaration(node),
            Statement::FunctionDefinition(node) => self.function_definition(node),
            Statement::Assignment(node) => self.assignment(node),
        }
    }

    pub fn expression(&self, expression: &Expression) -> String {
        match expression {
            Expression::FunctionCall(call) => self.function_call(call),
            Expression::Identifier(identifier) => identifier.name.to_string(),
            Expression::Literal(literal) => self.literal(literal),
        }
    }

    pub fn literal(&self, literal: &Literal) -> String {
        let mut out = match literal.kind {
            LiteralKind::Number | LiteralKind::Boolean => literal.value.to_string(),
            LiteralKind::String => quote(&literal.value),
        };
        if let Some(ty) = &literal.ty {
            out.push(':');
            out.push_str(ty);
        }
        out
    }

    pub fn typed_name(&self, name: &TypedName) -> String {
        match &name.ty {
            Some(ty) => format!("{}:{}", name.name, ty),
            None => name.name.to_string(),
        }
    }

    fn function_call(&self, call: &FunctionCall) -> String {
        let arguments: Vec<String> = call.arguments.iter().map(|a| self.expression(a)).collect();
        format!("{}({})", call.function_name.name, arguments.join(", "))
    }

    fn if_statement(&self, node: &If) -> String {
        format!(
            "if {} {}",
            self.expression(&node.condition),
            self.block(&node.body)
        )
    }

    fn switch(&self, node: &Switch) -> String {
        let mut out = format!("switch {}", self.expression(&node.expression));
        for case in &node.cases {
            out.push('\n');
            out.push_str(&self.case(case));
        }
        out
    }

    fn case(&self, case: &Case) -> String {
        match &case.value {
            Some(value) => format!("case {} {}", self.literal(value), self.block(&case.body)),
            None => format!("default {}", self.block(&case.body)),
        }
    }

    fn for_loop(&self, node: &ForLoop) -> String {
        format!(
            "for {} {} {}\n{}",
            self.block(&node.pre),
            self.expression(&node.condition),
            self.block(&node.post),
            self.block(&node.body)
        )
    }

    fn variable_declaration(&self, node: &VariableDeclaration) -> String {
        let mut out = format!("let {}", self.typed_names(&node.variables));
        if let Some(value) = &node.value {
            let _ = write!(out, " := {}", self.expression(value));
        }
        out
    }

    fn function_definition(&self, node: &FunctionDefinition) -> String {
        let mut out = format!(
            "function {}({})",
            node.name,
            self.typed_names(&node.parameters)
        );
        if !node.return_variables.is_empty() {
            let _ = write!(out, " -> {}", self.typed_names(&node.return_variables));
        }
        out.push(' ');
        out.push_str(&self.block(&node.body));
        out
    }

    fn assignment(&self, node: &Assignment) -> String {
        let targets: Vec<&str> = node.variable_names.iter().map(|i| i.name.as_str()).collect();
        format!("{} := {}", targets.join(", "), self.expression(&node.value))
    }

    fn typed_names(&self, names: &[TypedName]) -> String {
        let names: Vec<String> = names.iter().map(|n| self.typed_name(n)).collect();
        names.join(", ")
    }
}

fn indent(text: &str) -> String {
    text.replace('\n', &format!("\n{INDENT}"))
}

/// Quote and escape a string literal value.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
