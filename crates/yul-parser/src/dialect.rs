//! Dialects: which language flavour is parsed and which names are builtins.
//!
//! A dialect is plain data. The parser reads the flavour to pick typed or
//! untyped literal/name rules and error wording, and asks the builtin map
//! whether a name is reserved.

use crate::instructions::{Instruction, InstructionTable};
use indexmap::IndexMap;
use yul_ast::YulString;

/// Language flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AsmFlavour {
    /// Inline assembly with instructions allowed in any position.
    Loose,
    /// Inline assembly restricted to functional instruction style.
    Strict,
    /// Typed Yul: every literal and declared name carries `:type`.
    Yul,
}

impl AsmFlavour {
    /// Whether literals and typed names require a `:type` annotation.
    pub fn is_typed(self) -> bool {
        self == AsmFlavour::Yul
    }
}

/// A reserved function provided by the dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinFunction {
    pub name: YulString,
    pub parameters: usize,
    pub returns: usize,
    /// Opcode backing this builtin, for instruction-based dialects.
    pub instruction: Option<Instruction>,
}

/// Flavour plus builtin registry.
#[derive(Debug, Clone)]
pub struct Dialect {
    pub flavour: AsmFlavour,
    builtins: IndexMap<YulString, BuiltinFunction>,
}

impl Dialect {
    /// Dialect with the given flavour and no builtins.
    pub fn new(flavour: AsmFlavour) -> Self {
        Self {
            flavour,
            builtins: IndexMap::new(),
        }
    }

    /// Typed Yul without builtins.
    pub fn yul() -> Self {
        Self::new(AsmFlavour::Yul)
    }

    /// Untyped assembly where every instruction is a builtin.
    pub fn strict_assembly(instructions: &InstructionTable) -> Self {
        Self::with_instructions(AsmFlavour::Strict, instructions)
    }

    /// Loose assembly where every instruction is a builtin.
    pub fn loose_assembly(instructions: &InstructionTable) -> Self {
        Self::with_instructions(AsmFlavour::Loose, instructions)
    }

    fn with_instructions(flavour: AsmFlavour, instructions: &InstructionTable) -> Self {
        let builtins = instructions
            .instructions()
            .iter()
            .map(|(name, &instruction)| {
                let info = instruction.info();
                let name = YulString::new(name);
                let builtin = BuiltinFunction {
                    name: name.clone(),
                    parameters: info.args,
                    returns: info.ret,
                    instruction: Some(instruction),
                };
                (name, builtin)
            })
            .collect();
        Self { flavour, builtins }
    }

    /// Add or replace a builtin.
    pub fn with_builtin(mut self, builtin: BuiltinFunction) -> Self {
        self.builtins.insert(builtin.name.clone(), builtin);
        self
    }

    /// Look up a builtin by name.
    pub fn builtin(&self, name: &str) -> Option<&BuiltinFunction> {
        self.builtins.get(name)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    /// All builtins in registration order.
    pub fn builtins(&self) -> impl Iterator<Item = &BuiltinFunction> {
        self.builtins.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yul_has_no_builtins() {
        let dialect = Dialect::yul();
        assert!(dialect.flavour.is_typed());
        assert!(!dialect.is_builtin("add"));
    }

    #[test]
    fn test_strict_assembly_builtins_follow_instructions() {
        let table = InstructionTable::new();
        let dialect = Dialect::strict_assembly(&table);
        assert!(!dialect.flavour.is_typed());

        let mstore = dialect.builtin("mstore").expect("mstore is a builtin");
        assert_eq!(mstore.parameters, 2);
        assert_eq!(mstore.returns, 0);
        assert_eq!(mstore.instruction, Some(Instruction::MStore));

        assert!(dialect.is_builtin("return"));
        assert!(dialect.is_builtin("sha3"));
        assert!(!dialect.is_builtin("jumpdest"));
        assert!(!dialect.is_builtin("push1"));
    }

    #[test]
    fn test_with_builtin() {
        let dialect = Dialect::yul().with_builtin(BuiltinFunction {
            name: "add".into(),
            parameters: 2,
            returns: 1,
            instruction: None,
        });
        assert_eq!(dialect.builtins().count(), 1);
        assert!(dialect.is_builtin("add"));
    }
}
