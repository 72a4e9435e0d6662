//! EVM instruction set and the mnemonic lookup tables.
//!
//! [`InstructionTable`] is built once by the caller and shared by reference
//! (or behind an `Arc`) with every dialect that needs it.

use indexmap::IndexMap;

/// Stack signature and canonical upper-case mnemonic of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionInfo {
    pub name: &'static str,
    /// Stack items consumed
    pub args: usize,
    /// Stack items produced
    pub ret: usize,
}

macro_rules! instructions {
    ($($variant:ident = $opcode:literal, $name:literal, $args:literal, $ret:literal;)*) => {
        /// An EVM opcode.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        #[repr(u8)]
        pub enum Instruction {
            $($variant = $opcode,)*
        }

        impl Instruction {
            /// Every instruction in opcode order.
            pub const ALL: &'static [Instruction] = &[$(Instruction::$variant,)*];

            pub fn info(self) -> InstructionInfo {
                match self {
                    $(Instruction::$variant => InstructionInfo {
                        name: $name,
                        args: $args,
                        ret: $ret,
                    },)*
                }
            }
        }
    };
}

instructions! {
    Stop = 0x00, "STOP", 0, 0;
    Add = 0x01, "ADD", 2, 1;
    Mul = 0x02, "MUL", 2, 1;
    Sub = 0x03, "SUB", 2, 1;
    Div = 0x04, "DIV", 2, 1;
    SDiv = 0x05, "SDIV", 2, 1;
    Mod = 0x06, "MOD", 2, 1;
    SMod = 0x07, "SMOD", 2, 1;
    AddMod = 0x08, "ADDMOD", 3, 1;
    MulMod = 0x09, "MULMOD", 3, 1;
    Exp = 0x0a, "EXP", 2, 1;
    SignExtend = 0x0b, "SIGNEXTEND", 2, 1;

    Lt = 0x10, "LT", 2, 1;
    Gt = 0x11, "GT", 2, 1;
    SLt = 0x12, "SLT", 2, 1;
    SGt = 0x13, "SGT", 2, 1;
    Eq = 0x14, "EQ", 2, 1;
    IsZero = 0x15, "ISZERO", 1, 1;
    And = 0x16, "AND", 2, 1;
    Or = 0x17, "OR", 2, 1;
    Xor = 0x18, "XOR", 2, 1;
    Not = 0x19, "NOT", 1, 1;
    Byte = 0x1a, "BYTE", 2, 1;
    Shl = 0x1b, "SHL", 2, 1;
    Shr = 0x1c, "SHR", 2, 1;
    Sar = 0x1d, "SAR", 2, 1;

    Keccak256 = 0x20, "KECCAK256", 2, 1;

    Address = 0x30, "ADDRESS", 0, 1;
    Balance = 0x31, "BALANCE", 1, 1;
    Origin = 0x32, "ORIGIN", 0, 1;
    Caller = 0x33, "CALLER", 0, 1;
    CallValue = 0x34, "CALLVALUE", 0, 1;
    CallDataLoad = 0x35, "CALLDATALOAD", 1, 1;
    CallDataSize = 0x36, "CALLDATASIZE", 0, 1;
    CallDataCopy = 0x37, "CALLDATACOPY", 3, 0;
    CodeSize = 0x38, "CODESIZE", 0, 1;
    CodeCopy = 0x39, "CODECOPY", 3, 0;
    GasPrice = 0x3a, "GASPRICE", 0, 1;
    ExtCodeSize = 0x3b, "EXTCODESIZE", 1, 1;
    ExtCodeCopy = 0x3c, "EXTCODECOPY", 4, 0;
    ReturnDataSize = 0x3d, "RETURNDATASIZE", 0, 1;
    ReturnDataCopy = 0x3e, "RETURNDATACOPY", 3, 0;
    ExtCodeHash = 0x3f, "EXTCODEHASH", 1, 1;

    BlockHash = 0x40, "BLOCKHASH", 1, 1;
    Coinbase = 0x41, "COINBASE", 0, 1;
    Timestamp = 0x42, "TIMESTAMP", 0, 1;
    Number = 0x43, "NUMBER", 0, 1;
    Difficulty = 0x44, "DIFFICULTY", 0, 1;
    GasLimit = 0x45, "GASLIMIT", 0, 1;
    ChainId = 0x46, "CHAINID", 0, 1;
    SelfBalance = 0x47, "SELFBALANCE", 0, 1;

    Pop = 0x50, "POP", 1, 0;
    MLoad = 0x51, "MLOAD", 1, 1;
    MStore = 0x52, "MSTORE", 2, 0;
    MStore8 = 0x53, "MSTORE8", 2, 0;
    SLoad = 0x54, "SLOAD", 1, 1;
    SStore = 0x55, "SSTORE", 2, 0;
    Jump = 0x56, "JUMP", 1, 0;
    JumpI = 0x57, "JUMPI", 2, 0;
    Pc = 0x58, "PC", 0, 1;
    MSize = 0x59, "MSIZE", 0, 1;
    Gas = 0x5a, "GAS", 0, 1;
    JumpDest = 0x5b, "JUMPDEST", 0, 0;

    Push1 = 0x60, "PUSH1", 0, 1;
    Push2 = 0x61, "PUSH2", 0, 1;
    Push3 = 0x62, "PUSH3", 0, 1;
    Push4 = 0x63, "PUSH4", 0, 1;
    Push5 = 0x64, "PUSH5", 0, 1;
    Push6 = 0x65, "PUSH6", 0, 1;
    Push7 = 0x66, "PUSH7", 0, 1;
    Push8 = 0x67, "PUSH8", 0, 1;
    Push9 = 0x68, "PUSH9", 0, 1;
    Push10 = 0x69, "PUSH10", 0, 1;
    Push11 = 0x6a, "PUSH11", 0, 1;
    Push12 = 0x6b, "PUSH12", 0, 1;
    Push13 = 0x6c, "PUSH13", 0, 1;
    Push14 = 0x6d, "PUSH14", 0, 1;
    Push15 = 0x6e, "PUSH15", 0, 1;
    Push16 = 0x6f, "PUSH16", 0, 1;
    Push17 = 0x70, "PUSH17", 0, 1;
    Push18 = 0x71, "PUSH18", 0, 1;
    Push19 = 0x72, "PUSH19", 0, 1;
    Push20 = 0x73, "PUSH20", 0, 1;
    Push21 = 0x74, "PUSH21", 0, 1;
    Push22 = 0x75, "PUSH22", 0, 1;
    Push23 = 0x76, "PUSH23", 0, 1;
    Push24 = 0x77, "PUSH24", 0, 1;
    Push25 = 0x78, "PUSH25", 0, 1;
    Push26 = 0x79, "PUSH26", 0, 1;
    Push27 = 0x7a, "PUSH27", 0, 1;
    Push28 = 0x7b, "PUSH28", 0, 1;
    Push29 = 0x7c, "PUSH29", 0, 1;
    Push30 = 0x7d, "PUSH30", 0, 1;
    Push31 = 0x7e, "PUSH31", 0, 1;
    Push32 = 0x7f, "PUSH32", 0, 1;

    Dup1 = 0x80, "DUP1", 1, 2;
    Dup2 = 0x81, "DUP2", 2, 3;
    Dup3 = 0x82, "DUP3", 3, 4;
    Dup4 = 0x83, "DUP4", 4, 5;
    Dup5 = 0x84, "DUP5", 5, 6;
    Dup6 = 0x85, "DUP6", 6, 7;
    Dup7 = 0x86, "DUP7", 7, 8;
    Dup8 = 0x87, "DUP8", 8, 9;
    Dup9 = 0x88, "DUP9", 9, 10;
    Dup10 = 0x89, "DUP10", 10, 11;
    Dup11 = 0x8a, "DUP11", 11, 12;
    Dup12 = 0x8b, "DUP12", 12, 13;
    Dup13 = 0x8c, "DUP13", 13, 14;
    Dup14 = 0x8d, "DUP14", 14, 15;
    Dup15 = 0x8e, "DUP15", 15, 16;
    Dup16 = 0x8f, "DUP16", 16, 17;

    Swap1 = 0x90, "SWAP1", 2, 2;
    Swap2 = 0x91, "SWAP2", 3, 3;
    Swap3 = 0x92, "SWAP3", 4, 4;
    Swap4 = 0x93, "SWAP4", 5, 5;
    Swap5 = 0x94, "SWAP5", 6, 6;
    Swap6 = 0x95, "SWAP6", 7, 7;
    Swap7 = 0x96, "SWAP7", 8, 8;
    Swap8 = 0x97, "SWAP8", 9, 9;
    Swap9 = 0x98, "SWAP9", 10, 10;
    Swap10 = 0x99, "SWAP10", 11, 11;
    Swap11 = 0x9a, "SWAP11", 12, 12;
    Swap12 = 0x9b, "SWAP12", 13, 13;
    Swap13 = 0x9c, "SWAP13", 14, 14;
    Swap14 = 0x9d, "SWAP14", 15, 15;
    Swap15 = 0x9e, "SWAP15", 16, 16;
    Swap16 = 0x9f, "SWAP16", 17, 17;

    Log0 = 0xa0, "LOG0", 2, 0;
    Log1 = 0xa1, "LOG1", 3, 0;
    Log2 = 0xa2, "LOG2", 4, 0;
    Log3 = 0xa3, "LOG3", 5, 0;
    Log4 = 0xa4, "LOG4", 6, 0;

    Create = 0xf0, "CREATE", 3, 1;
    Call = 0xf1, "CALL", 7, 1;
    CallCode = 0xf2, "CALLCODE", 7, 1;
    Return = 0xf3, "RETURN", 2, 0;
    DelegateCall = 0xf4, "DELEGATECALL", 6, 1;
    Create2 = 0xf5, "CREATE2", 4, 1;
    StaticCall = 0xfa, "STATICCALL", 6, 1;
    Revert = 0xfd, "REVERT", 2, 0;
    Invalid = 0xfe, "INVALID", 0, 0;
    SelfDestruct = 0xff, "SELFDESTRUCT", 1, 0;
}

/// Historic spellings that name the same opcode as a canonical mnemonic.
const ALIASES: &[(&str, Instruction)] = &[
    ("SHA3", Instruction::Keccak256),
    ("SUICIDE", Instruction::SelfDestruct),
];

impl Instruction {
    pub fn opcode(self) -> u8 {
        self as u8
    }

    pub fn is_push(self) -> bool {
        (Instruction::Push1.opcode()..=Instruction::Push32.opcode()).contains(&self.opcode())
    }
}

/// Mnemonic <-> opcode lookup tables.
#[derive(Debug, Clone)]
pub struct InstructionTable {
    instructions: IndexMap<String, Instruction>,
    names: IndexMap<Instruction, String>,
}

impl InstructionTable {
    /// Build both tables.
    ///
    /// Names are lower-cased. `jumpdest` and the `push` family are left out
    /// because they have no meaning as functions in assembly code.
    pub fn new() -> Self {
        let spellings = Instruction::ALL
            .iter()
            .map(|&instruction| (instruction.info().name, instruction))
            .chain(ALIASES.iter().copied());

        let mut instructions = IndexMap::new();
        for (name, instruction) in spellings {
            if instruction == Instruction::JumpDest || instruction.is_push() {
                continue;
            }
            instructions.insert(name.to_ascii_lowercase(), instruction);
        }

        let mut names: IndexMap<Instruction, String> = instructions
            .iter()
            .map(|(name, &instruction)| (instruction, name.clone()))
            .collect();
        // Opcodes with two spellings get a fixed canonical one.
        names.insert(Instruction::SelfDestruct, "selfdestruct".to_string());
        names.insert(Instruction::Keccak256, "keccak256".to_string());

        tracing::debug!(
            instructions = instructions.len(),
            "instruction table built"
        );
        Self {
            instructions,
            names,
        }
    }

    /// Lower-case mnemonic to opcode, aliases included.
    pub fn instructions(&self) -> &IndexMap<String, Instruction> {
        &self.instructions
    }

    /// Opcode to canonical lower-case mnemonic.
    pub fn instruction_names(&self) -> &IndexMap<Instruction, String> {
        &self.names
    }

    pub fn instruction(&self, name: &str) -> Option<Instruction> {
        self.instructions.get(name).copied()
    }

    pub fn name(&self, instruction: Instruction) -> Option<&str> {
        self.names.get(&instruction).map(String::as_str)
    }
}

impl Default for InstructionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcodes_are_ordered_and_unique() {
        let opcodes: Vec<u8> = Instruction::ALL.iter().map(|i| i.opcode()).collect();
        assert!(opcodes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_excludes_jumpdest_and_push() {
        let table = InstructionTable::new();
        assert_eq!(table.instruction("jumpdest"), None);
        assert_eq!(table.instruction("push1"), None);
        assert_eq!(table.instruction("push32"), None);
        assert!(!table
            .instructions()
            .values()
            .any(|i| i.is_push() || *i == Instruction::JumpDest));
    }

    #[test]
    fn test_names_are_lowercase() {
        let table = InstructionTable::new();
        assert_eq!(table.instruction("add"), Some(Instruction::Add));
        assert_eq!(table.instruction("ADD"), None);
        assert_eq!(table.instruction("mstore8"), Some(Instruction::MStore8));
        assert_eq!(table.instruction("dup16"), Some(Instruction::Dup16));
    }

    #[test]
    fn test_aliases_resolve_to_same_opcode() {
        let table = InstructionTable::new();
        assert_eq!(table.instruction("sha3"), Some(Instruction::Keccak256));
        assert_eq!(table.instruction("keccak256"), Some(Instruction::Keccak256));
        assert_eq!(table.instruction("suicide"), Some(Instruction::SelfDestruct));
        assert_eq!(table.instruction("selfdestruct"), Some(Instruction::SelfDestruct));
    }

    #[test]
    fn test_inverse_uses_canonical_spelling() {
        let table = InstructionTable::new();
        assert_eq!(table.name(Instruction::Keccak256), Some("keccak256"));
        assert_eq!(table.name(Instruction::SelfDestruct), Some("selfdestruct"));
        assert_eq!(table.name(Instruction::Add), Some("add"));
        assert_eq!(table.name(Instruction::Push1), None);
    }

    #[test]
    fn test_inverse_covers_every_listed_opcode() {
        let table = InstructionTable::new();
        for instruction in table.instructions().values() {
            assert!(table.name(*instruction).is_some(), "{instruction:?} has no name");
        }
    }
}
