//! Data model for laid-out control-flow graphs
//!
//! Everything in this module is a read-only snapshot produced by the external
//! disassembly and layout engine. Coordinates and dimensions are in abstract
//! layout units (see [`crate::geometry`] for the pixel mapping) and a graph
//! handed to the renderer has already finished layout.

use serde::Deserialize;

/// A 2D point in abstract layout units
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Highlight tag attached to a basic block by the analysis engine
///
/// Unrecognized or absent highlight names decode as `None`; a highlight is a
/// styling hint, never a hard input requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum HighlightState {
    #[default]
    None,
    Green,
    Red,
    Blue,
    Cyan,
    LightCyan,
    Orange,
    Yellow,
    Magenta,
}

impl From<String> for HighlightState {
    fn from(name: String) -> Self {
        match name.as_str() {
            "green" => HighlightState::Green,
            "red" => HighlightState::Red,
            "blue" => HighlightState::Blue,
            "cyan" => HighlightState::Cyan,
            "lightCyan" => HighlightState::LightCyan,
            "orange" => HighlightState::Orange,
            "yellow" => HighlightState::Yellow,
            "magenta" => HighlightState::Magenta,
            _ => HighlightState::None,
        }
    }
}

/// Lexical classification of one piece of disassembled instruction text
///
/// The kind selects the style class of the emitted span. Kinds the style
/// sheet does not know decode as `Text` and render with the default text
/// style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TokenKind {
    Text,
    Instruction,
    Register,
    Integer,
    PossibleAddress,
    CodeSymbol,
    DataSymbol,
    Annotation,
    Import,
    StackVariable,
    BeginMemoryOperand,
    EndMemoryOperand,
}

impl TokenKind {
    /// Style class emitted on the token's span
    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::Text => "TextToken",
            TokenKind::Instruction => "InstructionToken",
            TokenKind::Register => "RegisterToken",
            TokenKind::Integer => "IntegerToken",
            TokenKind::PossibleAddress => "PossibleAddressToken",
            TokenKind::CodeSymbol => "CodeSymbolToken",
            TokenKind::DataSymbol => "DataSymbolToken",
            TokenKind::Annotation => "AnnotationToken",
            TokenKind::Import => "ImportToken",
            TokenKind::StackVariable => "StackVariableToken",
            TokenKind::BeginMemoryOperand => "BeginMemoryOperandToken",
            TokenKind::EndMemoryOperand => "EndMemoryOperandToken",
        }
    }
}

impl From<String> for TokenKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "InstructionToken" => TokenKind::Instruction,
            "RegisterToken" => TokenKind::Register,
            "IntegerToken" => TokenKind::Integer,
            "PossibleAddressToken" => TokenKind::PossibleAddress,
            "CodeSymbolToken" => TokenKind::CodeSymbol,
            "DataSymbolToken" => TokenKind::DataSymbol,
            "AnnotationToken" => TokenKind::Annotation,
            "ImportToken" => TokenKind::Import,
            "StackVariableToken" => TokenKind::StackVariable,
            "BeginMemoryOperandToken" => TokenKind::BeginMemoryOperand,
            "EndMemoryOperandToken" => TokenKind::EndMemoryOperand,
            _ => TokenKind::Text,
        }
    }
}

/// Classification of a control-flow edge, driving its stroke color and
/// arrowhead marker
///
/// Unlike highlight states and token kinds, an unknown branch kind is a
/// decode error: the kind picks markup structure (the marker reference), not
/// just a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum BranchKind {
    Unconditional,
    Indirect,
    True,
    False,
}

impl BranchKind {
    /// Style class and marker-id stem for this edge kind
    pub fn css_class(self) -> &'static str {
        match self {
            BranchKind::Unconditional => "UnconditionalBranch",
            BranchKind::Indirect => "IndirectBranch",
            BranchKind::True => "TrueBranch",
            BranchKind::False => "FalseBranch",
        }
    }
}

impl TryFrom<String> for BranchKind {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        match name.as_str() {
            "UnconditionalBranch" => Ok(BranchKind::Unconditional),
            "IndirectBranch" => Ok(BranchKind::Indirect),
            "TrueBranch" => Ok(BranchKind::True),
            "FalseBranch" => Ok(BranchKind::False),
            other => Err(format!("unknown branch kind '{other}'")),
        }
    }
}

/// One lexical piece of disassembled instruction text
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InstructionToken {
    pub text: String,
    pub kind: TokenKind,
}

/// One disassembled instruction: its origin address, the raw opcode bytes the
/// engine read there, and the token stream of its rendered text
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisassemblyLine {
    pub address: u64,
    #[serde(default)]
    pub bytes: Vec<u8>,
    #[serde(default)]
    pub tokens: Vec<InstructionToken>,
}

/// An outgoing control-flow edge: its kind and the polyline path the layout
/// engine routed from source to destination block
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlowEdge {
    pub kind: BranchKind,
    #[serde(default)]
    pub points: Vec<Point>,
}

/// A basic block with its laid-out position and size
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlowBlock {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub highlight: HighlightState,
    #[serde(default)]
    pub lines: Vec<DisassemblyLine>,
    #[serde(default)]
    pub edges: Vec<FlowEdge>,
}

/// A function's laid-out control-flow graph
///
/// A block's identifier is its position in `blocks`; the renderer derives it
/// by enumeration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlowGraph {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub blocks: Vec<FlowBlock>,
}
