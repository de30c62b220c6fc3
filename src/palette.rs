//! Fixed color taxonomy for blocks, edges and instruction tokens
//!
//! All tables are immutable module-level constants. Lookups cannot fail:
//! every highlight state resolves to a color, with the neutral default
//! covering the absent/unrecognized case.

use crate::graph::{BranchKind, HighlightState};

/// An RGB triple as emitted into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS functional form, e.g. `rgb(74,74,74)`
    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.0, self.1, self.2)
    }
}

/// Canvas background
pub const CANVAS_BACKGROUND: Rgb = Rgb(42, 42, 42);

/// Outline stroke of block rectangles
pub const BLOCK_STROKE: Rgb = Rgb(224, 224, 224);

/// Default fill of instruction text
pub const TEXT_FILL: Rgb = Rgb(224, 224, 224);

/// Fill color for a block's highlight state
pub fn highlight_color(state: HighlightState) -> Rgb {
    match state {
        HighlightState::None => Rgb(74, 74, 74),
        HighlightState::Green => Rgb(162, 217, 175),
        HighlightState::Red => Rgb(222, 143, 151),
        HighlightState::Blue => Rgb(128, 198, 233),
        HighlightState::Cyan => Rgb(142, 230, 237),
        HighlightState::LightCyan => Rgb(176, 221, 228),
        HighlightState::Orange => Rgb(237, 189, 129),
        HighlightState::Yellow => Rgb(237, 223, 179),
        HighlightState::Magenta => Rgb(218, 196, 209),
    }
}

/// Stroke color for a control-flow edge kind
pub fn branch_color(kind: BranchKind) -> Rgb {
    match kind {
        BranchKind::True => Rgb(162, 217, 175),
        BranchKind::False => Rgb(222, 143, 151),
        BranchKind::Unconditional | BranchKind::Indirect => Rgb(128, 198, 233),
    }
}

/// Per-token-kind fill rules emitted into the embedded style sheet,
/// (selector, fill) in emission order
pub const TOKEN_STYLES: &[(&str, Rgb)] = &[
    (".CodeSymbolToken", Rgb(128, 198, 223)),
    (".DataSymbolToken", Rgb(142, 230, 237)),
    (
        ".TextToken, .InstructionToken, .BeginMemoryOperandToken, .EndMemoryOperandToken",
        Rgb(224, 224, 224),
    ),
    (".PossibleAddressToken, .IntegerToken", Rgb(162, 217, 175)),
    (".RegisterToken", Rgb(237, 223, 179)),
    (".AnnotationToken", Rgb(218, 196, 209)),
    (".ImportToken", Rgb(237, 189, 129)),
    (".StackVariableToken", Rgb(193, 220, 199)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_form() {
        assert_eq!(Rgb(74, 74, 74).css(), "rgb(74,74,74)");
        assert_eq!(Rgb(0, 128, 255).css(), "rgb(0,128,255)");
    }

    #[test]
    fn default_highlight_is_neutral_gray() {
        assert_eq!(highlight_color(HighlightState::None), Rgb(74, 74, 74));
    }

    #[test]
    fn highlight_palette_is_fixed() {
        assert_eq!(highlight_color(HighlightState::Green), Rgb(162, 217, 175));
        assert_eq!(highlight_color(HighlightState::Red), Rgb(222, 143, 151));
        assert_eq!(highlight_color(HighlightState::Blue), Rgb(128, 198, 233));
        assert_eq!(highlight_color(HighlightState::Cyan), Rgb(142, 230, 237));
        assert_eq!(
            highlight_color(HighlightState::LightCyan),
            Rgb(176, 221, 228)
        );
        assert_eq!(highlight_color(HighlightState::Orange), Rgb(237, 189, 129));
        assert_eq!(highlight_color(HighlightState::Yellow), Rgb(237, 223, 179));
        assert_eq!(highlight_color(HighlightState::Magenta), Rgb(218, 196, 209));
    }

    #[test]
    fn conditional_branches_use_highlight_green_and_red() {
        assert_eq!(branch_color(BranchKind::True), Rgb(162, 217, 175));
        assert_eq!(branch_color(BranchKind::False), Rgb(222, 143, 151));
        assert_eq!(
            branch_color(BranchKind::Unconditional),
            branch_color(BranchKind::Indirect)
        );
    }
}
