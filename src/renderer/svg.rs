//! Document generation from laid-out flow graphs
//!
//! One render call walks the graph once and accumulates the document in an
//! append-only builder. Blocks and edges collect in separate buffers: edges
//! are emitted as a single trailing chunk after every block group so they
//! paint over the block rectangles regardless of the viewer's paint order.

use crate::escape::escape;
use crate::geometry::{map_point, px_x, px_y, ROW_HEIGHT};
use crate::graph::{BranchKind, DisassemblyLine, FlowBlock, FlowEdge, FlowGraph};
use crate::palette::{self, highlight_color};

use super::SvgConfig;

/// Branch kinds with an arrowhead marker definition, in emission order
const MARKER_KINDS: [BranchKind; 4] = [
    BranchKind::True,
    BranchKind::False,
    BranchKind::Unconditional,
    BranchKind::Indirect,
];

/// Build document fragments incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    blocks: Vec<String>,
    edges: Vec<String>,
}

impl SvgBuilder {
    /// Create a new builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            blocks: vec![],
            edges: vec![],
        }
    }

    /// Add the arrowhead marker definitions, one per branch kind
    pub fn add_branch_markers(&mut self) {
        for kind in MARKER_KINDS {
            let name = kind.css_class();
            self.defs.push(format!(
                concat!(
                    "    <marker id=\"arrow-{name}\" class=\"arrow {name}\" viewBox=\"0 0 10 10\"",
                    " refX=\"10\" refY=\"5\" markerUnits=\"strokeWidth\" markerWidth=\"8\"",
                    " markerHeight=\"6\" orient=\"auto\">\n",
                    "      <path d=\"M 0 0 L 10 5 L 0 10 z\" />\n",
                    "    </marker>\n",
                ),
                name = name
            ));
        }
    }

    /// Emit one group for a basic block: the highlight rectangle and one text
    /// row per instruction line
    ///
    /// `index` is the block's position in the graph's block sequence and
    /// makes the group id unique. A block with no instruction lines still
    /// gets its rectangle and an empty text container.
    pub fn add_block(&mut self, index: usize, block: &FlowBlock) {
        let x = px_x(block.x);
        let y = px_y(block.y);
        let width = px_x(block.width);
        let height = px_y(block.height);
        let fill = highlight_color(block.highlight).css();

        let mut group = String::new();
        group.push_str(&format!("    <g id=\"basicblock{index}\">\n"));
        group.push_str(&format!("      <title>Basic Block {index}</title>\n"));
        group.push_str(&format!(
            "      <rect class=\"basicblock\" x=\"{x}\" y=\"{y}\" fill-opacity=\"0.4\" \
             height=\"{height}\" width=\"{width}\" fill=\"{fill}\"/>\n"
        ));
        group.push_str(&format!("      <text x=\"{x}\" y=\"{y}\">\n"));
        for (row, line) in block.lines.iter().enumerate() {
            group.push_str(&render_line(x, y, row, line));
        }
        group.push_str("      </text>\n");
        group.push_str("    </g>\n");
        self.blocks.push(group);
    }

    /// Buffer one control-flow polyline
    pub fn add_edge(&mut self, edge: &FlowEdge) {
        let kind = edge.kind.css_class();
        let points = edge
            .points
            .iter()
            .map(|p| {
                let (x, y) = map_point(*p);
                format!("{x},{y}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.edges.push(format!(
            "    <polyline class=\"edge {kind}\" points=\"{points}\" \
             marker-end=\"url(#arrow-{kind})\"/>\n"
        ));
    }

    /// Assemble the final document: HTML shell, embedded style sheet, sized
    /// canvas, marker defs, block groups, then the buffered edges
    pub fn build(self, graph_width: f64, graph_height: f64) -> String {
        let width = px_x(graph_width);
        let height = px_y(graph_height);

        let mut out = String::new();
        out.push_str("<html>\n<head>\n");
        out.push_str(&style_sheet(&self.config));
        if let Some(url) = &self.config.script_url {
            out.push_str(&format!("  <script src=\"{url}\"></script>\n"));
        }
        out.push_str("</head>\n");
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
             xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
             width=\"{width}\" height=\"{height}\">\n"
        ));
        out.push_str("  <defs>\n");
        for def in &self.defs {
            out.push_str(def);
        }
        out.push_str("  </defs>\n");
        out.push_str("  <g id=\"functiongraph0\" class=\"functiongraph\">\n");
        out.push_str("    <title>Function Graph 0</title>\n");
        for block in &self.blocks {
            out.push_str(block);
        }
        for edge in &self.edges {
            out.push_str(edge);
        }
        out.push_str("  </g>\n");
        out.push_str("</svg></html>");
        out
    }
}

/// Render a laid-out flow graph to a complete document
pub fn render_flow_graph(graph: &FlowGraph, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_branch_markers();
    for (index, block) in graph.blocks.iter().enumerate() {
        builder.add_block(index, block);
        for edge in &block.edges {
            builder.add_edge(edge);
        }
    }
    builder.build(graph.width, graph.height)
}

/// One text row: the instruction's identified span, its hover title and the
/// per-token styled spans
fn render_line(x: f64, block_y: f64, row: usize, line: &DisassemblyLine) -> String {
    let y = block_y + (row as f64 + 0.7) * ROW_HEIGHT;
    let mut out = format!(
        "        <tspan id=\"instr-{:#x}\" x=\"{x}\" y=\"{y}\">",
        line.address
    );
    out.push_str(&format!("<title>{}</title>", instruction_hover(line)));
    for token in &line.tokens {
        out.push_str(&format!(
            "<tspan class=\"{}\">{}</tspan>",
            token.kind.css_class(),
            escape(&token.text)
        ));
    }
    out.push_str("</tspan>\n");
    out
}

/// Hover text for one instruction line: the raw opcode bytes the engine read
/// at its address, as space-separated hex
///
/// TODO: derive data-flow facts for the hover instead of dumping opcode bytes
fn instruction_hover(line: &DisassemblyLine) -> String {
    let bytes = line
        .bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("Opcode: {bytes}")
}

/// The embedded style sheet: dark background, block and edge rules, arrow
/// fill, text font and the fixed per-token-kind colors
fn style_sheet(config: &SvgConfig) -> String {
    let mut css = String::new();
    css.push_str("  <style type=\"text/css\">\n");
    css.push_str(&format!("    @import url({});\n", config.font_import_url));
    css.push_str(&format!(
        "    svg {{\n      background-color: {};\n    }}\n",
        palette::CANVAS_BACKGROUND.css()
    ));
    css.push_str(&format!(
        "    .basicblock {{\n      stroke: {};\n    }}\n",
        palette::BLOCK_STROKE.css()
    ));
    css.push_str("    .edge {\n      fill: none;\n      stroke-width: 1px;\n    }\n");
    css.push_str(&branch_rule(
        ".UnconditionalBranch, .IndirectBranch",
        BranchKind::Unconditional,
    ));
    css.push_str(&branch_rule(".FalseBranch", BranchKind::False));
    css.push_str(&branch_rule(".TrueBranch", BranchKind::True));
    css.push_str("    .arrow {\n      stroke-width: 1;\n      fill: currentColor;\n    }\n");
    css.push_str(&format!(
        "    text {{\n      font-family: 'Source Code Pro';\n      font-size: 9pt;\n      \
         fill: {};\n    }}\n",
        palette::TEXT_FILL.css()
    ));
    for (selector, fill) in palette::TOKEN_STYLES {
        css.push_str(&format!(
            "    {} {{\n      fill: {};\n    }}\n",
            selector,
            fill.css()
        ));
    }
    css.push_str("  </style>\n");
    css
}

/// Edge-kind rule: both `stroke` (for the polyline) and `color` (inherited by
/// the arrowhead via `currentColor`)
fn branch_rule(selector: &str, kind: BranchKind) -> String {
    let color = palette::branch_color(kind).css();
    format!("    {selector} {{\n      stroke: {color};\n      color: {color};\n    }}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{HighlightState, InstructionToken, Point, TokenKind};
    use pretty_assertions::assert_eq;

    fn line(address: u64, bytes: &[u8], tokens: &[(&str, TokenKind)]) -> DisassemblyLine {
        DisassemblyLine {
            address,
            bytes: bytes.to_vec(),
            tokens: tokens
                .iter()
                .map(|(text, kind)| InstructionToken {
                    text: text.to_string(),
                    kind: *kind,
                })
                .collect(),
        }
    }

    fn bare_block(x: f64, y: f64, width: f64, height: f64) -> FlowBlock {
        FlowBlock {
            x,
            y,
            width,
            height,
            highlight: HighlightState::None,
            lines: vec![],
            edges: vec![],
        }
    }

    #[test]
    fn block_rectangle_uses_mapped_geometry_and_highlight_fill() {
        let mut builder = SvgBuilder::new(SvgConfig::default());
        let mut block = bare_block(0.0, 0.0, 10.0, 4.0);
        block.highlight = HighlightState::Red;
        builder.add_block(0, &block);

        let group = &builder.blocks[0];
        assert!(group.contains(
            "<rect class=\"basicblock\" x=\"0\" y=\"0\" fill-opacity=\"0.4\" \
             height=\"60\" width=\"72\" fill=\"rgb(222,143,151)\"/>"
        ));
        assert!(group.contains("<title>Basic Block 0</title>"));
    }

    #[test]
    fn block_without_lines_still_gets_rect_and_empty_text() {
        let mut builder = SvgBuilder::new(SvgConfig::default());
        builder.add_block(3, &bare_block(1.0, 2.0, 4.0, 2.0));

        let group = &builder.blocks[0];
        assert!(group.contains("<g id=\"basicblock3\">"));
        assert!(group.contains("<rect class=\"basicblock\""));
        assert!(group.contains("<text "));
        assert!(group.contains("</text>"));
        assert!(!group.contains("<tspan"));
    }

    #[test]
    fn line_rows_offset_by_point_seven_rows() {
        let rendered = render_line(
            0.0,
            0.0,
            0,
            &line(0x401000, &[0x90], &[("nop", TokenKind::Instruction)]),
        );
        assert!(rendered.contains("y=\"10.5\""));
        assert!(rendered.contains("id=\"instr-0x401000\""));
        assert!(rendered.contains("<title>Opcode: 90</title>"));
        assert!(rendered.contains("<tspan class=\"InstructionToken\">nop</tspan>"));

        let second = render_line(0.0, 60.0, 1, &line(0x401001, &[], &[]));
        assert!(second.contains("y=\"85.5\""));
    }

    #[test]
    fn token_text_is_escaped_per_kind() {
        let rendered = render_line(
            0.0,
            0.0,
            0,
            &line(
                0x1000,
                &[],
                &[
                    ("mov", TokenKind::Instruction),
                    (" eax, 1", TokenKind::Text),
                ],
            ),
        );
        assert!(rendered.contains("<tspan class=\"InstructionToken\">mov</tspan>"));
        assert!(rendered.contains("<tspan class=\"TextToken\">&#160;eax,&#160;1</tspan>"));
    }

    #[test]
    fn hover_dumps_opcode_bytes_as_hex() {
        assert_eq!(
            instruction_hover(&line(0x1000, &[0x8b, 0x45, 0xfc], &[])),
            "Opcode: 8b 45 fc"
        );
        assert_eq!(instruction_hover(&line(0x1000, &[], &[])), "Opcode: ");
    }

    #[test]
    fn edge_polyline_maps_points_and_references_its_marker() {
        let mut builder = SvgBuilder::new(SvgConfig::default());
        builder.add_edge(&FlowEdge {
            kind: BranchKind::Unconditional,
            points: vec![Point::new(5.0, 4.0), Point::new(5.0, 6.0)],
        });

        assert_eq!(
            builder.edges[0],
            "    <polyline class=\"edge UnconditionalBranch\" points=\"36,60 36,90\" \
             marker-end=\"url(#arrow-UnconditionalBranch)\"/>\n"
        );
    }

    #[test]
    fn document_canvas_is_sized_from_the_graph() {
        let graph = FlowGraph {
            width: 10.0,
            height: 12.0,
            blocks: vec![],
        };
        let doc = render_flow_graph(&graph, &SvgConfig::default());
        assert!(doc.contains("width=\"72\" height=\"180\""));
        assert!(doc.starts_with("<html>"));
        assert!(doc.ends_with("</svg></html>"));
    }

    #[test]
    fn markers_cover_every_branch_kind() {
        let doc = render_flow_graph(
            &FlowGraph {
                width: 1.0,
                height: 1.0,
                blocks: vec![],
            },
            &SvgConfig::default(),
        );
        for name in [
            "arrow-TrueBranch",
            "arrow-FalseBranch",
            "arrow-UnconditionalBranch",
            "arrow-IndirectBranch",
        ] {
            assert!(doc.contains(&format!("<marker id=\"{name}\"")), "{name}");
        }
    }

    #[test]
    fn style_sheet_carries_the_fixed_rules() {
        let css = style_sheet(&SvgConfig::default());
        assert!(css.contains("@import url(https://fonts.googleapis.com/css?family=Source+Code+Pro);"));
        assert!(css.contains("background-color: rgb(42,42,42);"));
        assert!(css.contains("font-family: 'Source Code Pro';"));
        assert!(css.contains(".StackVariableToken {\n      fill: rgb(193,220,199);\n    }"));
        assert!(css.contains(".CodeSymbolToken {\n      fill: rgb(128,198,223);\n    }"));
        assert!(css.contains(".TrueBranch {\n      stroke: rgb(162,217,175);\n      color: rgb(162,217,175);\n    }"));
    }

    #[test]
    fn script_reference_is_configurable() {
        let graph = FlowGraph {
            width: 1.0,
            height: 1.0,
            blocks: vec![],
        };
        let with_script = render_flow_graph(&graph, &SvgConfig::default());
        assert!(with_script
            .contains("<script src=\"https://ajax.googleapis.com/ajax/libs/jquery/1.12.2/jquery.min.js\"></script>"));

        let without = render_flow_graph(&graph, &SvgConfig::default().without_script());
        assert!(!without.contains("<script"));
    }
}
