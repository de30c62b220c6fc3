//! Render laid-out control-flow graphs of disassembled functions into
//! self-contained HTML/SVG documents
//!
//! Disassembly and graph layout happen in an external analysis engine; this
//! crate consumes the engine's finished snapshot and owns everything from
//! there: unit-to-pixel geometry, text escaping, the fixed color taxonomy,
//! block and edge markup, and the export flow around the host's dialogs.
//!
//! # Example
//!
//! ```rust
//! use flowgraph_svg::graph::FlowGraph;
//!
//! let graph = FlowGraph { width: 10.0, height: 4.0, blocks: vec![] };
//! let document = flowgraph_svg::render(&graph);
//! assert!(document.contains("<svg"));
//! assert!(document.contains("width=\"72\" height=\"60\""));
//! ```

pub mod error;
pub mod escape;
pub mod export;
pub mod geometry;
pub mod graph;
pub mod palette;
pub mod renderer;

pub use error::ExportError;
pub use export::{export_function, ExportHost, FunctionSnapshot};
pub use graph::FlowGraph;
pub use renderer::{render_flow_graph, SvgConfig};

/// Render a flow graph with the default document configuration
pub fn render(graph: &FlowGraph) -> String {
    render_with_config(graph, &SvgConfig::default())
}

/// Render a flow graph with a custom document configuration
///
/// ```rust
/// use flowgraph_svg::{render_with_config, FlowGraph, SvgConfig};
///
/// let graph = FlowGraph { width: 1.0, height: 1.0, blocks: vec![] };
/// let document = render_with_config(&graph, &SvgConfig::default().without_script());
/// assert!(!document.contains("<script"));
/// ```
pub fn render_with_config(graph: &FlowGraph, config: &SvgConfig) -> String {
    render_flow_graph(graph, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_empty_graph() {
        let document = render(&FlowGraph {
            width: 0.0,
            height: 0.0,
            blocks: vec![],
        });
        assert!(document.starts_with("<html>"));
        assert!(document.contains("<svg"));
        assert!(document.ends_with("</svg></html>"));
    }

    #[test]
    fn render_with_config_honors_the_config() {
        let graph = FlowGraph {
            width: 2.0,
            height: 2.0,
            blocks: vec![],
        };
        let document = render_with_config(
            &graph,
            &SvgConfig::default().with_font_import_url("https://fonts.example/mono.css"),
        );
        assert!(document.contains("@import url(https://fonts.example/mono.css);"));
    }
}
