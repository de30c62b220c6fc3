//! Document renderer
//!
//! Takes a laid-out flow graph and produces the complete HTML/SVG document:
//! block groups, overlaid edge polylines, embedded styling and the sized
//! canvas shell.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_flow_graph, SvgBuilder};
