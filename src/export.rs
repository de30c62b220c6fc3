//! Export orchestration
//!
//! Drives one user-initiated export: derive a default destination from the
//! source binary and function address, ask the host for the real destination,
//! render, write, and offer to open the result. The dialogs and the browser
//! launcher belong to the host UI and sit behind [`ExportHost`]; a cancelled
//! save prompt is a silent no-op, not an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ExportError;
use crate::graph::FlowGraph;
use crate::renderer::{render_flow_graph, SvgConfig};

const SAVE_PROMPT: &str = "File name for export_svg";
const SAVE_FILTER: &str = "HTML files (*.html)";
const OPEN_TITLE: &str = "Open SVG";
const OPEN_QUESTION: &str = "Would you like to view the exported SVG?";

/// Host-UI collaborators for the export flow
pub trait ExportHost {
    /// Ask for a destination path; `None` means the user cancelled
    fn prompt_save_path(&mut self, prompt: &str, filter: &str, default: &Path) -> Option<PathBuf>;

    /// Yes/no confirmation dialog
    fn confirm(&mut self, title: &str, question: &str) -> bool;

    /// Open a URL in the system viewer
    fn open_url(&mut self, url: &str) -> std::io::Result<()>;
}

/// A function captured for export: the binary it came from, its start
/// address, and its laid-out control-flow graph
///
/// Snapshots are produced by the external analysis engine; the engine blocks
/// on its own layout step before emitting one, so the graph here is always
/// post-layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FunctionSnapshot {
    /// Path of the binary the function was disassembled from
    pub binary: PathBuf,
    /// Start address of the function
    pub start: u64,
    /// The laid-out control-flow graph
    pub graph: FlowGraph,
}

impl FunctionSnapshot {
    /// Default export destination: next to the source binary, named after it
    /// and the function's start address
    pub fn default_output_path(&self) -> PathBuf {
        let dir = self.binary.parent().unwrap_or_else(|| Path::new(""));
        let name = self
            .binary
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        dir.join(format!("binaryninja-{}-{:#x}.html", name, self.start))
    }
}

/// Run one export
///
/// Returns `Ok(None)` when the user cancels the destination prompt (nothing
/// written), `Ok(Some(path))` once the document is on disk. Write and viewer
/// failures propagate; there is no retry or partial-output recovery.
pub fn export_function(
    snapshot: &FunctionSnapshot,
    host: &mut dyn ExportHost,
    config: &SvgConfig,
) -> Result<Option<PathBuf>, ExportError> {
    let default = snapshot.default_output_path();
    let dest = match host.prompt_save_path(SAVE_PROMPT, SAVE_FILTER, &default) {
        Some(path) => path,
        None => return Ok(None),
    };

    let document = render_flow_graph(&snapshot.graph, config);
    fs::write(&dest, document).map_err(|source| ExportError::Write {
        path: dest.clone(),
        source,
    })?;

    if host.confirm(OPEN_TITLE, OPEN_QUESTION) {
        let url = file_url(&dest);
        host.open_url(&url)
            .map_err(|source| ExportError::Viewer { url, source })?;
    }

    Ok(Some(dest))
}

/// `file:` URL for a filesystem path
///
/// Bytes outside the URL-safe set are percent-encoded; `/` stays literal so
/// the path structure survives.
pub fn file_url(path: &Path) -> String {
    let mut url = String::from("file://");
    for byte in path.to_string_lossy().bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                url.push(byte as char)
            }
            _ => url.push_str(&format!("%{byte:02X}")),
        }
    }
    url
}
