//! flowgraph-svg CLI
//!
//! Usage:
//!   flowgraph-svg [OPTIONS] [FILE]
//!
//! FILE is a function snapshot (JSON) emitted by the analysis engine; stdin
//! is read when no file is given. By default the document is exported next to
//! the source binary under the derived `binaryninja-<binary>-<address>.html`
//! name, like the in-host export command.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::Command;

use clap::Parser;

use flowgraph_svg::export::{export_function, ExportHost, FunctionSnapshot};
use flowgraph_svg::renderer::SvgConfig;

#[derive(Parser)]
#[command(name = "flowgraph-svg")]
#[command(about = "Export a disassembled function's control-flow graph as a standalone SVG/HTML document")]
struct Cli {
    /// Function snapshot JSON produced by the analysis engine (reads from
    /// stdin if not provided)
    input: Option<PathBuf>,

    /// Destination path (defaults to binaryninja-<binary>-<address>.html
    /// next to the source binary)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Open the exported document in the system browser
    #[arg(long)]
    open: bool,

    /// Print the document to stdout instead of exporting to a file
    #[arg(long)]
    stdout: bool,
}

/// Non-interactive stand-in for the host UI's dialogs
struct CliHost {
    output: Option<PathBuf>,
    open: bool,
}

impl ExportHost for CliHost {
    fn prompt_save_path(
        &mut self,
        _prompt: &str,
        _filter: &str,
        default: &Path,
    ) -> Option<PathBuf> {
        Some(self.output.clone().unwrap_or_else(|| default.to_path_buf()))
    }

    fn confirm(&mut self, _title: &str, _question: &str) -> bool {
        self.open
    }

    fn open_url(&mut self, url: &str) -> io::Result<()> {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(target_os = "windows") {
            ("cmd", &["/C", "start", ""])
        } else {
            ("xdg-open", &[])
        };
        let status = Command::new(program).args(args).arg(url).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("{program} exited with {status}")))
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Interactive invocation with nothing piped in: show the intro instead
    // of hanging on stdin
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let snapshot: FunctionSnapshot = match serde_json::from_str(&source) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Error parsing function snapshot: {}", e);
            std::process::exit(1);
        }
    };

    let config = SvgConfig::default();

    if cli.stdout {
        println!("{}", flowgraph_svg::render_with_config(&snapshot.graph, &config));
        return;
    }

    let mut host = CliHost {
        output: cli.output.clone(),
        open: cli.open,
    };
    match export_function(&snapshot, &mut host, &config) {
        Ok(Some(path)) => eprintln!("Exported {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"flowgraph-svg - Export a function's control-flow graph as SVG/HTML

USAGE:
    flowgraph-svg [OPTIONS] [FILE]
    <engine> dump-function | flowgraph-svg

OPTIONS:
    -o, --output   Destination path (default: next to the source binary)
    --open         Open the exported document in the system browser
    --stdout       Print the document instead of writing a file
    -h, --help     Print help

FILE is a laid-out function snapshot in JSON:
    {{"binary": "/path/app", "start": 4198400, "graph": {{"width": ..., "height": ..., "blocks": [...]}}}}"#
    );
}
