//! `doctool` CLI — decode JSON into typed document trees and back.
//!
//! ## Usage
//!
//! ```sh
//! # Print the section tree of a JSON file
//! doctool inspect -i data.json
//!
//! # Decode then re-encode (stdin → stdout), optionally indented
//! echo '{"a":[1,2]}' | doctool roundtrip --pretty
//!
//! # Require the input to decode into a given root shape
//! doctool check --shape array -i list.json
//!
//! # Diagnostics on stderr
//! doctool -v roundtrip -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use document_core::{Document, Node, Section};
use document_json::JsonTranscoder;
use serde_json::{Map, Value};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "doctool",
    version,
    about = "Inspect and round-trip JSON through typed document trees"
)]
struct Cli {
    /// Log decode/encode steps to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the document tree built from a JSON input
    Inspect {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Decode JSON into a document and encode it back
    Roundtrip {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Decode JSON into a target of the given root shape
    Check {
        /// Required root shape
        #[arg(long, value_enum)]
        shape: RootShape,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RootShape {
    Object,
    Array,
    String,
    Bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Inspect { input } => {
            let json = read_input(input.as_deref())?;
            let (_, doc) = document_json::unmarshal_value(&json)
                .context("Failed to decode JSON into a document")?;
            debug!(kind = %doc.kind(), "decoded document");
            print!("{}", render_tree(&doc));
        }
        Commands::Roundtrip {
            input,
            output,
            pretty,
        } => {
            let json = read_input(input.as_deref())?;
            let coder = JsonTranscoder::new().pretty(pretty);
            let mut target = Value::Null;
            let doc = coder
                .unmarshal(&json, &mut target)
                .context("Failed to decode JSON into a document")?;
            debug!(kind = %doc.kind(), bytes = json.len(), "decoded document");
            let encoded = coder
                .marshal(&doc)
                .context("Failed to encode document as JSON")?;
            debug!(bytes = encoded.len(), "encoded document");
            write_output(output.as_deref(), &encoded)?;
        }
        Commands::Check { shape, input } => {
            let json = read_input(input.as_deref())?;
            let doc = decode_as(shape, &json).context("Input does not match the requested shape")?;
            println!("ok: {} with {} children", doc.kind(), doc.root().len());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn decode_as(shape: RootShape, json: &[u8]) -> Result<Document> {
    let coder = JsonTranscoder::new();
    let doc = match shape {
        RootShape::Object => coder.unmarshal(json, &mut Map::<String, Value>::new())?,
        RootShape::Array => coder.unmarshal(json, &mut Vec::<Value>::new())?,
        RootShape::String => coder.unmarshal(json, &mut String::new())?,
        RootShape::Bool => coder.unmarshal(json, &mut false)?,
    };
    Ok(doc)
}

/// One line per section, children indented two spaces under their parent.
fn render_tree(doc: &Document) -> String {
    let mut out = String::new();
    render_section(doc.root(), 0, &mut out);
    out
}

fn render_section(section: &Section, depth: usize, out: &mut String) {
    let label = match (depth, section.name()) {
        (0, _) => "$",
        (_, "") => "-",
        (_, name) => name,
    };
    let summary = match section.node() {
        Node::Object(children) => format!("object{{{}}}", children.len()),
        Node::Array(items) => format!("array[{}]", items.len()),
        Node::String(s) => format!("string {s:?}"),
        Node::Bool(b) => format!("bool {b}"),
        Node::Nil => "nil".to_string(),
        Node::Number(n) => format!("{} {n}", n.kind()),
        Node::Bytes(b) => format!("bytes[{}]", b.len()),
    };
    out.push_str(&"  ".repeat(depth));
    out.push_str(label);
    out.push_str(": ");
    out.push_str(&summary);
    out.push('\n');
    for child in section.children() {
        render_section(child, depth + 1, out);
    }
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            use std::io::Write;
            io::stdout()
                .write_all(content)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
