//! Command-line interface for inspecting and re-rendering RSpec files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::RenderOptions;
use crate::error::{Result, StitchError};
use crate::model::RSpec;
use crate::parser::parse;
use crate::serializer::render_with;

/// Omni stitching tool - parse and render stitching-aware RSpecs.
#[derive(Parser)]
#[command(name = "omni-stitch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a summary of nodes, links and stitching paths.
    Inspect {
        /// RSpec XML file
        file: PathBuf,
    },

    /// Parse a file and render it back to XML.
    Render {
        /// RSpec XML file
        file: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact XML without indentation
        #[arg(long)]
        compact: bool,
    },

    /// Print the parsed object graph as JSON.
    Json {
        /// RSpec XML file
        file: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { file } => inspect_command(&file),
        Commands::Render {
            file,
            output,
            compact,
        } => render_command(&file, output.as_deref(), compact),
        Commands::Json { file } => json_command(&file),
    }
}

/// Read and parse an RSpec file.
fn load(file: &Path) -> Result<RSpec> {
    let xml = fs::read_to_string(file).map_err(|source| StitchError::Io {
        path: file.to_path_buf(),
        source,
    })?;
    parse(&xml)
}

/// Execute the inspect command.
fn inspect_command(file: &Path) -> Result<()> {
    let rspec = load(file)?;
    print!("{}", summarize(&rspec));
    Ok(())
}

/// Execute the render command.
fn render_command(file: &Path, output: Option<&Path>, compact: bool) -> Result<()> {
    let rspec = load(file)?;
    let options = if compact {
        RenderOptions::compact()
    } else {
        RenderOptions::default()
    };
    let xml = render_with(&rspec, &options)?;

    match output {
        Some(path) => {
            fs::write(path, xml).map_err(|source| StitchError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{xml}"),
    }
    Ok(())
}

/// Execute the json command.
fn json_command(file: &Path) -> Result<()> {
    let rspec = load(file)?;
    println!("{}", serde_json::to_string_pretty(&rspec)?);
    Ok(())
}

/// Build the human-readable summary printed by `inspect`.
fn summarize(rspec: &RSpec) -> String {
    let mut out = String::new();
    let mut line = |text: String| {
        out.push_str(&text);
        out.push('\n');
    };

    line(format!(
        "{} {}",
        style("RSpec").bold(),
        rspec.kind.as_deref().unwrap_or("(untyped)")
    ));

    line(format!("  Nodes: {}", rspec.nodes.len()));
    for node in &rspec.nodes {
        line(format!(
            "    {} ({} interfaces)",
            style(&node.id).cyan(),
            node.interfaces.len()
        ));
    }

    line(format!("  Links: {}", rspec.links.len()));
    for link in &rspec.links {
        let interfaces: Vec<_> = link.interfaces.iter().map(|i| i.id.as_str()).collect();
        line(format!(
            "    {} [{}]",
            style(&link.id).cyan(),
            interfaces.join(", ")
        ));
    }

    match &rspec.stitching {
        None => line("  Stitching: none".to_string()),
        Some(stitching) => {
            line(format!(
                "  Stitching: {} paths (lastUpdateTime: {})",
                stitching.paths.len(),
                stitching.last_update_time.as_deref().unwrap_or("-")
            ));
            for path in &stitching.paths {
                line(format!("    {}", style(&path.id).green()));
                for hop in &path.hops {
                    line(format!(
                        "      hop {} -> {} (next: {})",
                        hop.id,
                        hop.link_id().unwrap_or("-"),
                        hop.next_hop.as_deref().unwrap_or("-")
                    ));
                }
            }
        }
    }

    let dangling = rspec.index().dangling_hops();
    if !dangling.is_empty() {
        line(format!(
            "  Warnings: {}",
            style(dangling.len()).yellow().bold()
        ));
        for hop in &dangling {
            line(format!(
                "    path {} hop {}: link {} not declared in this RSpec",
                hop.path_id, hop.hop_id, hop.link_id
            ));
        }
    }

    out
}
