//! cppgen — generate definition files from C/C++ headers.
//!
//! Scans each header for namespaces, classes, and function declarations and
//! writes a sibling definition file with stub bodies: `foo.h` → `foo.cpp`,
//! or `foo.ipp` when the header declares inline or template functions.

use anyhow::{Context, Result};
use clap::Parser;
use cppgen::style::{Convention, IndentStyle, Style};
use cppgen::{prompt, render, scan};
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(name = "cppgen", about = "Generate definitions from headers")]
struct Cli {
    /// Header files to scan (glob patterns supported)
    #[arg(required = true)]
    files: Vec<String>,

    /// Suffix for files containing function definitions
    #[arg(long, default_value = ".cpp")]
    cpp: String,

    /// Suffix for files containing inline and template function definitions
    #[arg(long, default_value = ".ipp")]
    ipp: String,

    /// Coding convention: default, gnu, or google
    #[arg(short = 'c', long, default_value = "default")]
    convention: String,

    /// Indentation character: convention, space, or tab
    #[arg(short = 'i', long, default_value = "convention")]
    indent: String,

    /// Tab size (0 follows the convention)
    #[arg(short = 't', long, default_value_t = 0)]
    tabsize: usize,

    /// Do not insert todo comments into stub bodies
    #[arg(long)]
    no_todo: bool,

    /// Overwrite existing definition files without asking
    #[arg(short = 'y', long)]
    yes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let style = Style {
        convention: Convention::parse(&cli.convention)?,
        indent: IndentStyle::parse(&cli.indent)?,
        tabsize: cli.tabsize,
        insert_todo: !cli.no_todo,
        ..Style::default()
    };

    for filename in expand_globs(&cli.files)? {
        if let Err(e) = process(&filename, &cli, &style) {
            eprintln!("warning: skipping {}: {:#}", filename, e);
        }
    }
    Ok(())
}

/// Scans one header and writes its definition file next to it.
fn process(filename: &str, cli: &Cli, style: &Style) -> Result<()> {
    if filename.ends_with(&cli.cpp) || filename.ends_with(&cli.ipp) {
        println!("Skip: {} (definition file)", filename);
        return Ok(());
    }

    let source =
        fs::read_to_string(filename).with_context(|| format!("failed to read {}", filename))?;
    let tree = scan::scan(&source);

    let suffix = if tree.needs_inline_output() {
        &cli.ipp
    } else {
        &cli.cpp
    };
    let out_name = definition_path(filename, suffix);
    if Path::new(&out_name).exists() && !cli.yes {
        if !prompt::confirm(&format!("Overwrite?: {}", out_name))? {
            println!("Skip: {} (definition already exists)", filename);
            return Ok(());
        }
    }

    let header_name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let text = render::definition_file(&tree, header_name, style);
    fs::write(&out_name, text).with_context(|| format!("failed to write {}", out_name))?;
    println!("Generate: {} -> {}", filename, out_name);
    Ok(())
}

/// Expand glob patterns into file paths, keeping the argument order.
/// Literal paths to existing files pass through untouched.
fn expand_globs(patterns: &[String]) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for pattern in patterns {
        if Path::new(pattern).is_file() {
            files.push(pattern.clone());
            continue;
        }
        let matches: Vec<String> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    Ok(files)
}

/// Swap the filename's suffix: `include/foo.h` → `include/foo` + suffix.
/// A name with no suffix of its own, or nothing but leading dots, keeps its
/// full text and gets the new suffix appended.
fn definition_path(filename: &str, suffix: &str) -> String {
    format!("{}{}", stem(filename), suffix)
}

fn stem(filename: &str) -> &str {
    let base = filename.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match filename[base..].rfind('.') {
        Some(i) if filename[base..base + i].chars().any(|c| c != '.') => &filename[..base + i],
        _ => filename,
    }
}
