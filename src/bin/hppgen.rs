//! hppgen — generate a fresh C/C++ header for a new type.
//!
//! Writes an include-guarded skeleton for a class, struct, or enum under the
//! directories its namespaces name: `hppgen net::http::Request` creates
//! `net/http/request.hpp`.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use cppgen::header::{self, TypeKind};
use cppgen::prompt;
use cppgen::style::{Convention, FileNameStyle, IndentStyle, Style};
use std::fs;

#[derive(Parser)]
#[command(name = "hppgen", about = "Generate a header")]
struct Cli {
    /// Qualified type name: (<NAMESPACE>::)*<NAME>
    name: String,

    /// Kind of type to declare: class, struct, or enum
    #[arg(short = 'k', long, default_value = "class")]
    kind: String,

    /// Suffix for the generated header file
    #[arg(long, default_value = ".hpp")]
    suffix: String,

    /// File naming convention: snake_case, hyphen-case, lowercase,
    /// UPPERCASE, camelCase, PascalCase, or CONST_CASE
    #[arg(short = 'f', long, default_value = "snake_case")]
    file_convention: String,

    /// Coding convention: default, gnu, or google
    #[arg(short = 'c', long, default_value = "default")]
    convention: String,

    /// Indentation character: convention, space, or tab
    #[arg(short = 'i', long, default_value = "convention")]
    indent: String,

    /// Tab size (0 follows the convention)
    #[arg(short = 't', long, default_value_t = 0)]
    tabsize: usize,

    /// Overwrite an existing header without asking
    #[arg(short = 'y', long)]
    yes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let style = Style {
        convention: Convention::parse(&cli.convention)?,
        indent: IndentStyle::parse(&cli.indent)?,
        tabsize: cli.tabsize,
        filename: FileNameStyle::parse(&cli.file_convention)?,
        ..Style::default()
    };
    let kind = TypeKind::parse(&cli.kind)?;

    let (namespaces, type_name) = header::split_qualified(&cli.name);
    ensure!(!type_name.is_empty(), "empty type name: {}", cli.name);

    let out_path = header::output_path(&namespaces, &type_name, &cli.suffix, &style);
    let display = out_path.display().to_string();
    if out_path.exists() && !cli.yes {
        if !prompt::confirm(&format!("Overwrite?: {}", display))? {
            println!("Skip: {} (already exists)", display);
            return Ok(());
        }
    }

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let text = header::skeleton(kind, &namespaces, &type_name, &cli.suffix, &style);
    fs::write(&out_path, text).with_context(|| format!("failed to write {}", display))?;
    println!("Generate: {}", display);
    Ok(())
}
