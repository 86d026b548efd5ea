//! Formatting styles — conventions, indentation, filename casing, guards.
//!
//! `Style` is resolved once from the command line and passed by reference
//! through rendering; every formatting decision is a pure function of it.

use anyhow::{anyhow, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Column limit for generated declarations.
const COLUMNS: usize = 78;

static RE_ACRONYM_EDGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());

static RE_CASE_EDGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

static RE_UNDERSCORE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__+").unwrap());

/// Splits a declarator type into its base and trailing pointer/reference
/// run, e.g. `const char *` → (`const char`, `*`).
static RE_DECLARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+?)\s*([*&\s]+?)$").unwrap());

/// Brace and spacing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    Default,
    Gnu,
    Google,
}

impl Convention {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(Convention::Default),
            "gnu" => Ok(Convention::Gnu),
            "google" => Ok(Convention::Google),
            _ => Err(anyhow!(
                "unknown convention: {}. Use default, gnu, or google",
                name
            )),
        }
    }
}

/// Which character indents generated bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Convention,
    Space,
    Tab,
}

impl IndentStyle {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "convention" => Ok(IndentStyle::Convention),
            "space" => Ok(IndentStyle::Space),
            "tab" => Ok(IndentStyle::Tab),
            _ => Err(anyhow!(
                "unknown indent style: {}. Use convention, space, or tab",
                name
            )),
        }
    }
}

/// Casing convention for derived filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNameStyle {
    Snake,
    Hyphen,
    Lower,
    Upper,
    Camel,
    Pascal,
    Const,
}

impl FileNameStyle {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "snake_case" => Ok(FileNameStyle::Snake),
            "hyphen-case" => Ok(FileNameStyle::Hyphen),
            "lowercase" => Ok(FileNameStyle::Lower),
            "UPPERCASE" => Ok(FileNameStyle::Upper),
            "camelCase" => Ok(FileNameStyle::Camel),
            "PascalCase" => Ok(FileNameStyle::Pascal),
            "CONST_CASE" => Ok(FileNameStyle::Const),
            _ => Err(anyhow!(
                "unknown filename style: {}. Use snake_case, hyphen-case, lowercase, UPPERCASE, camelCase, PascalCase, or CONST_CASE",
                name
            )),
        }
    }
}

/// How wrapped parameter lines are indented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamIndent {
    /// Aligned under the opening parenthesis.
    VertAlign,
    /// Two indent units in.
    DoubleIndent,
}

/// Immutable formatting configuration.
#[derive(Debug, Clone)]
pub struct Style {
    pub convention: Convention,
    pub indent: IndentStyle,
    pub tabsize: usize,
    pub filename: FileNameStyle,
    pub insert_todo: bool,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            convention: Convention::Default,
            indent: IndentStyle::Convention,
            tabsize: 0,
            filename: FileNameStyle::Snake,
            insert_todo: true,
        }
    }
}

impl Style {
    /// Text between a declaration and its opening brace.
    pub fn block_start(&self) -> &'static str {
        match self.convention {
            Convention::Gnu | Convention::Google => "\n{\n",
            Convention::Default => " {\n",
        }
    }

    /// Text between a function name and its parameter list.
    pub fn space_after_name(&self) -> &'static str {
        match self.convention {
            Convention::Google => "",
            _ => " ",
        }
    }

    /// Spacing between a return or parameter type and the declared name.
    ///
    /// `"char *"` stays glued to the name by default and under gnu (which
    /// also breaks the line), while google keeps the pointer with the type:
    /// `"char * "`. Non-pointer types get a plain space (gnu: a newline).
    pub fn type_spacing(&self, type_name: &str) -> String {
        if type_name.ends_with('*') || type_name.ends_with('&') {
            if self.convention == Convention::Google {
                return format!("{} ", type_name);
            }
            let Some(caps) = RE_DECLARATOR.captures(type_name) else {
                return format!("{} ", type_name);
            };
            let base = caps.get(1).map_or("", |m| m.as_str());
            let pointer = caps.get(2).map_or("", |m| m.as_str());
            return match self.convention {
                Convention::Gnu => format!("{} {}\n", base, pointer),
                _ => format!("{} {}", base, pointer),
            };
        }
        match self.convention {
            Convention::Gnu => format!("{}\n", type_name),
            _ => format!("{} ", type_name),
        }
    }

    pub fn columns(&self) -> usize {
        COLUMNS
    }

    pub fn indent_char(&self) -> char {
        match self.indent {
            IndentStyle::Tab => '\t',
            _ => ' ',
        }
    }

    /// Indent width: an explicit `tabsize` wins, otherwise the convention's.
    pub fn tabsize(&self) -> usize {
        if self.tabsize != 0 {
            return self.tabsize;
        }
        match self.convention {
            Convention::Gnu | Convention::Google => 2,
            Convention::Default => 4,
        }
    }

    /// One indent unit: `tabsize` spaces, or a single tab.
    pub fn indent_unit(&self) -> String {
        match self.indent_char() {
            ' ' => " ".repeat(self.tabsize()),
            ch => ch.to_string(),
        }
    }

    /// Converts an alignment width into indent characters. With tabs the
    /// width rounds half up to whole stops.
    pub fn spaces_to_indent(&self, width: usize) -> String {
        if self.indent_char() == ' ' {
            " ".repeat(width)
        } else {
            "\t".repeat((width + self.tabsize() / 2) / self.tabsize())
        }
    }

    pub fn param_indent(&self) -> ParamIndent {
        match self.convention {
            Convention::Gnu | Convention::Google => ParamIndent::DoubleIndent,
            Convention::Default => ParamIndent::VertAlign,
        }
    }

    /// Applies the filename casing convention to a type name.
    pub fn convert_case(&self, text: &str) -> String {
        match self.filename {
            FileNameStyle::Snake => snake_case(text),
            FileNameStyle::Hyphen => snake_case(text).replace('_', "-"),
            FileNameStyle::Lower => snake_case(text).replace('_', ""),
            FileNameStyle::Upper => snake_case(text).replace('_', "").to_uppercase(),
            FileNameStyle::Camel => camel_case(text),
            FileNameStyle::Pascal => pascal_case(text),
            FileNameStyle::Const => snake_case(text).to_uppercase(),
        }
    }
}

// -- Case conversion ----------------------------------------------------------

/// Canonical tokenizer behind every casing convention.
/// `"HTTPServerError"` → `"http_server_error"`.
pub fn snake_case(text: &str) -> String {
    let text = RE_ACRONYM_EDGE.replace_all(text, "${1}_${2}");
    let text = RE_CASE_EDGE.replace_all(&text, "${1}_${2}");
    RE_UNDERSCORE_RUN.replace_all(&text, "_").to_lowercase()
}

/// `"HTTPServerError"` → `"httpServerError"`.
pub fn camel_case(text: &str) -> String {
    let snake = snake_case(text);
    let mut parts = snake.split('_');
    let mut out = parts.next().unwrap_or("").to_string();
    for part in parts {
        out.push_str(&capitalize(part));
    }
    out
}

/// `"http_server_error"` → `"HttpServerError"`.
pub fn pascal_case(text: &str) -> String {
    snake_case(text).split('_').map(capitalize).collect()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Include-guard macro: namespace segments and the type name uppercased with
/// underscores removed, the suffix with its dots stripped.
/// `(["foo", "bar"], "MyClass", ".hpp")` → `"FOO_BAR_MYCLASS_HPP"`.
pub fn header_guard(namespaces: &[String], type_name: &str, suffix: &str) -> String {
    let suffix = suffix.replace('.', "").to_uppercase();
    let ns = namespaces
        .iter()
        .map(|n| n.replace('_', "").to_uppercase())
        .collect::<Vec<_>>()
        .join("_");
    let name = type_name.replace('_', "").to_uppercase();
    format!("{}_{}_{}", ns, name, suffix)
}
