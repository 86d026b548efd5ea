//! Declaration patterns — whitespace-normalized, recursion-unrolled regexes.
//!
//! Declaration shapes are written as readable templates: a single literal
//! space stands for "any run of whitespace" and `(?R)` marks where a bracket
//! pattern nests into itself. `spaced` widens the spaces into `[ \t\n]+`
//! classes and `unroll` expands the self-reference a fixed number of times,
//! since the regex engine has no recursion. Everything is compiled once into
//! immutable statics.

use regex::Regex;
use std::sync::LazyLock;

/// How many times self-referencing bracket patterns are unrolled.
///
/// Brackets nested deeper than this are not matched in full: the pattern
/// silently closes at an inner bracket instead.
pub const NEST_DEPTH: usize = 8;

/// A possibly qualified identifier: `name`, `std::string`, `a::b::c`.
pub const IDENTIFIER: &str = r"(?:[a-zA-Z_][a-zA-Z0-9_]*(?:::[a-zA-Z_][a-zA-Z0-9_]*)*)";

const HEAD_SPECIFIER: &str = r"(?:static|inline|_Noreturn)";
const TAIL_SPECIFIER: &str = r"(?:const|(?:noexcept|throw)(?:\([^()]*\))?)";

// -- Template helpers ---------------------------------------------------------

static RE_WS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\n]+").unwrap());

/// Widens every literal whitespace run in a template into `[ \t\n]+`.
///
/// `"namespace (x)"` → `"namespace[ \t\n]+(x)"`. Already-widened runs are
/// collapsed first, so composing spaced templates stays idempotent.
fn spaced(template: &str) -> String {
    let collapsed = template.trim().replace(r"[ \t\n]+", " ");
    RE_WS_RUN.replace_all(&collapsed, r"[ \t\n]+").into_owned()
}

/// Expands the `(?R)` self-reference `NEST_DEPTH` times, then drops the
/// innermost leftover alternative.
fn unroll(base: &str) -> String {
    let mut pattern = base.to_string();
    for _ in 0..NEST_DEPTH {
        pattern = pattern.replace("(?R)", base);
    }
    pattern.replace("|(?R)", "")
}

/// `{ ... }` with balanced inner braces.
fn block() -> String {
    unroll(r"(?:\{(?:[^{}]|(?R))*\})")
}

/// `< ... >` with balanced inner angles (template parameter lists).
fn template_params() -> String {
    unroll(r"(?:<(?:[^<>]|(?R))*>)")
}

/// `< ... >` or `( ... )` inside a type: template arguments or a function
/// pointer's parameter list.
fn type_group() -> String {
    unroll(r"(?:[<(](?:[^<>()]|(?R))*[)>])")
}

/// A return or parameter type: optional `const`, qualified name, optional
/// bracket group, then the pointer/space run that separates it from the
/// declared name, e.g. `const std::vector<int> &` or `char *`.
fn value_type() -> String {
    spaced(&format!(
        r"(?:const )?(?:{IDENTIFIER})\s*(?:{})?(?: |\s*\*+\s*)(?:const)?\s*&*",
        type_group()
    ))
}

/// `template <...>` prefix; the space is optional in source (`template<T>`).
fn template_prefix() -> String {
    format!(r"template\s*(?P<tmpl>{})", template_params())
}

// -- Compiled patterns --------------------------------------------------------

/// `namespace name` up to (not including) the opening brace.
pub static RE_NAMESPACE_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&spaced(&format!(r"namespace ({IDENTIFIER})\s*"))).unwrap());

/// A balanced `{ ... }` block, nesting bounded by `NEST_DEPTH`.
pub static RE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(&block()).unwrap());

/// `template <...> class|struct Name` up to the opening brace.
pub static RE_CLASS_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&spaced(&format!(
        r"(?:{} )?(?P<kw>class|struct) (?P<name>{IDENTIFIER})\s*",
        template_prefix()
    )))
    .unwrap()
});

/// A class body: balanced block plus the terminating `;`.
pub static RE_CLASS_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"({})\s*;", block())).unwrap());

/// A function declaration. Named groups: `tmpl` (template parameters),
/// `head` (static/inline/_Noreturn run), `ret` (return type), `name`
/// (possibly a `~destructor`), `params` (raw parameter text), `tail`
/// (const/noexcept/throw run). Declarations with bodies do not match — the
/// parameter run cannot cross a `;`, and a `{` body never reaches one.
pub static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&spaced(&format!(
        r"(?:{tmpl} )?(?:(?P<head>{h}(?: {h})*) )?(?P<ret>{ty})?\s*(?P<name>~?{id})\s*\((?P<params>[^;]*?)\)\s*(?P<tail>{t}(?: {t})*)?\s*;",
        tmpl = template_prefix(),
        h = HEAD_SPECIFIER,
        ty = value_type(),
        id = IDENTIFIER,
        t = TAIL_SPECIFIER,
    )))
    .unwrap()
});

/// One named parameter inside a parameter list: `(type, name)` captures.
/// Unnamed parameters and `...` do not match and are dropped by wrapping.
pub static RE_PARAMETER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?:^|,)\s*({})({IDENTIFIER})", value_type())).unwrap()
});

/// Template parameter names: `typename T` / `class U` inside `<...>`.
pub static RE_TEMPLATE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?:typename|class)\s+({IDENTIFIER})")).unwrap());
