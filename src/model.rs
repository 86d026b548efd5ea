//! Entity model — spans, scoped entities, and the scanned tree.
//!
//! Entities point at their parents by index into the tree's arenas; `Scope`
//! says which arena. A tree is built once by the scanner and only queried
//! afterwards.

use crate::patterns;

/// Byte range of an entity in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Strict containment: shared boundaries do not nest.
    pub fn contains(&self, other: Span) -> bool {
        self.start < other.start && self.end > other.end
    }
}

/// Parent reference into the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Namespace(usize),
    Class(usize),
}

/// A `namespace name { ... }` block. C++17 nested definitions
/// (`namespace a::b`) stay one entity with the qualified name.
#[derive(Debug, Clone)]
pub struct Namespace {
    pub name: String,
    pub span: Span,
    pub parent: Option<usize>,
}

/// A `class` or `struct` definition.
#[derive(Debug, Clone)]
pub struct Class {
    pub name: String,
    pub keyword: String,
    pub template_params: Option<String>,
    pub span: Span,
    pub parent: Option<Scope>,
}

impl Class {
    /// Name as it appears in a member's qualifier: a template class carries
    /// its parameter names, so `Pair` with `<typename T, class U>` becomes
    /// `Pair<T,U>`.
    pub fn display_name(&self) -> String {
        let Some(ref params) = self.template_params else {
            return self.name.clone();
        };
        let names: Vec<&str> = patterns::RE_TEMPLATE_NAME
            .captures_iter(params)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect();
        if names.is_empty() {
            return self.name.clone();
        }
        format!("{}<{}>", self.name, names.join(","))
    }
}

/// A function declaration (free function, member, constructor, destructor).
#[derive(Debug, Clone)]
pub struct Func {
    pub name: String,
    pub template_params: Option<String>,
    pub head_specifiers: Option<String>,
    pub return_type: Option<String>,
    pub parameters: String,
    pub tail_specifiers: Option<String>,
    pub span: Span,
    pub parent: Option<Scope>,
}

impl Func {
    /// True when the declaration carried an `inline` specifier.
    pub fn is_inline(&self) -> bool {
        self.head_specifiers
            .as_deref()
            .is_some_and(|h| h.split(' ').any(|s| s == "inline"))
    }
}

/// Everything scanned out of one header.
#[derive(Debug, Default)]
pub struct Tree {
    pub namespaces: Vec<Namespace>,
    pub classes: Vec<Class>,
    pub functions: Vec<Func>,
}

impl Tree {
    /// Indices of namespaces without a namespace parent, in scan order.
    pub fn root_namespaces(&self) -> Vec<usize> {
        (0..self.namespaces.len())
            .filter(|&i| self.namespaces[i].parent.is_none())
            .collect()
    }

    /// Functions grouped under one root namespace (`None` = file scope),
    /// in scan order.
    pub fn functions_in(&self, root: Option<usize>) -> Vec<&Func> {
        self.functions
            .iter()
            .filter(|f| self.root_namespace(f) == root)
            .collect()
    }

    /// The top-most namespace ancestor of a function, if any.
    pub fn root_namespace(&self, func: &Func) -> Option<usize> {
        let mut cursor = func.parent;
        let mut last = None;
        while let Some(scope) = cursor {
            last = Some(scope);
            cursor = match scope {
                Scope::Class(i) => self.classes[i].parent,
                Scope::Namespace(i) => self.namespaces[i].parent.map(Scope::Namespace),
            };
        }
        match last {
            Some(Scope::Namespace(i)) => Some(i),
            _ => None,
        }
    }

    /// Qualified name of a function as written in its definition: every
    /// class and namespace ancestor contributes except the root namespace,
    /// whose emitted block the definition sits in.
    pub fn qualified_name(&self, func: &Func) -> String {
        let root = self.root_namespace(func);
        let mut qualifiers = Vec::new();
        let mut cursor = func.parent;
        while let Some(scope) = cursor {
            match scope {
                Scope::Class(i) => {
                    qualifiers.push(self.classes[i].display_name());
                    cursor = self.classes[i].parent;
                }
                Scope::Namespace(i) => {
                    if Some(i) != root {
                        qualifiers.push(self.namespaces[i].name.clone());
                    }
                    cursor = self.namespaces[i].parent.map(Scope::Namespace);
                }
            }
        }
        qualifiers.reverse();
        qualifiers.push(func.name.clone());
        qualifiers.join("::")
    }

    /// True when definitions must go to the inline suffix: any template
    /// class, template function, or explicitly inline function.
    pub fn needs_inline_output(&self) -> bool {
        self.classes.iter().any(|c| c.template_params.is_some())
            || self
                .functions
                .iter()
                .any(|f| f.template_params.is_some() || f.is_inline())
    }
}
