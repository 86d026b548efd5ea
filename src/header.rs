//! Header skeletons — guarded, namespaced type declarations.
//!
//! This is the generating half of the pair: instead of scanning an existing
//! header it produces a fresh one with an include guard and the special
//! member declarations the type kind calls for.

use crate::style::{self, Style};
use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Which kind of type the skeleton declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Struct,
    Enum,
}

impl TypeKind {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "class" => Ok(TypeKind::Class),
            "struct" => Ok(TypeKind::Struct),
            "enum" => Ok(TypeKind::Enum),
            _ => Err(anyhow!(
                "unknown type kind: {}. Use class, struct, or enum",
                name
            )),
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
        }
    }
}

/// Splits `(<NAMESPACE>::)*<NAME>` into namespace segments and the type name.
/// Segments are trimmed; the last one is the name.
pub fn split_qualified(input: &str) -> (Vec<String>, String) {
    let mut segments: Vec<String> = input
        .trim()
        .split("::")
        .map(|s| s.trim().to_string())
        .collect();
    let name = segments.pop().unwrap_or_default();
    (segments, name)
}

/// Renders the full header text for a new type.
///
/// A `class` gets public default constructor, destructor, copy and move
/// constructor declarations and an empty private section; a `struct` only
/// the default constructor; an `enum` an empty body.
pub fn skeleton(
    kind: TypeKind,
    namespaces: &[String],
    name: &str,
    suffix: &str,
    style: &Style,
) -> String {
    let guard = style::header_guard(namespaces, name, suffix);
    let mut out = format!("#ifndef {}\n#define {}\n\n", guard, guard);
    if !namespaces.is_empty() {
        out.push_str("namespace ");
        out.push_str(&namespaces.join("::"));
        out.push_str(style.block_start());
        out.push('\n');
    }

    out.push_str(kind.keyword());
    out.push(' ');
    out.push_str(name);
    out.push_str(style.block_start());
    if kind == TypeKind::Class {
        out.push_str("public:\n");
    }
    if kind == TypeKind::Class || kind == TypeKind::Struct {
        out.push_str(&format!(
            "{}{}{}();\n",
            style.indent_unit(),
            name,
            style.space_after_name()
        ));
    }
    if kind == TypeKind::Class {
        out.push_str(&format!(
            "{}~{}{}();\n",
            style.indent_unit(),
            name,
            style.space_after_name()
        ));
        let copy_arg = style.type_spacing(&format!("const {} &", name));
        out.push_str(&format!(
            "{}{}{}({}other);\n",
            style.indent_unit(),
            name,
            style.space_after_name(),
            copy_arg
        ));
        let move_arg = style.type_spacing(&format!("{} &&", name));
        out.push_str(&format!(
            "{}{}{}({}other);\n",
            style.indent_unit(),
            name,
            style.space_after_name(),
            move_arg
        ));
        out.push_str("\nprivate:\n");
    }
    out.push_str("};\n");

    if !namespaces.is_empty() {
        out.push_str(&format!("\n}} /* namespace {} */\n", namespaces.join("::")));
    }
    out.push_str(&format!("\n#endif /* {} */\n", guard));
    out
}

/// Where the header lands: one directory per namespace segment, verbatim,
/// then the case-converted type name plus suffix.
pub fn output_path(namespaces: &[String], name: &str, suffix: &str, style: &Style) -> PathBuf {
    let mut path = PathBuf::new();
    for ns in namespaces {
        path.push(ns);
    }
    path.push(format!("{}{}", style.convert_case(name), suffix));
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Convention, FileNameStyle};

    #[test]
    fn splits_qualified_names() {
        assert_eq!(split_qualified("MyClass"), (vec![], "MyClass".to_string()));
        assert_eq!(
            split_qualified("foo::bar::MyClass"),
            (
                vec!["foo".to_string(), "bar".to_string()],
                "MyClass".to_string()
            )
        );
        assert_eq!(
            split_qualified("  a :: B "),
            (vec!["a".to_string()], "B".to_string())
        );
    }

    #[test]
    fn class_skeleton_with_namespaces() {
        let ns = vec!["foo".to_string(), "bar".to_string()];
        let out = skeleton(TypeKind::Class, &ns, "MyClass", ".hpp", &Style::default());
        assert_eq!(
            out,
            "#ifndef FOO_BAR_MYCLASS_HPP\n\
             #define FOO_BAR_MYCLASS_HPP\n\
             \n\
             namespace foo::bar {\n\
             \n\
             class MyClass {\n\
             public:\n\
             \x20   MyClass ();\n\
             \x20   ~MyClass ();\n\
             \x20   MyClass (const MyClass &other);\n\
             \x20   MyClass (MyClass &&other);\n\
             \n\
             private:\n\
             };\n\
             \n\
             } /* namespace foo::bar */\n\
             \n\
             #endif /* FOO_BAR_MYCLASS_HPP */\n"
        );
    }

    #[test]
    fn class_skeleton_google() {
        let style = Style {
            convention: Convention::Google,
            ..Style::default()
        };
        let ns = vec!["ui".to_string()];
        let out = skeleton(TypeKind::Class, &ns, "Widget", ".hpp", &style);
        assert_eq!(
            out,
            "#ifndef UI_WIDGET_HPP\n\
             #define UI_WIDGET_HPP\n\
             \n\
             namespace ui\n\
             {\n\
             \n\
             class Widget\n\
             {\n\
             public:\n\
             \x20 Widget();\n\
             \x20 ~Widget();\n\
             \x20 Widget(const Widget & other);\n\
             \x20 Widget(Widget && other);\n\
             \n\
             private:\n\
             };\n\
             \n\
             } /* namespace ui */\n\
             \n\
             #endif /* UI_WIDGET_HPP */\n"
        );
    }

    #[test]
    fn struct_skeleton_has_only_default_constructor() {
        let out = skeleton(TypeKind::Struct, &[], "Point", ".hpp", &Style::default());
        assert_eq!(
            out,
            "#ifndef _POINT_HPP\n\
             #define _POINT_HPP\n\
             \n\
             struct Point {\n\
             \x20   Point ();\n\
             };\n\
             \n\
             #endif /* _POINT_HPP */\n"
        );
    }

    #[test]
    fn enum_skeleton_is_empty() {
        let out = skeleton(TypeKind::Enum, &[], "Color", ".hpp", &Style::default());
        assert_eq!(
            out,
            "#ifndef _COLOR_HPP\n\
             #define _COLOR_HPP\n\
             \n\
             enum Color {\n\
             };\n\
             \n\
             #endif /* _COLOR_HPP */\n"
        );
    }

    #[test]
    fn output_path_uses_namespace_directories() {
        let ns = vec!["net".to_string(), "http".to_string()];
        let path = output_path(&ns, "MyClass", ".hpp", &Style::default());
        let expected: PathBuf = ["net", "http", "my_class.hpp"].iter().collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn output_path_respects_filename_style() {
        let style = Style {
            filename: FileNameStyle::Pascal,
            ..Style::default()
        };
        let path = output_path(&[], "my_class", ".hpp", &style);
        assert_eq!(path, PathBuf::from("MyClass.hpp"));
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(TypeKind::parse("class").is_ok());
        assert!(TypeKind::parse("union").is_err());
    }
}
