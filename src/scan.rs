//! Three-pass scanner — builds the entity tree from header source.
//!
//! Passes run over the whole source in a fixed order (namespaces, classes,
//! functions) so parents exist before children look for them. Every head
//! match searches forward for its body block; a head without one — an
//! unterminated construct — is silently dropped. Parents are assigned by a
//! linear rescan keeping the last containing span: outer entities are
//! scanned first, so the last one is the innermost.

use crate::model::{Class, Func, Namespace, Scope, Span, Tree};
use crate::patterns;
use regex::Regex;
use std::sync::LazyLock;

static RE_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Scans one header into a tree. Malformed input never fails — whatever the
/// patterns cannot place is left out.
pub fn scan(source: &str) -> Tree {
    let mut tree = Tree::default();
    scan_namespaces(source, &mut tree);
    scan_classes(source, &mut tree);
    scan_functions(source, &mut tree);
    tree
}

fn scan_namespaces(source: &str, tree: &mut Tree) {
    for caps in patterns::RE_NAMESPACE_HEAD.captures_iter(source) {
        let (Some(head), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(body) = patterns::RE_BLOCK.find_at(source, head.end()) else {
            continue;
        };
        let span = Span::new(head.start(), body.end());
        let parent = innermost_namespace(&tree.namespaces, span);
        tree.namespaces.push(Namespace {
            name: name.as_str().to_string(),
            span,
            parent,
        });
    }
}

fn scan_classes(source: &str, tree: &mut Tree) {
    for caps in patterns::RE_CLASS_HEAD.captures_iter(source) {
        let (Some(head), Some(keyword), Some(name)) =
            (caps.get(0), caps.name("kw"), caps.name("name"))
        else {
            continue;
        };
        let Some(body) = patterns::RE_CLASS_BODY.find_at(source, head.end()) else {
            continue;
        };
        let span = Span::new(head.start(), body.end());
        let parent = enclosing_scope(tree, span);
        tree.classes.push(Class {
            name: name.as_str().to_string(),
            keyword: keyword.as_str().to_string(),
            template_params: caps.name("tmpl").map(|m| m.as_str().to_string()),
            span,
            parent,
        });
    }
}

fn scan_functions(source: &str, tree: &mut Tree) {
    for caps in patterns::RE_FUNCTION.captures_iter(source) {
        let (Some(all), Some(name), Some(params)) =
            (caps.get(0), caps.name("name"), caps.name("params"))
        else {
            continue;
        };
        let span = Span::new(all.start(), all.end());
        let parent = enclosing_scope(tree, span);
        tree.functions.push(Func {
            name: name.as_str().to_string(),
            template_params: caps.name("tmpl").map(|m| m.as_str().to_string()),
            head_specifiers: caps.name("head").map(|m| squeeze(m.as_str())),
            return_type: caps.name("ret").map(|m| m.as_str().trim().to_string()),
            parameters: params.as_str().trim().to_string(),
            tail_specifiers: caps.name("tail").map(|m| squeeze(m.as_str())),
            span,
            parent,
        });
    }
}

/// Innermost already-scanned namespace strictly containing `span`.
fn innermost_namespace(namespaces: &[Namespace], span: Span) -> Option<usize> {
    let mut parent = None;
    for (i, ns) in namespaces.iter().enumerate() {
        if ns.span.contains(span) {
            parent = Some(i);
        }
    }
    parent
}

/// Innermost entity strictly containing `span`, classes taking precedence
/// over namespaces (a member's immediate parent is its class).
fn enclosing_scope(tree: &Tree, span: Span) -> Option<Scope> {
    let mut parent = None;
    for (i, class) in tree.classes.iter().enumerate() {
        if class.span.contains(span) {
            parent = Some(Scope::Class(i));
        }
    }
    if parent.is_none() {
        for (i, ns) in tree.namespaces.iter().enumerate() {
            if ns.span.contains(span) {
                parent = Some(Scope::Namespace(i));
            }
        }
    }
    parent
}

fn squeeze(text: &str) -> String {
    RE_WS.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_namespaces_get_parents() {
        let tree = scan(
            "namespace outer {\n\
             namespace inner {\n\
             void f();\n\
             }\n\
             void g();\n\
             }\n",
        );
        assert_eq!(tree.namespaces.len(), 2);
        assert_eq!(tree.namespaces[0].name, "outer");
        assert_eq!(tree.namespaces[0].parent, None);
        assert_eq!(tree.namespaces[1].name, "inner");
        assert_eq!(tree.namespaces[1].parent, Some(0));

        assert_eq!(tree.functions.len(), 2);
        assert_eq!(tree.functions[0].name, "f");
        assert_eq!(tree.functions[0].parent, Some(Scope::Namespace(1)));
        assert_eq!(tree.functions[1].name, "g");
        assert_eq!(tree.functions[1].parent, Some(Scope::Namespace(0)));
    }

    #[test]
    fn unterminated_namespace_is_dropped() {
        let tree = scan("namespace broken {\nvoid f();\n");
        assert!(tree.namespaces.is_empty());
        assert_eq!(tree.functions.len(), 1);
        assert_eq!(tree.functions[0].parent, None);
    }

    #[test]
    fn unterminated_class_is_dropped() {
        let tree = scan("class Broken {\nvoid f();\n");
        assert!(tree.classes.is_empty());
        assert_eq!(tree.functions.len(), 1);
    }

    #[test]
    fn class_members_attach_to_class() {
        let tree = scan("class A {\npublic:\n    A();\n    void f(int x);\n};\n");
        assert_eq!(tree.classes.len(), 1);
        assert_eq!(tree.classes[0].name, "A");
        assert_eq!(tree.classes[0].keyword, "class");

        assert_eq!(tree.functions.len(), 2);
        assert_eq!(tree.functions[0].name, "A");
        assert_eq!(tree.functions[0].parent, Some(Scope::Class(0)));
        assert_eq!(tree.functions[1].name, "f");
        assert_eq!(tree.functions[1].parameters, "int x");
        assert_eq!(tree.functions[1].parent, Some(Scope::Class(0)));
    }

    #[test]
    fn inner_class_wins_as_parent() {
        let tree = scan(
            "class Outer {\n\
             \x20   class Inner {\n\
             \x20       void m();\n\
             \x20   };\n\
             \x20   void o();\n\
             };\n",
        );
        assert_eq!(tree.classes.len(), 2);
        assert_eq!(tree.classes[1].name, "Inner");
        assert_eq!(tree.classes[1].parent, Some(Scope::Class(0)));
        assert_eq!(tree.functions[0].name, "m");
        assert_eq!(tree.functions[0].parent, Some(Scope::Class(1)));
        assert_eq!(tree.functions[1].name, "o");
        assert_eq!(tree.functions[1].parent, Some(Scope::Class(0)));
    }

    #[test]
    fn qualifier_keeps_everything_but_the_root_namespace() {
        let tree = scan(
            "namespace ns {\n\
             class Outer {\n\
             \x20   class Inner {\n\
             \x20       void functionName();\n\
             \x20   };\n\
             };\n\
             }\n",
        );
        let f = &tree.functions[0];
        assert!(matches!(f.parent, Some(Scope::Class(_))));
        assert_eq!(tree.root_namespace(f), Some(0));
        assert_eq!(tree.qualified_name(f), "Outer::Inner::functionName");
    }

    #[test]
    fn template_class_scans_and_routes_inline() {
        let tree = scan(
            "template <typename T, class U>\n\
             class Pair {\n\
             \x20   T first(U key);\n\
             };\n",
        );
        assert_eq!(tree.classes.len(), 1);
        assert_eq!(
            tree.classes[0].template_params.as_deref(),
            Some("<typename T, class U>")
        );
        assert!(tree.needs_inline_output());
        assert_eq!(tree.qualified_name(&tree.functions[0]), "Pair<T,U>::first");
    }

    #[test]
    fn struct_keyword_is_kept() {
        let tree = scan("struct Point {\n    int x;\n    int y;\n};\n");
        assert_eq!(tree.classes.len(), 1);
        assert_eq!(tree.classes[0].keyword, "struct");
        assert!(tree.functions.is_empty());
    }

    #[test]
    fn specifiers_are_normalized() {
        let tree = scan("class C {\n    static\n    inline int n() const\n    noexcept;\n};\n");
        let f = &tree.functions[0];
        assert_eq!(f.head_specifiers.as_deref(), Some("static inline"));
        assert_eq!(f.return_type.as_deref(), Some("int"));
        assert_eq!(f.tail_specifiers.as_deref(), Some("const noexcept"));
        assert!(f.is_inline());
    }
}
