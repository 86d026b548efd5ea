//! Definition rendering — function stubs and whole-file assembly.
//!
//! Pure functions from the scanned tree and a style to generated text;
//! callers decide where the text goes.

use crate::model::{Func, Scope, Tree};
use crate::patterns;
use crate::style::{ParamIndent, Style};

/// One definition stub: template prefixes, surviving specifiers, qualified
/// name, parameter list (wrapped past the column limit), braced body.
pub fn function_definition(tree: &Tree, func: &Func, style: &Style) -> String {
    let mut template = String::new();
    if let Some(Scope::Class(idx)) = func.parent {
        if let Some(ref params) = tree.classes[idx].template_params {
            template.push_str("template ");
            template.push_str(params);
            template.push('\n');
        }
    }
    if let Some(ref params) = func.template_params {
        template.push_str("template ");
        template.push_str(params);
        template.push('\n');
    }

    let return_type = match func.return_type {
        Some(ref t) => style.type_spacing(t),
        None => String::new(),
    };
    // Of the head specifiers only `inline` belongs in a definition.
    let head = if func.is_inline() { "inline " } else { "" };
    let tail = match func.tail_specifiers {
        Some(ref t) => format!(" {}", t),
        None => String::new(),
    };

    let pre = format!(
        "{}{}{}{}{}(",
        template,
        head,
        return_type,
        tree.qualified_name(func),
        style.space_after_name()
    );
    let post = format!("){}", tail);
    let params = wrapped_parameters(&func.parameters, &pre, &post, style);
    let body = if style.insert_todo {
        format!("{}// TODO\n", style.indent_unit())
    } else {
        String::new()
    };
    format!("{}{}{}{}{}}}", pre, params, post, style.block_start(), body)
}

/// Renders the parameter list given the text before and after it on the
/// final declaration line. Parameters are re-extracted from the raw text;
/// whatever the pattern cannot name is dropped.
fn wrapped_parameters(raw: &str, pre: &str, post: &str, style: &Style) -> String {
    let params: Vec<String> = patterns::RE_PARAMETER
        .captures_iter(raw)
        .filter_map(|caps| match (caps.get(1), caps.get(2)) {
            (Some(t), Some(n)) => {
                Some(format!("{}{}", t.as_str().trim_start(), n.as_str().trim_end()))
            }
            _ => None,
        })
        .collect();

    let line = pre.rsplit('\n').next().unwrap_or(pre);
    let single = params.join(", ");
    if line.len() + single.len() + post.len() <= style.columns() {
        return single;
    }
    let Some(first) = params.first() else {
        return single;
    };

    let mut indent = match style.param_indent() {
        ParamIndent::VertAlign => style.spaces_to_indent(line.len()),
        ParamIndent::DoubleIndent => style.indent_unit().repeat(2),
    };
    let mut out = String::new();
    // An overlong first parameter cannot align under the parenthesis; break
    // the line and fall back to double indent.
    if style.param_indent() == ParamIndent::DoubleIndent
        || line.len() + first.len() + 1 > style.columns()
    {
        indent = style.indent_unit().repeat(2);
        out.push('\n');
        out.push_str(&indent);
    }
    for (i, param) in params.iter().enumerate() {
        out.push_str(param);
        if i + 1 < params.len() {
            out.push_str(",\n");
            out.push_str(&indent);
        }
    }
    out
}

/// Assembles a definition file: include line (left out of inline output,
/// which the header includes the other way around), file-scope stubs, then
/// one block per root namespace.
pub fn definition_file(tree: &Tree, header_name: &str, style: &Style) -> String {
    let mut out = String::new();
    if !tree.needs_inline_output() {
        out.push_str(&format!("#include \"{}\"\n\n", header_name));
    }

    let file_scope = tree.functions_in(None);
    if !file_scope.is_empty() {
        let stubs: Vec<String> = file_scope
            .iter()
            .map(|f| function_definition(tree, f, style))
            .collect();
        out.push_str(&stubs.join("\n\n"));
        out.push_str("\n\n");
    }

    let mut blocks = Vec::new();
    for idx in tree.root_namespaces() {
        let ns = &tree.namespaces[idx];
        let stubs: Vec<String> = tree
            .functions_in(Some(idx))
            .iter()
            .map(|f| function_definition(tree, f, style))
            .collect();
        let mut block = format!("namespace {}{}\n", ns.name, style.block_start());
        block.push_str(&stubs.join("\n\n"));
        block.push_str(&format!("\n\n}} /* namespace {} */", ns.name));
        blocks.push(block);
    }
    out.push_str(&blocks.join("\n\n\n"));
    out.push('\n');
    out
}
