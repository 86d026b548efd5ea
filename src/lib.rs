//! cppgen — generate C/C++ definition files and header skeletons.
//!
//! `patterns` holds the declaration regexes, `scan` turns header text into a
//! `model::Tree` of namespaces, classes, and function declarations, and
//! `render` writes the matching definition stubs under a `style::Style`.
//! `header` is the opposite direction: it emits a fresh guarded header for a
//! new type.

pub mod header;
pub mod model;
pub mod patterns;
pub mod prompt;
pub mod render;
pub mod scan;
pub mod style;
