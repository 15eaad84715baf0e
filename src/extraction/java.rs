//! Regex-based Java fact extraction.
//!
//! No parsing or type resolution happens here: the extractor reads the
//! `package` declaration, the `import` declarations and the names of declared
//! types. Every declared type of a file shares that file's imports.

use super::ClassFactExtractor;
use crate::core::ClassFact;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

static PACKAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bpackage\s+([\w.]+)\s*;").unwrap());

static IMPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bimport\s+(?:static\s+)?([\w.]+(?:\.\*)?)\s*;").unwrap());

static TYPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:^|[^\w.$@])((?:(?:public|protected|private|static|final|abstract|sealed|non-sealed|strictfp)\s+)*)(@\s*interface|class|interface|enum|record)\s+([A-Za-z_$][\w$]*)",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

/// A type declared in a Java compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub kind: TypeKind,
    pub is_abstract: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaClassFactExtractor;

impl JavaClassFactExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn package(content: &str) -> Option<String> {
        let code = strip_comments_and_literals(content);
        package_of(&code)
    }

    /// Imported names as written, static and wildcard imports included.
    pub fn imports(content: &str) -> Vec<String> {
        let code = strip_comments_and_literals(content);
        imports_of(&code)
    }

    pub fn declared_types(content: &str) -> Vec<TypeDeclaration> {
        let code = strip_comments_and_literals(content);
        declared_types_of(&code)
    }
}

impl ClassFactExtractor for JavaClassFactExtractor {
    fn extract_source(&self, content: &str) -> Vec<ClassFact> {
        let code = strip_comments_and_literals(content);
        let package = package_of(&code);
        let imports = imports_of(&code);
        let types = declared_types_of(&code);

        if types.is_empty() {
            debug!("No type declarations found in compilation unit");
        }

        types
            .into_iter()
            .map(|decl| {
                let qualified_name = match &package {
                    Some(pkg) => format!("{pkg}.{}", decl.name),
                    None => decl.name,
                };
                ClassFact::new(qualified_name, imports.iter().cloned(), decl.is_abstract)
            })
            .collect()
    }
}

fn package_of(code: &str) -> Option<String> {
    PACKAGE_PATTERN
        .captures(code)
        .map(|caps| caps[1].to_string())
}

fn imports_of(code: &str) -> Vec<String> {
    IMPORT_PATTERN
        .captures_iter(code)
        .map(|caps| caps[1].to_string())
        .collect()
}

fn declared_types_of(code: &str) -> Vec<TypeDeclaration> {
    let mut seen = HashSet::new();
    let mut types = Vec::new();

    for caps in TYPE_PATTERN.captures_iter(code) {
        let modifiers = caps.get(1).map_or("", |m| m.as_str());
        let keyword = &caps[2];
        let name = caps[3].to_string();

        let kind = match keyword {
            "class" => TypeKind::Class,
            "interface" => TypeKind::Interface,
            "enum" => TypeKind::Enum,
            "record" => TypeKind::Record,
            _ => TypeKind::Annotation,
        };

        if kind == TypeKind::Record {
            let end = caps.get(3).map_or(code.len(), |m| m.end());
            let rest = code[end..].trim_start();
            if !rest.starts_with('(') && !rest.starts_with('<') {
                continue;
            }
        }

        let is_abstract = match kind {
            TypeKind::Interface | TypeKind::Annotation => true,
            TypeKind::Class => modifiers.split_whitespace().any(|m| m == "abstract"),
            TypeKind::Enum | TypeKind::Record => false,
        };

        if seen.insert(name.clone()) {
            types.push(TypeDeclaration {
                name,
                kind,
                is_abstract,
            });
        }
    }

    types
}

#[derive(Clone, Copy, PartialEq)]
enum Scan {
    Code,
    LineComment,
    BlockComment,
    Str,
    TextBlock,
    Char,
}

/// Blank out comments and the contents of string, text block and char
/// literals. Line breaks are kept.
fn strip_comments_and_literals(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let at = |i: usize| chars.get(i).copied();
    let mut out = String::with_capacity(source.len());
    let mut state = Scan::Code;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match state {
            Scan::Code => match c {
                '/' if at(i + 1) == Some('/') => {
                    state = Scan::LineComment;
                    i += 2;
                    continue;
                }
                '/' if at(i + 1) == Some('*') => {
                    state = Scan::BlockComment;
                    out.push(' ');
                    i += 2;
                    continue;
                }
                '"' if at(i + 1) == Some('"') && at(i + 2) == Some('"') => {
                    state = Scan::TextBlock;
                    out.push('"');
                    i += 3;
                    continue;
                }
                '"' => {
                    state = Scan::Str;
                    out.push('"');
                }
                '\'' => {
                    state = Scan::Char;
                    out.push('\'');
                }
                _ => out.push(c),
            },
            Scan::LineComment => {
                if c == '\n' {
                    state = Scan::Code;
                    out.push('\n');
                }
            }
            Scan::BlockComment => {
                if c == '*' && at(i + 1) == Some('/') {
                    state = Scan::Code;
                    i += 2;
                    continue;
                }
                if c == '\n' {
                    out.push('\n');
                }
            }
            Scan::Str | Scan::Char => {
                let quote = if state == Scan::Str { '"' } else { '\'' };
                if c == '\\' {
                    i += 2;
                    continue;
                }
                if c == quote {
                    state = Scan::Code;
                    out.push(quote);
                } else if c == '\n' {
                    state = Scan::Code;
                    out.push('\n');
                }
            }
            Scan::TextBlock => {
                if c == '\\' {
                    i += 2;
                    continue;
                }
                if c == '"' && at(i + 1) == Some('"') && at(i + 2) == Some('"') {
                    state = Scan::Code;
                    out.push('"');
                    i += 3;
                    continue;
                }
                if c == '\n' {
                    out.push('\n');
                }
            }
        }
        i += 1;
    }

    out
}
