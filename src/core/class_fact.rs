use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A single type definition (class, interface, enum or record) together with
/// the qualified names its compilation unit imports.
///
/// Imports are opaque strings: they are never resolved against a classpath, so
/// `com.acme.Foo` and `com.acme.*` are simply two different names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassFact {
    qualified_name: String,
    #[serde(default)]
    imports: BTreeSet<String>,
    #[serde(default)]
    is_abstract: bool,
}

impl ClassFact {
    pub fn new<I, S>(qualified_name: impl Into<String>, imports: I, is_abstract: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            qualified_name: qualified_name.into(),
            imports: imports.into_iter().map(Into::into).collect(),
            is_abstract,
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn imports(&self) -> &BTreeSet<String> {
        &self.imports
    }

    /// True for abstract classes and interfaces.
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Whether this class imports the given fully qualified name.
    pub fn imports_class(&self, qualified_name: &str) -> bool {
        self.imports.contains(qualified_name)
    }
}

impl fmt::Display for ClassFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name)
    }
}
