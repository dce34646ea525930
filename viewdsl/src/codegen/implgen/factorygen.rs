//! Factory object generation
//!
//! Instead of repeating the construction logic in every generated function,
//! each widget receives one property in a shared `object`, which the
//! functions pass to `ankoView`.
use std::{collections::HashMap, fmt::Write};

use super::super::{errors::GenError, RendererKind};

const OBJECT_NAME_PREFIX: &str = "$$Anko$$Factories$$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryEntry {
    /// e.g., `TEXT_VIEW`
    pub key: String,
    /// The body of the construction lambda.
    pub expr: String,
}

/// An `object` holding construction lambdas. Entries are emitted in the
/// order they were registered.
#[derive(Debug)]
pub struct FactoryObject {
    /// e.g., `` `$$Anko$$Factories$$Sdk15View` ``
    name: String,
    entries: Vec<FactoryEntry>,
    /// `key` → index into `entries`
    index: HashMap<String, usize>,
}

impl FactoryObject {
    pub fn new(artifact_name: &str, kind: RendererKind) -> Self {
        Self {
            name: format!(
                "`{}{}{}`",
                OBJECT_NAME_PREFIX,
                identcase::to_pascal_case(artifact_name),
                kind.suffix()
            ),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[FactoryEntry] {
        &self.entries
    }

    /// Register the construction lambda body `expr` for the widget whose DSL
    /// functions are named `function_name`, and return an expression
    /// referring to the lambda.
    ///
    /// Registering the same widget again returns the same reference.
    pub fn register(&mut self, function_name: &str, expr: String) -> Result<String, GenError> {
        let key = property_key(function_name);

        if let Some(&i) = self.index.get(&key) {
            let existing = &self.entries[i];
            if existing.expr != expr {
                return Err(GenError::FactoryKeyCollision {
                    object: self.name.clone(),
                    key,
                    existing: existing.expr.clone(),
                    new: expr,
                });
            }
        } else {
            log::trace!("{}.{} = {}", self.name, key, expr);
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push(FactoryEntry {
                key: key.clone(),
                expr,
            });
        }

        Ok(format!("{}.{}", self.name, key))
    }

    /// Render the `object` declaration. Produces nothing if no entries were
    /// registered.
    pub fn render(&self, indent: &str) -> String {
        let mut out = String::new();
        if self.entries.is_empty() {
            return out;
        }

        writeln!(out, "object {} {{", self.name).unwrap();
        for entry in self.entries.iter() {
            writeln!(
                out,
                "{}val {} = {{ ctx: Context -> {} }}",
                indent, entry.key, entry.expr
            )
            .unwrap();
        }
        writeln!(out, "}}").unwrap();
        writeln!(out).unwrap();
        out
    }
}

/// `tintedButton` → `TINTED_BUTTON`
pub fn property_key(function_name: &str) -> String {
    identcase::to_constant_case(&identcase::capitalize(function_name))
}
