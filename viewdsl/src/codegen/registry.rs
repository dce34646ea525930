//! The helper constructor registry and its text format.
//!
//! ```text
//! # Lines starting with `#` are comments
//! android.widget.TextView(text: CharSequence)
//! android.widget.TextView(text: CharSequence, textColor: int)
//! ```
//!
//! Each line declares one helper constructor for the widget named by the
//! qualified name. The property types are matched against the JVM
//! parameter types of the setters by suffix, so both `CharSequence` and
//! `java.lang.CharSequence` work.
use codemap::Span;
use std::{collections::HashMap, fmt};

use super::diag::{Diag, FileRef};
use crate::metadata::Ident;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: Ident,
    pub ty: Ident,
}

impl PropertySpec {
    pub fn new(name: impl Into<Ident>, ty: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl fmt::Display for PropertySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

/// The properties of one helper constructor, in parameter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperConstructorSpec {
    pub properties: Vec<PropertySpec>,
    /// The registry line this spec was read from.
    pub span: Option<Span>,
}

impl HelperConstructorSpec {
    pub fn new(properties: impl IntoIterator<Item = PropertySpec>) -> Self {
        Self {
            properties: properties.into_iter().collect(),
            span: None,
        }
    }
}

impl fmt::Display for HelperConstructorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.properties.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}

/// Maps a widget's qualified name to its helper constructors.
#[derive(Debug, Clone, Default)]
pub struct HelperConstructorRegistry {
    specs: HashMap<Ident, Vec<HelperConstructorSpec>>,
}

impl HelperConstructorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, fq_name: impl Into<Ident>, spec: HelperConstructorSpec) {
        self.specs.entry(fq_name.into()).or_default().push(spec);
    }

    pub fn lookup(&self, fq_name: &str) -> Option<&[HelperConstructorSpec]> {
        self.specs.get(fq_name).map(Vec::as_slice)
    }

    pub fn contains(&self, fq_name: &str) -> bool {
        self.specs.contains_key(fq_name)
    }

    pub fn len(&self) -> usize {
        self.specs.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Parse a registry file and add its entries to `self`. Syntax errors
    /// are reported to `diag`; the whole file is rejected if any occurs.
    pub fn parse_file(&mut self, file: &FileRef, diag: &mut Diag) -> Result<(), ()> {
        let mut parsed = Vec::new();
        let mut failed = false;

        let source = file.source();
        let mut line_start = 0;
        for line in source.split_inclusive('\n') {
            let start = line_start;
            line_start += line.len();

            let trimmed_start = line.len() - line.trim_start().len();
            let text = line.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let lo = start + trimmed_start;
            let span = file.span.subspan(lo as u64, (lo + text.len()) as u64);

            match parse_line(text) {
                Ok((fq_name, properties)) => {
                    if let Some(dupe) = first_duplicate(&properties) {
                        diag.error(
                            format!("property `{}` is specified for multiple times", dupe),
                            Some(span),
                        );
                        failed = true;
                        continue;
                    }
                    parsed.push((
                        fq_name,
                        HelperConstructorSpec {
                            properties,
                            span: Some(span),
                        },
                    ));
                }
                Err(message) => {
                    diag.error(message, Some(span));
                    failed = true;
                }
            }
        }

        if failed {
            return Err(());
        }

        for (fq_name, spec) in parsed {
            let existing = self.specs.entry(fq_name.clone()).or_default();
            if existing.iter().any(|e| e.properties == spec.properties) {
                diag.warning(
                    format!(
                        "helper constructor `{}({})` is declared for multiple times",
                        fq_name, spec
                    ),
                    spec.span,
                );
                continue;
            }
            log::trace!("helper constructor {}({})", fq_name, spec);
            existing.push(spec);
        }

        Ok(())
    }
}

fn parse_line(text: &str) -> Result<(Ident, Vec<PropertySpec>), String> {
    let open = text
        .find('(')
        .ok_or_else(|| "expected `(` after the widget name".to_string())?;
    let rest = &text[open + 1..];
    let close = rest
        .rfind(')')
        .ok_or_else(|| "expected `)` at the end of the property list".to_string())?;
    if !rest[close + 1..].trim().is_empty() {
        return Err("unexpected text after `)`".to_string());
    }

    let fq_name = text[..open].trim();
    if !is_qualified_name(fq_name) {
        return Err(format!("`{}` is not a valid qualified class name", fq_name));
    }

    let list = rest[..close].trim();
    if list.is_empty() {
        return Err("a helper constructor must have at least one property".to_string());
    }

    let properties = list
        .split(',')
        .map(|prop| {
            let mut parts = prop.splitn(2, ':');
            let name = parts.next().unwrap_or_default().trim();
            let ty = parts
                .next()
                .ok_or_else(|| format!("expected `name: Type`, found `{}`", prop.trim()))?
                .trim();
            if !is_ident(name) {
                return Err(format!("`{}` is not a valid property name", name));
            }
            if !is_qualified_name(ty) {
                return Err(format!("`{}` is not a valid type name", ty));
            }
            Ok(PropertySpec::new(name, ty))
        })
        .collect::<Result<Vec<_>, String>>()?;

    Ok((fq_name.to_owned(), properties))
}

fn first_duplicate(props: &[PropertySpec]) -> Option<&str> {
    props
        .iter()
        .enumerate()
        .find(|(i, p)| props[..*i].iter().any(|q| q.name == p.name))
        .map(|(_, p)| p.name.as_str())
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn is_qualified_name(s: &str) -> bool {
    s.split('.').all(is_ident)
}
