//! Textual templates with `{{ key }}` placeholders.
use std::{collections::HashMap, fs, io, path::Path};

use super::errors::GenError;

const BUILTIN: &[(&str, &str)] = &[
    ("view", include_str!("../../templates/view.kt.tmpl")),
    ("file", include_str!("../../templates/file.kt.tmpl")),
];

pub const TEMPLATE_EXT: &str = "kt.tmpl";

#[derive(Debug, Clone)]
pub struct Templates {
    templates: HashMap<String, String>,
    indent: String,
}

impl Templates {
    /// Construct `Templates` with the built-in templates.
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            templates: BUILTIN
                .iter()
                .map(|&(name, text)| (name.to_owned(), text.to_owned()))
                .collect(),
            indent: indent.into(),
        }
    }

    /// Replace the built-in templates with ones found in `dir`. Templates
    /// missing from `dir` keep their built-in definitions.
    pub fn load_overrides(&mut self, dir: &Path) -> io::Result<()> {
        for &(name, _) in BUILTIN {
            let path = dir.join(format!("{}.{}", name, TEMPLATE_EXT));
            if path.is_file() {
                log::debug!("overriding template `{}` with {}", name, path.display());
                self.templates
                    .insert(name.to_owned(), fs::read_to_string(&path)?);
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.templates.insert(name.into(), text.into());
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Fill the template `name` using `bindings`. `indent` is always bound.
    pub fn render(&self, name: &str, bindings: &[(&str, &str)]) -> Result<String, GenError> {
        let text = self
            .templates
            .get(name)
            .ok_or_else(|| GenError::UnknownTemplate {
                name: name.to_owned(),
            })?;

        let mut out = String::with_capacity(text.len());
        let mut rest = text.as_str();
        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let close = after
                .find("}}")
                .ok_or_else(|| GenError::UnterminatedPlaceholder {
                    template: name.to_owned(),
                    offset: text.len() - rest.len() + open,
                })?;
            let key = after[..close].trim();
            let value = if key == "indent" {
                Some(self.indent.as_str())
            } else {
                bindings.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
            };
            let value = value.ok_or_else(|| GenError::UnboundPlaceholder {
                template: name.to_owned(),
                key: key.to_owned(),
            })?;
            out.push_str(value);
            rest = &after[close + 2..];
        }
        out.push_str(rest);

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates(text: &str) -> Templates {
        let mut t = Templates::new("  ");
        t.insert("t", text);
        t
    }

    #[test]
    fn substitutes_placeholders() {
        let t = templates("fun {{ name }}() {\n{{indent}}{{body}}\n}");
        assert_eq!(
            t.render("t", &[("name", "foo"), ("body", "bar()")]).unwrap(),
            "fun foo() {\n  bar()\n}"
        );
    }

    #[test]
    fn substitution_is_not_recursive() {
        let t = templates("{{a}}");
        assert_eq!(t.render("t", &[("a", "{{b}}")]).unwrap(), "{{b}}");
    }

    #[test]
    fn unknown_template() {
        let t = templates("");
        assert_eq!(
            t.render("nope", &[]),
            Err(GenError::UnknownTemplate {
                name: "nope".to_owned()
            })
        );
    }

    #[test]
    fn unbound_placeholder() {
        let t = templates("x {{ y }}");
        assert_eq!(
            t.render("t", &[]),
            Err(GenError::UnboundPlaceholder {
                template: "t".to_owned(),
                key: "y".to_owned()
            })
        );
    }

    #[test]
    fn unterminated_placeholder() {
        let t = templates("ab {{ y");
        assert_eq!(
            t.render("t", &[("y", "")]),
            Err(GenError::UnterminatedPlaceholder {
                template: "t".to_owned(),
                offset: 3
            })
        );
    }

    #[test]
    fn builtin_templates_are_complete() {
        let t = Templates::new("    ");
        let view_keys = [
            ("receiver", "ViewManager"),
            ("functionName", "textView"),
            ("themedFunctionName", "themedTextView"),
            ("lambdaArgType", "android.widget.TextView"),
            ("returnType", "android.widget.TextView"),
            ("factory", "F.TEXT_VIEW"),
        ];
        let out = t.render("view", &view_keys).unwrap();
        assert!(out.contains("inline fun ViewManager.textView("));
        t.render("file", &[("package", "p"), ("body", "")]).unwrap();
    }
}
