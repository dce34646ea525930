//! Helper constructor generation
use std::fmt;

use super::super::errors::{ErrorReport, GenError};
use super::{settergen, tintgen::TintInfo, CodeWriter, CommaSeparated, Ctx};
use crate::metadata::WidgetElement;

/// The registry key holding the helper constructors of `view`, if the
/// registry has any for it.
pub fn helper_key(ctx: &Ctx<'_>, view: &WidgetElement, tint: &TintInfo) -> Option<String> {
    let base_fq_name = tint.base_fq_name(&ctx.options.tint);
    let has_helpers = ctx.registry.contains(view.fq_name())
        || base_fq_name
            .as_ref()
            .map_or(false, |name| ctx.registry.contains(name));

    if has_helpers {
        // A tinted widget always uses the base widget's helper constructors
        Some(base_fq_name.unwrap_or_else(|| view.fq_name().to_owned()))
    } else {
        None
    }
}

/// Generate helper constructors for `view` from the registry entry `key`
/// (see [`helper_key`]).
pub fn gen_helper_constructors(
    ctx: &Ctx<'_>,
    view: &WidgetElement,
    tint: &TintInfo,
    key: &str,
    factory: &str,
    out: &mut CodeWriter<'_>,
) -> Result<(), ErrorReport> {
    let specs = ctx
        .registry
        .lookup(key)
        .ok_or_else(|| GenError::MissingHelperSpec {
            widget: view.fq_name().to_owned(),
            key: key.to_owned(),
        })?;

    let class_ty = tint
        .base_fq_name(&ctx.options.tint)
        .unwrap_or_else(|| view.fq_name().to_owned());
    let function_name = &tint.function_name;

    let mut report = ErrorReport::default();

    for spec in specs.iter() {
        let setters = match settergen::resolve_setters(view, spec) {
            Ok(x) => x,
            Err(e) => {
                report.extend(e);
                continue;
            }
        };

        log::debug!("helper constructor {}({})", function_name, spec);

        // `text: CharSequence?, textColor: Int`
        let params = CommaSeparated(spec.properties.iter().zip(setters.iter()).map(
            |(prop, setter)| {
                format!("{}: {}", prop.name, KotlinTy(&setter.params.types()[0]))
            },
        ));
        // `setText(text)`, `setTextColor(textColor)`
        let applications = spec
            .properties
            .iter()
            .zip(setters.iter())
            .map(|(prop, setter)| format!("{}({})", setter.name, prop.name));

        out.line(format_args!(
            "inline fun ViewManager.{}(theme: Int = 0, {}): {} {{",
            function_name, params, class_ty
        ));
        out.line(format_args!("return ankoView({}, theme) {{", factory));
        for line in applications.clone() {
            out.line(line);
        }
        out.line("}");
        out.line("}");

        out.line(format_args!(
            "inline fun ViewManager.{}(theme: Int = 0, {}, init: {}.() -> Unit): {} {{",
            function_name, params, class_ty, class_ty
        ));
        out.line(format_args!("return ankoView({}, theme) {{", factory));
        out.line("init()");
        for line in applications {
            out.line(line);
        }
        out.line("}");
        out.line("}");
        out.nl();
    }

    report.into_result(())
}

/// Renders a JVM type name as a Kotlin type.
///
/// `int` → `Int`, `java.lang.CharSequence` → `CharSequence?`,
/// `android.graphics.Point` → `android.graphics.Point?`
pub struct KotlinTy<'a>(pub &'a str);

impl fmt::Display for KotlinTy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = kotlin_primitive(self.0) {
            return write!(f, "{}", name);
        }

        if let Some(elem) = self.0.strip_suffix("[]") {
            return match kotlin_primitive(elem) {
                Some(name) => write!(f, "{}Array?", name),
                None => write!(f, "Array<{}>?", KotlinTy(elem)),
            };
        }

        let name = match self.0.strip_prefix("java.lang.") {
            Some(simple) if !simple.contains('.') => simple,
            _ => self.0,
        };
        // Nested classes are written with `$` in JVM names
        write!(f, "{}?", name.replace('$', "."))
    }
}

fn kotlin_primitive(jvm_name: &str) -> Option<&'static str> {
    Some(match jvm_name {
        "boolean" => "Boolean",
        "byte" => "Byte",
        "char" => "Char",
        "short" => "Short",
        "int" => "Int",
        "long" => "Long",
        "float" => "Float",
        "double" => "Double",
        _ => return None,
    })
}
