//! DSL function generation
use either::{Left, Right};
use std::fmt;

use super::{
    errors::{ErrorReport, GenError},
    registry::HelperConstructorRegistry,
    template::Templates,
    GenFlags, RenderOptions, RendererKind,
};
use crate::metadata::WidgetElement;

pub mod ctorgen;
pub mod factorygen;
mod helpergen;
pub mod settergen;
pub mod tintgen;

/// Receiver types of the generated builder functions.
mod receivers {
    pub const VIEW_MANAGER: &str = "ViewManager";
    pub const CONTEXT: &str = "Context";
    pub const ACTIVITY: &str = "Activity";
}

pub struct Ctx<'a> {
    pub options: &'a RenderOptions,
    pub registry: &'a HelperConstructorRegistry,
    pub templates: &'a Templates,
}

/// Generate the factory object and the DSL functions for one widget family.
///
/// Abstract widgets are skipped. Errors from all widgets are collected; if
/// there are any, nothing is returned.
pub fn gen_views(
    ctx: &Ctx<'_>,
    kind: RendererKind,
    views: &[WidgetElement],
) -> Result<String, ErrorReport> {
    let mut factory = factorygen::FactoryObject::new(&ctx.options.artifact_name, kind);
    let mut functions = CodeWriter::new(ctx.templates.indent());
    let mut report = ErrorReport::default();

    for view in views.iter().filter(|view| !view.class.is_abstract) {
        if let Err(e) = gen_view(ctx, kind, view, &mut factory, &mut functions) {
            report.extend(e);
        }
    }

    log::debug!(
        "{}: {} factory entries, {} error(s)",
        factory.name(),
        factory.entries().len(),
        report.errors.len()
    );

    let mut out = factory.render(ctx.templates.indent());
    out.push_str(&functions.finish());
    report.into_result(out)
}

fn gen_view(
    ctx: &Ctx<'_>,
    kind: RendererKind,
    view: &WidgetElement,
    factory: &mut factorygen::FactoryObject,
    out: &mut CodeWriter<'_>,
) -> Result<(), ErrorReport> {
    let class = &view.class;
    let flags = ctx.options.flags;

    let tint = tintgen::resolve_tint(class, &ctx.options.tint);
    let helper_key = if flags.contains(GenFlags::HELPER_CONSTRUCTORS) {
        helpergen::helper_key(ctx, view, &tint)
    } else {
        None
    };

    let ctors = ctorgen::resolve_constructors(class);
    let args = match (ctorgen::constructor_args(&ctors, "ctx"), &helper_key) {
        (Some(args), _) => args,
        (None, Some(key)) => {
            // Helper constructors were explicitly requested for this widget
            let span = ctx
                .registry
                .lookup(key)
                .or_else(|| ctx.registry.lookup(view.fq_name()))
                .and_then(|specs| specs.first())
                .and_then(|spec| spec.span);
            return Err(GenError::UnconstructibleWidget {
                widget: class.fq_name.clone(),
                key: key.clone(),
                span,
            }
            .into());
        }
        (None, None) => {
            log::warn!(
                "`{}` has no usable constructor; no functions will be generated for it",
                class.fq_name
            );
            return Ok(());
        }
    };

    if !flags.contains(GenFlags::VIEWS) && helper_key.is_none() {
        // Nothing would refer to the factory entry
        return Ok(());
    }

    let class_name = kind.class_name(&class.fq_name, &class.simple_name);

    log::trace!(
        "{} → {} (tinted: {})",
        class.fq_name,
        tint.function_name,
        tint.is_tinted()
    );

    // The expression constructing the widget
    let base_class_name = tint.base_name.as_ref().map(|base| {
        kind.class_name(
            &format!("{}.{}", ctx.options.tint.base_package, base),
            base,
        )
    });
    let construction = match &base_class_name {
        Some(base) => Left(tintgen::VersionGuardedCall {
            min_sdk: ctx.options.tint.min_sdk,
            base,
            tinted: &class_name,
            args: &args,
        }),
        None => Right(tintgen::Call {
            class: &class_name,
            args: &args,
        }),
    };

    let factory_ref = factory.register(&tint.function_name, construction.to_string())?;

    let mut report = ErrorReport::default();

    if flags.contains(GenFlags::VIEWS) {
        let base_fq_name = tint.base_fq_name(&ctx.options.tint);
        let lambda_arg_ty = base_class_name.as_deref().unwrap_or(&class_name);
        let return_ty = base_fq_name.as_deref().unwrap_or(&class.fq_name);
        let themed_function_name = format!("themed{}", identcase::capitalize(&tint.function_name));

        let mut receiver_tys = vec![receivers::VIEW_MANAGER];
        if view.is_container && flags.contains(GenFlags::TOP_LEVEL_DSL_ITEMS) {
            receiver_tys.push(receivers::CONTEXT);
            receiver_tys.push(receivers::ACTIVITY);
        }

        for receiver in receiver_tys {
            let rendered = ctx.templates.render(
                "view",
                &[
                    ("receiver", receiver),
                    ("functionName", tint.function_name.as_str()),
                    ("themedFunctionName", themed_function_name.as_str()),
                    ("className", class_name.as_str()),
                    ("lambdaArgType", lambda_arg_ty),
                    ("returnType", return_ty),
                    ("factory", factory_ref.as_str()),
                ],
            );
            match rendered {
                Ok(text) => out.push_str(&text),
                Err(e) => {
                    report.push(e);
                    break;
                }
            }
        }
    }

    if let Some(key) = &helper_key {
        if let Err(e) =
            helpergen::gen_helper_constructors(ctx, view, &tint, key, &factory_ref, out)
        {
            report.extend(e);
        }
    }

    report.into_result(())
}

/// Assemble the output file from the outputs of [`gen_views`].
pub fn gen_file(ctx: &Ctx<'_>, bodies: &[String]) -> Result<String, GenError> {
    let body: String = bodies.concat();
    ctx.templates.render(
        "file",
        &[
            ("package", ctx.options.package_name.as_str()),
            ("body", body.as_str()),
        ],
    )
}

// Lower-level codegen utils
// -------------------------------------------------------------------

/// An append-only text buffer that indents lines by tracking braces.
pub struct CodeWriter<'a> {
    out: String,
    indent: &'a str,
    level: usize,
}

impl<'a> CodeWriter<'a> {
    pub fn new(indent: &'a str) -> Self {
        Self {
            out: String::new(),
            indent,
            level: 0,
        }
    }

    /// Append a line. A line starting with `}` closes a level, and a line
    /// ending with `{` opens one.
    pub fn line(&mut self, line: impl fmt::Display) {
        let line = line.to_string();
        if line.starts_with('}') {
            self.level = self.level.saturating_sub(1);
        }
        for _ in 0..self.level {
            self.out.push_str(self.indent);
        }
        self.out.push_str(&line);
        self.out.push('\n');
        if line.ends_with('{') {
            self.level += 1;
        }
    }

    pub fn nl(&mut self) {
        self.out.push('\n');
    }

    /// Append text verbatim.
    pub fn push_str(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub fn finish(self) -> String {
        self.out
    }
}

struct CommaSeparated<T>(T);
impl<T> fmt::Display for CommaSeparated<T>
where
    T: Clone + IntoIterator,
    T::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.0.clone().into_iter();
        if let Some(e) = it.next() {
            write!(f, "{}", e)?;
            for e in it {
                write!(f, ", {}", e)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_writer_indents_blocks() {
        let mut w = CodeWriter::new("  ");
        w.line("fun a() {");
        w.line("return b {");
        w.line("c()");
        w.line("}");
        w.line("}");
        w.nl();
        assert_eq!(w.finish(), "fun a() {\n  return b {\n    c()\n  }\n}\n\n");
    }

    #[test]
    fn code_writer_never_underflows() {
        let mut w = CodeWriter::new("  ");
        w.line("}");
        w.line("x");
        assert_eq!(w.finish(), "}\nx\n");
    }

    #[test]
    fn comma_separated() {
        assert_eq!(CommaSeparated(&[1, 2, 3]).to_string(), "1, 2, 3");
        assert_eq!(CommaSeparated(Vec::<u32>::new()).to_string(), "");
    }
}
