//! Setter resolution for helper constructors
use super::super::{
    errors::{ErrorReport, GenError, MethodList},
    registry::HelperConstructorSpec,
};
use crate::metadata::{MethodDescriptor, WidgetElement};

/// `textColor` → `setTextColor`
pub fn setter_name(property: &str) -> String {
    format!("set{}", identcase::capitalize(property))
}

/// Find the setter of each property in `spec`, in the same order.
///
/// A setter is a method named after the property, taking exactly one
/// parameter whose type name ends with the property's type name. Every
/// property must have exactly one setter. All failing properties are
/// reported, not only the first one.
pub fn resolve_setters<'a>(
    view: &'a WidgetElement,
    spec: &HelperConstructorSpec,
) -> Result<Vec<&'a MethodDescriptor>, ErrorReport> {
    let mut report = ErrorReport::default();
    let mut setters = Vec::with_capacity(spec.properties.len());

    for prop in spec.properties.iter() {
        let name = setter_name(&prop.name);
        let candidates: Vec<&MethodDescriptor> = view
            .class
            .methods
            .iter()
            .filter(|m| {
                m.name == name && m.params.len() == 1 && m.params.types()[0].ends_with(&prop.ty)
            })
            .collect();

        match candidates.len() {
            0 => report.push(GenError::MissingSetter {
                widget: view.fq_name().to_owned(),
                property: prop.name.clone(),
                setter: name,
                spec: spec.clone(),
            }),
            1 => setters.push(candidates[0]),
            _ => report.push(GenError::AmbiguousSetter {
                widget: view.fq_name().to_owned(),
                setter: name,
                spec: spec.clone(),
                candidates: MethodList(candidates.into_iter().cloned().collect()),
            }),
        }
    }

    report.into_result(setters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codegen::registry::PropertySpec,
        metadata::{ClassDescriptor, ParameterList},
    };

    fn widget(methods: &[(&str, &[&str])]) -> WidgetElement {
        let mut class = ClassDescriptor::new("android.widget.TextView");
        class.methods = methods
            .iter()
            .map(|(name, params)| {
                MethodDescriptor::new(*name, ParameterList::new(params.iter().copied()))
            })
            .collect();
        WidgetElement {
            class,
            is_container: false,
        }
    }

    fn spec(props: &[(&str, &str)]) -> HelperConstructorSpec {
        HelperConstructorSpec::new(props.iter().map(|(n, t)| PropertySpec::new(*n, *t)))
    }

    #[test]
    fn setter_names() {
        assert_eq!(setter_name("text"), "setText");
        assert_eq!(setter_name("textColor"), "setTextColor");
    }

    #[test]
    fn resolves_in_spec_order() {
        let view = widget(&[
            ("setTextColor", &["int"]),
            ("getText", &[]),
            ("setText", &["java.lang.CharSequence"]),
            ("setText", &["int"]),
            ("setText", &["java.lang.CharSequence", "android.widget.TextView$BufferType"]),
        ]);
        let setters = resolve_setters(
            &view,
            &spec(&[("text", "CharSequence"), ("textColor", "int")]),
        )
        .unwrap();
        let rendered: Vec<_> = setters.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            rendered,
            ["setText(java.lang.CharSequence)", "setTextColor(int)"]
        );
    }

    #[test]
    fn missing_setter() {
        let view = widget(&[("setText", &["java.lang.CharSequence"])]);
        let report = resolve_setters(&view, &spec(&[("color", "int")])).unwrap_err();
        assert_eq!(report.errors.len(), 1);
        match &report.errors[0] {
            GenError::MissingSetter {
                widget,
                property,
                setter,
                ..
            } => {
                assert_eq!(widget, "android.widget.TextView");
                assert_eq!(property, "color");
                assert_eq!(setter, "setColor");
            }
            e => panic!("unexpected error: {:?}", e),
        }
        let msg = report.to_string();
        assert!(msg.contains("android.widget.TextView"), "{}", msg);
        assert!(msg.contains("color: int"), "{}", msg);
    }

    #[test]
    fn setter_with_wrong_type_is_missing() {
        let view = widget(&[("setTextColor", &["android.content.res.ColorStateList"])]);
        let report = resolve_setters(&view, &spec(&[("textColor", "int")])).unwrap_err();
        assert!(matches!(
            report.errors[0],
            GenError::MissingSetter { .. }
        ));
    }

    #[test]
    fn ambiguous_setter() {
        // `Point` ends with `int`, too
        let view = widget(&[
            ("setValue", &["int"]),
            ("setValue", &["android.graphics.Point"]),
        ]);
        let report = resolve_setters(&view, &spec(&[("value", "int")])).unwrap_err();
        assert_eq!(report.errors.len(), 1);
        match &report.errors[0] {
            GenError::AmbiguousSetter { candidates, .. } => {
                assert_eq!(candidates.0.len(), 2);
            }
            e => panic!("unexpected error: {:?}", e),
        }
        let msg = report.to_string();
        assert!(msg.contains("setValue(int)"), "{}", msg);
        assert!(msg.contains("setValue(android.graphics.Point)"), "{}", msg);
    }

    #[test]
    fn reports_every_failing_property() {
        let view = widget(&[]);
        let report =
            resolve_setters(&view, &spec(&[("text", "CharSequence"), ("hint", "int")]))
                .unwrap_err();
        assert_eq!(report.errors.len(), 2);
    }
}
