//! Constructor resolution
use crate::metadata::{ClassDescriptor, ParameterList};

pub const CONTEXT: &str = "android.content.Context";
pub const ATTRIBUTE_SET: &str = "android.util.AttributeSet";

/// A constructor signature the generated factories know how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructorShape {
    pub params: &'static [&'static str],
    /// The arguments following the context argument.
    pub extra_args: &'static str,
}

/// Recognized constructor shapes, in preference order.
pub const AVAILABLE_VIEW_CONSTRUCTORS: &[ConstructorShape] = &[
    ConstructorShape {
        params: &[CONTEXT],
        extra_args: "",
    },
    ConstructorShape {
        params: &[CONTEXT, ATTRIBUTE_SET],
        extra_args: ", null",
    },
    ConstructorShape {
        params: &[CONTEXT, ATTRIBUTE_SET, "int"],
        extra_args: ", null, 0",
    },
];

/// For each element of [`AVAILABLE_VIEW_CONSTRUCTORS`], find the constructor
/// of `class` having exactly the same parameter types.
pub fn resolve_constructors(class: &ClassDescriptor) -> Vec<Option<&ParameterList>> {
    AVAILABLE_VIEW_CONSTRUCTORS
        .iter()
        .map(|shape| class.constructors.iter().find(|c| **c == *shape.params))
        .collect()
}

/// Render the arguments for the most preferred resolved constructor, passing
/// `ctx_var` as the context. Returns `None` if nothing was resolved.
pub fn constructor_args(resolved: &[Option<&ParameterList>], ctx_var: &str) -> Option<String> {
    resolved
        .iter()
        .zip(AVAILABLE_VIEW_CONSTRUCTORS)
        .find(|(ctor, _)| ctor.is_some())
        .map(|(_, shape)| format!("{}{}", ctx_var, shape.extra_args))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_with(ctors: &[&[&str]]) -> ClassDescriptor {
        let mut class = ClassDescriptor::new("android.widget.Foo");
        class.constructors = ctors
            .iter()
            .map(|params| ParameterList::new(params.iter().copied()))
            .collect();
        class
    }

    #[test]
    fn resolves_each_shape() {
        let class = class_with(&[&[CONTEXT, ATTRIBUTE_SET, "int"], &[CONTEXT]]);
        let resolved = resolve_constructors(&class);
        assert_eq!(resolved.len(), AVAILABLE_VIEW_CONSTRUCTORS.len());
        assert_eq!(resolved[0], Some(&class.constructors[1]));
        assert_eq!(resolved[1], None);
        assert_eq!(resolved[2], Some(&class.constructors[0]));
        assert_eq!(constructor_args(&resolved, "ctx").as_deref(), Some("ctx"));
    }

    #[test]
    fn falls_back_to_longer_shapes() {
        let class = class_with(&[&[CONTEXT, ATTRIBUTE_SET, "int"]]);
        let resolved = resolve_constructors(&class);
        assert_eq!(
            constructor_args(&resolved, "c").as_deref(),
            Some("c, null, 0")
        );

        let class = class_with(&[&[CONTEXT, ATTRIBUTE_SET]]);
        let resolved = resolve_constructors(&class);
        assert_eq!(
            constructor_args(&resolved, "ctx").as_deref(),
            Some("ctx, null")
        );
    }

    #[test]
    fn matching_is_exact() {
        // Neither reordered nor supertype parameters are accepted
        let class = class_with(&[
            &[ATTRIBUTE_SET, CONTEXT],
            &["java.lang.Object"],
            &[CONTEXT, ATTRIBUTE_SET, "long"],
        ]);
        let resolved = resolve_constructors(&class);
        assert!(resolved.iter().all(Option::is_none));
        assert_eq!(constructor_args(&resolved, "ctx"), None);
    }
}
