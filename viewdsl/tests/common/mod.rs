#![allow(dead_code)]
use viewdsl_designer::metadata::{
    ClassDescriptor, MethodDescriptor, ParameterList, WidgetElement, WidgetLibrary,
};

pub const CONTEXT: &str = "android.content.Context";
pub const ATTRIBUTE_SET: &str = "android.util.AttributeSet";

pub fn view_ctors() -> Vec<ParameterList> {
    vec![
        ParameterList::new(vec![CONTEXT]),
        ParameterList::new(vec![CONTEXT, ATTRIBUTE_SET]),
        ParameterList::new(vec![CONTEXT, ATTRIBUTE_SET, "int"]),
    ]
}

pub fn method(name: &str, params: &[&str]) -> MethodDescriptor {
    MethodDescriptor::new(name, ParameterList::new(params.iter().copied()))
}

fn text_view_methods() -> Vec<MethodDescriptor> {
    vec![
        method("setText", &["java.lang.CharSequence"]),
        method("setText", &["int"]),
        method(
            "setText",
            &["java.lang.CharSequence", "android.widget.TextView$BufferType"],
        ),
        method("setTextColor", &["int"]),
        method("setTextColor", &["android.content.res.ColorStateList"]),
        method("setHint", &["java.lang.CharSequence"]),
        method("getText", &[]),
    ]
}

pub fn widget(fq_name: &str, methods: Vec<MethodDescriptor>) -> WidgetElement {
    let mut class = ClassDescriptor::new(fq_name);
    class.constructors = view_ctors();
    class.methods = methods;
    WidgetElement {
        class,
        is_container: false,
    }
}

pub fn text_view() -> WidgetElement {
    widget("android.widget.TextView", text_view_methods())
}

pub fn button() -> WidgetElement {
    widget("android.widget.Button", text_view_methods())
}

pub fn tinted_button() -> WidgetElement {
    widget(
        "android.support.v7.widget.AppCompatButton",
        text_view_methods(),
    )
}

pub fn abs_list_view() -> WidgetElement {
    let mut w = widget("android.widget.AbsListView", vec![]);
    w.class.is_abstract = true;
    w
}

/// Has `setValue(int)` and `setValue(Point)`, both of which match `int`.
pub fn number_picker() -> WidgetElement {
    widget(
        "android.widget.NumberPicker",
        vec![
            method("setValue", &["int"]),
            method("setValue", &["android.graphics.Point"]),
        ],
    )
}

/// Declares no recognized constructor.
pub fn unconstructible() -> WidgetElement {
    let mut w = widget("android.widget.Unconstructible", vec![]);
    w.class.constructors = vec![ParameterList::new(vec![CONTEXT, "long"])];
    w
}

pub fn linear_layout() -> WidgetElement {
    let mut w = widget(
        "android.widget.LinearLayout",
        vec![method("setOrientation", &["int"])],
    );
    w.is_container = true;
    w
}

pub fn library() -> WidgetLibrary {
    WidgetLibrary {
        views: vec![
            text_view(),
            abs_list_view(),
            button(),
            tinted_button(),
            number_picker(),
            unconstructible(),
            linear_layout(),
        ],
        view_groups: vec![linear_layout()],
    }
}
