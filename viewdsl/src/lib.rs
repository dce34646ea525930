//! Builder DSL generator for Android widgets
//!
//! Constructing a view hierarchy imperatively takes a lot of boilerplate
//! code. This crate generates Kotlin extension functions that turn widget
//! classes into a declarative builder DSL:
//!
//! ```kotlin
//! verticalLayout {
//!     textView("Hello")
//!     tintedButton { text = "Go" }
//! }
//! ```
//!
//! The generator does not inspect bytecode. The widget classes are described
//! by [`metadata::WidgetLibrary`], which is produced by an external class
//! loader and imported as a `bincode` blob with [`GeneratorConfig::link`].
//!
//! # Generated Code
//!
//! Each widget family ([`RendererKind`]) produces one *factory object*
//! followed by the functions of every concrete widget:
//!
//! ```kotlin
//! object `$$Anko$$Factories$$Sdk15View` {
//!     val TEXT_VIEW = { ctx: Context -> android.widget.TextView(ctx) }
//!     val TINTED_BUTTON = { ctx: Context -> if (Build.VERSION.SDK_INT < 21) android.widget.Button(ctx) else android.support.v7.widget.AppCompatButton(ctx) }
//! }
//!
//! inline fun ViewManager.textView(): android.widget.TextView = textView() {}
//! inline fun ViewManager.textView(init: android.widget.TextView.() -> Unit): android.widget.TextView {
//!     return ankoView(`$$Anko$$Factories$$Sdk15View`.TEXT_VIEW, theme = 0) { init() }
//! }
//! ```
//!
//! The factory object holds exactly one construction lambda per widget, no
//! matter how many functions refer to it.
//!
//! **Constructors:** A widget is constructed through the first of the
//! following constructors it declares: `(Context)`,
//! `(Context, AttributeSet)`, and `(Context, AttributeSet, int)`. Widgets
//! declaring none of them are skipped, unless helper constructors are
//! declared for them, which is an error.
//!
//! **Tinted widgets:** A widget whose qualified name starts with
//! [`TintConfig::prefix`] is paired with the base widget of the same simple
//! name in [`TintConfig::base_package`]. Its functions are named
//! `tinted<Base>` and the factory selects the implementation at run time by
//! comparing the platform version with [`TintConfig::min_sdk`].
//!
//! **Receivers:** Builder functions are generated for `ViewManager`.
//! Containers additionally get `Context` and `Activity` variants if
//! [`GenFlags::TOP_LEVEL_DSL_ITEMS`] is set.
//!
//! **Helper constructors:** The [`HelperConstructorRegistry`] lists property
//! sets for which convenience functions are generated:
//!
//! ```text
//! android.widget.TextView(text: CharSequence, textColor: int)
//! ```
//!
//! generates
//!
//! ```kotlin
//! inline fun ViewManager.textView(theme: Int = 0, text: CharSequence?, textColor: Int): android.widget.TextView {
//!     return ankoView(`$$Anko$$Factories$$Sdk15View`.TEXT_VIEW, theme) {
//!         setText(text)
//!         setTextColor(textColor)
//!     }
//! }
//! ```
//!
//! and an overload taking an additional `init` block. Each property must
//! correspond to exactly one single-parameter setter whose parameter type
//! name ends with the property's type name. Otherwise generation fails.
//!
//! # Errors
//!
//! Errors are never recovered from. All errors of a run are collected into
//! an [`ErrorReport`], reported through `codemap-diagnostic` (pointing at the
//! registry line if possible), and no output is written.
mod codegen;
pub mod metadata;

pub use self::codegen::{
    errors::{ErrorReport, GenError, MethodList},
    generate,
    registry::{HelperConstructorRegistry, HelperConstructorSpec, PropertySpec},
    render_views,
    template::Templates,
    GenFlags, GeneratorConfig, RenderOptions, RendererKind, TintConfig,
};
