//! Tinted widget handling
//!
//! A tinted widget (e.g., `android.support.v7.widget.AppCompatButton`) is a
//! drop-in variant of a base widget (`android.widget.Button`) that is only
//! usable starting from a specific platform version. The platform version is
//! unknown until the generated code runs, so the generated factory checks it
//! at run time.
use std::fmt;

use super::super::TintConfig;
use crate::metadata::ClassDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TintInfo {
    /// The simple name of the base widget, e.g., `Button`. `None` if the
    /// widget is not tinted.
    pub base_name: Option<String>,
    /// The name of the generated DSL functions, e.g., `tintedButton` or
    /// `textView`.
    pub function_name: String,
}

impl TintInfo {
    pub fn is_tinted(&self) -> bool {
        self.base_name.is_some()
    }

    /// The qualified name of the base widget.
    pub fn base_fq_name(&self, config: &TintConfig) -> Option<String> {
        self.base_name
            .as_ref()
            .map(|base| format!("{}.{}", config.base_package, base))
    }
}

pub fn resolve_tint(class: &ClassDescriptor, config: &TintConfig) -> TintInfo {
    match class.fq_name.strip_prefix(config.prefix.as_str()) {
        Some(base) if !config.prefix.is_empty() && !base.is_empty() => TintInfo {
            base_name: Some(base.to_owned()),
            function_name: format!("tinted{}", base),
        },
        _ => TintInfo {
            base_name: None,
            function_name: identcase::decapitalize(&class.simple_name),
        },
    }
}

/// `if (Build.VERSION.SDK_INT < 21) Base(args) else Tinted(args)`
pub struct VersionGuardedCall<'a> {
    pub min_sdk: u32,
    pub base: &'a str,
    pub tinted: &'a str,
    pub args: &'a str,
}

impl fmt::Display for VersionGuardedCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "if (Build.VERSION.SDK_INT < {min}) {base}({args}) else {tinted}({args})",
            min = self.min_sdk,
            base = self.base,
            tinted = self.tinted,
            args = self.args
        )
    }
}

/// `Class(args)`
pub struct Call<'a> {
    pub class: &'a str,
    pub args: &'a str,
}

impl fmt::Display for Call<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.class, self.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tinted_button() {
        let config = TintConfig::default();
        let class = ClassDescriptor::new("android.support.v7.widget.AppCompatButton");
        let tint = resolve_tint(&class, &config);
        assert_eq!(tint.base_name.as_deref(), Some("Button"));
        assert_eq!(tint.function_name, "tintedButton");
        assert!(tint.is_tinted());
        assert_eq!(
            tint.base_fq_name(&config).as_deref(),
            Some("android.widget.Button")
        );
    }

    #[test]
    fn plain_widget() {
        let config = TintConfig::default();
        let class = ClassDescriptor::new("android.widget.TextView");
        let tint = resolve_tint(&class, &config);
        assert_eq!(tint.base_name, None);
        assert_eq!(tint.function_name, "textView");
        assert_eq!(tint.base_fq_name(&config), None);
    }

    #[test]
    fn prefix_match_is_exact() {
        let config = TintConfig::default();
        for name in &[
            "android.support.v7.widget.AppCompat",
            "android.support.v7.widget.Toolbar",
            "android.support.v7.widget.appCompatButton",
            "org.android.support.v7.widget.AppCompatButton",
        ] {
            assert!(
                !resolve_tint(&ClassDescriptor::new(*name), &config).is_tinted(),
                "{}",
                name
            );
        }
    }

    #[test]
    fn version_guarded_call() {
        let call = VersionGuardedCall {
            min_sdk: 21,
            base: "android.widget.Button",
            tinted: "android.support.v7.widget.AppCompatButton",
            args: "ctx",
        };
        assert_eq!(
            call.to_string(),
            "if (Build.VERSION.SDK_INT < 21) android.widget.Button(ctx) \
             else android.support.v7.widget.AppCompatButton(ctx)"
        );
    }
}
