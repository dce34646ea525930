use std::{
    borrow::Cow,
    fs::File,
    io::{prelude::*, BufWriter},
    path::{Path, PathBuf},
};

use crate::metadata::{Ident, WidgetElement, WidgetLibrary};

mod diag;
pub mod errors;
mod implgen;
pub mod registry;
pub mod template;

use self::{errors::ErrorReport, registry::HelperConstructorRegistry, template::Templates};

bitflags::bitflags! {
    /// Selects what is generated.
    pub struct GenFlags: u8 {
        /// Builder functions (`ViewManager.textView { ... }`).
        const VIEWS = 1;
        /// Helper constructors (`ViewManager.textView("text")`).
        const HELPER_CONSTRUCTORS = 1 << 1;
        /// Builder functions for `Context` and `Activity`. Only applies to
        /// containers.
        const TOP_LEVEL_DSL_ITEMS = 1 << 2;
    }
}

impl Default for GenFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Describes the family of tinted widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TintConfig {
    /// The prefix of tinted widgets' qualified names. The rest of a qualified
    /// name is the base widget's simple name.
    pub prefix: String,
    /// The package containing the base widgets.
    pub base_package: String,
    /// The platform version starting from which the tinted widgets are used.
    pub min_sdk: u32,
}

impl Default for TintConfig {
    fn default() -> Self {
        Self {
            prefix: "android.support.v7.widget.AppCompat".to_owned(),
            base_package: "android.widget".to_owned(),
            min_sdk: 21,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub flags: GenFlags,
    /// The name of the artifact being generated, e.g., `sdk15` or
    /// `appcompat-v7`. Used to name the factory objects.
    pub artifact_name: String,
    pub package_name: String,
    pub tint: TintConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            flags: GenFlags::default(),
            artifact_name: "sdk15".to_owned(),
            package_name: "org.jetbrains.anko".to_owned(),
            tint: TintConfig::default(),
        }
    }
}

/// A widget family. Each family is rendered separately and has its own
/// factory object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererKind {
    /// Widgets are constructed and referred to by their qualified names.
    View,
    /// Containers are constructed through `_`-prefixed subclasses that
    /// provide layout parameter helpers.
    ViewGroup,
}

impl RendererKind {
    pub const ALL: [RendererKind; 2] = [RendererKind::View, RendererKind::ViewGroup];

    pub fn suffix(self) -> &'static str {
        match self {
            RendererKind::View => "View",
            RendererKind::ViewGroup => "ViewGroup",
        }
    }

    /// The name used to instantiate a widget.
    pub fn class_name(self, fq_name: &str, simple_name: &str) -> String {
        match self {
            RendererKind::View => fq_name.to_owned(),
            RendererKind::ViewGroup => format!("_{}", simple_name),
        }
    }

    fn widgets(self, library: &WidgetLibrary) -> &[WidgetElement] {
        match self {
            RendererKind::View => &library.views,
            RendererKind::ViewGroup => &library.view_groups,
        }
    }
}

/// Render the factory object and the DSL functions of one widget family.
///
/// `views` is processed in order. On failure, every error found is
/// returned and no output is produced.
pub fn render_views(
    kind: RendererKind,
    views: &[WidgetElement],
    registry: &HelperConstructorRegistry,
    templates: &Templates,
    options: &RenderOptions,
) -> Result<String, ErrorReport> {
    let ctx = implgen::Ctx {
        options,
        registry,
        templates,
    };
    implgen::gen_views(&ctx, kind, views)
}

/// Render a complete source file for all widget families of `library`.
pub fn generate(
    library: &WidgetLibrary,
    registry: &HelperConstructorRegistry,
    templates: &Templates,
    options: &RenderOptions,
) -> Result<String, ErrorReport> {
    let ctx = implgen::Ctx {
        options,
        registry,
        templates,
    };

    let mut report = ErrorReport::default();
    let mut bodies = Vec::new();

    // The family order is fixed so that the output is reproducible
    for &kind in RendererKind::ALL.iter() {
        match implgen::gen_views(&ctx, kind, kind.widgets(library)) {
            Ok(body) => bodies.push(body),
            Err(e) => report.extend(e),
        }
    }

    if !report.is_empty() {
        return Err(report);
    }

    Ok(implgen::gen_file(&ctx, &bodies)?)
}

#[derive(Default)]
pub struct GeneratorConfig<'a> {
    library: WidgetLibrary,
    linked_libraries: Vec<(String, Cow<'a, [u8]>)>,
    registry: HelperConstructorRegistry,
    helper_constructors_files: Vec<PathBuf>,
    template_dir: Option<PathBuf>,
    out_source_file: Option<PathBuf>,
    out_source_stream: Option<&'a mut Vec<u8>>,
    out_diag_stream: Option<&'a mut Vec<u8>>,
    options: RenderOptions,
    indent: Option<String>,
}

impl<'a> GeneratorConfig<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a `bincode`-encoded [`WidgetLibrary`]. Libraries are appended in
    /// the order they are linked.
    pub fn link(mut self, name: impl Into<String>, metadata: Cow<'a, [u8]>) -> Self {
        self.linked_libraries.push((name.into(), metadata));
        self
    }

    /// Add widgets that are already loaded. They precede linked libraries.
    pub fn widget_library(mut self, library: WidgetLibrary) -> Self {
        self.library.extend(library);
        self
    }

    pub fn registry(self, registry: HelperConstructorRegistry) -> Self {
        Self { registry, ..self }
    }

    pub fn helper_constructors_file(mut self, path: impl AsRef<Path>) -> Self {
        self.helper_constructors_files
            .push(path.as_ref().to_path_buf());
        self
    }

    pub fn template_dir(self, path: impl AsRef<Path>) -> Self {
        Self {
            template_dir: Some(path.as_ref().to_path_buf()),
            ..self
        }
    }

    pub fn out_source_file(self, path: impl AsRef<Path>) -> Self {
        Self {
            out_source_file: Some(path.as_ref().to_path_buf()),
            ..self
        }
    }

    /// Write the generated code to `stream` instead of a file.
    pub fn out_source_stream(self, stream: &'a mut Vec<u8>) -> Self {
        Self {
            out_source_stream: Some(stream),
            ..self
        }
    }

    /// Write diagnostics to `stream` instead of stderr.
    pub fn out_diag_stream(self, stream: &'a mut Vec<u8>) -> Self {
        Self {
            out_diag_stream: Some(stream),
            ..self
        }
    }

    pub fn artifact_name(mut self, name: impl Into<Ident>) -> Self {
        self.options.artifact_name = name.into();
        self
    }

    pub fn package_name(mut self, name: impl Into<Ident>) -> Self {
        self.options.package_name = name.into();
        self
    }

    pub fn indent(self, indent: impl Into<String>) -> Self {
        Self {
            indent: Some(indent.into()),
            ..self
        }
    }

    pub fn flags(mut self, flags: GenFlags) -> Self {
        self.options.flags = flags;
        self
    }

    pub fn tint(mut self, tint: TintConfig) -> Self {
        self.options.tint = tint;
        self
    }

    pub fn run_and_exit_on_error(self) {
        if self.run().is_err() {
            std::process::exit(1);
        }
    }

    pub fn run(mut self) -> Result<(), ()> {
        let mut diag = if self.out_diag_stream.is_some() {
            diag::Diag::new_capturing()
        } else {
            diag::Diag::new()
        };

        let out_diag_stream = self.out_diag_stream.take();

        let result = self.run_inner(&mut diag);
        if let Err(Some(message)) = &result {
            diag.error(message.clone(), None);
        } else {
            // The error is already reported to `diag` if `e` is `None`
        }

        if let Some(stream) = out_diag_stream {
            stream.extend(diag.take_captured());
        }

        result.map_err(|_| ())
    }

    fn run_inner(self, diag: &mut diag::Diag) -> Result<(), Option<String>> {
        let mut library = self.library;

        // Import widget metadata
        for (name, metadata) in self.linked_libraries.iter() {
            let linked = WidgetLibrary::from_bincode(metadata).map_err(|e| {
                format!("Failed to import the widget metadata of '{}': {}", name, e)
            })?;
            log::debug!(
                "linked '{}': {} views, {} view groups",
                name,
                linked.views.len(),
                linked.view_groups.len()
            );
            library.extend(linked);
        }

        // Load helper constructors
        let mut registry = self.registry;
        for path in self.helper_constructors_files.iter() {
            let file = match diag.load_file(path) {
                Ok(f) => f,
                Err(()) => continue,
            };
            let _ = registry.parse_file(&file, diag);
        }

        if diag.has_error() {
            return Err(None);
        }

        log::debug!("{} helper constructor(s) loaded", registry.len());

        let mut templates = Templates::new(self.indent.unwrap_or_else(|| "    ".to_owned()));
        if let Some(dir) = &self.template_dir {
            templates.load_overrides(dir).map_err(|e| {
                format!("Could not load templates from '{}': {}", dir.display(), e)
            })?;
        }

        // Nothing is written unless the whole file could be generated
        let code = match generate(&library, &registry, &templates, &self.options) {
            Ok(code) => code,
            Err(report) => {
                report.emit(diag);
                return Err(None);
            }
        };

        if let Some(stream) = self.out_source_stream {
            stream.extend_from_slice(code.as_bytes());
            return Ok(());
        }

        let out_source_file = self
            .out_source_file
            .ok_or_else(|| "No output file is specified".to_string())?;

        let out_f = File::create(&out_source_file).map_err(|e| {
            format!(
                "Could not open the output file '{}': {}",
                out_source_file.display(),
                e
            )
        })?;

        (move || -> std::io::Result<()> {
            let mut out_f = BufWriter::new(out_f);
            out_f.write_all(code.as_bytes())?;
            out_f.flush()?;
            Ok(())
        })()
        .map_err(|e| {
            format!(
                "I/O error while writing the output file '{}': {}",
                out_source_file.display(),
                e
            )
        })?;

        Ok(())
    }
}
