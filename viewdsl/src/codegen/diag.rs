use codemap::Span;
use codemap_diagnostic::{ColorConfig, Diagnostic, Emitter, Level, SpanLabel, SpanStyle};
use std::{fs::File, io::prelude::*, path::Path, sync::Arc};

pub type FileRef = Arc<codemap::File>;

pub struct Diag {
    codemap: codemap::CodeMap,
    has_error: bool,
    /// When set, diagnostics are rendered into this buffer instead of
    /// stderr.
    captured: Option<Vec<u8>>,
}

impl Diag {
    pub fn new() -> Self {
        Self {
            codemap: codemap::CodeMap::new(),
            has_error: false,
            captured: None,
        }
    }

    pub fn new_capturing() -> Self {
        Self {
            captured: Some(Vec::new()),
            ..Self::new()
        }
    }

    pub fn add_file(&mut self, name: String, source: String) -> FileRef {
        self.codemap.add_file(name, source)
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<FileRef, ()> {
        let path = path.as_ref();

        let source = read_file(path).map_err(|e| {
            self.emit(&[Diagnostic {
                level: Level::Error,
                message: format!("Could not load the input file '{}': {}", path.display(), e),
                code: None,
                spans: vec![],
            }]);
        })?;

        Ok(self.add_file(path.to_string_lossy().into_owned(), source))
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Take the diagnostics rendered so far if this `Diag` was created by
    /// [`Diag::new_capturing`].
    pub fn take_captured(&mut self) -> Vec<u8> {
        self.captured.as_mut().map(std::mem::take).unwrap_or_default()
    }

    pub fn emit(&mut self, msgs: &[Diagnostic]) {
        self.has_error |= msgs
            .iter()
            .any(|m| m.level == Level::Error || m.level == Level::Bug);

        let Self {
            codemap, captured, ..
        } = self;

        let codemap = &*codemap;
        match captured {
            Some(buf) => Emitter::vec(buf, Some(codemap)).emit(msgs),
            None => Emitter::stderr(ColorConfig::Auto, Some(codemap)).emit(msgs),
        }
    }

    pub fn error(&mut self, message: String, span: Option<Span>) {
        self.emit(&[Diagnostic {
            level: Level::Error,
            message,
            code: None,
            spans: span_labels(span, None),
        }]);
    }

    pub fn warning(&mut self, message: String, span: Option<Span>) {
        self.emit(&[Diagnostic {
            level: Level::Warning,
            message,
            code: None,
            spans: span_labels(span, None),
        }]);
    }
}

pub fn span_labels(span: Option<Span>, label: Option<String>) -> Vec<SpanLabel> {
    span.map(|span| SpanLabel {
        span,
        label,
        style: SpanStyle::Primary,
    })
    .into_iter()
    .collect()
}

fn read_file(path: &Path) -> std::io::Result<String> {
    let mut f = File::open(path)?;
    let mut s = String::new();
    f.read_to_string(&mut s)?;
    Ok(s)
}
