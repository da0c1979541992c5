use std::collections::HashSet;
use std::ops::Range;
use std::path::PathBuf;

use ariadne::Color;
use ariadne::Label;
use ariadne::Report;
use ariadne::ReportKind;
use ariadne::Source;

/// A loaded config file: its path and raw text.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub file_path: PathBuf,
    pub content: String,
}

/// Something worth telling the user about a set of config files.
#[derive(Debug, Clone)]
pub enum Diagnostic {
    Warning(Warning),
    Error(Error),
}

/// Loading still succeeds.
#[derive(Debug, Clone)]
pub enum Warning {
    EmptyConfig { file_path: PathBuf },
}

/// Loading fails.
#[derive(Debug, Clone)]
pub enum Error {
    Merge(MergeError),
    Validation(ValidationError),
}

/// The same field set by more than one file
#[derive(Debug, Clone)]
pub struct MergeError {
    pub field_path: String,
    pub message: String,
    pub conflicts: Vec<FieldOrigin>,
}

/// File and byte span that set a field.
#[derive(Debug, Clone)]
pub struct FieldOrigin {
    pub file_path: PathBuf,
    pub span: Range<usize>,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field_path: String,
    pub message: String,
    pub origin: Option<FieldOrigin>,
}

/// Failure to read or parse a config file at all
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read '{}': {error}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("Failed to parse '{}': {error}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        error: toml::de::Error,
    },

    #[error("Import cycle detected at '{}': involves {} file(s)", path.display(), cycle.len())]
    ImportCycle { path: PathBuf, cycle: Vec<PathBuf> },
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        matches!(self, Diagnostic::Error(_))
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Diagnostic::Warning(_))
    }
}

impl From<ValidationError> for Diagnostic {
    fn from(error: ValidationError) -> Self {
        Diagnostic::Error(Error::Validation(error))
    }
}

impl FieldOrigin {
    fn file_id(&self) -> String {
        self.file_path.to_string_lossy().into_owned()
    }
}

type Out = Vec<u8>;

fn write_plain(out: &mut Out, text: String) {
    out.extend_from_slice(text.as_bytes());
    out.push(b'\n');
}

fn write_merge_error(out: &mut Out, error: &MergeError) {
    let Some(first) = error.conflicts.first() else {
        write_plain(
            out,
            format!("Merge conflict in field '{}': {}", error.field_path, error.message),
        );
        return;
    };

    let labels = error.conflicts.iter().enumerate().map(|(idx, origin)| {
        let (text, color) = match idx {
            0 => ("first definition here", Color::Red),
            _ => ("conflicts with this definition", Color::Yellow),
        };
        Label::new((origin.file_id(), origin.span.clone()))
            .with_message(text)
            .with_color(color)
    });

    let report = Report::build(ReportKind::Error, (first.file_id(), first.span.clone()))
        .with_message(format!("Merge conflict in field '{}'", error.field_path))
        .with_note(&error.message)
        .with_labels(labels)
        .finish();

    // One write per distinct file, each with its own source text.
    let mut seen = HashSet::new();
    for origin in &error.conflicts {
        let id = origin.file_id();
        if seen.insert(id.clone()) {
            report.write((id, Source::from(&origin.content)), &mut *out).ok();
        }
    }
}

fn write_validation_error(out: &mut Out, error: &ValidationError) {
    // Defaults and command-line values have no span to point at.
    let Some(origin) = &error.origin else {
        write_plain(
            out,
            format!("Validation error in '{}': {}", error.field_path, error.message),
        );
        return;
    };

    let id = origin.file_id();
    Report::build(ReportKind::Error, (id.clone(), origin.span.clone()))
        .with_message(format!("Validation error in '{}'", error.field_path))
        .with_label(
            Label::new((id.clone(), origin.span.clone()))
                .with_message(&error.message)
                .with_color(Color::Red),
        )
        .finish()
        .write((id, Source::from(&origin.content)), &mut *out)
        .ok();
}

/// Render every diagnostic, errors as ariadne reports over their source.
pub fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut out = Out::new();

    for diagnostic in diagnostics {
        match diagnostic {
            Diagnostic::Warning(Warning::EmptyConfig { file_path }) => write_plain(
                &mut out,
                format!(
                    "Warning: Config file '{}' is empty and has no effect",
                    file_path.display()
                ),
            ),
            Diagnostic::Error(Error::Merge(error)) => write_merge_error(&mut out, error),
            Diagnostic::Error(Error::Validation(error)) => write_validation_error(&mut out, error),
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}
