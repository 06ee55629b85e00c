//! Runtime discovery diagnostics

use std::fmt::Write;
use std::path::Path;
use tint_theme::{ColorContext, DirectorySource};

/// Output of an inspection run
#[derive(Debug, Clone)]
pub struct Inspection {
    pub ready: bool,
    pub text: String,
}

/// Configure a context over `dir` and render its setup report.
///
/// `all` appends every color and identifier mapping; `search` appends the
/// keys matching a term.
pub fn inspect(dir: &Path, name: &str, all: bool, search: Option<&str>) -> Inspection {
    let source = DirectorySource::new(dir);
    let context = ColorContext::configure(&source, name);

    let mut text = context.report().to_string();
    if all {
        text.push('\n');
        text.push_str(&context.listing());
    }
    if let Some(term) = search {
        let hits = context.search_colors(term);
        let _ = writeln!(text, "\n{} matches for '{}':", hits.len(), term);
        for key in hits {
            let _ = writeln!(text, "  {key}");
        }
    }

    Inspection {
        ready: context.is_ready(),
        text,
    }
}
