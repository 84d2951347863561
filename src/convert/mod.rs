use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use walkdir::WalkDir;

/// Capability to turn one Markdown source into a notebook byte stream.
///
/// The batch walker depends on this abstractly so the external tool can be
/// swapped or mocked without touching traversal logic.
pub trait Converter {
    fn convert(&self, source: &Path, dest: &mut dyn Write) -> io::Result<()>;
}

/// Production converter: spawns an external tool (`notedown` by default)
/// with the source path as its sole argument and copies the child's stdout
/// verbatim into `dest`.
pub struct NotedownConverter {
    tool: String,
}

impl NotedownConverter {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

impl Converter for NotedownConverter {
    fn convert(&self, source: &Path, dest: &mut dyn Write) -> io::Result<()> {
        let mut child = Command::new(&self.tool)
            .arg(source)
            .stdout(Stdio::piped())
            .spawn()?;

        // stdout is piped, so take() always yields a handle here
        if let Some(mut stdout) = child.stdout.take() {
            io::copy(&mut stdout, dest)?;
        }

        // Exit status is not inspected; a failed conversion shows up only
        // as an empty or partial notebook.
        let _ = child.wait()?;

        Ok(())
    }
}

/// Walks a directory tree and converts every `.md` file it finds, writing
/// the notebook next to the source file.
pub struct BatchConverter<C: Converter> {
    root: PathBuf,
    converter: C,
}

impl<C: Converter> BatchConverter<C> {
    pub fn new(root: impl Into<PathBuf>, converter: C) -> Self {
        Self {
            root: root.into(),
            converter,
        }
    }

    /// Convert every candidate under the root, one at a time.
    ///
    /// The first error (unreadable directory, destination not creatable,
    /// tool not spawnable) halts the walk and propagates untranslated.
    /// A missing root surfaces the same way, as the walker's error for
    /// its first entry.
    pub fn run(&self) -> io::Result<()> {
        let mut converted = 0usize;

        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(io::Error::other)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !is_candidate(path) {
                tracing::debug!("skipping {}", path.display());
                continue;
            }

            let dest_path = notebook_path(path);
            println!("Converting: {} -> {}", path.display(), dest_path.display());

            // Truncates any existing notebook; overwrite is accepted behavior.
            let mut dest = File::create(&dest_path)?;
            self.converter.convert(path, &mut dest)?;
            converted += 1;
        }

        tracing::debug!("converted {} file(s) under {}", converted, self.root.display());
        Ok(())
    }
}

/// A file is a candidate iff its name ends with the literal suffix `.md`.
/// Case-sensitive: `.MD` is not a candidate.
fn is_candidate(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".md"))
}

/// Derive the destination path: strip the final extension, if any, and
/// append `.ipynb`. Only the last extension is replaced, so
/// `archive.tar.md` becomes `archive.tar.ipynb`.
fn notebook_path(source: &Path) -> PathBuf {
    source.with_extension("ipynb")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_requires_md_suffix() {
        assert!(is_candidate(Path::new("notes.md")));
        assert!(is_candidate(Path::new("sub/dir/readme.md")));
        assert!(!is_candidate(Path::new("image.png")));
        assert!(!is_candidate(Path::new("notes.md.bak")));
    }

    #[test]
    fn candidate_suffix_is_case_sensitive() {
        assert!(!is_candidate(Path::new("NOTES.MD")));
        assert!(!is_candidate(Path::new("notes.Md")));
    }

    #[test]
    fn notebook_path_replaces_final_extension() {
        assert_eq!(
            notebook_path(Path::new("dir/notes.md")),
            PathBuf::from("dir/notes.ipynb")
        );
    }

    #[test]
    fn notebook_path_only_strips_last_extension() {
        assert_eq!(
            notebook_path(Path::new("archive.tar.md")),
            PathBuf::from("archive.tar.ipynb")
        );
    }

    #[test]
    fn notebook_path_keeps_hidden_file_name() {
        // ".md" has no extension to strip, matching the original tool's
        // splitext behavior.
        assert_eq!(notebook_path(Path::new(".md")), PathBuf::from(".md.ipynb"));
    }
}
