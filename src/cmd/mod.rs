use anyhow::{Context, Result};
use md2nb::{BatchConverter, NotedownConverter};
use std::path::Path;

/// Convert every `.md` file under `root` into a sibling `.ipynb` file.
pub fn convert(root: &Path, tool: &str) -> Result<()> {
    let converter = NotedownConverter::new(tool);

    BatchConverter::new(root, converter)
        .run()
        .with_context(|| format!("Failed to convert files under {}", root.display()))?;

    Ok(())
}
