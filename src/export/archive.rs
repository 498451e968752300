//! ZIP archive construction for the exported files

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Bundle every `.txt` file in `source_dir` into a ZIP at `archive_path`.
///
/// Entries are deflate-compressed and stored under `folder/` inside the
/// archive. An existing archive at the same path is replaced. Returns
/// the archive size in bytes.
pub fn build_archive(source_dir: &Path, archive_path: &Path, folder: &str) -> Result<u64> {
    let txt_files = collect_txt_files(source_dir)?;
    info!("Archiving {} text file(s) from {:?}", txt_files.len(), source_dir);

    let file = File::create(archive_path)
        .with_context(|| format!("Failed to create archive {:?}", archive_path))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in &txt_files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let entry = format!("{}/{}", folder, name);
        debug!("Adding archive entry {}", entry);

        let contents =
            fs::read(path).with_context(|| format!("Failed to read {:?} for archiving", path))?;
        writer
            .start_file(entry.as_str(), options)
            .with_context(|| format!("Failed to start archive entry {}", entry))?;
        writer
            .write_all(&contents)
            .with_context(|| format!("Failed to write archive entry {}", entry))?;
    }

    let file = writer.finish().context("Failed to finalize archive")?;
    let size = file
        .metadata()
        .context("Failed to read archive metadata")?
        .len();

    Ok(size)
}

/// All regular `.txt` files in `dir`, sorted by name for stable archives
fn collect_txt_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read output directory {:?}", dir))?;

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
