//! Site building: static asset copying, page generation, template
//! substitution. All filesystem side effects live here; the engine core
//! stays pure. Progress reporting is left to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use mdsite_engine::{RenderError, TitleError, extract_title, render_document};
use thiserror::Error;

/// Placeholder in the template replaced by the extracted document title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Placeholder in the template replaced by the rendered document body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Directory not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to render {path}: {source}")]
    Render { path: PathBuf, source: RenderError },
    #[error("No title in {path}: {source}")]
    Title { path: PathBuf, source: TitleError },
}

/// Deletes `dst` if present, recreates it, and copies `src` into it
/// recursively.
pub fn copy_tree_clean(src: &Path, dst: &Path) -> Result<(), SiteError> {
    if !src.is_dir() {
        return Err(SiteError::NotFound(src.to_path_buf()));
    }
    if dst.exists() {
        fs::remove_dir_all(dst)?;
    }
    fs::create_dir_all(dst)?;
    copy_dir_recursive(src, dst)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<(), SiteError> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dst.join(entry.file_name());
        if path.is_dir() {
            fs::create_dir_all(&target)?;
            copy_dir_recursive(&path, &target)?;
        } else {
            fs::copy(&path, &target)?;
        }
    }
    Ok(())
}

/// Renders one markdown file through the template and writes the result,
/// creating parent directories as needed.
pub fn generate_page(
    markdown_path: &Path,
    template: &str,
    dest_path: &Path,
) -> Result<(), SiteError> {
    let markdown = fs::read_to_string(markdown_path)?;

    let title = extract_title(&markdown).map_err(|source| SiteError::Title {
        path: markdown_path.to_path_buf(),
        source,
    })?;
    let content = render_document(&markdown)
        .and_then(|node| node.to_html().map_err(RenderError::from))
        .map_err(|source| SiteError::Render {
            path: markdown_path.to_path_buf(),
            source,
        })?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest_path, page)?;
    Ok(())
}

/// Walks `content_dir` for `.md` files and emits an `.html` per file under
/// `output_dir`, mirroring the directory tree. Returns the written paths in
/// sorted source order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &str,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::NotFound(content_dir.to_path_buf()));
    }

    let mut sources = Vec::new();
    scan_markdown_files(content_dir, &mut sources)?;
    sources.sort();

    let mut written = Vec::new();
    for source in sources {
        let rel = source.strip_prefix(content_dir).unwrap_or(&source);
        let dest = output_dir.join(rel).with_extension("html");
        generate_page(&source, template, &dest)?;
        written.push(dest);
    }
    Ok(written)
}

fn scan_markdown_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            scan_markdown_files(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }
    Ok(())
}
