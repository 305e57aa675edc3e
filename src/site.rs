use std::fs;
use std::path::{Path, PathBuf};

use crate::block::{BlockKind, classify, segment};
use crate::config::Config;
use crate::error::MarkdownError;
use crate::render_document;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Markdown(#[from] MarkdownError),
    #[error("failed to build {path}: {message}")]
    Page { path: PathBuf, message: String },
    #[error("document has no h1 title")]
    MissingTitle,
    #[error("template not found: {0}")]
    TemplateNotFound(PathBuf),
    #[error("content directory not found: {0}")]
    ContentDirNotFound(PathBuf),
}

/// Everything a site build needs, resolved to concrete paths.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub content: PathBuf,
    pub static_dir: PathBuf,
    pub output: PathBuf,
    pub template: PathBuf,
    pub basepath: String,
}

impl BuildOptions {
    pub fn from_config(root: &Path, config: &Config) -> Self {
        Self {
            content: root.join(&config.content),
            static_dir: root.join(&config.static_dir),
            output: root.join(&config.output),
            template: root.join(&config.template),
            basepath: config.basepath.clone(),
        }
    }
}

/// Text of the first h1 line of the document.
///
/// Works over segmented blocks so an `# example` line inside a fenced code
/// block is never mistaken for the title.
pub fn extract_title(markdown: &str) -> Result<String, SiteError> {
    for block in segment(markdown) {
        if classify(&block) == BlockKind::Code {
            continue;
        }
        if let Some(title) = block.lines().find_map(|line| line.strip_prefix("# ")) {
            return Ok(title.trim().to_string());
        }
    }
    Err(SiteError::MissingTitle)
}

/// Render one markdown page into the template.
///
/// Substitutes `{{ Title }}` and `{{ Content }}`, then rewrites
/// root-relative `href="/` and `src="/` URLs against `basepath`.
pub fn generate_page(markdown: &str, template: &str, basepath: &str) -> Result<String, SiteError> {
    let title = extract_title(markdown)?;
    let content = render_document(markdown)?;
    let page = template
        .replace("{{ Title }}", &title)
        .replace("{{ Content }}", &content)
        .replace("href=\"/", &format!("href=\"{basepath}"))
        .replace("src=\"/", &format!("src=\"{basepath}"));
    Ok(page)
}

/// Recursively copy `src` into `dst`, preserving relative paths.
/// Returns the number of files copied.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    fs::create_dir_all(dst)?;
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if from.is_dir() {
            copied += copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Build the whole site: wipe the output directory, copy static assets when
/// the static directory exists, and generate one HTML page per markdown
/// source, preserving relative paths. Returns the number of pages generated.
pub fn build_site(opts: &BuildOptions) -> Result<usize, SiteError> {
    if !opts.template.is_file() {
        return Err(SiteError::TemplateNotFound(opts.template.clone()));
    }
    if !opts.content.is_dir() {
        return Err(SiteError::ContentDirNotFound(opts.content.clone()));
    }
    let template = fs::read_to_string(&opts.template)?;

    if opts.output.exists() {
        fs::remove_dir_all(&opts.output)?;
    }
    fs::create_dir_all(&opts.output)?;

    if opts.static_dir.is_dir() {
        copy_dir(&opts.static_dir, &opts.output)?;
    }

    generate_pages(&opts.content, &opts.output, &template, &opts.basepath)
}

fn generate_pages(
    content: &Path,
    output: &Path,
    template: &str,
    basepath: &str,
) -> Result<usize, SiteError> {
    fs::create_dir_all(output)?;
    let mut pages = 0;
    for entry in fs::read_dir(content)? {
        let entry = entry?;
        let src = entry.path();
        if src.is_dir() {
            pages += generate_pages(&src, &output.join(entry.file_name()), template, basepath)?;
        } else if src.extension().is_some_and(|ext| ext == "md") {
            let markdown = fs::read_to_string(&src)?;
            let page =
                generate_page(&markdown, template, basepath).map_err(|e| SiteError::Page {
                    path: src.clone(),
                    message: e.to_string(),
                })?;
            let dst = output.join(entry.file_name()).with_extension("html");
            fs::write(&dst, page)?;
            pages += 1;
        }
    }
    Ok(pages)
}
