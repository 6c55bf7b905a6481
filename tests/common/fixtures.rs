// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Form feed used as the page break in plain-text fixtures
#[allow(dead_code)]
pub const PAGE_BREAK: &str = "\x0C";

/// Directory of synthetic documents
#[allow(dead_code)] // Used in integration tests
pub struct TestDocs {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestDocs {
    /// Three small text documents, the middle one split into pages
    #[allow(dead_code)]
    pub fn small() -> Self {
        Self::with_files(&[
            ("alpha.txt", "Alpha report. Page 1"),
            (
                "beta.txt",
                "Beta first page.\x0CBeta second page.\x0CBeta third page.",
            ),
            ("gamma.txt", "Gamma notes, short."),
        ])
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Text document whose pages are joined with form feeds
    #[allow(dead_code)]
    pub fn paged(name: &str, pages: &[&str]) -> Self {
        Self::with_files(&[(name, pages.join(PAGE_BREAK).as_str())])
    }

    /// Directory holding one PDF with one line of text per page
    #[allow(dead_code)]
    pub fn pdf(name: &str, pages: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        let full_path = dir.path().join(name);
        std::fs::write(&full_path, pdf_bytes(pages)).unwrap();

        Self {
            dir,
            files: vec![full_path],
        }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    #[allow(dead_code)]
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Minimal uncompressed PDF, Helvetica text, one page per entry
#[allow(dead_code)]
pub fn pdf_bytes(pages: &[&str]) -> Vec<u8> {
    let mut objects: Vec<String> = Vec::new();

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect();
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    ));
    objects.push(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );

    for (i, text) in pages.iter().enumerate() {
        let escaped = text
            .replace('\\', "\\\\")
            .replace('(', "\\(")
            .replace(')', "\\)");
        let content = format!("BT /F1 24 Tf 72 720 Td ({escaped}) Tj ET");

        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + 2 * i
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
    }

    let xref_at = out.len();
    out.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));

    out.into_bytes()
}
