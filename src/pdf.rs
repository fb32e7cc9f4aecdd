//! PDF viewport: a passthrough to a remotely served document.

use std::io;
use std::process::{Command, Stdio};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfViewport {
    url: String,
}

impl PdfViewport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Hands the URL to the platform's default opener.
    pub fn open(&self) -> io::Result<()> {
        let (program, args) = opener();
        Command::new(program)
            .args(args)
            .arg(&self.url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}

fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_keeps_url() {
        let viewport = PdfViewport::new("http://localhost:5000/api/pdf");
        assert_eq!(viewport.url(), "http://localhost:5000/api/pdf");
    }
}
