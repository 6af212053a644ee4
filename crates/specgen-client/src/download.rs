use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = "technical-specification.md";
pub const CONTENT_TYPE: &str = "text/markdown";

/// The raw generated document, packaged as a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl Download {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            file_name: FILE_NAME,
            content_type: CONTENT_TYPE,
            body: body.into(),
        }
    }

    /// Write the file into `dir`, replacing any previous copy.
    pub async fn save_in(&self, dir: &Path) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(self.file_name);
        tokio::fs::write(&path, self.body.as_bytes()).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_type() {
        let d = Download::new("# Spec");
        assert_eq!(d.file_name, "technical-specification.md");
        assert_eq!(d.content_type, "text/markdown");
        assert_eq!(d.body, "# Spec");
    }

    #[tokio::test]
    async fn save_in_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let body = "# ТЗ\r\n\n**raw** *text*\n";
        let path = Download::new(body).save_in(&dir.path().join("out")).await.unwrap();
        assert_eq!(path.file_name().unwrap(), "technical-specification.md");
        assert_eq!(std::fs::read(&path).unwrap(), body.as_bytes());
    }
}
