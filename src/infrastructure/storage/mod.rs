use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Metadata for one generated audio file
#[derive(Debug, Clone, Serialize)]
pub struct AudioFileInfo {
    pub filename: String,
    pub size_bytes: u64,
    pub created: DateTime<Utc>,
}

/// Output directory bookkeeping for assembled audio.
///
/// Filenames are generated with a timestamp plus a random suffix, so writes
/// from concurrent requests never collide and no locking is needed.
pub struct AudioStorage {
    output_dir: PathBuf,
}

impl AudioStorage {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> io::Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Generate a unique filename like `speech_20260830_142501_1a2b3c4d.wav`
    pub fn generate_filename(&self, prefix: &str, extension: &str) -> String {
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
        let unique_id = Uuid::new_v4().simple().to_string();
        format!("{}_{}_{}.{}", prefix, timestamp, &unique_id[..8], extension)
    }

    pub async fn save(&self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.output_dir.join(filename);
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(
            filename = filename,
            size_bytes = bytes.len(),
            "audio file saved"
        );
        Ok(path)
    }

    /// Resolve a caller-supplied filename to a path inside the output
    /// directory. Rejects path separators and parent references.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
            return None;
        }
        let path = self.output_dir.join(filename);
        path.is_file().then_some(path)
    }

    pub async fn list(&self) -> io::Result<Vec<AudioFileInfo>> {
        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.output_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_audio = path
                .extension()
                .map(|ext| ext == "wav" || ext == "mp3")
                .unwrap_or(false);
            if !is_audio {
                continue;
            }

            let metadata = entry.metadata().await?;
            let created = metadata
                .created()
                .or_else(|_| metadata.modified())
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            files.push(AudioFileInfo {
                filename: entry.file_name().to_string_lossy().to_string(),
                size_bytes: metadata.len(),
                created,
            });
        }

        // Newest first
        files.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(files)
    }

    pub async fn delete(&self, filename: &str) -> io::Result<bool> {
        match self.resolve(filename) {
            Some(path) => {
                tokio::fs::remove_file(path).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
