use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// Writes an `old.yaml` / `new.yaml` pair into `dir`.
pub fn write_pair(dir: &Path, old: &str, new: &str) {
    write_file(FileSpec::new(dir.join("old.yaml"), old.to_string()));
    write_file(FileSpec::new(dir.join("new.yaml"), new.to_string()));
}

/// Writes a modification record as the backend would serialize it.
pub fn write_record(
    dir: &Path,
    file_path: &str,
    action: &str,
    content_before: Option<&str>,
    content_after: &str,
) -> PathBuf {
    let record = serde_json::json!({
        "file_path": file_path,
        "action": action,
        "content_before": content_before,
        "content_after": content_after,
    });

    let path = dir.join("record.json");
    write_file(FileSpec::new(path.clone(), record.to_string()));
    path
}
