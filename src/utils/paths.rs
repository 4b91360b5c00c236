//! Path string helpers
//!
//! Graph keys are plain strings with `/` as the canonical separator, so the
//! joining and cleaning here is done on string segments rather than going
//! through `PathBuf` (which would reintroduce platform separators).

use std::path::Path;

/// Normalize a slash-separated path string: drops `.` segments, collapses
/// `..` against preceding segments, and strips duplicate separators.
/// Leading `..` segments that cannot be collapsed are kept.
pub fn clean_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(&"..")) || segments.is_empty() {
                    // `..` below an absolute root has nowhere to go
                    if !absolute {
                        segments.push("..");
                    }
                } else {
                    segments.pop();
                }
            }
            _ => segments.push(segment),
        }
    }

    if segments.is_empty() {
        return if absolute { "/" } else { "." }.to_string();
    }
    if absolute {
        format!("/{}", segments.join("/"))
    } else {
        segments.join("/")
    }
}

/// Join a relative import string against the directory of the importing file.
pub fn join_import_path(call_dir: &str, import: &str) -> String {
    if call_dir.is_empty() || call_dir == "." {
        return clean_path(import);
    }
    clean_path(&format!("{}/{}", call_dir, import))
}

/// The directory prefix of a slash-separated path (`.` for bare file names).
pub fn parent_dir(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((dir, _)) if !dir.is_empty() => dir.to_string(),
        _ => ".".to_string(),
    }
}

/// Relative imports start with `.` (covers `./x`, `../x` and `.` itself).
pub fn is_relative_import(path: &str) -> bool {
    path.starts_with('.')
}

/// True when the basename is an index barrel (`index.{js,jsx,ts,tsx}`).
pub fn is_index_file(path: &str) -> bool {
    let basename = path.rsplit('/').next().unwrap_or(path);
    matches!(
        basename,
        "index.js" | "index.jsx" | "index.ts" | "index.tsx"
    )
}

/// True when the file name carries one of the lexable source extensions.
pub fn is_source_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("js") | Some("jsx") | Some("ts") | Some("tsx")
    )
}

/// Render an OS path as a slash-separated, cleaned string key.
pub fn to_path_key(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    clean_path(&raw)
}
