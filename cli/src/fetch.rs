//! Input resolution for local paths and URLs.

use std::fs;
use std::path::Path;

/// True when the input names a remote resource.
pub fn is_remote(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Load input bytes from a local path, `file://` URL, or `http(s)` URL.
pub fn resolve_input(input: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if is_remote(input) {
        return fetch_bytes(input);
    }
    let path = input.strip_prefix("file://").unwrap_or(input);
    Ok(fs::read(path)?)
}

/// Download a URL into memory.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    log::info!("Fetching {}", url);
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

/// Derive a file stem from the input for naming outputs.
pub fn input_stem(input: &str) -> String {
    if is_remote(input) {
        let path = input.split(['?', '#']).next().unwrap_or(input);
        let name = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
        let stem = match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        };
        if stem.is_empty() {
            "document".to_string()
        } else {
            stem.to_string()
        }
    } else {
        let path = input.strip_prefix("file://").unwrap_or(input);
        Path::new(path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string())
    }
}
