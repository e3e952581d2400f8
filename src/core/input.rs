use std::{
    fs,
    path::Path,
};

use super::{
    InputFileType,
    VersemoodError,
};

/// How many characters of a loaded file the preview panel shows.
pub const PREVIEW_CHAR_LIMIT: usize = 1000;

/// Reads a user-selected text file, enforcing the extension allow-list
/// and UTF-8 decoding. Decode failure aborts the request; the caller
/// reports it to the user.
pub fn load_text_file(path: &Path) -> Result<String, VersemoodError> {
    let file_type = InputFileType::from_path(path);
    if !file_type.is_supported() {
        return Err(VersemoodError::UnsupportedFileType(path.to_string_lossy().to_string()));
    }

    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| VersemoodError::InvalidEncoding(e.to_string()))
}

/// Truncated snippet of file content for the preview expander.
pub fn preview_snippet(content: &str) -> String {
    let mut snippet: String = content.chars().take(PREVIEW_CHAR_LIMIT).collect();
    if content.chars().count() > PREVIEW_CHAR_LIMIT {
        snippet.push('…');
    }
    snippet
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        fs,
    };

    use super::*;
    use crate::core::VersemoodError;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("versemood_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn loads_utf8_text_file() {
        let path = temp_path("ok.txt");
        fs::write(&path, "hello world").unwrap();

        let content = load_text_file(&path).unwrap();
        assert_eq!(content, "hello world");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn rejects_unsupported_extension() {
        let path = temp_path("song.mp3");
        assert!(matches!(load_text_file(&path), Err(VersemoodError::UnsupportedFileType(_))));
    }

    #[test]
    fn surfaces_decode_failure() {
        let path = temp_path("bad.txt");
        fs::write(&path, [0xff, 0xfe, 0x41]).unwrap();

        assert!(matches!(load_text_file(&path), Err(VersemoodError::InvalidEncoding(_))));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn preview_is_capped_with_marker() {
        let long = "a".repeat(PREVIEW_CHAR_LIMIT + 10);
        let snippet = preview_snippet(&long);
        assert_eq!(snippet.chars().count(), PREVIEW_CHAR_LIMIT + 1);
        assert!(snippet.ends_with('…'));

        assert_eq!(preview_snippet("short"), "short");
    }
}
