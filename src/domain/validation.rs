/// Validates a reverse-domain application identifier (e.g. `com.example.app`).
///
/// Checks:
/// - At least two dot-separated segments
/// - Each segment starts with a lowercase ASCII letter
/// - Remaining characters are lowercase ASCII letters, digits, or '_'
pub fn is_reverse_domain_id(id: &str) -> bool {
    let mut segments = 0;
    for segment in id.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_lowercase() => {}
            _ => return false,
        }
        if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
            return false;
        }
        segments += 1;
    }
    segments >= 2
}

/// Validates a web asset directory path.
///
/// The external build tool resolves this relative to the project root, so the
/// path must be non-empty, relative, free of parent-directory and empty
/// components (no trailing or doubled slashes), and use forward slashes only.
pub fn is_relative_asset_dir(path: &str) -> bool {
    if path.is_empty() || path.contains('\\') {
        return false;
    }
    if std::path::Path::new(path).is_absolute() {
        return false;
    }
    path.split('/').all(|segment| !segment.is_empty() && segment != "..")
}
