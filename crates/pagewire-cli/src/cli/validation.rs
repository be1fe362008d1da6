/// Validate a root marker: a single, plain path segment.
pub fn parse_root_marker(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Root marker cannot be empty".to_string());
    }
    if s.contains(['/', '\\']) {
        return Err(format!(
            "Root marker '{}' must be a single path segment, not a path",
            s
        ));
    }
    if s == "." || s == ".." {
        return Err(format!("Root marker '{}' is not a directory name", s));
    }
    Ok(s.to_string())
}
