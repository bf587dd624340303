//! Regex compilation for static extraction patterns.

use regex::Regex;

/// Compiles a static regex pattern with a safe fallback.
///
/// If compilation fails, logs an error and returns a pattern that matches
/// nothing, so extraction degrades to "not found" instead of panicking inside
/// a request handler.
///
/// # Arguments
///
/// * `pattern` - The regex source
/// * `context` - Context description for error logging (e.g., "title extraction")
pub fn compile_pattern(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        log::error!(
            "Failed to compile pattern '{}' for {}: {}. Using fallback pattern.",
            pattern,
            context,
            e
        );
        match Regex::new(r"[^\s\S]") {
            Ok(never) => never,
            Err(e) => panic!("fallback pattern must compile: {e}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_pattern_valid() {
        let re = compile_pattern(r"(?i)<h1\b", "test");
        assert!(re.is_match("<H1 class=\"x\">"));
    }

    #[test]
    fn test_compile_pattern_invalid_matches_nothing() {
        let re = compile_pattern(r"(unclosed", "test");
        assert!(!re.is_match(""));
        assert!(!re.is_match("(unclosed"));
        assert!(!re.is_match("anything at all\n"));
    }
}
