//! Display language guessed from a file extension.

/// Language name used when the extension is not recognised.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Map the final extension of `path` (case-insensitive) to a display name.
pub fn language_from_path(path: &str) -> &'static str {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return UNKNOWN_LANGUAGE;
    };
    match ext.to_ascii_lowercase().as_str() {
        "tsx" | "ts" => "TypeScript",
        "jsx" | "js" => "JavaScript",
        "py" => "Python",
        "vue" => "Vue",
        "java" => "Java",
        "go" => "Go",
        "rs" => "Rust",
        "cpp" => "C++",
        "c" => "C",
        _ => UNKNOWN_LANGUAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(language_from_path("src/App.tsx"), "TypeScript");
        assert_eq!(language_from_path("src/index.JS"), "JavaScript");
        assert_eq!(language_from_path("app/main.py"), "Python");
        assert_eq!(language_from_path("src/lib.rs"), "Rust");
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(language_from_path("README.md"), UNKNOWN_LANGUAGE);
        assert_eq!(language_from_path("Makefile"), UNKNOWN_LANGUAGE);
    }
}
