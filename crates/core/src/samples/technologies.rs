//! # Technology Inference
//!
//! Guesses a sample's stack from its top-level file names.

/// Files whose exact name identifies a tool
const SPECIAL_FILES: &[(&str, &str)] = &[
    ("pyproject.toml", "Poetry"),
    ("requirements.txt", "pip"),
    ("Dockerfile", "Docker"),
    ("docker-compose.yml", "Docker Compose"),
    ("package.json", "Node.js"),
    ("pom.xml", "Maven"),
];

/// Extensions mapped to languages and formats
const EXTENSIONS: &[(&str, &str)] = &[
    (".py", "Python"),
    (".java", "Java"),
    (".json", "JSON"),
    (".yaml", "YAML"),
    (".yml", "YAML"),
    (".md", "Markdown"),
    (".toml", "TOML"),
    (".txt", "Text"),
    (".html", "HTML"),
    (".css", "CSS"),
    (".js", "JavaScript"),
];

/// Technologies implied by `files`, first-seen order, no duplicates
pub fn infer_technologies<S: AsRef<str>>(files: &[S]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut push = |tech: &str| {
        if !found.iter().any(|t| t == tech) {
            found.push(tech.to_string());
        }
    };

    for file in files {
        let file = file.as_ref();

        if let Some((_, tech)) = SPECIAL_FILES.iter().find(|(name, _)| *name == file) {
            push(*tech);
        }

        for (ext, tech) in EXTENSIONS {
            if file.ends_with(ext) {
                push(*tech);
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_file_before_extension() {
        let techs = infer_technologies(&["pyproject.toml", "agent.py"]);
        assert_eq!(techs, vec!["Poetry", "TOML", "Python"]);
    }

    #[test]
    fn test_no_duplicates() {
        let techs = infer_technologies(&["a.py", "b.py", "config.yml", "config.yaml"]);
        assert_eq!(techs, vec!["Python", "YAML"]);
    }

    #[test]
    fn test_unknown_files_ignored() {
        let techs = infer_technologies(&["LICENSE", "Makefile"]);
        assert!(techs.is_empty());
    }

    #[test]
    fn test_dockerfile_and_java() {
        let techs = infer_technologies(&["Dockerfile", "pom.xml", "Main.java"]);
        assert_eq!(techs, vec!["Docker", "Maven", "Java"]);
    }
}
