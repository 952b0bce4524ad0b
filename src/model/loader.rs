//! Deck file loading.
//!
//! `--decks <path>` points at a JSON file holding the initial collection:
//! a top-level array of decks, each `{ "name": ..., "cards": [...] }` with
//! cards as `{ "question": ..., "answer": ..., "theme": "blue" | ... }`.
//! Loading happens once at startup, before the terminal is initialized;
//! nothing is ever written back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Deck;

/// Load an initial deck collection from a JSON file.
pub fn load_decks(path: &Path) -> Result<Vec<Deck>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read deck file {}", path.display()))?;
    let decks: Vec<Deck> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse deck file {}", path.display()))?;
    Ok(decks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardTheme;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_well_formed_deck_file() {
        let file = write_temp(
            r#"[
                {
                    "name": "Spanish",
                    "cards": [
                        { "question": "hola", "answer": "hello", "theme": "gradient_pink" }
                    ]
                },
                { "name": "Empty" }
            ]"#,
        );

        let decks = load_decks(file.path()).unwrap();
        assert_eq!(decks.len(), 2);
        assert_eq!(decks[0].name, "Spanish");
        assert_eq!(decks[0].cards[0].theme, CardTheme::GradientPink);
        assert!(decks[1].cards.is_empty());
    }

    #[test]
    fn missing_theme_falls_back_to_default() {
        let file = write_temp(
            r#"[{ "name": "D", "cards": [{ "question": "q", "answer": "a" }] }]"#,
        );

        let decks = load_decks(file.path()).unwrap();
        assert_eq!(decks[0].cards[0].theme, CardTheme::Blue);
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let file = write_temp(
            r#"[{ "name": "D", "cards": [{ "question": "q", "answer": "a", "theme": "mauve" }] }]"#,
        );

        let err = load_decks(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse deck file"));
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = load_decks(Path::new("/nonexistent/decks.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/decks.json"));
    }
}
