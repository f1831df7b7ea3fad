use serde::{Deserialize, Serialize};

use crate::error::{BookzError, Result};

/// A single catalog entry.
///
/// Fields serialize under PascalCase keys (`Title`, `Author`, `Year`,
/// `Genre`, `Read`), matching the on-disk catalog format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    #[serde(default)]
    pub read: bool,
}

impl Book {
    /// Builds a validated book. Title, author and genre must be non-blank
    /// and the year non-negative; values are stored as given, untrimmed.
    pub fn new(
        title: String,
        author: String,
        year: i32,
        genre: String,
        read: bool,
    ) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(BookzError::Validation(
                "title must not be empty".to_string(),
            ));
        }
        if author.trim().is_empty() {
            return Err(BookzError::Validation(
                "author must not be empty".to_string(),
            ));
        }
        if genre.trim().is_empty() {
            return Err(BookzError::Validation(
                "genre must not be empty".to_string(),
            ));
        }
        if year < 0 {
            return Err(BookzError::Validation(format!(
                "year must be a non-negative integer (got {})",
                year
            )));
        }

        Ok(Self {
            title,
            author,
            year,
            genre,
            read,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_valid_book() {
        let book = Book::new(
            "Dune".to_string(),
            "Frank Herbert".to_string(),
            1965,
            "Sci-Fi".to_string(),
            true,
        )
        .unwrap();

        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.year, 1965);
        assert_eq!(book.genre, "Sci-Fi");
        assert!(book.read);
    }

    #[test]
    fn rejects_blank_title() {
        let err = Book::new(
            "   ".to_string(),
            "Frank Herbert".to_string(),
            1965,
            "Sci-Fi".to_string(),
            false,
        )
        .unwrap_err();

        assert!(matches!(err, BookzError::Validation(_)));
    }

    #[test]
    fn rejects_empty_author() {
        let err = Book::new(
            "Dune".to_string(),
            "".to_string(),
            1965,
            "Sci-Fi".to_string(),
            false,
        )
        .unwrap_err();

        assert!(matches!(err, BookzError::Validation(_)));
    }

    #[test]
    fn rejects_blank_genre() {
        let err = Book::new(
            "Dune".to_string(),
            "Frank Herbert".to_string(),
            1965,
            " ".to_string(),
            false,
        )
        .unwrap_err();

        assert!(matches!(err, BookzError::Validation(_)));
    }

    #[test]
    fn rejects_negative_year() {
        let err = Book::new(
            "Dune".to_string(),
            "Frank Herbert".to_string(),
            -1965,
            "Sci-Fi".to_string(),
            false,
        )
        .unwrap_err();

        match err {
            BookzError::Validation(msg) => assert!(msg.contains("non-negative")),
            other => panic!("Expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_year_zero() {
        assert!(Book::new(
            "Meditations".to_string(),
            "Marcus Aurelius".to_string(),
            0,
            "Philosophy".to_string(),
            false,
        )
        .is_ok());
    }

    #[test]
    fn serializes_with_pascal_case_keys() {
        let book = Book::new(
            "Dune".to_string(),
            "Frank Herbert".to_string(),
            1965,
            "Sci-Fi".to_string(),
            true,
        )
        .unwrap();

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["Title"], "Dune");
        assert_eq!(value["Author"], "Frank Herbert");
        assert_eq!(value["Year"], 1965);
        assert_eq!(value["Genre"], "Sci-Fi");
        assert_eq!(value["Read"], true);
    }

    #[test]
    fn missing_read_key_defaults_to_unread() {
        let book: Book = serde_json::from_str(
            r#"{"Title": "Dune", "Author": "Frank Herbert", "Year": 1965, "Genre": "Sci-Fi"}"#,
        )
        .unwrap();

        assert!(!book.read);
    }
}
