//! Deck validation
//!
//! Validates decks before a presentation starts. The [`DeckValidator`]
//! checks for issues like empty decks, duplicate slide keys, blank titles,
//! and section ids that don't match their position.

use std::collections::HashSet;

use crate::deck::Deck;

/// Validation error found in a deck
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Deck has no slides
    EmptyDeck,
    /// Two slides share a key
    DuplicateKey(String),
    /// Slide has a blank title
    EmptyTitle(String),
    /// Section id differs from its position in the slide
    SectionOutOfOrder {
        slide: String,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyDeck => write!(f, "Deck has no slides"),
            ValidationError::DuplicateKey(key) => {
                write!(f, "Duplicate slide key: '{}'", key)
            }
            ValidationError::EmptyTitle(key) => {
                write!(f, "Slide '{}' has an empty title", key)
            }
            ValidationError::SectionOutOfOrder { slide, expected, found } => {
                write!(
                    f,
                    "Slide '{}': section at position {} has id {}",
                    slide, expected, found
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Deck validator that checks for common authoring errors
///
/// # Example
/// ```ignore
/// let errors = DeckValidator::validate(&deck);
/// for error in &errors {
///     log::warn!("Deck validation: {}", error);
/// }
/// ```
pub struct DeckValidator;

impl DeckValidator {
    /// Validate a deck, returning all errors found
    pub fn validate(deck: &Deck) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if deck.slides.is_empty() {
            errors.push(ValidationError::EmptyDeck);
        }

        let mut seen_keys = HashSet::new();
        for slide in &deck.slides {
            if !seen_keys.insert(slide.key.as_str()) {
                errors.push(ValidationError::DuplicateKey(slide.key.clone()));
            }

            if slide.title.trim().is_empty() {
                errors.push(ValidationError::EmptyTitle(slide.key.clone()));
            }

            // Section indicators jump by id, so ids must be positions
            for (position, section) in slide.sections.iter().enumerate() {
                if section.id != position {
                    errors.push(ValidationError::SectionOutOfOrder {
                        slide: slide.key.clone(),
                        expected: position,
                        found: section.id,
                    });
                }
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(deck: &Deck) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(deck);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
