//! Deck description
//!
//! Provides the Deck struct for loading presentations from RON files.
//! A deck is an ordered list of slides, each with an optional list of sections.

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use std::io;

use crate::deck_validator::ValidationError;

/// A sub-unit of a slide, navigable independently of slide transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Position of the section inside its slide (0-based)
    pub id: usize,
    /// Title shown on the section indicator
    pub title: String,
}

impl SectionSpec {
    pub fn new(id: usize, title: impl Into<String>) -> Self {
        Self { id, title: title.into() }
    }
}

/// A top-level page of the presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Stable identifier (for logs and lookups)
    pub key: String,
    /// Slide title
    pub title: String,
    /// Sections of this slide. Empty means the slide has no section controller.
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
}

impl SlideSpec {
    /// Create a slide without sections
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section, numbering it after the existing ones
    pub fn with_section(mut self, title: impl Into<String>) -> Self {
        let id = self.sections.len();
        self.sections.push(SectionSpec::new(id, title));
        self
    }

    /// Number of sections (0 for a slide without sections)
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Whether this slide mounts a section controller
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }

    /// Title of the section at `index`
    pub fn section_title(&self, index: usize) -> Option<&str> {
        self.sections.get(index).map(|s| s.title.as_str())
    }
}

/// A serializable presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Presentation title
    pub title: String,
    /// Slides in presentation order
    pub slides: Vec<SlideSpec>,
}

impl Deck {
    /// Create an empty deck
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slides: Vec::new(),
        }
    }

    /// Load a deck from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DeckError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Parse a deck from RON text
    pub fn from_ron(contents: &str) -> Result<Self, DeckError> {
        let deck = ron::from_str(contents)?;
        Ok(deck)
    }

    /// Builder: append a slide
    pub fn with_slide(mut self, slide: SlideSpec) -> Self {
        self.slides.push(slide);
        self
    }

    /// Number of slides
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Get a slide by index
    pub fn slide(&self, index: usize) -> Option<&SlideSpec> {
        self.slides.get(index)
    }
}

/// Error loading or accepting a deck
#[derive(Debug)]
pub enum DeckError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Deck failed validation
    Invalid(Vec<ValidationError>),
}

impl From<io::Error> for DeckError {
    fn from(e: io::Error) -> Self {
        DeckError::Io(e)
    }
}

impl From<ron::error::SpannedError> for DeckError {
    fn from(e: ron::error::SpannedError) -> Self {
        DeckError::Parse(e)
    }
}

impl From<Vec<ValidationError>> for DeckError {
    fn from(errors: Vec<ValidationError>) -> Self {
        DeckError::Invalid(errors)
    }
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "IO error: {}", e),
            DeckError::Parse(e) => write!(f, "Parse error: {}", e),
            DeckError::Invalid(errors) => {
                write!(f, "Invalid deck:")?;
                for error in errors {
                    write!(f, " {};", error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckError::Io(e) => Some(e),
            DeckError::Parse(e) => Some(e),
            DeckError::Invalid(_) => None,
        }
    }
}
