//! Palette Collection
//!
//! A palette is plain immutable data once assembled. The engine never
//! reads a clock; creation timestamps are epoch milliseconds supplied by
//! the caller, so identical inputs always produce identical records.

use serde::Serialize;

use crate::color::ColorValue;
use crate::error::{Error, Result};

/// An ordered, named collection of colors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<ColorValue>,
    /// Creation time as epoch milliseconds, caller-supplied
    pub created_at: i64,
    /// Reference to the image the colors came from, when extracted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_image: Option<String>,
}

impl Palette {
    /// Create an empty palette
    pub fn new(name: impl Into<String>, created_at: i64) -> Self {
        Self {
            name: name.into(),
            colors: Vec::new(),
            created_at,
            source_image: None,
        }
    }

    /// Create a palette from an existing color list
    pub fn from_colors(
        name: impl Into<String>,
        colors: Vec<ColorValue>,
        created_at: i64,
    ) -> Self {
        Self {
            name: name.into(),
            colors,
            created_at,
            source_image: None,
        }
    }

    /// Attach the source-image reference
    pub fn with_source_image(mut self, source: impl Into<String>) -> Self {
        self.source_image = Some(source.into());
        self
    }

    /// Append a color unconditionally
    pub fn push(&mut self, color: ColorValue) {
        self.colors.push(color);
    }

    /// Append a color, rejecting an exact hex duplicate
    pub fn push_unique(&mut self, color: ColorValue) -> Result<()> {
        if self.colors.iter().any(|c| c.hex == color.hex) {
            return Err(Error::DuplicateColor { hex: color.hex });
        }
        self.colors.push(color);
        Ok(())
    }

    /// Number of colors in the palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
