// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labels drawn in the sidebar.

use parley::{FontWeight, GenericFamily, StyleProperty, StyleSet};
use vello::{
    kurbo::{Point, Size, Vec2},
    peniko::Color,
};

/// Reference point where a label is attached to its insertion point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttachmentPoint {
    /// Top left corner.
    #[default]
    TopLeft,
    /// Center of both axes.
    MiddleCenter,
}

impl AttachmentPoint {
    /// Displacement of this attachment point from the top left corner of a
    /// box of this size.
    pub fn select(&self, Size { width, height }: Size) -> Vec2 {
        match self {
            Self::TopLeft => Vec2::ZERO,
            Self::MiddleCenter => Vec2::new(0.5 * width, 0.5 * height),
        }
    }
}

/// Font styles used by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Readout rows and controls, 20px monospace.
    Body,
    /// Readout and controls titles, 22px bold monospace.
    Title,
    /// Button caption, 18px monospace.
    Button,
}

impl TextStyle {
    /// Font size in pixels.
    pub fn font_size(self) -> f32 {
        match self {
            Self::Body => 20.0,
            Self::Title => 22.0,
            Self::Button => 18.0,
        }
    }

    /// Parley style set for this style.
    pub fn style_set(self) -> StyleSet<Option<Color>> {
        let mut style = StyleSet::new(self.font_size());
        style.insert(GenericFamily::Monospace.into());
        if self == Self::Title {
            style.insert(StyleProperty::FontWeight(FontWeight::BOLD));
        }
        style
    }
}

/// A positioned label.
#[derive(Debug, Clone)]
pub struct Label<'a> {
    /// Text content.
    pub text: &'a str,
    /// Font style.
    pub style: TextStyle,
    /// Fill color of the glyphs.
    pub color: Color,
    /// Insertion point in window coordinates.
    pub insertion: Point,
    /// Which part of the laid out text sits on the insertion point.
    pub attachment_point: AttachmentPoint,
}
