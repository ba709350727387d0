//! Visual configuration: metrics, spacing, and the colour palette.
//!
//! A [`Style`] is plain data read by the layout engine (default control
//! size, spacing, indent) and by the controls (padding, title height,
//! scrollbar geometry, colours). It can be swapped at any time between
//! frames.

use std::ops::{Index, IndexMut};

use crate::geometry::{Color, Vec2};

// ---------------------------------------------------------------------------
// FontId
// ---------------------------------------------------------------------------

/// Opaque handle to a host-managed font.
///
/// The engine never loads or rasterizes fonts; it only passes this handle to
/// the [`TextMetrics`](crate::TextMetrics) collaborator and into emitted text
/// commands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontId(pub usize);

// ---------------------------------------------------------------------------
// ColorId
// ---------------------------------------------------------------------------

/// Palette slot names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorId {
    Text,
    Border,
    WindowBg,
    TitleBg,
    TitleText,
    PanelBg,
    Button,
    ButtonHover,
    ButtonFocus,
    Base,
    BaseHover,
    BaseFocus,
    ScrollBase,
    ScrollThumb,
}

impl ColorId {
    /// Number of palette slots.
    pub const COUNT: usize = 14;

    /// The variant used while the control is hovered.
    ///
    /// Only `Button` and `Base` have hover variants; other ids map to
    /// themselves.
    pub fn hovered(self) -> ColorId {
        match self {
            ColorId::Button => ColorId::ButtonHover,
            ColorId::Base => ColorId::BaseHover,
            other => other,
        }
    }

    /// The variant used while the control holds focus.
    pub fn focused(self) -> ColorId {
        match self {
            ColorId::Button => ColorId::ButtonFocus,
            ColorId::Base => ColorId::BaseFocus,
            other => other,
        }
    }

    /// Whether frames of this colour are drawn without a border.
    pub fn is_borderless(self) -> bool {
        matches!(self, ColorId::ScrollBase | ColorId::ScrollThumb | ColorId::TitleBg)
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// One colour per [`ColorId`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette(pub [Color; ColorId::COUNT]);

impl Index<ColorId> for Palette {
    type Output = Color;
    fn index(&self, id: ColorId) -> &Color {
        &self.0[id as usize]
    }
}

impl IndexMut<ColorId> for Palette {
    fn index_mut(&mut self, id: ColorId) -> &mut Color {
        &mut self.0[id as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette([
            Color::rgba(230, 230, 230, 255), // text
            Color::rgba(25, 25, 25, 255),    // border
            Color::rgba(50, 50, 50, 255),    // window bg
            Color::rgba(25, 25, 25, 255),    // title bg
            Color::rgba(240, 240, 240, 255), // title text
            Color::rgba(0, 0, 0, 0),         // panel bg
            Color::rgba(75, 75, 75, 255),    // button
            Color::rgba(95, 95, 95, 255),    // button hover
            Color::rgba(115, 115, 115, 255), // button focus
            Color::rgba(30, 30, 30, 255),    // base
            Color::rgba(35, 35, 35, 255),    // base hover
            Color::rgba(40, 40, 40, 255),    // base focus
            Color::rgba(43, 43, 43, 255),    // scroll base
            Color::rgba(30, 30, 30, 255),    // scroll thumb
        ])
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Spacing, sizing and colours used by layout and controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style {
    /// Font passed to text measurement and text commands.
    pub font: FontId,
    /// Default control content size; a zero row/column width resolves to
    /// `size + 2 * padding`.
    pub size: Vec2,
    pub padding: i32,
    /// Gap between consecutive layout items, both axes.
    pub spacing: i32,
    /// Horizontal indent added per tree-node nesting level.
    pub indent: i32,
    pub title_height: i32,
    pub scrollbar_size: i32,
    /// Minimum scrollbar thumb length, also the slider thumb width.
    pub thumb_size: i32,
    pub colors: Palette,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: FontId::default(),
            size: Vec2::new(68, 10),
            padding: 5,
            spacing: 4,
            indent: 24,
            title_height: 24,
            scrollbar_size: 12,
            thumb_size: 8,
            colors: Palette::default(),
        }
    }
}

impl Style {
    /// Create the stock style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A preset for monospace cell grids where one unit is one terminal cell.
    ///
    /// Borders are transparent: a one-cell outline would cover the
    /// neighbouring controls.
    pub fn terminal() -> Self {
        let mut colors = Palette::default();
        colors[ColorId::Border] = Color::rgba(0, 0, 0, 0);
        Self {
            size: Vec2::new(10, 1),
            padding: 0,
            spacing: 1,
            indent: 2,
            title_height: 1,
            scrollbar_size: 1,
            thumb_size: 1,
            colors,
            ..Self::default()
        }
    }

    /// Set the font (builder).
    pub fn with_font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }

    /// Set the default control size (builder).
    pub fn with_size(mut self, w: i32, h: i32) -> Self {
        self.size = Vec2::new(w, h);
        self
    }

    /// Set the padding (builder).
    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the spacing (builder).
    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the tree indent (builder).
    pub fn with_indent(mut self, indent: i32) -> Self {
        self.indent = indent;
        self
    }

    /// Replace one palette entry (builder).
    pub fn with_color(mut self, id: ColorId, color: Color) -> Self {
        self.colors[id] = color;
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
