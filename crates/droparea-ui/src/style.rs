//! Style system for UI widgets.

use crate::color::Color;
use taffy::{
    AlignItems, Dimension, Display, FlexDirection, JustifyContent,
    LengthPercentage as TaffyLengthPercentage, LengthPercentageAuto as TaffyLengthPercentageAuto,
    Rect, Size, style::Style as TaffyStyle,
};

/// How a border stroke is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BorderStyle {
    #[default]
    Solid,
    /// Dashed stroke; `dash` and `gap` are segment lengths in pixels.
    Dashed { dash: f32, gap: f32 },
}

impl BorderStyle {
    /// Dashed stroke with 6px dashes and 4px gaps.
    pub const fn dashed() -> Self {
        BorderStyle::Dashed { dash: 6.0, gap: 4.0 }
    }

    pub fn is_dashed(&self) -> bool {
        matches!(self, BorderStyle::Dashed { .. })
    }
}

/// UI style for widgets.
#[derive(Debug, Clone)]
pub struct Style {
    /// Taffy layout style
    pub layout: TaffyStyle,

    /// Background color
    pub background_color: Option<Color>,

    /// Border color
    pub border_color: Option<Color>,

    /// Border width
    pub border_width: f32,

    /// Border radius
    pub border_radius: f32,

    /// Border stroke pattern
    pub border_style: BorderStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            layout: TaffyStyle::default(),
            background_color: None,
            border_color: None,
            border_width: 0.0,
            border_radius: 0.0,
            border_style: BorderStyle::Solid,
        }
    }
}

impl Style {
    /// Create a new default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display mode.
    pub fn display(mut self, display: Display) -> Self {
        self.layout.display = display;
        self
    }

    /// Set width in pixels.
    pub fn width(mut self, width: f32) -> Self {
        self.layout.size.width = length(width);
        self
    }

    /// Set height in pixels.
    pub fn height(mut self, height: f32) -> Self {
        self.layout.size.height = length(height);
        self
    }

    /// Set width as a fraction of the parent (0.0 - 1.0).
    pub fn width_percent(mut self, fraction: f32) -> Self {
        self.layout.size.width = Dimension::Percent(fraction);
        self
    }

    /// Set minimum width in pixels.
    pub fn min_width(mut self, width: f32) -> Self {
        self.layout.min_size.width = length(width);
        self
    }

    /// Set minimum height in pixels.
    pub fn min_height(mut self, height: f32) -> Self {
        self.layout.min_size.height = length(height);
        self
    }

    /// Set padding for all sides.
    pub fn padding(mut self, padding: f32) -> Self {
        self.layout.padding = length_rect(padding);
        self
    }

    /// Set padding individually.
    pub fn padding_ltrb(mut self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        self.layout.padding = Rect {
            left: TaffyLengthPercentage::Length(left),
            top: TaffyLengthPercentage::Length(top),
            right: TaffyLengthPercentage::Length(right),
            bottom: TaffyLengthPercentage::Length(bottom),
        };
        self
    }

    /// Set margin for all sides.
    pub fn margin(mut self, margin: f32) -> Self {
        self.layout.margin = Rect {
            left: TaffyLengthPercentageAuto::Length(margin),
            top: TaffyLengthPercentageAuto::Length(margin),
            right: TaffyLengthPercentageAuto::Length(margin),
            bottom: TaffyLengthPercentageAuto::Length(margin),
        };
        self
    }

    /// Set flex direction.
    pub fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.layout.flex_direction = direction;
        self
    }

    /// Set flex grow factor.
    pub fn flex_grow(mut self, grow: f32) -> Self {
        self.layout.flex_grow = grow;
        self
    }

    /// Set justify content.
    pub fn justify_content(mut self, justify: JustifyContent) -> Self {
        self.layout.justify_content = Some(justify);
        self
    }

    /// Set align items.
    pub fn align_items(mut self, align: AlignItems) -> Self {
        self.layout.align_items = Some(align);
        self
    }

    /// Set gap between items.
    pub fn gap(mut self, gap: f32) -> Self {
        let g = TaffyLengthPercentage::Length(gap);
        self.layout.gap = Size {
            width: g,
            height: g,
        };
        self
    }

    /// Set background color.
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set border color.
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Set border width. The border also insets the content box.
    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self.layout.border = length_rect(width);
        self
    }

    /// Set border radius.
    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    /// Set the border stroke pattern.
    pub fn border_style(mut self, border_style: BorderStyle) -> Self {
        self.border_style = border_style;
        self
    }

    /// Whether this style paints a visible border.
    pub fn has_border(&self) -> bool {
        self.border_width > 0.0 && self.border_color.is_some_and(|c| c.a > 0.0)
    }
}

fn length(value: f32) -> Dimension {
    Dimension::Length(value)
}

fn length_rect(value: f32) -> Rect<TaffyLengthPercentage> {
    Rect {
        left: TaffyLengthPercentage::Length(value),
        top: TaffyLengthPercentage::Length(value),
        right: TaffyLengthPercentage::Length(value),
        bottom: TaffyLengthPercentage::Length(value),
    }
}
