//! Visual styles of markers and paths.
//!
//! Unset fields fall back to the provider's defaults. Only the fields which differ from their
//! default are written into the request, and two styles are equal when their effective values
//! are, no matter which fields were set explicitly.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::Error;

/// Size of the marker(s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum MarkerSize {
    Tiny,
    Mid,
    Small,
    #[default]
    Normal,
}

impl MarkerSize {
    fn api_slug(self) -> Option<&'static str> {
        match self {
            Self::Tiny => Some("tiny"),
            Self::Mid => Some("mid"),
            Self::Small => Some("small"),
            Self::Normal => None,
        }
    }
}

/// Style shared by a group of markers.
#[derive(Debug, Clone, Default)]
pub struct MarkerStyle {
    icon: Option<String>,
    color: Option<u32>,
    label: Option<char>,
    size: Option<MarkerSize>,
}

impl MarkerStyle {
    pub const DEFAULT_COLOR: u32 = 0xff0000;

    pub const BLACK: Self = Self::with_color(0x000000);
    pub const PURPLE: Self = Self::with_color(0x800080);
    pub const RED: Self = Self::with_color(0xff0000);
    pub const GREY: Self = Self::with_color(0x808080);
    pub const GREEN: Self = Self::with_color(0x00ff00);
    pub const ORANGE: Self = Self::with_color(0xffa500);
    pub const YELLOW: Self = Self::with_color(0xffff00);
    pub const BLUE: Self = Self::with_color(0x0000ff);
    pub const WHITE: Self = Self::with_color(0xffffff);

    const fn with_color(color: u32) -> Self {
        Self {
            icon: None,
            color: Some(color),
            label: None,
            size: None,
        }
    }

    pub fn builder() -> MarkerStyleBuilder {
        MarkerStyleBuilder {
            style: Self::default(),
        }
    }

    /// Builder seeded with this style, e.g. `MarkerStyle::RED.to_builder().label('A')?.build()`.
    pub fn to_builder(&self) -> MarkerStyleBuilder {
        MarkerStyleBuilder {
            style: self.clone(),
        }
    }

    /// URL of a custom icon.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// 24-bit RGB color.
    pub fn color(&self) -> u32 {
        self.color.unwrap_or(Self::DEFAULT_COLOR) & 0xffffff
    }

    pub fn label(&self) -> Option<char> {
        self.label
    }

    pub fn size(&self) -> MarkerSize {
        self.size.unwrap_or_default()
    }

    /// Whether nothing would be written for this style.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = Fields::new(f);
        if let Some(icon) = self.icon() {
            fields.push(format_args!("icon:{icon}"))?;
        }
        if let Some(size) = self.size().api_slug() {
            fields.push(format_args!("size:{size}"))?;
        }
        if self.color() != Self::DEFAULT_COLOR {
            fields.push(format_args!("color:{}", Rgb(self.color())))?;
        }
        if let Some(label) = self.label() {
            fields.push(format_args!("label:{label}"))?;
        }
        Ok(())
    }
}

impl PartialEq for MarkerStyle {
    fn eq(&self, other: &Self) -> bool {
        self.icon() == other.icon()
            && self.color() == other.color()
            && self.label() == other.label()
            && self.size() == other.size()
    }
}

impl Eq for MarkerStyle {}

impl Hash for MarkerStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.icon().hash(state);
        self.color().hash(state);
        self.label().hash(state);
        self.size().hash(state);
    }
}

#[derive(Debug, Clone)]
pub struct MarkerStyleBuilder {
    style: MarkerStyle,
}

impl MarkerStyleBuilder {
    /// URL of a custom icon. PNG is recommended, but JPEG and GIF are supported as well.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.style.icon = Some(icon.into());
        self
    }

    /// 24-bit RGB color, higher bits are ignored.
    pub fn color(mut self, color: u32) -> Self {
        self.style.color = Some(color & 0xffffff);
        self
    }

    /// Single alphanumeric character from the set {A-Z, 0-9}. Lowercase letters are
    /// uppercased.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for any other character.
    pub fn label(mut self, label: char) -> Result<Self, Error> {
        if !label.is_ascii_alphanumeric() {
            return Err(Error::InvalidArgument("label must be one of A-Z or 0-9"));
        }
        self.style.label = Some(label.to_ascii_uppercase());
        Ok(self)
    }

    pub fn size(mut self, size: MarkerSize) -> Self {
        self.style.size = Some(size);
        self
    }

    pub fn build(self) -> MarkerStyle {
        self.style
    }
}

/// Style of a path or, when filled, of a polygon.
#[derive(Debug, Clone, Default)]
pub struct PathStyle {
    weight: Option<u32>,
    color: Option<u32>,
    fill_color: Option<u32>,
    geodesic: Option<bool>,
}

impl PathStyle {
    pub const DEFAULT_WEIGHT: u32 = 5;
    pub const DEFAULT_COLOR: u32 = 0x0000_00ff;

    pub fn builder() -> PathStyleBuilder {
        PathStyleBuilder {
            style: Self::default(),
        }
    }

    pub fn to_builder(&self) -> PathStyleBuilder {
        PathStyleBuilder {
            style: self.clone(),
        }
    }

    /// Thickness in pixels.
    pub fn weight(&self) -> u32 {
        self.weight.unwrap_or(Self::DEFAULT_WEIGHT)
    }

    /// ARGB color of the line.
    pub fn color(&self) -> u32 {
        self.color.unwrap_or(Self::DEFAULT_COLOR)
    }

    /// ARGB color of the area enclosed by the path, where 0 means no fill.
    pub fn fill_color(&self) -> u32 {
        self.fill_color.unwrap_or(0)
    }

    pub fn geodesic(&self) -> bool {
        self.geodesic.unwrap_or(false)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = Fields::new(f);
        if self.weight() != Self::DEFAULT_WEIGHT {
            fields.push(format_args!("weight:{}", self.weight()))?;
        }
        if self.color() != Self::DEFAULT_COLOR {
            fields.push(format_args!("color:{}", Rgba(self.color())))?;
        }
        if self.fill_color() != 0 {
            fields.push(format_args!("fillcolor:{}", Rgba(self.fill_color())))?;
        }
        if self.geodesic() {
            fields.push(format_args!("geodesic:true"))?;
        }
        Ok(())
    }
}

impl PartialEq for PathStyle {
    fn eq(&self, other: &Self) -> bool {
        self.weight() == other.weight()
            && self.color() == other.color()
            && self.fill_color() == other.fill_color()
            && self.geodesic() == other.geodesic()
    }
}

impl Eq for PathStyle {}

impl Hash for PathStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.weight().hash(state);
        self.color().hash(state);
        self.fill_color().hash(state);
        self.geodesic().hash(state);
    }
}

#[derive(Debug, Clone)]
pub struct PathStyleBuilder {
    style: PathStyle,
}

impl PathStyleBuilder {
    /// Thickness of the path in pixels. Paths are 5 pixels thick unless specified.
    pub fn weight(mut self, width: u32) -> Self {
        self.style.weight = Some(width);
        self
    }

    /// 24-bit or 32-bit ARGB color.
    pub fn color(mut self, color: u32) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Marks the path as a polygonal area, filled with the given ARGB color.
    pub fn fill(mut self, color: u32) -> Self {
        self.style.fill_color = Some(color);
        self
    }

    /// Follow the curvature of the Earth instead of drawing straight lines.
    pub fn geodesic(mut self, geodesic: bool) -> Self {
        self.style.geodesic = Some(geodesic);
        self
    }

    pub fn build(self) -> PathStyle {
        self.style
    }
}

/// `|` separated list of `name:value` fields.
struct Fields<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> Fields<'a, 'b> {
    fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self { f, empty: true }
    }

    fn push(&mut self, field: fmt::Arguments<'_>) -> fmt::Result {
        if !self.empty {
            self.f.write_str("|")?;
        }
        self.empty = false;
        self.f.write_fmt(field)
    }
}

/// 24-bit color as `0xRRGGBB`.
struct Rgb(u32);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06X}", self.0 & 0xffffff)
    }
}

/// ARGB color as `0xRRGGBBAA`, or `0xRRGGBB` when there is no alpha.
struct Rgba(u32);

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alpha = self.0 >> 24;
        if alpha == 0 {
            fmt::Display::fmt(&Rgb(self.0), f)
        } else {
            write!(f, "0x{:08X}", (self.0 << 8) | alpha)
        }
    }
}
