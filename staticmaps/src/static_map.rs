//! Static map request.
//! <https://developers.google.com/maps/documentation/maps-static/start>

use std::fmt;

use crate::{Error, GeoPoint, MarkerGroup, MarkerStyle, Path, PathStyle, UrlBuilder};

const BASE_URL: &str = "maps.googleapis.com/maps/api/staticmap";

/// Longest URL accepted by the API.
const MAX_URL_LENGTH: usize = 8192;

/// Map types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum MapType {
    /// Standard roadmap, as normally shown on the Google Maps website.
    #[default]
    Roadmap,
    Satellite,
    /// Physical relief, showing terrain and vegetation.
    Terrain,
    /// Satellite imagery with a transparent layer of major streets and place names.
    Hybrid,
}

impl MapType {
    fn api_slug(self) -> &'static str {
        match self {
            Self::Roadmap => "roadmap",
            Self::Satellite => "satellite",
            Self::Terrain => "terrain",
            Self::Hybrid => "hybrid",
        }
    }
}

/// Image formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum Format {
    /// 8-bit PNG.
    #[default]
    Png,
    /// Same as [`Format::Png`].
    Png8,
    Png32,
    Gif,
    /// Progressive JPEG.
    Jpg,
    /// Non-progressive JPEG.
    JpgBaseline,
}

impl Format {
    fn api_slug(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Png8 => "png8",
            Self::Png32 => "png32",
            Self::Gif => "gif",
            Self::Jpg => "jpg",
            Self::JpgBaseline => "jpg-baseline",
        }
    }
}

/// Multiplier applied to the size to get the number of pixels of the image, without changing
/// the area covered by the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum Scale {
    #[default]
    X1,
    X2,
    /// Available for Premium Plan customers only.
    X4,
}

impl Scale {
    pub fn factor(self) -> u8 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X4 => 4,
        }
    }
}

impl TryFrom<u32> for Scale {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::X1),
            2 => Ok(Self::X2),
            4 => Ok(Self::X4),
            _ => Err(Error::InvalidArgument("scale must be 1, 2 or 4")),
        }
    }
}

/// Request for a static map image.
///
/// Configured in place, with chained calls, and then turned into an URL with
/// [`ToString::to_string`] or [`StaticMap::to_url`].
///
/// ```
/// use staticmaps::{GeoPoint, MarkerStyle, StaticMap};
///
/// let mut map = StaticMap::new();
/// map.set_center_address("Paris")?
///     .set_size(400, 400)
///     .add_markers(Some(MarkerStyle::BLUE), [GeoPoint::from_address("Tour Eiffel")?])?;
///
/// assert_eq!(
///     map.to_string(),
///     "https://maps.googleapis.com/maps/api/staticmap?center=Paris&size=400x400&markers=color%3A0x0000FF%7CTour+Eiffel"
/// );
/// # Ok::<(), staticmaps::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMap {
    center: Option<GeoPoint>,
    visible: Vec<GeoPoint>,
    markers: Vec<MarkerGroup>,
    paths: Vec<Path>,
    zoom: Option<u32>,
    scale: Scale,
    size: Option<(u32, u32)>,
    format: Format,
    map_type: MapType,
    api_key: Option<String>,
    https: bool,
}

impl Default for StaticMap {
    fn default() -> Self {
        Self {
            center: None,
            visible: Vec::new(),
            markers: Vec::new(),
            paths: Vec::new(),
            zoom: None,
            scale: Scale::default(),
            size: None,
            format: Format::default(),
            map_type: MapType::default(),
            api_key: None,
            https: true,
        }
    }
}

impl StaticMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicitly center the map. Without a center, the provider fits the map around the
    /// markers, paths and visible points.
    pub fn set_center(&mut self, center: impl Into<GeoPoint>) -> &mut Self {
        self.center = Some(center.into());
        self
    }

    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the address is empty.
    pub fn set_center_address(&mut self, address: &str) -> Result<&mut Self, Error> {
        let center = GeoPoint::from_address(address)?;
        Ok(self.set_center(center))
    }

    pub fn clear_center(&mut self) -> &mut Self {
        self.center = None;
        self
    }

    /// Points which must stay visible on the map, even if they are not marked.
    pub fn add_visible(&mut self, points: impl IntoIterator<Item = GeoPoint>) -> &mut Self {
        self.visible.extend(points);
        self
    }

    pub fn clear_visible(&mut self) -> &mut Self {
        self.visible.clear();
        self
    }

    /// Single marker with the default style.
    pub fn add_marker(&mut self, point: impl Into<GeoPoint>) -> &mut Self {
        self.markers.push(MarkerGroup::from_point(point.into()));
        self
    }

    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the address is empty.
    pub fn add_marker_address(&mut self, address: &str) -> Result<&mut Self, Error> {
        let point = GeoPoint::from_address(address)?;
        Ok(self.add_marker(point))
    }

    /// Group of markers sharing a style, `None` meaning the provider's default.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if there are no points. The map is left untouched.
    pub fn add_markers(
        &mut self,
        style: Option<MarkerStyle>,
        points: impl IntoIterator<Item = GeoPoint>,
    ) -> Result<&mut Self, Error> {
        let group = MarkerGroup::new(style, points)?;
        Ok(self.add_marker_group(group))
    }

    pub fn add_marker_group(&mut self, group: MarkerGroup) -> &mut Self {
        self.markers.push(group);
        self
    }

    pub fn clear_markers(&mut self) -> &mut Self {
        self.markers.clear();
        self
    }

    pub fn add_path(&mut self, path: Path) -> &mut Self {
        self.paths.push(path);
        self
    }

    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if there are no points. The map is left untouched.
    pub fn add_path_points(
        &mut self,
        style: Option<PathStyle>,
        points: impl IntoIterator<Item = GeoPoint>,
    ) -> Result<&mut Self, Error> {
        let path = Path::new(style, points)?;
        Ok(self.add_path(path))
    }

    pub fn clear_paths(&mut self) -> &mut Self {
        self.paths.clear();
        self
    }

    /// Zoom level, from 0 (whole world) to 21 and more.
    pub fn set_zoom(&mut self, zoom: u32) -> &mut Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn set_scale(&mut self, scale: Scale) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Size of the image in pixels, before applying the scale.
    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.size = Some((width, height));
        self
    }

    pub fn set_format(&mut self, format: Format) -> &mut Self {
        self.format = format;
        self
    }

    pub fn set_map_type(&mut self, map_type: MapType) -> &mut Self {
        self.map_type = map_type;
        self
    }

    /// Key from the Google Cloud console.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> &mut Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn use_http(&mut self) -> &mut Self {
        self.https = false;
        self
    }

    /// Use the `https` scheme, which is the default.
    pub fn use_https(&mut self) -> &mut Self {
        self.https = true;
        self
    }

    pub fn center(&self) -> Option<&GeoPoint> {
        self.center.as_ref()
    }

    pub fn visible(&self) -> &[GeoPoint] {
        &self.visible
    }

    pub fn marker_groups(&self) -> &[MarkerGroup] {
        &self.markers
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn zoom(&self) -> Option<u32> {
        self.zoom
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Width and height, in pixels.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn map_type(&self) -> MapType {
        self.map_type
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn is_https(&self) -> bool {
        self.https
    }

    fn url_builder(&self) -> UrlBuilder {
        let scheme = if self.https { "https" } else { "http" };
        let mut builder = UrlBuilder::new(format!("{scheme}://{BASE_URL}"));

        // Order of the parameters matters to the provider.
        if let Some(center) = &self.center {
            builder.append_query("center", center);
        }
        if let Some((width, height)) = self.size {
            builder.append_query("size", &format!("{width}x{height}"));
        }
        if let Some(zoom) = self.zoom {
            builder.append_query("zoom", &zoom);
        }
        if self.scale != Scale::X1 {
            builder.append_query("scale", &self.scale.factor());
        }
        if self.format != Format::Png {
            builder.append_query("format", self.format.api_slug());
        }
        if self.map_type != MapType::Roadmap {
            builder.append_query("maptype", self.map_type.api_slug());
        }
        if let Some(api_key) = &self.api_key {
            builder.append_query("key", api_key);
        }
        for group in &self.markers {
            builder.append_query("markers", group);
        }
        for path in &self.paths {
            builder.append_query("path", path);
        }
        for point in &self.visible {
            builder.append_query("visible", point);
        }

        builder
    }

    /// Parsed URL of the image.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedUrl`] if the assembled string can't be parsed.
    pub fn to_url(&self) -> Result<url::Url, Error> {
        Ok(url::Url::parse(&self.to_string())?)
    }
}

impl fmt::Display for StaticMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let url = self.url_builder().build();
        log::trace!("Static map URL: {url}");
        if url.len() > MAX_URL_LENGTH {
            log::warn!(
                "URL is {} characters long, which is more than the {MAX_URL_LENGTH} accepted by the provider.",
                url.len()
            );
        }
        f.write_str(&url)
    }
}
