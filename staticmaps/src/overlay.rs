//! Markers and paths drawn over the map.

use std::f64::consts::PI;
use std::fmt;

use crate::{Error, GeoPoint, MarkerStyle, PathStyle, lat_lon, polyline};

/// Mean radius of the Earth, in meters.
const EARTH_RADIUS: f64 = 6371e3;

/// Markers sharing one style. Written as a single `markers` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerGroup {
    style: Option<MarkerStyle>,
    points: Vec<GeoPoint>,
}

impl MarkerGroup {
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if there are no points.
    pub fn new(
        style: Option<MarkerStyle>,
        points: impl IntoIterator<Item = GeoPoint>,
    ) -> Result<Self, Error> {
        let points: Vec<_> = points.into_iter().collect();
        if points.is_empty() {
            return Err(Error::InvalidArgument("marker group needs at least one point"));
        }
        Ok(Self { style, points })
    }

    pub(crate) fn from_point(point: GeoPoint) -> Self {
        Self {
            style: None,
            points: vec![point],
        }
    }

    /// Style of the group, `None` meaning the provider's default.
    pub fn style(&self) -> Option<&MarkerStyle> {
        self.style.as_ref()
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
}

impl fmt::Display for MarkerGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_style(f, self.style.as_ref().filter(|style| !style.is_default()))?;
        write_points(f, &self.points)
    }
}

/// Line through the points or, when its style has a fill color, a polygon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    style: Option<PathStyle>,
    points: Vec<GeoPoint>,
}

impl Path {
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if there are no points.
    pub fn new(
        style: Option<PathStyle>,
        points: impl IntoIterator<Item = GeoPoint>,
    ) -> Result<Self, Error> {
        let points: Vec<_> = points.into_iter().collect();
        if points.is_empty() {
            return Err(Error::InvalidArgument("path needs at least one point"));
        }
        Ok(Self { style, points })
    }

    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the line string is empty.
    pub fn from_line_string(
        style: Option<PathStyle>,
        line_string: &geo_types::LineString<f64>,
    ) -> Result<Self, Error> {
        Self::new(style, line_string.coords().copied().map(GeoPoint::from))
    }

    /// Polygon approximating a circle of `radius` meters around the center, with `count`
    /// vertices. Vertices are computed on a spherical Earth, so the circle stays round at any
    /// latitude once projected.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `count` is zero.
    pub fn circle(
        style: Option<PathStyle>,
        latitude: f64,
        longitude: f64,
        radius: f64,
        count: usize,
    ) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidArgument("circle needs at least one vertex"));
        }

        let distance = radius / EARTH_RADIUS;
        let lat = latitude.to_radians();
        let lon = longitude.to_radians();

        let points = (0..count).map(|i| {
            let bearing = (i as f64 * 2.0 * PI) / count as f64;
            let vertex_lat = (lat.sin() * distance.cos()
                + lat.cos() * distance.sin() * bearing.cos())
            .asin();
            let vertex_lon = lon
                + (bearing.sin() * distance.sin() * lat.cos())
                    .atan2(distance.cos() - lat.sin() * vertex_lat.sin());
            lat_lon(vertex_lat.to_degrees(), vertex_lon.to_degrees())
        });

        Self::new(style, points)
    }

    pub fn style(&self) -> Option<&PathStyle> {
        self.style.as_ref()
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_style(f, self.style.as_ref().filter(|style| !style.is_default()))?;
        match polyline::encode(&self.points) {
            Some(encoded) => write!(f, "enc:{encoded}"),
            None => {
                log::debug!("Path contains addresses, listing its points instead of encoding.");
                write_points(f, &self.points)
            }
        }
    }
}

fn write_style(f: &mut fmt::Formatter<'_>, style: Option<&impl fmt::Display>) -> fmt::Result {
    match style {
        Some(style) => write!(f, "{style}|"),
        None => Ok(()),
    }
}

fn write_points(f: &mut fmt::Formatter<'_>, points: &[GeoPoint]) -> fmt::Result {
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            f.write_str("|")?;
        }
        write!(f, "{point}")?;
    }
    Ok(())
}
