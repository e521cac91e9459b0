//! Glue between a showcase and whatever displays it.

use staticmaps::{GeoPoint, MarkerStyle, Scale, StaticMap};

/// URL of the map rendered into a view of the given size, in physical pixels.
///
/// Maps left at the default scale are requested at scale 2 for crisper images (scale 4 is
/// reserved to premium users), so the requested size is divided accordingly. Each side is at
/// least one pixel.
pub fn url_for_view(map: &StaticMap, width: u32, height: u32) -> String {
    let mut map = map.clone();
    if map.scale() == Scale::X1 {
        map.set_scale(Scale::X2);
    }
    let factor = u32::from(map.scale().factor());
    log::debug!("Fitting map into {width}x{height} view at scale {factor}.");
    map.set_size((width / factor).max(1), (height / factor).max(1));
    map.to_string()
}

/// Small map, centered on the point, used as an avatar next to the title.
pub fn thumbnail(center: &GeoPoint) -> StaticMap {
    let mut map = StaticMap::new();
    map.set_center(center.clone());
    map
}

/// One line of text per marker: the address, or the coordinates, followed by the label.
pub fn legend(map: &StaticMap) -> Vec<String> {
    map.marker_groups()
        .iter()
        .flat_map(|group| {
            let label = group.style().and_then(MarkerStyle::label);
            group.points().iter().map(move |point| legend_entry(point, label))
        })
        .collect()
}

fn legend_entry(point: &GeoPoint, label: Option<char>) -> String {
    let text = match (point.address(), point.coordinates()) {
        (Some(address), _) => address.to_owned(),
        (None, Some((latitude, longitude))) => format!("{latitude:.6} {longitude:.6}"),
        (None, None) => String::new(),
    };
    match label {
        Some(label) => format!("{text} ({label})"),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staticmaps::lat_lon;

    #[test]
    fn default_scale_is_doubled() {
        let _ = env_logger::try_init();

        let map = StaticMap::new();
        assert_eq!(
            url_for_view(&map, 1080, 720),
            "https://maps.googleapis.com/maps/api/staticmap?size=540x360&scale=2"
        );
        // The showcase itself is left untouched.
        assert_eq!(map.scale(), Scale::X1);
    }

    #[test]
    fn tiny_view_keeps_one_pixel() {
        let _ = env_logger::try_init();

        assert_eq!(
            url_for_view(&StaticMap::new(), 1, 1),
            "https://maps.googleapis.com/maps/api/staticmap?size=1x1&scale=2"
        );
    }

    #[test]
    fn explicit_scale_is_kept() {
        let _ = env_logger::try_init();

        let mut map = StaticMap::new();
        map.set_scale(Scale::X4);
        assert_eq!(
            url_for_view(&map, 1000, 400),
            "https://maps.googleapis.com/maps/api/staticmap?size=250x100&scale=4"
        );
    }

    #[test]
    fn legend_lists_every_marker() {
        let _ = env_logger::try_init();

        let mut map = StaticMap::new();
        map.add_markers(
            Some(MarkerStyle::RED.to_builder().label('A').unwrap().build()),
            [lat_lon(40.7529234, -73.9827515)],
        )
        .unwrap()
        .add_marker_address("Columbia University, NYC")
        .unwrap();

        assert_eq!(
            legend(&map),
            vec!["40.752923 -73.982752 (A)", "Columbia University, NYC"]
        );
    }

    #[test]
    fn thumbnail_is_centered() {
        let _ = env_logger::try_init();

        let center = GeoPoint::from_address("France").unwrap();
        assert_eq!(
            thumbnail(&center).to_string(),
            "https://maps.googleapis.com/maps/api/staticmap?center=France"
        );
    }
}
