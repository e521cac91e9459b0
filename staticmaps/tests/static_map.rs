use staticmaps::{
    Error, Format, GeoPoint, MapType, MarkerGroup, MarkerSize, MarkerStyle, Path, PathStyle,
    Scale, StaticMap, lat_lon,
};

const HTTPS: &str = "https://maps.googleapis.com/maps/api/staticmap";

fn address(address: &str) -> GeoPoint {
    GeoPoint::from_address(address).unwrap()
}

#[test]
fn center_and_size_query() {
    let _ = env_logger::try_init();

    let mut map = StaticMap::new();
    map.set_center(address("Paris")).set_size(400, 400);

    let url = map.to_url().unwrap();
    assert_eq!(url.query(), Some("center=Paris&size=400x400"));
}

#[test]
fn monuments_of_paris() {
    let _ = env_logger::try_init();

    let mut map = StaticMap::new();
    map.add_markers(Some(MarkerStyle::BLUE), [address("Tour Eiffel")])
        .unwrap()
        .add_markers(Some(MarkerStyle::RED), [address("Cathédrale Notre Dame")])
        .unwrap()
        .add_markers(Some(MarkerStyle::PURPLE), [address("Arc de Triomphe")])
        .unwrap();

    assert_eq!(
        map.to_string(),
        format!(
            "{HTTPS}?markers=color%3A0x0000FF%7CTour+Eiffel\
             &markers=Cath%C3%A9drale+Notre+Dame\
             &markers=color%3A0x800080%7CArc+de+Triomphe"
        )
    );
}

#[test]
fn labeled_and_custom_icon_markers() {
    let _ = env_logger::try_init();

    let icon = url::Url::parse("http://example.com/ghostbuster.png").unwrap();
    let mut map = StaticMap::new();
    map.add_markers(
        Some(MarkerStyle::builder().icon(icon.as_str()).build()),
        [lat_lon(40.7195532, -74.0067987)],
    )
    .unwrap()
    .add_markers(
        Some(
            MarkerStyle::RED
                .to_builder()
                .label('A')
                .unwrap()
                .size(MarkerSize::Small)
                .build(),
        ),
        [lat_lon(40.7529234, -73.9827515)],
    )
    .unwrap();

    let url = map.to_url().unwrap();
    let markers: Vec<_> = url
        .query_pairs()
        .filter(|(key, _)| key == "markers")
        .map(|(_, value)| value.into_owned())
        .collect();
    assert_eq!(
        markers,
        vec![
            "icon:http://example.com/ghostbuster.png|40.719553,-74.006799",
            "size:small|label:A|40.752923,-73.982752",
        ]
    );
}

#[test]
fn bermuda_triangle_polygon() {
    let _ = env_logger::try_init();

    let mut map = StaticMap::new();
    map.add_path_points(
        Some(PathStyle::builder().color(0).fill(0x66ff0000).build()),
        [
            address("Miami, Florida"),
            address("San Juan, Puerto Rico"),
            address("Bermuda Island"),
        ],
    )
    .unwrap();

    let url = map.to_url().unwrap();
    let (key, value) = url.query_pairs().next().unwrap();
    assert_eq!(key, "path");
    assert_eq!(
        value,
        "color:0x000000|fillcolor:0xFF000066|Miami, Florida|San Juan, Puerto Rico|Bermuda Island"
    );
}

#[test]
fn encoded_path_and_everything_else() {
    let _ = env_logger::try_init();

    let path = Path::new(
        Some(PathStyle::builder().geodesic(true).build()),
        [
            lat_lon(38.5, -120.2),
            lat_lon(40.7, -120.95),
            lat_lon(43.252, -126.453),
        ],
    )
    .unwrap();

    let mut map = StaticMap::new();
    map.use_http()
        .set_center(lat_lon(41.0, -123.0))
        .set_zoom(5)
        .set_scale(Scale::X2)
        .set_format(Format::Gif)
        .set_map_type(MapType::Terrain)
        .set_api_key("api key")
        .add_path(path)
        .add_marker_group(MarkerGroup::new(None, [address("Sacramento")]).unwrap())
        .add_visible([address("Seattle")]);

    assert_eq!(
        map.to_string(),
        "http://maps.googleapis.com/maps/api/staticmap\
         ?center=41.000000%2C-123.000000&zoom=5&scale=2&format=gif&maptype=terrain\
         &key=api+key&markers=Sacramento\
         &path=geodesic%3Atrue%7Cenc%3A_p%7EiF%7Eps%7CU_ulLnnqC_mqNvxq%60%40\
         &visible=Seattle"
    );
}

#[test]
fn circle_is_encoded() {
    let _ = env_logger::try_init();

    let circle = Path::circle(
        Some(PathStyle::builder().fill(0x330000ff).build()),
        48.8583701,
        2.2944813,
        500.0,
        12,
    )
    .unwrap();

    let mut map = StaticMap::new();
    map.add_path(circle);

    let url = map.to_url().unwrap();
    let (_, value) = url.query_pairs().next().unwrap();
    assert!(value.starts_with("fillcolor:0x0000FF33|enc:"));
}

#[test]
fn invalid_arguments() {
    assert_eq!(
        GeoPoint::from_address("").unwrap_err(),
        Error::InvalidArgument("address can't be empty")
    );
    assert!(matches!(
        MarkerGroup::new(Some(MarkerStyle::BLUE), Vec::new()),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        Path::new(None, Vec::new()),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        MarkerStyle::builder().label('|'),
        Err(Error::InvalidArgument(_))
    ));
}
