//! Encoded polyline algorithm, used by the `path` parameter to shorten the URL.
//! <https://developers.google.com/maps/documentation/utilities/polylinealgorithm>

use crate::GeoPoint;

/// Encode the points into a polyline string.
///
/// Returns `None` if any point is an address, because addresses can't be encoded and the
/// caller needs to list the points verbatim instead.
pub fn encode<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<String> {
    let mut encoded = String::new();
    let (mut previous_lat, mut previous_lng) = (0i32, 0i32);

    for point in points {
        let (latitude, longitude) = point.coordinates()?;

        // Truncation toward zero, not rounding.
        let lat = (latitude * 1e5) as i32;
        let lng = (longitude * 1e5) as i32;

        encode_signed(lat.wrapping_sub(previous_lat), &mut encoded);
        encode_signed(lng.wrapping_sub(previous_lng), &mut encoded);

        previous_lat = lat;
        previous_lng = lng;
    }

    Some(encoded)
}

/// Fold the sign into the lowest bit, so that small negative numbers stay small.
fn encode_signed(value: i32, out: &mut String) {
    let shifted = value << 1;
    let folded = if value < 0 { !shifted } else { shifted };
    encode_unsigned(folded as u32, out);
}

/// Emit 5-bit chunks, least significant first, with 0x20 marking a continuation.
fn encode_unsigned(mut value: u32, out: &mut String) {
    while value >= 0x20 {
        out.push(char::from((0x20 | (value & 0x1f)) as u8 + 63));
        value >>= 5;
    }
    out.push(char::from(value as u8 + 63));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lat_lon;

    fn encode_single(value: i32) -> String {
        let mut out = String::new();
        encode_signed(value, &mut out);
        out
    }

    #[test]
    fn reference_polyline() {
        let points = [
            lat_lon(38.5, -120.2),
            lat_lon(40.7, -120.95),
            lat_lon(43.252, -126.453),
        ];
        assert_eq!(
            encode(&points).as_deref(),
            Some("_p~iF~ps|U_ulLnnqC_mqNvxq`@")
        );
    }

    #[test]
    fn empty_sequence_encodes_to_empty_string() {
        assert_eq!(encode(&Vec::<GeoPoint>::new()).as_deref(), Some(""));
    }

    #[test]
    fn addresses_can_not_be_encoded() {
        let address = GeoPoint::from_address("Bermuda Island").unwrap();

        assert_eq!(encode(&[address.clone()]), None);
        assert_eq!(encode(&[address.clone(), lat_lon(1.0, 2.0)]), None);
        assert_eq!(encode(&[lat_lon(1.0, 2.0), address]), None);
    }

    #[test]
    fn sign_folding() {
        assert_eq!(encode_single(0), "?");
        assert_eq!(encode_single(1), "A");
        assert_eq!(encode_single(-1), "@");
        assert_eq!(encode_single(-17_998_321), "`~oia@");
    }

    #[test]
    fn coordinates_are_truncated_not_rounded() {
        // 0.000019 * 1e5 = 1.9, which truncates to 1.
        assert_eq!(encode(&[lat_lon(0.000019, -0.000019)]).as_deref(), Some("A@"));
        assert_eq!(encode(&[lat_lon(0.0, 0.0)]).as_deref(), Some("??"));
    }

    #[test]
    fn deltas_are_relative_to_previous_point() {
        let points = [
            lat_lon(40.7195532, -74.0067987),
            lat_lon(40.7529234, -73.9827515),
        ];
        assert_eq!(encode(&points).as_deref(), Some("e`pwFlmubMqoEguC"));
    }
}
