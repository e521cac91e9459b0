//! Showcase maps, the ones displayed by the Android demo application.

pub mod loader;
mod places;

use places::{address, icon};
use staticmaps::{Error, GeoPoint, MarkerStyle, PathStyle, StaticMap};

#[derive(Debug)]
pub struct Showcase {
    pub title: &'static str,
    pub description: &'static str,
    /// Center of the thumbnail displayed next to the title.
    pub icon: Option<GeoPoint>,
    pub map: StaticMap,
}

/// All the showcases, in display order.
///
/// # Errors
///
/// Only if one of the hardcoded places is invalid.
pub fn showcases() -> Result<Vec<Showcase>, Error> {
    Ok(vec![
        paris()?,
        ghostbusters()?,
        silicon_valley()?,
        bermuda_triangle()?,
    ])
}

/// Case-insensitive lookup by title.
///
/// # Errors
///
/// Only if one of the hardcoded places is invalid.
pub fn find(title: &str) -> Result<Option<Showcase>, Error> {
    Ok(showcases()?
        .into_iter()
        .find(|showcase| showcase.title.eq_ignore_ascii_case(title)))
}

fn paris() -> Result<Showcase, Error> {
    let mut map = StaticMap::new();
    map.add_markers(Some(MarkerStyle::BLUE), [address("Tour Eiffel")?])?
        .add_markers(Some(MarkerStyle::RED), [address("Cathédrale Notre Dame")?])?
        .add_markers(Some(MarkerStyle::GREEN), [address("Sacré-Coeur, 75018")?])?
        .add_markers(Some(MarkerStyle::ORANGE), [address("Musée du Louvre")?])?
        .add_markers(Some(MarkerStyle::PURPLE), [address("Arc de Triomphe")?])?;

    Ok(Showcase {
        title: "Paris",
        description: "5 most visited monuments",
        icon: Some(address("France")?),
        map,
    })
}

fn ghostbusters() -> Result<Showcase, Error> {
    let mut map = StaticMap::new();
    map.add_markers(
        Some(MarkerStyle::builder().icon(icon("ghostbuster")).build()),
        [places::firehouse()],
    )?
    .add_markers(
        Some(MarkerStyle::RED.to_builder().label('A')?.build()),
        [places::public_library()],
    )?
    .add_markers(
        Some(MarkerStyle::GREEN.to_builder().label('B')?.build()),
        [address("Columbia University, NYC")?],
    )?;

    Ok(Showcase {
        title: "New-York City",
        description: "Ghostbusters filming locations",
        icon: Some(address("Manhattan, NY")?),
        map,
    })
}

fn silicon_valley() -> Result<Showcase, Error> {
    let mut map = StaticMap::new();
    for (name, headquarters) in [
        ("google", "1600 Amphitheatre Pkwy, Mountain View, CA"),
        ("facebook", "1 Hacker Way, Menlo Park, CA"),
        ("netflix", "100 Winchester Cir, Los Gatos, CA"),
    ] {
        map.add_markers(
            Some(MarkerStyle::builder().icon(icon(name)).build()),
            [address(headquarters)?],
        )?;
    }

    Ok(Showcase {
        title: "Silicon Valley",
        description: "Popular Headquarters",
        icon: Some(address("California, USA")?),
        map,
    })
}

fn bermuda_triangle() -> Result<Showcase, Error> {
    let mut map = StaticMap::new();
    map.add_path_points(
        Some(PathStyle::builder().color(0).fill(0x66ff0000).build()),
        [
            address("Miami, Florida")?,
            address("San Juan, Puerto Rico")?,
            address("Bermuda Island")?,
        ],
    )?;

    Ok(Showcase {
        title: "Bermuda Triangle",
        description: "Brrrrr.",
        icon: None,
        map,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_showcase_builds() {
        let _ = env_logger::try_init();

        let showcases = showcases().unwrap();
        let titles: Vec<_> = showcases.iter().map(|showcase| showcase.title).collect();
        assert_eq!(
            titles,
            ["Paris", "New-York City", "Silicon Valley", "Bermuda Triangle"]
        );
        for showcase in &showcases {
            assert!(showcase.map.to_url().is_ok());
        }
    }

    #[test]
    fn paris_markers() {
        let _ = env_logger::try_init();

        let paris = find("paris").unwrap().unwrap();
        assert_eq!(paris.map.marker_groups().len(), 5);
        assert_eq!(
            paris.map.to_string(),
            "https://maps.googleapis.com/maps/api/staticmap\
             ?markers=color%3A0x0000FF%7CTour+Eiffel\
             &markers=Cath%C3%A9drale+Notre+Dame\
             &markers=color%3A0x00FF00%7CSacr%C3%A9-Coeur%2C+75018\
             &markers=color%3A0xFFA500%7CMus%C3%A9e+du+Louvre\
             &markers=color%3A0x800080%7CArc+de+Triomphe"
        );
    }

    #[test]
    fn bermuda_triangle_is_a_filled_polygon() {
        let _ = env_logger::try_init();

        let bermuda = find("Bermuda Triangle").unwrap().unwrap();
        assert!(bermuda.icon.is_none());
        assert_eq!(
            bermuda.map.to_string(),
            "https://maps.googleapis.com/maps/api/staticmap\
             ?path=color%3A0x000000%7Cfillcolor%3A0xFF000066\
             %7CMiami%2C+Florida%7CSan+Juan%2C+Puerto+Rico%7CBermuda+Island"
        );
    }

    #[test]
    fn unknown_title() {
        let _ = env_logger::try_init();

        assert!(find("Atlantis").unwrap().is_none());
    }
}
