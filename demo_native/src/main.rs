//! Prints the URLs of the showcase maps.
//!
//! Usage: `demo_native [TITLE]`. Set `STATICMAPS_API_KEY` to sign the requests.

use std::io::Write as _;

use demo::Showcase;
use demo::loader::{legend, thumbnail, url_for_view};

/// Size of the view the maps are fitted into, in physical pixels.
const VIEW_SIZE: (u32, u32) = (1280, 800);
const THUMBNAIL_SIZE: u32 = 128;

/// Every showcase, or only the one with the given title.
fn select(title: Option<&str>) -> Result<Vec<Showcase>, Box<dyn std::error::Error>> {
    match title {
        Some(title) => match demo::find(title)? {
            Some(showcase) => Ok(vec![showcase]),
            None => {
                log::error!("There is no showcase titled '{title}'.");
                Err(format!("unknown showcase: {title}").into())
            }
        },
        None => Ok(demo::showcases()?),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let showcases = select(std::env::args().nth(1).as_deref())?;

    let api_key = std::env::var("STATICMAPS_API_KEY").ok();
    let mut stdout = std::io::stdout().lock();

    for mut showcase in showcases {
        if let Some(api_key) = &api_key {
            showcase.map.set_api_key(api_key.as_str());
        }

        writeln!(stdout, "{}: {}", showcase.title, showcase.description)?;
        writeln!(
            stdout,
            "  map:       {}",
            url_for_view(&showcase.map, VIEW_SIZE.0, VIEW_SIZE.1)
        )?;
        if let Some(icon) = &showcase.icon {
            let mut avatar = thumbnail(icon);
            if let Some(api_key) = &api_key {
                avatar.set_api_key(api_key.as_str());
            }
            writeln!(
                stdout,
                "  thumbnail: {}",
                url_for_view(&avatar, THUMBNAIL_SIZE, THUMBNAIL_SIZE)
            )?;
        }
        for entry in legend(&showcase.map) {
            writeln!(stdout, "  * {entry}")?;
        }
    }

    Ok(())
}
