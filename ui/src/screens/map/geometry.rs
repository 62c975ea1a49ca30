//! World boundary document: fetched once, parsed into per-region paths.
//!
//! Regions are `<path>` elements identified by their `id` attribute (ISO
//! alpha-2 code); `data-name` carries the display name. The parsed map, or
//! the fact that loading failed, is cached for the lifetime of the process.

use once_cell::sync::OnceCell;

use crate::core::error::GeometryError;
use crate::core::platform;

#[cfg(target_arch = "wasm32")]
const WORLD_MAP_SVG: dioxus::prelude::Asset = dioxus::prelude::asset!("/assets/maps/world.svg");

static WORLD_MAP: OnceCell<Option<WorldMap>> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    pub view_box: String,
    pub regions: Vec<Region>,
}

impl WorldMap {
    pub fn parse(document: &str) -> Result<Self, GeometryError> {
        let mut options = roxmltree::ParsingOptions::default();
        options.allow_dtd = true;
        let doc = roxmltree::Document::parse_with_options(document, options)
            .map_err(|err| GeometryError::Xml(err.to_string()))?;

        let svg = doc.root_element();
        if svg.tag_name().name() != "svg" {
            return Err(GeometryError::NotSvg);
        }
        let view_box = svg.attribute("viewBox").unwrap_or("0 0 1000 500").to_string();

        let regions: Vec<Region> = svg
            .descendants()
            .filter(|node| node.is_element() && node.tag_name().name() == "path")
            .filter_map(|node| {
                let id = node.attribute("id")?;
                let path = node.attribute("d")?;
                let name = node.attribute("data-name").unwrap_or(id);
                Some(Region {
                    id: id.to_string(),
                    name: name.to_string(),
                    path: path.to_string(),
                })
            })
            .collect();

        if regions.is_empty() {
            return Err(GeometryError::NoRegions);
        }
        Ok(Self { view_box, regions })
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }
}

fn default_location() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        WORLD_MAP_SVG.to_string()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        platform::asset_path("maps/world.svg").display().to_string()
    }
}

/// Load (or return the cached) world map. `None` means the map is
/// unavailable and callers should render the country list instead.
pub async fn load_world_map(location: Option<&str>) -> Option<&'static WorldMap> {
    if let Some(cached) = WORLD_MAP.get() {
        return cached.as_ref();
    }

    let location = location.map(str::to_string).unwrap_or_else(default_location);
    let outcome = match platform::fetch_text(&location).await {
        Ok(document) => WorldMap::parse(&document),
        Err(err) => Err(GeometryError::from(err)),
    };

    let parsed = match outcome {
        Ok(map) => {
            tracing::info!(regions = map.regions.len(), "world map loaded");
            Some(map)
        }
        Err(err) => {
            tracing::warn!(%location, error = %err, "world map unavailable; using country list");
            None
        }
    };

    // A concurrent load may have won the race; either result is equivalent.
    let _ = WORLD_MAP.set(parsed);
    WORLD_MAP.get().and_then(Option::as_ref)
}
