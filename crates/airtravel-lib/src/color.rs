//! Edge color blending for highlighted routes.
//!
//! Each highlighted route takes a palette color in input order, cycling when
//! there are more routes than colors. An edge shared by several routes shows
//! the channel-wise floor average of their colors. Renderers apply
//! [`DEFAULT_EDGE_COLOR`] to edges without an entry.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::network::AirportCode;
use crate::path::Route;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse `#RRGGBB` (the leading `#` is optional).
    fn from_str(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor {
            value: value.to_string(),
        };
        let hex = value.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Palette cycled across highlighted routes when none is configured.
pub const DEFAULT_PALETTE: [Rgb; 4] = [
    Rgb::new(0xFF, 0x57, 0x33),
    Rgb::new(0x33, 0xFF, 0x57),
    Rgb::new(0x33, 0x57, 0xFF),
    Rgb::new(0xFF, 0x33, 0xA1),
];

/// Color for edges that no highlighted route touches.
pub const DEFAULT_EDGE_COLOR: Rgb = Rgb::new(0x55, 0x55, 0x55);

/// Replacement for a blend that averages to pure black.
pub const FALLBACK_GRAY: Rgb = Rgb::new(0x88, 0x88, 0x88);

/// Parse a palette from a list of `#RRGGBB` strings.
pub fn parse_palette<S: AsRef<str>>(entries: &[S]) -> Result<Vec<Rgb>> {
    entries.iter().map(|entry| entry.as_ref().parse()).collect()
}

/// Directed edge between two airports.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DirectedEdge {
    pub from: AirportCode,
    pub to: AirportCode,
}

impl DirectedEdge {
    pub fn new(from: impl Into<AirportCode>, to: impl Into<AirportCode>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Blended colors for every highlighted edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeColors {
    colors: BTreeMap<DirectedEdge, Rgb>,
}

impl EdgeColors {
    pub fn get(&self, from: &str, to: &str) -> Option<Rgb> {
        self.colors.get(&DirectedEdge::new(from, to)).copied()
    }

    /// Blended color, or [`DEFAULT_EDGE_COLOR`] when the edge is not highlighted.
    pub fn color_for(&self, from: &str, to: &str) -> Rgb {
        self.get(from, to).unwrap_or(DEFAULT_EDGE_COLOR)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DirectedEdge, &Rgb)> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[derive(Serialize)]
struct EdgeColorEntry<'a> {
    from: &'a str,
    to: &'a str,
    color: Rgb,
}

impl Serialize for EdgeColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.colors.iter().map(|(edge, color)| EdgeColorEntry {
            from: &edge.from,
            to: &edge.to,
            color: *color,
        }))
    }
}

/// Blend palette colors over the edges of the highlighted routes.
///
/// Route `i` uses `palette[i % palette.len()]`. A route contributes its color
/// to an edge once, however often it crosses that edge.
pub fn mix_colors(paths: &[Route], palette: &[Rgb]) -> Result<EdgeColors> {
    if paths.is_empty() {
        return Ok(EdgeColors::default());
    }
    if palette.is_empty() {
        return Err(Error::invalid_parameter(
            "palette must contain at least one color",
        ));
    }

    let mut contributions: BTreeMap<DirectedEdge, Vec<Rgb>> = BTreeMap::new();
    for (index, path) in paths.iter().enumerate() {
        let color = palette[index % palette.len()];
        let edges: BTreeSet<(&str, &str)> = path.edges().collect();
        for (from, to) in edges {
            contributions
                .entry(DirectedEdge::new(from, to))
                .or_default()
                .push(color);
        }
    }

    let colors = contributions
        .into_iter()
        .map(|(edge, shades)| (edge, blend(&shades)))
        .collect();
    Ok(EdgeColors { colors })
}

/// Color for each airport on a highlighted route; later routes win.
pub fn node_colors(paths: &[Route], palette: &[Rgb]) -> Result<BTreeMap<AirportCode, Rgb>> {
    let mut colors = BTreeMap::new();
    if paths.is_empty() {
        return Ok(colors);
    }
    if palette.is_empty() {
        return Err(Error::invalid_parameter(
            "palette must contain at least one color",
        ));
    }

    for (index, path) in paths.iter().enumerate() {
        let color = palette[index % palette.len()];
        for airport in &path.airports {
            colors.insert(airport.clone(), color);
        }
    }
    Ok(colors)
}

fn blend(shades: &[Rgb]) -> Rgb {
    let count = shades.len().max(1) as u32;
    let (r, g, b) = shades.iter().fold((0u32, 0u32, 0u32), |(r, g, b), c| {
        (r + u32::from(c.r), g + u32::from(c.g), b + u32::from(c.b))
    });
    // Averages of u8 channels always fit back into u8.
    let mixed = Rgb::new((r / count) as u8, (g / count) as u8, (b / count) as u8);
    if mixed == Rgb::BLACK {
        FALLBACK_GRAY
    } else {
        mixed
    }
}
