//! Constellation containing a position near the ecliptic.
//!
//! The IAU boundaries cross the ecliptic at fixed J2000 longitudes, which is
//! enough for the Sun. The Moon and planets stray a few degrees off the
//! ecliptic and can dip into neighbouring constellations south of it; those
//! patches are checked first.

/// Ecliptic longitude (J2000) where each constellation begins, ascending.
/// Each band runs up to the next entry; the last wraps to the first.
const ECLIPTIC_BANDS: [(f64, &str); 13] = [
    (28.69, "Aries"),
    (53.42, "Taurus"),
    (90.14, "Gemini"),
    (118.26, "Cancer"),
    (138.18, "Leo"),
    (174.15, "Virgo"),
    (218.02, "Libra"),
    (241.01, "Scorpius"),
    (247.66, "Ophiuchus"),
    (266.26, "Sagittarius"),
    (299.71, "Capricornus"),
    (327.84, "Aquarius"),
    (351.57, "Pisces"),
];

/// A region south of the ecliptic owned by a non-zodiac constellation.
struct SouthernPatch {
    name: &'static str,
    lon_start: f64,
    lon_end: f64,
    /// Latitudes strictly below this fall inside the patch.
    lat_below: f64,
}

const SOUTHERN_PATCHES: [SouthernPatch; 3] = [
    SouthernPatch {
        name: "Cetus",
        lon_start: 10.0,
        lon_end: 28.69,
        lat_below: -3.0,
    },
    SouthernPatch {
        name: "Orion",
        lon_start: 85.0,
        lon_end: 90.14,
        lat_below: -2.5,
    },
    SouthernPatch {
        name: "Sextans",
        lon_start: 146.0,
        lon_end: 163.0,
        lat_below: -5.0,
    },
];

/// IAU name of the constellation at J2000 ecliptic `lon_deg`, `lat_deg`.
pub fn constellation_at(lon_deg: f64, lat_deg: f64) -> &'static str {
    let lon = lon_deg.rem_euclid(360.0);

    if let Some(patch) = SOUTHERN_PATCHES
        .iter()
        .find(|p| lon >= p.lon_start && lon < p.lon_end && lat_deg < p.lat_below)
    {
        return patch.name;
    }

    ECLIPTIC_BANDS
        .iter()
        .rev()
        .find(|(start, _)| lon >= *start)
        // Below Aries' first boundary we are still in Pisces
        .map_or("Pisces", |(_, name)| name)
}
