use serde::Serialize;
use std::f64::consts::TAU;
use std::fmt;

use crate::domain::physics::BlastRings;

// Local flat-Earth projection of metric circles into geographic rings.
// Accurate at neighborhood scale; distortion grows at high latitude or very
// large radius, which is acceptable for kilometer-scale rings over the
// continental US.

/// Meters per degree of latitude in the local equirectangular approximation.
const METERS_PER_DEG_LAT: f64 = 111_320.0;
/// Floor for the longitude scale so polar latitudes cannot divide by zero.
const MIN_METERS_PER_DEG_LON: f64 = 1e-9;

#[derive(Debug)]
pub enum GeoError {
    NonPositiveRadius,
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::NonPositiveRadius => write!(f, "circle radius must be > 0 m"),
        }
    }
}

impl std::error::Error for GeoError {}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureProperties {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_m: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

// Convert a metric east/north offset into local degree offsets around the
// given latitude.
fn meters_to_deg_local(lat_deg: f64, dx_m: f64, dy_m: f64) -> (f64, f64) {
    let meters_per_deg_lon =
        (METERS_PER_DEG_LAT * lat_deg.to_radians().cos()).max(MIN_METERS_PER_DEG_LON);
    (dy_m / METERS_PER_DEG_LAT, dx_m / meters_per_deg_lon)
}

/// Closed ring approximating a metric circle around (lat, lon). The ring has
/// `steps + 1` coordinate pairs; the last one repeats the first exactly.
pub fn circle_polygon(
    lat: f64,
    lon: f64,
    radius_m: f64,
    steps: usize,
) -> Result<Geometry, GeoError> {
    if radius_m <= 0.0 {
        return Err(GeoError::NonPositiveRadius);
    }

    let mut ring = Vec::with_capacity(steps + 1);
    for step in 0..steps {
        let theta = TAU * (step as f64) / (steps as f64);
        let dx_m = radius_m * theta.cos();
        let dy_m = radius_m * theta.sin();
        let (dlat, dlon) = meters_to_deg_local(lat, dx_m, dy_m);
        ring.push([lon + dlon, lat + dlat]);
    }
    let first = ring[0];
    ring.push(first);

    Ok(Geometry::Polygon {
        coordinates: vec![ring],
    })
}

/// Impact footprint as a GeoJSON feature collection: the impact point, the
/// crater polygon when its radius is positive, and every positive
/// overpressure ring.
pub fn feature_collection(
    lat: f64,
    lon: f64,
    crater_radius_m: f64,
    rings: &BlastRings,
    steps: usize,
) -> FeatureCollection {
    let mut features = vec![Feature {
        properties: FeatureProperties {
            kind: "impact_point",
            label: None,
            radius_m: None,
        },
        geometry: Geometry::Point {
            coordinates: [lon, lat],
        },
    }];

    if crater_radius_m > 0.0 {
        if let Ok(geometry) = circle_polygon(lat, lon, crater_radius_m, steps) {
            features.push(Feature {
                properties: FeatureProperties {
                    kind: "crater",
                    label: None,
                    radius_m: Some(crater_radius_m),
                },
                geometry,
            });
        }
    }

    for (label, radius_m) in rings.labeled() {
        if radius_m > 0.0 {
            if let Ok(geometry) = circle_polygon(lat, lon, radius_m, steps) {
                features.push(Feature {
                    properties: FeatureProperties {
                        kind: "overpressure",
                        label: Some(label),
                        radius_m: Some(radius_m),
                    },
                    geometry,
                });
            }
        }
    }

    FeatureCollection { features }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_of(geometry: &Geometry) -> &Vec<[f64; 2]> {
        match geometry {
            Geometry::Polygon { coordinates } => &coordinates[0],
            Geometry::Point { .. } => panic!("expected a polygon"),
        }
    }

    #[test]
    fn circle_polygon_returns_a_closed_ring_of_steps_plus_one_pairs() {
        let geometry =
            circle_polygon(40.0, -100.0, 1000.0, 128).expect("expected polygon to build");
        let ring = ring_of(&geometry);

        assert_eq!(ring.len(), 129);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn circle_polygon_rejects_non_positive_radii() {
        assert!(matches!(
            circle_polygon(40.0, -100.0, 0.0, 128),
            Err(GeoError::NonPositiveRadius)
        ));
        assert!(matches!(
            circle_polygon(40.0, -100.0, -5.0, 128),
            Err(GeoError::NonPositiveRadius)
        ));
    }

    #[test]
    fn circle_polygon_centers_on_the_requested_point() {
        let geometry = circle_polygon(36.1, -112.1, 500.0, 64).expect("expected polygon to build");
        let ring = ring_of(&geometry);

        let mean_lon = ring[..64].iter().map(|pair| pair[0]).sum::<f64>() / 64.0;
        let mean_lat = ring[..64].iter().map(|pair| pair[1]).sum::<f64>() / 64.0;
        assert!((mean_lon - -112.1).abs() < 1e-6);
        assert!((mean_lat - 36.1).abs() < 1e-6);
    }

    #[test]
    fn longitude_span_grows_with_latitude() {
        let span = |lat: f64| {
            let geometry = circle_polygon(lat, 0.0, 10_000.0, 64).expect("expected polygon");
            let ring = ring_of(&geometry);
            let max = ring.iter().map(|pair| pair[0]).fold(f64::MIN, f64::max);
            let min = ring.iter().map(|pair| pair[0]).fold(f64::MAX, f64::min);
            max - min
        };

        assert!(span(70.0) > span(0.0));
    }

    #[test]
    fn geometry_serializes_as_geojson() {
        let point = Geometry::Point {
            coordinates: [-112.1, 36.1],
        };
        let value = serde_json::to_value(&point).expect("expected point to serialize");
        assert_eq!(
            value,
            serde_json::json!({"type": "Point", "coordinates": [-112.1, 36.1]})
        );
    }

    #[test]
    fn feature_collection_holds_point_crater_and_four_rings() {
        let rings = BlastRings {
            psi10: 1000.0,
            psi5: 1800.0,
            psi3: 2700.0,
            psi1: 4700.0,
        };
        let collection = feature_collection(36.1, -112.1, 300.0, &rings, 128);

        assert_eq!(collection.features.len(), 6);
        assert_eq!(collection.features[0].properties.kind, "impact_point");
        assert_eq!(collection.features[1].properties.kind, "crater");
        let labels: Vec<_> = collection.features[2..]
            .iter()
            .map(|feature| feature.properties.label)
            .collect();
        assert_eq!(
            labels,
            vec![Some("10psi"), Some("5psi"), Some("3psi"), Some("1psi")]
        );
    }

    #[test]
    fn feature_collection_skips_zero_radius_features() {
        let rings = BlastRings {
            psi10: 0.0,
            psi5: 1800.0,
            psi3: 2700.0,
            psi1: 4700.0,
        };
        let collection = feature_collection(36.1, -112.1, 0.0, &rings, 128);

        // Point plus the three positive rings; crater and 10psi are dropped.
        assert_eq!(collection.features.len(), 4);
        assert!(
            collection
                .features
                .iter()
                .all(|feature| feature.properties.kind != "crater")
        );
    }

    #[test]
    fn impact_point_uses_lon_lat_order() {
        let rings = BlastRings {
            psi10: 0.0,
            psi5: 0.0,
            psi3: 0.0,
            psi1: 0.0,
        };
        let collection = feature_collection(36.1, -112.1, 0.0, &rings, 128);

        match &collection.features[0].geometry {
            Geometry::Point { coordinates } => assert_eq!(*coordinates, [-112.1, 36.1]),
            Geometry::Polygon { .. } => panic!("expected a point"),
        }
    }
}
