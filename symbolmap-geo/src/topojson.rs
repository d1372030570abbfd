//! TopoJSON decoding.
//!
//! A topology stores shared line segments ("arcs") once and references them
//! by index from its geometry objects. [`feature`] resolves a named object
//! into plain `geo_types` geometries that can be projected and drawn.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use geo_types::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use log::debug;
use serde::Deserialize;

use crate::error::SymbolMapGeoError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    #[serde(default)]
    pub bbox: Option<Vec<f64>>,
    pub objects: BTreeMap<String, TopoObject>,
    pub arcs: Vec<Vec<Vec<f64>>>,
}

/// A geometry object of a topology along with its optional id and properties
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopoObject {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(flatten)]
    pub geometry: TopoGeometry,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum TopoGeometry {
    GeometryCollection { geometries: Vec<TopoObject> },
    Point { coordinates: Vec<f64> },
    MultiPoint { coordinates: Vec<Vec<f64>> },
    LineString { arcs: Vec<i64> },
    MultiLineString { arcs: Vec<Vec<i64>> },
    Polygon { arcs: Vec<Vec<i64>> },
    MultiPolygon { arcs: Vec<Vec<Vec<i64>>> },
}

/// Identifier of a feature, as numbers and strings both appear in the wild
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureId {
    Number(f64),
    String(String),
}

impl Display for FeatureId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureId::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{n:.0}"),
            FeatureId::Number(n) => write!(f, "{n}"),
            FeatureId::String(s) => write!(f, "{s}"),
        }
    }
}

impl FeatureId {
    fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map(FeatureId::Number),
            serde_json::Value::String(s) => Some(FeatureId::String(s.clone())),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureId::Number(n) => Some(*n),
            FeatureId::String(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: Option<FeatureId>,
    pub properties: serde_json::Map<String, serde_json::Value>,
    pub geometry: Geometry<f64>,
}

/// Result of converting a topology object: geometry collections become
/// feature collections, everything else a single feature
#[derive(Debug, Clone, PartialEq)]
pub enum GeoObject {
    Feature(Feature),
    FeatureCollection(Vec<Feature>),
}

impl GeoObject {
    pub fn features(&self) -> &[Feature] {
        match self {
            GeoObject::Feature(feature) => std::slice::from_ref(feature),
            GeoObject::FeatureCollection(features) => features,
        }
    }

    /// All geometries merged into one, for drawing the object as a single path
    pub fn geometry(&self) -> Geometry<f64> {
        match self {
            GeoObject::Feature(feature) => feature.geometry.clone(),
            GeoObject::FeatureCollection(features) => Geometry::GeometryCollection(
                GeometryCollection::new_from(features.iter().map(|f| f.geometry.clone()).collect()),
            ),
        }
    }
}

impl Topology {
    pub fn from_json_str(s: &str) -> Result<Self, SymbolMapGeoError> {
        let topology: Topology = serde_json::from_str(s)?;
        topology.validate()?;
        debug!(
            "Parsed topology with {} arcs and objects {:?}",
            topology.arcs.len(),
            topology.objects.keys().collect::<Vec<_>>()
        );
        Ok(topology)
    }

    pub fn has_object(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    fn validate(&self) -> Result<(), SymbolMapGeoError> {
        for arc in &self.arcs {
            if arc.iter().any(|position| position.len() < 2) {
                return Err(SymbolMapGeoError::InvalidTopology(
                    "arc position with fewer than two coordinates".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Decodes every arc into absolute coordinates, undoing delta encoding
    /// and quantization when the topology has a transform
    fn decoded_arcs(&self) -> Vec<Vec<Coord<f64>>> {
        self.arcs
            .iter()
            .map(|arc| match &self.transform {
                Some(transform) => {
                    let (mut x, mut y) = (0.0, 0.0);
                    arc.iter()
                        .map(|position| {
                            x += position[0];
                            y += position[1];
                            Coord {
                                x: x * transform.scale[0] + transform.translate[0],
                                y: y * transform.scale[1] + transform.translate[1],
                            }
                        })
                        .collect()
                }
                None => arc
                    .iter()
                    .map(|position| Coord {
                        x: position[0],
                        y: position[1],
                    })
                    .collect(),
            })
            .collect()
    }

    fn point(&self, position: &[f64]) -> Result<Coord<f64>, SymbolMapGeoError> {
        if position.len() < 2 {
            return Err(SymbolMapGeoError::InvalidTopology(
                "point with fewer than two coordinates".to_string(),
            ));
        }
        Ok(match &self.transform {
            Some(t) => Coord {
                x: position[0] * t.scale[0] + t.translate[0],
                y: position[1] * t.scale[1] + t.translate[1],
            },
            None => Coord {
                x: position[0],
                y: position[1],
            },
        })
    }
}

/// Converts the named object of a topology into features
pub fn feature(topology: &Topology, name: &str) -> Result<GeoObject, SymbolMapGeoError> {
    let object = topology
        .objects
        .get(name)
        .ok_or_else(|| SymbolMapGeoError::MissingObject(name.to_string()))?;

    let decoder = ArcDecoder {
        topology,
        arcs: topology.decoded_arcs(),
    };

    match &object.geometry {
        TopoGeometry::GeometryCollection { geometries } => Ok(GeoObject::FeatureCollection(
            geometries
                .iter()
                .map(|g| decoder.feature(g))
                .collect::<Result<Vec<_>, _>>()?,
        )),
        _ => Ok(GeoObject::Feature(decoder.feature(object)?)),
    }
}

struct ArcDecoder<'a> {
    topology: &'a Topology,
    arcs: Vec<Vec<Coord<f64>>>,
}

impl ArcDecoder<'_> {
    fn feature(&self, object: &TopoObject) -> Result<Feature, SymbolMapGeoError> {
        Ok(Feature {
            id: object.id.as_ref().and_then(FeatureId::from_json),
            properties: object.properties.clone().unwrap_or_default(),
            geometry: self.geometry(&object.geometry)?,
        })
    }

    fn geometry(&self, geometry: &TopoGeometry) -> Result<Geometry<f64>, SymbolMapGeoError> {
        Ok(match geometry {
            TopoGeometry::GeometryCollection { geometries } => {
                Geometry::GeometryCollection(GeometryCollection::new_from(
                    geometries
                        .iter()
                        .map(|g| self.geometry(&g.geometry))
                        .collect::<Result<Vec<_>, _>>()?,
                ))
            }
            TopoGeometry::Point { coordinates } => {
                Geometry::Point(Point::from(self.topology.point(coordinates)?))
            }
            TopoGeometry::MultiPoint { coordinates } => Geometry::MultiPoint(MultiPoint::new(
                coordinates
                    .iter()
                    .map(|c| self.topology.point(c).map(Point::from))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            TopoGeometry::LineString { arcs } => Geometry::LineString(self.line(arcs)?),
            TopoGeometry::MultiLineString { arcs } => Geometry::MultiLineString(
                MultiLineString::new(arcs.iter().map(|a| self.line(a)).collect::<Result<_, _>>()?),
            ),
            TopoGeometry::Polygon { arcs } => Geometry::Polygon(self.polygon(arcs)?),
            TopoGeometry::MultiPolygon { arcs } => Geometry::MultiPolygon(MultiPolygon::new(
                arcs.iter().map(|p| self.polygon(p)).collect::<Result<_, _>>()?,
            )),
        })
    }

    /// Concatenates arcs into one line, dropping the shared point where two
    /// consecutive arcs meet
    fn line(&self, indices: &[i64]) -> Result<LineString<f64>, SymbolMapGeoError> {
        let mut coords: Vec<Coord<f64>> = Vec::new();
        for &index in indices {
            let (arc, reversed) = if index < 0 {
                (self.arcs.get((!index) as usize), true)
            } else {
                (self.arcs.get(index as usize), false)
            };
            let arc = arc.ok_or(SymbolMapGeoError::InvalidArcIndex(index))?;

            if !coords.is_empty() {
                coords.pop();
            }
            if reversed {
                coords.extend(arc.iter().rev().copied());
            } else {
                coords.extend(arc.iter().copied());
            }
        }

        // A single-point line would not render; duplicate so it stays valid
        if coords.len() == 1 {
            coords.push(coords[0]);
        }
        Ok(LineString::new(coords))
    }

    fn polygon(&self, rings: &[Vec<i64>]) -> Result<Polygon<f64>, SymbolMapGeoError> {
        let mut rings = rings
            .iter()
            .map(|r| self.line(r))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();
        let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
        Ok(Polygon::new(exterior, rings.collect()))
    }
}
