use geo::BoundingRect;
use geo_types::{Coord, Geometry, LineString, MultiPoint, Point, Polygon, Rect};

use crate::projection::Projection;

/// Recursion limit of adaptive resampling
const MAX_RESAMPLE_DEPTH: u32 = 16;

/// Generates SVG path data for geographic geometries through a projection.
///
/// Lines are resampled adaptively: a segment is split at its geographic
/// midpoint whenever the projected midpoint strays further than the
/// projection's precision from the straight chord. Points the projection
/// cannot place break the line into separate sub-paths.
#[derive(Debug, Clone, Copy)]
pub struct GeoPath<'a> {
    projection: &'a dyn Projection,
    point_radius: f64,
}

impl<'a> GeoPath<'a> {
    pub fn new(projection: &'a dyn Projection) -> Self {
        Self {
            projection,
            point_radius: 4.5,
        }
    }

    /// Radius of the circles drawn for point geometries
    pub fn point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    pub fn projection(&self) -> &'a dyn Projection {
        self.projection
    }

    /// Projects a single `[longitude, latitude]` position
    pub fn project(&self, lon_lat: [f64; 2]) -> Option<[f64; 2]> {
        self.projection.project(lon_lat)
    }

    /// Returns the SVG path data (`d` attribute) for a geometry
    pub fn path_data(&self, geometry: &Geometry<f64>) -> String {
        let mut out = String::new();
        self.write_geometry(&mut out, geometry);
        out
    }

    /// Projected bounding box of a geometry, ignoring unprojectable points
    pub fn bounds(&self, geometry: &Geometry<f64>) -> Option<Rect<f64>> {
        let mut points = Vec::new();
        collect_coords(geometry, &mut |c| {
            if let Some([x, y]) = self.projection.project([c.x, c.y]) {
                points.push(Point::new(x, y));
            }
        });
        MultiPoint::new(points).bounding_rect()
    }

    fn write_geometry(&self, out: &mut String, geometry: &Geometry<f64>) {
        match geometry {
            Geometry::Point(p) => self.write_point(out, p.0),
            Geometry::MultiPoint(mp) => mp.iter().for_each(|p| self.write_point(out, p.0)),
            Geometry::Line(line) => {
                self.write_line(out, &LineString::new(vec![line.start, line.end]), false)
            }
            Geometry::LineString(ls) => self.write_line(out, ls, false),
            Geometry::MultiLineString(mls) => {
                mls.iter().for_each(|ls| self.write_line(out, ls, false))
            }
            Geometry::Polygon(polygon) => self.write_polygon(out, polygon),
            Geometry::MultiPolygon(mp) => mp.iter().for_each(|p| self.write_polygon(out, p)),
            Geometry::Rect(rect) => self.write_polygon(out, &rect.to_polygon()),
            Geometry::Triangle(triangle) => self.write_polygon(out, &triangle.to_polygon()),
            Geometry::GeometryCollection(gc) => {
                gc.iter().for_each(|g| self.write_geometry(out, g))
            }
        }
    }

    fn write_point(&self, out: &mut String, coord: Coord<f64>) {
        let Some([x, y]) = self.projection.project([coord.x, coord.y]) else {
            return;
        };
        let r = self.point_radius;
        out.push_str(&format!(
            "M{},{}m0,{}a{},{} 0 1,1 0,{}a{},{} 0 1,1 0,{}z",
            fmt_num(x),
            fmt_num(y),
            fmt_num(r),
            fmt_num(r),
            fmt_num(r),
            fmt_num(-2.0 * r),
            fmt_num(r),
            fmt_num(r),
            fmt_num(2.0 * r),
        ));
    }

    fn write_polygon(&self, out: &mut String, polygon: &Polygon<f64>) {
        self.write_line(out, polygon.exterior(), true);
        for interior in polygon.interiors() {
            self.write_line(out, interior, true);
        }
    }

    fn write_line(&self, out: &mut String, line: &LineString<f64>, ring: bool) {
        let mut previous: Option<(Coord<f64>, [f64; 2])> = None;
        let mut segment_start = true;
        let mut broken = false;
        let mut vertices = 0usize;

        for coord in line.coords() {
            let Some(projected) = self.projection.project([coord.x, coord.y]) else {
                previous = None;
                segment_start = true;
                broken = true;
                continue;
            };

            if let Some((prev_coord, prev_projected)) = previous {
                let mut points = Vec::new();
                self.resample(
                    prev_coord,
                    prev_projected,
                    *coord,
                    projected,
                    MAX_RESAMPLE_DEPTH,
                    &mut points,
                );
                for [x, y] in points {
                    out.push_str(&format!("L{},{}", fmt_num(x), fmt_num(y)));
                }
            }

            let command = if segment_start { 'M' } else { 'L' };
            out.push_str(&format!(
                "{}{},{}",
                command,
                fmt_num(projected[0]),
                fmt_num(projected[1])
            ));
            segment_start = false;
            vertices += 1;
            previous = Some((*coord, projected));
        }

        if ring && !broken && vertices > 1 {
            out.push('Z');
        }
    }

    /// Pushes the intermediate points needed between `a` and `b` (exclusive)
    fn resample(
        &self,
        a: Coord<f64>,
        a_xy: [f64; 2],
        b: Coord<f64>,
        b_xy: [f64; 2],
        depth: u32,
        out: &mut Vec<[f64; 2]>,
    ) {
        let precision = self.projection.precision();
        if depth == 0 || precision <= 0.0 {
            return;
        }

        let mid = Coord {
            x: (a.x + b.x) / 2.0,
            y: (a.y + b.y) / 2.0,
        };
        let Some(mid_xy) = self.projection.project([mid.x, mid.y]) else {
            return;
        };

        if distance_to_chord(mid_xy, a_xy, b_xy) > precision {
            self.resample(a, a_xy, mid, mid_xy, depth - 1, out);
            out.push(mid_xy);
            self.resample(mid, mid_xy, b, b_xy, depth - 1, out);
        }
    }
}

/// Distance from `p` to the line segment `a`-`b`
fn distance_to_chord(p: [f64; 2], a: [f64; 2], b: [f64; 2]) -> f64 {
    let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return ((p[0] - a[0]).powi(2) + (p[1] - a[1]).powi(2)).sqrt();
    }
    let t = (((p[0] - a[0]) * dx + (p[1] - a[1]) * dy) / len2).clamp(0.0, 1.0);
    let (cx, cy) = (a[0] + t * dx, a[1] + t * dy);
    ((p[0] - cx).powi(2) + (p[1] - cy).powi(2)).sqrt()
}

fn collect_coords(geometry: &Geometry<f64>, f: &mut impl FnMut(Coord<f64>)) {
    match geometry {
        Geometry::Point(p) => f(p.0),
        Geometry::MultiPoint(mp) => mp.iter().for_each(|p| f(p.0)),
        Geometry::Line(line) => {
            f(line.start);
            f(line.end);
        }
        Geometry::LineString(ls) => ls.coords().for_each(|c| f(*c)),
        Geometry::MultiLineString(mls) => mls.iter().flat_map(|ls| ls.coords()).for_each(|c| f(*c)),
        Geometry::Polygon(p) => p.exterior().coords().for_each(|c| f(*c)),
        Geometry::MultiPolygon(mp) => mp
            .iter()
            .flat_map(|p| p.exterior().coords())
            .for_each(|c| f(*c)),
        Geometry::Rect(rect) => rect.to_polygon().exterior().coords().for_each(|c| f(*c)),
        Geometry::Triangle(t) => t.to_array().into_iter().for_each(|c| f(c)),
        Geometry::GeometryCollection(gc) => gc.iter().for_each(|g| collect_coords(g, f)),
    }
}

/// Formats a coordinate with at most three decimals and no trailing zeros
pub fn fmt_num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
