use geo::{BoundingRect, Distance, Euclidean};
use geo_types::{Geometry, Point};
use rstar::{iterators::LocateAllAtPoint, Envelope, PointDistance, RTree, RTreeObject, AABB};
use symbolmap_scenegraph::marks::mark::{MarkInstance, SceneMark};
use symbolmap_scenegraph::SceneGraph;

/// A geometry with the mark it was drawn from, for storage in the R-tree
#[derive(Debug, Clone)]
pub struct GeometryInstance {
    pub mark_instance: MarkInstance,
    /// Drawing order; larger values are drawn on top
    pub z_index: usize,
    pub geometry: Geometry<f64>,
    pub half_stroke_width: f64,
}

impl RTreeObject for GeometryInstance {
    type Envelope = AABB<[f64; 2]>;

    /// Returns the envelope of the geometry, including the stroke width
    fn envelope(&self) -> Self::Envelope {
        let Some(bbox) = self.geometry.bounding_rect() else {
            return AABB::new_empty();
        };
        AABB::from_corners(
            [
                bbox.min().x - self.half_stroke_width,
                bbox.min().y - self.half_stroke_width,
            ],
            [
                bbox.max().x + self.half_stroke_width,
                bbox.max().y + self.half_stroke_width,
            ],
        )
    }
}

impl PointDistance for GeometryInstance {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        // Distance to the geometry, less the stroke half-width
        let point = Point::new(point[0], point[1]);
        let distance = (Euclidean::distance(&self.geometry, &point) - self.half_stroke_width).max(0.0);
        distance * distance
    }

    fn contains_point(&self, point: &[f64; 2]) -> bool {
        let point = Point::new(point[0], point[1]);
        Euclidean::distance(&self.geometry, &point) <= self.half_stroke_width
    }
}

#[derive(Debug, Clone)]
pub struct MarkRTree {
    rtree: RTree<GeometryInstance>,
}

impl MarkRTree {
    pub fn new(geometries: Vec<GeometryInstance>) -> Self {
        // Bulk load the geometries into an R-tree
        let rtree = RTree::bulk_load(geometries);
        Self { rtree }
    }

    /// Returns the number of objects in the r-tree
    pub fn size(&self) -> usize {
        self.rtree.size()
    }

    /// Returns all elements that contain the given point
    pub fn locate_all_at_point(&self, point: &[f64; 2]) -> LocateAllAtPoint<GeometryInstance> {
        self.rtree.locate_all_at_point(point)
    }
}

/// Hit-testing index over the circles of a scene graph
#[derive(Debug, Clone)]
pub struct SceneGraphRTree {
    rtree: MarkRTree,
}

impl SceneGraphRTree {
    pub fn from_scene_graph(scene_graph: &SceneGraph) -> Self {
        let geometries = scene_graph
            .leaf_marks()
            .into_iter()
            .enumerate()
            .filter_map(|(z_index, (mark_instance, mark))| {
                let SceneMark::Circle(circle) = mark else {
                    return None;
                };
                Some(GeometryInstance {
                    mark_instance,
                    z_index,
                    geometry: Point::new(circle.cx, circle.cy).into(),
                    half_stroke_width: circle.r,
                })
            })
            .collect();

        Self {
            rtree: MarkRTree::new(geometries),
        }
    }

    pub fn rtree(&self) -> &MarkRTree {
        &self.rtree
    }

    /// Returns the top-most mark that contains the point, if any
    pub fn pick_top_mark_at_point(&self, point: &[f64; 2]) -> Option<&MarkInstance> {
        self.rtree
            .locate_all_at_point(point)
            .max_by_key(|g| g.z_index)
            .map(|g| &g.mark_instance)
    }
}
