use std::path::PathBuf;

use symbolmap_geo::topojson::feature;
use symbolmap_geo::{AlbersUsa, GeoPath, Mercator, Projection, Topology};

fn sample_topology() -> Topology {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample_topology.json");
    let content = std::fs::read_to_string(path).unwrap();
    Topology::from_json_str(&content).unwrap()
}

#[test]
fn test_land_renders_single_closed_path() {
    let topology = sample_topology();
    let land = feature(&topology, "land").unwrap();
    assert_eq!(land.features().len(), 1);

    let projection = Mercator::for_canvas(960.0, 800.0);
    let d = GeoPath::new(&projection).path_data(&land.geometry());
    assert!(d.starts_with('M'));
    assert_eq!(d.matches('M').count(), 1);
    assert!(d.ends_with('Z'));
}

#[test]
fn test_albers_usa_clips_southern_edge() {
    let topology = sample_topology();
    let land = feature(&topology, "land").unwrap();

    // The southern edge at 25N leaves the lower 48 extent, which breaks the ring
    let projection = AlbersUsa::new();
    let d = GeoPath::new(&projection).path_data(&land.geometry());
    assert!(d.matches('M').count() > 1, "expected a broken ring: {d}");
    assert!(!d.ends_with('Z'));
}

#[test]
fn test_states_share_boundary_arc() {
    let topology = sample_topology();
    let states = feature(&topology, "states").unwrap();
    let ids: Vec<String> = states
        .features()
        .iter()
        .map(|f| f.id.as_ref().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["6", "39"]);

    let projection = Mercator::for_canvas(960.0, 800.0);
    let path = GeoPath::new(&projection);
    let west = path.bounds(&states.features()[0].geometry).unwrap();
    let east = path.bounds(&states.features()[1].geometry).unwrap();

    // Arc 3 is the shared border, so the two boxes touch exactly
    let border = projection.project([-95.0, 25.0]).unwrap()[0];
    assert!((west.max().x - border).abs() < 1e-9);
    assert!((east.min().x - border).abs() < 1e-9);
}
