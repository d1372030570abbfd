use std::path::PathBuf;

use float_cmp::assert_approx_eq;
use rstest::rstest;
use symbolmap_chart::{
    parse_state_name, Document, StateId, StateRow, SymbolMap, SymbolMapChartError, ValueRecord,
    DEFAULT_LOG_TEXT,
};
use symbolmap_eventstream::WindowEvent;
use symbolmap_geo::error::SymbolMapGeoError;
use symbolmap_geo::{AlbersUsa, Mercator, Projection, Topology};
use symbolmap_scales::{ContinuousNumericScale, PowNumericScale};
use symbolmap_scenegraph::marks::mark::SceneMark;
use symbolmap_scenegraph::ClassSet;

fn sample_topology() -> Topology {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample_topology.json");
    Topology::from_json_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn two_values() -> Vec<ValueRecord> {
    vec![
        ValueRecord::new(0.0, 0.0).with_field("value", 1),
        ValueRecord::new(10.0, 20.0).with_field("value", 5),
    ]
}

fn document() -> Document {
    let document = Document::new();
    document.add_svg("map", 960.0, 800.0);
    document
}

fn state_records() -> Vec<symbolmap_chart::StateRecord> {
    [("6", "California", "ca"), ("39", "Ohio", "oh")]
        .into_iter()
        .map(|(id, name, code)| {
            parse_state_name(&StateRow {
                id: id.to_string(),
                name: name.to_string(),
                code: code.to_string(),
            })
        })
        .collect()
}

/// Marks of the top level group with the given id
fn group_marks(document: &Document, group: &str) -> Vec<SceneMark> {
    document
        .with_svg("map", |scene| {
            scene
                .groups()
                .into_iter()
                .find(|g| g.id == group)
                .map(|g| g.marks.clone())
                .unwrap_or_default()
        })
        .unwrap()
}

fn circles(document: &Document) -> Vec<(f64, f64, f64, ClassSet)> {
    group_marks(document, "dots")
        .into_iter()
        .filter_map(|m| match m {
            SceneMark::Circle(c) => Some((c.cx, c.cy, c.r, c.classes)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_getters_return_set_values() {
    let document = document();
    let radius = PowNumericScale::sqrt().with_range((2.0, 20.0));
    let topology = sample_topology();

    let chart = SymbolMap::new(&document)
        .projection(AlbersUsa::new())
        .radius(radius.clone())
        .map(topology.clone())
        .values(two_values())
        .value(|d| d.number("value") * 2.0)
        .states(true)
        .state(|d| d.field("st").map(str::to_string))
        .describe(|d| d.field("city").map(str::to_string))
        .lookup(state_records());

    assert_eq!(
        chart.get_projection().project([-98.0, 38.5]),
        AlbersUsa::new().project([-98.0, 38.5])
    );
    assert_eq!(chart.get_radius(), &radius);
    assert_eq!(chart.get_map(), Some(&topology));
    assert_eq!(chart.get_values(), Some(two_values().as_slice()));
    assert_eq!((chart.get_value())(&two_values()[1]), 10.0);
    assert!(chart.get_states());

    let record = ValueRecord::new(0.0, 0.0)
        .with_field("st", "OH")
        .with_field("city", "Dayton");
    assert_eq!((chart.get_state())(&record), Some("OH".to_string()));
    assert_eq!(
        chart.get_describe().map(|describe| describe(&record)),
        Some(Some("Dayton".to_string()))
    );
    assert_eq!(chart.get_lookup().name_for_code("OH"), Some("Ohio"));
}

#[test]
fn test_defaults() {
    let document = document();
    let chart = SymbolMap::new(&document);
    assert!(chart.get_map().is_none());
    assert!(chart.get_values().is_none());
    assert!(chart.get_lookup().is_empty());
    assert!(!chart.get_states());
    assert!(chart.get_describe().is_none());
    assert_eq!(chart.get_radius().range(), (5.0, 15.0));
    assert_approx_eq!(f64, chart.get_radius().get_exponent(), 0.5);

    let default_value = ValueRecord::new(0.0, 0.0).with_field("value", "3.5");
    assert_eq!((chart.get_value())(&default_value), 3.5);

    // The default projection is the fixed world Mercator of a 960x800 canvas
    let [x, y] = chart.get_projection().project([0.0, 0.0]).unwrap();
    let expected = Mercator::for_canvas(960.0, 800.0).project([0.0, 0.0]).unwrap();
    assert_approx_eq!(f64, x, expected[0]);
    assert_approx_eq!(f64, y, expected[1]);
    assert_approx_eq!(f64, x, 480.0);
    assert_approx_eq!(f64, y, 400.0);
}

#[test]
fn test_setters_update_status_log() {
    let document = document();
    let chart = SymbolMap::new(&document).map(sample_topology());
    assert_eq!(document.log(), "Map data loaded.");

    let _chart = chart.values(two_values());
    assert_eq!(document.log(), "Symbol data loaded.");
}

#[test]
fn test_lookup_is_additive() {
    let document = document();
    let records = state_records();
    let chart = SymbolMap::new(&document)
        .lookup(records.clone())
        .lookup(vec![records[1].clone()]);

    let lookup = chart.get_lookup();
    assert_eq!(lookup.name(StateId::new(6.0)), Some("California"));
    assert_eq!(lookup.id("CA"), Some(StateId::new(6.0)));
    assert_eq!(lookup.name_for_code("OH"), Some("Ohio"));
    assert_eq!(lookup.len(), 2);
}

#[test]
fn test_draw_without_map_is_noop() {
    let document = document();
    let chart = SymbolMap::new(&document).values(two_values());
    chart.draw("map").unwrap();

    assert!(document.with_svg("map", |scene| scene.marks.is_empty()).unwrap());
    assert_eq!(document.log(), "Symbol data loaded.");
}

#[test]
fn test_draw_without_values_is_noop() {
    let document = document();
    let chart = SymbolMap::new(&document).map(sample_topology());
    chart.draw("map").unwrap();
    assert!(document.with_svg("map", |scene| scene.marks.is_empty()).unwrap());
}

#[test]
fn test_draw_two_values() {
    let document = document();
    let chart = SymbolMap::new(&document)
        .map(sample_topology())
        .values(two_values());
    chart.draw("map").unwrap();

    let group_ids: Vec<_> = document
        .with_svg("map", |scene| scene.groups().iter().map(|g| g.id.clone()).collect())
        .unwrap();
    assert_eq!(group_ids, vec!["country", "dots"]);

    let country = group_marks(&document, "country");
    assert_eq!(country.len(), 1);
    assert!(country[0].classes().unwrap().contains("country"));

    let circles = circles(&document);
    assert_eq!(circles.len(), 2);
    let (cx, cy, r0, classes) = &circles[0];
    assert_approx_eq!(f64, *cx, 480.0);
    assert_approx_eq!(f64, *cy, 400.0);
    assert_eq!(classes, &ClassSet::from_iter(["symbol"]));

    let r1 = circles[1].2;
    assert!(*r0 >= 0.0 && r1 >= 0.0);
    assert!(r1 >= *r0);
    assert_eq!(document.log(), "Drawing map... please wait.");
}

#[test]
fn test_recalibrate_fits_radius_range() {
    let document = document();
    let mut chart = SymbolMap::new(&document)
        .map(sample_topology())
        .values(two_values());
    chart.recalibrate();
    assert_eq!(chart.get_radius().domain(), (1.0, 5.0));

    chart.draw("map").unwrap();
    let radii: Vec<f64> = circles(&document).iter().map(|c| c.2).collect();
    assert_approx_eq!(f64, radii[0], 5.0);
    assert_approx_eq!(f64, radii[1], 15.0);
}

#[test]
fn test_draw_does_not_touch_radius_domain() {
    let document = document();
    let chart = SymbolMap::new(&document)
        .map(sample_topology())
        .values(two_values());
    chart.draw("map").unwrap();
    assert_eq!(chart.get_radius().domain(), (0.0, 1.0));
}

#[test]
fn test_redraw_is_idempotent() {
    let document = document();
    let chart = SymbolMap::new(&document)
        .map(sample_topology())
        .values(two_values());
    chart.draw("map").unwrap();
    let first = document.to_svg_string("map").unwrap();
    chart.draw("map").unwrap();

    assert_eq!(group_marks(&document, "country").len(), 1);
    assert_eq!(circles(&document).len(), 2);
    assert_eq!(document.to_svg_string("map").unwrap(), first);
    assert_eq!(document.event_manager("map").unwrap().borrow().num_handlers(), 2);
}

#[test]
fn test_unknown_svg() {
    let document = document();
    let chart = SymbolMap::new(&document)
        .map(sample_topology())
        .values(two_values());
    let err = chart.draw("missing").unwrap_err();
    assert!(matches!(err, SymbolMapChartError::SvgNotFound(id) if id == "missing"));
}

#[test]
fn test_missing_land_leaves_canvas_untouched() {
    let document = document();
    let chart = SymbolMap::new(&document)
        .map(sample_topology())
        .values(two_values());
    chart.draw("map").unwrap();
    let before = document.to_svg_string("map").unwrap();

    let no_land = Topology::from_json_str(r#"{"type": "Topology", "objects": {}, "arcs": []}"#)
        .unwrap();
    let chart = chart.map(no_land);
    let err = chart.draw("map").unwrap_err();
    assert!(matches!(
        err,
        SymbolMapChartError::GeoError(SymbolMapGeoError::MissingObject(name)) if name == "land"
    ));
    assert_eq!(document.to_svg_string("map").unwrap(), before);
}

#[test]
fn test_unplaceable_values_are_skipped() {
    let document = document();
    let values = vec![
        ValueRecord::new(-98.0, 38.5).with_field("value", 1),
        // Paris is outside every part of the composite projection
        ValueRecord::new(2.35, 48.85).with_field("value", 2),
    ];
    let chart = SymbolMap::new(&document)
        .projection(AlbersUsa::new())
        .map(sample_topology())
        .values(values);
    chart.draw("map").unwrap();
    assert_eq!(circles(&document).len(), 1);
}

#[test]
fn test_hover_highlight_and_reset() {
    let document = document();
    let chart = SymbolMap::new(&document)
        .map(sample_topology())
        .values(two_values());
    chart.draw("map").unwrap();

    document.dispatch("map", &WindowEvent::cursor_moved(481.0, 401.0)).unwrap();
    let classes = circles(&document)[0].3.clone();
    assert_eq!(classes, ClassSet::from_iter(["symbol", "highlight"]));
    assert_eq!(circles(&document)[1].3, ClassSet::from_iter(["symbol"]));

    document.dispatch("map", &WindowEvent::cursor_moved(10.0, 10.0)).unwrap();
    assert_eq!(circles(&document)[0].3, ClassSet::from_iter(["symbol"]));
    assert_eq!(document.log(), DEFAULT_LOG_TEXT);
}

#[test]
fn test_cursor_leaving_canvas_resets_highlight() {
    let document = document();
    let chart = SymbolMap::new(&document)
        .map(sample_topology())
        .values(two_values());
    chart.draw("map").unwrap();

    document.dispatch("map", &WindowEvent::cursor_moved(480.0, 400.0)).unwrap();
    document.dispatch("map", &WindowEvent::CursorLeft).unwrap();
    assert_eq!(circles(&document)[0].3, ClassSet::from_iter(["symbol"]));
    assert_eq!(document.log(), DEFAULT_LOG_TEXT);
}

#[test]
fn test_state_layer_and_state_highlight() {
    let document = document();
    let values = vec![ValueRecord::new(-80.0, 40.0)
        .with_field("value", 3)
        .with_field("state", "oh")
        .with_field("city", "Pittsburgh")];
    let chart = SymbolMap::new(&document)
        .map(sample_topology())
        .values(values)
        .lookup(state_records())
        .states(true)
        .describe(|d| Some(format!("{} was hovered", d.field("city")?)));
    chart.draw("map").unwrap();

    let state_ids: Vec<_> = group_marks(&document, "states")
        .iter()
        .map(|m| m.id().unwrap().to_string())
        .collect();
    assert_eq!(state_ids, vec!["state6", "state39"]);

    let [x, y] = chart.get_projection().project([-80.0, 40.0]).unwrap();
    document.dispatch("map", &WindowEvent::cursor_moved(x, y)).unwrap();

    let state_classes = |id: &str| {
        document
            .with_svg("map", |scene| {
                let path = scene.find_by_id(id).unwrap();
                scene.get_mark(&path).unwrap().classes().unwrap().clone()
            })
            .unwrap()
    };
    assert_eq!(state_classes("state39"), ClassSet::from_iter(["state", "highlight"]));
    assert_eq!(state_classes("state6"), ClassSet::from_iter(["state"]));
    assert_eq!(document.log(), "Pittsburgh was hovered");

    document.dispatch("map", &WindowEvent::CursorLeft).unwrap();
    assert_eq!(state_classes("state39"), ClassSet::from_iter(["state"]));
    assert_eq!(document.log(), DEFAULT_LOG_TEXT);
}

#[rstest]
#[case(false, vec!["country", "dots"])]
#[case(true, vec!["country", "states", "dots"])]
fn test_layer_order(#[case] states: bool, #[case] expected: Vec<&str>) {
    let document = document();
    SymbolMap::new(&document)
        .map(sample_topology())
        .values(two_values())
        .states(states)
        .draw("map")
        .unwrap();

    let ids: Vec<String> = document
        .with_svg("map", |scene| scene.groups().iter().map(|g| g.id.clone()).collect())
        .unwrap();
    assert_eq!(ids, expected);
}
