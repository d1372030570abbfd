use float_cmp::assert_approx_eq;
use symbolmap_scenegraph::marks::circle::SceneCircleMark;
use symbolmap_scenegraph::marks::group::SceneGroup;
use symbolmap_scenegraph::marks::mark::SceneMark;
use symbolmap_scenegraph::SceneGraph;

fn dots_scene() -> SceneGraph {
    let mut dots = SceneGroup::new("dots");
    dots.push(SceneCircleMark::new(10.0, 10.0, 5.0).with_class("symbol"));
    dots.push(SceneCircleMark::new(30.0, 10.0, 15.0).with_class("symbol"));
    let mut scene = SceneGraph::new(100.0, 50.0);
    scene.marks.push(dots.into());
    scene
}

#[test]
fn test_highlight_appears_in_export() {
    let mut scene = dots_scene();
    let path = scene.find_by_id("dots").unwrap();
    let mut second = path.clone();
    second.push(1);

    scene.set_classed(&second, "highlight", true).unwrap();
    let svg = scene.to_svg_string(None);
    assert_eq!(svg.matches(r#"class="symbol highlight""#).count(), 1);
    assert_eq!(svg.matches(r#"class="symbol""#).count(), 1);

    scene.set_classed(&second, "highlight", false).unwrap();
    let svg = scene.to_svg_string(None);
    assert_eq!(svg.matches(r#"class="symbol""#).count(), 2);
}

#[test]
fn test_highlight_keeps_circle_geometry() {
    let mut scene = dots_scene();
    scene.set_classed(&[0, 1], "highlight", true).unwrap();

    let Some(SceneMark::Circle(circle)) = scene.get_mark(&[0, 1]) else {
        panic!("expected a circle");
    };
    assert!(circle.classes.contains("highlight"));
    assert_approx_eq!(f64, circle.cx, 30.0);
    assert_approx_eq!(f64, circle.cy, 10.0);
    assert_approx_eq!(f64, circle.r, 15.0);
}

#[test]
fn test_scene_serializes_to_json() {
    let scene = dots_scene();
    let value = serde_json::to_value(&scene).unwrap();
    assert_approx_eq!(f64, value["width"].as_f64().unwrap(), 100.0);

    let SceneMark::Group(group) = &scene.marks[0] else {
        panic!("expected a group");
    };
    assert_eq!(group.marks.len(), 2);
    let r = value["marks"][0]["Group"]["marks"][1]["Circle"]["r"].as_f64().unwrap();
    assert_approx_eq!(f64, r, 15.0);
}
