use svg::node::element::{Circle, Group, Path};
use svg::node::Node;
use svg::Document;

use crate::class_set::ClassSet;
use crate::marks::mark::SceneMark;
use crate::scene_graph::SceneGraph;

impl SceneGraph {
    /// Builds an `<svg>` element for the scene, tagged with `id` when given
    pub fn to_svg_document(&self, id: Option<&str>) -> Document {
        let mut document = Document::new()
            .set("width", round(self.width))
            .set("height", round(self.height))
            .set("viewBox", (0, 0, round(self.width), round(self.height)));
        if let Some(id) = id {
            document = document.set("id", id);
        }
        for mark in &self.marks {
            append_mark(&mut document, mark);
        }
        document
    }

    pub fn to_svg_string(&self, id: Option<&str>) -> String {
        self.to_svg_document(id).to_string()
    }
}

fn append_mark<N: Node>(parent: &mut N, mark: &SceneMark) {
    match mark {
        SceneMark::Group(group) => {
            let mut element = Group::new().set("id", group.id.as_str());
            for child in &group.marks {
                append_mark(&mut element, child);
            }
            parent.append(element);
        }
        SceneMark::Path(path) => {
            let mut element = Path::new().set("d", path.d.as_str());
            if let Some(id) = &path.id {
                element = element.set("id", id.as_str());
            }
            parent.append(with_classes(element, &path.classes));
        }
        SceneMark::Circle(circle) => {
            let mut element = Circle::new()
                .set("cx", round(circle.cx))
                .set("cy", round(circle.cy))
                .set("r", round(circle.r));
            if let Some(id) = &circle.id {
                element = element.set("id", id.as_str());
            }
            parent.append(with_classes(element, &circle.classes));
        }
    }
}

fn with_classes<N: Node>(mut element: N, classes: &ClassSet) -> N {
    if !classes.is_empty() {
        element.assign("class", classes.to_string());
    }
    element
}

/// Three decimals are plenty for screen coordinates
fn round(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use crate::marks::circle::SceneCircleMark;
    use crate::marks::group::SceneGroup;
    use crate::marks::path::ScenePathMark;
    use crate::scene_graph::SceneGraph;

    #[test]
    fn test_svg_string() {
        let mut dots = SceneGroup::new("dots");
        dots.push(SceneCircleMark::new(480.00000000000006, 400.0, 5.0).with_class("symbol"));
        let mut country = SceneGroup::new("country");
        country.push(ScenePathMark::new("M0,0L1,1Z").with_class("country"));

        let mut scene = SceneGraph::new(960.0, 800.0);
        scene.marks = vec![country.into(), dots.into()];

        let svg = scene.to_svg_string(Some("map"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"id="map""#));
        assert!(svg.contains(r#"viewBox="0 0 960 800""#));
        assert!(svg.contains(r#"<g id="country">"#));
        assert!(svg.contains(r#"class="country""#));
        assert!(svg.contains(r#"cx="480""#));
        assert!(svg.contains(r#"class="symbol""#));
        assert!(svg.find("country").unwrap() < svg.find("dots").unwrap());
    }
}
