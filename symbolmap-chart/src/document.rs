//! Single page model that a chart draws into.
//!
//! Holds the body paragraphs, the `#log` status node and the SVG canvases,
//! each canvas with its own scene graph and event handlers. The handle is
//! cheap to clone and every clone refers to the same page.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;
use symbolmap_eventstream::{EventStreamManager, WindowEvent};
use symbolmap_geometry::SceneGraphRTree;
use symbolmap_scenegraph::SceneGraph;

use crate::error::SymbolMapChartError;

/// A styled `<p>` element of the page body
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub text: String,
    pub style: IndexMap<String, String>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: IndexMap::new(),
        }
    }

    pub fn with_style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(name.into(), value.into());
        self
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    fn style_attribute(&self) -> String {
        self.style
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .join("; ")
    }
}

struct Canvas {
    scene_graph: SceneGraph,
    events: Rc<RefCell<EventStreamManager>>,
}

#[derive(Default)]
struct DocumentState {
    paragraphs: Vec<Paragraph>,
    log: String,
    canvases: IndexMap<String, Canvas>,
}

#[derive(Clone, Default)]
pub struct Document {
    inner: Rc<RefCell<DocumentState>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty SVG canvas, replacing any canvas with the same id
    pub fn add_svg(&self, id: impl Into<String>, width: f64, height: f64) {
        let canvas = Canvas {
            scene_graph: SceneGraph::new(width, height),
            events: Rc::new(RefCell::new(EventStreamManager::new())),
        };
        self.inner.borrow_mut().canvases.insert(id.into(), canvas);
    }

    pub fn has_svg(&self, id: &str) -> bool {
        self.inner.borrow().canvases.contains_key(id)
    }

    /// Inserts a paragraph before all other body content
    pub fn prepend_paragraph(&self, paragraph: Paragraph) {
        self.inner.borrow_mut().paragraphs.insert(0, paragraph);
    }

    pub fn paragraphs(&self) -> Vec<Paragraph> {
        self.inner.borrow().paragraphs.clone()
    }

    /// Text of the `#log` node
    pub fn log(&self) -> String {
        self.inner.borrow().log.clone()
    }

    pub fn set_log_text(&self, text: impl Into<String>) {
        self.inner.borrow_mut().log = text.into();
    }

    pub fn with_svg<R>(&self, id: &str, f: impl FnOnce(&SceneGraph) -> R) -> Option<R> {
        let state = self.inner.borrow();
        state.canvases.get(id).map(|canvas| f(&canvas.scene_graph))
    }

    pub fn with_svg_mut<R>(&self, id: &str, f: impl FnOnce(&mut SceneGraph) -> R) -> Option<R> {
        let mut state = self.inner.borrow_mut();
        state
            .canvases
            .get_mut(id)
            .map(|canvas| f(&mut canvas.scene_graph))
    }

    pub fn event_manager(&self, id: &str) -> Option<Rc<RefCell<EventStreamManager>>> {
        self.inner
            .borrow()
            .canvases
            .get(id)
            .map(|canvas| canvas.events.clone())
    }

    /// Delivers a pointer event to the handlers of a canvas.
    ///
    /// Handlers may freely modify the document, which is not borrowed while
    /// they run. They must not dispatch to the same canvas again.
    pub fn dispatch(&self, id: &str, event: &WindowEvent) -> Result<(), SymbolMapChartError> {
        let (rtree, events) = {
            let state = self.inner.borrow();
            let canvas = state
                .canvases
                .get(id)
                .ok_or_else(|| SymbolMapChartError::SvgNotFound(id.to_string()))?;
            (
                SceneGraphRTree::from_scene_graph(&canvas.scene_graph),
                canvas.events.clone(),
            )
        };
        debug!("Dispatching {event:?} to svg#{id}");
        events.borrow_mut().dispatch_event(event, &rtree);
        Ok(())
    }

    pub fn to_svg_string(&self, id: &str) -> Option<String> {
        self.with_svg(id, |scene| scene.to_svg_string(Some(id)))
    }

    /// Serializes the whole page as a standalone HTML document
    pub fn to_html(&self) -> String {
        let state = self.inner.borrow();
        let mut body = Vec::new();
        for paragraph in &state.paragraphs {
            if paragraph.style.is_empty() {
                body.push(format!("<p>{}</p>", escape(&paragraph.text)));
            } else {
                body.push(format!(
                    r#"<p style="{}">{}</p>"#,
                    escape(&paragraph.style_attribute()),
                    escape(&paragraph.text)
                ));
            }
        }
        for (id, canvas) in &state.canvases {
            body.push(canvas.scene_graph.to_svg_string(Some(id)));
        }
        body.push(format!(r#"<div id="log">{}</div>"#, escape(&state.log)));

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n{STYLE}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            body.join("\n")
        )
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("Document")
            .field("paragraphs", &state.paragraphs)
            .field("log", &state.log)
            .field("svgs", &state.canvases.keys().collect::<Vec<_>>())
            .finish()
    }
}

const STYLE: &str = r#".country { fill: #dddddd; stroke: #ffffff; stroke-width: 1px; }
.state { fill: none; stroke: #ffffff; stroke-width: 0.5px; }
.state.highlight { fill: #bbbbbb; }
.symbol { fill: steelblue; fill-opacity: 0.6; stroke: #ffffff; }
.symbol.highlight { fill: orange; fill-opacity: 1; }
"#;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
