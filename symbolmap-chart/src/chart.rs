use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use log::{debug, info, warn};
use symbolmap_eventstream::{EventStreamConfig, SceneGraphEvent, SceneGraphEventType};
use symbolmap_geo::topojson::feature;
use symbolmap_geo::{GeoPath, Mercator, Projection, Topology};
use symbolmap_scales::array::try_extent;
use symbolmap_scales::{ContinuousNumericScale, PowNumericScale};
use symbolmap_scenegraph::error::SymbolMapSceneGraphError;
use symbolmap_scenegraph::marks::circle::SceneCircleMark;
use symbolmap_scenegraph::marks::group::SceneGroup;
use symbolmap_scenegraph::marks::mark::MarkInstance;
use symbolmap_scenegraph::marks::path::ScenePathMark;

use crate::document::Document;
use crate::error::SymbolMapChartError;
use crate::lookup::Lookup;
use crate::values::ValueRecord;

/// Log text shown while nothing is hovered
pub const DEFAULT_LOG_TEXT: &str = "Hover over a circle for more details";

/// Extracts the plotted number from a value record
pub type ValueAccessor = Arc<dyn Fn(&ValueRecord) -> f64>;

/// Extracts an optional piece of text from a value record
pub type TextAccessor = Arc<dyn Fn(&ValueRecord) -> Option<String>>;

/// Interactive symbol map: a land outline with one scaled circle per value record.
///
/// Properties are set with consuming setters named after the property and
/// read back with `get_*` getters. Drawing never alters the configuration;
/// the radius domain only follows the data when [`SymbolMap::recalibrate`]
/// is called.
///
/// ```no_run
/// # use symbolmap_chart::{Document, SymbolMap, ValueRecord};
/// # use symbolmap_geo::Topology;
/// # fn run(topology: Topology) -> Result<(), symbolmap_chart::SymbolMapChartError> {
/// let document = Document::new();
/// document.add_svg("map", 960.0, 800.0);
///
/// let mut chart = SymbolMap::new(&document)
///     .map(topology)
///     .values(vec![ValueRecord::new(-93.6, 42.0).with_field("value", 34.7)]);
/// chart.recalibrate();
/// chart.draw("map")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SymbolMap {
    document: Document,
    lookup: Lookup,
    projection: Arc<dyn Projection>,
    radius: PowNumericScale,
    map: Option<Arc<Topology>>,
    values: Option<Arc<Vec<ValueRecord>>>,
    value: ValueAccessor,
    states: bool,
    state: TextAccessor,
    describe: Option<TextAccessor>,
}

impl SymbolMap {
    /// Creates a chart that draws into `document` and reports to its `#log` node
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
            lookup: Lookup::new(),
            projection: Arc::new(Mercator::for_canvas(960.0, 800.0)),
            radius: PowNumericScale::sqrt().with_range((5.0, 15.0)),
            map: None,
            values: None,
            value: Arc::new(|d: &ValueRecord| d.number("value")),
            states: false,
            state: Arc::new(|d: &ValueRecord| d.field("state").map(str::to_string)),
            describe: None,
        }
    }

    /// Adds state records to the lookup. Entries from earlier calls are kept.
    pub fn lookup<I>(mut self, records: I) -> Self
    where
        Lookup: Extend<I::Item>,
        I: IntoIterator,
    {
        self.lookup.extend(records);
        info!("Updated lookup information.");
        self
    }

    pub fn get_lookup(&self) -> &Lookup {
        &self.lookup
    }

    pub fn projection<P: Projection + 'static>(mut self, projection: P) -> Self {
        self.projection = Arc::new(projection);
        self
    }

    pub fn get_projection(&self) -> &dyn Projection {
        self.projection.as_ref()
    }

    pub fn radius(mut self, radius: PowNumericScale) -> Self {
        self.radius = radius;
        self
    }

    pub fn get_radius(&self) -> &PowNumericScale {
        &self.radius
    }

    /// Replaces the map geometry
    pub fn map(mut self, map: Topology) -> Self {
        self.map = Some(Arc::new(map));
        self.update_log(Some("Map data loaded."));
        self
    }

    pub fn get_map(&self) -> Option<&Topology> {
        self.map.as_deref()
    }

    /// Replaces the value dataset
    pub fn values(mut self, values: Vec<ValueRecord>) -> Self {
        self.values = Some(Arc::new(values));
        self.update_log(Some("Symbol data loaded."));
        self
    }

    pub fn get_values(&self) -> Option<&[ValueRecord]> {
        self.values.as_deref().map(Vec::as_slice)
    }

    pub fn value<F>(mut self, value: F) -> Self
    where
        F: Fn(&ValueRecord) -> f64 + 'static,
    {
        self.value = Arc::new(value);
        self
    }

    pub fn get_value(&self) -> &ValueAccessor {
        &self.value
    }

    /// Whether to draw the state boundary layer
    pub fn states(mut self, states: bool) -> Self {
        self.states = states;
        self
    }

    pub fn get_states(&self) -> bool {
        self.states
    }

    /// Two letter state code of a value record, used to highlight its state
    pub fn state<F>(mut self, state: F) -> Self
    where
        F: Fn(&ValueRecord) -> Option<String> + 'static,
    {
        self.state = Arc::new(state);
        self
    }

    pub fn get_state(&self) -> &TextAccessor {
        &self.state
    }

    /// Message shown in the log while a symbol is hovered
    pub fn describe<F>(mut self, describe: F) -> Self
    where
        F: Fn(&ValueRecord) -> Option<String> + 'static,
    {
        self.describe = Some(Arc::new(describe));
        self
    }

    pub fn get_describe(&self) -> Option<&TextAccessor> {
        self.describe.as_ref()
    }

    /// Fits the radius domain to the extent of the current values
    pub fn recalibrate(&mut self) {
        let Some(values) = &self.values else {
            warn!("Unable to recalibrate radius: missing data.");
            return;
        };
        match try_extent(values.iter().map(|d| (self.value)(d))) {
            Ok(domain) => {
                debug!("Radius domain set to {domain:?}");
                self.radius.set_domain(domain);
            }
            Err(err) => warn!("Unable to recalibrate radius: {err}"),
        }
    }

    /// Replaces the log text, or restores the hint when `message` is `None`
    pub fn update_log(&self, message: Option<&str>) {
        update_log(&self.document, message);
    }

    /// Draws the map into the SVG element with the given id.
    ///
    /// Missing map or values only log a warning. Any previous drawing in the
    /// element is replaced, along with its hover handlers.
    pub fn draw(&self, id: &str) -> Result<(), SymbolMapChartError> {
        let (Some(map), Some(values)) = (&self.map, &self.values) else {
            warn!("Unable to draw symbol map: missing data.");
            return Ok(());
        };

        self.update_log(Some("Drawing map... please wait."));

        let (width, height) = self
            .document
            .with_svg(id, |scene| (scene.width, scene.height))
            .ok_or_else(|| SymbolMapChartError::SvgNotFound(id.to_string()))?;
        debug!("svg#{id} is {width}x{height}");

        let path = GeoPath::new(self.projection.as_ref());

        // Resolve features before touching the canvas
        let land = feature(map, "land")?.geometry();
        if let Some(bounds) = path.bounds(&land) {
            debug!("Land bounds {:?} to {:?}", bounds.min(), bounds.max());
        }
        let states = match (self.states, map.has_object("states")) {
            (true, true) => Some(feature(map, "states")?),
            (true, false) => {
                debug!("Topology has no states object, skipping the state layer");
                None
            }
            _ => None,
        };

        let mut groups = Vec::new();

        let mut country = SceneGroup::new("country");
        country.push(ScenePathMark::new(path.path_data(&land)).with_class("country"));
        groups.push(country);

        if let Some(states) = states {
            let mut group = SceneGroup::new("states");
            for state in states.features() {
                let mut mark =
                    ScenePathMark::new(path.path_data(&state.geometry)).with_class("state");
                if let Some(state_id) = &state.id {
                    mark = mark.with_id(format!("state{state_id}"));
                }
                group.push(mark);
            }
            groups.push(group);
        }

        // Index of the value record behind each circle
        let mut symbols = Vec::with_capacity(values.len());
        let mut dots = SceneGroup::new("dots");
        for (index, record) in values.iter().enumerate() {
            let Some([cx, cy]) = self.projection.project(record.position()) else {
                debug!(
                    "Skipping value {index} at {:?}, outside the projection",
                    record.position()
                );
                continue;
            };
            let r = self.radius.scale((self.value)(record));
            dots.push(SceneCircleMark::new(cx, cy, r).with_class("symbol"));
            symbols.push(index);
        }
        groups.push(dots);

        let dots_index = groups.len() - 1;
        self.document
            .with_svg_mut(id, |scene| {
                scene.clear();
                scene.marks.extend(groups.into_iter().map(Into::into));
            })
            .ok_or_else(|| SymbolMapChartError::SvgNotFound(id.to_string()))?;

        debug!("Drew {} symbols into svg#{id}", symbols.len());
        self.register_hover(id, dots_index, symbols, values.clone())
    }

    fn register_hover(
        &self,
        id: &str,
        dots_index: usize,
        symbols: Vec<usize>,
        values: Arc<Vec<ValueRecord>>,
    ) -> Result<(), SymbolMapChartError> {
        let events = self
            .document
            .event_manager(id)
            .ok_or_else(|| SymbolMapChartError::SvgNotFound(id.to_string()))?;
        let mut events = events.borrow_mut();
        events.clear_handlers();

        let hover = Rc::new(Hover {
            document: self.document.clone(),
            svg_id: id.to_string(),
            symbols,
            values,
            lookup: self.states.then(|| self.lookup.clone()),
            state: self.state.clone(),
            describe: self.describe.clone(),
        });

        let enter = hover.clone();
        events.register_handler(
            EventStreamConfig::new([SceneGraphEventType::MarkMouseEnter])
                .with_source_group(vec![dots_index]),
            move |event| {
                if let SceneGraphEvent::MouseEnter(e) = event {
                    enter.show_highlight(&e.mark_instance);
                }
            },
        );

        let leave = hover;
        events.register_handler(
            EventStreamConfig::new([SceneGraphEventType::MarkMouseLeave])
                .with_source_group(vec![dots_index]),
            move |event| {
                if let SceneGraphEvent::MouseLeave(e) = event {
                    leave.hide_highlight(&e.mark_instance);
                }
            },
        );
        Ok(())
    }
}

impl fmt::Debug for SymbolMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolMap")
            .field("lookup", &self.lookup)
            .field("projection", &self.projection)
            .field("radius", &self.radius)
            .field("map", &self.map.is_some())
            .field("values", &self.values.as_ref().map(|v| v.len()))
            .field("states", &self.states)
            .finish_non_exhaustive()
    }
}

fn update_log(document: &Document, message: Option<&str>) {
    document.set_log_text(message.unwrap_or(DEFAULT_LOG_TEXT));
}

/// State captured by the hover handlers of one drawing
struct Hover {
    document: Document,
    svg_id: String,
    symbols: Vec<usize>,
    values: Arc<Vec<ValueRecord>>,
    /// Only present when the state layer is drawn
    lookup: Option<Lookup>,
    state: TextAccessor,
    describe: Option<TextAccessor>,
}

impl Hover {
    fn record(&self, mark: &MarkInstance) -> Option<&ValueRecord> {
        let circle = *mark.mark_path.last()?;
        self.values.get(*self.symbols.get(circle)?)
    }

    fn show_highlight(&self, mark: &MarkInstance) {
        self.set_highlight(mark, true);
        let message = self
            .describe
            .as_ref()
            .zip(self.record(mark))
            .and_then(|(describe, record)| describe(record));
        if let Some(message) = message {
            update_log(&self.document, Some(&message));
        }
    }

    fn hide_highlight(&self, mark: &MarkInstance) {
        self.set_highlight(mark, false);
        update_log(&self.document, None);
    }

    fn set_highlight(&self, mark: &MarkInstance, enabled: bool) {
        let state_path_id = self.lookup.as_ref().and_then(|lookup| {
            let code = (self.state)(self.record(mark)?)?;
            let state_id = lookup.id(&code.trim().to_uppercase())?;
            Some(format!("state{state_id}"))
        });

        let result = self.document.with_svg_mut(&self.svg_id, |scene| {
            scene.set_classed(&mark.mark_path, "highlight", enabled)?;
            scene.set_classed(&mark.mark_path, "symbol", true)?;
            if let Some(path) = state_path_id.and_then(|id| scene.find_by_id(&id)) {
                scene.set_classed(&path, "highlight", enabled)?;
                scene.set_classed(&path, "state", true)?;
            }
            Ok::<_, SymbolMapSceneGraphError>(())
        });

        match result {
            Some(Ok(())) => {}
            Some(Err(err)) => warn!("Unable to update highlight: {err}"),
            None => warn!("svg#{} was removed after drawing", self.svg_id),
        }
    }
}
