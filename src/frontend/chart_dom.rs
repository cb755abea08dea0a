use crate::chart::layout::{self, BarGeometry, ChartLayout};
use crate::chart::reconcile::ChartState;
use crate::chart::reveal::{EXIT_DURATION_MS, REVEAL_DURATION_MS, RevealTracker, VisibilityEvent};
use crate::chart::tooltip::{TooltipContent, position as tooltip_position};
use crate::frontend::observer::VisibilityChannel;
use crate::record::Record;
use leptos::prelude::{LocalStorage, StoredValue, UpdateValue};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Handle used by deferred callbacks (observer events, transition timers)
/// to get back to the runtime they belong to.
pub type RuntimeHandle = StoredValue<ChartRuntime, LocalStorage>;

/// The DOM nodes of one bar row plus its target geometry.
struct BarNode {
    row: HtmlElement,
    bar: HtmlElement,
    score: HtmlElement,
    /// The width the bar animates to when revealed.
    target_width: f64,
}

/// Everything the chart needs between renders: the keyed element state,
/// reveal tracking, the live observer generation, and the DOM nodes the
/// reconciliation plans are applied to.
///
/// `sync` is the one entry point per view change; the rest are callbacks
/// from the visibility channel, transition timers, and pointer events.
#[derive(Default)]
pub struct ChartRuntime {
    handle: Option<RuntimeHandle>,
    state: ChartState,
    tracker: RevealTracker,
    channel: Option<VisibilityChannel>,
    nodes: HashMap<String, BarNode>,
    tooltip: Option<HtmlElement>,
    legend: Option<HtmlElement>,
}

impl ChartRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the runtime's own arena handle so deferred callbacks can
    /// reach it.
    pub fn set_handle(&mut self, handle: RuntimeHandle) {
        self.handle = Some(handle);
    }

    /// Apply one view change to the DOM
    ///
    /// Reconciles the new ordered view against the tracked elements:
    /// departed bars start their exit transition, new bars are created
    /// collapsed, retained bars move in place. The observer set is torn
    /// down and rebuilt so only bars still awaiting their one reveal are
    /// observed.
    ///
    /// # Arguments
    /// * `container` - The chart container element
    /// * `view` - The filtered, sorted records to render
    /// * `viewport_width` - Viewport width read by the hosting surface
    pub fn sync(
        &mut self,
        container: &HtmlElement,
        view: &[Record],
        viewport_width: f64,
    ) -> Result<(), String> {
        let document = container.owner_document().ok_or("no document")?;
        self.ensure_tooltip(&document)?;

        let plan = self.state.apply(view);
        self.tracker
            .retain(self.state.live_countries().collect::<Vec<_>>());
        let chart = layout::compute(view, viewport_width);

        let style = container.style();
        style.set_property("width", &px(chart.width)).ok();
        style.set_property("height", &px(chart.height)).ok();

        for country in &plan.exit {
            self.begin_exit(country);
        }

        for geometry in &chart.bars {
            if plan.enter.iter().any(|c| c == &geometry.country) {
                self.create_bar(&document, container, geometry)?;
            } else {
                self.update_bar(geometry);
            }
        }

        // Fresh observer generation: everything unrevealed gets a new,
        // untriggered observation; the old set is released wholesale.
        let channel = self.new_channel()?;
        let live: Vec<String> = self.state.live_countries().map(str::to_string).collect();
        for country in &live {
            if !self.tracker.is_revealed(country) {
                if let Some(node) = self.nodes.get(country) {
                    channel.observe(&node.row);
                }
            }
        }
        self.channel = Some(channel);

        self.render_legend(&document, container, &chart)?;
        Ok(())
    }

    /// One event from the visibility channel. The first visible sighting
    /// of a bar starts its reveal; everything else is ignored.
    pub fn handle_visibility(&mut self, event: &VisibilityEvent) {
        if !self.tracker.observe(event) {
            return;
        }
        if !self.state.begin_reveal(&event.country) {
            return;
        }

        if let Some(node) = self.nodes.get(&event.country) {
            // The one reveal: stop observing, animate the bar to its full
            // width, fade the label and score in.
            if let Some(channel) = &self.channel {
                channel.unobserve(&node.row);
            }
            node.row.class_list().add_1("revealed").ok();
            node.bar
                .style()
                .set_property("width", &px(node.target_width))
                .ok();

            let handle = self.handle;
            let country = event.country.clone();
            set_timeout(REVEAL_DURATION_MS, move || {
                if let Some(handle) = handle {
                    // No-op when the chart was unmounted before the timer.
                    handle.try_update_value(|rt| rt.state.settle(&country));
                }
            });
        }
    }

    /// Show the hover tooltip for a record near the cursor.
    pub fn show_tooltip(&self, record: &Record, page_x: f64, page_y: f64) {
        let Some(tooltip) = &self.tooltip else { return };

        let content = TooltipContent::for_record(record);
        tooltip.set_inner_html(&content.to_html());

        let (left, top) = tooltip_position(page_x, page_y);
        let style = tooltip.style();
        style.set_property("left", &px(left)).ok();
        style.set_property("top", &px(top)).ok();
        tooltip.class_list().add_1("visible").ok();
    }

    pub fn hide_tooltip(&self) {
        if let Some(tooltip) = &self.tooltip {
            tooltip.class_list().remove_1("visible").ok();
        }
    }

    /// Smoothly scroll a bar into view (click navigation).
    pub fn scroll_to(&self, country: &str) {
        if let Some(node) = self.nodes.get(country) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            node.row
                .scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    /// Release the observer set and every DOM node this runtime owns.
    pub fn teardown(&mut self) {
        self.channel = None;
        if let Some(tooltip) = self.tooltip.take() {
            tooltip.remove();
        }
        if let Some(legend) = self.legend.take() {
            legend.remove();
        }
        for (_, node) in self.nodes.drain() {
            node.row.remove();
        }
        self.state = ChartState::new();
        self.tracker = RevealTracker::new();
    }

    fn ensure_tooltip(&mut self, document: &Document) -> Result<(), String> {
        if self.tooltip.is_some() {
            return Ok(());
        }
        let tooltip = create_div(document, "tooltip")?;
        document
            .body()
            .ok_or("no body")?
            .append_child(&tooltip)
            .map_err(|_| "failed to attach tooltip".to_string())?;
        self.tooltip = Some(tooltip);
        Ok(())
    }

    fn new_channel(&self) -> Result<VisibilityChannel, String> {
        let handle = self.handle;
        VisibilityChannel::new(move |event| {
            if let Some(handle) = handle {
                handle.try_update_value(|rt| rt.handle_visibility(&event));
            }
        })
    }

    fn create_bar(
        &mut self,
        document: &Document,
        container: &HtmlElement,
        geometry: &BarGeometry,
    ) -> Result<(), String> {
        // A country can re-enter while its old element is still exiting;
        // the stale node is detached at once so identities stay unique.
        if let Some(old) = self.nodes.remove(&geometry.country) {
            old.row.remove();
        }

        let row = create_div(document, "bar-row")?;
        row.set_id(&format!("bar-{}", geometry.country.replace(' ', "-")));
        row.set_attribute("data-country", &geometry.country)
            .map_err(|_| "failed to set data-country".to_string())?;
        if geometry.degenerate {
            row.class_list().add_1("degenerate").ok();
        }
        let style = row.style();
        style.set_property("top", &px(geometry.y)).ok();
        style.set_property("height", &px(geometry.height)).ok();

        let bar = create_div(document, "bar")?;
        bar.style().set_property("width", "0px").ok();
        bar.style()
            .set_property("background-color", &geometry.fill.css())
            .ok();

        let label = create_div(document, "bar-label")?;
        label.set_text_content(Some(&geometry.country));

        let score = create_div(document, "bar-score")?;
        score.set_text_content(Some(&geometry.score_text));
        score
            .style()
            .set_property("left", &score_left(geometry.width))
            .ok();

        row.append_child(&bar).ok();
        row.append_child(&label).ok();
        row.append_child(&score).ok();
        container
            .append_child(&row)
            .map_err(|_| "failed to attach bar".to_string())?;

        self.nodes.insert(
            geometry.country.clone(),
            BarNode {
                row,
                bar,
                score,
                target_width: geometry.width,
            },
        );
        Ok(())
    }

    fn update_bar(&mut self, geometry: &BarGeometry) {
        let revealed = self.tracker.is_revealed(&geometry.country);
        let Some(node) = self.nodes.get_mut(&geometry.country) else {
            return;
        };

        node.target_width = geometry.width;
        node.row.style().set_property("top", &px(geometry.y)).ok();
        node.bar
            .style()
            .set_property("background-color", &geometry.fill.css())
            .ok();
        node.score.set_text_content(Some(&geometry.score_text));
        node.score
            .style()
            .set_property("left", &score_left(geometry.width))
            .ok();
        if revealed {
            node.bar
                .style()
                .set_property("width", &px(geometry.width))
                .ok();
        }
    }

    fn begin_exit(&mut self, country: &str) {
        let Some(node) = self.nodes.get(country) else {
            return;
        };

        node.row.class_list().add_1("exiting").ok();
        node.bar.style().set_property("width", "0px").ok();

        // Drop the element once the shrink/fade transition has run. The
        // closure holds the element itself, so a later re-enter under the
        // same country never loses its fresh node.
        let handle = self.handle;
        let row = node.row.clone();
        let country = country.to_string();
        set_timeout(EXIT_DURATION_MS, move || {
            row.remove();
            if let Some(handle) = handle {
                handle.try_update_value(|rt| rt.finish_exit(&country));
            }
        });
    }

    fn finish_exit(&mut self, country: &str) {
        self.state.finish_exit(country);
        if self.state.bar(country).is_none() {
            self.nodes.remove(country);
        }
    }

    fn render_legend(
        &mut self,
        document: &Document,
        container: &HtmlElement,
        chart: &ChartLayout,
    ) -> Result<(), String> {
        if let Some(old) = self.legend.take() {
            old.remove();
        }

        let legend = create_div(document, "legend")?;
        for swatch in &chart.legend {
            let entry = create_div(document, "legend-entry")?;
            entry.style().set_property("left", &px(swatch.x)).ok();

            let color = create_div(document, "legend-swatch")?;
            color
                .style()
                .set_property("background-color", &swatch.color.css())
                .ok();

            let label = create_div(document, "legend-label")?;
            label.set_text_content(Some(swatch.label));

            entry.append_child(&color).ok();
            entry.append_child(&label).ok();
            legend.append_child(&entry).ok();
        }
        container
            .append_child(&legend)
            .map_err(|_| "failed to attach legend".to_string())?;

        self.legend = Some(legend);
        Ok(())
    }
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement, String> {
    let element = document
        .create_element("div")
        .map_err(|_| "create_element failed".to_string())?;
    element.set_class_name(class);
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| "not an HtmlElement".to_string())
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

// The score text sits just inside the right end of its bar; very short
// bars keep it readable at a minimum offset.
fn score_left(bar_width: f64) -> String {
    px((bar_width - 10.0).max(40.0))
}

fn set_timeout(duration_ms: u32, f: impl FnOnce() + 'static) {
    if let Some(window) = web_sys::window() {
        let callback = Closure::once_into_js(f);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            duration_ms as i32,
        );
    }
}
