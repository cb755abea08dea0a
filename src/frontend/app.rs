use crate::frontend::chart_dom::ChartRuntime;
use crate::frontend::fetch;
use crate::record::Record;
use crate::view::{Factor, SortCriteria, filter_and_sort};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

#[component]
pub fn App() -> impl IntoView {
    let (records, set_records) = signal(Vec::<Record>::new());
    let (status, set_status) = signal(String::new());

    // One-shot dataset fetch on mount; no retries, no timeout. A failure
    // leaves the chart empty and surfaces in the status line.
    spawn_local(async move {
        match fetch::fetch_records().await {
            Ok(data) => set_records.set(data),
            Err(e) => set_status.set(format!("failed to load dataset: {}", e)),
        }
    });

    view! {
        <div class="app">
            <h1>"World Happiness Index (2019)"</h1>
            <Show when=move || !status.get().is_empty() fallback=|| ()>
                <p class="status">{move || status.get()}</p>
            </Show>
            <HappinessChart records=records />
        </div>
    }
}

#[component]
fn HappinessChart(records: ReadSignal<Vec<Record>>) -> impl IntoView {
    let (sort_value, set_sort_value) = signal(String::new());
    let (search_term, set_search_term) = signal(String::new());

    let sort = Memo::new(move |_| SortCriteria::from_select_value(&sort_value.get()));
    let view_records =
        Memo::new(move |_| filter_and_sort(&records.get(), &search_term.get(), sort.get()));
    let blurb = Memo::new(move |_| {
        sort.get()
            .selected_factor()
            .map(|factor| factor.blurb())
            .unwrap_or("")
    });

    let container_ref = NodeRef::<leptos::html::Div>::new();

    let runtime = StoredValue::new_local(ChartRuntime::new());
    runtime.update_value(|rt| rt.set_handle(runtime));

    // Reruns on every view change: reconcile against the previous render,
    // lay out against the viewport width read now (no resize
    // subscription), and rebuild the observer set.
    Effect::new(move |_| {
        let view = view_records.get();
        let Some(container) = container_ref.get() else {
            return;
        };
        let viewport = viewport_width();
        runtime.update_value(|rt| {
            if let Err(e) = rt.sync(&container, &view, viewport) {
                web_sys::console::error_1(&e.into());
            }
        });
    });

    on_cleanup(move || {
        runtime.try_update_value(|rt| rt.teardown());
    });

    // Pointer events are delegated: one set of handlers on the container,
    // resolving the bar row from the event target.
    let record_for_event = move |ev: &MouseEvent| -> Option<Record> {
        let target: Element = ev.target()?.dyn_into().ok()?;
        let row = target.closest(".bar-row").ok()??;
        let country = row.get_attribute("data-country")?;
        view_records
            .get_untracked()
            .iter()
            .find(|r| r.country == country)
            .cloned()
    };

    view! {
        <div>
            <div class="controls">
                <label>
                    "Sort by:"
                    <select
                        prop:value=move || sort_value.get()
                        on:change=move |ev| set_sort_value.set(event_target_value(&ev))
                    >
                        <option value="">"Happiness Score"</option>
                        <option value="alphabetical">"Alphabetical"</option>
                        {Factor::ALL
                            .iter()
                            .map(|factor| {
                                view! { <option value=factor.label()>{factor.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Search:"
                    <input
                        type="text"
                        prop:value=move || search_term.get()
                        on:input=move |ev| set_search_term.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <div class="blurb-container">
                <p class="factor-blurb">{blurb}</p>
            </div>
            <div
                class="chart"
                node_ref=container_ref
                on:mouseover=move |ev| {
                    if let Some(record) = record_for_event(&ev) {
                        runtime
                            .update_value(|rt| {
                                rt.show_tooltip(&record, ev.page_x() as f64, ev.page_y() as f64)
                            });
                    }
                }
                on:mouseout=move |ev| {
                    if record_for_event(&ev).is_some() {
                        runtime.update_value(|rt| rt.hide_tooltip());
                    }
                }
                on:click=move |ev| {
                    if let Some(record) = record_for_event(&ev) {
                        runtime.update_value(|rt| rt.scroll_to(&record.country));
                    }
                }
            ></div>
        </div>
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}
