/*!
# Happiness Chart

A small full-stack web application visualizing the 2019 World Happiness
Report, built in Rust.

## Overview

A backend endpoint reads a static CSV dataset (country happiness scores and
their contributing factors) and returns it as JSON; a single-page front-end
fetches the dataset once and renders it as an interactive, sortable,
searchable bar chart with reveal-on-scroll animation and hover tooltips.

## Architecture

The application follows a client-server architecture:

### Data Service
- **Technologies**: Rust, axum, tokio, tower-http
- **Key Components**:
  - Dataset Loader - Header-driven CSV parsing into typed records
  - Data Route - `GET /api/data` returning the full dataset as a JSON array
  - Static Hosting - Serves the pre-built SPA bundle with `index.html`
    fallback for client-side routing
  - CORS - Cross-origin access restricted to one configured origin

### Visualization Client
- **Technologies**: Rust compiled to WebAssembly, Leptos (CSR), web-sys
- **Key Components**:
  - View Derivation - Case-insensitive country filter plus stable sorting by
    score, name, or any factor
  - Chart Engine - Pure layout, color scales, keyed enter/update/exit
    reconciliation, and one-shot reveal tracking (headless, fully testable)
  - DOM Layer - Applies reconciliation plans to bar elements, drives CSS
    transitions, tooltips, click-to-scroll, and a single
    IntersectionObserver feeding the visibility-event channel

## Modules

- **record**: The dataset row type and its JSON column-name mapping
- **dataset**: CSV loading with header-driven column mapping
- **view**: Factors, sort criteria, and the filter+sort view derivation
- **chart**: Headless chart engine (scales, layout, reconcile, reveal,
  tooltip)
- **app**: Routing, CORS, and static hosting (feature `web`)
- **frontend**: The browser application (feature `frontend`, wasm32 only)

## Data Flow

file → Data Service → HTTP JSON → Visualization Client → DOM, one direction
only. The server re-reads the file per request and keeps no state; the
client fetches once per page session and derives every rendered view from
local UI state.

## REST API Endpoints

- `/api/data` - The full dataset as a JSON array of records
*/

pub mod chart;
pub mod dataset;
pub mod record;
pub mod view;

#[cfg(feature = "web")]
pub mod app;

// The browser half is a stub unless compiled for wasm32 with the
// `frontend` feature, so native builds never need a wasm toolchain.
#[cfg(all(feature = "frontend", target_arch = "wasm32"))]
pub mod frontend;

pub use record::Record;
pub use view::{Factor, SortCriteria, filter_and_sort};
