//! Headless chart engine for the happiness bar chart.
//!
//! Everything in this module is a pure function of (records, selection,
//! viewport): geometry and colors (`layout`, `scale`), the keyed
//! enter/update/exit diff and per-bar lifecycle (`reconcile`), one-shot
//! reveal-on-scroll tracking fed by visibility events (`reveal`), and
//! tooltip content (`tooltip`). The browser layer only applies the results
//! to the DOM.

pub mod layout;
pub mod reconcile;
pub mod reveal;
pub mod scale;
pub mod tooltip;
