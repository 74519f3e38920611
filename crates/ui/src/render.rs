//! String rendering of the widget markup.
//!
//! The host replaces the container's whole content with this output on every
//! state change, so each call renders a complete tree from scratch.

use dioxus::prelude::*;
use odyssey_core::model::{Catalog, WidgetConfig, WidgetState};
use services::WidgetSession;

use crate::views::{WidgetMarkup, WidgetMarkupProps};
use crate::vm::{WidgetVm, map_widget};

#[must_use]
pub fn render_widget(catalog: &Catalog, config: &WidgetConfig, state: &WidgetState) -> String {
    render_view(map_widget(catalog, config, state))
}

#[must_use]
pub fn render_session(session: &WidgetSession, config: &WidgetConfig) -> String {
    render_widget(session.catalog(), config, session.state())
}

#[must_use]
pub fn render_view(view: WidgetVm) -> String {
    let mut dom = VirtualDom::new_with_props(WidgetMarkup, WidgetMarkupProps { view });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
