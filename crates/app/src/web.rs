//! Browser binding: mounts the widget into the page and keeps its handlers
//! live across renders.
//!
//! Every render replaces the container's content, so the selector and close
//! button are looked up and re-bound afterwards. The closures themselves are
//! created once per mount and only dropped after the mount is gone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use odyssey_core::model::{TrackName, WidgetConfig};
use services::{ProgressClientConfig, WidgetServices, WidgetSession};
use storage::Storage;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use ui::{CLOSE_BUTTON_ID, TRACK_SELECT_ID, WIDGET_ELEMENT_ID, WidgetStyles, render_session};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlElement, HtmlSelectElement, Node};

use crate::embed::resolve_config;
use crate::logging;
use crate::slot::{MountId, WidgetSlot};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MountError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("element {0} has an unexpected type")]
    UnexpectedElement(&'static str),
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

thread_local! {
    static SLOT: RefCell<WidgetSlot<Rc<MountedWidget>>> = const { RefCell::new(WidgetSlot::new()) };
}

type Handler = Closure<dyn FnMut(Event)>;

struct Handlers {
    track_change: Handler,
    close_click: Handler,
    inside_click: Handler,
    outside_click: Handler,
}

struct MountedWidget {
    document: Document,
    element: HtmlElement,
    config: WidgetConfig,
    session: RefCell<WidgetSession>,
    handlers: RefCell<Option<Handlers>>,
}

impl MountedWidget {
    fn render(&self) -> Result<(), MountError> {
        let markup = render_session(&self.session.borrow(), &self.config);
        self.element.set_inner_html(&markup);
        self.bind_controls()
    }

    fn bind_controls(&self) -> Result<(), MountError> {
        let handlers = self.handlers.borrow();
        let Some(handlers) = handlers.as_ref() else {
            return Ok(());
        };

        if let Some(select) = self.element.query_selector(&format!("#{TRACK_SELECT_ID}"))? {
            let select: HtmlSelectElement = select
                .dyn_into()
                .map_err(|_| MountError::UnexpectedElement(TRACK_SELECT_ID))?;
            select.set_value(self.session.borrow().state().selected_track().as_str());
            select.set_onchange(Some(handlers.track_change.as_ref().unchecked_ref()));
        }

        if let Some(close) = self.element.query_selector(&format!("#{CLOSE_BUTTON_ID}"))? {
            let close: HtmlElement = close
                .dyn_into()
                .map_err(|_| MountError::UnexpectedElement(CLOSE_BUTTON_ID))?;
            close.set_onclick(Some(handlers.close_click.as_ref().unchecked_ref()));
        }

        Ok(())
    }

    fn listen(&self, handlers: Handlers) -> Result<(), MountError> {
        self.element.add_event_listener_with_callback(
            "click",
            handlers.inside_click.as_ref().unchecked_ref(),
        )?;
        self.document.add_event_listener_with_callback_and_bool(
            "click",
            handlers.outside_click.as_ref().unchecked_ref(),
            true,
        )?;
        *self.handlers.borrow_mut() = Some(handlers);
        Ok(())
    }

    /// Detaches the widget from the page. Handlers stay alive until the
    /// value itself is dropped.
    fn detach(&self) {
        if let Some(handlers) = self.handlers.borrow().as_ref() {
            let removed = self.document.remove_event_listener_with_callback_and_bool(
                "click",
                handlers.outside_click.as_ref().unchecked_ref(),
                true,
            );
            if let Err(err) = removed {
                debug!(?err, "outside click listener already gone");
            }
        }
        self.element.remove();
    }
}

fn handlers(id: MountId, widget: &Rc<MountedWidget>) -> Handlers {
    let weak = Rc::downgrade(widget);
    let track_change = Closure::wrap(Box::new(move |event: Event| {
        let Some(widget) = live(id, &weak) else {
            return;
        };
        let Some(select) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };
        widget
            .session
            .borrow_mut()
            .select_track(TrackName::new(select.value()));
        if let Err(err) = widget.render() {
            warn!(%err, "could not re-render widget");
        }
    }) as Box<dyn FnMut(Event)>);

    let close_click = Closure::wrap(Box::new(move |_event: Event| {
        unmount(id);
    }) as Box<dyn FnMut(Event)>);

    let inside_click = Closure::wrap(Box::new(move |event: Event| {
        event.stop_propagation();
    }) as Box<dyn FnMut(Event)>);

    let weak = Rc::downgrade(widget);
    let outside_click = Closure::wrap(Box::new(move |event: Event| {
        let Some(widget) = live(id, &weak) else {
            return;
        };
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok());
        if !widget.element.contains(target.as_ref()) {
            unmount(id);
        }
    }) as Box<dyn FnMut(Event)>);

    Handlers {
        track_change,
        close_click,
        inside_click,
        outside_click,
    }
}

/// The mounted widget behind `id`, if that mount is still the live one.
fn live(id: MountId, weak: &Weak<MountedWidget>) -> Option<Rc<MountedWidget>> {
    let current = SLOT.with(|slot| slot.borrow().is_current(id));
    if current { weak.upgrade() } else { None }
}

fn unmount(id: MountId) {
    if let Some(widget) = SLOT.with(|slot| slot.borrow_mut().take(id)) {
        info!(mount = id.value(), "widget removed");
        retire(widget);
    }
}

/// Detaches now and drops on the next tick, so a handler can remove its own
/// widget without freeing the closure it is running in.
fn retire(widget: Rc<MountedWidget>) {
    widget.detach();
    spawn_local(async move {
        drop(widget);
    });
}

async fn load_progress(id: MountId, weak: Weak<MountedWidget>) {
    let Some(widget) = live(id, &weak) else {
        return;
    };
    let source = widget.session.borrow().progress_source();
    drop(widget);
    let outcome = source.fetch_progress().await;

    let Some(widget) = live(id, &weak) else {
        debug!(mount = id.value(), "discarding progress for a replaced widget");
        return;
    };
    widget.session.borrow_mut().apply_fetch(outcome);
    if let Err(err) = widget.render() {
        warn!(%err, "could not render widget");
    }
}

fn mount(config_json: Option<&str>) -> Result<MountId, MountError> {
    let services =
        WidgetServices::odyssey(&Storage::local_storage(), ProgressClientConfig::default());
    mount_with(resolve_config(config_json), &services)
}

fn mount_with(config: WidgetConfig, services: &WidgetServices) -> Result<MountId, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let body = document.body().ok_or(MountError::NoBody)?;

    if let Some(previous) = SLOT.with(|slot| slot.borrow_mut().clear()) {
        retire(previous);
    }
    // Left behind by an earlier copy of the script.
    if let Some(stray) = document.get_element_by_id(WIDGET_ELEMENT_ID) {
        stray.remove();
    }

    let element: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(|_| MountError::UnexpectedElement(WIDGET_ELEMENT_ID))?;
    element.set_id(WIDGET_ELEMENT_ID);
    element.set_attribute("style", &WidgetStyles::from_config(&config).widget)?;

    let widget = Rc::new(MountedWidget {
        document,
        element,
        config,
        session: RefCell::new(services.start_session()),
        handlers: RefCell::new(None),
    });

    let (id, displaced) = SLOT.with(|slot| slot.borrow_mut().replace(Rc::clone(&widget)));
    if let Some(displaced) = displaced {
        retire(displaced);
    }

    let attached = widget
        .listen(handlers(id, &widget))
        .and_then(|()| body.append_child(&widget.element).map_err(MountError::from))
        .and_then(|_| widget.render());
    if let Err(err) = attached {
        unmount(id);
        return Err(err);
    }
    info!(mount = id.value(), "widget mounted");

    spawn_local(load_progress(id, Rc::downgrade(&widget)));
    Ok(id)
}

/// Mounts the progress widget, replacing any instance already on the page.
///
/// `config_json` is an optional JSON object of overrides over the built-in
/// configuration. Failures are logged; nothing is thrown to the page.
#[wasm_bindgen(js_name = createWidget)]
pub fn create_widget(config_json: Option<String>) {
    logging::init();
    if let Err(err) = mount(config_json.as_deref()) {
        error!(%err, "could not mount widget");
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    create_widget(None);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use odyssey_core::model::{Catalog, CourseRecord};
    use services::{ProgressFetchError, ProgressSource};
    use storage::TrackPreferenceRepository;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::Element;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    struct FixedProgress(Vec<CourseRecord>);

    #[async_trait(?Send)]
    impl ProgressSource for FixedProgress {
        async fn fetch_progress(&self) -> Result<Vec<CourseRecord>, ProgressFetchError> {
            Ok(self.0.clone())
        }
    }

    struct SlowProgress {
        millis: i32,
        records: Vec<CourseRecord>,
    }

    #[async_trait(?Send)]
    impl ProgressSource for SlowProgress {
        async fn fetch_progress(&self) -> Result<Vec<CourseRecord>, ProgressFetchError> {
            sleep(self.millis).await;
            Ok(self.records.clone())
        }
    }

    struct LoggedOut;

    #[async_trait(?Send)]
    impl ProgressSource for LoggedOut {
        async fn fetch_progress(&self) -> Result<Vec<CourseRecord>, ProgressFetchError> {
            Err(ProgressFetchError::MissingUser)
        }
    }

    async fn sleep(millis: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    fn services_with(storage: &Storage, source: impl ProgressSource + 'static) -> WidgetServices {
        WidgetServices::new(Arc::new(Catalog::odyssey().clone()), storage, Arc::new(source))
    }

    fn mount_fixed(storage: &Storage, records: Vec<CourseRecord>) -> MountId {
        let services = services_with(storage, FixedProgress(records));
        mount_with(WidgetConfig::default(), &services).unwrap()
    }

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn widget_element() -> Option<Element> {
        document().get_element_by_id(WIDGET_ELEMENT_ID)
    }

    fn by_id<T: JsCast>(id: &str) -> T {
        document().get_element_by_id(id).unwrap().dyn_into().unwrap()
    }

    fn current_mount() -> Option<MountId> {
        SLOT.with(|slot| slot.borrow().current_id())
    }

    fn reset() {
        if let Some(widget) = SLOT.with(|slot| slot.borrow_mut().clear()) {
            retire(widget);
        }
    }

    fn change_track(select: &HtmlSelectElement, track: &str) {
        select.set_value(track);
        select.dispatch_event(&Event::new("change").unwrap()).unwrap();
    }

    #[wasm_bindgen_test]
    async fn second_mount_replaces_the_first() {
        reset();
        let storage = Storage::in_memory();

        let first = mount_fixed(&storage, Vec::new());
        let first_element = widget_element().unwrap();
        let second = mount_fixed(&storage, Vec::new());
        sleep(10).await;

        assert_ne!(first, second);
        assert_eq!(current_mount(), Some(second));
        assert!(!first_element.is_connected());
        let current = widget_element().unwrap();
        assert!(current.is_connected());
        assert!(!current.is_same_node(Some(first_element.as_ref())));
        reset();
    }

    #[wasm_bindgen_test]
    async fn outside_click_removes_widget_but_inside_click_does_not() {
        reset();
        let storage = Storage::in_memory();
        let id = mount_fixed(&storage, Vec::new());
        sleep(10).await;

        let inside: HtmlElement = by_id(TRACK_SELECT_ID);
        inside.click();
        by_id::<HtmlElement>(WIDGET_ELEMENT_ID).click();
        assert_eq!(current_mount(), Some(id));
        assert!(widget_element().is_some());

        document().body().unwrap().click();
        assert_eq!(current_mount(), None);
        assert!(widget_element().is_none());
        reset();
    }

    #[wasm_bindgen_test]
    async fn close_button_removes_widget() {
        reset();
        let storage = Storage::in_memory();
        mount_fixed(&storage, vec![CourseRecord::enrolled("lift-off-part1/v2", "2024-01-01")]);
        sleep(10).await;

        by_id::<HtmlElement>(CLOSE_BUTTON_ID).click();
        assert_eq!(current_mount(), None);
        assert!(widget_element().is_none());
        reset();
    }

    #[wasm_bindgen_test]
    async fn track_change_rebinds_the_new_selector_and_persists() {
        reset();
        let storage = Storage::in_memory();
        mount_fixed(&storage, Vec::new());
        sleep(10).await;

        let before: HtmlSelectElement = by_id(TRACK_SELECT_ID);
        change_track(&before, "Backend");

        let after: HtmlSelectElement = by_id(TRACK_SELECT_ID);
        assert!(!after.is_same_node(Some(before.as_ref())));
        assert_eq!(after.value(), "Backend");
        assert!(after.onchange().is_some());
        assert_eq!(
            storage.preferences.load_selected_track().unwrap().as_deref(),
            Some("Backend")
        );

        change_track(&after, "iOS");
        assert_eq!(by_id::<HtmlSelectElement>(TRACK_SELECT_ID).value(), "iOS");
        assert_eq!(
            storage.preferences.load_selected_track().unwrap().as_deref(),
            Some("iOS")
        );
        reset();
    }

    #[wasm_bindgen_test]
    async fn progress_for_a_replaced_mount_is_discarded() {
        reset();
        let storage = Storage::in_memory();
        let slow = SlowProgress {
            millis: 30,
            records: vec![CourseRecord::completed(
                "lift-off-part1/v2",
                "2024-01-01",
                "2024-01-05",
            )],
        };
        mount_with(WidgetConfig::default(), &services_with(&storage, slow)).unwrap();
        sleep(5).await;

        let logged_out = services_with(&storage, LoggedOut);
        let second = mount_with(WidgetConfig::default(), &logged_out).unwrap();
        sleep(80).await;

        assert_eq!(current_mount(), Some(second));
        let html = widget_element().unwrap().inner_html();
        assert!(
            html.contains(&WidgetConfig::default().text.login_prompt),
            "expected login prompt in {html}"
        );
        assert!(!html.contains(TRACK_SELECT_ID), "stale progress rendered: {html}");
        reset();
    }
}
