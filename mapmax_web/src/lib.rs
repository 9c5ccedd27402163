// Copyright 2026 the Mapmax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mapmax_web --heading-base-level=0

//! Web DOM adapter for the mapmax maximize capability.
//!
//! This crate binds the [`mapmax_surface`] traits to real DOM objects when
//! targeting `wasm32`:
//!
//! - [`WebMapSurface`] implements [`MapSurface`] over the widget's container
//!   element, the document body, and the window scroll position. Style
//!   snapshots are the element's whole `style` attribute
//!   (`getAttribute`/`setAttribute`, `removeAttribute` when absent), classes
//!   go through `classList`, and scroll offsets prefer the window's page
//!   offsets with a fallback to the root element's scroll properties for
//!   older environments.
//! - [`WebMaximize`] is the install glue: it builds the button control's DOM
//!   when asked to, wires its click to the controller (suppressing the
//!   anchor's default navigation), and manages the document-body `keyup`
//!   listener: attached only while maximized, detached on restore, so it
//!   can never fire in the normal state.
//!
//! # Usage
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn attach(
//!     container: web_sys::Element,
//! ) -> Result<mapmax_web::WebMaximize, wasm_bindgen::JsValue> {
//!     let options = mapmax_control::MaximizeOptions::default().with_maximize_control(true);
//!     mapmax_web::WebMaximize::install(container, options)
//! }
//! ```
//!
//! Keep the returned [`WebMaximize`] alive for the lifetime of the widget:
//! dropping it detaches the listeners it created.
//!
//! The host widget is told to recompute its size by a bubbling
//! [`RESIZE_EVENT`] DOM event dispatched on the container after every
//! transition.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
use alloc::format;
#[cfg(target_arch = "wasm32")]
use alloc::rc::Rc;
#[cfg(target_arch = "wasm32")]
use core::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use core::fmt;

#[cfg(target_arch = "wasm32")]
use kurbo::Point;
#[cfg(target_arch = "wasm32")]
use mapmax_control::{
    ListenerId, MaximizeButton, MaximizeController, MaximizeOptions, MaximizedStateChanged,
};
#[cfg(target_arch = "wasm32")]
use mapmax_surface::{ControlChrome, ControlCorner, ControlDesc, InlineStyle, MapSurface};
#[cfg(target_arch = "wasm32")]
use ui_events::keyboard::{Key, KeyState, NamedKey};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, Element, HtmlElement, Window};

/// DOM event dispatched on the container after every transition, bubbling,
/// so the host widget (or the page) can recompute sizes.
pub const RESIZE_EVENT: &str = "mapmaxresize";

/// [`MapSurface`] over real DOM objects.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct WebMapSurface {
    window: Window,
    document: Document,
    body: HtmlElement,
    container: Element,
}

#[cfg(target_arch = "wasm32")]
impl WebMapSurface {
    /// Wraps the widget container, resolving the window, document, and body.
    pub fn new(container: Element) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        Ok(Self {
            window,
            document,
            body,
            container,
        })
    }

    /// The widget container element.
    pub fn container(&self) -> &Element {
        &self.container
    }

    fn style_of(element: &Element) -> Option<InlineStyle> {
        element.get_attribute("style").map(InlineStyle::from)
    }

    fn apply_style(element: &Element, style: Option<&InlineStyle>) {
        match style {
            Some(style) => {
                let _ = element.set_attribute("style", style.as_str());
            }
            None => {
                let _ = element.remove_attribute("style");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl MapSurface for WebMapSurface {
    fn container_style(&self) -> Option<InlineStyle> {
        Self::style_of(&self.container)
    }

    fn set_container_style(&mut self, style: Option<&InlineStyle>) {
        Self::apply_style(&self.container, style);
    }

    fn body_style(&self) -> Option<InlineStyle> {
        Self::style_of(&self.body)
    }

    fn set_body_style(&mut self, style: Option<&InlineStyle>) {
        Self::apply_style(&self.body, style);
    }

    fn scroll_offset(&self) -> Point {
        match (self.window.page_x_offset(), self.window.page_y_offset()) {
            (Ok(x), Ok(y)) => Point::new(x, y),
            _ => {
                // Older environments lack the window page offsets.
                log::debug!("mapmax: window page offsets unavailable, using root element scroll");
                match self.document.document_element() {
                    Some(root) => {
                        Point::new(f64::from(root.scroll_left()), f64::from(root.scroll_top()))
                    }
                    None => Point::ZERO,
                }
            }
        }
    }

    fn scroll_to(&mut self, offset: Point) {
        self.window.scroll_to_with_x_and_y(offset.x, offset.y);
    }

    fn add_container_class(&mut self, name: &str) {
        let _ = self.container.class_list().add_1(name);
    }

    fn remove_container_class(&mut self, name: &str) {
        let _ = self.container.class_list().remove_1(name);
    }

    fn invalidate_size(&mut self) {
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        if let Ok(event) = web_sys::Event::new_with_event_init_dict(RESIZE_EVENT, &init) {
            let _ = self.container.dispatch_event(&event);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl ControlChrome for WebMapSurface {
    /// Builds the control's DOM inside the container. Activation wiring is
    /// left to the caller; [`WebMaximize::install`] wires it for you.
    fn mount_control(&mut self, corner: ControlCorner, desc: &ControlDesc) {
        if let Err(err) = build_control_dom(&self.document, &self.container, corner, desc) {
            log::warn!("mapmax: failed to mount control: {err:?}");
        }
    }
}

/// Creates the control container and its anchor button, appends them to the
/// widget container, and returns the anchor.
#[cfg(target_arch = "wasm32")]
fn build_control_dom(
    document: &Document,
    container: &Element,
    corner: ControlCorner,
    desc: &ControlDesc,
) -> Result<Element, JsValue> {
    let control = document.create_element("div")?;
    control.set_class_name(&format!(
        "{} mapmax-corner-{}",
        desc.container_class,
        corner.as_str()
    ));

    let button = document.create_element("a")?;
    button.set_class_name(&desc.button_class);
    button.set_attribute("href", "#")?;
    button.set_text_content(Some(desc.glyph.as_str()));
    if let Some(html) = button.dyn_ref::<HtmlElement>() {
        html.set_title(&desc.title);
    }

    control.append_child(&button)?;
    container.append_child(&control)?;
    Ok(button)
}

#[cfg(target_arch = "wasm32")]
struct Shared {
    surface: WebMapSurface,
    controller: MaximizeController,
}

#[cfg(target_arch = "wasm32")]
struct KeyupBinding {
    closure: Option<Closure<dyn FnMut(web_sys::KeyboardEvent)>>,
    attached: bool,
}

/// Attaches or detaches the body `keyup` listener to match the current state.
#[cfg(target_arch = "wasm32")]
fn sync_keyup(body: &HtmlElement, keyup: &Rc<RefCell<KeyupBinding>>, maximized: bool) {
    let mut binding = keyup.borrow_mut();
    let Some(closure) = &binding.closure else {
        return;
    };
    let function: &js_sys::Function = closure.as_ref().unchecked_ref();
    if maximized && !binding.attached {
        let _ = body.add_event_listener_with_callback("keyup", function);
        binding.attached = true;
    } else if !maximized && binding.attached {
        let _ = body.remove_event_listener_with_callback("keyup", function);
        binding.attached = false;
    }
}

/// Installed maximize capability for one widget container.
///
/// Owns the DOM wiring: the optional button control's click listener and the
/// body `keyup` listener used for Escape. Every state transition, whether
/// from the button, from Escape, or from the methods here, keeps the `keyup` listener
/// in sync with the maximized state. Dropping the handle detaches whatever
/// is still attached.
#[cfg(target_arch = "wasm32")]
pub struct WebMaximize {
    shared: Rc<RefCell<Shared>>,
    body: HtmlElement,
    keyup: Rc<RefCell<KeyupBinding>>,
    button: Option<(Element, Closure<dyn FnMut(web_sys::MouseEvent)>)>,
}

#[cfg(target_arch = "wasm32")]
impl WebMaximize {
    /// Installs the capability on a widget container.
    ///
    /// When [`maximize_control`](MaximizeOptions::maximize_control) is set,
    /// the button control's DOM is created inside the container and its click
    /// both toggles the state and suppresses the anchor's default navigation.
    pub fn install(container: Element, options: MaximizeOptions) -> Result<Self, JsValue> {
        let surface = WebMapSurface::new(container)?;
        let body = surface.body.clone();
        let document = surface.document.clone();

        let build_button = options.maximize_control;
        let control_options = options.control.clone();
        let controller = MaximizeController::new(options);

        let shared = Rc::new(RefCell::new(Shared {
            surface,
            controller,
        }));
        let keyup = Rc::new(RefCell::new(KeyupBinding {
            closure: None,
            attached: false,
        }));

        {
            let shared = Rc::clone(&shared);
            let keyup_handle = Rc::clone(&keyup);
            let body = body.clone();
            let closure =
                Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |event: web_sys::KeyboardEvent| {
                    if event.key() != "Escape" {
                        return;
                    }
                    let maximized = {
                        let mut shared = shared.borrow_mut();
                        let Shared {
                            surface,
                            controller,
                        } = &mut *shared;
                        controller.handle_key(
                            surface,
                            &Key::Named(NamedKey::Escape),
                            KeyState::Up,
                        );
                        controller.is_maximized()
                    };
                    sync_keyup(&body, &keyup_handle, maximized);
                });
            keyup.borrow_mut().closure = Some(closure);
        }

        let button = if build_button {
            let control = MaximizeButton::new(control_options);
            let anchor = {
                let shared = shared.borrow();
                build_control_dom(
                    &document,
                    &shared.surface.container,
                    control.corner(),
                    &control.desc(),
                )?
            };

            let closure = {
                let shared = Rc::clone(&shared);
                let keyup_handle = Rc::clone(&keyup);
                let body = body.clone();
                Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
                    let maximized = {
                        let mut shared = shared.borrow_mut();
                        let Shared {
                            surface,
                            controller,
                        } = &mut *shared;
                        controller.toggle_maximized(surface);
                        controller.is_maximized()
                    };
                    event.prevent_default();
                    sync_keyup(&body, &keyup_handle, maximized);
                })
            };
            anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            Some((anchor, closure))
        } else {
            None
        };

        Ok(Self {
            shared,
            body,
            keyup,
            button,
        })
    }

    /// Returns `true` while the widget is maximized.
    pub fn is_maximized(&self) -> bool {
        self.shared.borrow().controller.is_maximized()
    }

    /// Maximizes the widget. No-op if already maximized.
    pub fn maximize(&mut self) {
        self.transition(|controller, surface| controller.maximize(surface));
    }

    /// Restores the widget's embedded layout. No-op if not maximized.
    pub fn restore(&mut self) {
        self.transition(|controller, surface| controller.restore(surface));
    }

    /// Restores when maximized, maximizes otherwise.
    pub fn toggle_maximized(&mut self) {
        self.transition(|controller, surface| controller.toggle_maximized(surface));
    }

    /// Subscribes a listener to [`MaximizedStateChanged`] notifications.
    pub fn on_state_change(
        &mut self,
        listener: impl FnMut(&MaximizedStateChanged) + 'static,
    ) -> ListenerId {
        self.shared.borrow_mut().controller.on_state_change(listener)
    }

    /// Removes a previously subscribed listener.
    pub fn remove_state_change_listener(&mut self, id: ListenerId) -> bool {
        self.shared
            .borrow_mut()
            .controller
            .remove_state_change_listener(id)
    }

    fn transition(&mut self, f: impl FnOnce(&mut MaximizeController, &mut WebMapSurface)) {
        let maximized = {
            let mut shared = self.shared.borrow_mut();
            let Shared {
                surface,
                controller,
            } = &mut *shared;
            f(controller, surface);
            controller.is_maximized()
        };
        sync_keyup(&self.body, &self.keyup, maximized);
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for WebMaximize {
    fn drop(&mut self) {
        sync_keyup(&self.body, &self.keyup, false);
        if let Some((anchor, closure)) = &self.button {
            let _ = anchor
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl fmt::Debug for WebMaximize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebMaximize")
            .field("maximized", &self.is_maximized())
            .field("has_button", &self.button.is_some())
            .finish()
    }
}
