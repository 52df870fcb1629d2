use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use js_sys::Function;
use log::error;
use serde::Serialize;
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};
use web_sys::{
    CustomEvent, CustomEventInit, Document, Element, Event, HtmlElement, HtmlImageElement,
    HtmlTemplateElement, Node, ShadowRoot, ShadowRootInit, ShadowRootMode,
};

use super::attributes::AttributeSource;
use super::content::PreviewContent;
use super::controller::{CardHost, PreviewController};
use super::error::PreviewError;
use super::event::{DispatchOptions, PodcastClicked, PODCAST_CLICKED};
use super::registry::{define_once, TAG_NAME};
use super::template::{Slot, TAG_CLASS, TEMPLATE_HTML};

// Custom elements have to be real JS classes extending HTMLElement. The class
// only forwards its lifecycle callbacks to the Rust object built by `create`.
#[wasm_bindgen(inline_js = r#"
export function define_custom_element(name, create) {
  customElements.define(name, class extends HTMLElement {
    constructor() {
      super();
      this._card = create(this);
    }
    connectedCallback() {
      this._card.connected();
    }
    disconnectedCallback() {
      this._card.disconnected();
    }
  });
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_custom_element(name: &str, create: &Function) -> Result<(), JsValue>;
}

thread_local! {
    static TEMPLATE: RefCell<Option<HtmlTemplateElement>> = const { RefCell::new(None) };
}

fn document() -> Result<Document, PreviewError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| PreviewError::Dom("no document available".to_string()))
}

/// Deep clone of the shared `<template>` content, built on first use.
fn clone_template() -> Result<Node, PreviewError> {
    TEMPLATE.with(|cell| {
        let mut cached = cell.borrow_mut();
        let template = match cached.as_ref() {
            Some(template) => template.clone(),
            None => {
                let template = document()?
                    .create_element("template")?
                    .dyn_into::<HtmlTemplateElement>()
                    .map_err(|_| PreviewError::Dom("<template> is not supported".to_string()))?;
                template.set_inner_html(&TEMPLATE_HTML);
                *cached = Some(template.clone());
                template
            }
        };
        Ok(template.content().clone_node_with_deep(true)?)
    })
}

fn dispatch_on(
    target: &HtmlElement,
    event: &PodcastClicked,
    options: DispatchOptions,
) -> Result<(), PreviewError> {
    // json_compatible turns a missing id into null instead of undefined
    let detail = event
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| PreviewError::Dom(e.to_string()))?;

    let init = CustomEventInit::new();
    init.set_bubbles(options.bubbles);
    init.set_composed(options.composed);
    init.set_detail(&detail);

    let custom = CustomEvent::new_with_event_init_dict(PODCAST_CLICKED, &init)?;
    target.dispatch_event(&custom)?;
    Ok(())
}

/// A live `<podcast-preview>` element with its open shadow root.
pub struct DomHost {
    element: HtmlElement,
    shadow: ShadowRoot,
    // bound once per element and only ever added/removed, never dropped while
    // the element lives, so a click can detach the card mid-dispatch
    on_click: RefCell<Option<Closure<dyn FnMut(Event)>>>,
    listening: Cell<bool>,
}

impl DomHost {
    pub fn new(element: HtmlElement) -> Result<Self, PreviewError> {
        let shadow = element.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?;
        shadow.append_child(&clone_template()?)?;
        let host = Self {
            element,
            shadow,
            on_click: RefCell::new(None),
            listening: Cell::new(false),
        };
        for slot in Slot::ALL {
            host.slot(slot)?;
        }
        Ok(host)
    }

    fn slot(&self, slot: Slot) -> Result<Element, PreviewError> {
        self.shadow
            .query_selector(slot.selector())?
            .ok_or(PreviewError::MissingSlot(slot.selector()))
    }

    /// Hands every click on the element to `card` for as long as it lives.
    fn bind(card: &Rc<PreviewController<DomHost>>) {
        let weak: Weak<PreviewController<DomHost>> = Rc::downgrade(card);
        let on_click = Closure::wrap(Box::new(move |_event: Event| {
            let Some(card) = weak.upgrade() else {
                return;
            };
            if let Err(e) = card.handle_click() {
                error!("failed to dispatch {}: {}", PODCAST_CLICKED, e);
            }
        }) as Box<dyn FnMut(_)>);
        *card.host().on_click.borrow_mut() = Some(on_click);
    }
}

impl AttributeSource for DomHost {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }
}

impl CardHost for DomHost {
    fn paint(&self, content: &PreviewContent) -> Result<(), PreviewError> {
        let image = self
            .slot(Slot::Image)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| PreviewError::MissingSlot(Slot::Image.selector()))?;
        image.set_src(&content.image_src);
        image.set_alt(&content.image_alt);

        self.slot(Slot::Title)?.set_text_content(Some(content.title.as_str()));
        self.slot(Slot::Meta)?.set_text_content(Some(content.meta.as_str()));
        self.slot(Slot::Updated)?.set_text_content(Some(content.updated.as_str()));

        let tags = self.slot(Slot::Tags)?;
        tags.set_text_content(None);
        let document = document()?;
        for tag in &content.tags {
            let chip = document.create_element("span")?;
            chip.set_class_name(TAG_CLASS);
            chip.set_text_content(Some(tag.as_str()));
            tags.append_child(&chip)?;
        }
        Ok(())
    }

    fn listen(&self) -> Result<(), PreviewError> {
        if self.listening.get() {
            return Ok(());
        }
        let on_click = self.on_click.borrow();
        let on_click = on_click
            .as_ref()
            .ok_or_else(|| PreviewError::Dom("click handler not bound".to_string()))?;
        self.element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        self.listening.set(true);
        Ok(())
    }

    fn unlisten(&self) -> Result<(), PreviewError> {
        if !self.listening.get() {
            return Ok(());
        }
        if let Some(on_click) = self.on_click.borrow().as_ref() {
            self.element
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        }
        self.listening.set(false);
        Ok(())
    }

    fn dispatch(&self, event: &PodcastClicked, options: DispatchOptions) -> Result<(), PreviewError> {
        dispatch_on(&self.element, event, options)
    }
}

/// The Rust half of a `<podcast-preview>` element, held by its JS class.
#[wasm_bindgen]
pub struct PodcastPreviewElement {
    card: Rc<PreviewController<DomHost>>,
}

impl PodcastPreviewElement {
    fn new(element: HtmlElement) -> Result<Self, PreviewError> {
        let card = Rc::new(PreviewController::new(DomHost::new(element)?));
        DomHost::bind(&card);
        Ok(Self { card })
    }
}

#[wasm_bindgen]
impl PodcastPreviewElement {
    pub fn connected(&self) {
        if let Err(e) = self.card.connected() {
            error!("<{}> failed to attach: {}", TAG_NAME, e);
        }
    }

    pub fn disconnected(&self) {
        if let Err(e) = self.card.disconnected() {
            error!("<{}> failed to detach: {}", TAG_NAME, e);
        }
    }

    pub fn render(&self) {
        if let Err(e) = self.card.render() {
            error!("<{}> failed to render: {}", TAG_NAME, e);
        }
    }
}

/// Registers `<podcast-preview>` with the window's custom element registry.
/// Later calls, and calls after another bundle already defined the tag, are
/// no-ops.
pub fn define_podcast_preview() -> Result<bool, PreviewError> {
    define_once(TAG_NAME, || {
        let registry = web_sys::window()
            .ok_or_else(|| PreviewError::Registration("no window available".to_string()))?
            .custom_elements();
        if !registry.get(TAG_NAME).is_undefined() {
            return Ok(());
        }

        let create = Closure::wrap(Box::new(|element: HtmlElement| -> Result<JsValue, JsValue> {
            Ok(PodcastPreviewElement::new(element)?.into())
        }) as Box<dyn Fn(HtmlElement) -> Result<JsValue, JsValue>>);

        define_custom_element(TAG_NAME, create.as_ref().unchecked_ref())
            .map_err(|e| PreviewError::Registration(format!("{:?}", e)))?;

        // the element class keeps calling `create` for the life of the page
        create.forget();
        Ok(())
    })
}
