use log::debug;
use std::cell::Cell;

use super::attributes::{AttributeSource, PreviewAttributes};
use super::content::PreviewContent;
use super::error::PreviewError;
use super::event::{DispatchOptions, PodcastClicked, CLICK_DISPATCH};

/// The element side of a card: its attributes, its isolated fragment, its
/// click subscription and its event dispatch.
///
/// Methods take `&self`: a listener for the dispatched click may detach the
/// card before `dispatch` returns.
pub trait CardHost: AttributeSource {
    /// Writes a render pass into the fragment. Only slot content changes.
    fn paint(&self, content: &PreviewContent) -> Result<(), PreviewError>;

    /// Subscribes to clicks on the element itself. Each click must end up in
    /// [`PreviewController::handle_click`].
    fn listen(&self) -> Result<(), PreviewError>;

    fn unlisten(&self) -> Result<(), PreviewError>;

    fn dispatch(&self, event: &PodcastClicked, options: DispatchOptions) -> Result<(), PreviewError>;
}

/// Drives a card through attach/detach and turns clicks into
/// `podcast-clicked` notifications.
pub struct PreviewController<H: CardHost> {
    host: H,
    attached: Cell<bool>,
}

impl<H: CardHost> PreviewController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            attached: Cell::new(false),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Reads the live attributes and rewrites the fragment's slots.
    pub fn render(&self) -> Result<PreviewContent, PreviewError> {
        let attrs = PreviewAttributes::read(&self.host);
        let content = PreviewContent::from_attributes(&attrs);
        self.host.paint(&content)?;
        Ok(content)
    }

    /// On-attach hook. Renders before subscribing so a click never sees an
    /// empty card. A second call while attached re-renders only.
    pub fn connected(&self) -> Result<(), PreviewError> {
        self.render()?;
        if !self.attached.get() {
            self.host.listen()?;
            self.attached.set(true);
            debug!("podcast preview attached");
        }
        Ok(())
    }

    /// On-detach hook. No-op when the card was never attached.
    pub fn disconnected(&self) -> Result<(), PreviewError> {
        if !self.attached.get() {
            return Ok(());
        }
        self.host.unlisten()?;
        self.attached.set(false);
        debug!("podcast preview detached");
        Ok(())
    }

    /// Emits `podcast-clicked` for the current `data-id`. Detached cards
    /// emit nothing.
    pub fn handle_click(&self) -> Result<Option<PodcastClicked>, PreviewError> {
        if !self.attached.get() {
            return Ok(None);
        }
        let event = PodcastClicked::from_source(&self.host);
        self.host.dispatch(&event, CLICK_DISPATCH)?;
        Ok(Some(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    /// In-memory host. `observed` plays the part of a listener on an
    /// ancestor outside the shadow root; `on_dispatch` runs inside that
    /// listener.
    #[derive(Default)]
    struct MemoryHost {
        attrs: RefCell<BTreeMap<String, String>>,
        fragment: RefCell<Option<PreviewContent>>,
        paints: Cell<usize>,
        listening: Cell<bool>,
        listen_calls: Cell<usize>,
        observed: RefCell<Vec<PodcastClicked>>,
        on_dispatch: RefCell<Option<Box<dyn Fn()>>>,
    }

    impl MemoryHost {
        fn with(attrs: &[(&str, &str)]) -> Self {
            Self {
                attrs: RefCell::new(
                    attrs
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                ),
                ..Default::default()
            }
        }

        fn set(&self, name: &str, value: &str) {
            self.attrs.borrow_mut().insert(name.to_string(), value.to_string());
        }

        fn text_content(&self) -> String {
            self.fragment
                .borrow()
                .as_ref()
                .map(PreviewContent::text_content)
                .unwrap_or_default()
        }
    }

    impl AttributeSource for MemoryHost {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs.borrow().get(name).cloned()
        }
    }

    impl CardHost for MemoryHost {
        fn paint(&self, content: &PreviewContent) -> Result<(), PreviewError> {
            *self.fragment.borrow_mut() = Some(content.clone());
            self.paints.set(self.paints.get() + 1);
            Ok(())
        }

        fn listen(&self) -> Result<(), PreviewError> {
            assert!(self.fragment.borrow().is_some(), "listening before render");
            self.listening.set(true);
            self.listen_calls.set(self.listen_calls.get() + 1);
            Ok(())
        }

        fn unlisten(&self) -> Result<(), PreviewError> {
            self.listening.set(false);
            Ok(())
        }

        fn dispatch(&self, event: &PodcastClicked, options: DispatchOptions) -> Result<(), PreviewError> {
            if options.bubbles && options.composed {
                self.observed.borrow_mut().push(event.clone());
            }
            if let Some(hook) = self.on_dispatch.borrow().as_ref() {
                hook();
            }
            Ok(())
        }
    }

    // A click only reaches the controller through a live subscription.
    fn user_click(card: &PreviewController<MemoryHost>) {
        if card.host().listening.get() {
            card.handle_click().unwrap();
        }
    }

    fn card() -> PreviewController<MemoryHost> {
        PreviewController::new(MemoryHost::with(&[
            ("title", "Serial"),
            ("seasons", "2"),
            ("genres", "Drama, Crime,Thriller"),
            ("last-updated", "2022-11-03"),
            ("data-id", "42"),
        ]))
    }

    #[test]
    fn test_construction_reads_nothing() {
        let card = card();
        assert!(!card.is_attached());
        assert!(card.host().fragment.borrow().is_none());
    }

    #[test]
    fn test_render_is_idempotent() {
        let card = card();
        card.render().unwrap();
        let first = card.host().text_content();
        card.render().unwrap();
        assert_eq!(card.host().text_content(), first);
        assert_eq!(card.host().paints.get(), 2);
    }

    #[test]
    fn test_render_reads_live_attributes() {
        let card = card();
        card.render().unwrap();
        card.host().set("seasons", "1");
        let content = card.render().unwrap();
        assert_eq!(content.meta, "1 season");
    }

    #[test]
    fn test_connected_renders_then_listens() {
        let card = card();
        card.connected().unwrap();

        let fragment = card.host().fragment.borrow().clone().unwrap();
        assert_eq!(fragment.meta, "2 seasons");
        assert_eq!(fragment.tags, vec!["Drama", "Crime", "Thriller"]);
        assert_eq!(fragment.updated, "Updated: November 3, 2022");
        assert!(card.host().listening.get());
        assert!(card.is_attached());
    }

    #[test]
    fn test_click_while_attached_emits_once() {
        let card = card();
        card.connected().unwrap();
        user_click(&card);

        let observed = card.host().observed.borrow();
        assert_eq!(observed.len(), 1);
        assert_eq!(observed[0], PodcastClicked { id: Some("42".to_string()) });
    }

    #[test]
    fn test_click_reads_id_at_click_time() {
        let card = card();
        card.connected().unwrap();
        card.host().set("data-id", "7");
        let event = card.handle_click().unwrap();
        assert_eq!(event, Some(PodcastClicked { id: Some("7".to_string()) }));
    }

    #[test]
    fn test_click_without_id() {
        let card = PreviewController::new(MemoryHost::with(&[("title", "Anonymous")]));
        card.connected().unwrap();
        assert_eq!(card.handle_click().unwrap(), Some(PodcastClicked { id: None }));
    }

    #[test]
    fn test_detach_stops_and_reattach_restores_clicks() {
        let card = card();
        card.connected().unwrap();
        card.disconnected().unwrap();

        user_click(&card);
        assert_eq!(card.handle_click().unwrap(), None);
        assert!(card.host().observed.borrow().is_empty());

        card.connected().unwrap();
        user_click(&card);
        assert_eq!(card.host().observed.borrow().len(), 1);
    }

    #[test]
    fn test_listener_detaching_card_during_click() {
        // shared the same way the browser element shares its controller
        let card = Rc::new(card());
        let weak = Rc::downgrade(&card);
        *card.host().on_dispatch.borrow_mut() = Some(Box::new(move || {
            if let Some(card) = weak.upgrade() {
                card.disconnected().unwrap();
            }
        }));

        card.connected().unwrap();
        user_click(&card);

        assert_eq!(card.host().observed.borrow().len(), 1);
        assert!(!card.is_attached());
        assert!(!card.host().listening.get());
        user_click(&card);
        assert_eq!(card.host().observed.borrow().len(), 1);
    }

    #[test]
    fn test_disconnect_without_connect_is_noop() {
        let card = card();
        card.disconnected().unwrap();
        card.disconnected().unwrap();
        assert!(!card.is_attached());
        assert!(!card.host().listening.get());
    }

    #[test]
    fn test_double_connect_subscribes_once() {
        let card = card();
        card.connected().unwrap();
        card.connected().unwrap();
        assert_eq!(card.host().listen_calls.get(), 1);
        assert_eq!(card.host().paints.get(), 2);

        user_click(&card);
        assert_eq!(card.host().observed.borrow().len(), 1);
    }
}
