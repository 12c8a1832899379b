use std::sync::{Arc, Mutex};

use medscan_chat_model::{NavigationTarget, Navigator};
use url::Url;

type ChangeCallback = Arc<dyn Fn(&Url) + Send + Sync>;

/// The location of the page hosting the widget.
///
/// Acts as the widget's navigator: going home loads the site root, going
/// to a section replaces the fragment of the current location, just like
/// assigning `#features` to a browser's location would. Clones share the
/// same location.
#[derive(Clone)]
pub struct PageLocation {
    current: Arc<Mutex<Url>>,
    on_change: Option<ChangeCallback>,
}

impl PageLocation {
    /// Creates a location that starts at `base`.
    pub fn new(base: Url) -> Self {
        Self {
            current: Arc::new(Mutex::new(base)),
            on_change: None,
        }
    }

    /// Attaches a callback to be invoked after every navigation.
    #[inline]
    pub fn on_change(
        mut self,
        on_change: impl Fn(&Url) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    /// Returns the current location.
    pub fn href(&self) -> String {
        match self.current.lock() {
            Ok(current) => current.to_string(),
            Err(poisoned) => poisoned.into_inner().to_string(),
        }
    }
}

impl Navigator for PageLocation {
    fn navigate(&self, target: NavigationTarget) {
        let mut current = match self.current.lock() {
            Ok(current) => current,
            Err(poisoned) => poisoned.into_inner(),
        };
        match target {
            NavigationTarget::Home => match current.join(target.href()) {
                Ok(root) => *current = root,
                Err(err) => {
                    warn!("cannot resolve the site root: {err}");
                    return;
                }
            },
            NavigationTarget::Features | NavigationTarget::Contact => {
                let fragment = target.href().trim_start_matches('#');
                current.set_fragment(Some(fragment));
            }
        }
        debug!(href = %*current, "location changed");

        let changed = current.clone();
        drop(current);
        if let Some(on_change) = &self.on_change {
            on_change(&changed);
        }
    }
}
