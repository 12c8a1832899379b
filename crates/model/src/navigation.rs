use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A place on the page the widget can send the visitor to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTarget {
    /// The root of the site.
    Home,
    /// The features section.
    Features,
    /// The footer, which holds the contact form.
    Contact,
}

impl NavigationTarget {
    /// Returns the location this target points at, relative to the site
    /// root.
    #[inline]
    pub fn href(&self) -> &'static str {
        match self {
            NavigationTarget::Home => "/",
            NavigationTarget::Features => "#features",
            NavigationTarget::Contact => "#footer",
        }
    }
}

impl Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

/// Something that can change the page location.
///
/// A navigation is a full, irreversible location change, so the widget
/// calls this exactly once per detected trigger and never retries.
pub trait Navigator: Send + Sync {
    /// Moves the page to `target`.
    fn navigate(&self, target: NavigationTarget);
}

impl<F: Fn(NavigationTarget) + Send + Sync> Navigator for F {
    #[inline]
    fn navigate(&self, target: NavigationTarget) {
        self(target)
    }
}
