use scraper::Html;

use crate::{loader::NavbarLoader, outcome::Outcome, source::FragmentSource};

/// A page whose document has been fully parsed, waiting for its load-ready event.
pub struct Page {
    document: Html,
    ready_fired: bool,
}

impl Page {
    pub fn parse(markup: &str) -> Self {
        Self {
            document: Html::parse_document(markup),
            ready_fired: false,
        }
    }

    /// Fire the load-ready event, handing the document over to `loader`.
    ///
    /// A document finishes parsing only once:
    /// only the first call runs the loader, later ones return `None`.
    pub async fn dispatch_load_ready<S: FragmentSource>(
        &mut self,
        loader: &NavbarLoader<S>,
    ) -> Option<Outcome> {
        if self.ready_fired {
            log::debug!("Load-ready already fired for this page");
            return None;
        }
        self.ready_fired = true;
        Some(loader.on_load_ready(&mut self.document).await)
    }

    /// Serialize the current state of the document.
    pub fn html(&self) -> String {
        self.document.html()
    }
}
