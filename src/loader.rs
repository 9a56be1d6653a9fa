use scraper::Html;

use crate::{
    dom::{ANCHOR_ID, Insertion, Placement, find_anchor, insert_navbar},
    error::LoadError,
    outcome::Outcome,
    source::{FragmentSource, NAVBAR_PATH},
};

/// Fetches the shared navbar from a [`FragmentSource`] and splices it into documents.
///
/// There is no retry, no caching and no deduplication:
/// every call to [`NavbarLoader::on_load_ready`] fetches and inserts once more.
pub struct NavbarLoader<S> {
    source: S,
}

impl<S: FragmentSource> NavbarLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load the navbar into `doc`, whose initial parsing is complete.
    ///
    /// Any failure is logged once and reported in the returned [`Outcome`];
    /// `doc` is then left untouched.
    pub async fn on_load_ready(&self, doc: &mut Html) -> Outcome {
        log::info!("DOM fully loaded, starting navbar load...");
        match self.load(doc).await {
            Ok(insertion) => Outcome::Inserted(insertion),
            Err(err) => {
                log::error!("Error loading navbar: {err}");
                Outcome::Failed(err)
            }
        }
    }

    async fn load(&self, doc: &mut Html) -> Result<Insertion, LoadError> {
        let markup = self.source.fetch(NAVBAR_PATH).await?;
        log::trace!("Navbar HTML fetched: {markup}");
        if find_anchor(doc).is_none() {
            log::info!("#{ANCHOR_ID} not found, inserting at body start...");
        }
        let insertion = insert_navbar(doc, &markup)?;
        if insertion.placement == Placement::BeforeAnchor {
            log::info!("Navbar inserted before #{ANCHOR_ID}");
        }
        Ok(insertion)
    }
}
