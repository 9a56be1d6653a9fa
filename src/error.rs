use thiserror::Error;

/// Everything that can go wrong while loading the navbar.
///
/// None of these escape the loader: they are logged once and dropped.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Network error fetching <{0}>: {1}")]
    Network(String, #[source] reqwest::Error),
    #[error("HTTP error! Status: {status}")]
    Fetch { status: u16 },
    #[error("Cannot resolve {path} against <{site}>")]
    Resolve { site: String, path: String },
    #[error(transparent)]
    Insertion(#[from] InsertionError),
}

impl LoadError {
    pub fn fetching(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Fetch {
                status: status.as_u16(),
            },
            None => {
                let url = err.url().map(ToString::to_string).unwrap_or_default();
                Self::Network(url, err)
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsertionError {
    #[error("Document has no body")]
    MissingBody,
    #[error("Anchor #{0} is not a child of body")]
    AnchorOutsideBody(String),
    #[error("Navbar fragment has no node to insert")]
    EmptyFragment,
    #[error("Node vanished from the document tree")]
    Detached,
}
