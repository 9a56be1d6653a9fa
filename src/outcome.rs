use crate::{dom::Insertion, error::LoadError};

/// What a single run of the navbar loader did to the page.
#[derive(Debug)]
pub enum Outcome {
    /// The fragment was spliced into the document
    Inserted(Insertion),
    /// The document was left untouched; the error has already been logged
    #[cfg_attr(not(test), expect(dead_code))]
    Failed(LoadError),
}

