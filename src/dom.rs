use std::sync::LazyLock;

use ego_tree::{NodeId, NodeMut, NodeRef, Tree};
use scraper::{ElementRef, Html, Node, Selector};

use crate::error::InsertionError;

/// `id` of the element before which the navbar goes, when present.
pub const ANCHOR_ID: &str = "content";

/// Where the fragment was spliced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Immediately before the anchor element
    BeforeAnchor,
    /// At the very start of body, no anchor being present
    BodyStart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insertion {
    pub placement: Placement,
    /// Number of top-level nodes spliced into the document
    pub nodes: usize,
}

/// Insert `markup` into `doc`, either before the anchor element or at the start of body.
///
/// When the anchor exists, only the first node of the parsed fragment is inserted.
/// Otherwise, every top-level node of the fragment is inserted, in order.
///
/// Every check happens before the tree is touched,
/// so on error `doc` is left exactly as it was.
pub fn insert_navbar(doc: &mut Html, markup: &str) -> Result<Insertion, InsertionError> {
    let body = find_body(doc).ok_or(InsertionError::MissingBody)?;
    let container = Html::parse_fragment(markup);
    let fragment = container.root_element();

    match find_anchor(doc).map(|a| (a.id(), a.parent().map(|p| p.id()))) {
        Some((anchor, parent)) => {
            if parent != Some(body) {
                return Err(InsertionError::AnchorOutsideBody(ANCHOR_ID.into()));
            }
            let first = fragment
                .first_child()
                .ok_or(InsertionError::EmptyFragment)?;
            graft_before(&mut doc.tree, anchor, first)?;
            Ok(Insertion {
                placement: Placement::BeforeAnchor,
                nodes: 1,
            })
        }
        None => {
            let mut prev: Option<NodeId> = None;
            let mut nodes = 0;
            for child in fragment.children() {
                let value = child.value().clone();
                let id = match prev {
                    None => node_mut(&mut doc.tree, body)?.prepend(value).id(),
                    Some(prev) => node_mut(&mut doc.tree, prev)?.insert_after(value).id(),
                };
                graft_children(&mut doc.tree, id, child)?;
                prev = Some(id);
                nodes += 1;
            }
            Ok(Insertion {
                placement: Placement::BodyStart,
                nodes,
            })
        }
    }
}

/// Find the body element of the document, if any.
pub fn find_body(doc: &Html) -> Option<NodeId> {
    static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());
    doc.select(&BODY).next().map(|e| e.id())
}

/// Find the first element, in document order, whose id is exactly [`ANCHOR_ID`].
///
/// Unlike a `#content` selector, this stays case-sensitive in quirks mode.
pub fn find_anchor(doc: &Html) -> Option<ElementRef<'_>> {
    doc.tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().id() == Some(ANCHOR_ID))
}

fn node_mut(tree: &mut Tree<Node>, id: NodeId) -> Result<NodeMut<'_, Node>, InsertionError> {
    tree.get_mut(id).ok_or(InsertionError::Detached)
}

/// Deep-copy `src` (from another tree) into `tree`, as the previous sibling of `anchor`.
fn graft_before(
    tree: &mut Tree<Node>,
    anchor: NodeId,
    src: NodeRef<'_, Node>,
) -> Result<NodeId, InsertionError> {
    let id = node_mut(tree, anchor)?
        .insert_before(src.value().clone())
        .id();
    graft_children(tree, id, src)?;
    Ok(id)
}

/// Deep-copy the children of `src` (from another tree) as the children of `parent`.
fn graft_children(
    tree: &mut Tree<Node>,
    parent: NodeId,
    src: NodeRef<'_, Node>,
) -> Result<(), InsertionError> {
    for child in src.children() {
        let id = node_mut(tree, parent)?.append(child.value().clone()).id();
        graft_children(tree, id, child)?;
    }
    Ok(())
}
