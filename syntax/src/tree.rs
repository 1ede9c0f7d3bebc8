//! Immutable, range-addressed syntax tree.
//!
//! The tree is an arena of elements; interior nodes own their children's ids
//! and every element's range is the union of its children (tokens carry the
//! lexed range). Handles (`SyntaxNode`) are cheap `Copy` references into the
//! arena, so navigation never clones.

use crate::kind::SyntaxKind;
use crate::range::TextRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

#[derive(Debug)]
struct ElementData {
    kind: SyntaxKind,
    range: TextRange,
    parent: Option<NodeId>,
    /// Empty for tokens.
    children: Vec<NodeId>,
    is_token: bool,
}

/// An immutable syntax tree owning its source text.
#[derive(Debug)]
pub struct SyntaxTree {
    text: String,
    elements: Vec<ElementData>,
    root: NodeId,
}

impl SyntaxTree {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode {
            tree: self,
            id: self.root,
        }
    }

    fn data(&self, id: NodeId) -> &ElementData {
        &self.elements[id.0 as usize]
    }

    /// The token whose half-open range contains `offset`.
    pub fn token_at_offset(&self, offset: u32) -> Option<SyntaxNode<'_>> {
        self.find_token(self.root, |range| range.contains(offset))
    }

    /// The rightmost token ending exactly at `offset`.
    pub fn token_ending_at(&self, offset: u32) -> Option<SyntaxNode<'_>> {
        self.find_token(self.root, |range| range.end == offset && !range.is_empty())
    }

    fn find_token(
        &self,
        id: NodeId,
        pred: impl Fn(TextRange) -> bool + Copy,
    ) -> Option<SyntaxNode<'_>> {
        let data = self.data(id);
        if data.is_token {
            return pred(data.range).then_some(SyntaxNode { tree: self, id });
        }
        for &child in &data.children {
            if let Some(found) = self.find_token(child, pred) {
                return Some(found);
            }
        }
        None
    }

    /// The smallest node (token included) whose range contains `range`.
    pub fn covering_element(&self, range: TextRange) -> SyntaxNode<'_> {
        let mut current = self.root;
        'outer: loop {
            let data = self.data(current);
            for &child in &data.children {
                if self.data(child).range.contains_range(range) {
                    current = child;
                    continue 'outer;
                }
            }
            return SyntaxNode {
                tree: self,
                id: current,
            };
        }
    }
}

/// A borrowed handle to one element of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}
impl Eq for SyntaxNode<'_> {}

impl std::fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}@{}..{}",
            self.kind(),
            self.range().start,
            self.range().end
        )
    }
}

impl<'a> SyntaxNode<'a> {
    pub fn kind(&self) -> SyntaxKind {
        self.tree.data(self.id).kind
    }

    pub fn range(&self) -> TextRange {
        self.tree.data(self.id).range
    }

    pub fn is_token(&self) -> bool {
        self.tree.data(self.id).is_token
    }

    pub fn text(&self) -> &'a str {
        let range = self.range();
        &self.tree.text[range.start as usize..range.end as usize]
    }

    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    pub fn parent(&self) -> Option<SyntaxNode<'a>> {
        self.tree.data(self.id).parent.map(|id| SyntaxNode {
            tree: self.tree,
            id,
        })
    }

    /// Self, then parent, grandparent, up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = SyntaxNode<'a>> {
        std::iter::successors(Some(*self), |node| node.parent())
    }

    pub fn children(&self) -> impl Iterator<Item = SyntaxNode<'a>> + '_ {
        let tree = self.tree;
        self.tree
            .data(self.id)
            .children
            .iter()
            .map(move |&id| SyntaxNode { tree, id })
    }

    /// Child nodes and tokens whose kind is not trivia.
    pub fn children_non_trivia(&self) -> impl Iterator<Item = SyntaxNode<'a>> + '_ {
        self.children().filter(|child| !child.kind().is_trivia())
    }

    pub fn first_child_of_kind(&self, kind: SyntaxKind) -> Option<SyntaxNode<'a>> {
        self.children().find(|child| child.kind() == kind)
    }

    pub fn prev_sibling(&self) -> Option<SyntaxNode<'a>> {
        let parent = self.parent()?;
        let siblings = &self.tree.data(parent.id).children;
        let idx = siblings.iter().position(|&id| id == self.id)?;
        idx.checked_sub(1).map(|i| SyntaxNode {
            tree: self.tree,
            id: siblings[i],
        })
    }

    pub fn next_sibling(&self) -> Option<SyntaxNode<'a>> {
        let parent = self.parent()?;
        let siblings = &self.tree.data(parent.id).children;
        let idx = siblings.iter().position(|&id| id == self.id)?;
        siblings.get(idx + 1).map(|&id| SyntaxNode {
            tree: self.tree,
            id,
        })
    }

    pub fn prev_sibling_non_trivia(&self) -> Option<SyntaxNode<'a>> {
        let mut cur = self.prev_sibling();
        while let Some(node) = cur {
            if !node.kind().is_trivia() {
                return Some(node);
            }
            cur = node.prev_sibling();
        }
        None
    }

    pub fn next_sibling_non_trivia(&self) -> Option<SyntaxNode<'a>> {
        let mut cur = self.next_sibling();
        while let Some(node) = cur {
            if !node.kind().is_trivia() {
                return Some(node);
            }
            cur = node.next_sibling();
        }
        None
    }

    /// Preorder traversal of this subtree, self included.
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants {
            tree: self.tree,
            stack: vec![self.id],
        }
    }
}

pub struct Descendants<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = SyntaxNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let data = self.tree.data(id);
        self.stack.extend(data.children.iter().rev());
        Some(SyntaxNode {
            tree: self.tree,
            id,
        })
    }
}

/// Incremental tree construction used by the parser.
///
/// `start_node`/`finish_node` must be balanced; `checkpoint` +
/// `start_node_at` wraps already-emitted siblings into a new node (used for
/// left-recursive expressions).
pub struct TreeBuilder {
    text: String,
    elements: Vec<ElementData>,
    /// Stack of (kind, children) for nodes under construction.
    stack: Vec<(SyntaxKind, Vec<NodeId>)>,
    last_end: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    stack_depth: usize,
    child_count: usize,
}

impl TreeBuilder {
    pub fn new(text: String) -> TreeBuilder {
        TreeBuilder {
            text,
            elements: Vec::new(),
            stack: Vec::new(),
            last_end: 0,
        }
    }

    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.stack.push((kind, Vec::new()));
    }

    pub fn checkpoint(&self) -> Checkpoint {
        let (depth, count) = match self.stack.last() {
            Some((_, children)) => (self.stack.len(), children.len()),
            None => (0, 0),
        };
        Checkpoint {
            stack_depth: depth,
            child_count: count,
        }
    }

    /// Starts `kind` so that siblings emitted since `checkpoint` become its
    /// leading children.
    pub fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        debug_assert_eq!(checkpoint.stack_depth, self.stack.len());
        let moved = match self.stack.last_mut() {
            Some((_, children)) => children.split_off(checkpoint.child_count),
            None => Vec::new(),
        };
        self.stack.push((kind, moved));
    }

    pub fn token(&mut self, kind: SyntaxKind, range: TextRange) {
        let id = NodeId(self.elements.len() as u32);
        self.elements.push(ElementData {
            kind,
            range,
            parent: None,
            children: Vec::new(),
            is_token: true,
        });
        self.last_end = range.end;
        match self.stack.last_mut() {
            Some((_, children)) => children.push(id),
            None => debug_assert!(false, "token emitted outside any node"),
        }
    }

    pub fn finish_node(&mut self) {
        let (kind, children) = self.stack.pop().expect("unbalanced finish_node");
        let range = match (children.first(), children.last()) {
            (Some(&first), Some(&last)) => TextRange::new(
                self.elements[first.0 as usize].range.start,
                self.elements[last.0 as usize].range.end,
            ),
            _ => TextRange::empty(self.last_end),
        };
        let id = NodeId(self.elements.len() as u32);
        self.elements.push(ElementData {
            kind,
            range,
            parent: None,
            children: children.clone(),
            is_token: false,
        });
        for child in children {
            self.elements[child.0 as usize].parent = Some(id);
        }
        match self.stack.last_mut() {
            Some((_, siblings)) => siblings.push(id),
            None => {} // root; finish() picks it up
        }
    }

    pub fn finish(mut self) -> SyntaxTree {
        debug_assert!(self.stack.is_empty(), "unbalanced tree builder");
        let root = NodeId(self.elements.len() as u32 - 1);
        // The root covers the whole file even when it has no children.
        let len = self.text.len() as u32;
        let root_data = &mut self.elements[root.0 as usize];
        root_data.range = TextRange::new(0, len);
        SyntaxTree {
            text: self.text,
            elements: self.elements,
            root,
        }
    }
}
