use ahash::AHashMap;

use gridstar_core::Coord;

/// Handle to a node in a [`NodePool`].
///
/// Handles are handed out in creation order, and a node is created exactly
/// when its position first enters the frontier, so comparing handles compares
/// insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One discovered search state.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) pos: Coord,
    pub(crate) parent: Option<NodeId>,
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) f: f64,
    pub(crate) closed: bool,
}

/// Arena of the nodes of a single search, with at most one node per
/// position.
///
/// Parent links are handles into the arena, so the whole tree is dropped at
/// once with the pool.
#[derive(Debug, Default)]
pub(crate) struct NodePool {
    nodes: Vec<SearchNode>,
    by_pos: AHashMap<Coord, NodeId>,
}

impl NodePool {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            by_pos: AHashMap::with_capacity(capacity),
        }
    }

    /// Create the node for `pos`. The position must not have one yet.
    pub(crate) fn insert(&mut self, pos: Coord, parent: Option<NodeId>, g: f64, h: f64) -> NodeId {
        debug_assert!(!self.by_pos.contains_key(&pos), "duplicate node at {pos}");
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SearchNode {
            pos,
            parent,
            g,
            h,
            f: g + h,
            closed: false,
        });
        self.by_pos.insert(pos, id);
        id
    }

    #[inline]
    pub(crate) fn get(&self, pos: Coord) -> Option<NodeId> {
        self.by_pos.get(&pos).copied()
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    /// Record a cheaper way to reach an open node.
    pub(crate) fn relax(&mut self, id: NodeId, parent: NodeId, g: f64) {
        let n = &mut self.nodes[id.index()];
        debug_assert!(!n.closed, "relaxing closed node at {}", n.pos);
        debug_assert!(g < n.g);
        n.g = g;
        n.f = g + n.h;
        n.parent = Some(parent);
    }

    /// Move a node to the explored set.
    pub(crate) fn close(&mut self, id: NodeId) {
        let n = &mut self.nodes[id.index()];
        debug_assert!(!n.closed, "node at {} expanded twice", n.pos);
        n.closed = true;
    }

    /// Positions from the root to `id`, following parent links.
    pub(crate) fn path_to(&self, id: NodeId) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(i) = cur {
            let n = self.node(i);
            path.push(n.pos);
            cur = n.parent;
        }
        path.reverse();
        path
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
