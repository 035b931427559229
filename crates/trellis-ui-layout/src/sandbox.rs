//! One-axis relative position resolver
//!
//! A [`Sandbox`] holds edges (positions to solve) and spaces (directed
//! offsets `from --size--> to`). It is built for one child on one axis,
//! resolved once and thrown away.
//!
//! Resolution runs in two passes: the first builds an adjacency list, the
//! second walks it breadth first from the container's left edge. A space
//! met after both of its edges are already known closes a cycle and fails
//! the resolve. Edges the walk cannot reach are solved relative to the
//! first of them pinned at 0 and listed as unresolved.

use std::collections::VecDeque;
use std::fmt;

use smallvec::SmallVec;

use crate::layout_size::LayoutSize;

/// Handle to an edge in a [`Sandbox`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

/// Handle to a space in a [`Sandbox`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpaceId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SandboxError {
    /// The container's left edge cannot be the target of a space, and its
    /// right edge cannot be the source of one.
    InvalidAnchor { space: SpaceId },
    /// A space referenced an edge that does not belong to this sandbox.
    UnknownEdge(EdgeId),
    /// A space from an edge to itself.
    SelfLoop(EdgeId),
    /// The space closes a cycle in the constraint graph.
    Cycle { space: SpaceId },
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::InvalidAnchor { space } => {
                write!(f, "space {} points into the container from outside", space.0)
            }
            SandboxError::UnknownEdge(edge) => write!(f, "edge {} does not exist", edge.0),
            SandboxError::SelfLoop(edge) => write!(f, "space from edge {} to itself", edge.0),
            SandboxError::Cycle { space } => write!(f, "space {} closes a cycle", space.0),
        }
    }
}

impl std::error::Error for SandboxError {}

/// Directed offset between two edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Space {
    pub from: EdgeId,
    pub to: EdgeId,
    pub size: LayoutSize,
}

/// Constraint graph for one axis.
#[derive(Clone, Debug)]
pub struct Sandbox {
    reference: i32,
    edge_count: usize,
    spaces: Vec<Space>,
}

impl Sandbox {
    /// The container's leading edge, pinned at 0.
    pub const CONTAINER_LEFT: EdgeId = EdgeId(0);
    /// The container's trailing edge, `length` away from the leading one.
    pub const CONTAINER_RIGHT: EdgeId = EdgeId(1);

    /// Creates a sandbox for a container `length` pixels long. Percent
    /// sizes resolve against that length.
    pub fn new(length: i32) -> Self {
        let length = length.max(0);
        Self {
            reference: length,
            edge_count: 2,
            spaces: vec![Space {
                from: Self::CONTAINER_LEFT,
                to: Self::CONTAINER_RIGHT,
                size: LayoutSize::px(length),
            }],
        }
    }

    /// The length percent sizes resolve against.
    pub fn reference(&self) -> i32 {
        self.reference
    }

    pub fn add_edge(&mut self) -> EdgeId {
        let edge = EdgeId(self.edge_count);
        self.edge_count += 1;
        edge
    }

    /// Adds the constraint `to = from + size`.
    pub fn add_space(
        &mut self,
        from: EdgeId,
        size: LayoutSize,
        to: EdgeId,
    ) -> Result<SpaceId, SandboxError> {
        for edge in [from, to] {
            if edge.0 >= self.edge_count {
                return Err(SandboxError::UnknownEdge(edge));
            }
        }
        if from == to {
            return Err(SandboxError::SelfLoop(from));
        }
        let space = SpaceId(self.spaces.len());
        if to == Self::CONTAINER_LEFT || from == Self::CONTAINER_RIGHT {
            return Err(SandboxError::InvalidAnchor { space });
        }
        self.spaces.push(Space { from, to, size });
        Ok(space)
    }

    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Solves every edge position.
    pub fn resolve(&self) -> Result<Resolution, SandboxError> {
        // Pass one: adjacency. Each entry is (space, neighbour, sign), where
        // sign is +1 when the neighbour sits at the `to` end.
        let mut adjacency: Vec<SmallVec<[(usize, usize, i32); 4]>> =
            vec![SmallVec::new(); self.edge_count];
        let mut sizes = Vec::with_capacity(self.spaces.len());
        for (index, space) in self.spaces.iter().enumerate() {
            adjacency[space.from.0].push((index, space.to.0, 1));
            adjacency[space.to.0].push((index, space.from.0, -1));
            sizes.push(space.size.resolve(self.reference) as i64);
        }

        // Pass two: breadth-first evaluation from each root.
        let mut positions: Vec<Option<i64>> = vec![None; self.edge_count];
        let mut used = vec![false; self.spaces.len()];
        let mut unresolved = SmallVec::new();
        let mut queue = VecDeque::new();

        for root in 0..self.edge_count {
            if positions[root].is_some() {
                continue;
            }
            let detached = root != Self::CONTAINER_LEFT.0;
            positions[root] = Some(0);
            queue.push_back(root);

            while let Some(edge) = queue.pop_front() {
                if detached {
                    unresolved.push(EdgeId(edge));
                }
                let base = positions[edge].unwrap_or(0);
                for &(space, neighbour, sign) in &adjacency[edge] {
                    if used[space] {
                        continue;
                    }
                    used[space] = true;
                    if positions[neighbour].is_some() {
                        return Err(SandboxError::Cycle {
                            space: SpaceId(space),
                        });
                    }
                    positions[neighbour] = Some(base + sign as i64 * sizes[space]);
                    queue.push_back(neighbour);
                }
            }
        }

        let positions = positions
            .into_iter()
            .map(|position| {
                position
                    .unwrap_or(0)
                    .clamp(i32::MIN as i64, i32::MAX as i64) as i32
            })
            .collect();
        Ok(Resolution {
            positions,
            unresolved,
        })
    }
}

/// Solved edge positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    positions: Vec<i32>,
    unresolved: SmallVec<[EdgeId; 4]>,
}

impl Resolution {
    /// Position of `edge`; 0 for an edge this sandbox never created.
    pub fn position(&self, edge: EdgeId) -> i32 {
        self.positions.get(edge.0).copied().unwrap_or(0)
    }

    /// Edges that are not connected to the container.
    pub fn unresolved(&self) -> &[EdgeId] {
        &self.unresolved
    }

    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/sandbox_tests.rs"]
mod tests;
