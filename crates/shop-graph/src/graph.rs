//! Waypoint graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** form: the neighbors of
//! node `n` occupy the contiguous slice
//!
//! ```text
//! adjacency[ adj_start[n] .. adj_start[n+1] ]
//! ```
//!
//! so [`WaypointGraph::neighbors`] is an allocation-free slice borrow.
//! Edges are directed exactly as authored; a symmetric floor plan must
//! author both directions (or use [`WaypointGraphBuilder::add_link`]).
//!
//! # Indices
//!
//! Beyond adjacency, `build()` precomputes:
//!
//! - a per-role node list (`nodes_with_role`),
//! - an interned product catalog (`ProductId` ↔ name) with a
//!   product → nodes map,
//! - an R-tree over node positions for nearest-node queries (used only to
//!   pick a path origin for a customer that has not yet reached any
//!   waypoint).

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use shop_core::{NodeId, ProductId, Vec3};

// ── Role ──────────────────────────────────────────────────────────────────────

/// What happens when a customer reaches a node of this role.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Role {
    /// Ordinary waypoint — aisles, corners; customers pass straight through.
    Path,
    /// A browsable shelf position; may trigger a stop-and-look.
    Product,
    /// The checkout — terminal goal of every shopping trip.
    Register,
    /// Spawn position for new customers.
    Entrance,
}

impl Role {
    pub(crate) const COUNT: usize = 4;

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Role::Path => 0,
            Role::Product => 1,
            Role::Register => 2,
            Role::Entrance => 3,
        }
    }
}

// ── ProductInfo ───────────────────────────────────────────────────────────────

/// Browsing metadata carried by `Role::Product` nodes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProductInfo {
    /// Interned product name.
    pub product: ProductId,
    /// Probability in `[0, 1]` that a customer who wants this product
    /// actually stops here.
    pub stop_chance: f32,
    /// Dwell-duration range (seconds) sampled uniformly when a customer
    /// stops to browse.
    pub dwell_min_secs: f32,
    pub dwell_max_secs: f32,
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry in the nearest-node spatial index: a 3-D point plus its `NodeId`.
#[derive(Clone, Debug)]
struct NodeEntry {
    point: [f32; 3],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── WaypointGraph ─────────────────────────────────────────────────────────────

/// The authored shop floor: waypoint positions, roles, product metadata, and
/// directed adjacency, plus the derived indices.
///
/// Immutable after construction.  Do not build directly; use
/// [`WaypointGraphBuilder`] or the CSV loader.
#[derive(Debug)]
pub struct WaypointGraph {
    // ── Node data (indexed by NodeId) ─────────────────────────────────────
    node_pos: Vec<Vec3>,
    node_role: Vec<Role>,
    node_product: Vec<Option<ProductInfo>>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer; length = `node_count + 1`.
    adj_start: Vec<u32>,
    adjacency: Vec<NodeId>,

    // ── Derived indices ───────────────────────────────────────────────────
    role_index: [Vec<NodeId>; Role::COUNT],
    /// `ProductId` → interned name.
    products: Vec<String>,
    /// Name → `ProductId` for lookups by product name.
    product_by_name: FxHashMap<String, ProductId>,
    /// `ProductId` → nodes selling it (ascending `NodeId`).
    product_nodes: Vec<Vec<NodeId>>,
    spatial_idx: RTree<NodeEntry>,
}

impl WaypointGraph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Number of distinct product names authored on the floor — the catalog
    /// customers sample their shopping lists from.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    // ── Node accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self, node: NodeId) -> Vec3 {
        self.node_pos[node.index()]
    }

    #[inline]
    pub fn role(&self, node: NodeId) -> Role {
        self.node_role[node.index()]
    }

    /// Browsing metadata for `node`; `None` for non-product nodes.
    #[inline]
    pub fn product_info(&self, node: NodeId) -> Option<&ProductInfo> {
        self.node_product[node.index()].as_ref()
    }

    /// Neighbors of `node` in authored order — a contiguous CSR slice.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.adj_start[node.index()] as usize;
        let end = self.adj_start[node.index() + 1] as usize;
        &self.adjacency[start..end]
    }

    // ── Role and product queries ──────────────────────────────────────────

    /// All nodes with the given role, ascending `NodeId`.
    #[inline]
    pub fn nodes_with_role(&self, role: Role) -> &[NodeId] {
        &self.role_index[role.index()]
    }

    /// Interned name of a product.
    pub fn product_name(&self, product: ProductId) -> &str {
        &self.products[product.index()]
    }

    /// Catalog lookup by name.
    pub fn product_id(&self, name: &str) -> Option<ProductId> {
        self.product_by_name.get(name).copied()
    }

    /// All nodes selling `product`, ascending `NodeId`.
    pub fn nodes_for_product(&self, product: ProductId) -> &[NodeId] {
        &self.product_nodes[product.index()]
    }

    /// First node selling the named product, if any.
    pub fn find_product_node(&self, name: &str) -> Option<NodeId> {
        let product = self.product_id(name)?;
        self.nodes_for_product(product).first().copied()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The node closest to `pos` by Euclidean distance.
    ///
    /// `None` only if the graph has no nodes.
    pub fn nearest_node(&self, pos: Vec3) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y, pos.z])
            .map(|e| e.id)
    }
}

// ── WaypointGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`WaypointGraph`] incrementally, then call
/// [`build`](Self::build).
///
/// Nodes and directed edges may be added in any order; product names are
/// interned on first use.  Edges referencing nodes the builder never created
/// are dropped at `build()` with a warning — dangling authored references
/// are a data problem, never a fatal one.
///
/// # Example
///
/// ```
/// use shop_core::Vec3;
/// use shop_graph::WaypointGraphBuilder;
///
/// let mut b = WaypointGraphBuilder::new();
/// let door = b.add_entrance(Vec3::new(0.0, 0.0, 0.0));
/// let milk = b.add_product(Vec3::new(2.0, 0.0, 0.0), "milk", 0.5, (1.0, 3.0));
/// let till = b.add_register(Vec3::new(4.0, 0.0, 0.0));
/// b.add_link(door, milk);
/// b.add_link(milk, till);
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.find_product_node("milk"), Some(milk));
/// ```
pub struct WaypointGraphBuilder {
    positions: Vec<Vec3>,
    roles: Vec<Role>,
    infos: Vec<Option<ProductInfo>>,
    raw_edges: Vec<(NodeId, NodeId)>,
    products: Vec<String>,
    product_by_name: FxHashMap<String, ProductId>,
}

impl WaypointGraphBuilder {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            roles: Vec::new(),
            infos: Vec::new(),
            raw_edges: Vec::new(),
            products: Vec::new(),
            product_by_name: FxHashMap::default(),
        }
    }

    fn add_node(&mut self, pos: Vec3, role: Role, info: Option<ProductInfo>) -> NodeId {
        let id = NodeId(self.positions.len() as u32);
        self.positions.push(pos);
        self.roles.push(role);
        self.infos.push(info);
        id
    }

    /// Add an ordinary path waypoint.
    pub fn add_path(&mut self, pos: Vec3) -> NodeId {
        self.add_node(pos, Role::Path, None)
    }

    /// Add an entrance (customer spawn) waypoint.
    pub fn add_entrance(&mut self, pos: Vec3) -> NodeId {
        self.add_node(pos, Role::Entrance, None)
    }

    /// Add the register waypoint.
    pub fn add_register(&mut self, pos: Vec3) -> NodeId {
        self.add_node(pos, Role::Register, None)
    }

    /// Add a product waypoint.  `stop_chance` is clamped to `[0, 1]`;
    /// `dwell_secs` is the `(min, max)` browse-duration range.
    pub fn add_product(
        &mut self,
        pos: Vec3,
        name: &str,
        stop_chance: f32,
        dwell_secs: (f32, f32),
    ) -> NodeId {
        let product = self.intern(name);
        let info = ProductInfo {
            product,
            stop_chance: stop_chance.clamp(0.0, 1.0),
            dwell_min_secs: dwell_secs.0,
            dwell_max_secs: dwell_secs.1.max(dwell_secs.0),
        };
        self.add_node(pos, Role::Product, Some(info))
    }

    /// Add a **directed** edge `from → to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.raw_edges.push((from, to));
    }

    /// Convenience: add edges in both directions.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    fn intern(&mut self, name: &str) -> ProductId {
        if let Some(&id) = self.product_by_name.get(name) {
            return id;
        }
        let id = ProductId(self.products.len() as u16);
        self.products.push(name.to_owned());
        self.product_by_name.insert(name.to_owned(), id);
        id
    }

    /// Consume the builder and produce a [`WaypointGraph`].
    ///
    /// Sorts edges into CSR form, builds the role and product indices, and
    /// bulk-loads the R-tree.  O(E log E + N log N).
    pub fn build(self) -> WaypointGraph {
        let node_count = self.positions.len();

        // Drop edges whose endpoints were never authored.
        let mut raw: Vec<(NodeId, NodeId)> = self
            .raw_edges
            .into_iter()
            .filter(|&(from, to)| {
                let ok = from.index() < node_count && to.index() < node_count;
                if !ok {
                    tracing::warn!(%from, %to, "dropping edge with dangling endpoint");
                }
                ok
            })
            .collect();
        raw.sort_by_key(|&(from, to)| (from.0, to.0));

        // CSR row pointer.
        let mut adj_start = vec![0u32; node_count + 1];
        for &(from, _) in &raw {
            adj_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            adj_start[i] += adj_start[i - 1];
        }
        let adjacency: Vec<NodeId> = raw.iter().map(|&(_, to)| to).collect();

        // Role index.
        let mut role_index: [Vec<NodeId>; Role::COUNT] = std::array::from_fn(|_| Vec::new());
        for (i, &role) in self.roles.iter().enumerate() {
            role_index[role.index()].push(NodeId(i as u32));
        }

        // Product → nodes map.
        let mut product_nodes = vec![Vec::new(); self.products.len()];
        for (i, info) in self.infos.iter().enumerate() {
            if let Some(info) = info {
                product_nodes[info.product.index()].push(NodeId(i as u32));
            }
        }

        // Bulk-load the R-tree (O(N log N), faster than N inserts).
        let entries: Vec<NodeEntry> = self
            .positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.x, pos.y, pos.z],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        WaypointGraph {
            node_pos: self.positions,
            node_role: self.roles,
            node_product: self.infos,
            adj_start,
            adjacency,
            role_index,
            products: self.products,
            product_by_name: self.product_by_name,
            product_nodes,
            spatial_idx,
        }
    }
}

impl Default for WaypointGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
