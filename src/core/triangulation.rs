//! The incremental triangulation engine.
//!
//! A [`Triangulation`] maintains a planar Delaunay triangulation over a fixed
//! bounding triangle, together with three derived proximity structures that
//! are kept consistent after every mutation: the Gabriel graph, the relative
//! neighborhood graph (RNG), and a Euclidean minimum spanning tree (EMST).
//! The derived graphs nest: EMST ⊆ RNG ⊆ Gabriel ⊆ Delaunay edges.
//!
//! Insertion is cavity-based (Bowyer–Watson): locate the containing triangle,
//! flood out to every triangle whose circumcircle strictly contains the new
//! site, replace the cavity with a fan of triangles around the site, and
//! repair the derived graphs locally. The EMST is then rebuilt from the
//! length-sorted pool of RNG edges. Removal is implemented by replaying the
//! surviving sites into a fresh triangulation.

use crate::core::disjoint_set::DisjointSet;
use crate::core::graph::Graph;
use crate::core::triangle::{Site, SiteKey, Triangle, TriangleError, TriangleKey};
use crate::geometry::predicates::{
    CircumcirclePosition, GeometryError, circumcenter, circumcircle_position, in_circle,
    vertex_opposite_crossed_edge,
};
use crate::geometry::{Line, Point};
use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;
use smallvec::SmallVec;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors reported by [`Triangulation`] operations.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum TriangulationError {
    /// The three bounding corners are collinear.
    #[error("bounding corners are collinear: {corners:?}")]
    DegenerateBoundingTriangle {
        /// The corners as given.
        corners: [Point; 3],
    },
    /// The point lies outside the bounding triangle.
    #[error("point {point} lies outside the bounding triangle")]
    OutsideBoundingTriangle {
        /// The offending point.
        point: Point,
    },
    /// The point is not a site of the triangulation.
    #[error("point {point} is not a site of this triangulation")]
    UnknownSite {
        /// The offending point.
        point: Point,
    },
    /// The triangle key does not refer to a live triangle.
    #[error("triangle key {triangle:?} is stale")]
    StaleTriangle {
        /// The offending key.
        triangle: TriangleKey,
    },
    /// The fan of triangles around the site does not close into a ring.
    #[error("triangle fan around {site} is not a closed ring")]
    OpenTriangleFan {
        /// The site whose fan was walked.
        site: Point,
    },
    /// A triangle-local vertex or facet operation failed.
    #[error(transparent)]
    Triangle(#[from] TriangleError),
    /// A geometric construction failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// An incremental Delaunay triangulation with derived proximity graphs.
///
/// The bounding triangle given at construction must enclose every site that
/// will ever be inserted; its three corners become *synthetic* sites that are
/// part of the triangulation but are filtered out of user-facing views by
/// [`is_synthetic`](Self::is_synthetic).
///
/// # Examples
///
/// ```
/// use proximity::core::Triangulation;
/// use proximity::geometry::Point;
///
/// let bounding = [
///     Point::new(-10_000.0, -10_000.0),
///     Point::new(10_000.0, -10_000.0),
///     Point::new(0.0, 10_000.0),
/// ];
/// let mut engine = Triangulation::new(bounding)?;
/// engine.insert(Point::new(0.0, 0.0))?;
/// engine.insert(Point::new(100.0, 0.0))?;
/// assert!(engine.has_gabriel_edge(Point::new(0.0, 0.0), Point::new(100.0, 0.0)));
/// # Ok::<(), proximity::core::TriangulationError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Triangulation {
    bounding: [Point; 3],
    bounding_circumcenter: Point,
    sites: SlotMap<SiteKey, Site>,
    site_lookup: FxHashMap<Point, SiteKey>,
    triangles: SlotMap<TriangleKey, Triangle>,
    /// Facet adjacency between live triangles.
    triangle_graph: Graph<TriangleKey>,
    gabriel_graph: Graph<SiteKey>,
    rng_graph: Graph<SiteKey>,
    emst_graph: Graph<SiteKey>,
    /// Length-sorted pool of RNG edges feeding the Kruskal sweep.
    candidate_edges: BTreeSet<Line>,
    /// Start hint for the point-location walk.
    most_recent: Option<TriangleKey>,
}

impl Triangulation {
    /// Creates a triangulation containing only the bounding triangle.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::DegenerateBoundingTriangle`] when the
    /// corners are collinear.
    pub fn new(bounding: [Point; 3]) -> Result<Self, TriangulationError> {
        let bounding_circumcenter = circumcenter(bounding[0], bounding[1], bounding[2])
            .map_err(|_| TriangulationError::DegenerateBoundingTriangle { corners: bounding })?;
        let mut engine = Self {
            bounding,
            bounding_circumcenter,
            sites: SlotMap::with_key(),
            site_lookup: FxHashMap::default(),
            triangles: SlotMap::with_key(),
            triangle_graph: Graph::new(),
            gabriel_graph: Graph::new(),
            rng_graph: Graph::new(),
            emst_graph: Graph::new(),
            candidate_edges: BTreeSet::new(),
            most_recent: None,
        };
        engine.seed();
        Ok(engine)
    }

    /// Resets the triangulation to its bounding-triangle-only state.
    pub fn clear(&mut self) {
        self.sites.clear();
        self.site_lookup.clear();
        self.triangles.clear();
        self.triangle_graph.clear();
        self.gabriel_graph.clear();
        self.rng_graph.clear();
        self.emst_graph.clear();
        self.candidate_edges.clear();
        self.most_recent = None;
        self.seed();
    }

    /// Installs the bounding corners, the initial triangle, and the complete
    /// Gabriel/RNG graph over the corners.
    fn seed(&mut self) {
        let corners = self.bounding.map(|point| {
            let key = self.sites.insert(Site {
                point,
                synthetic: true,
            });
            self.site_lookup.insert(point, key);
            self.gabriel_graph.insert_node(key);
            self.rng_graph.insert_node(key);
            key
        });
        let initial = self
            .triangles
            .insert(Triangle::new(corners, self.bounding_circumcenter));
        self.triangle_graph.insert_node(initial);
        for i in 0..3 {
            let j = (i + 1) % 3;
            self.gabriel_graph.insert_edge(corners[i], corners[j]);
            self.rng_graph.insert_edge(corners[i], corners[j]);
            self.candidate_edges
                .insert(Line::new(self.bounding[i], self.bounding[j]));
        }
        self.most_recent = Some(initial);
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Inserts a site, restoring the Delaunay invariant and all derived
    /// graphs. Inserting a point that is already a site is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::OutsideBoundingTriangle`] when the point
    /// is not inside any triangle.
    pub fn insert(&mut self, point: Point) -> Result<(), TriangulationError> {
        if self.site_lookup.contains_key(&point) {
            debug!(%point, "ignoring duplicate insertion");
            return Ok(());
        }
        let start = self
            .locate(point)
            .ok_or(TriangulationError::OutsideBoundingTriangle { point })?;
        let cavity = self.cavity(point, start);
        self.retriangulate(point, &cavity)?;
        self.compute_emst();
        Ok(())
    }

    /// Removes a site and rebuilds the triangulation from the survivors.
    ///
    /// Removing an unknown site or a bounding corner is a warned no-op.
    ///
    /// # Errors
    ///
    /// Propagates insertion errors from the replay; these cannot occur for
    /// sites that were valid when first inserted.
    pub fn remove(&mut self, point: Point) -> Result<(), TriangulationError> {
        match self.site_lookup.get(&point) {
            None => {
                warn!(%point, "ignoring removal of unknown site");
                return Ok(());
            }
            Some(&key) if self.sites[key].synthetic => {
                warn!(%point, "ignoring removal of a bounding corner");
                return Ok(());
            }
            Some(_) => {}
        }
        let survivors: Vec<Point> = self
            .sites
            .values()
            .filter(|site| !site.synthetic && site.point != point)
            .map(|site| site.point)
            .collect();
        self.clear();
        for survivor in survivors {
            self.insert(survivor)?;
        }
        Ok(())
    }

    /// Rebuilds the spanning tree over all sites from the candidate pool.
    ///
    /// Kruskal's sweep over the length-sorted RNG edges, stopping once n − 1
    /// edges have been accepted. A pool that fails to connect all sites is an
    /// internal inconsistency and is logged, not reported as an error.
    pub fn compute_emst(&mut self) {
        self.emst_graph.clear();
        for key in self.sites.keys() {
            self.emst_graph.insert_node(key);
        }
        let needed = self.sites.len().saturating_sub(1);
        let mut forest = DisjointSet::new();
        let mut accepted = 0usize;
        for line in &self.candidate_edges {
            if accepted == needed {
                break;
            }
            let (Some(&u), Some(&v)) = (
                self.site_lookup.get(&line.a()),
                self.site_lookup.get(&line.b()),
            ) else {
                continue;
            };
            if forest.union(u, v) {
                self.emst_graph.insert_edge(u, v);
                accepted += 1;
            }
        }
        if accepted < needed {
            warn!(
                accepted,
                needed, "candidate pool did not connect all sites; spanning tree is incomplete"
            );
        }
    }

    // ------------------------------------------------------------------
    // Cavity insertion internals
    // ------------------------------------------------------------------

    /// Every live triangle whose circumcircle strictly contains `point`,
    /// found by flooding outward from the containing triangle.
    fn cavity(&self, point: Point, start: TriangleKey) -> Vec<TriangleKey> {
        let mut encountered = FxHashSet::default();
        encountered.insert(start);
        let mut queue = vec![start];
        let mut cavity = Vec::new();
        while let Some(key) = queue.pop() {
            let Some(triangle) = self.triangles.get(key) else {
                continue;
            };
            let points = self.points_of(triangle);
            if circumcircle_position(point, &points) != CircumcirclePosition::Inside {
                continue;
            }
            cavity.push(key);
            for neighbor in self.triangle_graph.neighbors(key) {
                if encountered.insert(neighbor) {
                    queue.push(neighbor);
                }
            }
        }
        cavity
    }

    /// Replaces the cavity with a fan of triangles around `point` and repairs
    /// the Gabriel/RNG graphs and the candidate pool.
    fn retriangulate(
        &mut self,
        point: Point,
        cavity: &[TriangleKey],
    ) -> Result<(), TriangulationError> {
        // Facets shared by two cavity triangles are interior to the cavity:
        // they disappear, and with them any derived edge they carried. Facets
        // seen once form the cavity boundary.
        let mut boundary: FxHashSet<[SiteKey; 2]> = FxHashSet::default();
        for &key in cavity {
            let triangle = self.triangles[key];
            for facet in triangle.facets() {
                if !boundary.insert(facet) {
                    boundary.remove(&facet);
                    let edge = Line::new(self.point_of(facet[0]), self.point_of(facet[1]));
                    if self.gabriel_graph.has_edge(facet[0], facet[1]) {
                        debug!(%edge, "gabriel edge removed with cavity facet");
                        self.gabriel_graph.remove_edge(facet[0], facet[1]);
                    }
                    if self.rng_graph.has_edge(facet[0], facet[1]) {
                        debug!(%edge, "rng edge removed with cavity facet");
                        self.rng_graph.remove_edge(facet[0], facet[1]);
                        self.candidate_edges.remove(&edge);
                    }
                }
            }
        }

        // Triangles outside the cavity that border it; the new fan is wired
        // to these below.
        let cavity_set: FxHashSet<TriangleKey> = cavity.iter().copied().collect();
        let mut border_neighbors: SmallVec<[TriangleKey; 8]> = SmallVec::new();
        for &key in cavity {
            for neighbor in self.triangle_graph.neighbors(key) {
                if !cavity_set.contains(&neighbor) && !border_neighbors.contains(&neighbor) {
                    border_neighbors.push(neighbor);
                }
            }
        }
        for &key in cavity {
            self.triangle_graph.remove_node(key);
            self.triangles.remove(key);
        }

        self.invalidate_gabriel_edges(point);
        self.invalidate_rng_edges(point);

        let site_key = self.sites.insert(Site {
            point,
            synthetic: false,
        });
        self.site_lookup.insert(point, site_key);
        self.gabriel_graph.insert_node(site_key);
        self.rng_graph.insert_node(site_key);

        // Fan the cavity: one triangle per boundary facet.
        let mut new_triangles: SmallVec<[TriangleKey; 8]> = SmallVec::new();
        for &facet in &boundary {
            let center = circumcenter(self.point_of(facet[0]), self.point_of(facet[1]), point)?;
            let key = self
                .triangles
                .insert(Triangle::new([facet[0], facet[1], site_key], center));
            self.triangle_graph.insert_node(key);
            new_triangles.push(key);
        }

        self.qualify_new_edges(point, site_key, &boundary);

        // Wire the fan to itself and to the surviving border.
        for (i, &key) in new_triangles.iter().enumerate() {
            let triangle = self.triangles[key];
            for &other in &new_triangles[i + 1..] {
                if triangle.is_neighbor_of(&self.triangles[other]) {
                    self.triangle_graph.insert_edge(key, other);
                }
            }
            for &survivor in &border_neighbors {
                if triangle.is_neighbor_of(&self.triangles[survivor]) {
                    self.triangle_graph.insert_edge(key, survivor);
                }
            }
        }
        self.most_recent = new_triangles.first().copied();
        Ok(())
    }

    /// Drops every Gabriel edge whose diameter circle now contains `point`.
    fn invalidate_gabriel_edges(&mut self, point: Point) {
        for (u, v) in self.edges_of_gabriel() {
            let (pu, pv) = (self.point_of(u), self.point_of(v));
            let diameter = pu.distance(pv);
            if in_circle(point, pu.midpoint(pv), diameter / 2.0) {
                debug!(edge = %Line::new(pu, pv), "gabriel edge invalidated by new site");
                self.gabriel_graph.remove_edge(u, v);
            }
        }
    }

    /// Drops every RNG edge whose lens now contains `point`, removing the
    /// edge from the candidate pool as well.
    fn invalidate_rng_edges(&mut self, point: Point) {
        for (u, v) in self.edges_of_rng() {
            let (pu, pv) = (self.point_of(u), self.point_of(v));
            let span = pu.distance(pv);
            if point.distance(pu) < span && point.distance(pv) < span {
                let edge = Line::new(pu, pv);
                debug!(%edge, "rng edge invalidated by new site");
                self.rng_graph.remove_edge(u, v);
                self.candidate_edges.remove(&edge);
            }
        }
    }

    /// Tests each (boundary vertex, new site) edge for Gabriel and RNG
    /// membership against every current site.
    fn qualify_new_edges(
        &mut self,
        point: Point,
        site_key: SiteKey,
        boundary: &FxHashSet<[SiteKey; 2]>,
    ) {
        let mut boundary_vertices: FxHashSet<SiteKey> = FxHashSet::default();
        for facet in boundary {
            boundary_vertices.insert(facet[0]);
            boundary_vertices.insert(facet[1]);
        }
        for &vertex in &boundary_vertices {
            let anchor = self.point_of(vertex);
            let span = anchor.distance(point);
            let midpoint = anchor.midpoint(point);
            let mut gabriel = true;
            let mut rng = true;
            for (other_key, other) in &self.sites {
                if other_key == vertex || other_key == site_key {
                    continue;
                }
                if gabriel && in_circle(other.point, midpoint, span / 2.0) {
                    gabriel = false;
                }
                if rng && other.point.distance(anchor) < span && other.point.distance(point) < span
                {
                    rng = false;
                }
                if !gabriel && !rng {
                    break;
                }
            }
            let edge = Line::new(anchor, point);
            if gabriel {
                debug!(%edge, "gabriel edge added");
                self.gabriel_graph.insert_edge(vertex, site_key);
            }
            if rng {
                debug!(%edge, "rng edge added");
                self.rng_graph.insert_edge(vertex, site_key);
                self.candidate_edges.insert(edge);
            }
        }
    }

    // ------------------------------------------------------------------
    // Point location and ring walks
    // ------------------------------------------------------------------

    /// Finds a triangle containing `point` (interior or boundary).
    ///
    /// Walks from the most recently created triangle toward the point,
    /// stepping through whichever edge the point lies beyond. A revisited
    /// triangle means the walk cycled on degenerate geometry; the walk then
    /// falls back to scanning every triangle. Returns `None` only when the
    /// point is outside the bounding triangle.
    #[must_use]
    pub fn locate(&self, point: Point) -> Option<TriangleKey> {
        let start = self
            .most_recent
            .filter(|&key| self.triangles.contains_key(key))
            .or_else(|| self.triangles.keys().next())?;
        let mut visited = FxHashSet::default();
        let mut current = start;
        let mut cycled = false;
        loop {
            if !visited.insert(current) {
                warn!(%point, "point location walk revisited a triangle, scanning instead");
                cycled = true;
                break;
            }
            let Some(triangle) = self.triangles.get(current) else {
                break;
            };
            let points = self.points_of(triangle);
            match vertex_opposite_crossed_edge(point, &points) {
                None => return Some(current),
                Some(index) => {
                    let vertex = triangle.vertices()[index];
                    match self.neighbor_opposite_key(vertex, current) {
                        Ok(Some(next)) => current = next,
                        // Walked off the hull: outside the bounding triangle.
                        Ok(None) | Err(_) => return None,
                    }
                }
            }
        }
        if !cycled {
            return None;
        }
        self.triangles.iter().find_map(|(key, triangle)| {
            let points = self.points_of(triangle);
            vertex_opposite_crossed_edge(point, &points)
                .is_none()
                .then_some(key)
        })
    }

    /// The site of the triangulation nearest to `point`, approximated as the
    /// closest vertex of the triangle containing `point`.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::OutsideBoundingTriangle`] when the point
    /// is not inside any triangle.
    pub fn find_nearest(&self, point: Point) -> Result<Point, TriangulationError> {
        let key = self
            .locate(point)
            .ok_or(TriangulationError::OutsideBoundingTriangle { point })?;
        let triangle = self
            .triangles
            .get(key)
            .ok_or(TriangulationError::StaleTriangle { triangle: key })?;
        let points = self.points_of(triangle);
        let mut nearest = points[0];
        for &candidate in &points[1..] {
            if candidate.distance(point) < nearest.distance(point) {
                nearest = candidate;
            }
        }
        Ok(nearest)
    }

    /// The neighboring triangle across the facet opposite `site`, or `None`
    /// when that facet is on the hull.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::UnknownSite`] for a point that is not a
    /// site, [`TriangulationError::StaleTriangle`] for a dead key, and
    /// [`TriangleError::VertexNotInTriangle`] when `site` is not a vertex of
    /// `triangle`.
    pub fn neighbor_opposite(
        &self,
        site: Point,
        triangle: TriangleKey,
    ) -> Result<Option<TriangleKey>, TriangulationError> {
        let &site_key = self
            .site_lookup
            .get(&site)
            .ok_or(TriangulationError::UnknownSite { point: site })?;
        if !self.triangles.contains_key(triangle) {
            return Err(TriangulationError::StaleTriangle { triangle });
        }
        Ok(self.neighbor_opposite_key(site_key, triangle)?)
    }

    fn neighbor_opposite_key(
        &self,
        vertex: SiteKey,
        triangle: TriangleKey,
    ) -> Result<Option<TriangleKey>, TriangleError> {
        let facet = self.triangles[triangle].facet_opposite(vertex)?;
        Ok(self.triangle_graph.neighbors(triangle).find(|&neighbor| {
            self.triangles
                .get(neighbor)
                .is_some_and(|t| t.contains(facet[0]) && t.contains(facet[1]))
        }))
    }

    /// All triangles incident to `site`, in ring order around it, starting
    /// from `start`.
    ///
    /// # Errors
    ///
    /// Errors when `site` is unknown, `start` is dead or does not have `site`
    /// as a vertex, or the fan does not close into a ring (which happens for
    /// hull sites, i.e. the bounding corners).
    pub fn surrounding_triangles(
        &self,
        site: Point,
        start: TriangleKey,
    ) -> Result<Vec<TriangleKey>, TriangulationError> {
        let &site_key = self
            .site_lookup
            .get(&site)
            .ok_or(TriangulationError::UnknownSite { point: site })?;
        let start_triangle = self
            .triangles
            .get(start)
            .ok_or(TriangulationError::StaleTriangle { triangle: start })?;
        if !start_triangle.contains(site_key) {
            return Err(TriangleError::VertexNotInTriangle { vertex: site_key }.into());
        }
        let mut ring = Vec::new();
        let mut guide = start_triangle.vertex_excluding(&[site_key])?;
        let mut current = start;
        loop {
            ring.push(current);
            let previous = current;
            current = self
                .neighbor_opposite_key(guide, current)?
                .ok_or(TriangulationError::OpenTriangleFan { site })?;
            guide = self.triangles[previous].vertex_excluding(&[site_key, guide])?;
            if current == start {
                break;
            }
        }
        Ok(ring)
    }

    /// The Voronoi cell of a site: the circumcenters of its surrounding
    /// triangles, in ring order.
    ///
    /// # Errors
    ///
    /// Errors when the point is not a site, or when the site lies on the hull
    /// and its fan does not close.
    pub fn voronoi_cell(&self, site: Point) -> Result<Vec<Point>, TriangulationError> {
        let &site_key = self
            .site_lookup
            .get(&site)
            .ok_or(TriangulationError::UnknownSite { point: site })?;
        let start = self
            .triangles
            .iter()
            .find_map(|(key, triangle)| triangle.contains(site_key).then_some(key))
            .ok_or(TriangulationError::UnknownSite { point: site })?;
        let ring = self.surrounding_triangles(site, start)?;
        Ok(ring
            .into_iter()
            .map(|key| self.triangles[key].circumcenter())
            .collect())
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    /// Iterates all live triangle keys.
    pub fn triangles(&self) -> impl Iterator<Item = TriangleKey> + '_ {
        self.triangles.keys()
    }

    /// Number of live triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True iff `triangle` refers to a live triangle.
    #[must_use]
    pub fn contains(&self, triangle: TriangleKey) -> bool {
        self.triangles.contains_key(triangle)
    }

    /// The vertex coordinates of a triangle.
    #[must_use]
    pub fn triangle_points(&self, triangle: TriangleKey) -> Option<[Point; 3]> {
        self.triangles
            .get(triangle)
            .map(|t| self.points_of(t))
    }

    /// The circumcenter of a triangle.
    #[must_use]
    pub fn circumcenter(&self, triangle: TriangleKey) -> Option<Point> {
        self.triangles.get(triangle).map(Triangle::circumcenter)
    }

    /// True iff the triangle has a synthetic bounding corner as a vertex.
    #[must_use]
    pub fn touches_synthetic(&self, triangle: TriangleKey) -> Option<bool> {
        self.triangles
            .get(triangle)
            .map(|t| t.touches_synthetic(&self.sites))
    }

    /// Iterates the facet neighbors of a triangle.
    pub fn neighbors(&self, triangle: TriangleKey) -> impl Iterator<Item = TriangleKey> + '_ {
        self.triangle_graph.neighbors(triangle)
    }

    /// Iterates the coordinates of every site, bounding corners included.
    pub fn sites(&self) -> impl Iterator<Item = Point> + '_ {
        self.sites.values().map(|site| site.point)
    }

    /// Number of sites, bounding corners included.
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// True iff `point` is a synthetic bounding corner.
    #[must_use]
    pub fn is_synthetic(&self, point: Point) -> bool {
        self.site_lookup
            .get(&point)
            .is_some_and(|&key| self.sites[key].synthetic)
    }

    /// True iff the Gabriel graph has the edge `{p, q}`.
    #[must_use]
    pub fn has_gabriel_edge(&self, p: Point, q: Point) -> bool {
        self.has_site_edge(&self.gabriel_graph, p, q)
    }

    /// True iff the relative neighborhood graph has the edge `{p, q}`.
    #[must_use]
    pub fn has_rng_edge(&self, p: Point, q: Point) -> bool {
        self.has_site_edge(&self.rng_graph, p, q)
    }

    /// True iff the spanning tree has the edge `{p, q}`.
    #[must_use]
    pub fn has_emst_edge(&self, p: Point, q: Point) -> bool {
        self.has_site_edge(&self.emst_graph, p, q)
    }

    /// Iterates the spanning-tree edges as segments.
    pub fn emst_edges(&self) -> impl Iterator<Item = Line> + '_ {
        self.emst_graph.nodes().flat_map(move |u| {
            self.emst_graph
                .neighbors(u)
                .filter(move |&v| u < v)
                .map(move |v| Line::new(self.point_of(u), self.point_of(v)))
        })
    }

    fn has_site_edge(&self, graph: &Graph<SiteKey>, p: Point, q: Point) -> bool {
        let (Some(&u), Some(&v)) = (self.site_lookup.get(&p), self.site_lookup.get(&q)) else {
            return false;
        };
        graph.has_edge(u, v)
    }

    #[inline]
    fn point_of(&self, key: SiteKey) -> Point {
        self.sites[key].point
    }

    fn points_of(&self, triangle: &Triangle) -> [Point; 3] {
        triangle.vertices().map(|key| self.point_of(key))
    }

    fn edges_of_gabriel(&self) -> Vec<(SiteKey, SiteKey)> {
        Self::collect_edges(&self.gabriel_graph)
    }

    fn edges_of_rng(&self) -> Vec<(SiteKey, SiteKey)> {
        Self::collect_edges(&self.rng_graph)
    }

    fn collect_edges(graph: &Graph<SiteKey>) -> Vec<(SiteKey, SiteKey)> {
        graph
            .nodes()
            .flat_map(|u| graph.neighbors(u).filter(move |&v| u < v).map(move |v| (u, v)))
            .collect()
    }
}
