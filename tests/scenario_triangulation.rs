//! End-to-end scenarios for the triangulation engine and its derived graphs.

use approx::assert_relative_eq;
use proximity::core::Triangulation;
use proximity::geometry::Point;
use proximity::geometry::predicates::{CircumcirclePosition, circumcircle_position};
use rustc_hash::FxHashMap;

fn bounding() -> [Point; 3] {
    [
        Point::new(-10_000.0, -10_000.0),
        Point::new(10_000.0, -10_000.0),
        Point::new(0.0, 10_000.0),
    ]
}

fn engine_with(points: &[Point]) -> Triangulation {
    let mut engine = Triangulation::new(bounding()).unwrap();
    for &p in points {
        engine.insert(p).unwrap();
    }
    engine
}

/// Coordinate triple usable for order-insensitive triangle comparison.
fn triangle_signature(points: [Point; 3]) -> [(u64, u64); 3] {
    let mut sig = points.map(|p| (p.x.to_bits(), p.y.to_bits()));
    sig.sort_unstable();
    sig
}

fn triangle_signatures(engine: &Triangulation) -> Vec<[(u64, u64); 3]> {
    let mut all: Vec<_> = engine
        .triangles()
        .filter_map(|k| engine.triangle_points(k))
        .map(triangle_signature)
        .collect();
    all.sort_unstable();
    all
}

fn real_triangle_count(engine: &Triangulation) -> usize {
    engine
        .triangles()
        .filter(|&k| engine.touches_synthetic(k) == Some(false))
        .count()
}

/// A dozen well-separated, non-cocircular sites.
fn scattered_sites() -> Vec<Point> {
    [
        (3.0, 7.0),
        (41.0, 13.0),
        (17.0, 59.0),
        (83.0, 29.0),
        (61.0, 71.0),
        (5.0, 43.0),
        (37.0, 89.0),
        (79.0, 2.0),
        (23.0, 31.0),
        (53.0, 67.0),
        (11.0, 97.0),
        (67.0, 19.0),
    ]
    .into_iter()
    .map(|(x, y)| Point::new(x, y))
    .collect()
}

#[test]
fn three_sites_make_one_real_triangle() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(100.0, 0.0);
    let c = Point::new(0.0, 100.0);
    let engine = engine_with(&[a, b, c]);

    let real: Vec<_> = engine
        .triangles()
        .filter(|&k| engine.touches_synthetic(k) == Some(false))
        .collect();
    assert_eq!(real.len(), 1);

    // The real triangle borders the triangulation on all three sides.
    assert_eq!(engine.neighbors(real[0]).count(), 3);
    for neighbor in engine.neighbors(real[0]) {
        assert_eq!(engine.touches_synthetic(neighbor), Some(true));
    }

    assert!(engine.has_gabriel_edge(a, b));
    assert!(engine.has_gabriel_edge(a, c));
}

#[test]
fn unit_square_triangulates_into_two_real_triangles() {
    let square = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
    ];
    let engine = engine_with(&square);
    assert_eq!(real_triangle_count(&engine), 2);

    // The spanning tree restricted to real sites is three unit-length sides.
    let real_weight: f64 = engine
        .emst_edges()
        .filter(|line| !engine.is_synthetic(line.a()) && !engine.is_synthetic(line.b()))
        .map(|line| line.length())
        .sum();
    assert_relative_eq!(real_weight, 3.0);
}

#[test]
fn no_site_lies_strictly_inside_any_circumcircle() {
    let sites = scattered_sites();
    let engine = engine_with(&sites);
    let all_sites: Vec<Point> = engine.sites().collect();
    for key in engine.triangles() {
        let points = engine.triangle_points(key).unwrap();
        for &site in &all_sites {
            if points.contains(&site) {
                continue;
            }
            assert_ne!(
                circumcircle_position(site, &points),
                CircumcirclePosition::Inside,
                "site {site} violates the circumcircle of {points:?}"
            );
        }
    }
}

#[test]
fn facets_are_shared_by_two_triangles_except_on_the_hull() {
    let engine = engine_with(&scattered_sites());
    let mut facet_counts: FxHashMap<[(u64, u64); 2], usize> = FxHashMap::default();
    for key in engine.triangles() {
        let points = engine.triangle_points(key).unwrap();
        for i in 0..3 {
            let mut facet = [points[i], points[(i + 1) % 3]].map(|p| (p.x.to_bits(), p.y.to_bits()));
            facet.sort_unstable();
            *facet_counts.entry(facet).or_default() += 1;
        }
    }
    let hull_facets = facet_counts.values().filter(|&&n| n == 1).count();
    assert_eq!(hull_facets, 3, "exactly the three bounding edges are unshared");
    assert!(facet_counts.values().all(|&n| n == 1 || n == 2));
}

#[test]
fn derived_graphs_nest() {
    let engine = engine_with(&scattered_sites());
    let sites: Vec<Point> = engine.sites().collect();
    for (i, &p) in sites.iter().enumerate() {
        for &q in &sites[i + 1..] {
            if engine.has_emst_edge(p, q) {
                assert!(engine.has_rng_edge(p, q), "EMST edge {p}-{q} missing from RNG");
            }
            if engine.has_rng_edge(p, q) {
                assert!(
                    engine.has_gabriel_edge(p, q),
                    "RNG edge {p}-{q} missing from Gabriel graph"
                );
            }
        }
    }
}

#[test]
fn reinserting_every_site_changes_nothing() {
    let sites = scattered_sites();
    let mut engine = engine_with(&sites);
    let before = triangle_signatures(&engine);
    for &p in &sites {
        engine.insert(p).unwrap();
    }
    assert_eq!(triangle_signatures(&engine), before);
    assert_eq!(engine.site_count(), sites.len() + 3);
}

#[test]
fn removing_a_site_restores_the_prior_triangulation() {
    let sites = scattered_sites();
    let mut engine = engine_with(&sites);
    let before = triangle_signatures(&engine);

    let extra = Point::new(47.0, 47.0);
    engine.insert(extra).unwrap();
    assert_ne!(triangle_signatures(&engine), before);

    engine.remove(extra).unwrap();
    assert_eq!(triangle_signatures(&engine), before);
    assert_eq!(engine.site_count(), sites.len() + 3);
}

#[test]
fn emst_weight_matches_brute_force_kruskal() {
    let sites = scattered_sites();
    let engine = engine_with(&sites);

    let engine_weight: f64 = engine
        .emst_edges()
        .filter(|line| !engine.is_synthetic(line.a()) && !engine.is_synthetic(line.b()))
        .map(|line| line.length())
        .sum();

    // Brute-force Kruskal over all site pairs.
    let mut pairs: Vec<(f64, usize, usize)> = Vec::new();
    for i in 0..sites.len() {
        for j in i + 1..sites.len() {
            pairs.push((sites[i].distance(sites[j]), i, j));
        }
    }
    pairs.sort_by(|x, y| x.0.total_cmp(&y.0));
    let mut parent: Vec<usize> = (0..sites.len()).collect();
    fn root(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }
    let mut expected = 0.0;
    for (weight, i, j) in pairs {
        let (ri, rj) = (root(&mut parent, i), root(&mut parent, j));
        if ri != rj {
            parent[ri] = rj;
            expected += weight;
        }
    }

    assert_relative_eq!(engine_weight, expected, max_relative = 1e-12);
}

#[test]
fn clear_resets_to_the_seed_state() {
    let mut engine = engine_with(&scattered_sites());
    engine.clear();
    assert_eq!(engine.site_count(), 3);
    assert_eq!(engine.triangle_count(), 1);
    assert_eq!(engine.emst_edges().count(), 0);
}
