//! Relational features
//!
//! Points are grouped into proximity groups, the groups are assigned body
//! roles, and the vector describes how the groups relate to each other.
//!
//! # Roles
//!
//! - **head** - the group with the largest mean distance to the others
//! - **trunk** - the group whose center is nearest the overall centroid
//! - **arms** - groups offset from the trunk mostly sideways, by more than
//!   [`LIMB_OFFSET`]
//! - **legs** - groups more than [`LIMB_OFFSET`] below the trunk
//!
//! # Layout
//!
//! | index | feature |
//! |---|---|
//! | 0, 1 | head size, trunk size |
//! | 2, 3 | arm group count, leg group count |
//! | 4 | head / trunk size x10 |
//! | 5..=7 | head-trunk, trunk-arm and trunk-leg links |
//! | 8, 9 | arm balance, leg balance |
//! | 10..=12 | head-trunk, trunk-arm and trunk-leg placement |
//! | 13 | largest / smallest group size |
//! | 14 | mean group size |
//! | 15 | mean group distance to the centroid |
//! | 16 | linked group pairs |
//! | 17 | linked pairs per group |
//! | 18 | largest group size |
//! | 19 | largest distance between group centers |
//! | 20..=24 | hierarchical, symmetric, centralized, radial and linear patterns |
//! | 25 | head / trunk size x10 |
//! | 26, 27 | arm points / trunk size, leg points / trunk size |
//! | 28 | arm balance + leg balance |
//! | 29 | mean group size, 0 for a single group |

use stickfig_core::{AnalysisParams, PointSet, ProximityGraph};
use tracing::debug;

/// Number of values in a relational feature vector.
pub const RELATIONAL_FEATURE_LEN: usize = 30;

/// Minimum offset from the trunk for a limb group.
pub const LIMB_OFFSET: f64 = 30.0;

/// Group centers closer than this are linked.
pub const LINK_DISTANCE: f64 = 80.0;

/// Group centers closer than this are well placed relative to each other.
pub const PLACEMENT_DISTANCE: f64 = 100.0;

/// Groups farther than this from the centroid count toward the radial pattern.
pub const RADIAL_DISTANCE: f64 = 50.0;

/// Minimum absolute center correlation for the linear pattern.
pub const LINEAR_CORRELATION: f64 = 0.7;

/// A connected group of points under the group radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Slot indices of the members
    pub members: Vec<usize>,
    /// Mean member position
    pub center: (f64, f64),
}

impl Group {
    fn new(points: &PointSet, members: Vec<usize>) -> Self {
        let n = members.len().max(1) as f64;
        let (sx, sy) = members
            .iter()
            .filter_map(|&i| points.get(i))
            .fold((0.0, 0.0), |(sx, sy), p| {
                (sx + f64::from(p.x), sy + f64::from(p.y))
            });
        Self {
            members,
            center: (sx / n, sy / n),
        }
    }

    /// Number of member points.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    fn distance_to(&self, (x, y): (f64, f64)) -> f64 {
        (self.center.0 - x).hypot(self.center.1 - y)
    }
}

/// Partition the valid points into proximity groups, in slot order.
pub fn group_points(points: &PointSet, radius: f64) -> Vec<Group> {
    ProximityGraph::new(points, radius)
        .components()
        .into_iter()
        .map(|members| Group::new(points, members))
        .collect()
}

/// Body roles assigned to groups, as indices into the group list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Anatomy {
    /// Group farthest on average from the others
    pub head: usize,
    /// Group nearest the overall centroid
    pub trunk: usize,
    /// Groups offset mostly sideways from the trunk
    pub arms: Vec<usize>,
    /// Groups below the trunk
    pub legs: Vec<usize>,
}

impl Anatomy {
    /// Assign roles; `None` when there are no groups.
    pub fn assign(groups: &[Group], centroid: (f64, f64)) -> Option<Self> {
        if groups.is_empty() {
            return None;
        }

        let mut head = 0;
        let mut best = 0.0;
        for i in 0..groups.len() {
            let d = mean_distance_to_others(groups, i);
            if d > best {
                best = d;
                head = i;
            }
        }

        let mut trunk = 0;
        let mut nearest = f64::MAX;
        for (i, g) in groups.iter().enumerate() {
            let d = g.distance_to(centroid);
            if d < nearest {
                nearest = d;
                trunk = i;
            }
        }

        let (tx, ty) = groups[trunk].center;
        let mut arms = Vec::new();
        let mut legs = Vec::new();
        for (i, g) in groups.iter().enumerate() {
            if i == trunk {
                continue;
            }
            let dx = (g.center.0 - tx).abs();
            let dy = g.center.1 - ty;
            if dx > dy.abs() && dx > LIMB_OFFSET {
                arms.push(i);
            }
            if dy > LIMB_OFFSET {
                legs.push(i);
            }
        }

        Some(Self {
            head,
            trunk,
            arms,
            legs,
        })
    }
}

fn mean_distance_to_others(groups: &[Group], index: usize) -> f64 {
    if groups.len() <= 1 {
        return 0.0;
    }
    let sum: f64 = groups
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != index)
        .map(|(_, g)| g.distance_to(groups[index].center))
        .sum();
    sum / (groups.len() - 1) as f64
}

fn linked(a: &Group, b: &Group) -> bool {
    a.distance_to(b.center) < LINK_DISTANCE
}

fn placed(a: &Group, b: &Group) -> bool {
    a.distance_to(b.center) < PLACEMENT_DISTANCE
}

fn size_ratio(a: &Group, b: &Group) -> i32 {
    if b.size() == 0 {
        return 0;
    }
    (a.size() as f64 / b.size() as f64 * 10.0) as i32
}

/// 1 when at least two groups split evenly (within one) around their mean x.
fn balance(groups: &[Group], indices: &[usize]) -> i32 {
    if indices.len() < 2 {
        return 0;
    }
    let mean_x = indices.iter().map(|&i| groups[i].center.0).sum::<f64>() / indices.len() as f64;
    let left = indices
        .iter()
        .filter(|&&i| groups[i].center.0 < mean_x)
        .count() as i32;
    let right = indices.len() as i32 - left;
    i32::from((left - right).abs() <= 1)
}

/// Pearson correlation of two equally long samples; 0 when either is flat.
pub(crate) fn correlation(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return 0.0;
    }
    let n = xs.len() as f64;
    let mx = xs.iter().sum::<f64>() / n;
    let my = ys.iter().sum::<f64>() / n;
    let (mut num, mut vx, mut vy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mx, y - my);
        num += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }
    if vx == 0.0 || vy == 0.0 {
        return 0.0;
    }
    num / (vx * vy).sqrt()
}

/// Compute the relational vector of a normalized point set.
///
/// An empty set yields all zeros.
pub fn relational_features(points: &PointSet, params: &AnalysisParams) -> Vec<i32> {
    let mut f = vec![0; RELATIONAL_FEATURE_LEN];
    let Some(centroid) = points.centroid() else {
        return f;
    };
    let groups = group_points(points, params.group_radius);
    let Some(anatomy) = Anatomy::assign(&groups, centroid) else {
        return f;
    };
    debug!(
        groups = groups.len(),
        arms = anatomy.arms.len(),
        legs = anatomy.legs.len(),
        "Assigned group roles"
    );

    let n = groups.len() as i32;
    let head = &groups[anatomy.head];
    let trunk = &groups[anatomy.trunk];
    let links_from_trunk = |limbs: &[usize]| {
        limbs.iter().filter(|&&i| linked(trunk, &groups[i])).count() as i32
    };
    let placed_from_trunk = |limbs: &[usize]| {
        limbs.iter().filter(|&&i| placed(trunk, &groups[i])).count() as i32
    };
    let limb_points = |limbs: &[usize]| limbs.iter().map(|&i| groups[i].size()).sum::<usize>() as i32;

    f[0] = head.size() as i32;
    f[1] = trunk.size() as i32;
    f[2] = anatomy.arms.len() as i32;
    f[3] = anatomy.legs.len() as i32;
    f[4] = size_ratio(head, trunk);
    f[5] = i32::from(linked(head, trunk));
    f[6] = links_from_trunk(&anatomy.arms);
    f[7] = links_from_trunk(&anatomy.legs);
    f[8] = balance(&groups, &anatomy.arms);
    f[9] = balance(&groups, &anatomy.legs);
    f[10] = i32::from(placed(head, trunk));
    f[11] = placed_from_trunk(&anatomy.arms);
    f[12] = placed_from_trunk(&anatomy.legs);

    let sizes: Vec<i32> = groups.iter().map(|g| g.size() as i32).collect();
    let total: i32 = sizes.iter().sum();
    let largest = sizes.iter().copied().max().unwrap_or(0);
    let smallest = sizes.iter().copied().min().unwrap_or(0);
    if n >= 2 && smallest > 0 {
        f[13] = largest / smallest;
    }
    f[14] = total / n;
    f[15] = (groups.iter().map(|g| g.distance_to(centroid)).sum::<f64>() / f64::from(n)) as i32;

    let mut pairs = 0;
    let mut diameter: f64 = 0.0;
    let mut link_counts = vec![0; groups.len()];
    for i in 0..groups.len() {
        for j in i + 1..groups.len() {
            diameter = diameter.max(groups[i].distance_to(groups[j].center));
            if linked(&groups[i], &groups[j]) {
                pairs += 1;
                link_counts[i] += 1;
                link_counts[j] += 1;
            }
        }
    }
    f[16] = pairs;
    f[17] = pairs / n;
    f[18] = largest;
    f[19] = diameter as i32;

    let all: Vec<usize> = (0..groups.len()).collect();
    f[20] = i32::from(n >= 3 && link_counts.iter().any(|&c| c >= 2));
    f[21] = balance(&groups, &all);
    let near = groups
        .iter()
        .filter(|g| g.distance_to(centroid) < PLACEMENT_DISTANCE)
        .count() as i32;
    f[22] = i32::from(near >= n / 2);
    let far = groups
        .iter()
        .filter(|g| g.distance_to(centroid) > RADIAL_DISTANCE)
        .count() as i32;
    f[23] = i32::from(n >= 3 && far >= n / 2);
    if n >= 3 {
        let xs: Vec<f64> = groups.iter().map(|g| g.center.0).collect();
        let ys: Vec<f64> = groups.iter().map(|g| g.center.1).collect();
        f[24] = i32::from(correlation(&xs, &ys).abs() > LINEAR_CORRELATION);
    }

    f[25] = f[4];
    if trunk.size() > 0 {
        if !anatomy.arms.is_empty() {
            f[26] = limb_points(&anatomy.arms) / trunk.size() as i32;
        }
        if !anatomy.legs.is_empty() {
            f[27] = limb_points(&anatomy.legs) / trunk.size() as i32;
        }
    }
    f[28] = f[8] + f[9];
    if n >= 2 {
        f[29] = total / n;
    }

    f
}
