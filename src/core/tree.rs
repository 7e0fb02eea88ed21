//! Recruitment edges and the tree the visualization renders.
//!
//! Recruit assignment is a deterministic part of the join transition: every
//! joiner is attached to the earliest investor that still has recruiting
//! capacity, so the tree is always rooted at the founder and every recruit
//! id refers to an investor that exists. The visualization only reads the
//! result; it never owns a second copy of the rules.

use crate::core::constants::{MAX_RECRUITS_PER_INVESTOR, RECRUIT_LEVEL_BUDGET};
use crate::core::investor::Investor;

/// How many direct recruits an investor at `level` can be credited with.
/// Deeper tiers recruit less; everyone can take at least one.
pub fn recruit_capacity(level: u32) -> usize {
    RECRUIT_LEVEL_BUDGET
        .saturating_sub(level)
        .clamp(1, MAX_RECRUITS_PER_INVESTOR) as usize
}

/// Credit `new_id` to the earliest investor with spare capacity. When every
/// earlier investor is full, the most recent one takes the overflow so the
/// tree stays total.
///
/// Callers must have already appended the investor with id `new_id`;
/// candidates are exactly the investors that joined before it.
pub(crate) fn assign_recruiter(investors: &mut [Investor], new_id: u32) {
    let earlier = (new_id - 1) as usize;
    if earlier == 0 {
        return; // the founder has no recruiter
    }
    let idx = investors[..earlier]
        .iter()
        .position(|inv| inv.recruits.len() < recruit_capacity(inv.level))
        .unwrap_or(earlier - 1);
    investors[idx].recruits.push(new_id);
}

/// One node of the recruitment tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: u32,
    pub depth: u32,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Total number of nodes in this subtree, itself included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}

/// Build the recruitment tree rooted at the founder. Recomputed on demand;
/// the investor list stays the single source of truth.
pub fn build_tree(investors: &[Investor]) -> Option<TreeNode> {
    let root = investors.first()?;
    Some(build_node(investors, root.id, 0))
}

fn build_node(investors: &[Investor], id: u32, depth: u32) -> TreeNode {
    let investor = &investors[(id - 1) as usize];
    TreeNode {
        id,
        depth,
        children: investor
            .recruits
            .iter()
            .map(|&child| build_node(investors, child, depth + 1))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::investor::join_level;

    fn investors_with_joiners(count: usize) -> Vec<Investor> {
        let mut investors = vec![Investor::founder()];
        for _ in 0..count {
            let id = investors.len() as u32 + 1;
            let level = join_level(investors.len() + 1);
            investors.push(Investor::joiner(id, 500.0, 1, level));
            assign_recruiter(&mut investors, id);
        }
        investors
    }

    #[test]
    fn capacity_shrinks_with_depth() {
        assert_eq!(recruit_capacity(0), 3);
        assert_eq!(recruit_capacity(3), 3);
        assert_eq!(recruit_capacity(4), 2);
        assert_eq!(recruit_capacity(5), 1);
        assert_eq!(recruit_capacity(6), 1);
        assert_eq!(recruit_capacity(12), 1);
    }

    #[test]
    fn founder_takes_the_first_three() {
        let investors = investors_with_joiners(5);
        assert_eq!(investors[0].recruits, vec![2, 3, 4]);
        assert_eq!(investors[1].recruits, vec![5, 6]);
    }

    #[test]
    fn every_recruit_id_exists_and_is_later() {
        let investors = investors_with_joiners(40);
        for inv in &investors {
            for &recruit in &inv.recruits {
                assert!(recruit as usize <= investors.len());
                assert!(recruit > inv.id, "recruits always join after their recruiter");
            }
        }
    }

    #[test]
    fn tree_is_total_and_rooted_at_founder() {
        let investors = investors_with_joiners(25);
        let tree = build_tree(&investors).unwrap();
        assert_eq!(tree.id, 1);
        assert_eq!(tree.depth, 0);
        assert_eq!(tree.size(), investors.len());
    }

    #[test]
    fn empty_scheme_has_no_tree() {
        assert!(build_tree(&[]).is_none());
    }
}
