//! Deterministic herd projection for the family-tree tab.
//!
//! The tab has no backend feed; the tree is projected client-side from a
//! simple husbandry model: a buffalo starts producing milk (and calving)
//! a fixed number of years after birth, then delivers one calf per year
//! until the projection horizon.

use contracts::domain::tree::HerdNode;

/// Years from birth to first milk (and first calf).
pub const MATURITY_YEARS: u32 = 3;

/// All events are pinned to the purchase month.
const MONTH: &str = "Jan";

fn label(year: u32) -> String {
    format!("{}-{}", MONTH, year)
}

/// Project the descendants of one purchased buffalo.
///
/// Children are named `<parent>.<n>` in birth order, so the root "B1" yields
/// "B1.1", "B1.2", ... and grandchildren "B1.1.1" and so on. The projection
/// is bounded: nobody is born after `horizon_year`.
pub fn project_herd(name: &str, born_year: u32, horizon_year: u32) -> HerdNode {
    let milk_year = born_year + MATURITY_YEARS;

    let mut children = Vec::new();
    if milk_year <= horizon_year {
        for (i, birth_year) in (milk_year..=horizon_year).enumerate() {
            let child_name = format!("{}.{}", name, i + 1);
            children.push(project_herd(&child_name, birth_year, horizon_year));
        }
    }

    HerdNode {
        name: name.to_string(),
        born: label(born_year),
        milk_starts: label(milk_year),
        total_children: children.len() as u32,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calving_starts_at_maturity() {
        let root = project_herd("B1", 2025, 2030);
        assert_eq!(root.born, "Jan-2025");
        assert_eq!(root.milk_starts, "Jan-2028");
        // one calf per year for 2028, 2029, 2030
        assert_eq!(root.total_children, 3);
        assert_eq!(root.children[0].born, "Jan-2028");
        assert_eq!(root.children[2].born, "Jan-2030");
    }

    #[test]
    fn test_horizon_bounds_every_generation() {
        let root = project_herd("B1", 2025, 2030);
        // first calf matures in 2031, past the horizon
        assert!(root.children.iter().all(|c| c.children.is_empty()));

        fn max_born_year(node: &HerdNode) -> u32 {
            let own = node.born[4..].parse().unwrap();
            node.children
                .iter()
                .map(max_born_year)
                .fold(own, u32::max)
        }
        let root = project_herd("B1", 2024, 2034);
        assert!(max_born_year(&root) <= 2034);
    }

    #[test]
    fn test_names_follow_lineage() {
        let root = project_herd("B1", 2025, 2032);
        assert_eq!(root.children[0].name, "B1.1");
        assert_eq!(root.children[1].name, "B1.2");
        let first = &root.children[0];
        // born 2028, matures 2031: calves in 2031 and 2032
        assert_eq!(first.total_children, 2);
        assert_eq!(first.children[0].name, "B1.1.1");
    }

    #[test]
    fn test_total_children_matches_structure() {
        fn check(node: &HerdNode) {
            assert_eq!(node.total_children as usize, node.children.len());
            node.children.iter().for_each(check);
        }
        check(&project_herd("B1", 2025, 2035));
    }

    #[test]
    fn test_projection_is_deterministic() {
        assert_eq!(project_herd("B1", 2025, 2031), project_herd("B1", 2025, 2031));
    }

    #[test]
    fn test_short_horizon_yields_single_node() {
        let root = project_herd("B1", 2025, 2026);
        assert!(root.children.is_empty());
        assert_eq!(root.herd_size(), 1);
    }
}
