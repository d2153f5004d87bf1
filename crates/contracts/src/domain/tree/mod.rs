use serde::{Deserialize, Serialize};

/// One buffalo in the family-tree projection.
///
/// The tree tab renders this structure as-is; it never derives the herd
/// itself. `total_children` is the count of direct offspring, precomputed
/// by whoever builds the tree.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HerdNode {
    pub name: String,

    /// Month-year label, e.g. "Jan-2024".
    #[serde(default)]
    pub born: String,

    /// Month-year when the buffalo starts producing milk, e.g. "Jan-2027".
    #[serde(rename = "milkStarts", default)]
    pub milk_starts: String,

    #[serde(rename = "totalChildren", default)]
    pub total_children: u32,

    #[serde(default)]
    pub children: Vec<HerdNode>,
}

impl HerdNode {
    /// Number of buffaloes in this subtree, the root included.
    pub fn herd_size(&self) -> u32 {
        1 + self.children.iter().map(HerdNode::herd_size).sum::<u32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_herd_size_counts_subtree() {
        let root = HerdNode {
            name: "B1".into(),
            children: vec![
                HerdNode {
                    name: "B1.1".into(),
                    children: vec![HerdNode {
                        name: "B1.1.1".into(),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
                HerdNode {
                    name: "B1.2".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(root.herd_size(), 4);
    }
}
