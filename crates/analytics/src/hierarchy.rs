//! Location → organisation pairs feeding the sunburst.
//!
//! Each article links its first two locations with its first two
//! organisations. Articles missing one side are attached to a placeholder
//! so they still show up under the root.

use std::collections::{BTreeMap, HashSet};

use {mediascope_corpus::Article, serde::Serialize};

use crate::counts::count_labels;

pub const ROOT_LABEL: &str = "Monde";
pub const UNKNOWN_LOCATION: &str = "Unknown Loc";
pub const UNKNOWN_ORGANIZATION: &str = "Unknown Org";

const LABELS_PER_ARTICLE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyCount {
    pub location: String,
    pub organization: String,
    pub count: usize,
}

/// (location, organisation) pairs contributed by one article.
pub fn hierarchy_pairs(article: &Article) -> Vec<(&str, &str)> {
    let locations: Vec<&str> = match article.locations.head(LABELS_PER_ARTICLE) {
        [] => vec![UNKNOWN_LOCATION],
        head => head.iter().map(String::as_str).collect(),
    };
    let organizations: Vec<&str> = match article.organizations.head(LABELS_PER_ARTICLE) {
        [] => vec![UNKNOWN_ORGANIZATION],
        head => head.iter().map(String::as_str).collect(),
    };

    locations
        .iter()
        .flat_map(|&loc| organizations.iter().map(move |&org| (loc, org)))
        .collect()
}

/// Grouped pair counts, sorted by location then organisation.
///
/// When the rows produce more than `pair_cap` pairs, only pairs whose
/// location is among the `top_locations` most frequent are kept.
pub fn hierarchy(rows: &[&Article], pair_cap: usize, top_locations: usize) -> Vec<HierarchyCount> {
    let pairs: Vec<(&str, &str)> = rows.iter().flat_map(|a| hierarchy_pairs(a)).collect();

    let allowed: Option<HashSet<String>> = (pairs.len() > pair_cap).then(|| {
        count_labels(pairs.iter().map(|(loc, _)| *loc))
            .into_iter()
            .take(top_locations)
            .map(|c| c.label)
            .collect()
    });

    let mut grouped: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for (loc, org) in pairs {
        if allowed.as_ref().is_some_and(|set| !set.contains(loc)) {
            continue;
        }
        *grouped.entry((loc, org)).or_default() += 1;
    }

    grouped
        .into_iter()
        .map(|((location, organization), count)| HierarchyCount {
            location: location.to_string(),
            organization: organization.to_string(),
            count,
        })
        .collect()
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::fixtures::article};

    #[test]
    fn one_location_two_organizations() {
        let a = article("2023-01-01", &[], &["Paris"], &["ONU", "UE"], &[]);
        assert_eq!(hierarchy_pairs(&a), [("Paris", "ONU"), ("Paris", "UE")]);
    }

    #[test]
    fn only_first_two_of_each_side() {
        let a = article("2023-01-01", &[], &["Paris", "Berlin", "Dakar"], &["ONU", "UE", "FMI"], &[]);
        let pairs = hierarchy_pairs(&a);
        assert_eq!(pairs.len(), 4);
        assert!(!pairs.iter().any(|(l, o)| *l == "Dakar" || *o == "FMI"));
    }

    #[test]
    fn placeholders_for_missing_sides() {
        let a = article("2023-01-01", &[], &[], &["OMS"], &[]);
        assert_eq!(hierarchy_pairs(&a), [(UNKNOWN_LOCATION, "OMS")]);
        let b = article("2023-01-01", &[], &["Alger"], &[], &[]);
        assert_eq!(hierarchy_pairs(&b), [("Alger", UNKNOWN_ORGANIZATION)]);
    }

    #[test]
    fn groups_pairs_across_articles() {
        let a = article("2023-01-01", &[], &["Paris"], &["ONU"], &[]);
        let b = article("2023-01-02", &[], &["Paris"], &["ONU", "UE"], &[]);
        let counts = hierarchy(&[&a, &b], 1000, 20);
        assert_eq!(counts, [
            HierarchyCount {
                location: "Paris".into(),
                organization: "ONU".into(),
                count: 2
            },
            HierarchyCount {
                location: "Paris".into(),
                organization: "UE".into(),
                count: 1
            },
        ]);
    }

    #[test]
    fn cap_keeps_top_locations_only() {
        let a = article("2023-01-01", &[], &["Paris"], &["ONU"], &[]);
        let b = article("2023-01-02", &[], &["Paris"], &["UE"], &[]);
        let c = article("2023-01-03", &[], &["Dakar"], &["ONU"], &[]);
        let counts = hierarchy(&[&a, &b, &c], 2, 1);
        assert!(counts.iter().all(|h| h.location == "Paris"));
        assert_eq!(counts.iter().map(|h| h.count).sum::<usize>(), 2);
    }

    #[test]
    fn under_cap_keeps_everything() {
        let a = article("2023-01-01", &[], &["Paris"], &["ONU"], &[]);
        let c = article("2023-01-03", &[], &["Dakar"], &["ONU"], &[]);
        assert_eq!(hierarchy(&[&a, &c], 2, 1).len(), 2);
    }
}
