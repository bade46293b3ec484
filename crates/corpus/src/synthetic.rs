//! Synthetic corpus for demos and local development.
//!
//! Entities are drawn from small fixed vocabularies so the charts show
//! recognisable patterns (recurring topics, overlapping locations).

use {
    chrono::{Days, NaiveDate},
    rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom},
};

use crate::model::{Article, Labels};

const TOPICS: &[&str] = &[
    "Politique",
    "Économie",
    "Santé",
    "Sport",
    "Culture",
    "Technologie",
    "Environnement",
];
const LOCATIONS: &[&str] = &[
    "Paris",
    "Londres",
    "Washington",
    "Moscou",
    "Pékin",
    "Bruxelles",
    "Berlin",
    "Dakar",
    "Alger",
];
const ORGANIZATIONS: &[&str] = &[
    "ONU", "UE", "OTAN", "OMS", "FMI", "Google", "Tesla", "Total", "Sanofi",
];
const PERSONS: &[&str] = &[
    "Macron",
    "Biden",
    "Poutine",
    "Zelensky",
    "Musk",
    "Mbappé",
    "Von der Leyen",
    "Xi Jinping",
];

/// Days after the start date an article may be published.
const DATE_SPREAD_DAYS: u64 = 700;

fn sample(rng: &mut StdRng, pool: &[&str], min: usize, max: usize) -> Vec<String> {
    let amount = rng.random_range(min..=max);
    pool.choose_multiple(rng, amount)
        .map(|s| (*s).to_string())
        .collect()
}

/// Generate `n` articles. The same seed always yields the same corpus.
pub fn generate(n: usize, seed: u64) -> Vec<Article> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default();

    (0..n)
        .map(|_| {
            let offset = rng.random_range(0..=DATE_SPREAD_DAYS);
            let date = start.checked_add_days(Days::new(offset)).unwrap_or(start);
            let topic = TOPICS.choose(&mut rng).copied().unwrap_or("Politique");

            let mut keywords = vec![topic.to_string()];
            keywords.extend(sample(&mut rng, TOPICS, 0, 2));
            let locations = sample(&mut rng, LOCATIONS, 1, 3);
            let organizations = sample(&mut rng, ORGANIZATIONS, 0, 2);
            let persons = sample(&mut rng, PERSONS, 0, 2);

            let last_keyword = keywords.last().map(String::as_str).unwrap_or(topic);
            let title = format!("Article sur {topic} et {last_keyword}");
            let content = format!(
                "Ceci est un article fictif parlant de {} à {}.",
                keywords.join(", "),
                locations.join(", ")
            );

            Article {
                date,
                title,
                content,
                url: None,
                keywords: Labels::new(keywords),
                locations: Labels::new(locations),
                organizations: Labels::new(organizations),
                persons: Labels::new(persons),
            }
        })
        .collect()
}
