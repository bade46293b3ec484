use mediascope_corpus::{Article, Labels};

/// Article with the given date and entity lists; text fields are filler.
pub fn article(date: &str, kws: &[&str], loc: &[&str], org: &[&str], per: &[&str]) -> Article {
    Article {
        date: date.parse().unwrap_or_default(),
        title: format!("Article du {date}"),
        content: String::new(),
        url: None,
        keywords: Labels::new(kws.iter().copied()),
        locations: Labels::new(loc.iter().copied()),
        organizations: Labels::new(org.iter().copied()),
        persons: Labels::new(per.iter().copied()),
    }
}
