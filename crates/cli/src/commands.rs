//! Subcommand bodies. Each takes the resolved config plus its own flags.

use std::{fmt::Write as _, path::Path};

use {
    anyhow::Context,
    mediascope_analytics::{FilterParams, Kpis, LabelCount, filter, kpis, top_n},
    mediascope_config::DashboardConfig,
    mediascope_corpus::{Corpus, EntityKind, ingest, load_corpus, synthetic, write_csv},
    mediascope_web::AppState,
    serde::Serialize,
    tracing::info,
};

fn load(path: &Path) -> anyhow::Result<Corpus> {
    let (corpus, _) =
        load_corpus(path).with_context(|| format!("failed to load corpus {}", path.display()))?;
    Ok(corpus)
}

pub async fn serve(config: DashboardConfig) -> anyhow::Result<()> {
    config.validate().context("invalid configuration")?;
    let corpus = load(&config.data.csv_path)?;
    let state = AppState::new(corpus, config.limits.clone());
    mediascope_web::serve(&config.server, state).await?;
    Ok(())
}

pub fn preprocess(raw_dir: &Path, output: &Path) -> anyhow::Result<()> {
    let report = ingest::preprocess(raw_dir, output)
        .with_context(|| format!("failed to preprocess {}", raw_dir.display()))?;
    println!(
        "{} articles written to {} ({} files read, {} failed, {} articles dropped)",
        report.articles_written,
        output.display(),
        report.files_read,
        report.files_failed,
        report.articles_dropped,
    );
    Ok(())
}

pub fn generate(count: usize, seed: u64, output: &Path) -> anyhow::Result<()> {
    let articles = synthetic::generate(count, seed);
    write_csv(output, &articles)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(count, seed, path = %output.display(), "synthetic corpus written");
    println!("{count} synthetic articles written to {}", output.display());
    Ok(())
}

/// KPIs and rankings for one filter state, printable without a browser.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub filters: FilterParams,
    pub kpis: Kpis,
    pub top_keywords: Vec<LabelCount>,
    pub top_persons: Vec<LabelCount>,
    pub top_organizations: Vec<LabelCount>,
    pub top_locations: Vec<LabelCount>,
}

impl Summary {
    pub fn compute(corpus: &Corpus, params: FilterParams, top: usize) -> Self {
        let rows = filter(corpus, &params);
        Self {
            kpis: kpis(&rows, &params),
            top_keywords: top_n(&rows, EntityKind::Keyword, top),
            top_persons: top_n(&rows, EntityKind::Person, top),
            top_organizations: top_n(&rows, EntityKind::Organization, top),
            top_locations: top_n(&rows, EntityKind::Location, top),
            filters: params,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total articles    {}", self.kpis.total_display);
        let _ = writeln!(out, "Top mot-clé       {}", self.kpis.top_keyword);
        let _ = writeln!(out, "Top personnalité  {}", self.kpis.top_person);
        let _ = writeln!(out, "Top organisation  {}", self.kpis.top_organization);

        let sections = [
            ("Mots-clés", &self.top_keywords),
            ("Personnalités", &self.top_persons),
            ("Organisations", &self.top_organizations),
            ("Lieux", &self.top_locations),
        ];
        for (title, counts) in sections {
            if counts.is_empty() {
                continue;
            }
            let _ = writeln!(out, "\n{title}");
            for c in counts {
                let _ = writeln!(out, "  {:>6}  {}", c.count, c.label);
            }
        }
        out
    }
}

pub fn summary(csv_path: &Path, params: FilterParams, top: usize, json: bool) -> anyhow::Result<()> {
    let corpus = load(csv_path)?;
    let summary = Summary::compute(&corpus, params, top);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render());
    }
    Ok(())
}
