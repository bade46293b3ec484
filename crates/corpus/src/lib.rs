//! News article corpus: the record model, the list-literal cell codec, CSV
//! loading, raw JSON preprocessing and a synthetic corpus generator.

pub mod error;
pub mod ingest;
pub mod literal;
pub mod model;
pub mod synthetic;
pub mod table;

pub use {
    error::{CorpusError, Result},
    literal::{format_list_literal, parse_list_literal},
    model::{Article, Corpus, EntityKind, Labels},
    table::{LoadReport, load_corpus, parse_date, read_corpus, write_csv},
};
