//! API path construction
//!
//! Maps a validated [`QueryCriteria`] record to one TriplexRNA request path.
//! Pure string assembly: same record in, same path out, no I/O.
//!
//! Identifiers are joined with `/` and are not percent-encoded; the database
//! uses URL-safe gene, pathway, and miRNA names.

use crate::cli::process::{Criterion, QueryCriteria};

/// Render the request path for a query, e.g. `Human/genes/CISH/CTPS2`.
pub fn build_path(criteria: &QueryCriteria) -> String {
    let segments = match &criteria.criterion {
        // A single gene and a gene list are distinct API routes
        Criterion::Gene(ids) if ids.len() == 1 => format!("gene/{}", ids[0]),
        Criterion::Gene(ids) => format!("genes/{}", ids.join("/")),
        Criterion::Triplex(id) => format!("triplex/{id}"),
        Criterion::Pathway(id) => format!("pathway/{id}"),
        Criterion::Mirna(ids) => format!("mirna/{}", ids.join("/")),
        Criterion::MirnaTargeting { mirna, targets } => format!(
            "mirna/{}/targeting/{}",
            mirna.join("/"),
            targets.join("/")
        ),
    };

    format!("{}/{}", criteria.organism, segments)
}

/// Render the full request URL against an API base.
pub fn build_url(base: &str, criteria: &QueryCriteria) -> String {
    format!("{}/{}", base.trim_end_matches('/'), build_path(criteria))
}
