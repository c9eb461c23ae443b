//! Post-processing argument logic
//!
//! This module turns parsed CLI arguments into a validated [`QueryCriteria`]
//! record, applying the criteria decision table: exactly one retrieval
//! criterion, except that mirna and targeting combine into a pair query.

use std::path::Path;

use crate::cli::args::{Args, Organism};
use crate::errors::{Result, TriplexqError};
use crate::fs::read_identifier_list;

/// Maximum number of miRNA identifiers in a single query.
pub const MAX_MIRNAS: usize = 2;

/// A validated retrieval criterion.
///
/// Invalid combinations (three miRNAs, targeting without mirna, two
/// unrelated criteria) are rejected during construction, so the URL builder
/// can match on this exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// One or more gene identifiers
    Gene(Vec<String>),
    /// A single triplex identifier
    Triplex(String),
    /// A single KEGG pathway identifier
    Pathway(String),
    /// One or two miRNA identifiers
    Mirna(Vec<String>),
    /// miRNA identifiers restricted to a set of target genes
    MirnaTargeting {
        mirna: Vec<String>,
        targets: Vec<String>,
    },
}

/// A fully validated query, ready for URL building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCriteria {
    pub organism: Organism,
    pub criterion: Criterion,
}

/// Validate parsed CLI arguments into a [`QueryCriteria`] record.
pub fn process_args(args: &Args) -> Result<QueryCriteria> {
    let organism = args.organism.ok_or_else(|| {
        TriplexqError::argument("no organism specified (use -o Human or -o Mouse)")
    })?;

    let gene = args
        .gene
        .as_deref()
        .map(|v| resolve_identifiers("-g", v))
        .transpose()?;
    let mirna = args
        .mirna
        .as_deref()
        .map(|v| split_identifiers("-m", v))
        .transpose()?;
    let targeting = args
        .targeting
        .as_deref()
        .map(|v| resolve_identifiers("-x", v))
        .transpose()?;

    if let Some(ref ids) = mirna {
        if ids.len() > MAX_MIRNAS {
            return Err(TriplexqError::argument(format!(
                "at most {} miRNA identifiers may be queried together (got {})",
                MAX_MIRNAS,
                ids.len()
            )));
        }
    }

    let criterion = select_criterion(gene, args.triplex.clone(), args.pathway.clone(), mirna, targeting)?;

    Ok(QueryCriteria {
        organism,
        criterion,
    })
}

/// Apply the criteria decision table.
fn select_criterion(
    gene: Option<Vec<String>>,
    triplex: Option<String>,
    pathway: Option<String>,
    mirna: Option<Vec<String>>,
    targeting: Option<Vec<String>>,
) -> Result<Criterion> {
    let supplied = [
        gene.is_some(),
        triplex.is_some(),
        pathway.is_some(),
        mirna.is_some(),
        targeting.is_some(),
    ]
    .iter()
    .filter(|&&s| s)
    .count();

    match (gene, triplex, pathway, mirna, targeting) {
        (None, None, None, None, None) => Err(TriplexqError::argument(
            "no retrieval criterion specified (use one of -g, -t, -p, -m)",
        )),
        (None, None, None, Some(mirna), Some(targets)) => {
            Ok(Criterion::MirnaTargeting { mirna, targets })
        }
        (None, None, None, None, Some(_)) => Err(TriplexqError::argument(
            "-x/--targeting requires -m/--mirna",
        )),
        (Some(ids), None, None, None, None) => Ok(Criterion::Gene(ids)),
        (None, Some(id), None, None, None) => Ok(Criterion::Triplex(id)),
        (None, None, Some(id), None, None) => Ok(Criterion::Pathway(id)),
        (None, None, None, Some(ids), None) => Ok(Criterion::Mirna(ids)),
        _ => Err(TriplexqError::argument(format!(
            "{supplied} retrieval criteria specified; only one is allowed \
             (except -m combined with -x)"
        ))),
    }
}

/// Resolve a dual-mode flag value into an identifier list.
///
/// If the value names an existing filesystem path the identifiers are read
/// from it, one per line. Otherwise the value itself is split on commas. A
/// path that exists but cannot be read is an error; a path that does not
/// exist is just a literal list.
fn resolve_identifiers(flag: &str, value: &str) -> Result<Vec<String>> {
    let path = Path::new(value);
    let ids = if path.exists() {
        read_identifier_list(path)?
    } else {
        split_list(value)
    };
    non_empty(flag, ids)
}

/// Split a comma-separated flag value, without the file-path mode.
fn split_identifiers(flag: &str, value: &str) -> Result<Vec<String>> {
    non_empty(flag, split_list(value))
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

fn non_empty(flag: &str, ids: Vec<String>) -> Result<Vec<String>> {
    if ids.is_empty() {
        return Err(TriplexqError::argument(format!(
            "{flag} resolved to an empty identifier list"
        )));
    }
    Ok(ids)
}
