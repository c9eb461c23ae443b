//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for triplexq.

use clap::{Parser, ValueEnum};
use std::fmt;

/// Model organism scope of a query.
///
/// The TriplexRNA API uses the capitalized species name as the first URL
/// segment, so the value names are exact.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Organism {
    #[value(name = "Human")]
    Human,
    #[value(name = "Mouse")]
    Mouse,
}

impl fmt::Display for Organism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Organism::Human => write!(f, "Human"),
            Organism::Mouse => write!(f, "Mouse"),
        }
    }
}

/// triplexq - query the TriplexRNA database of cooperative miRNA triplexes
///
/// Exactly one retrieval criterion may be given per invocation, except that
/// `--mirna` and `--targeting` combine into a single miRNA-pair/target query.
#[derive(Parser, Debug, Clone)]
#[command(name = "triplexq", version, about, long_about = None)]
#[command(after_help = "\
Examples:
  triplexq -o Human -g CDKN1A
  triplexq -o Human -g CISH,CTPS2
  triplexq -o Human -g genes.txt
  triplexq -o Human -t 529801
  triplexq -o Human -p hsa05204
  triplexq -o Human -m hsa-miR-210,hsa-let-7b
  triplexq -o Human -m hsa-miR-210,hsa-let-7b -x HIF1A,PROK1")]
pub struct Args {
    /// Query organism
    #[arg(short = 'o', long, value_enum, value_name = "ORGANISM")]
    pub organism: Option<Organism>,

    /// Gene identifiers: a comma-separated list, or a path to a file with
    /// one identifier per line
    #[arg(short = 'g', long, value_name = "GENE[,GENE...]|FILE")]
    pub gene: Option<String>,

    /// Triplex identifier
    #[arg(short = 't', long, value_name = "TRIPLEX_ID")]
    pub triplex: Option<String>,

    /// KEGG pathway identifier
    #[arg(short = 'p', long, value_name = "PATHWAY_ID")]
    pub pathway: Option<String>,

    /// One or two comma-separated miRNA identifiers
    #[arg(short = 'm', long, value_name = "MIRNA[,MIRNA]")]
    pub mirna: Option<String>,

    /// Target genes for a miRNA query: a comma-separated list, or a path to
    /// a file with one identifier per line (requires --mirna)
    #[arg(short = 'x', long, value_name = "GENE[,GENE...]|FILE")]
    pub targeting: Option<String>,
}
