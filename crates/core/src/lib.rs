//! DNAGen Core Library
//!
//! Génération de séquences ADN synthétiques marquées par une étiquette,
//! statistiques de composition et écriture FASTA.

pub mod error;
pub mod fasta;
pub mod generator;
pub mod logging;
pub mod pipeline;
pub mod sequence;
pub mod stats;

// Réexportations principales
pub use error::{DnaGenError, Result};
pub use fasta::{format_sequence, render_fasta, write_fasta, write_statistics, LineWrap, DEFAULT_LINE_WIDTH};
pub use generator::{splice, SequenceGenerator, Spliced};
pub use logging::init_logging;
// La macro log_operation est exportée à la racine du crate
pub use pipeline::{run, run_with_generator, GenerationRequest, RunConfig, RunReport};
pub use sequence::{Nucleotide, SequenceMetadata, NUCLEOTIDES};
pub use stats::{label_overlap, NucleotideCounts, SequenceStatistics};
