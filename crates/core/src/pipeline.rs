//! Enchaînement génération → insertion → statistiques → écriture

use crate::error::Result;
use crate::fasta::{write_fasta, write_statistics, LineWrap};
use crate::generator::SequenceGenerator;
use crate::log_operation;
use crate::sequence::SequenceMetadata;
use crate::stats::SequenceStatistics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Paramètres saisis par l'utilisateur
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Nombre de bases à générer
    pub length: usize,
    pub metadata: SequenceMetadata,
    /// Étiquette insérée telle quelle (nom de l'utilisateur)
    pub label: String,
}

/// Configuration d'exécution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Répertoire des fichiers produits
    pub output_dir: PathBuf,
    /// Découpage du corps FASTA
    pub wrap: LineWrap,
    /// Seed pour une exécution reproductible
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            wrap: LineWrap::None,
            seed: None,
        }
    }
}

/// Résultat d'une exécution
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Séquence finale, étiquette comprise
    pub sequence: String,
    pub original_length: usize,
    pub insertion_position: usize,
    pub statistics: SequenceStatistics,
    pub fasta_path: PathBuf,
    pub stats_path: PathBuf,
}

/// Exécute le pipeline complet
///
/// Les deux fichiers sont écrits l'un après l'autre ; si le second échoue,
/// le premier reste sur le disque.
pub fn run(request: &GenerationRequest, config: &RunConfig) -> Result<RunReport> {
    let mut generator = SequenceGenerator::from_seed_option(config.seed);
    run_with_generator(request, config, &mut generator)
}

/// Variante avec un générateur fourni par l'appelant
pub fn run_with_generator(
    request: &GenerationRequest,
    config: &RunConfig,
    generator: &mut SequenceGenerator,
) -> Result<RunReport> {
    info!(
        id = %request.metadata.id,
        length = request.length,
        seed = ?generator.seed(),
        "Génération de la séquence"
    );

    let original = log_operation!("generate", { generator.generate(request.length)? });
    let spliced = log_operation!("insert_label", {
        generator.insert_label(&original, &request.label)?
    });
    let statistics = log_operation!("statistics", {
        SequenceStatistics::calculate(&spliced.sequence, &request.label)?
    });

    let fasta_path = config.output_dir.join(request.metadata.fasta_file_name());
    let stats_path = config.output_dir.join(request.metadata.stats_file_name());

    write_fasta(&fasta_path, &request.metadata, &spliced.sequence, config.wrap)?;
    write_statistics(&stats_path, &statistics)?;

    Ok(RunReport {
        sequence: spliced.sequence,
        original_length: original.len(),
        insertion_position: spliced.position,
        statistics,
        fasta_path,
        stats_path,
    })
}
