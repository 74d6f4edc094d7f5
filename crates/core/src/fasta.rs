//! Mise en forme et écriture des fichiers de sortie

use crate::error::{DnaGenError, Result};
use crate::sequence::SequenceMetadata;
use crate::stats::SequenceStatistics;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Largeur de ligne FASTA usuelle
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Découpage du corps de la séquence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineWrap {
    /// Séquence sur une seule ligne
    #[default]
    None,
    /// Lignes d'au plus `n` caractères
    Width(usize),
}

impl LineWrap {
    pub fn from_flag(enabled: bool, width: usize) -> Self {
        if enabled {
            LineWrap::Width(width)
        } else {
            LineWrap::None
        }
    }
}

/// Découpe la séquence en lignes d'au plus `width` caractères
///
/// L'ordre est conservé, la dernière ligne peut être plus courte.
pub fn format_sequence(sequence: &str, width: usize) -> Result<String> {
    if width == 0 {
        return Err(DnaGenError::InvalidLineWidth(width));
    }

    // Découpe par caractère : l'étiquette peut contenir de l'UTF-8
    let chars: Vec<char> = sequence.chars().collect();
    let lines: Vec<String> = chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect();

    Ok(lines.join("\n"))
}

/// Contenu complet du fichier FASTA
pub fn render_fasta(metadata: &SequenceMetadata, sequence: &str, wrap: LineWrap) -> Result<String> {
    let body = match wrap {
        LineWrap::None => sequence.to_string(),
        LineWrap::Width(width) => format_sequence(sequence, width)?,
    };

    Ok(format!(">{}\n{}\n", metadata.header(), body))
}

/// Écrit la séquence au format FASTA
#[instrument(skip(metadata, sequence), fields(id = %metadata.id))]
pub fn write_fasta(
    path: &Path,
    metadata: &SequenceMetadata,
    sequence: &str,
    wrap: LineWrap,
) -> Result<()> {
    let content = render_fasta(metadata, sequence, wrap)?;
    write_file(path, &content)?;
    info!("Séquence écrite dans {}", path.display());
    Ok(())
}

/// Écrit les statistiques (quatre bases puis %CG)
#[instrument(skip(stats))]
pub fn write_statistics(path: &Path, stats: &SequenceStatistics) -> Result<()> {
    write_file(path, &stats.to_report())?;
    info!("Statistiques écrites dans {}", path.display());
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| DnaGenError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| DnaGenError::io(path, e))
}
