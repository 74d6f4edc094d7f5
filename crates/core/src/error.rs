//! Types d'erreurs pour la génération de séquences

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DnaGenError {
    #[error("Longueur de séquence invalide: {0} (doit être strictement positive)")]
    InvalidLength(usize),

    #[error("Base invalide: {0:?}")]
    InvalidBase(char),

    #[error("Position d'insertion hors plage: {position} > {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Largeur de ligne invalide: {0}")]
    InvalidLineWidth(usize),

    #[error("Aucune base A/C/G/T à compter")]
    EmptyComposition,

    #[error("Erreur IO sur {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DnaGenError {
    /// Associe une erreur IO au fichier concerné
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DnaGenError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DnaGenError>;
