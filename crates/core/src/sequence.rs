//! Alphabet nucléotidique et métadonnées de séquence

use crate::error::{DnaGenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nucléotides standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nucleotide {
    A, // Adénine
    C, // Cytosine
    G, // Guanine
    T, // Thymine
}

/// Alphabet complet, dans l'ordre d'affichage des statistiques
pub const NUCLEOTIDES: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

impl Nucleotide {
    /// Convertit un caractère en nucléotide
    ///
    /// Seules les majuscules sont acceptées : une minuscule dans une étiquette
    /// n'est pas une base.
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'A' => Ok(Nucleotide::A),
            'C' => Ok(Nucleotide::C),
            'G' => Ok(Nucleotide::G),
            'T' => Ok(Nucleotide::T),
            _ => Err(DnaGenError::InvalidBase(c)),
        }
    }

    /// Convertit un nucléotide en caractère
    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// Index dans `NUCLEOTIDES`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Retourne true si c'est une base GC
    pub fn is_gc(self) -> bool {
        matches!(self, Nucleotide::G | Nucleotide::C)
    }

    /// Vérifie si un caractère appartient à l'alphabet
    pub fn is_valid_char(c: char) -> bool {
        matches!(c, 'A' | 'C' | 'G' | 'T')
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = DnaGenError;

    fn try_from(c: char) -> Result<Self> {
        Nucleotide::from_char(c)
    }
}

/// Métadonnées saisies par l'utilisateur
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceMetadata {
    /// Identifiant, sert aussi de préfixe aux fichiers
    pub id: String,
    /// Description libre (peut être vide)
    pub description: String,
}

impl SequenceMetadata {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }

    /// En-tête FASTA sans le `>`
    pub fn header(&self) -> String {
        format!("{} {}", self.id, self.description)
    }

    /// Nom du fichier de séquence
    pub fn fasta_file_name(&self) -> String {
        format!("{}.fasta", self.id)
    }

    /// Nom du fichier de statistiques
    pub fn stats_file_name(&self) -> String {
        format!("{}_stats.txt", self.id)
    }
}
