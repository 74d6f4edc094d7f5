//! Génération aléatoire de séquences et insertion d'étiquette

use crate::error::{DnaGenError, Result};
use crate::sequence::NUCLEOTIDES;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Séquence après insertion de l'étiquette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    /// Séquence finale (bases + étiquette)
    pub sequence: String,
    /// Position d'insertion dans la séquence d'origine
    pub position: usize,
}

/// Générateur de séquences ADN uniformes
pub struct SequenceGenerator {
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl SequenceGenerator {
    /// Crée un générateur initialisé par l'entropie du système
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Crée un générateur reproductible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Crée un générateur depuis un seed optionnel
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Seed utilisé, s'il a été fixé
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Génère `length` bases tirées uniformément et indépendamment
    #[instrument(skip(self))]
    pub fn generate(&mut self, length: usize) -> Result<String> {
        if length == 0 {
            return Err(DnaGenError::InvalidLength(length));
        }

        let sequence: String = (0..length)
            .map(|_| NUCLEOTIDES[self.rng.gen_range(0..NUCLEOTIDES.len())].as_char())
            .collect();

        debug!("{} bases générées", sequence.len());
        Ok(sequence)
    }

    /// Tire une position d'insertion dans `0..=len`
    pub fn insertion_position(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..=len)
    }

    /// Insère l'étiquette à une position aléatoire
    #[instrument(skip(self, sequence), fields(len = sequence.len()))]
    pub fn insert_label(&mut self, sequence: &str, label: &str) -> Result<Spliced> {
        let position = self.insertion_position(sequence.len());
        let sequence = splice(sequence, label, position)?;
        debug!(position, "Étiquette insérée");

        Ok(Spliced { sequence, position })
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Insère `label` dans `sequence` à `position`, sans écraser de base
///
/// `position` est un index d'octet ; la séquence générée est ASCII, donc
/// toute position dans `0..=len` tombe sur une frontière de caractère.
pub fn splice(sequence: &str, label: &str, position: usize) -> Result<String> {
    if position > sequence.len() || !sequence.is_char_boundary(position) {
        return Err(DnaGenError::PositionOutOfRange {
            position,
            len: sequence.len(),
        });
    }

    let mut spliced = String::with_capacity(sequence.len() + label.len());
    spliced.push_str(&sequence[..position]);
    spliced.push_str(label);
    spliced.push_str(&sequence[position..]);
    Ok(spliced)
}
