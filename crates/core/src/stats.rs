//! Statistiques de composition nucléotidique

use crate::error::{DnaGenError, Result};
use crate::sequence::{Nucleotide, NUCLEOTIDES};
use serde::Serialize;
use std::fmt;
use tracing::{instrument, warn};

/// Arrondit au dixième
///
/// Passe par le formatage décimal exact de la valeur binaire : une égalité
/// (6.25) est arrondie au pair, comme `round(x, 1)` en Python.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Comptage des bases A/C/G/T
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NucleotideCounts {
    counts: [usize; 4],
}

impl NucleotideCounts {
    /// Compte les caractères de l'alphabet, les autres sont ignorés
    pub fn from_sequence(sequence: &str) -> Self {
        let mut counts = [0usize; 4];
        for c in sequence.chars() {
            if let Ok(n) = Nucleotide::from_char(c) {
                counts[n.index()] += 1;
            }
        }
        Self { counts }
    }

    pub fn get(&self, nucleotide: Nucleotide) -> usize {
        self.counts[nucleotide.index()]
    }

    /// Longueur de la séquence filtrée
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn gc(&self) -> usize {
        NUCLEOTIDES
            .iter()
            .filter(|n| n.is_gc())
            .map(|&n| self.get(n))
            .sum()
    }
}

/// Nombre de caractères de l'étiquette qui seront comptés comme des bases
pub fn label_overlap(label: &str) -> usize {
    label.chars().filter(|&c| Nucleotide::is_valid_char(c)).count()
}

/// Pourcentages par base et %CG
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceStatistics {
    /// Comptages bruts
    pub counts: NucleotideCounts,
    /// Pourcentages arrondis, dans l'ordre A, C, G, T
    pub percentages: [f64; 4],
    /// %CG calculé sur le comptage brut C+G
    pub cg_percent: f64,
}

impl SequenceStatistics {
    /// Calcule les statistiques de la séquence finale
    ///
    /// Le filtre porte sur la classe de caractère, pas sur la position : les
    /// lettres A/C/G/T de l'étiquette sont comptées comme des bases.
    #[instrument(skip(sequence), fields(len = sequence.len()))]
    pub fn calculate(sequence: &str, label: &str) -> Result<Self> {
        let overlap = label_overlap(label);
        if overlap > 0 {
            warn!(
                overlap,
                "L'étiquette contient des lettres A/C/G/T, elles seront comptées comme des bases"
            );
        }

        Self::from_counts(NucleotideCounts::from_sequence(sequence))
    }

    /// Calcule les pourcentages depuis un comptage
    pub fn from_counts(counts: NucleotideCounts) -> Result<Self> {
        let total = counts.total();
        if total == 0 {
            return Err(DnaGenError::EmptyComposition);
        }

        let percent = |count: usize| round_one_decimal(count as f64 / total as f64 * 100.0);

        let mut percentages = [0.0; 4];
        for n in NUCLEOTIDES {
            percentages[n.index()] = percent(counts.get(n));
        }

        Ok(Self {
            counts,
            percentages,
            cg_percent: percent(counts.gc()),
        })
    }

    pub fn percentage(&self, nucleotide: Nucleotide) -> f64 {
        self.percentages[nucleotide.index()]
    }

    /// Contenu du fichier de statistiques
    pub fn to_report(&self) -> String {
        self.to_string()
    }

    /// Export JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SequenceStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in NUCLEOTIDES {
            writeln!(f, "{}: {:.1}%", n, self.percentage(n))?;
        }
        writeln!(f, "%CG: {:.1}%", self.cg_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_excluded() {
        let stats = SequenceStatistics::calculate("ACGTABobCGTAC", "Bob").unwrap();

        assert_eq!(stats.counts.total(), 10);
        assert_eq!(stats.percentage(Nucleotide::A), 30.0);
        assert_eq!(stats.percentage(Nucleotide::C), 30.0);
        assert_eq!(stats.percentage(Nucleotide::G), 20.0);
        assert_eq!(stats.percentage(Nucleotide::T), 20.0);
        assert_eq!(stats.cg_percent, 50.0);
    }

    #[test]
    fn test_label_letters_counted() {
        // "Cat" : le C majuscule est absorbé dans les comptages
        let stats = SequenceStatistics::calculate("AACatA", "Cat").unwrap();
        assert_eq!(stats.counts.total(), 4);
        assert_eq!(stats.counts.get(Nucleotide::C), 1);
        assert_eq!(label_overlap("Cat"), 1);
        assert_eq!(label_overlap("GATTACA"), 7);
        assert_eq!(label_overlap("bob"), 0);
    }

    #[test]
    fn test_rounding() {
        let stats = SequenceStatistics::calculate("ACG", "").unwrap();
        assert_eq!(stats.percentage(Nucleotide::A), 33.3);
        assert_eq!(stats.percentage(Nucleotide::T), 0.0);
        assert_eq!(stats.cg_percent, 66.7);
    }

    #[test]
    fn test_rounding_ties_to_even() {
        assert_eq!(round_one_decimal(6.25), 6.2);
        assert_eq!(round_one_decimal(18.75), 18.8);

        let one_in_sixteen = format!("G{}", "A".repeat(15));
        let stats = SequenceStatistics::calculate(&one_in_sixteen, "").unwrap();
        assert_eq!(stats.percentage(Nucleotide::G), 6.2);
        assert_eq!(stats.cg_percent, 6.2);
        assert!(stats.to_report().contains("G: 6.2%"));

        let one_in_eighty = format!("A{}", "C".repeat(79));
        let stats = SequenceStatistics::calculate(&one_in_eighty, "").unwrap();
        assert_eq!(stats.percentage(Nucleotide::A), 1.2);
    }

    #[test]
    fn test_gc_count() {
        let counts = NucleotideCounts::from_sequence("ACGGTx");
        assert_eq!(counts.gc(), 3);
    }

    #[test]
    fn test_empty_composition() {
        assert!(matches!(
            SequenceStatistics::calculate("xyz", "xyz"),
            Err(DnaGenError::EmptyComposition)
        ));
        assert!(matches!(
            SequenceStatistics::calculate("", ""),
            Err(DnaGenError::EmptyComposition)
        ));
    }

    #[test]
    fn test_report_format() {
        let stats = SequenceStatistics::calculate("AACCGGTTTT", "").unwrap();
        assert_eq!(
            stats.to_report(),
            "A: 20.0%\nC: 20.0%\nG: 20.0%\nT: 40.0%\n%CG: 40.0%\n"
        );
    }

    #[test]
    fn test_full_percentage() {
        let stats = SequenceStatistics::calculate("GGGG", "").unwrap();
        assert!(stats.to_report().contains("G: 100.0%"));
        assert!(stats.to_report().contains("%CG: 100.0%"));
    }

    #[test]
    fn test_idempotent() {
        let a = SequenceStatistics::calculate("ACGTTGCAxx", "xx").unwrap();
        let b = SequenceStatistics::calculate("ACGTTGCAxx", "xx").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_export() {
        let stats = SequenceStatistics::calculate("ACGT", "").unwrap();
        let json: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
        assert_eq!(json["cg_percent"], 50.0);
        assert_eq!(json["percentages"][0], 25.0);
    }
}
