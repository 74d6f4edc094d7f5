//! Affichage des résultats dans le terminal

use crate::OutputFormat;
use anyhow::Result;
use console::style;
use dnagen_core::{RunReport, SequenceStatistics, NUCLEOTIDES};
use tabled::{Table, Tabled};

/// Ligne du tableau de composition
#[derive(Tabled)]
struct CompositionRow {
    #[tabled(rename = "Base")]
    base: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "%")]
    percent: String,
}

/// Confirmation nommant les deux fichiers
pub fn render_confirmation(report: &RunReport) -> String {
    format!(
        "La séquence a été enregistrée dans le fichier {}\nLes statistiques ont été enregistrées dans {}",
        report.fasta_path.display(),
        report.stats_path.display()
    )
}

/// Statistiques au format demandé
pub fn render_statistics(stats: &SequenceStatistics, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => stats.to_report(),
        OutputFormat::Table => {
            let mut rows: Vec<CompositionRow> = NUCLEOTIDES
                .iter()
                .map(|&n| CompositionRow {
                    base: n.to_string(),
                    count: stats.counts.get(n),
                    percent: format!("{:.1}", stats.percentage(n)),
                })
                .collect();
            rows.push(CompositionRow {
                base: "CG".to_string(),
                count: stats.counts.gc(),
                percent: format!("{:.1}", stats.cg_percent),
            });
            format!("{}\n", Table::new(rows))
        }
        OutputFormat::Json => format!("{}\n", stats.to_json()?),
    };

    Ok(rendered)
}

/// Affiche la confirmation puis les statistiques
pub fn print_report(report: &RunReport, format: OutputFormat) -> Result<()> {
    println!();
    println!("{}", style(render_confirmation(report)).green());
    println!();
    println!("{}", style("Statistiques de la séquence :").bold());
    print!("{}", render_statistics(&report.statistics, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_matches_stats_file() {
        let stats = SequenceStatistics::calculate("AACCGGTTTT", "").unwrap();
        assert_eq!(
            render_statistics(&stats, OutputFormat::Text).unwrap(),
            "A: 20.0%\nC: 20.0%\nG: 20.0%\nT: 40.0%\n%CG: 40.0%\n"
        );
    }

    #[test]
    fn test_table_contains_all_rows() {
        let stats = SequenceStatistics::calculate("ACGT", "").unwrap();
        let table = render_statistics(&stats, OutputFormat::Table).unwrap();
        for header in ["Base", "Count", "A", "C", "G", "T", "CG", "25.0", "50.0"] {
            assert!(table.contains(header), "{} absent", header);
        }
    }

    #[test]
    fn test_json_output() {
        let stats = SequenceStatistics::calculate("ACGT", "").unwrap();
        let json = render_statistics(&stats, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cg_percent"], 50.0);
    }
}
