//! CLI de génération de séquences ADN synthétiques

use anyhow::{Context, Result};
use clap::Parser;
use dnagen_core::{
    init_logging, GenerationRequest, LineWrap, RunConfig, SequenceMetadata, DEFAULT_LINE_WIDTH,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;

mod display;
mod prompt;

use prompt::{Prompter, DESCRIPTION_PROMPT, ID_PROMPT, NAME_PROMPT};

#[derive(Parser)]
#[command(name = "dnagen")]
#[command(about = "Génère une séquence ADN aléatoire marquée par votre nom", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Longueur de la séquence (demandée si absente)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    length: Option<u64>,

    /// Identifiant de la séquence, préfixe des fichiers (demandé si absent)
    #[arg(long)]
    id: Option<String>,

    /// Description placée dans l'en-tête FASTA (demandée si absente)
    #[arg(short, long)]
    description: Option<String>,

    /// Nom inséré dans la séquence (demandé si absent)
    #[arg(short, long)]
    name: Option<String>,

    /// Découper la séquence en lignes dans le fichier FASTA
    #[arg(short, long)]
    wrap: bool,

    /// Largeur des lignes avec --wrap
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
    line_width: usize,

    /// Seed pour une génération reproductible
    #[arg(short, long)]
    seed: Option<u64>,

    /// Répertoire de sortie
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Format d'affichage des statistiques
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.wrap && cli.line_width == 0 {
        anyhow::bail!("--line-width doit être strictement positif");
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let request = collect_request(&cli, &mut prompter).context("Lecture des paramètres")?;

    let config = RunConfig {
        output_dir: cli.output_dir.clone(),
        wrap: LineWrap::from_flag(cli.wrap, cli.line_width),
        seed: cli.seed,
    };

    let spinner = create_spinner("Génération de la séquence...");
    let report = dnagen_core::run(&request, &config).with_context(|| {
        format!("Échec de la génération de la séquence {}", request.metadata.id)
    });
    spinner.finish_and_clear();

    display::print_report(&report?, cli.format)
}

/// Complète les paramètres absents de la ligne de commande par la saisie
fn collect_request<R: io::BufRead, W: io::Write>(
    cli: &Cli,
    prompter: &mut Prompter<R, W>,
) -> Result<GenerationRequest> {
    // Même ordre de questions que la saisie entièrement interactive
    let length = match cli.length {
        Some(length) => usize::try_from(length).context("Longueur trop grande")?,
        None => prompter.read_length()?,
    };
    let id = match &cli.id {
        Some(id) => id.clone(),
        None => prompter.read_text(ID_PROMPT)?,
    };
    let description = match &cli.description {
        Some(description) => description.clone(),
        None => prompter.read_text(DESCRIPTION_PROMPT)?,
    };
    let label = match &cli.name {
        Some(name) => name.clone(),
        None => prompter.read_text(NAME_PROMPT)?,
    };

    Ok(GenerationRequest {
        length,
        metadata: SequenceMetadata::new(id, description),
        label,
    })
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb
}
