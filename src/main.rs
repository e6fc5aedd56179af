use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{info, warn};
use ppifeat::shared::parser::{read_fasta, write_feature_record, write_manifest};
use ppifeat::shared::utils::to_tsv_line;
use ppifeat::{
    AminoAcid, Ctd, EncodingParameters, FeatureExtractor, FeatureParameters, PropertyRegistry,
};
use rayon::ThreadPoolBuilder;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ppifeat")]
#[command(about = "Protein descriptors for protein-protein interaction prediction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CTD vector (504 values) of a sequence
    Ctd {
        sequence: String,

        /// Drop residues that belong to no class instead of failing
        #[arg(long, action = ArgAction::SetTrue)]
        skip_unknown: bool,
    },
    /// Compute the feature records of every protein of a FASTA file
    Extract {
        /// Input FASTA file
        #[arg(short, long)]
        fasta: PathBuf,

        /// Output directory (one <id>.tsv per protein + features.json)
        #[arg(short, long)]
        output: PathBuf,

        /// Directory with the precomputed descriptors (<id>_<name>.txt)
        #[arg(long, value_name = "DIR")]
        precomputed: Option<PathBuf>,

        /// Config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of worker threads (default: all cores)
        #[arg(long)]
        threads: Option<usize>,

        /// Drop residues that belong to no class instead of failing
        #[arg(long, action = ArgAction::SetTrue)]
        skip_unknown: bool,
    },
    /// List the standard property tables
    Tables,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ctd {
            sequence,
            skip_unknown,
        } => {
            let params = if skip_unknown {
                EncodingParameters::skip_unknown()
            } else {
                EncodingParameters::default()
            };
            let encoder = Ctd::new(PropertyRegistry::standard(), &params);
            let values = encoder.encode(&AminoAcid::from_string_lossy(&sequence))?;
            println!("{}", to_tsv_line(&values));
        }
        Commands::Extract {
            fasta,
            output,
            precomputed,
            config,
            threads,
            skip_unknown,
        } => {
            let mut params = match &config {
                Some(path) => FeatureParameters::from_file(path)
                    .with_context(|| format!("Invalid config file {}", path.display()))?,
                None => FeatureParameters::default(),
            };
            if threads.is_some() {
                params.threads = threads;
            }
            if skip_unknown {
                params.encoding = EncodingParameters::skip_unknown();
            }
            params.validate()?;

            let extractor = FeatureExtractor::from_parameters(&params, precomputed.as_deref())?;
            let proteins = read_fasta(&fasta)
                .with_context(|| format!("Failed to read {}", fasta.display()))?;
            info!("{} proteins read from {}", proteins.len(), fasta.display());

            let mut pool = ThreadPoolBuilder::new();
            if let Some(n) = params.threads {
                pool = pool.num_threads(n);
            }
            let report = pool.build()?.install(|| extractor.extract_all(&proteins));

            fs::create_dir_all(&output)?;
            for record in &report.records {
                write_feature_record(&output, record)?;
            }
            let manifest = write_manifest(&output, &extractor.manifest())?;
            info!(
                "{} feature files written to {}, manifest: {}",
                report.records.len(),
                output.display(),
                manifest.display()
            );
            if !report.failures.is_empty() {
                warn!("{} proteins could not be encoded", report.failures.len());
            }
        }
        Commands::Tables => {
            for table in PropertyRegistry::standard().iter() {
                let [c1, c2, c3] = table.classes();
                println!("{}\t{}\t{}\t{}", table.name(), c1, c2, c3);
            }
        }
    }
    Ok(())
}
