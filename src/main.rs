use anyhow::Context;
use clap::Parser;
use peak_alloc::PeakAlloc;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use t2g::t2g_utils::{
    DEFAULT_FEATURE, DEFAULT_GENE_NAME_FIELD, DEFAULT_GENE_VERSION_FIELD,
    DEFAULT_TRANSCRIPT_VERSION_FIELD,
};
use t2g::{T2gOptions, TextEncoding};
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

#[global_allocator]
static PEAK_ALLOC: PeakAlloc = PeakAlloc;

/// Creates transcript to gene info from GTF files. Reads from standard input and
/// writes to standard output unless an input file or `--output` is given.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Cli {
    /// GTF file to read, optionally gzipped; `-` or nothing means standard input
    input: Option<PathBuf>,

    /// File to write the mapping to [default: standard output]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use version numbers in transcript and gene IDs
    #[arg(short = 'v', long = "use_version")]
    use_version: bool,

    /// Do not output gene names
    #[arg(short = 's', long = "skip_gene_names")]
    skip_gene_names: bool,

    /// Field holding transcript version
    #[arg(short = 't', long = "transcript_vers_field", default_value = DEFAULT_TRANSCRIPT_VERSION_FIELD)]
    transcript_vers_field: String,

    /// Field holding gene version
    #[arg(short = 'g', long = "gene_vers_field", default_value = DEFAULT_GENE_VERSION_FIELD)]
    gene_vers_field: String,

    /// Field holding gene name
    #[arg(short = 'n', long = "gene_name_field", default_value = DEFAULT_GENE_NAME_FIELD)]
    gene_name_field: String,

    /// Feature type of the records to report
    #[arg(short, long, default_value = DEFAULT_FEATURE)]
    feature: String,

    /// Text encoding of the GTF input (utf-8, latin1 or ascii)
    #[arg(short, long, default_value = "utf-8")]
    encoding: TextEncoding,

    /// Log progress information to standard error
    #[arg(long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> T2gOptions {
        T2gOptions::default()
            .use_version(self.use_version)
            .skip_gene_names(self.skip_gene_names)
            .transcript_version_field(&self.transcript_vers_field)
            .gene_version_field(&self.gene_vers_field)
            .gene_name_field(&self.gene_name_field)
            .feature(&self.feature)
            .encoding(self.encoding)
    }

    fn level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::ERROR
        } else if self.verbose {
            LevelFilter::INFO
        } else {
            LevelFilter::WARN
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(cli.level().into())
                .from_env_lossy(),
        )
        .init();

    let opts = cli.options();

    let (input, input_name): (Box<dyn Read>, String) = match &cli.input {
        Some(p) if p.as_os_str() != "-" => (
            Box::new(
                File::open(p).with_context(|| format!("Could not open {}", p.display()))?,
            ),
            p.display().to_string(),
        ),
        _ => (Box::new(io::stdin()), String::from("standard input")),
    };

    let mut out: Box<dyn Write> = match &cli.output {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("Could not create {}", p.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    t2g::run(input, &opts, &mut out)
        .with_context(|| format!("Failed to extract transcript to gene info from {}", input_name))?;

    debug!("Peak memory usage was {} MB", PEAK_ALLOC.peak_usage_as_mb());
    Ok(())
}
