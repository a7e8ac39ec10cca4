use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::{error, info};
use mmu::ReplacementStrategy;
use vmm_sim::{
    config::{PAGE_TABLE_SIZE, PHYSICAL_MEMORY_SIZE, TLB_SIZE},
    AddressReader, DefaultTranslator, SimulatorConfig, TranslateError,
};

/// Translates logical addresses through a TLB and a demand paged page table.
#[derive(Parser)]
#[command(name = "vmm-sim")]
#[command(version, about, long_about = None)]
struct Cli {
    /// File holding every page of the simulated program
    #[arg(value_name = "BACKING_STORE")]
    backing_store: PathBuf,

    /// File with one decimal logical address per line
    #[arg(value_name = "ADDRESSES")]
    addresses: PathBuf,

    /// Page replacement strategy: fifo or lru
    #[arg(value_name = "STRATEGY")]
    strategy: ReplacementStrategy,

    /// Write results to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of physical frames
    #[arg(long, default_value_t = PHYSICAL_MEMORY_SIZE)]
    frames: usize,

    /// Number of page table entries
    #[arg(long, default_value_t = PAGE_TABLE_SIZE)]
    page_table_entries: usize,

    /// Number of TLB entries
    #[arg(long, default_value_t = TLB_SIZE)]
    tlb_entries: usize,
}

impl Cli {
    fn config(&self) -> SimulatorConfig {
        let mut config = SimulatorConfig::new(&self.backing_store, self.strategy);
        config.frames = self.frames;
        config.page_table_entries = self.page_table_entries;
        config.tlb_entries = self.tlb_entries;
        config
    }
}

fn run(cli: &Cli) -> Result<(), TranslateError> {
    let mut translator = DefaultTranslator::init(&cli.config())?;
    info!(
        "Translating {} with {} replacement",
        cli.addresses.display(),
        translator.strategy()
    );
    let addresses = AddressReader::new(BufReader::new(File::open(&cli.addresses)?));

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(TranslateError::Output)?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let stats = translator.run(addresses, |translation| {
        writeln!(out, "{}", translation).map_err(TranslateError::Output)
    })?;
    writeln!(out, "{}", stats).map_err(TranslateError::Output)?;
    out.flush().map_err(TranslateError::Output)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    }
}
