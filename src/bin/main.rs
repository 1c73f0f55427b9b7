use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use humansize::{format_size, DECIMAL};
use log::{debug, error, info};
use num_format::{Locale, ToFormattedString};
use std::fs;
use std::path::Path;
use std::time::Instant;

use zengin_batch::batch::{read_batch, read_line_items};
use zengin_batch::{encode_batch, AccountType, TransferDate, TransferHeader, TransferType};

/// Builds and checks Zengin (全銀) bank-transfer batch files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a line-item CSV into a Zengin transfer file
    Encode {
        /// Headerless CSV: bankCode,bankName,branchCode,branchName,accountType,accountNumber,recipientName,amount
        input_file: String,

        /// Output file path
        #[arg(short, long)]
        output: String,

        /// Transfer type: general (21), salary (11) or bonus (12)
        #[arg(long, default_value = "general")]
        transfer_type: TransferType,

        /// Client code assigned by the originating bank
        #[arg(long)]
        client_code: String,

        /// Client name, converted to half-width katakana
        #[arg(long)]
        client_name: String,

        /// Transfer date as MMDD (defaults to today)
        #[arg(long)]
        date: Option<TransferDate>,

        /// Originating bank code
        #[arg(long, default_value = "")]
        bank_code: String,

        /// Originating bank name
        #[arg(long, default_value = "")]
        bank_name: String,

        /// Originating branch code
        #[arg(long, default_value = "")]
        branch_code: String,

        /// Originating branch name
        #[arg(long, default_value = "")]
        branch_name: String,

        /// Originating account type: 1 (ordinary), 2 (current) or 4 (savings)
        #[arg(long, default_value = "1")]
        account_type: AccountType,

        /// Originating account number
        #[arg(long, default_value = "")]
        account_number: String,

        /// Number of parallel workers (0 = auto-detect)
        #[arg(short = 'w', long, default_value_t = 0)]
        workers: usize,

        /// Write UTF-8 text instead of Shift_JIS bytes
        #[arg(long)]
        utf8: bool,
    },

    /// Check record lengths, order and trailer totals of a Zengin file
    Verify {
        /// Shift_JIS Zengin file
        input_file: String,
    },
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input_file,
            output,
            transfer_type,
            client_code,
            client_name,
            date,
            bank_code,
            bank_name,
            branch_code,
            branch_name,
            account_type,
            account_number,
            workers,
            utf8,
        } => {
            let workers = if workers > 0 { workers } else { num_cpus::get() };
            debug!("Setting up thread pool with {} workers", workers);
            rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build_global()
                .unwrap_or_else(|e| error!("Failed to initialize thread pool: {}", e));

            let header = TransferHeader {
                transfer_type,
                client_code,
                client_name,
                transfer_date: date.unwrap_or_else(|| Local::now().date_naive().into()),
                bank_code,
                bank_name,
                branch_code,
                branch_name,
                account_type,
                account_number,
            };
            encode_file(&input_file, &output, &header, utf8)
        }
        Commands::Verify { input_file } => verify_file(&input_file),
    }
}

/// Reads line items, encodes them and writes the transfer file
fn encode_file(input_file: &str, output_file: &str, header: &TransferHeader, utf8: bool) -> Result<()> {
    info!("Encoding {} into {}", input_file, output_file);
    let start_time = Instant::now();

    let items = read_line_items(Path::new(input_file))
        .with_context(|| format!("Failed to read line items from {}", input_file))?;
    info!("Read {} line items", items.len());

    let batch = encode_batch(header, &items).context("Batch rejected")?;

    let bytes = if utf8 {
        batch.to_text().into_bytes()
    } else {
        batch
            .to_legacy_bytes()
            .context("Failed to encode batch as Shift_JIS")?
    };
    fs::write(output_file, &bytes).with_context(|| format!("Failed to write {}", output_file))?;

    let aggregate = batch.aggregate();
    info!(
        "Wrote {} records ({} transfers, ¥{}) to {} [{}] in {:.2?}",
        batch.records().len(),
        aggregate.count(),
        aggregate.total_amount().to_formatted_string(&Locale::en),
        output_file,
        format_size(bytes.len() as u64, DECIMAL),
        start_time.elapsed()
    );
    Ok(())
}

/// Verifies a transfer file and prints its summary
fn verify_file(input_file: &str) -> Result<()> {
    info!("Verifying {}", input_file);
    let bytes = fs::read(input_file).with_context(|| format!("Failed to read {}", input_file))?;
    let summary = read_batch(&bytes).with_context(|| format!("{} failed verification", input_file))?;

    println!("type code:    {}", summary.transfer_type_code);
    println!("client code:  {}", summary.client_code);
    println!("client name:  {}", summary.client_name);
    println!("date:         {}", summary.transfer_date);
    println!("records:      {}", summary.record_count);
    println!("transfers:    {}", summary.data_count);
    println!(
        "total amount: {}",
        summary.total_amount.to_formatted_string(&Locale::en)
    );
    Ok(())
}
