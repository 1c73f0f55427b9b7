use anyhow::{Context, Result};
use chrono::Local;
use humansize::{format_size, DECIMAL};
use rand::seq::IndexedRandom;
use rand::Rng;
use rayon::prelude::*;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

const BANKS: &[(&str, &str)] = &[
    ("0001", "ミズホ"),
    ("0005", "ミツビシユーエフジエイ"),
    ("0009", "ミツイスミトモ"),
    ("0010", "リソナ"),
    ("9900", "ユウチヨ"),
];

const BRANCHES: &[(&str, &str)] = &[
    ("001", "ホンテン"),
    ("100", "トウキヨウ"),
    ("210", "シンジユク"),
    ("305", "シブヤ"),
    ("420", "ウメダ"),
];

const FAMILY_NAMES: &[&str] = &["タナカ", "スズキ", "サトウ", "ヤマダ", "ワタナベ", "イトウ", "ナカムラ"];
const GIVEN_NAMES: &[&str] = &["タロウ", "ハナコ", "ケンジ", "ユウコ", "ダイスケ", "サクラ", "ショウ"];
const ACCOUNT_TYPES: &[&str] = &["1", "1", "1", "2", "4"];

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <rows> [output.csv]", args[0]);
        std::process::exit(1);
    }
    let rows: usize = args[1]
        .parse()
        .context("Please provide a valid number for rows")?;
    let output = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| format!("transfers_{}.csv", Local::now().format("%Y%m%d")));

    println!("🚀 Generating {} line items into {}", rows, output);
    generate_sample_csv(&output, rows).with_context(|| format!("Failed to generate {}", output))?;
    Ok(())
}

fn random_row<R: Rng>(rng: &mut R) -> String {
    let (bank_code, bank_name) = BANKS.choose(rng).copied().unwrap_or(BANKS[0]);
    let (branch_code, branch_name) = BRANCHES.choose(rng).copied().unwrap_or(BRANCHES[0]);
    let account_type = ACCOUNT_TYPES.choose(rng).copied().unwrap_or("1");
    let family = FAMILY_NAMES.choose(rng).copied().unwrap_or("タナカ");
    let given = GIVEN_NAMES.choose(rng).copied().unwrap_or("タロウ");
    let amount = rng.random_range(1..=2_000) * 500;
    format!(
        "{},{},{},{},{},{:07},{} {},{}",
        bank_code,
        bank_name,
        branch_code,
        branch_name,
        account_type,
        rng.random_range(0..=9_999_999u32),
        family,
        given,
        amount
    )
}

fn generate_sample_csv(file_path: &str, rows: usize) -> Result<()> {
    let start_time = Instant::now();
    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);

    let lines: Vec<String> = (0..rows)
        .into_par_iter()
        .map(|_| random_row(&mut rand::rng()))
        .collect();
    for line in &lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    let size = std::fs::metadata(file_path)?.len();
    println!(
        "   -> Done: {} rows ({}) in {:.2?}",
        rows,
        format_size(size, DECIMAL),
        start_time.elapsed()
    );
    Ok(())
}
