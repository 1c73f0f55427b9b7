use std::fs;
use std::process::Command;

use zengin_batch::batch::read_batch;
use zengin_batch::charset::sjis;
use zengin_batch::zengin_record::{EncodedRecord, RecordType};
use zengin_batch::{
    encode, encode_batch, normalize, AccountType, TransferDate, TransferHeader, TransferLineItem,
    TransferType, ValidationError,
};

fn header(client_code: &str, client_name: &str) -> TransferHeader {
    TransferHeader {
        transfer_type: TransferType::General,
        client_code: client_code.to_string(),
        client_name: client_name.to_string(),
        transfer_date: TransferDate::new(10, 18).unwrap(),
        bank_code: "0001".to_string(),
        bank_name: "ミズホ".to_string(),
        branch_code: "001".to_string(),
        branch_name: "ホンテン".to_string(),
        account_type: AccountType::Ordinary,
        account_number: "7654321".to_string(),
    }
}

fn item(recipient_name: &str, amount: &str) -> TransferLineItem {
    TransferLineItem {
        bank_code: "0001".to_string(),
        branch_code: "001".to_string(),
        account_number: "1234567".to_string(),
        recipient_name: recipient_name.to_string(),
        amount: amount.to_string(),
        ..Default::default()
    }
}

fn records(text: &str) -> Vec<EncodedRecord> {
    text.split("\r\n")
        .map(|line| EncodedRecord::parse_from_fixed(line).expect("record parses"))
        .collect()
}

#[test]
fn test_single_transfer_produces_four_records() {
    let text = encode(
        &header("0000000001", "ヤマダ商事"),
        &[item("タナカタロウ", "50000")],
    )
    .unwrap();
    let recs = records(&text);

    assert_eq!(recs.len(), 4);
    let types: Vec<RecordType> = recs.iter().map(|r| r.record_type()).collect();
    assert_eq!(
        types,
        vec![RecordType::Header, RecordType::Data, RecordType::Trailer, RecordType::End]
    );
    assert_eq!(recs[1].field("amount").unwrap(), "0000050000");
    assert_eq!(text.matches("\r\n").count(), 3);
}

#[test]
fn test_kanji_client_name_is_stripped_and_padded() {
    let text = encode(&header("1", "山田商事"), &[item("ｱ", "1")]).unwrap();
    let client_name = records(&text)[0].field("client_name").unwrap();

    assert_eq!(sjis::str_width(&client_name), 40);
    assert!(client_name.chars().all(zengin_batch::charset::is_allowed));
    assert_eq!(client_name, " ".repeat(40));
}

#[test]
fn test_trailer_counts_only_valid_items() {
    let items = [item("ｱ", "10000"), item("ｲ", "25000"), item("", "7000")];
    let text = encode(&header("1", "ﾃｽﾄ"), &items).unwrap();
    let recs = records(&text);

    assert_eq!(recs.len(), 5);
    let trailer = &recs[3];
    assert_eq!(trailer.field("total_count").unwrap(), "000002");
    assert_eq!(trailer.field("total_amount").unwrap(), "000000035000");
}

#[test]
fn test_missing_client_code_is_rejected() {
    let result = encode(&header("", "ﾃｽﾄ"), &[item("ｱ", "1")]);
    assert_eq!(
        result,
        Err(ValidationError::MissingHeaderField {
            field: "client_code"
        })
    );
}

#[test]
fn test_long_recipient_name_is_truncated() {
    let long_name = "ﾀﾅｶ ﾀﾛｳ ".repeat(8);
    assert!(sjis::str_width(&normalize(&long_name)) > 30);
    let text = encode(&header("1", "ﾃｽﾄ"), &[item(&long_name, "1")]).unwrap();
    let name = records(&text)[1].field("recipient_name").unwrap();

    assert_eq!(sjis::str_width(&name), 30);
    assert_eq!(name, normalize(&long_name).chars().take(30).collect::<String>());
}

#[test]
fn test_every_record_is_120_bytes() {
    let items: Vec<TransferLineItem> = [
        ("ガッコウホウジン　ヤマダガクエン　リジチョウ", "1,000,000"),
        ("ﾔﾏﾀﾞ ﾊﾅｺ", "¥3,000"),
        ("Ｊｏｈｎ　Ｓｍｉｔｈ", "abc"),
        ("漢字だけ", "42"),
    ]
    .iter()
    .map(|(name, amount)| item(name, amount))
    .collect();
    let batch = encode_batch(&header("12345", "カブシキガイシャ　テスト"), &items).unwrap();

    assert_eq!(batch.records().len(), 3 + items.len());
    for record in batch.records() {
        assert_eq!(record.to_bytes().unwrap().len(), 120);
    }
    let bytes = batch.to_legacy_bytes().unwrap();
    let summary = read_batch(&bytes).unwrap();
    assert_eq!(summary.data_count, 4);
    assert_eq!(summary.total_amount, 1_003_042);
}

#[test]
fn test_cli_encode_then_verify() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("transfers.csv");
    let output = dir.path().join("transfers.txt");
    fs::write(
        &input,
        "0001,ミズホ,001,ホンテン,1,1234567,タナカ タロウ,10000\n\
         0005,ミツビシ,002,シブヤ,2,7654321,ヤマダ ハナコ,25000\n\
         0009,,003,,1,1111111,,99999\n",
    )
    .unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_zengin_batch"))
        .args(["encode"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--client-code", "1234567890", "--client-name", "ヤマダ商事"])
        .args(["--date", "1018", "--bank-code", "0001", "--account-number", "7654321"])
        .status()
        .expect("Failed to execute command");
    assert!(status.success(), "Encode command failed");

    let bytes = fs::read(&output).expect("Failed to read output file");
    assert_eq!(bytes.len(), 5 * 120 + 4 * 2);
    let summary = read_batch(&bytes).unwrap();
    assert_eq!(summary.client_code, "1234567890");
    assert_eq!(summary.client_name, "ﾔﾏﾀﾞ");
    assert_eq!(summary.transfer_date, "1018");
    assert_eq!(summary.data_count, 2);
    assert_eq!(summary.total_amount, 35000);

    let verify = Command::new(env!("CARGO_BIN_EXE_zengin_batch"))
        .arg("verify")
        .arg(&output)
        .output()
        .expect("Failed to execute command");
    assert!(verify.status.success(), "Verify command failed");
    let stdout = String::from_utf8_lossy(&verify.stdout);
    assert!(stdout.contains("35,000"), "unexpected output: {}", stdout);
}

#[test]
fn test_cli_rejects_batch_without_valid_items() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.csv");
    let output = dir.path().join("out.txt");
    fs::write(&input, "0001,,001,,1,,,\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_zengin_batch"))
        .arg("encode")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--client-code", "1", "--client-name", "ﾃｽﾄ"])
        .status()
        .expect("Failed to execute command");

    assert!(!status.success());
    assert!(!output.exists());
}
