mod client;
mod data;
mod pacer;
mod quizzes;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use firedoc::encode_document;

use crate::client::SeedClient;
use crate::data::SeedRecord;
use crate::pacer::{FixedDelay, NoDelay, Pacer};

#[derive(Parser, Debug)]
#[command(
    name = "firedoc-seeder",
    about = "Seed a Firestore database with sample course content",
    version
)]
struct Args {
    /// Firebase project id
    #[arg(long, default_value = "interntasktracker-d127c")]
    project_id: String,

    /// Full documents base URL override (e.g. a local emulator)
    #[arg(long)]
    base_url: Option<String>,

    /// Quiz bank JSON file
    #[arg(long, default_value = "quizzes.json")]
    quizzes: PathBuf,

    /// Pause between writes, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Print encoded documents instead of writing them
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Starting to seed Firebase database...");

    // One timestamp for the whole run; every record's createdAt/updatedAt
    // agree.
    let now = Local::now().fixed_offset();

    // The quiz bank is a required input: failure to read or parse it ends
    // the run before any write happens.
    let bank = quizzes::load_quiz_bank(&args.quizzes)?;

    let batches = vec![
        ("Adding courses...", data::courses(now)?),
        ("Adding lessons...", data::lessons(now)?),
        ("Adding quizzes...", quizzes::quiz_records(&bank, now)?),
    ];

    if args.dry_run {
        for (banner, records) in &batches {
            println!("{banner}");
            for record in records {
                print_record(record)?;
            }
        }
        println!("Dry run complete; nothing was written.");
        return Ok(());
    }

    let base_url = args.base_url.clone().unwrap_or_else(|| {
        format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
            args.project_id
        )
    });
    let client = SeedClient::new(base_url)?;
    let pacer: Box<dyn Pacer> = if args.delay_ms == 0 {
        Box::new(NoDelay)
    } else {
        Box::new(FixedDelay::from_millis(args.delay_ms))
    };

    for (banner, records) in &batches {
        println!("{banner}");
        seed_batch(&client, pacer.as_ref(), records);
    }

    println!("Sample data added successfully!");
    println!("Note: you may need to authenticate with Firebase to write to production.");
    Ok(())
}

/// Writes one batch in order. Failed writes are already reported by the
/// client; the loop just moves on to the next record.
fn seed_batch(client: &SeedClient, pacer: &dyn Pacer, records: &[SeedRecord]) {
    for record in records {
        let doc = encode_document(&record.fields);
        client.patch_document(record.collection, &record.doc_id, &doc);
        pacer.pause();
    }
}

fn print_record(record: &SeedRecord) -> Result<()> {
    let doc = encode_document(&record.fields);
    println!("{}/{}:", record.collection, record.doc_id);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
