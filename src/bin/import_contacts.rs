use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgGroup, Parser};
use sqlx::postgres::PgPoolOptions;

use claimdesk_api::contacts::import::{
    ContactImporter, ImportSession, annotate_preview, contact_template,
};
use claimdesk_api::contacts::{ImportMethod, PgContactStore};
use claimdesk_api::db::run_migrations;

#[derive(Parser, Debug)]
#[command(
    name = "import_contacts",
    about = "Preview and import ClaimDesk contacts from a CSV or JSON file",
    group(ArgGroup::new("action").required(true).args(["file", "template"]))
)]
struct Args {
    /// File to import.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Input format (`delimited`/`csv` or `structured`/`json`).
    #[arg(long, default_value = "delimited")]
    format: ImportMethod,

    /// Print the CSV template and exit.
    #[arg(long)]
    template: bool,

    /// Write the previewed contacts to the database in `DATABASE_URL`.
    #[arg(long)]
    commit: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    if args.template {
        print!("{}", contact_template());
        return Ok(());
    }

    if args.format == ImportMethod::ManualRows {
        writeln!(
            io::stderr(),
            "error: manual rows cannot be read from a file. Use 'delimited' or 'structured'."
        )?;
        std::process::exit(1);
    }

    let Some(path) = args.file else {
        writeln!(io::stderr(), "error: --file is required")?;
        std::process::exit(1);
    };
    let body = std::fs::read_to_string(&path)?;

    let mut session = ImportSession::new(args.format);
    session.set_body(body)?;

    let preview = match session.build_preview() {
        Ok(preview) => preview,
        Err(err) => {
            writeln!(io::stderr(), "error: {err}")?;
            std::process::exit(1);
        }
    };

    println!("{} contacts in {}", preview.len(), path.display());
    for row in annotate_preview(preview) {
        let mut flags = Vec::new();
        if !row.phone_valid {
            flags.push("invalid phone");
        }
        if !row.email_valid {
            flags.push("invalid email");
        }
        println!(
            "  {:<28} {:<16} {:<32} {:<16} {}",
            row.contact.name,
            row.formatted_phone,
            row.contact.email,
            row.contact.role,
            flags.join(", ")
        );
    }

    if !args.commit {
        println!("Preview only. Re-run with --commit to import.");
        return Ok(());
    }

    let database_url = std::env::var("DATABASE_URL")?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    run_migrations(&pool).await?;

    let importer = ContactImporter::new(Arc::new(PgContactStore::new(pool)));
    let result = session.commit(&importer).await?;

    println!(
        "Imported {} contacts, skipped {}",
        result.imported, result.skipped
    );
    for error in &result.errors {
        println!("  {error}");
    }
    Ok(())
}
