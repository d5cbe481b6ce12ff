//! The `run` command: the whole pipeline in one process.
//!
//! Stages run strictly in sequence and each commits to the session only when
//! it fully succeeds, so a failed run leaves nothing half-written on disk.

use std::fs;
use std::path::{Path, PathBuf};

use brandcast_core::{AppConfig, SessionState};
use brandcast_export as export;
use brandcast_model::ModelClient;
use brandcast_pipeline::{analyze_website, generate_content, GenerationRequest, ResearchInput};
use clap::Args;

const ANALYSIS_PRINT_FILENAME: &str = "Brand_Analysis_print.html";
const CONTENT_PRINT_FILENAME: &str = "Generated_Content_print.html";

#[derive(Debug, Args)]
pub(crate) struct RunArgs {
    /// Website URL to analyze.
    #[arg(long)]
    pub(crate) url: String,
    /// Business vertical, e.g. "Food & Beverage".
    #[arg(long)]
    pub(crate) vertical: String,
    /// Extra context passed to the analysis prompt.
    #[arg(long, default_value = "")]
    pub(crate) notes: String,
    /// How many content pieces to generate.
    #[arg(long, default_value_t = 5)]
    pub(crate) quantity: u32,
    /// Comma-separated content-type ids (see `brandcast catalog`).
    #[arg(long, value_delimiter = ',', default_value = "post")]
    pub(crate) types: Vec<String>,
    /// Comma-separated platform ids.
    #[arg(long, value_delimiter = ',', default_value = "linkedin")]
    pub(crate) platforms: Vec<String>,
    /// Export formats to write: html, doc, csv, pdf.
    #[arg(long, value_delimiter = ',', default_value = "html")]
    pub(crate) formats: Vec<String>,
    /// Directory to write exported files into.
    #[arg(long, default_value = "out")]
    pub(crate) out: PathBuf,
}

pub(crate) async fn run_pipeline(args: RunArgs) -> anyhow::Result<()> {
    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(model = %config.model, endpoint = %config.api_base_url, "starting pipeline run");
    let client = ModelClient::with_base_url(
        &config.api_key,
        &config.model,
        config.request_timeout_secs,
        &config.api_base_url,
    )?;

    let mut session = SessionState::new();

    let (profile, campaigns) = analyze_website(
        &client,
        &mut session,
        ResearchInput {
            website_url: args.url,
            vertical: args.vertical,
            notes: args.notes,
        },
    )
    .await?;
    println!(
        "analysis complete: \"{}\" ({} campaign recommendations)",
        profile.mission,
        campaigns.len()
    );

    let produced = generate_content(
        &client,
        &mut session,
        GenerationRequest {
            total: args.quantity,
            kind_ids: args.types,
            platform_ids: args.platforms,
        },
    )
    .await?;
    println!("generated {produced} content pieces");

    write_exports(&session, &args.formats, &args.out)
}

struct ExportFile {
    name: &'static str,
    mime: &'static str,
    contents: String,
}

/// The files one export format produces: the brand analysis and the
/// generated content, with the MIME type each should be served or opened as.
fn format_files(session: &SessionState, format: &str) -> anyhow::Result<Vec<ExportFile>> {
    let files = match format {
        "html" => vec![
            ExportFile {
                name: export::ANALYSIS_HTML_FILENAME,
                mime: "text/html",
                contents: export::export_analysis_html(session),
            },
            ExportFile {
                name: export::CONTENT_HTML_FILENAME,
                mime: "text/html",
                contents: export::export_content_html(session),
            },
        ],
        "doc" => vec![
            ExportFile {
                name: export::ANALYSIS_DOC_FILENAME,
                mime: export::DOC_MIME_TYPE,
                contents: export::export_analysis_doc(session),
            },
            ExportFile {
                name: export::CONTENT_DOC_FILENAME,
                mime: export::DOC_MIME_TYPE,
                contents: export::export_content_doc(session),
            },
        ],
        "csv" => vec![
            ExportFile {
                name: export::ANALYSIS_CSV_FILENAME,
                mime: "text/csv",
                contents: export::export_analysis_csv(session),
            },
            ExportFile {
                name: export::CONTENT_CSV_FILENAME,
                mime: "text/csv",
                contents: export::export_content_csv(session),
            },
        ],
        // Print-styled HTML destined for a browser print dialog.
        "pdf" => vec![
            ExportFile {
                name: ANALYSIS_PRINT_FILENAME,
                mime: "text/html",
                contents: export::export_analysis_print_html(session),
            },
            ExportFile {
                name: CONTENT_PRINT_FILENAME,
                mime: "text/html",
                contents: export::export_content_print_html(session),
            },
        ],
        other => anyhow::bail!("unknown export format '{other}' (expected html, doc, csv, pdf)"),
    };
    Ok(files)
}

/// Write the selected export formats under `out`, both the brand analysis
/// and the generated content per format.
fn write_exports(session: &SessionState, formats: &[String], out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out)?;

    for format in formats {
        for file in format_files(session, format)? {
            let path = out.join(file.name);
            fs::write(&path, file.contents)?;
            tracing::info!(file = file.name, mime = file.mime, "export written");
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}
