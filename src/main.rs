use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use polars::prelude::DataFrame;

use sheet_report::cli::{Cli, LogFormatArg};
use sheet_report::config::Config;
use sheet_report::logging::{self, LogConfig, LogFormat};
use sheet_report::services::excel::import_from_excel;
use sheet_report::services::input_files::list_workbook_files;
use sheet_report::services::report::ReportGenerator;
use sheet_report::ImportMetadata;

const PREVIEW_ROWS: usize = 5;

enum Selection {
    Imported(DataFrame, ImportMetadata),
    NoFiles,
    Invalid,
    Cancelled,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level: cli.verbosity.tracing_level_filter(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
    };
    let dispatch = logging::init_logging(&log_config);

    tracing::dispatcher::with_default(&dispatch, || match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    })
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = Config::from_cli(cli);
    config.ensure_dirs().context("failed to create the data directories")?;

    let selection = match &config.file {
        Some(path) => import_one(path, &config),
        None => select_interactively(&config)?,
    };

    let (df, info) = match selection {
        Selection::Imported(df, info) => (df, info),
        Selection::NoFiles => return Ok(ExitCode::SUCCESS),
        Selection::Invalid | Selection::Cancelled => return Ok(ExitCode::FAILURE),
    };

    println!("✅ Importação bem-sucedida!");
    println!("📊 Registros: {}", info.row_count);
    println!("📈 Colunas: {}", info.column_count);
    if config.print_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    }

    println!("\n📋 Gerando relatórios...");
    let paths = ReportGenerator::new(config.report)
        .generate(&df, &config.output_dir)
        .context("failed to generate the reports")?;
    println!("✅ Relatório Excel: {}", paths.workbook.display());
    println!("✅ Sumário textual: {}", paths.summary.display());

    println!("\n🔍 Preview dos dados (primeiras {} linhas):", PREVIEW_ROWS);
    println!("{}", df.head(Some(PREVIEW_ROWS)));

    Ok(ExitCode::SUCCESS)
}

fn import_one(path: &Path, config: &Config) -> Selection {
    println!("\nImportando {}...", display_name(path));
    match import_from_excel(path, &config.import) {
        Some((df, info)) => Selection::Imported(df, info),
        None => {
            println!("❌ Falha na importação");
            Selection::Cancelled
        }
    }
}

/// Lists the input directory and asks for a file number. A failed import
/// shows the list again; an empty answer gives up.
fn select_interactively(config: &Config) -> Result<Selection> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let files = list_workbook_files(&config.input_dir)?;
        if files.is_empty() {
            println!("Nenhum arquivo Excel encontrado na pasta {}", config.input_dir.display());
            return Ok(Selection::NoFiles);
        }

        println!("Arquivos Excel encontrados:");
        for (i, file) in files.iter().enumerate() {
            println!("{}. {}", i + 1, display_name(file));
        }

        print!("\nSelecione o número do arquivo: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
            return Ok(Selection::Cancelled);
        }

        let Some(idx) = parse_selection(&line, files.len()) else {
            println!("Seleção inválida");
            return Ok(Selection::Invalid);
        };

        match import_one(&files[idx], config) {
            Selection::Imported(df, info) => return Ok(Selection::Imported(df, info)),
            _ => println!("Escolha outro arquivo (Enter para sair).\n"),
        }
    }
}

/// 1-based answer to a 0-based index.
fn parse_selection(answer: &str, count: usize) -> Option<usize> {
    let choice: usize = answer.trim().parse().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
