//! Label workflow command line
//!
//! Lists identifiers, previews labels and writes label sheets from a CSV or
//! spreadsheet export.

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use label_core::session::label_session::matches_message;
use label_core::{
    paths, read_id_list_file, GenerateOutcome, LabelConfig, LabelError, LabelSession, Selection,
};
use label_types::ProductType;
use std::path::{Path, PathBuf};
use std::str::FromStr;

fn main() {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = build_cli().get_matches();

    if let Err(e) = run(&matches) {
        match e.downcast_ref::<LabelError>() {
            Some(LabelError::Read { file, reason }) => {
                eprintln!("Error reading file: {}: {}", file, reason);
            }
            _ => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    let input = Arg::new("input")
        .long("input")
        .short('i')
        .value_name("FILE")
        .help("CSV or Excel file without a header row")
        .required(true);

    let id = Arg::new("id")
        .long("id")
        .value_name("ID")
        .help("Identifier to print (repeatable)")
        .action(ArgAction::Append);

    let ids_file = Arg::new("ids-file")
        .long("ids-file")
        .value_name("FILE")
        .help("Text file with one identifier per line")
        .conflicts_with("id");

    Command::new("label-workflow")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sisenco label generator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file path (JSON or TOML)")
                .global(true),
        )
        .arg(
            Arg::new("product")
                .long("product")
                .short('p')
                .value_name("TYPE")
                .help("Product type: theory (student labels) or paper (product labels)")
                .value_parser(["theory", "paper"])
                .default_value("theory")
                .global(true),
        )
        .subcommand(
            Command::new("ids")
                .about("List the identifiers available in a file")
                .arg(input.clone()),
        )
        .subcommand(
            Command::new("preview")
                .about("Show the first rows and the text of each selected label")
                .arg(input.clone())
                .arg(id.clone())
                .arg(ids_file.clone()),
        )
        .subcommand(
            Command::new("generate")
                .about("Write the label sheet PDF")
                .arg(input)
                .arg(id)
                .arg(ids_file)
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("PATH")
                        .help("Where to write the PDF (defaults to the configured file name)"),
                ),
        )
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = load_config(matches.get_one::<String>("config").map(Path::new))?;
    let product_type = product_type(matches)?;
    log::info!("Product type: {}", product_type.display_name());

    match matches.subcommand() {
        Some(("ids", sub)) => {
            let session = open_session(config, product_type, sub)?;
            for id in session.available_ids()? {
                println!("{}", id);
            }
        }
        Some(("preview", sub)) => {
            let mut session = open_session(config, product_type, sub)?;
            session.select_ids(collect_ids(sub)?);
            print_preview(&session)?;
        }
        Some(("generate", sub)) => {
            let mut session = open_session(config, product_type, sub)?;
            session.select_ids(collect_ids(sub)?);
            let output = sub.get_one::<String>("output").map(PathBuf::from);
            generate(&session, output)?;
        }
        _ => anyhow::bail!("No action specified. Use --help for options."),
    }

    Ok(())
}

fn product_type(matches: &ArgMatches) -> anyhow::Result<ProductType> {
    Ok(match matches.get_one::<String>("product") {
        Some(value) => ProductType::from_str(value)?,
        None => ProductType::default(),
    })
}

/// Explicit `--config`, else the default config path when present, else
/// defaults; environment overrides apply in every case
fn load_config(path: Option<&Path>) -> anyhow::Result<LabelConfig> {
    let default_path = paths::default_config_path();
    let path = match path {
        Some(path) => Some(path),
        None if default_path.exists() => Some(default_path.as_path()),
        None => None,
    };

    let config = LabelConfig::load(path)?;
    if let Some(path) = path {
        log::info!("Loaded configuration from {}", path.display());
    }
    Ok(config)
}

fn open_session(
    config: LabelConfig,
    product_type: ProductType,
    matches: &ArgMatches,
) -> anyhow::Result<LabelSession> {
    let input = matches
        .get_one::<String>("input")
        .context("--input is required")?;
    let path = Path::new(input);
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(input.as_str());
    let bytes = std::fs::read(path).map_err(|e| LabelError::read(input.as_str(), e))?;

    let mut session = LabelSession::with_product_type(config, product_type);
    session.upload(file_name, &bytes)?;
    Ok(session)
}

/// Identifiers from `--id` flags or an `--ids-file`
fn collect_ids(matches: &ArgMatches) -> anyhow::Result<Vec<String>> {
    if let Some(ids_file) = matches.get_one::<String>("ids-file") {
        return Ok(read_id_list_file(ids_file)?);
    }

    Ok(matches
        .get_many::<String>("id")
        .map(|values| values.map(|v| v.trim().to_string()).collect())
        .unwrap_or_default())
}

fn print_preview(session: &LabelSession) -> anyhow::Result<()> {
    println!("First rows:");
    for record in session.table_preview()? {
        println!("  {}", record.fields().join(" | "));
    }
    println!();

    let outcome_message = match session.selection()? {
        Selection::NothingSelected => GenerateOutcome::NothingSelected.message(),
        Selection::NoMatches => GenerateOutcome::NoMatches.message(),
        Selection::Matches(records) => matches_message(records.len()),
    };
    println!("{}", outcome_message);

    for (index, label) in session.label_previews()?.iter().enumerate() {
        println!();
        println!("Label {}:", index + 1);
        for line in &label.lines {
            println!("  {}", line);
        }
    }
    Ok(())
}

fn generate(session: &LabelSession, output: Option<PathBuf>) -> anyhow::Result<()> {
    let outcome = session.generate()?;
    println!("{}", outcome.message());

    if let GenerateOutcome::Document(document) = outcome {
        let path = output.unwrap_or_else(|| PathBuf::from(&document.file_name));
        std::fs::write(&path, &document.bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "Labels generated: {} labels on {} pages written to {}",
            document.label_count,
            document.page_count,
            path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_product_defaults_to_theory() {
        let matches = build_cli()
            .try_get_matches_from(["label-workflow", "ids", "--input", "a.csv"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("product").unwrap(), "theory");
    }

    #[test]
    fn test_only_label_commands_exist() {
        let cli = build_cli();
        let names: Vec<&str> = cli.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(names, vec!["ids", "preview", "generate"]);

        let result = build_cli().try_get_matches_from(["label-workflow", "watch"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let result = build_cli().try_get_matches_from([
            "label-workflow",
            "--product",
            "poster",
            "ids",
            "--input",
            "a.csv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_id_and_ids_file_conflict() {
        let result = build_cli().try_get_matches_from([
            "label-workflow",
            "generate",
            "--input",
            "a.csv",
            "--id",
            "1",
            "--ids-file",
            "ids.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_collect_repeated_ids() {
        let matches = build_cli()
            .try_get_matches_from([
                "label-workflow",
                "preview",
                "--input",
                "a.csv",
                "--id",
                "S-2",
                "--id",
                "S-1",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(collect_ids(sub).unwrap(), vec!["S-2", "S-1"]);
    }

    #[test]
    fn test_collect_ids_from_file() {
        let dir = TempDir::new().unwrap();
        let ids_path = dir.path().join("ids.txt");
        std::fs::write(&ids_path, "7\n\n12\n").unwrap();

        let matches = build_cli()
            .try_get_matches_from([
                "label-workflow",
                "--product",
                "paper",
                "generate",
                "--input",
                "a.csv",
                "--ids-file",
                ids_path.to_str().unwrap(),
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(collect_ids(sub).unwrap(), vec!["7", "12"]);
    }

    #[test]
    fn test_generate_writes_pdf() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("students.csv");
        std::fs::write(&input, "S-1,x,Nimal,Kandy,a,b,c,d,0771234567,\n").unwrap();
        let output = dir.path().join("out.pdf");

        let matches = build_cli()
            .try_get_matches_from([
                "label-workflow",
                "generate",
                "--input",
                input.to_str().unwrap(),
                "--id",
                "S-1",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        let mut session = open_session(LabelConfig::default(), ProductType::Theory, sub).unwrap();
        session.select_ids(collect_ids(sub).unwrap());
        generate(&session, Some(output.clone())).unwrap();

        assert!(std::fs::read(output).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_product_flag_selects_paper_layout() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("paper.csv");
        std::fs::write(&input, "7,x,Book Shop,Colombo,a,b,c,0771111111,0112222222\n").unwrap();

        let matches = build_cli()
            .try_get_matches_from([
                "label-workflow",
                "--product",
                "paper",
                "preview",
                "--input",
                input.to_str().unwrap(),
                "--id",
                "7",
            ])
            .unwrap();
        let product = product_type(&matches).unwrap();
        assert_eq!(product, ProductType::Paper);

        let (_, sub) = matches.subcommand().unwrap();
        let mut session = open_session(LabelConfig::default(), product, sub).unwrap();
        session.select_ids(collect_ids(sub).unwrap());

        let labels = session.label_previews().unwrap();
        assert_eq!(
            labels[0].lines,
            vec!["Book Shop", "Colombo", "0771111111", "0112222222", "P - 0007"]
        );
    }

    #[test]
    fn test_missing_input_is_read_error() {
        let matches = build_cli()
            .try_get_matches_from(["label-workflow", "ids", "--input", "/nonexistent/a.csv"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        let err = open_session(LabelConfig::default(), ProductType::Theory, sub).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LabelError>(),
            Some(LabelError::Read { .. })
        ));
    }
}
