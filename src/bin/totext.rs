//! Command-line interface for totext
//! Converts TEI and XHTML documents (single files or whole directories)
//! into plain text.
//!
//! Usage:
//!   totext convert `<path>` [--profile `<name>`] [--output `<path>`]   - Convert a file or directory
//!   totext split `<path>` [--output `<dir>`]                       - Convert a TEI file chapter by chapter
//!   totext list-profiles                                          - List the conversion profiles

use clap::{Arg, Command};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use totext::normalization::normalize;
use totext::pipeline::{
    ConversionError, ConversionPipeline, DocumentFormat, ProfileRegistry, ConversionProfile,
};
use totext::rendering::render_token_sequence;
use totext::split::split;

fn main() -> ExitCode {
    let matches = Command::new("totext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for extracting plain text from TEI and XHTML documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Convert a document (or every document in a directory)")
                .arg(
                    Arg::new("path")
                        .help("Path to the XML file or directory")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("profile")
                        .long("profile")
                        .short('p')
                        .help("Conversion profile (see list-profiles)")
                        .default_value("tools"),
                )
                .arg(
                    Arg::new("profiles-file")
                        .long("profiles-file")
                        .help("YAML file with additional conversion profiles"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file (or directory, for directory input); stdout if omitted"),
                )
                .arg(
                    Arg::new("emit")
                        .long("emit")
                        .help("Output form: rendered 'text' or the normalized 'tokens' as JSON")
                        .value_parser(["text", "tokens"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("split")
                .about("Convert a TEI document chapter by chapter")
                .arg(
                    Arg::new("path")
                        .help("Path to the TEI file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("profile")
                        .long("profile")
                        .short('p')
                        .help("Conversion profile (see list-profiles)")
                        .default_value("tools"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Directory for one text file per chapter; stdout if omitted"),
                ),
        )
        .subcommand(Command::new("list-profiles").about("List the conversion profiles"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("convert", convert_matches)) => {
            let path = convert_matches.get_one::<String>("path").unwrap();
            let profile = convert_matches.get_one::<String>("profile").unwrap();
            let profiles_file = convert_matches.get_one::<String>("profiles-file");
            let output = convert_matches.get_one::<String>("output");
            let emit = convert_matches.get_one::<String>("emit").unwrap();
            handle_convert(path, profile, profiles_file, output, emit)
        }
        Some(("split", split_matches)) => {
            let path = split_matches.get_one::<String>("path").unwrap();
            let profile = split_matches.get_one::<String>("profile").unwrap();
            let output = split_matches.get_one::<String>("output");
            handle_split(path, profile, output)
        }
        Some(("list-profiles", _)) => {
            handle_list_profiles();
            Ok(())
        }
        _ => unreachable!(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn load_registry(profiles_file: Option<&String>) -> Result<ProfileRegistry, String> {
    let mut registry = ProfileRegistry::with_defaults();
    if let Some(path) = profiles_file {
        let source = std::fs::read_to_string(path)
            .map_err(|e| format!("reading {}: {}", path, e))?;
        registry
            .load_yaml(&source)
            .map_err(|e| format!("{}: {}", path, e))?;
    }
    Ok(registry)
}

fn resolve_profile<'a>(
    registry: &'a ProfileRegistry,
    name: &str,
) -> Result<&'a ConversionProfile, String> {
    registry
        .get(name)
        .ok_or_else(|| format!("unknown profile \"{}\"", name))
}

fn handle_convert(
    path: &str,
    profile_name: &str,
    profiles_file: Option<&String>,
    output: Option<&String>,
    emit: &str,
) -> Result<(), String> {
    let registry = load_registry(profiles_file)?;
    let profile = resolve_profile(&registry, profile_name)?;
    let input = PathBuf::from(path);

    if input.is_dir() {
        let output_dir = output
            .map(PathBuf::from)
            .ok_or_else(|| "converting a directory requires --output <dir>".to_string())?;
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("creating {}: {}", output_dir.display(), e))?;
        let mut entries: Vec<PathBuf> = std::fs::read_dir(&input)
            .map_err(|e| format!("reading {}: {}", input.display(), e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        entries.sort();
        for file in entries {
            let Some(name) = file.file_name() else {
                continue;
            };
            let converted = convert_file(&file, profile, emit)?;
            let target = output_dir.join(name);
            std::fs::write(&target, converted)
                .map_err(|e| format!("writing {}: {}", target.display(), e))?;
        }
        return Ok(());
    }

    let converted = convert_file(&input, profile, emit)?;
    write_output(output, &converted)
}

fn convert_file(path: &Path, profile: &ConversionProfile, emit: &str) -> Result<String, String> {
    let source =
        std::fs::read_to_string(path).map_err(|e| format!("reading {}: {}", path.display(), e))?;
    let document = roxmltree::Document::parse(&source)
        .map_err(|e| format!("{}: {}", path.display(), ConversionError::Xml(e)))?;

    let pipeline = ConversionPipeline::new();
    let variant = profile.variant.conversions();
    let format = match profile.format.fixed() {
        Some(format) => format,
        None => {
            let root_name = document.root_element().tag_name().name();
            DocumentFormat::detect(root_name)
                .ok_or_else(|| format!("{}: no converter for root element \"{}\"", path.display(), root_name))?
        }
    };

    if emit == "tokens" {
        let mut tokens = pipeline.extract(&document, format);
        tokens.retain(|token| token.conversions().includes(variant));
        let tokens = normalize(tokens);
        return serde_json::to_string_pretty(&tokens).map_err(|e| e.to_string());
    }

    pipeline
        .convert_document_as(&document, format, variant)
        .map_err(|e| format!("{}: {}", path.display(), e))
}

fn handle_split(path: &str, profile_name: &str, output: Option<&String>) -> Result<(), String> {
    let registry = ProfileRegistry::with_defaults();
    let profile = resolve_profile(&registry, profile_name)?;

    let source =
        std::fs::read_to_string(path).map_err(|e| format!("reading {}: {}", path, e))?;
    let document = roxmltree::Document::parse(&source)
        .map_err(|e| format!("{}: {}", path, ConversionError::Xml(e)))?;

    let converter = totext::conversion::TeiConverter::new();
    let variant = profile.variant.conversions();

    for (index, division) in split(&document).iter().enumerate() {
        let mut tokens = totext::conversion::extract_token_sequence(
            Some(division.subtree_root()),
            &converter,
        );
        tokens.retain(|token| token.conversions().includes(variant));
        let text = render_token_sequence(&normalize(tokens)).map_err(|e| e.to_string())?;

        match output {
            Some(dir) => {
                let output_dir = PathBuf::from(dir);
                std::fs::create_dir_all(&output_dir)
                    .map_err(|e| format!("creating {}: {}", output_dir.display(), e))?;
                let target = output_dir.join(format!("{:03}.txt", index));
                std::fs::write(&target, text)
                    .map_err(|e| format!("writing {}: {}", target.display(), e))?;
            }
            None => {
                let heading = division.heading().unwrap_or("(no heading)");
                println!("==== {:03}: {} ====", index, heading);
                println!("{}", text);
            }
        }
    }

    Ok(())
}

fn handle_list_profiles() {
    let registry = ProfileRegistry::with_defaults();
    println!("Available conversion profiles:\n");
    for profile in registry.list_all() {
        println!("  {}", profile.name);
        if !profile.description.is_empty() {
            println!("    {}", profile.description);
        }
    }
}

fn write_output(output: Option<&String>, converted: &str) -> Result<(), String> {
    match output {
        Some(path) => std::fs::write(path, converted).map_err(|e| format!("writing {}: {}", path, e)),
        None => {
            print!("{}", converted);
            Ok(())
        }
    }
}
