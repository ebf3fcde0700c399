//! Command-line interface for seamap
//! This binary processes VIOS lssea report logs into a JSON configuration and
//! text network diagrams.
//!
//! Usage:
//!   seamap extract `<dir>` [--output `<file>`]              - Extract configuration to JSON
//!   seamap diagram `<config>` [--output `<file>`]           - Render a text diagram from JSON
//!   seamap analyze `<dir>` [--json `<file>`] [--diagram `<file>`] - Both stages in one pass

use clap::{Arg, Command};
use std::path::Path;

use seamap::lssea::pipeline::{read_json, write_json};
use seamap::lssea::{render_text_diagram, ExtractionPipeline, HostConfig};

fn main() {
    let matches = Command::new("seamap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for extracting and diagramming SEA topology from lssea logs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Parse lssea report logs into a JSON configuration")
                .arg(
                    Arg::new("dir")
                        .help("Directory containing lssea*log files")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Path of the JSON file to write")
                        .default_value("network_config.json"),
                ),
        )
        .subcommand(
            Command::new("diagram")
                .about("Render a text diagram from an extracted configuration")
                .arg(
                    Arg::new("config")
                        .help("Path to an extracted JSON configuration")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Path of the diagram file to write")
                        .default_value("network_diagram.txt"),
                ),
        )
        .subcommand(
            Command::new("analyze")
                .about("Extract configuration and render the diagram in one pass")
                .arg(
                    Arg::new("dir")
                        .help("Directory containing lssea*log files")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Path of the JSON file to write")
                        .default_value("network_config.json"),
                )
                .arg(
                    Arg::new("diagram")
                        .long("diagram")
                        .help("Path of the diagram file to write")
                        .default_value("network_diagram.txt"),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("extract", extract_matches)) => {
            let dir = extract_matches.get_one::<String>("dir").unwrap();
            let output = extract_matches.get_one::<String>("output").unwrap();
            let configs = handle_extract_command(dir);
            save_json(&configs, output);
        }
        Some(("diagram", diagram_matches)) => {
            let config = diagram_matches.get_one::<String>("config").unwrap();
            let output = diagram_matches.get_one::<String>("output").unwrap();
            handle_diagram_command(config, output);
        }
        Some(("analyze", analyze_matches)) => {
            let dir = analyze_matches.get_one::<String>("dir").unwrap();
            let json = analyze_matches.get_one::<String>("json").unwrap();
            let diagram = analyze_matches.get_one::<String>("diagram").unwrap();
            let configs = handle_extract_command(dir);
            save_json(&configs, json);
            save_diagram(&configs, diagram);
        }
        _ => unreachable!(),
    }
}

/// Run the extraction pipeline over a directory of report logs
fn handle_extract_command(dir: &str) -> Vec<HostConfig> {
    ExtractionPipeline::new()
        .run(Path::new(dir))
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        })
}

/// Render a diagram from a previously extracted JSON configuration
fn handle_diagram_command(config_path: &str, output: &str) {
    let configs = read_json(Path::new(config_path)).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    save_diagram(&configs, output);
}

fn save_json(configs: &[HostConfig], path: &str) {
    write_json(configs, Path::new(path)).unwrap_or_else(|e| {
        eprintln!("Error saving configuration: {}", e);
        std::process::exit(1);
    });
    println!("Network configuration saved to: {}", path);
}

fn save_diagram(configs: &[HostConfig], path: &str) {
    let text = render_text_diagram(configs);
    std::fs::write(path, text).unwrap_or_else(|e| {
        eprintln!("Error saving diagram: {}", e);
        std::process::exit(1);
    });
    println!("Text diagram saved to: {}", path);
}
