use clap::Parser;
use std::{error::Error, fs};
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use xmlforge::{
    build_record, mutate, query, test_utils::sample_plan, Census, FormatConfig, Formatter,
    XmlFormatter,
};

/// Renders the bundled sample study plan as XML, optionally after batch edits
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rename entities, as OLD=NEW (repeatable)
    #[arg(long, value_parser = parse_pair)]
    rename_entity: Vec<(String, String)>,

    /// Remove entities by name (repeatable)
    #[arg(long)]
    remove_entity: Vec<String>,

    /// Add an attribute, as ENTITY:ATTR=VALUE (repeatable)
    #[arg(long, value_parser = parse_attribute)]
    add_attribute: Vec<(String, String, String)>,

    /// Add an empty child, as CHILD=PARENT (repeatable)
    #[arg(long, value_parser = parse_pair)]
    add_child: Vec<(String, String)>,

    /// Print only the entities matching this path
    #[arg(short, long)]
    query: Option<String>,

    /// Indent with this many spaces (at most 8) instead of tabs
    #[arg(long)]
    spaces: Option<usize>,

    /// Leave out the XML declaration line
    #[arg(long)]
    no_declaration: bool,

    /// Log entity and attribute counts
    #[arg(long)]
    stats: bool,

    /// Output file path
    #[arg(short, long)]
    output: Option<String>,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(left, right)| (left.to_string(), right.to_string()))
        .ok_or_else(|| format!("expected LEFT=RIGHT, got '{}'", s))
}

fn parse_attribute(s: &str) -> Result<(String, String, String), String> {
    let (entity, rest) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ENTITY:ATTR=VALUE, got '{}'", s))?;
    let (attr, value) = parse_pair(rest)?;
    Ok((entity.to_string(), attr, value))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut root = build_record(&sample_plan())?;
    info!("Built sample tree rooted at '{}'", root.name());

    for (old, new) in &args.rename_entity {
        mutate::rename_entities_everywhere(&mut root, old, new);
    }
    for name in &args.remove_entity {
        mutate::remove_entities_everywhere(&mut root, name);
    }
    for (entity, attr, value) in &args.add_attribute {
        mutate::add_attribute_everywhere(&mut root, entity, attr, value);
    }
    for (child, parent) in &args.add_child {
        mutate::add_child_everywhere(&mut root, child, parent);
    }

    if args.stats {
        let census = Census::of(&root);
        info!(
            entities = census.entities,
            attributes = census.attributes,
            text_nodes = census.text_nodes,
            depth = census.max_depth,
            "Tree statistics"
        );
    }

    let mut config = match args.spaces {
        Some(spaces) => FormatConfig::with_spaces(spaces)?,
        None => FormatConfig::default(),
    };
    config.declaration = !args.no_declaration;

    let contents = match &args.query {
        Some(path) => {
            let matches = query(&root, path);
            info!("Query '{}' matched {} entities", path, matches.len());
            matches
                .iter()
                .map(|entity| XmlFormatter::render(entity, 0, &config))
                .collect::<Vec<_>>()
                .join("\n")
        }
        None => XmlFormatter.format(&root, &config),
    };

    if let Some(output_path) = args.output {
        info!("Writing output to {}", output_path);
        fs::write(output_path, contents)?;
    } else {
        println!("{}", contents);
    }
    Ok(())
}
