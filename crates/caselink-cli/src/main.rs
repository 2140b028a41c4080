//! Operator CLI for share-link diagnosis
//!
//! The usual workflow when a distributed link goes stale: `resolve`
//! the link against a catalog snapshot to see which tier answers, or
//! `decode` its payload to inspect what the link itself carries.

use anyhow::{bail, Context, Result};
use caselink_codec as codec;
use caselink_model::{CaseStudy, SlugKey};
use caselink_resolver::{InMemoryCatalog, ProjectResolver, ResolverConfig, ShareRequestCache};
use clap::{Arg, ArgAction, Command};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("caselink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and mint case-study share links")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("resolve")
                .about("Resolve a share link the way the page would")
                .arg(Arg::new("url").required(true).help("Full share URL"))
                .arg(
                    Arg::new("catalog")
                        .long("catalog")
                        .help("JSON file with an array of case-study records"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Resolver config TOML file"),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .action(ArgAction::SetTrue)
                        .help("Print one-line JSON instead of pretty"),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("Mint a share link for a slug selection")
                .arg(
                    Arg::new("catalog")
                        .long("catalog")
                        .required(true)
                        .help("JSON file with an array of case-study records"),
                )
                .arg(
                    Arg::new("base")
                        .long("base")
                        .default_value("https://example.com")
                        .help("Base URL for the link"),
                )
                .arg(Arg::new("for").long("for").help("Recipient display name"))
                .arg(Arg::new("note").long("note").help("Note to the recipient"))
                .arg(
                    Arg::new("slugs")
                        .num_args(1..)
                        .required(true)
                        .help("Slugs to include, in order"),
                ),
        )
        .subcommand(
            Command::new("decode")
                .about("Inspect the inline payload of a link")
                .arg(Arg::new("blob").required(true).help("The d= payload blob")),
        );

    match cli.get_matches().subcommand() {
        Some(("resolve", args)) => {
            let url: &String = args.get_one("url").expect("required arg");
            let request = codec::request_from_url(url)?;

            let catalog = match args.get_one::<String>("catalog") {
                Some(path) => load_catalog(path)?,
                None => InMemoryCatalog::new(),
            };
            let config = match args.get_one::<String>("config") {
                Some(path) => ResolverConfig::from_file(path)?,
                None => ResolverConfig::default(),
            };

            let cache = ShareRequestCache::for_config(&config);
            let resolver = ProjectResolver::with_config(Arc::new(catalog), config);
            let packet = cache.resolve(&resolver, &request).await;

            let json = if args.get_flag("compact") {
                serde_json::to_string(&packet)?
            } else {
                serde_json::to_string_pretty(&packet)?
            };
            println!("{json}");
            if packet.is_partial() {
                eprintln!(
                    "note: {} of {} requested slugs matched",
                    packet.len(),
                    packet.slugs.len()
                );
            }
        }
        Some(("encode", args)) => {
            let path: &String = args.get_one("catalog").expect("required arg");
            let catalog = load_records(path)?;

            let slugs: Vec<&String> = args.get_many("slugs").expect("required arg").collect();
            let mut selection = Vec::new();
            for requested in slugs {
                let key = SlugKey::new(requested);
                let record = catalog
                    .iter()
                    .find(|record| record.slug_key() == key)
                    .with_context(|| format!("slug not in catalog: {requested}"))?;
                selection.push(record.clone());
            }

            let link = codec::share_url(
                args.get_one::<String>("base").expect("has default"),
                &selection,
                args.get_one::<String>("for").map(String::as_str),
                args.get_one::<String>("note").map(String::as_str),
            )?;
            println!("{link}");
        }
        Some(("decode", args)) => {
            let blob: &String = args.get_one("blob").expect("required arg");
            match codec::decode_items(Some(blob)) {
                Some(items) => println!("{}", serde_json::to_string_pretty(&items)?),
                None => bail!("no usable inline data in that blob"),
            }
        }
        _ => {}
    }

    Ok(())
}

fn load_records(path: &str) -> Result<Vec<CaseStudy>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("invalid catalog JSON: {path}"))
}

fn load_catalog(path: &str) -> Result<InMemoryCatalog> {
    Ok(InMemoryCatalog::from_records(load_records(path)?))
}
