use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use scaffold_api::ScaffoldClient;
use scaffold_util::table::{BoundaryStrategy, DecodeOptions, Table, decode_table, parse_padding};
use scaffold_util::{CliRunner, HarnessConfig};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LIST_RESOURCES: &[&str] = &["workflow", "user", "task", "state", "input", "file"];

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("decode", sub)) => run_decode(sub),
        Some(("get", sub)) => run_get(sub).await,
        Some(("list", sub)) => run_list(sub).await,
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing::subscriber::set_global_default(build_subscriber(filter));
}

/// Stderr subscriber gated only by `filter`, so `RUST_LOG` can raise verbosity.
fn build_subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).finish()
}

fn build_cli() -> Command {
    let decode = Command::new("decode")
        .about("Decode a column-aligned table into JSON")
        .arg(Arg::new("file").help("File holding the captured table; stdin when omitted"))
        .arg(
            Arg::new("padding")
                .long("padding")
                .default_value(" ")
                .help("Single character padding the cells"),
        )
        .arg(
            Arg::new("no-header")
                .long("no-header")
                .action(ArgAction::SetTrue)
                .help("Treat every line as data"),
        )
        .arg(
            Arg::new("records")
                .long("records")
                .short('r')
                .action(ArgAction::SetTrue)
                .help("Emit header-keyed records instead of rows"),
        )
        .arg(
            Arg::new("intersect")
                .long("intersect")
                .action(ArgAction::SetTrue)
                .help("Keep only column boundaries no data line runs across"),
        );

    let get = Command::new("get")
        .about("Run `scaffold get` and decode its table into records")
        .arg(Arg::new("object").required(true).help("Object to get, e.g. workflow, state or task/write_file"))
        .arg(Arg::new("profile").long("profile").short('p').default_value("default"))
        .arg(Arg::new("context").long("context").short('c').help("Workflow context"))
        .arg(Arg::new("cli").long("cli").help("Path to the scaffold CLI; defaults to SCAFFOLD_CLI"))
        .arg(
            Arg::new("status")
                .long("status")
                .action(ArgAction::SetTrue)
                .help("Only report whether the object is visible to the profile"),
        );

    let list = Command::new("list")
        .about("Fetch a resource collection from the scaffold API")
        .arg(
            Arg::new("resource")
                .required(true)
                .value_parser(LIST_RESOURCES.to_vec())
                .help("Resource to list"),
        )
        .arg(Arg::new("workflow").long("workflow").short('w').help("Limit to one workflow"));

    Command::new("scaffold-table")
        .about("Decode scaffold CLI tables and query the scaffold API")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(decode)
        .subcommand(get)
        .subcommand(list)
}

fn decode_options(matches: &ArgMatches) -> Result<DecodeOptions> {
    let padding = matches.get_one::<String>("padding").map(String::as_str).unwrap_or(" ");
    let strategy = if matches.get_flag("intersect") {
        BoundaryStrategy::Intersection
    } else {
        BoundaryStrategy::FirstLine
    };

    Ok(DecodeOptions::default()
        .with_padding(parse_padding(padding)?)
        .with_header(!matches.get_flag("no-header"))
        .with_records(matches.get_flag("records"))
        .with_strategy(strategy))
}

fn run_decode(matches: &ArgMatches) -> Result<()> {
    let options = decode_options(matches)?;
    let content = match matches.get_one::<String>("file") {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("read {path}"))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("read stdin")?;
            buffer
        }
    };

    let table = decode_table(&content, &options)?;
    print_json(&table)
}

async fn run_get(matches: &ArgMatches) -> Result<()> {
    let config = HarnessConfig::from_env()?;
    let program = matches
        .get_one::<String>("cli")
        .map(|path| scaffold_util::expand_tilde(path))
        .unwrap_or(config.cli_path);
    let profile = matches.get_one::<String>("profile").context("profile has a default")?;
    let object = matches.get_one::<String>("object").context("object is required")?;
    let context = matches.get_one::<String>("context").map(String::as_str);

    let runner = CliRunner::new(program, profile.as_str());
    if matches.get_flag("status") {
        let visible = runner.get_status(object, context).await?;
        println!("{}", serde_json::json!({ "object": object, "visible": visible }));
        return Ok(());
    }

    let records = runner.get_records(object, context).await?;
    debug!(count = records.len(), "decoded scaffold get output");
    print_json(&Table::Records(records))
}

async fn run_list(matches: &ArgMatches) -> Result<()> {
    let config = HarnessConfig::from_env()?;
    let client = ScaffoldClient::new(&config.base_url(), &config.api_token)?;
    let resource = matches.get_one::<String>("resource").context("resource is required")?;
    let workflow = matches.get_one::<String>("workflow").map(String::as_str);

    let items: Value = match (resource.as_str(), workflow) {
        ("workflow", _) => serde_json::to_value(client.workflows(true).await?.into_body()?)?,
        ("user", _) => serde_json::to_value(client.users(true).await?.into_body()?)?,
        ("task", Some(workflow)) => serde_json::to_value(client.workflow_tasks(workflow, true).await?.into_body()?)?,
        ("task", None) => serde_json::to_value(client.tasks(true).await?.into_body()?)?,
        ("state", Some(workflow)) => serde_json::to_value(client.workflow_states(workflow, true).await?.into_body()?)?,
        ("state", None) => serde_json::to_value(client.states(true).await?.into_body()?)?,
        ("input", Some(workflow)) => serde_json::to_value(client.workflow_inputs(workflow, true).await?.into_body()?)?,
        ("input", None) => serde_json::to_value(client.inputs(true).await?.into_body()?)?,
        ("file", Some(workflow)) => serde_json::to_value(client.workflow_files(workflow, true).await?.into_body()?)?,
        ("file", None) => serde_json::to_value(client.files(true).await?.into_body()?)?,
        (other, _) => anyhow::bail!("unsupported resource: {}", other),
    };
    print_json(&items)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
