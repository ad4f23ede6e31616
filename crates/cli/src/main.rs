use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use emr_core::config::resolve_address_hierarchy_file;
use emr_core::{
    birthdate_from_age, lists_states, AddressHierarchyRes, Hierarchy, HierarchyStore,
    JsonAddressBook, PersonAddressSource, DEFAULT_APP_DATA_DIR,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "emr")]
#[command(about = "EMR address hierarchy CLI")]
struct Cli {
    /// Application data directory holding the hierarchy file
    #[arg(long, env = "EMR_APP_DATA_DIR", default_value = DEFAULT_APP_DATA_DIR)]
    app_data_dir: PathBuf,
    /// Hierarchy file, overriding the application data directory
    #[arg(long, env = "EMR_ADDRESS_HIERARCHY_FILE")]
    file: Option<PathBuf>,
    /// JSON file of person addresses keyed by patient id
    #[arg(long, env = "EMR_PERSON_ADDRESS_FILE")]
    persons: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all states
    Regions,
    /// List the townships of a state
    Districts {
        /// State name
        state: String,
    },
    /// List the villages of a township
    Localities {
        /// State name
        state: String,
        /// Township name
        township: String,
    },
    /// Run a drill-down query and print the JSON response
    Query {
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        township: Option<String>,
        /// Pre-fill the state listing with this patient's stored address
        #[arg(long)]
        patient_id: Option<String>,
    },
    /// Estimate a birthdate from an age such as 30y, 6m, 4w or 10d
    Birthdate {
        age: String,
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        now: Option<chrono::NaiveDate>,
    },
}

fn print_names(names: &[String], empty_message: &str) {
    if names.is_empty() {
        println!("{}", empty_message);
    } else {
        for name in names {
            println!("{}", name);
        }
    }
}

/// Run a drill-down query. The patient is only looked up when the query lists states.
fn query(
    source: PathBuf,
    persons: Option<&Path>,
    state: Option<&str>,
    township: Option<&str>,
    patient_id: Option<&str>,
) -> CliResult<AddressHierarchyRes> {
    let patient_id = patient_id.filter(|id| !id.is_empty() && lists_states(state));

    let selection = match patient_id {
        None => None,
        Some(patient_id) => {
            let book = match persons {
                Some(path) => JsonAddressBook::load(path)?,
                None => JsonAddressBook::empty(),
            };
            match book.address_for(patient_id)? {
                Some(address) => Some(address.selection()),
                None => return Err(format!("Patient not found: {}", patient_id).into()),
            }
        }
    };

    let store = HierarchyStore::new(source, false);
    Ok(store.handle(state, township, selection.as_ref()))
}

fn run(cli: Cli) -> CliResult<()> {
    let source = resolve_address_hierarchy_file(&cli.app_data_dir, cli.file);

    match cli.command {
        Some(Commands::Regions) => {
            let hierarchy = Hierarchy::load_or_empty(&source);
            print_names(hierarchy.regions(), "No states found.");
        }
        Some(Commands::Districts { state }) => {
            let hierarchy = Hierarchy::load_or_empty(&source);
            print_names(hierarchy.districts(&state), "No townships found.");
        }
        Some(Commands::Localities { state, township }) => {
            let hierarchy = Hierarchy::load_or_empty(&source);
            print_names(hierarchy.localities(&state, &township), "No villages found.");
        }
        Some(Commands::Query {
            state,
            township,
            patient_id,
        }) => {
            let res = query(
                source,
                cli.persons.as_deref(),
                state.as_deref(),
                township.as_deref(),
                patient_id.as_deref(),
            )?;
            println!("{}", serde_json::to_string_pretty(&res)?);
        }
        Some(Commands::Birthdate { age, now }) => {
            let today = now.unwrap_or_else(|| chrono::Local::now().date_naive());
            let date = birthdate_from_age(&age, today)?;
            println!("{}", date.format("%Y-%m-%d"));
        }
        None => {
            println!("Use 'emr --help' for commands");
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
