//! Workforce navigation CLI
//!
//! Inspect menu catalogs and resolve permission payloads offline.
//!
//! Usage:
//!   workforce-nav resolve --input permissions.json --surface both --pretty
//!   workforce-nav flatten --input - < permissions.json
//!   workforce-nav catalog --surface quick-access

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use workforce_navigation::config::Config;
use workforce_navigation::menu::{Catalog, Navigation, QUICK_ACCESS, TAB_BAR};
use workforce_navigation::permission::PermissionTree;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a permission payload into navigation models.
    Resolve {
        /// Permission payload file, or "-" for stdin.
        #[arg(long, default_value = "-")]
        input: PathBuf,

        /// Menu surface to print.
        #[arg(long, value_enum, default_value = "both")]
        surface: Surface,

        /// Pretty-print JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Print permission names in pre-order, as the resolver sees them.
    Flatten {
        /// Permission payload file, or "-" for stdin.
        #[arg(long, default_value = "-")]
        input: PathBuf,
    },

    /// List catalog entries in display order.
    Catalog {
        /// Menu surface to list.
        #[arg(long, value_enum, default_value = "both")]
        surface: Surface,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Surface {
    TabBar,
    QuickAccess,
    Both,
}

impl Surface {
    fn catalogs(self) -> Vec<Catalog> {
        match self {
            Surface::TabBar => vec![TAB_BAR],
            Surface::QuickAccess => vec![QUICK_ACCESS],
            Surface::Both => vec![TAB_BAR, QUICK_ACCESS],
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        max_tree_depth = config.max_tree_depth,
        max_tree_nodes = config.max_tree_nodes,
        "Configuration loaded"
    );

    match args.command {
        Command::Resolve {
            input,
            surface,
            pretty,
        } => {
            let tree = read_tree(&input)?;
            let navigation = Navigation::resolve(&tree, config.flatten_limits());
            match surface {
                Surface::TabBar => print_json(&navigation.tab_bar, pretty)?,
                Surface::QuickAccess => print_json(&navigation.quick_access, pretty)?,
                Surface::Both => print_json(&navigation, pretty)?,
            }
        }
        Command::Flatten { input } => {
            let tree = read_tree(&input)?;
            print_flattened(&tree, &config);
        }
        Command::Catalog { surface } => {
            for catalog in surface.catalogs() {
                print_catalog(&catalog);
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries command output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_tree(input: &Path) -> Result<PermissionTree> {
    let json = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read permission payload from stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("failed to read permission payload {}", input.display()))?
    };

    let tree = PermissionTree::from_json_lenient(&json);
    info!(roots = tree.roots().len(), "permission payload decoded");
    Ok(tree)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize navigation")?;

    println!("{out}");
    Ok(())
}

fn print_flattened(tree: &PermissionTree, config: &Config) {
    for (i, node) in tree.flatten(config.flatten_limits()).iter().enumerate() {
        println!("{:>4}  {}", i + 1, node.name);
    }
}

fn print_catalog(catalog: &Catalog) {
    println!("{}", catalog.name());
    println!(
        "{:<22} {:<20} {:<18} {:<9} {:<8}",
        "MODULE KEY", "ROUTE", "TITLE", "SECTION", "ALWAYS"
    );
    println!("{}", "-".repeat(81));

    for entry in catalog {
        let always = if entry.always_visible { "yes" } else { "no" };
        println!(
            "{:<22} {:<20} {:<18} {:<9} {}",
            entry.module_key,
            entry.route_name(),
            entry.display_title(),
            entry.section.label(),
            always
        );
    }
    println!();
}
