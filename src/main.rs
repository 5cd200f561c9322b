use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use plugin_help::address::{Address, MemoryAddress, PAGE_PATH, page_address};
use plugin_help::controller::{ViewController, render_table};
use plugin_help::detail::dialog_view;
use plugin_help::logging::{self, LogTarget};
use plugin_help::model::{Branding, HelpDocument};
use plugin_help::selector::RepoSelector;
use plugin_help::table::{RowDescriptor, TableView};

#[derive(Parser)]
#[command(name = "plugin-help")]
#[command(about = "Browse the plugin help catalogue per repository", long_about = None)]
struct Cli {
    /// Plugin help document (JSON, or the deck's `var allHelp = ...;` script)
    #[arg(long, default_value = "plugin-help.json", global = true)]
    help_file: PathBuf,

    /// Branding overrides (JSON)
    #[arg(long, global = true)]
    branding: Option<PathBuf>,

    /// Initial page address, e.g. "/plugin-help.html?repo=org%2Frepo"
    #[arg(long, default_value = PAGE_PATH, global = true)]
    address: String,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Write logs to this file (the interactive view never logs to the terminal)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive view (the default)
    Tui,

    /// Print the command table for a repository
    Show {
        /// Repository selector ("" for all repositories); defaults to the
        /// selection restored from --address
        #[arg(long)]
        repo: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List the repositories that can be selected
    Repos,

    /// Print the details of one plugin
    Plugin {
        name: String,
        /// Repository whose configuration is shown ("" for global)
        #[arg(long, default_value = "")]
        repo: String,
        /// Look the plugin up among external plugins
        #[arg(long)]
        external: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let target = match (&command, cli.log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Tui, None) => LogTarget::Off,
        _ => LogTarget::Stderr,
    };
    logging::init(&cli.log_level, target)?;

    let doc = HelpDocument::load(&cli.help_file)?;

    match command {
        Commands::Tui => {
            let branding = cli.branding.as_deref().map(Branding::load).transpose()?;
            let mut view = ViewController::new(doc, MemoryAddress::parse(&cli.address));
            view.load(branding.as_ref());
            let href = plugin_help::tui::run(view)?;
            println!("{}", href);
        }
        Commands::Show { repo, json } => {
            let repo = match repo {
                Some(repo) => {
                    if !repo.is_empty() && !doc.all_repos.contains(&repo) {
                        anyhow::bail!("unknown repo: {}", repo);
                    }
                    repo
                }
                None => {
                    let mut selector = RepoSelector::new();
                    selector.restore_from_address(MemoryAddress::parse(&cli.address).search());
                    selector.populate_options(doc.sorted_repos());
                    selector.current_selection().to_string()
                }
            };
            let table = render_table(&doc, &repo);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&table).context("serialize table json")?
                );
            } else {
                print_table(&table);
            }
            tracing::debug!(address = %page_address(&repo), "rendered table");
        }
        Commands::Repos => {
            for repo in doc.sorted_repos() {
                println!("{}", repo);
            }
        }
        Commands::Plugin {
            name,
            repo,
            external,
            json,
        } => {
            let detail = doc
                .plugin(&name, external)
                .with_context(|| format!("unknown plugin: {}", name))?;
            let view = dialog_view(&repo, &name, detail);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&view).context("serialize plugin json")?
                );
            } else {
                println!("{}", view.title);
                for section in &view.sections {
                    println!();
                    println!("{}", section.title);
                    println!("{}", section.body);
                }
            }
        }
    }

    Ok(())
}

fn print_table(table: &TableView) {
    let TableView::Visible(rows) = table else {
        println!("(no commands)");
        return;
    };
    for row in rows {
        print_row(row);
    }
}

fn print_row(row: &RowDescriptor) {
    let flags = row
        .markers
        .iter()
        .map(|m| m.kind.icon())
        .collect::<Vec<_>>()
        .join(",");
    let usage = row.usage.lines().join(" | ");
    let plugin = if row.plugin.is_external {
        format!("{} (external)", row.plugin.name)
    } else {
        row.plugin.name.clone()
    };
    println!("{:<12} {:<40} {}", flags, usage, plugin);
}
