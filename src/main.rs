//! importus - Python module explorer and WebP converter CLI tool
//!
//! Browses a curated catalog of Python packages, keeps a persistent
//! selection, checks what the local interpreter can import and converts
//! images to WebP.

use clap::Parser;
use importus::catalog::Catalog;
use importus::checker::{
    install_command, Checker, Environment, EnvironmentOptions, SiteIndex, SystemInterpreter,
};
use importus::cli::{split_names, CliArgs, Command, GenerateCommand, SelectCommand, SettingsCommand};
use importus::codegen::{import_code, install_commands, install_rows};
use importus::config::SettingsStore;
use importus::convert::{collect_images, convert_batch, default_output_dir, ConvertOptions};
use importus::domain::Platform;
use importus::extract::extract_imports;
use importus::lookup::spawn_lookup;
use importus::output::{create_formatter, OutputConfig, OutputFormatter, SelectionChange};
use importus::progress::Progress;
use importus::registry::default_index;
use importus::server::{self, Router};
use importus::session::SelectionSession;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("importus=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("importus=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    tracing::debug!("importus starting with args: {:?}", args);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let output_config = OutputConfig::from_cli(args.json);
    let formatter = create_formatter(&output_config);
    let catalog = Catalog::builtin();

    let store = match &args.config {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::at_default_location(),
    };

    let mut stdout = io::stdout().lock();
    let out: &mut dyn Write = &mut stdout;
    let view = formatter.as_ref();

    let exit_code = match args.command.clone() {
        Command::Categories => {
            view.categories(&catalog.categories(), out)?;
            ExitCode::SUCCESS
        }

        Command::Modules { category } => {
            let session = SelectionSession::load(store);
            view.modules(
                &category,
                catalog.modules_by_category(&category),
                session.all(),
                out,
            )?;
            ExitCode::SUCCESS
        }

        Command::Search { query } => {
            view.search(&query, &catalog.search(&query), out)?;
            ExitCode::SUCCESS
        }

        Command::Select(select) => {
            let mut session = SelectionSession::load(store);
            run_select(select, &mut session, &catalog, view, out)?;
            ExitCode::SUCCESS
        }

        Command::Extract { text, add } => {
            let text = if text.is_empty() {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                text.join("\n")
            };
            let names = extract_imports(&text);
            let change = if add && !names.is_empty() {
                let mut session = SelectionSession::load(store);
                Some(add_names(&mut session, &names))
            } else {
                None
            };
            view.extracted(&names, change.as_ref(), out)?;
            ExitCode::SUCCESS
        }

        Command::Check {
            names,
            select_missing,
        } => {
            let mut session = SelectionSession::load(store);
            let mut names = split_names(&names);
            if names.is_empty() {
                names = session.all().iter().cloned().collect();
            }

            let checker = checker(&args);
            let report = checker.check(&names);
            view.check_report(&report, out)?;

            let missing: Vec<String> = report.missing().into_iter().map(String::from).collect();
            if select_missing && !missing.is_empty() {
                let change = add_names(&mut session, &missing);
                if !args.json {
                    view.selection_change(&change, out)?;
                }
            }

            if missing.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }

        Command::Version { name } => {
            let version = checker(&args).get_version(&name);
            view.version(&name, &version, out)?;
            ExitCode::SUCCESS
        }

        Command::InstallCommand { name, platform } => {
            let platform = platform_or_current(platform.as_deref());
            view.install_command(&name, platform, &install_command(&name, platform), out)?;
            ExitCode::SUCCESS
        }

        Command::Generate(generate) => {
            let session = SelectionSession::load(store);
            let selected: Vec<&String> = session.all().iter().collect();
            let language = session.settings().language;
            match generate {
                GenerateCommand::Imports { with_tests } => {
                    let code = import_code(&selected, with_tests, language);
                    view.generated("imports", &code, out)?;
                }
                GenerateCommand::Install { platform } => {
                    let platform = platform_or_current(platform.as_deref());
                    let commands = install_commands(&selected, platform, language);
                    view.generated("install", &commands, out)?;
                }
                GenerateCommand::Table { platform } => {
                    let platform = platform_or_current(platform.as_deref());
                    let rows = install_rows(&selected, &checker(&args), platform);
                    view.install_rows(&rows, out)?;
                }
            }
            ExitCode::SUCCESS
        }

        Command::Info { name } => {
            let index = Arc::new(default_index()?);
            let mut progress = Progress::new(output_config.show_progress());
            progress.spinner(&format!("Fetching {} from PyPI", name));
            let result = spawn_lookup(index, &name).wait().await;
            progress.finish_and_clear();

            match result {
                Ok(info) => view.package_info(&info, out)?,
                Err(e) => {
                    tracing::debug!("lookup failed: {}", e);
                    view.lookup_failed(&name, &e.display_message(), out)?;
                }
            }
            ExitCode::SUCCESS
        }

        Command::Docs { name } => {
            view.doc_url(&name, &catalog.doc_url(&name), out)?;
            ExitCode::SUCCESS
        }

        Command::Popularity { category } => {
            view.popularity(&category, &catalog.popularity(&category), out)?;
            ExitCode::SUCCESS
        }

        Command::Settings(settings) => {
            let mut session = SelectionSession::load(store);
            if let SettingsCommand::Set {
                theme,
                language,
                window_size,
                auto_update,
            } = settings
            {
                if let Some(theme) = theme {
                    session.set_theme(theme);
                }
                if let Some(language) = language {
                    session.set_language(language);
                }
                if let Some(size) = window_size {
                    session.set_window_size(&size);
                }
                if let Some(enabled) = auto_update {
                    session.set_auto_update(enabled);
                }
            }
            view.settings(session.settings(), session.store().path(), out)?;
            ExitCode::SUCCESS
        }

        Command::Env => {
            let environment = environment(&args);
            view.environment(&environment.report(), out)?;
            ExitCode::SUCCESS
        }

        Command::Serve { port } => {
            let bound = server::bind(port)?;
            let index = Arc::new(default_index()?);
            let router = Router::new(catalog, checker(&args), index);
            eprintln!("Serving on http://{}", bound.addr());
            bound.run(router).await?;
            ExitCode::SUCCESS
        }

        Command::Convert {
            paths,
            output,
            quality,
            png_quality,
            lossless_png,
        } => {
            let files = collect_images(&paths);
            let output_dir = output.unwrap_or_else(|| default_output_dir(&files));
            let options = ConvertOptions {
                quality,
                png_quality,
                lossless_png,
            };
            let mut progress = Progress::new(output_config.show_progress());
            let report = tokio::task::spawn_blocking(move || {
                let report = convert_batch(&files, &output_dir, &options, &mut progress);
                progress.finish_and_clear();
                report
            })
            .await??;
            view.conversion(&report, out)?;
            if report.failed.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
    };

    out.flush()?;
    Ok(exit_code)
}

fn run_select(
    command: SelectCommand,
    session: &mut SelectionSession,
    catalog: &Catalog,
    view: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> io::Result<()> {
    match command {
        SelectCommand::Add { names } => {
            let names = split_names(&names);
            view.selection_change(&add_names(session, &names), out)
        }
        SelectCommand::Remove { names } => {
            let names = split_names(&names);
            let removed = names
                .iter()
                .filter(|name| session.remove(name))
                .cloned()
                .collect();
            let change = SelectionChange::Removed {
                removed,
                requested: names.len(),
            };
            view.selection_change(&change, out)
        }
        SelectCommand::Clear => {
            let count = session.clear();
            view.selection_change(&SelectionChange::Cleared { count }, out)
        }
        SelectCommand::List => view.selection(session.all(), out),
        SelectCommand::Category { category } => {
            let names: Vec<String> = catalog
                .modules_by_category(&category)
                .iter()
                .map(|r| r.name.clone())
                .collect();
            view.selection_change(&add_names(session, &names), out)
        }
    }
}

/// Mark `names` with a single write, reporting which ones were new
fn add_names(session: &mut SelectionSession, names: &[String]) -> SelectionChange {
    let added: Vec<String> = names
        .iter()
        .filter(|name| !session.contains(name))
        .cloned()
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    session.add_all(names);
    SelectionChange::Added {
        added,
        requested: names.len(),
    }
}

fn platform_or_current(name: Option<&str>) -> Platform {
    name.map(Platform::from_name).unwrap_or_else(Platform::current)
}

fn environment(args: &CliArgs) -> Environment {
    let options = EnvironmentOptions {
        python: args.python.clone(),
        site_dirs: args.site_dirs.clone(),
    };
    Environment::discover(&options, &SystemInterpreter::new())
}

fn checker(args: &CliArgs) -> Checker<SiteIndex> {
    environment(args).into_checker()
}
