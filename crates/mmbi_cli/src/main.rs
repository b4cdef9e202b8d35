//! Command-line client for the Money Market BI entity API.
//!
//! # Responsibility
//! - Expose list/get/search/delete over every entity resource.
//! - Keep stdout machine-readable (pretty JSON); diagnostics go to stderr.

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use mmbi_core::{
    core_version, init_logging, rest_service, AppConfig, ApplicationUser, EntityId,
    EntityResource, FiscalMonth, FiscalQuarter, FiscalYear, LoggingConfig, MoneyMarketDeal,
    Placeholder, QueryOptions, ReportBatch, ReqwestTransport, SecurityClearance, SortOrder,
    UploadNotification,
};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Debug, Parser)]
#[command(name = "mmbi", version, about = "Money Market BI entity client")]
struct Cli {
    /// JSON configuration file; `MMBI_*` variables are used when omitted.
    #[arg(long, global = true, env = "MMBI_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List one page of a resource.
    List {
        resource: Resource,
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
        /// Sort criterion as `property[,asc|desc]`; repeatable.
        #[arg(long, value_parser = parse_sort)]
        sort: Vec<SortOrder>,
    },
    /// Fetch one entity by id.
    Get { resource: Resource, id: EntityId },
    /// Free-text search; failures print an empty list.
    Search { resource: Resource, query: String },
    /// Delete one entity by id.
    Delete { resource: Resource, id: EntityId },
    /// Print the client version.
    Version,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Resource {
    Placeholders,
    ApplicationUsers,
    SecurityClearances,
    FiscalYears,
    FiscalQuarters,
    FiscalMonths,
    ReportBatches,
    MoneyMarketDeals,
    UploadNotifications,
}

fn parse_sort(raw: &str) -> Result<SortOrder, String> {
    SortOrder::parse(raw).map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mmbi: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    if let Command::Version = cli.command {
        println!("mmbi {}", core_version());
        return Ok(());
    }

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::from_json_file(path)?,
        None => AppConfig::from_env()?,
    };
    if let Some(dir) = config.log_dir.as_deref() {
        init_logging(&LoggingConfig::new(config.log_level.clone(), dir))?;
    }
    info!(
        "event=cli_start module=cli status=ok base_url={} microservice={}",
        config.api_base_url,
        config.microservice.as_deref().unwrap_or("-")
    );

    match cli.command {
        Command::List {
            resource,
            page,
            size,
            sort,
        } => {
            let options = sort
                .into_iter()
                .fold(QueryOptions::new().page(page, size), QueryOptions::sort_by);
            dispatch(resource, &config, Action::List(options)).await
        }
        Command::Get { resource, id } => dispatch(resource, &config, Action::Get(id)).await,
        Command::Search { resource, query } => {
            let options = QueryOptions::new().search(query);
            dispatch(resource, &config, Action::Search(options)).await
        }
        Command::Delete { resource, id } => {
            dispatch(resource, &config, Action::Delete(id)).await
        }
        Command::Version => Ok(()),
    }
}

enum Action {
    List(QueryOptions),
    Get(EntityId),
    Search(QueryOptions),
    Delete(EntityId),
}

async fn dispatch(resource: Resource, config: &AppConfig, action: Action) -> CliResult<()> {
    match resource {
        Resource::Placeholders => execute::<Placeholder>(config, action).await,
        Resource::ApplicationUsers => execute::<ApplicationUser>(config, action).await,
        Resource::SecurityClearances => execute::<SecurityClearance>(config, action).await,
        Resource::FiscalYears => execute::<FiscalYear>(config, action).await,
        Resource::FiscalQuarters => execute::<FiscalQuarter>(config, action).await,
        Resource::FiscalMonths => execute::<FiscalMonth>(config, action).await,
        Resource::ReportBatches => execute::<ReportBatch>(config, action).await,
        Resource::MoneyMarketDeals => execute::<MoneyMarketDeal>(config, action).await,
        Resource::UploadNotifications => execute::<UploadNotification>(config, action).await,
    }
}

async fn execute<T: EntityResource>(config: &AppConfig, action: Action) -> CliResult<()> {
    let transport = ReqwestTransport::new(config.request_timeout())?;
    let service = rest_service::<T, _>(config, transport);

    match action {
        Action::List(options) => {
            let page = service.query(&options).await?;
            if let Some(total) = page.total_count {
                eprintln!("total={total} next_page={:?}", page.links.next);
            }
            print_json(&page.items())
        }
        Action::Get(id) => {
            let found = service.find(id).await?;
            match found.body {
                Some(entity) => print_json(&entity),
                None => Err(format!("{} {id} returned no body", T::ENTITY_NAME).into()),
            }
        }
        Action::Search(options) => print_json(&service.search(&options).await.items()),
        Action::Delete(id) => {
            let deleted = service.delete(id).await?;
            eprintln!("deleted {} {id} (status {})", T::ENTITY_NAME, deleted.status);
            Ok(())
        }
    }
}

fn print_json<V: Serialize + ?Sized>(value: &V) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn every_subcommand_has_help_text() {
        let command = Cli::command();
        for subcommand in command.get_subcommands() {
            assert!(
                subcommand.get_about().is_some(),
                "`{}` has no description",
                subcommand.get_name()
            );
        }
    }

    #[test]
    fn delete_takes_resource_and_id() {
        let cli = Cli::try_parse_from(["mmbi", "delete", "report-batches", "55"]).unwrap();
        assert!(matches!(
            cli.command,
            super::Command::Delete {
                resource: super::Resource::ReportBatches,
                id: 55
            }
        ));
    }
}
