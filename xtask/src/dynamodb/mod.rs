//! Items table management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

use std::fmt::Display;

use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;
use itemstore::config::Config;
use itemstore::storage::DynamoDbRepository;
use planning::{DeployPlan, DestroyPlan};

/// Items table management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Create the items table (or delete it with `--destroy`).
    ///
    /// Prints the planned change and asks before applying it. Honors
    /// AWS_ENDPOINT_URL, AWS_REGION and AWS_PROFILE.
    Deploy {
        /// Delete the table instead of creating it.
        #[arg(long)]
        destroy: bool,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Insert generated items through the handlers' repository.
    Seed {
        /// Number of items to generate.
        #[arg(long, default_value = "15")]
        count: u32,

        #[command(flatten)]
        table: TableArgs,
    },
}

/// Arguments shared by every table command.
#[derive(Debug, clap::Args)]
pub struct TableArgs {
    /// Items table name.
    #[arg(long, env = "ITEMS_TABLE", default_value = itemstore::config::DEFAULT_TABLE_NAME)]
    pub table_name: String,

    /// Apply without asking.
    #[arg(long)]
    pub force: bool,
}

/// Terminal output that respects `--silent`, plus the confirmation gate.
struct Console<'a> {
    global: &'a crate::Global,
    force: bool,
}

impl Console<'_> {
    fn say(&self, line: impl Display) {
        if !self.global.is_silent() {
            aprintln!("{line}");
        }
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<()> {
        if self.force {
            return Ok(());
        }
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        if confirmed {
            Ok(())
        } else {
            Err(DynamodbError::UserCancelled)
        }
    }

    fn section(&self, title: String, lines: impl IntoIterator<Item = String>) {
        self.say(title);
        for line in lines {
            self.say(format!("  {line}"));
        }
        self.say("");
    }
}

pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    let settings = Config::from_env();

    match command.action {
        DynamodbAction::Deploy { destroy, table } => {
            let console = Console { global: &global, force: table.force };
            console.say(format!("{} {}\n", p_b("Target:"), client::target_display(&settings)));

            let dynamo = client::create_client(&settings).await;
            let state = client::get_table_state(&dynamo, &table.table_name).await?;

            if destroy {
                let plan = planning::calculate_destroy_plan(state.as_ref(), &table.table_name);
                destroy_table(&console, &dynamo, &plan).await
            } else {
                let desired = config::items_table_config().with_table_name(&table.table_name);
                let plan = planning::calculate_deploy_plan(state.as_ref(), &desired);
                create_table(&console, &dynamo, plan).await
            }
        }
        DynamodbAction::Seed { count, table } => {
            let console = Console { global: &global, force: table.force };
            seed_table(&console, &settings, count, table.table_name).await
        }
    }
}

async fn destroy_table(
    console: &Console<'_>,
    client: &aws_sdk_dynamodb::Client,
    plan: &DestroyPlan,
) -> Result<()> {
    let lines = planning::format_destroy_plan(plan).into_iter().map(|l| p_r(&l));
    console.section(p_y("Destroy Plan:"), lines);

    if let DestroyPlan::AlreadyGone { .. } = plan {
        console.say(p_g("Nothing to destroy."));
        return Ok(());
    }

    console.confirm("Delete this table and every item in it?", false)?;
    console.say(p_b("Deleting table..."));
    deploy::execute_destroy_plan(client, plan).await?;
    console.say(p_g("Table destroyed."));
    Ok(())
}

async fn create_table(
    console: &Console<'_>,
    client: &aws_sdk_dynamodb::Client,
    plan: DeployPlan,
) -> Result<()> {
    let lines = planning::format_deploy_plan(&plan).into_iter().map(|l| {
        match l.chars().next() {
            Some('+') => p_g(&l),
            Some('~') => p_y(&l),
            _ => l,
        }
    });
    console.section(p_c("Deploy Plan:"), lines);

    match &plan {
        DeployPlan::NoChanges { .. } => {
            console.say(p_g("Table is up to date."));
            Ok(())
        }
        DeployPlan::KeyMismatch { table_name, .. } => Err(DynamodbError::KeySchemaMismatch {
            table_name: table_name.clone(),
        }),
        DeployPlan::CreateTable { .. } => {
            console.confirm("Create the table?", true)?;
            console.say(p_b("Creating table..."));
            deploy::execute_deploy_plan(client, &plan).await?;
            console.say(p_g("Table is active."));
            Ok(())
        }
    }
}

async fn seed_table(
    console: &Console<'_>,
    settings: &Config,
    count: u32,
    table_name: String,
) -> Result<()> {
    console.say(format!("{} {}", p_b("Target:"), client::target_display(settings)));
    console.say(format!("{} {table_name} ({count} items)\n", p_b("Table:")));

    let dynamo = client::create_client(settings).await;
    if client::get_table_state(&dynamo, &table_name).await?.is_none() {
        return Err(DynamodbError::TableNotFound { table_name });
    }

    let records = seed::generate_seed_records(count, chrono::Utc::now());
    let shown = if console.global.is_verbose() { records.len() } else { 5 };
    let mut preview: Vec<String> = records
        .iter()
        .take(shown)
        .map(|r| format!("{} {}", r.id, r.name().unwrap_or_default()))
        .collect();
    if records.len() > shown {
        preview.push(format!("... {} more", records.len() - shown));
    }
    console.section(p_c("Items:"), preview);

    console.confirm(&format!("Insert {} items?", records.len()), true)?;

    let repo = DynamoDbRepository::new(dynamo, table_name);
    let inserted = seed::seed_records(&repo, &records).await?;
    console.say(format!("{} inserted {inserted} items.", p_g("Done:")));
    Ok(())
}
