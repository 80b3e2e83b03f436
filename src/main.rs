//! # inventory
//!
//! Command line front end for the product inventory. Every run loads the product
//! list first, the way the page does on mount, applies the subcommand, then prints
//! the resulting table.

use anyhow::{bail, Context};
use clap::Parser;
use inventory_client::api::HttpProductApi;
use inventory_client::cli::{AddArgs, Cli, Command, DeleteArgs, EditArgs, ListArgs};
use inventory_client::controller::{Collaborators, ControllerHandle};
use inventory_client::lifecycle::{setup_tracing, InventoryApp};
use inventory_client::model::ProductId;
use inventory_client::session::FormField;
use inventory_client::store::{FilterKind, SortDirection};
use inventory_client::ui::{product_table, AutoConfirm, Confirm, ConsoleNotifier, StdinConfirm};
use std::sync::Arc;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let cli = Cli::parse();
    let config = cli.config();
    let api = HttpProductApi::new(&config).context("Could not build the HTTP client")?;

    let confirm: Arc<dyn Confirm> = match &cli.command {
        Command::Delete(DeleteArgs { yes: true, .. }) => Arc::new(AutoConfirm::yes()),
        _ => Arc::new(StdinConfirm),
    };
    let app = InventoryApp::start(
        &config,
        Collaborators {
            api: Arc::new(api),
            notifier: Arc::new(ConsoleNotifier),
            confirm,
        },
    );
    let handle = app.handle();

    handle.load_all().await?;
    handle.settle().await?;

    let span = tracing::info_span!("command");
    async { run(&handle, cli.command).await }
        .instrument(span)
        .await?;

    let state = handle.settle().await?;
    println!("{}", product_table(state.store.display()));
    info!(shown = state.store.display().len(), "Done");

    drop(handle);
    app.shutdown().await?;
    Ok(())
}

async fn run(handle: &ControllerHandle, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List(ListArgs {
            name,
            category,
            sort,
            desc,
        }) => {
            if let Some(text) = category {
                handle.apply_filter(FilterKind::Category, text).await?;
            }
            if let Some(text) = name {
                handle.apply_filter(FilterKind::Name, text).await?;
            }
            if let Some(column) = sort {
                handle
                    .sort(column.into(), SortDirection::from_ascending(!desc))
                    .await?;
            }
        }

        Command::Add(AddArgs {
            name,
            category,
            price,
            stock,
        }) => {
            handle.begin_create().await?;
            for (field, value) in [
                (FormField::Name, name),
                (FormField::Category, category),
                (FormField::Price, price),
                (FormField::Stock, stock),
            ] {
                handle.edit_field(field, value).await?;
            }
            handle.submit().await?;
        }

        Command::Edit(EditArgs {
            id,
            name,
            category,
            price,
            stock,
        }) => {
            let id = ProductId(id);
            // An edit click on a missing row would leave the form in create mode.
            if handle.snapshot().await?.store.find(id).is_none() {
                bail!("No product with id {id}");
            }
            handle.begin_edit(id).await?;
            let changes = [
                (FormField::Name, name),
                (FormField::Category, category),
                (FormField::Price, price),
                (FormField::Stock, stock),
            ];
            for (field, value) in changes {
                if let Some(value) = value {
                    handle.edit_field(field, value).await?;
                }
            }
            handle.submit().await?;
        }

        Command::Delete(DeleteArgs { id, .. }) => {
            let id = ProductId(id);
            if handle.snapshot().await?.store.find(id).is_none() {
                bail!("No product with id {id}");
            }
            handle.remove(id).await?;
        }
    }
    Ok(())
}
