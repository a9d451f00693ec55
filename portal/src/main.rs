//! `portal` command: drive the address API and render portal pages.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::info;

use portal::context::{AppContext, Provider};
use portal::domain::ports::AddressService;
use portal::domain::{AddressDraft, AddressId, DateTimeLocale, UserId};
use portal::navigation::admin_menu;
use portal::outbound::http::{ApiClient, HttpAddressService};
use portal::settings::PortalSettings;
use portal::telemetry;
use portal::ui::pages::{AdminPage, address_book};

/// `portal` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "portal",
    about = "Address book client and admin page renderer",
    version
)]
struct CliArgs {
    /// Serve reads from an empty offline fixture instead of the API.
    #[arg(long, global = true)]
    offline: bool,
    /// Date/time locale for rendered pages, overriding `PORTAL_LOCALE`.
    #[arg(long, global = true, value_name = "tag")]
    locale: Option<DateTimeLocale>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the admin navigation menu.
    Menu,
    /// Render an admin page.
    Render {
        /// dashboard, settings or profile.
        page: AdminPage,
    },
    /// Address API calls; results are printed as the server's JSON.
    #[command(subcommand)]
    Addresses(AddressCommand),
}

#[derive(Debug, Subcommand)]
enum AddressCommand {
    /// List the default page of a user's addresses.
    List {
        #[arg(long = "user", value_name = "id")]
        user_id: UserId,
    },
    /// Create an address from a JSON draft.
    Create {
        #[arg(long, value_name = "draft")]
        json: String,
    },
    /// Update an address from a JSON draft.
    Update {
        id: AddressId,
        #[arg(long, value_name = "draft")]
        json: String,
    },
    /// Delete an address.
    Delete { id: AddressId },
    /// Render the address book page of a user.
    Book {
        #[arg(long = "user", value_name = "id")]
        user_id: UserId,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let settings = PortalSettings::load_from_iter([OsString::from("portal")])
        .wrap_err("load portal settings")?;
    telemetry::init(settings.log_format()?);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(async_main(args, &settings))
}

async fn async_main(args: CliArgs, settings: &PortalSettings) -> Result<()> {
    let mut context = build_context(settings, args.offline)?;
    if let Some(locale) = args.locale {
        context = context.with_locale(locale);
    }
    let provider = Provider::new(context);
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Menu => {
            for entry in admin_menu() {
                writeln!(
                    stdout,
                    "{}\t{}\t{}\t{}",
                    entry.key, entry.title, entry.path, entry.icon
                )?;
            }
        }
        Command::Render { page } => {
            let view = provider.scope(|ctx| page.render(ctx));
            write!(stdout, "{view}")?;
        }
        Command::Addresses(command) => {
            run_address_command(provider.into_inner(), command, &mut stdout).await?;
        }
    }
    Ok(())
}

fn build_context(settings: &PortalSettings, offline: bool) -> Result<AppContext> {
    let locale = settings.locale()?;
    if offline {
        info!("using offline address fixture");
        return Ok(AppContext::offline(locale));
    }
    let base_url = settings.base_url()?;
    let api = ApiClient::new(base_url, settings.timeout()).wrap_err("build API client")?;
    let service: Arc<dyn AddressService> = Arc::new(HttpAddressService::new(api));
    Ok(AppContext::new(service, locale))
}

async fn run_address_command(
    context: AppContext,
    command: AddressCommand,
    out: &mut impl Write,
) -> Result<()> {
    let addresses = context.addresses();
    match command {
        AddressCommand::List { user_id } => {
            let page = addresses.list_for_user(&user_id).await?;
            writeln!(out, "{}", page.raw_json())?;
        }
        AddressCommand::Create { json } => {
            let draft = parse_draft(&json)?;
            let created = addresses.create(&draft).await?;
            writeln!(out, "{}", created.raw_json())?;
        }
        AddressCommand::Update { id, json } => {
            let draft = parse_draft(&json)?;
            let updated = addresses.update(id, &draft).await?;
            writeln!(out, "{}", updated.raw_json())?;
        }
        AddressCommand::Delete { id } => {
            addresses.delete(id).await?;
            writeln!(out, "deleted address {id}")?;
        }
        AddressCommand::Book { user_id } => {
            let view = address_book(&context, &user_id).await?;
            write!(out, "{view}")?;
        }
    }
    Ok(())
}

fn parse_draft(json: &str) -> Result<AddressDraft> {
    serde_json::from_str(json).wrap_err("parse address draft JSON")
}
