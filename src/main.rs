use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use loomkeeper::api::ApiClient;
use loomkeeper::collection::CollectionViewModel;
use loomkeeper::config::Config;
use loomkeeper::entity::{Entity, EntityKind, Order, Party, Payment, Product, Staff};
use loomkeeper::gateway::SubmissionGateway;
use loomkeeper::logging::init_tracing;
use loomkeeper::mode::{LogNoticeSink, ModeController};
use loomkeeper::session::{SessionStore, SessionUser, UserId};
use loomkeeper::validation::{EntityFormValidator, FormDraft};
use loomkeeper::workflow::{EntityWorkflow, WorkflowError};

#[derive(Debug, Parser)]
#[command(name = "loomkeeper", version, about = "Textile bookkeeping client")]
struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use sample data and refuse every change.
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a form draft without sending it.
    Validate(DraftArgs),
    /// Print the records the logged-in user owns.
    List {
        entity: EntityKind,
        /// Case-insensitive filter.
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a record, or update it when --id is given.
    Save {
        #[command(flatten)]
        draft: DraftArgs,
        #[arg(long)]
        id: Option<String>,
    },
    Delete { entity: EntityKind, id: String },
    /// Store the session user locally.
    Login {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: Option<String>,
    },
    Logout,
}

#[derive(Debug, Args)]
struct DraftArgs {
    entity: EntityKind,
    /// Form field as `name=value`; repeat for each field.
    #[arg(short = 'f', long = "field", value_parser = parse_field)]
    fields: Vec<(String, String)>,
}

impl DraftArgs {
    fn draft(&self) -> FormDraft {
        self.fields.iter().cloned().collect()
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))
}

/// Everything a screen would get injected.
struct Services {
    mode: ModeController,
    client: ApiClient,
    gateway: SubmissionGateway,
    session: SessionStore,
    validator: Arc<EntityFormValidator>,
}

impl Services {
    fn build(config: &Config, demo: bool) -> Result<Self> {
        let mode = ModeController::with_sink(config.mode.demo || demo, Arc::new(LogNoticeSink));
        let client = ApiClient::new(&config.api).context("Failed to build HTTP client")?;
        let gateway = SubmissionGateway::new(mode.clone(), client.clone());
        let session = SessionStore::new(config.session.resolved_path());
        Ok(Self {
            mode,
            client,
            gateway,
            session,
            validator: Arc::new(EntityFormValidator::standard()),
        })
    }

    fn owner(&self) -> Option<UserId> {
        match self.session.current_user_id() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::debug!(error = %e, "No session user");
                None
            }
        }
    }

    fn workflow<E: Entity>(&self) -> EntityWorkflow<E> {
        let collection = CollectionViewModel::new(self.mode.clone(), self.client.clone(), self.owner());
        EntityWorkflow::new(
            Arc::clone(&self.validator),
            self.gateway.clone(),
            self.session.clone(),
            collection,
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let services = Services::build(&config, cli.demo)?;

    match cli.command {
        Command::Validate(args) => {
            let report = services.validator.validate(args.entity, &args.draft());
            if report.is_valid() {
                println!("{} draft is valid", args.entity);
                return Ok(());
            }
            for (field, message) in report.errors() {
                println!("{field}: {message}");
            }
            bail!("{} draft has {} invalid field(s)", args.entity, report.errors().len());
        }
        Command::List { entity, search } => match entity {
            EntityKind::Party => list::<Party>(&services, search).await,
            EntityKind::Staff => list::<Staff>(&services, search).await,
            EntityKind::Product => list::<Product>(&services, search).await,
            EntityKind::Order => list::<Order>(&services, search).await,
            EntityKind::Payment => list::<Payment>(&services, search).await,
            EntityKind::Attendance => unsupported(entity),
        },
        Command::Save { draft, id } => {
            let fields = draft.draft();
            let id = id.as_deref();
            match draft.entity {
                EntityKind::Party => save::<Party>(&services, &fields, id).await,
                EntityKind::Staff => save::<Staff>(&services, &fields, id).await,
                EntityKind::Product => save::<Product>(&services, &fields, id).await,
                EntityKind::Order => save::<Order>(&services, &fields, id).await,
                EntityKind::Payment => save::<Payment>(&services, &fields, id).await,
                EntityKind::Attendance => unsupported(draft.entity),
            }
        }
        Command::Delete { entity, id } => match entity {
            EntityKind::Party => delete::<Party>(&services, &id).await,
            EntityKind::Staff => delete::<Staff>(&services, &id).await,
            EntityKind::Product => delete::<Product>(&services, &id).await,
            EntityKind::Order => delete::<Order>(&services, &id).await,
            EntityKind::Payment => delete::<Payment>(&services, &id).await,
            EntityKind::Attendance => unsupported(entity),
        },
        Command::Login { id, name } => {
            let user = SessionUser {
                id: UserId::new(id),
                name,
                extra: Default::default(),
            };
            services.session.save(&user)?;
            println!(
                "Logged in as {} (session at {})",
                user.id,
                services.session.path().display()
            );
            Ok(())
        }
        Command::Logout => {
            services.session.clear()?;
            println!("Logged out");
            Ok(())
        }
    }
}

fn unsupported(entity: EntityKind) -> Result<()> {
    bail!("{entity} records can be validated but not listed or edited from the CLI")
}

async fn list<E: Entity>(services: &Services, search: Option<String>) -> Result<()> {
    let collection = CollectionViewModel::<E>::new(
        services.mode.clone(),
        services.client.clone(),
        services.owner(),
    );
    if let Err(e) = collection.load().await {
        bail!(e.user_message());
    }
    if let Some(search) = search {
        collection.set_search_text(search);
    }
    println!("{}", serde_json::to_string_pretty(&collection.visible())?);
    Ok(())
}

async fn save<E: Entity>(services: &Services, draft: &FormDraft, id: Option<&str>) -> Result<()> {
    match services.workflow::<E>().save(draft, id).await {
        Ok(entity) => {
            println!("{}", serde_json::to_string_pretty(&entity)?);
            Ok(())
        }
        Err(WorkflowError::ValidationFailed(report)) => {
            for (field, message) in report.errors() {
                println!("{field}: {message}");
            }
            bail!("{} draft has {} invalid field(s)", E::KIND, report.errors().len())
        }
        Err(e) => bail!(e.user_message()),
    }
}

async fn delete<E: Entity>(services: &Services, id: &str) -> Result<()> {
    match services.workflow::<E>().delete(id).await {
        Ok(()) => {
            println!("Deleted {} {id}", E::KIND);
            Ok(())
        }
        Err(e) => bail!(e.user_message()),
    }
}
