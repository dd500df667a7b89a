//! Binary entrypoint for the wandview CLI.
//!
//! Each subcommand drives one interaction against the game server and prints the
//! parts of the page it touched:
//! - `init` - write a starter `wandview.toml`
//! - `inventory`, `container`, `spells`, `skills`, `achievements` - open a panel
//! - `use`, `discard`, `take`, `stash`, `undo-item` - item actions
//! - `pick-skills`, `battle`, `talk`, `go`, `undo` - choices that replace the page
//! - `gain-spells`, `restore`, `reload-scenes` - server debug helpers
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};

use wandview::client::{GameClient, Outcome, Panel};
use wandview::config::Config;
use wandview::gateway::HttpGateway;
use wandview::model::ContainerScope;
use wandview::view::text::{describe_control, describe_notices, describe_region, describe_stats};
use wandview::view::{Page, RegionId, WidgetId};

#[derive(Parser)]
#[command(name = "wandview")]
#[command(about = "Terminal view of a browser text RPG session")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "wandview.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    #[command(flatten)]
    Session(SessionCommand),
}

/// Commands that talk to the game server.
#[derive(Subcommand)]
enum SessionCommand {
    /// Show the backpack
    Inventory,
    /// Show a container next to the backpack
    Container {
        /// Container id (defaults to the configured container)
        id: Option<String>,
    },
    /// Show known spells
    Spells {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show the battle skill picker
    Skills {
        #[arg(short, long, default_value_t = 0)]
        page: usize,
    },
    /// Show unlocked achievements
    Achievements,
    /// Use or wear an item from the backpack
    Use { item: String },
    /// Discard an item from the backpack or a container
    Discard {
        item: String,
        #[arg(long)]
        container: Option<String>,
    },
    /// Take an item out of a container
    Take {
        item: String,
        #[arg(long)]
        container: Option<String>,
    },
    /// Put an item into a container
    Stash {
        item: String,
        #[arg(long)]
        container: Option<String>,
    },
    /// Revert the last item action
    UndoItem,
    /// Select up to three battle skills and confirm them
    PickSkills { skills: Vec<String> },
    /// Choose a battle action by index
    Battle { choice: usize },
    /// Choose a dialogue option by index
    Talk { choice: usize },
    /// Travel to a scene
    Go { scene: String },
    /// Step the game back once
    Undo,
    /// Learn every spell (server debug mode)
    GainSpells,
    /// Restore health and sanity (server debug mode)
    Restore,
    /// Reload scene files on the server (server debug mode)
    ReloadScenes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
            return Ok(());
        }
        Commands::Session(command) => command,
    };

    let config = Config::load(&cli.config).await.unwrap_or_else(|e| {
        eprintln!("{} (using defaults)", e);
        Config::default()
    });
    init_logging(&Some(config.clone()), cli.verbose);

    let gateway = HttpGateway::new(&config.server)?;
    info!("Talking to {}", gateway.base_url());
    let default_container = config.view.default_container.clone();
    let client = GameClient::new(gateway, config.view)?;
    let container = |id: Option<String>| id.unwrap_or_else(|| default_container.clone());

    let (outcome, regions) = match command {
        SessionCommand::Inventory => (client.open(Panel::Inventory).await, vec![RegionId::Inventory]),
        SessionCommand::Container { id } => (
            client.open(Panel::Container(container(id))).await,
            vec![RegionId::ContainerItems, RegionId::ContainerInventory],
        ),
        SessionCommand::Spells { page } => {
            let mut outcome = client.open(Panel::Spells).await;
            if page > 1 && outcome.is_ok() {
                outcome = client.load_spells(page).await;
            }
            (outcome, vec![RegionId::Spells])
        }
        SessionCommand::Skills { page } => {
            let mut outcome = client.open(Panel::Skills).await;
            if page > 0 && outcome.is_ok() {
                outcome = client.load_skills_page(page).await;
            }
            (outcome, vec![RegionId::Skills])
        }
        SessionCommand::Achievements => (
            client.open(Panel::Achievements).await,
            vec![RegionId::Achievements],
        ),
        SessionCommand::Use { item } => (client.use_item(&item).await, vec![RegionId::Inventory]),
        SessionCommand::Discard { item, container } => {
            let scope = ContainerScope::named(container.unwrap_or_default());
            let regions = match scope {
                ContainerScope::Inventory => vec![RegionId::Inventory],
                ContainerScope::Named(_) => vec![RegionId::ContainerItems],
            };
            (client.discard_item(&item, scope).await, regions)
        }
        SessionCommand::Take { item, container: id } => (
            client.take_from_container(&item, &container(id)).await,
            vec![RegionId::ContainerItems, RegionId::ContainerInventory],
        ),
        SessionCommand::Stash { item, container: id } => (
            client.put_into_container(&item, &container(id)).await,
            vec![RegionId::ContainerItems, RegionId::ContainerInventory],
        ),
        SessionCommand::UndoItem => (client.undo_item_action().await, vec![RegionId::Inventory]),
        SessionCommand::PickSkills { skills } => {
            let picked = pick_skills(&client, &skills).await;
            match picked {
                Ok(()) => (client.confirm_skill_selection().await, vec![]),
                Err(e) => (Err(e), vec![RegionId::Skills]),
            }
        }
        SessionCommand::Battle { choice } => (client.choose_battle_action(choice).await, vec![]),
        SessionCommand::Talk { choice } => (client.choose_talk_option(choice).await, vec![]),
        SessionCommand::Go { scene } => (client.travel_to(&scene).await, vec![]),
        SessionCommand::Undo => (client.undo().await, vec![]),
        SessionCommand::GainSpells => (client.gain_all_spells().await, vec![]),
        SessionCommand::Restore => (client.restore_stats().await, vec![]),
        SessionCommand::ReloadScenes => (client.reload_scenes().await, vec![]),
    };

    let page = client.page();
    print_page(&page, &regions);
    match outcome {
        Ok(Outcome::Navigated(nav)) => println!("-> {}", nav.location),
        Ok(Outcome::Reloaded) => println!("-> page reloaded"),
        Ok(_) => {}
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Load the picker, then toggle each requested skill; full selections are reported, not fatal.
async fn pick_skills(
    client: &GameClient<HttpGateway>,
    skills: &[String],
) -> Result<(), wandview::error::ViewError> {
    client.page_loaded().await?;
    for name in skills {
        if let Outcome::Rejected(reason) = client.toggle_skill(name) {
            warn!("Skipping {}: {}", name, reason);
        }
    }
    Ok(())
}

fn print_page(page: &Page, regions: &[RegionId]) {
    for region in regions {
        let body = describe_region(page, *region);
        if !body.is_empty() {
            println!("[{:?}]", region);
            print!("{}", body);
        }
    }
    if regions.contains(&RegionId::Spells) {
        let controls: Vec<String> = [
            (WidgetId::PrevSpells, "prev"),
            (WidgetId::NextSpells, "next"),
        ]
        .iter()
        .filter_map(|(id, label)| describe_control(page, *id, label))
        .collect();
        if let Some(info) = page.text(WidgetId::SpellsPageInfo) {
            println!("  {}  {}", info, controls.join("  "));
        }
    }
    if let Some(capacity) = page.widget(WidgetId::InventoryCapacity) {
        println!("  {}", capacity.text);
    }
    if let Some(undo) = describe_control(page, WidgetId::UndoItem, "undo-item") {
        println!("  {}", undo);
    }
    let stats = describe_stats(page);
    if !stats.is_empty() {
        println!("[Stats]");
        print!("{}", stats);
    }
    print!("{}", describe_notices(page));
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    let base_level = match (verbosity, config) {
        (0, Some(cfg)) => cfg.logging.level_filter(),
        (0, None) => log::LevelFilter::Warn,
        (1, _) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(f) = log_file {
        let file = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Page output goes to stdout; only echo log lines to the console on a TTY.
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = file.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
