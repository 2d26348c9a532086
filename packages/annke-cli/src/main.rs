//! Annke CLI - inspect and adjust motion alerts on Annke/ISAPI devices
//!
//! Every command logs in once, does its work over the authenticated session,
//! and exits.

mod config;

use annke_core::Connector;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::DeviceOverrides;

#[derive(Parser)]
#[command(name = "annke")]
#[command(version)]
#[command(about = "Inspect and adjust motion detection on Annke devices")]
#[command(long_about = "
Annke CLI talks to the ISAPI management interface of Annke (and compatible)
recorders and cameras. It logs in with a challenge/digest session and reads
or updates motion detection resources.

Quick start:
  1. Write a config:    annke config
  2. List channels:     annke --host 192.168.1.64 --user admin --password ... channels
  3. Arm channel 1:     annke motion-enable 1 true
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Device address (host or host:port)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Device user name
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Device password
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// Use https
    #[arg(short, long, global = true)]
    pub secure: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Switch {
    #[value(name = "true")]
    On,
    #[value(name = "false")]
    Off,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List video input channels
    Channels,

    /// Show motion detection settings of a channel
    Motion { channel: u32 },

    /// Turn motion detection of a channel on (true) or off (false)
    MotionEnable { channel: u32, state: Switch },

    /// Show the motion detection arming schedule of a channel
    Schedule { channel: u32 },

    /// Show the actions linked to motion events of a channel
    Trigger { channel: u32 },

    /// Show configuration path and an example config file
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("annke={},annke_core={}", log_level, log_level).into()),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Config => cmd_config(&cli),
        Commands::Channels => cmd_channels(&cli).await,
        Commands::Motion { channel } => cmd_motion(&cli, channel).await,
        Commands::MotionEnable { channel, state } => cmd_motion_enable(&cli, channel, state).await,
        Commands::Schedule { channel } => cmd_schedule(&cli, channel).await,
        Commands::Trigger { channel } => cmd_trigger(&cli, channel).await,
    }
}

async fn connect(cli: &Cli) -> Result<Connector> {
    let config = config::load_connection_config(DeviceOverrides {
        host: cli.host.clone(),
        user: cli.user.clone(),
        password: cli.password.clone(),
        secure: cli.secure,
    })?;

    let host = config.host.clone();
    Connector::connect(config)
        .await
        .with_context(|| format!("Failed to log in to '{}'", host))
}

async fn cmd_channels(cli: &Cli) -> Result<()> {
    let connector = connect(cli).await?;
    let list = connector.get_channels().await?;

    match cli.format {
        OutputFormat::Text => {
            println!("Found {} channels:", list.channels.len());
            println!();
            for channel in &list.channels {
                println!(
                    "  {:>3}  {:20} {:>6}  {}",
                    channel.id, channel.name, channel.video_input_enabled, channel.res_desc
                );
            }
        }
        OutputFormat::Json => {
            let channels: Vec<_> = list
                .channels
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "id": c.id,
                        "name": c.name,
                        "input_port": c.input_port,
                        "enabled": c.video_input_enabled,
                        "video_format": c.video_format,
                        "resolution": c.res_desc,
                    })
                })
                .collect();
            println!("{}", serde_json::json!({ "channels": channels }));
        }
    }

    Ok(())
}

async fn cmd_motion(cli: &Cli, channel: u32) -> Result<()> {
    let connector = connect(cli).await?;
    let motion = connector.get_motion_detection(channel).await?;

    match cli.format {
        OutputFormat::Text => {
            println!("Channel {}", channel);
            println!("  Enabled:     {}", motion.enabled);
            println!("  Region type: {}", motion.region_type);
            println!("  Sensitivity: {}", motion.layout.sensitivity_level);
            println!("  Target type: {}", motion.layout.target_type);
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "channel": channel,
                    "enabled": motion.is_enabled(),
                    "region_type": motion.region_type,
                    "sensitivity": motion.layout.sensitivity_level,
                    "target_type": motion.layout.target_type,
                })
            );
        }
    }

    Ok(())
}

async fn cmd_motion_enable(cli: &Cli, channel: u32, state: Switch) -> Result<()> {
    let connector = connect(cli).await?;
    let mut motion = connector.get_motion_detection(channel).await?;

    let enable = matches!(state, Switch::On);
    if motion.is_enabled() == enable {
        tracing::debug!("Motion detection on channel {} already in requested state", channel);
    } else {
        motion.enabled = enable.to_string();
        connector.update_motion_detection(channel, &motion).await?;
        tracing::info!("Motion detection on channel {} set to {}", channel, enable);
    }

    match cli.format {
        OutputFormat::Text => println!(
            "Motion detection on channel {} is {}",
            channel,
            if enable { "on" } else { "off" }
        ),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "channel": channel, "enabled": enable })
        ),
    }

    Ok(())
}

async fn cmd_schedule(cli: &Cli, channel: u32) -> Result<()> {
    let connector = connect(cli).await?;
    let schedule = connector.get_motion_schedule(channel).await?;

    match cli.format {
        OutputFormat::Text => {
            println!("Schedule {} ({})", schedule.id, schedule.event_type);
            for block in &schedule.time_blocks.blocks {
                println!(
                    "  day {}  {} - {}",
                    block.day_of_week, block.time_range.begin_time, block.time_range.end_time
                );
            }
        }
        OutputFormat::Json => {
            let blocks: Vec<_> = schedule
                .time_blocks
                .blocks
                .iter()
                .map(|b| {
                    serde_json::json!({
                        "day_of_week": b.day_of_week,
                        "begin": b.time_range.begin_time,
                        "end": b.time_range.end_time,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::json!({ "id": schedule.id, "event_type": schedule.event_type, "blocks": blocks })
            );
        }
    }

    Ok(())
}

async fn cmd_trigger(cli: &Cli, channel: u32) -> Result<()> {
    let connector = connect(cli).await?;
    let trigger = connector.get_event_trigger(channel).await?;

    match cli.format {
        OutputFormat::Text => {
            println!("Trigger {} ({})", trigger.id, trigger.event_type);
            for item in &trigger.notifications.items {
                println!("  {:12} {}", item.notification_method, item.id);
            }
        }
        OutputFormat::Json => {
            let items: Vec<_> = trigger
                .notifications
                .items
                .iter()
                .map(|n| {
                    serde_json::json!({
                        "id": n.id,
                        "method": n.notification_method,
                        "video_input_id": n.video_input_id,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::json!({ "id": trigger.id, "event_type": trigger.event_type, "notifications": items })
            );
        }
    }

    Ok(())
}

fn cmd_config(cli: &Cli) -> Result<()> {
    let config_path = config::get_config_file_path_string();

    match cli.format {
        OutputFormat::Text => {
            println!("Configuration");
            println!("=============");
            println!();
            println!("Config file: {}", config_path);
            println!("Command-line flags override values from the file.");
            println!();
            println!("Example config.toml:");
            println!();
            println!("{}", config::generate_example_config());
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "config_file": config_path,
                    "example": config::generate_example_config(),
                })
            );
        }
    }

    Ok(())
}
