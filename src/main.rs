use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tint::{app, config, palette, tui};

#[derive(Debug, Parser)]
#[command(name = "tint", version, about = "Fetch a remote color palette and preview it")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Fetch a palette and print it (headless).
    Fetch {
        url: String,
        /// Print the palette as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Parse a hex color string and print its RGB channels.
    Hex { value: String },
    /// List configured palette sources.
    Sources,
    /// Add a palette source (or repoint one with the same label) and save.
    AddSource { label: String, url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = config::load(cli.config.as_deref()).context("load config")?;
    let cfg = loaded.config;
    let command = cli.command.unwrap_or(Command::Tui);

    match &command {
        // The TUI owns the terminal; keep log lines out of it.
        Command::Tui => init_logging(Some(&cfg.paths.data_dir.join("tint.log")))?,
        _ => init_logging(None)?,
    }
    if loaded.created {
        tracing::info!(path = %loaded.path.display(), "wrote default config");
    }

    match command {
        Command::Tui => {
            let mut app = app::App::new(cfg)?;
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Fetch { url, json } => {
            let fetcher = palette::PaletteFetcher::new(&cfg.http)?;
            let p = fetcher
                .fetch(&url)
                .await
                .with_context(|| format!("fetch {url}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&p)?);
            } else {
                print_palette(&p);
            }
        }
        Command::Hex { value } => {
            let rgb = palette::hex_to_rgb(&value);
            println!(
                "#{}  r={:.4} g={:.4} b={:.4}",
                rgb.to_hex(),
                rgb.r,
                rgb.g,
                rgb.b
            );
        }
        Command::Sources => {
            for (i, s) in cfg.sources.iter().enumerate() {
                println!("{}. {}  {}", i + 1, s.label, s.url);
            }
            match &cfg.startup.url {
                Some(url) => println!("startup: {url} (after {} ms)", cfg.startup.delay_ms),
                None => println!("startup: disabled"),
            }
        }
        Command::AddSource { label, url } => {
            let mut cfg = cfg;
            cfg.upsert_source(label, url);
            config::save(&cfg, Some(&loaded.path)).context("save config")?;
            println!("Updated palette sources in {}.", loaded.path.display());
        }
    }

    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create dir {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_target(false)
                .with_level(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn print_palette(p: &palette::Palette) {
    let resolved = p.resolve();
    let rows = [
        ("light_primary", p.light_primary(), resolved.light_primary),
        ("light_on_primary", p.light_on_primary(), resolved.light_on_primary),
        ("dark_primary", p.dark_primary(), resolved.dark_primary),
        ("dark_on_primary", p.dark_on_primary(), resolved.dark_on_primary),
    ];
    for (name, raw, rgb) in rows {
        println!("{name:<17} {raw:<10} #{}", rgb.to_hex());
    }
}
