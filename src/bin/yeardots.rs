use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "yeardots", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the year-progress image as a PNG.
    Frame(FrameArgs),
    /// Print the drawing plan as JSON.
    Plan(PlanArgs),
    /// Serve images over HTTP (`GET /?w=&h=&tz=&theme=`).
    Serve(ServeArgs),
}

/// Raw request values; normalized exactly like HTTP query parameters.
#[derive(Args, Debug)]
struct RequestArgs {
    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<String>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<String>,

    /// IANA timezone used to decide "today".
    #[arg(long)]
    tz: Option<String>,

    /// `light` or `dark`.
    #[arg(long)]
    theme: Option<String>,

    /// Render as of this RFC 3339 instant instead of the current time.
    #[arg(long)]
    now: Option<String>,
}

impl RequestArgs {
    fn request(&self) -> yeardots::RenderRequest {
        yeardots::RenderRequest::from_raw(&yeardots::RawParams {
            w: self.width.clone(),
            h: self.height.clone(),
            tz: self.tz.clone(),
            theme: self.theme.clone(),
        })
    }

    fn now(&self) -> anyhow::Result<DateTime<Utc>> {
        match &self.now {
            Some(raw) => Ok(DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("parse --now '{raw}'"))?
                .with_timezone(&Utc)),
            None => Ok(Utc::now()),
        }
    }
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Extra font directory for the summary text.
    #[arg(long)]
    font_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Override `YEARDOTS_HOST`.
    #[arg(long)]
    host: Option<String>,

    /// Override `YEARDOTS_PORT`.
    #[arg(long)]
    port: Option<u16>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yeardots=info,tower_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let request = args.request.request();
    let now = args.request.now()?;

    let settings = yeardots::RenderSettings {
        fonts: Some(yeardots::load_fonts(args.font_dir.as_deref())),
    };
    let mut backend = yeardots::create_backend(yeardots::BackendKind::Cpu, &settings)?;
    let rendered = yeardots::render_png(&request, now, backend.as_mut())?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &rendered.png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let request = args.request.request();
    let now = args.request.now()?;
    let plan = yeardots::plan_for(&request, now);

    let stdout = std::io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(stdout, &plan).context("write plan json")?;
    } else {
        serde_json::to_writer(stdout, &plan).context("write plan json")?;
    }
    println!();
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = yeardots::ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let runtime = tokio::runtime::Runtime::new().context("start tokio runtime")?;
    runtime.block_on(yeardots::server::serve(&config))
}
