use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use libtangut::render::{self, RenderOptions};
use libtangut::{translate, Direction};
use libtangut_core::{Config, Lexicon, Translator};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tangut")]
#[command(about = "Raw word-by-word translator between Tangut, English and Chinese")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Atomic vocabulary source (overrides config)
    #[arg(long, global = true)]
    atomic: Option<PathBuf>,

    /// Compound vocabulary source (overrides config)
    #[arg(long, global = true)]
    compound: Option<PathBuf>,

    /// Show only the primary candidate per word
    #[arg(long, global = true)]
    primary_only: bool,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu loop
    Repl,
    /// Translate one input and exit
    Translate {
        /// Lookup direction
        #[arg(short, long, value_enum)]
        direction: Direction,
        /// Print the structured result as JSON
        #[arg(long)]
        json: bool,
        /// Text to translate
        text: String,
    },
    /// Print load statistics
    Stats,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load_toml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(path) = &cli.atomic {
        cfg.atomic_vocab = path.clone();
    }
    if let Some(path) = &cli.compound {
        cfg.compound_vocab = path.clone();
    }
    if cli.primary_only {
        cfg.list_all_candidates = false;
    }
    Ok(cfg)
}

fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}

fn run_repl(translator: &Translator, opts: RenderOptions) -> Result<()> {
    println!("\nTangut Raw Translator");
    println!("---------------------");
    println!("This is a raw, word-by-word translator based on the provided vocabulary lists.");
    println!("It does NOT understand grammar or context, and provides theoretical translations only.");
    println!("Multi-symbol compounds are matched before single symbols.");
    println!("---------------------\n");

    let exit_choice = Direction::ALL.len() + 1;
    let clear_choice = Direction::ALL.len() + 2;
    loop {
        println!("Choose a translation direction:");
        for (i, direction) in Direction::ALL.iter().enumerate() {
            println!("{}. {}", i + 1, direction.label());
        }
        println!("{exit_choice}. Exit");
        println!("{clear_choice}. Clear Screen Output");

        let Some(choice) = read_line(&format!("Enter your choice (1-{clear_choice}): "))? else {
            break;
        };
        match choice.parse::<usize>() {
            Ok(n) if (1..=Direction::ALL.len()).contains(&n) => {
                let direction = Direction::ALL[n - 1];
                let Some(text) = read_line(direction.prompt())? else {
                    break;
                };
                let result = translate(translator, direction, &text);
                println!("{}", render::render(direction, &result, opts));
            }
            Ok(n) if n == exit_choice => {
                println!("Exiting translator...");
                break;
            }
            Ok(n) if n == clear_choice => clear_screen(),
            _ => println!("Invalid choice. Please enter a number from 1 to {clear_choice}."),
        }
        println!("{}", "=".repeat(60));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = load_config(&cli)?;
    let lexicon = Lexicon::load(&cfg).context("failed to load vocabulary; no translation is possible")?;
    let opts = RenderOptions::from(&cfg);

    match cli.command {
        Some(Commands::Translate {
            direction,
            json,
            text,
        }) => {
            let translator = Translator::new(lexicon);
            let result = translate(&translator, direction, text.trim());
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", render::render(direction, &result, opts));
            }
        }
        Some(Commands::Stats) => {
            println!("{}", render::render_stats(lexicon.stats()));
        }
        Some(Commands::Repl) | None => {
            println!("{}", render::render_stats(lexicon.stats()));
            run_repl(&Translator::new(lexicon), opts)?;
        }
    }
    Ok(())
}
