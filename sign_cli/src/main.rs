mod simulate;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sign_core::challenge::availability;
use sign_core::classifier::LinearSoftmaxModel;
use sign_core::settings::Volumes;
use sign_core::store::{self, JsonFileStore, MemoryStore, ProgressStore, SharedStore, DEFAULT_STORE_FILE};
use sign_schema::AccountProgress;

#[derive(Debug, Parser)]
#[command(name = "signit")]
#[command(about = "Sign-It-Up vowel trainer tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a recorded challenge through the recognition pipeline.
    Simulate {
        trace: PathBuf,
        #[arg(short, long)]
        model: Option<PathBuf>,
        /// Credit the result to this account file instead of a throwaway record.
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
    Progress {
        #[command(subcommand)]
        action: ProgressAction,
        #[arg(short, long, global = true)]
        store: Option<PathBuf>,
    },
    Volume {
        #[arg(long)]
        music: Option<f32>,
        #[arg(long)]
        sfx: Option<f32>,
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
enum ProgressAction {
    Show,
    /// Clear every flag, keeping the username.
    Reset,
    Register { name: String },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Simulate { trace, model, store } => {
            let parsed = simulate::load_trace(&trace)?;
            let model = model
                .map(|path| {
                    LinearSoftmaxModel::load_from_path(&path)
                        .with_context(|| format!("failed to load model: {}", path.display()))
                })
                .transpose()?;
            let store = match store {
                Some(path) => SharedStore::new(JsonFileStore::new(path)),
                None => SharedStore::new(MemoryStore::new()),
            };
            let report = simulate::run(&parsed, model, store)
                .with_context(|| format!("simulation failed: {}", trace.display()))?;
            print!("{}", simulate::render(&report));
        }
        Command::Progress { action, store } => {
            let file = JsonFileStore::new(store_path(store));
            match action {
                ProgressAction::Show => {
                    let record = store::load_or_init(&file).context("failed to load progress")?;
                    print!("{}", render_progress(&record));
                }
                ProgressAction::Reset => {
                    let record = store::load_or_init(&file).context("failed to load progress")?;
                    file
                        .save(&AccountProgress::new(record.username))
                        .context("failed to reset progress")?;
                    println!("progress reset: {}", file.path().display());
                }
                ProgressAction::Register { name } => {
                    let record = store::register(&file, &name).context("registration failed")?;
                    println!("registered {}", record.username);
                }
            }
        }
        Command::Volume { music, sfx, store } => {
            let store = SharedStore::new(JsonFileStore::new(store_path(store)));
            let record = store.load_or_init().context("failed to load progress")?;
            let volumes = Volumes::from_record(&record);
            if let Some(v) = music {
                volumes.set_music_volume(&store, v).context("failed to save music volume")?;
            }
            if let Some(v) = sfx {
                volumes.set_sfx_volume(&store, v).context("failed to save sfx volume")?;
            }
            println!("music {:.2}", volumes.music());
            println!("sfx   {:.2}", volumes.sfx());
        }
    }

    Ok(())
}

fn store_path(store: Option<PathBuf>) -> PathBuf {
    store.unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
}

fn render_progress(record: &AccountProgress) -> String {
    let mark = |done: bool| if done { "x" } else { " " };
    let mut out = format!("user: {}\n", record.username);
    for vowel in sign_schema::Vowel::ALL {
        out.push_str(&format!("[{}] letter {}\n", mark(record.letter_done(vowel)), vowel.letter()));
    }
    out.push_str(&format!("[{}] intro\n", mark(record.intro_status)));
    for (difficulty, status) in availability(record) {
        out.push_str(&format!(
            "[{}] {} challenge ({:?})\n",
            mark(record.challenge_done(difficulty)),
            difficulty.display_name(),
            status
        ));
    }
    for achievement in &record.achievements {
        out.push_str(&format!("achievement: {}\n", achievement.title()));
    }
    out
}
