use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use topicmatch::{
    load_config, load_corpus, load_languages, EngineConfig, RecommendationEngine, RecommendationRequest, SelectMode,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Recommend a portfolio topic and a programming language
#[derive(Parser, Debug)]
#[command(name = "topicmatch")]
#[command(about = "TF-IDF topic recommendation", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick a topic and a language
    Recommend(RecommendArgs),
    /// Show how every topic scores against the query
    Rank(RankArgs),
}

#[derive(ClapArgs, Debug)]
struct EngineArgs {
    /// Topic snapshot (JSON array of {id, name, description})
    #[arg(short, long, default_value = "data/topics.json")]
    corpus: PathBuf,

    /// Engine config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Selection mode: best or topk-random (overrides the config file)
    #[arg(long)]
    mode: Option<SelectMode>,

    /// Top-k pool size (overrides the config file)
    #[arg(long)]
    top_k: Option<usize>,

    /// Seed for reproducible random picks
    #[arg(long)]
    seed: Option<u64>,

    /// Free-text description of what the learner wants to build
    #[arg(short, long, default_value = "")]
    text: String,

    /// Interest field, may be repeated
    #[arg(short, long = "interest")]
    interests: Vec<String>,
}

#[derive(ClapArgs, Debug)]
struct RecommendArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Language snapshot (JSON array of {id, name, is_modern, is_popular})
    #[arg(short, long, default_value = "data/languages.json")]
    languages: PathBuf,

    /// Language to use; "わからない" lets the engine pick
    #[arg(long, default_value = "わからない")]
    language: String,

    /// Technology preference used when the engine picks: modern, legacy or popular
    #[arg(long, default_value = "")]
    preference: String,
}

#[derive(ClapArgs, Debug)]
struct RankArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Number of ranking rows to print
    #[arg(long, default_value_t = 10)]
    limit: usize,
}

impl EngineArgs {
    fn engine(&self) -> anyhow::Result<RecommendationEngine> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => EngineConfig::default(),
        };
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(top_k) = self.top_k {
            config.top_k = top_k;
        }
        info!("Engine config: mode={}, top_k={}, fallback={:?}", config.mode, config.top_k, config.fallback);
        RecommendationEngine::new(config).context("invalid engine configuration")
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    fn request(&self) -> RecommendationRequest {
        RecommendationRequest {
            free_text: self.text.clone(),
            interest_fields: self.interests.clone(),
            ..Default::default()
        }
    }
}

fn run_recommend(args: RecommendArgs) -> anyhow::Result<()> {
    let engine = args.engine.engine()?;
    let corpus = load_corpus(&args.engine.corpus)?;
    let languages = load_languages(&args.languages)?;
    let mut rng = args.engine.rng();

    let request = RecommendationRequest {
        programming_language: args.language.clone(),
        learning_preference: args.preference.clone(),
        ..args.engine.request()
    };

    match engine.recommend(&request, &corpus, &languages, &mut rng) {
        Ok(rec) => {
            info!("Selected {} ({:?}, score {:.4})", rec.topic.name, rec.kind, rec.score);
            println!("{}", serde_json::to_string_pretty(&rec)?);
            println!("{}", rec);
            Ok(())
        }
        Err(e) if e.is_missing_data() => {
            println!("{}", serde_json::json!({ "message": e.to_string() }));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run_rank(args: RankArgs) -> anyhow::Result<()> {
    let engine = args.engine.engine()?;
    let corpus = load_corpus(&args.engine.corpus)?;
    let mut rng = args.engine.rng();
    let query = args.engine.request().query_text();

    match engine.explain_recommendation(&query, &corpus, &mut rng) {
        Ok(outcome) => {
            let report = outcome.explain(&corpus, Some(args.limit));
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(e) if e.is_missing_data() => {
            println!("{}", serde_json::json!({ "message": e.to_string() }));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting topicmatch v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Rank(args) => run_rank(args),
    }
}
