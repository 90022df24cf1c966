//! Interactive CLI for the Sutradhara assistant.
//!
//! Loads a member roster once and answers prompts in a REPL, or a single prompt
//! in headless mode. General conversation has no model attached here, so it
//! always answers with the fallback text.
//!
//! # Usage
//!
//! ```bash
//! # REPL over a roster file
//! cargo run -p sutradhara-cli -- --roster members.json
//!
//! # Roster from the environment, typo-tolerant matching
//! SUTRADHARA_ROSTER=members.json cargo run -p sutradhara-cli -- --fuzzy --threshold 80
//!
//! # Headless mode (single query, useful for scripting)
//! cargo run -p sutradhara-cli -- --roster members.json --prompt "find 3 python members" --quiet
//! ```

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sutradhara_agent::{Router, RouterConfig, Session};
use sutradhara_core::{Mode, Offline};
use sutradhara_skills::{Boundary, MatchPolicy, MemberRecord, RosterLoader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sutradhara", about = "Skill Nest member recommendations from free text")]
struct Args {
    /// Roster JSON file: an array of members or `{"data": [...]}`.
    #[arg(short, long, env = "SUTRADHARA_ROSTER")]
    roster: Option<PathBuf>,

    /// Starting mode (`members` or `general`).
    #[arg(short, long, default_value = "members")]
    mode: Mode,

    /// Single prompt to run (headless mode). Answers and exits.
    #[arg(long)]
    prompt: Option<String>,

    /// Tolerate typos when matching skills.
    #[arg(long)]
    fuzzy: bool,

    /// Similarity a fuzzy match must exceed (0-100). Implies --fuzzy.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: Option<u8>,

    /// Only match skills at word boundaries ("go" no longer matches "good").
    #[arg(long)]
    word_boundary: bool,

    /// Quiet mode. Only output responses.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn router_config(&self) -> RouterConfig {
        let policy = match (self.fuzzy, self.threshold) {
            (_, Some(threshold)) => MatchPolicy::Fuzzy { threshold },
            (true, None) => MatchPolicy::fuzzy(),
            (false, None) => MatchPolicy::Exact,
        };
        let boundary = if self.word_boundary {
            Boundary::Word
        } else {
            Boundary::Substring
        };

        RouterConfig::default()
            .with_policy(policy)
            .with_boundary(boundary)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let members = load_roster(args.roster.as_deref()).await?;
    let router = Router::new(Offline).with_config(args.router_config());
    let mut session = router.session();

    if let Some(prompt) = &args.prompt {
        let reply = router
            .respond(&mut session, prompt, &members, args.mode)
            .await;
        println!("{reply}");
        return Ok(());
    }

    run_repl(&router, &mut session, &members, &args).await
}

async fn load_roster(path: Option<&Path>) -> sutradhara_core::Result<Vec<MemberRecord>> {
    let Some(path) = path else {
        warn!("No roster given, member search will find nobody");
        return Ok(Vec::new());
    };

    let members = RosterLoader::load(path)
        .await
        .with_context(|| format!("Failed to load roster from {}", path.display()))?;
    info!(count = members.len(), path = %path.display(), "Loaded roster");
    Ok(members)
}

async fn run_repl(
    router: &Router<Offline>,
    session: &mut Session,
    members: &[MemberRecord],
    args: &Args,
) -> Result<()> {
    let mut mode = args.mode;

    if !args.quiet {
        println!(
            "Sutradhara ready with {} members. Mode: {mode}. Type /help for commands.\n",
            members.len()
        );
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("You> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix('/') {
            let mut parts = command.splitn(2, char::is_whitespace);
            match (parts.next().unwrap_or_default(), parts.next().map(str::trim)) {
                ("quit" | "exit" | "q", _) => break,
                ("mode", None) => println!("Mode: {mode}"),
                ("mode", Some(name)) => match name.parse::<Mode>() {
                    Ok(new_mode) => {
                        mode = new_mode;
                        println!("Mode: {mode}");
                    }
                    Err(e) => println!("{e}"),
                },
                ("history", _) => print_history(session),
                ("clear", _) => {
                    session.reset();
                    println!("History cleared.");
                }
                ("help", _) => print_help(),
                (other, _) => {
                    println!("Unknown command: /{other}");
                    print_help();
                }
            }
            continue;
        }

        let reply = router.respond(session, input, members, mode).await;
        println!("\n{reply}\n");
    }

    if !args.quiet {
        println!("Goodbye!");
    }
    Ok(())
}

fn print_help() {
    println!("Available: /mode [general|members], /history, /clear, /quit");
}

fn print_history(session: &Session) {
    let history = session.history();
    if history.is_empty() {
        println!("No conversation history.");
        return;
    }

    println!("Conversation history ({} exchanges):", history.len());
    for entry in history.iter() {
        println!("  [{}] {}", entry.mode, truncate(&entry.prompt, 80));
        println!("    -> {}", truncate(&entry.response, 100));
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    let line = s.lines().next().unwrap_or_default();
    if line.chars().count() <= max_chars && line.len() == s.len() {
        line.to_owned()
    } else {
        let cut: String = line.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
