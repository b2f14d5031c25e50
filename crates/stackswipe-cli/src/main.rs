use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stackswipe_core::advisor::{Advice, Advisor, HttpAdviceSource};
use stackswipe_core::catalog::Catalog;
use stackswipe_core::config::StackSwipeConfig;
use stackswipe_core::model::*;
use stackswipe_core::session::{Direction, SwipeDeck, SwipeSession};
use stackswipe_core::storage::{open_store, PreferenceStore, Store};
use stackswipe_core::summary::{summarize, StackResult};

#[derive(Parser)]
#[command(
    name = "stackswipe",
    about = "StackSwipe: swipe through technologies and find your stack",
    version
)]
enum Cli {
    /// List technologies in the catalog
    Catalog {
        /// Only show one category (frontend, backend, database, language, cloud, mobile, devops, tools)
        #[arg(short, long)]
        category: Option<String>,
        /// Output raw JSON
        #[arg(long)]
        json: bool,
    },
    /// List the stack archetypes
    Stacks {
        /// Output raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Swipe through a shuffled deck (y = like, n = pass, q = quit)
    Swipe {
        /// Categories to draw from (can be repeated; default from config, else all)
        #[arg(short, long)]
        category: Vec<String>,
        /// Number of cards in the deck (default from config, fallback 10)
        #[arg(short, long)]
        size: Option<usize>,
        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Like technologies by id without swiping
    Like {
        /// Technology ids (see `stackswipe catalog`)
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Show the liked technologies
    Likes {
        /// Output raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Forget every liked technology
    Reset,
    /// Show the best-matching stack and recommendations
    Result {
        /// Output raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask the recommendations service for AI advice
    Advise {
        /// Output raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = StackSwipeConfig::load(Some(&std::env::current_dir()?))
        .unwrap_or_else(|_| StackSwipeConfig::default_config());

    run(cli, &config).await
}

async fn run(cli: Cli, config: &StackSwipeConfig) -> Result<()> {
    let catalog = Catalog::builtin();
    match cli {
        Cli::Catalog { category, json } => cmd_catalog(catalog, category.as_deref(), json),
        Cli::Stacks { json } => cmd_stacks(catalog, json),
        Cli::Swipe {
            category,
            size,
            seed,
        } => {
            let store = make_store(config)?;
            cmd_swipe(catalog, &store, config, &category, size, seed)
        }
        Cli::Like { ids } => {
            let store = make_store(config)?;
            cmd_like(catalog, &store, &ids)
        }
        Cli::Likes { json } => {
            let store = make_store(config)?;
            cmd_likes(catalog, &store, json)
        }
        Cli::Reset => {
            let store = make_store(config)?;
            store.clear().context("failed to clear liked technologies")?;
            println!("{}", "Cleared liked technologies.".green());
            Ok(())
        }
        Cli::Result { json } => {
            let store = make_store(config)?;
            cmd_result(catalog, &store, json)
        }
        Cli::Advise { json } => {
            let store = make_store(config)?;
            cmd_advise(&store, config, json).await
        }
        Cli::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn make_store(config: &StackSwipeConfig) -> Result<Store> {
    open_store(config).context("failed to open preference store")
}

fn parse_category(name: &str) -> Result<Category> {
    Category::from_str(name).with_context(|| format!("invalid --category '{name}'"))
}

// -- catalog / stacks --

fn cmd_catalog(catalog: &Catalog, category: Option<&str>, json: bool) -> Result<()> {
    let techs: Vec<&Technology> = match category {
        Some(name) => catalog.by_category(parse_category(name)?),
        None => catalog.all().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&techs)?);
        return Ok(());
    }

    for group in Category::ALL {
        let in_group: Vec<&&Technology> = techs.iter().filter(|t| t.category == group).collect();
        if in_group.is_empty() {
            continue;
        }
        println!("{}", group.to_string().to_uppercase().bold());
        for tech in in_group {
            println!(
                "  {:<18} {:<20} {}",
                tech.id.cyan(),
                tech.name,
                tech.description.dimmed()
            );
        }
        println!();
    }
    println!("{} technologies", techs.len().to_string().cyan());
    Ok(())
}

fn cmd_stacks(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.archetypes())?);
        return Ok(());
    }

    for stack in catalog.archetypes() {
        println!("{} {}", stack.name.bold(), format!("({})", stack.key).dimmed());
        println!("  {}", stack.description);
        let names: Vec<&str> = catalog
            .archetype_techs(&stack.key)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        println!("  {}", names.join(" + ").cyan());
        println!();
    }
    Ok(())
}

// -- swipe --

fn cmd_swipe(
    catalog: &Catalog,
    store: &Store,
    config: &StackSwipeConfig,
    categories: &[String],
    size: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let categories = if categories.is_empty() {
        config.swipe.parsed_categories()
    } else {
        categories
            .iter()
            .map(|name| parse_category(name))
            .collect::<Result<Vec<_>>>()?
    };
    let deck_size = size.unwrap_or(config.swipe.deck_size).max(1);
    tracing::debug!(deck_size, ?seed, ?categories, "starting swipe session");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let deck = SwipeDeck::new(catalog, &categories, deck_size, &mut rng);
    if deck.is_empty() {
        bail!("no technologies match the selected categories");
    }

    let mut session = SwipeSession::new(deck);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let total = session.deck().len();

    while let Some(tech) = session.current() {
        let position = session.liked().len() + session.passed().len() + 1;
        print_card(tech, position, total, session.progress());

        let direction = loop {
            print!("{} ", "[y]es / [n]o / [q]uit >".dimmed());
            std::io::stdout().flush()?;
            let Some(line) = lines.next() else {
                break None;
            };
            match line?.trim().to_lowercase().as_str() {
                "y" | "yes" | "l" | "like" => break Some(Direction::Like),
                "n" | "no" | "p" | "pass" => break Some(Direction::Pass),
                "q" | "quit" => break None,
                other => println!("  {} '{other}'", "unrecognised answer".yellow()),
            }
        };

        match direction {
            Some(direction) => {
                session.swipe(direction);
                if direction == Direction::Like {
                    println!("  {} {}", "Added".green(), tech.name.bold());
                }
            }
            None => break,
        }
        println!();
    }

    session.finish(store).context("failed to save liked technologies")?;
    println!(
        "Liked {} of {} reviewed ({:.0}% complete). Run {} to see your stack.",
        session.liked().len().to_string().green(),
        session.liked().len() + session.passed().len(),
        session.progress(),
        "stackswipe result".cyan()
    );
    Ok(())
}

fn print_card(tech: &Technology, position: usize, total: usize, progress: f32) {
    println!(
        "{} {}",
        format!("[{position}/{total}]").dimmed(),
        format!("{progress:.0}%").dimmed()
    );
    println!("{}  {}", tech.name.bold(), tech.category.to_string().dimmed());
    println!("  {}", tech.description);
    for pro in &tech.pros {
        println!("  {} {}", "+".green(), pro);
    }
    for con in &tech.cons {
        println!("  {} {}", "-".red(), con);
    }
}

// -- likes --

fn cmd_like(catalog: &Catalog, store: &Store, ids: &[String]) -> Result<()> {
    let unknown: Vec<&str> = ids
        .iter()
        .map(String::as_str)
        .filter(|id| catalog.by_id(id).is_none())
        .collect();
    if !unknown.is_empty() {
        bail!(
            "unknown technology id(s): {} (see `stackswipe catalog`)",
            unknown.join(", ")
        );
    }

    for id in ids {
        let name = catalog.by_id(id).map(|t| t.name.as_str()).unwrap_or(id);
        if store.append_liked(id)? {
            println!("{} {}", "Liked".green(), name.bold());
        } else {
            println!("{} {}", "Already liked".dimmed(), name);
        }
    }
    Ok(())
}

fn cmd_likes(catalog: &Catalog, store: &Store, json: bool) -> Result<()> {
    let liked = store.load_liked_ids()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&liked)?);
        return Ok(());
    }
    if liked.is_empty() {
        println!("No liked technologies yet. Try {}.", "stackswipe swipe".cyan());
        return Ok(());
    }
    for id in &liked {
        match catalog.by_id(id) {
            Some(tech) => println!(
                "  {:<18} {} {}",
                id.cyan(),
                tech.name,
                format!("({})", tech.category).dimmed()
            ),
            None => println!("  {:<18} {}", id.yellow(), "(no longer in catalog)".dimmed()),
        }
    }
    Ok(())
}

// -- result --

fn cmd_result(catalog: &Catalog, store: &Store, json: bool) -> Result<()> {
    let liked = store.load_liked_ids()?;
    let result = summarize(catalog, &liked)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if liked.is_empty() {
        println!(
            "{}",
            "No liked technologies yet, showing the default stack.".yellow()
        );
        println!();
    }
    print_result(&result);
    Ok(())
}

fn print_result(result: &StackResult) {
    let stack = &result.stack;
    println!("{} {}", "Your stack:".dimmed(), stack.name.bold());
    println!("  {}", stack.description);
    if let Some(best) = result.best_match() {
        println!(
            "  {} of {} technologies matched",
            best.matched.to_string().green(),
            best.total
        );
    }
    println!();

    if !result.liked_by_category.is_empty() {
        println!("{}", "What you liked".bold());
        for group in &result.liked_by_category {
            let names: Vec<&str> = group.technologies.iter().map(|t| t.name.as_str()).collect();
            println!(
                "  {:<10} {}",
                group.category.to_string().dimmed(),
                names.join(", ")
            );
        }
        println!();
    }

    if !result.recommendations.is_empty() {
        println!("{}", "Recommendations".bold());
        for rec in &result.recommendations {
            let kind = match rec.kind {
                RecommendationKind::Synergy => rec.kind.to_string().magenta().to_string(),
                RecommendationKind::Learning => rec.kind.to_string().blue().to_string(),
                RecommendationKind::Upgrade => rec.kind.to_string().yellow().to_string(),
            };
            println!("  [{kind}] {}", rec.title.bold());
            println!("    {}", rec.description);
            println!("    {}", rec.related_techs.join(", ").dimmed());
        }
        println!();
    }

    println!("{}", result.share_text.italic());
}

// -- advise --

async fn cmd_advise(store: &Store, config: &StackSwipeConfig, json: bool) -> Result<()> {
    let liked = store.load_liked_ids()?;
    let source = HttpAdviceSource::from_config(&config.advisor)
        .context("failed to create advisor HTTP client")?;
    let advice = Advisor::new(source).fetch(&liked).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
        return Ok(());
    }

    print_advice(&advice, liked.is_empty());
    Ok(())
}

fn print_advice(advice: &Advice, nothing_liked: bool) {
    if nothing_liked {
        println!(
            "{}",
            "No liked technologies yet, showing general suggestions.".yellow()
        );
        println!();
    } else if advice.is_fallback() {
        let reason = advice.error.as_deref().unwrap_or("unknown error");
        println!(
            "{} {}",
            "Recommendations service unavailable, showing built-in suggestions:".yellow(),
            reason.dimmed()
        );
        println!();
    }

    let payload = &advice.payload;
    if payload.is_empty() {
        if let Some(raw) = &payload.raw_text {
            println!("{raw}");
            return;
        }
    }

    for (label, items) in payload.sections() {
        if items.is_empty() {
            continue;
        }
        let title = match label {
            "projectIdeas" => "Project Ideas".to_string(),
            other => {
                let mut chars = other.chars();
                chars
                    .next()
                    .map(|c| c.to_uppercase().chain(chars).collect())
                    .unwrap_or_default()
            }
        };
        println!("{}", title.bold());
        for item in items {
            println!("  {}", item.name.cyan());
            println!("    {}", item.description);
            for res in &item.resources {
                println!(
                    "    {} {} {}",
                    format!("[{}]", res.kind).dimmed(),
                    res.name,
                    res.url.dimmed()
                );
            }
        }
        println!();
    }
}
