use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::{
    build_index, classify_intent, load_content, respond, search, suggest, suggest_with_rng,
    ConversationMessage, FolioError, SearchIndex, SearchableItem, DEFAULT_LIMIT,
};

mod cli;
use cli::display::{self, row, section_bot, section_mid, section_top, themed, BOLD};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Index { content, json } => run_index(&content, json),
        Commands::Search {
            content,
            query,
            limit,
            json,
        } => run_search(&content, &query, limit, json),
        Commands::Ask {
            content,
            query,
            history,
            seed,
        } => run_ask(&content, &query, history.as_deref(), seed),
    };

    if let Err(e) = outcome {
        eprintln!("{} {}", display::error_prefix(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_env("FOLIO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("folio=warn"));
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("folio=debug")
    } else {
        filter
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_index(path: &Path) -> folio::Result<SearchIndex> {
    let content = load_content(path)?;
    Ok(build_index(&content))
}

fn run_index(path: &Path, json: bool) -> folio::Result<()> {
    let index = load_index(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&index)?);
        return Ok(());
    }

    section_top(&format!("INDEX {}", path.display()));
    let groups: [(&str, &[SearchableItem]); 3] = [
        ("Projects", &index.projects),
        ("Blogs", &index.blogs),
        ("Technologies", &index.tech),
    ];
    for (i, (label, items)) in groups.iter().enumerate() {
        if i > 0 {
            section_mid(label);
        } else {
            row(&format!(" {}", themed(display::CYAN, &[BOLD], label)));
        }
        row(&format!(" {} items", items.len()));
        for item in items.iter() {
            row(&format!(
                "   {} {}",
                display::pad_right(&item.id, 24),
                display::dim(&format!("{} keywords", item.keywords.len()))
            ));
        }
    }
    section_bot();
    println!("{} items indexed", index.len());
    Ok(())
}

fn run_search(path: &Path, query: &str, limit: usize, json: bool) -> folio::Result<()> {
    let index = load_index(path)?;
    let results = search(&index, query, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    section_top(&format!("SEARCH \"{}\"", query));
    if results.is_empty() {
        row(&display::dim(" no matches"));
    }
    for (rank, result) in results.iter().enumerate() {
        row(&format!(
            " {:>2}. {} {} {}",
            rank + 1,
            display::score_value(result.score),
            display::kind_badge(result.item.kind),
            result.item.name
        ));
        if !result.matched_keywords.is_empty() {
            row(&display::dim(&format!(
                "             matched: {}",
                result.matched_keywords.join(", ")
            )));
        }
    }
    section_bot();
    Ok(())
}

fn run_ask(path: &Path, query: &str, history: Option<&Path>, seed: Option<u64>) -> folio::Result<()> {
    let index = load_index(path)?;
    let mut conversation = match history {
        Some(history) => load_history(history)?,
        None => Vec::new(),
    };

    let intent = classify_intent(query);
    let results = search(&index, query, DEFAULT_LIMIT);
    let answer = respond(query, &results, &intent);

    conversation.push(ConversationMessage::user(query));
    conversation.push(ConversationMessage::assistant(answer.clone()));

    let suggestions = match seed {
        Some(seed) => suggest_with_rng(&conversation, &intent, &mut StdRng::seed_from_u64(seed)),
        None => suggest(&conversation, &intent),
    };

    println!("{} {}", display::dim("intent:"), display::intent_label(intent.kind));
    println!();
    println!("{}", answer);

    if !suggestions.is_empty() {
        println!();
        println!("{}", themed(display::CYAN, &[BOLD], "You might also ask:"));
        for suggestion in &suggestions {
            println!("  - {}", suggestion);
        }
    }
    Ok(())
}

fn load_history(path: &Path) -> folio::Result<Vec<ConversationMessage>> {
    let text = std::fs::read_to_string(path).map_err(|source| FolioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
