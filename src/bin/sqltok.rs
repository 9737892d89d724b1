//! sqltok — ask your data questions in plain English
//!
//! # Usage
//!
//! ```bash
//! # Translate a question
//! sqltok "show all products"
//!
//! # Against your own tables, as JSON
//! sqltok "average price" --tables products,orders --format json
//!
//! # Interactive mode
//! sqltok repl
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use sqltok::prelude::*;
use tracing_subscriber::EnvFilter;

/// History entries listed by `.history` and addressed by `.reuse`.
const RECENT_HISTORY: usize = 5;

#[derive(Parser)]
#[command(name = "sqltok")]
#[command(version)]
#[command(about = "🧠 SQLtOK — turn plain-English questions into SQL", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqltok 'show all users'
    sqltok 'average amount' --tables sales,orders
    sqltok 'customers in london' --format json
    sqltok repl")]
struct Cli {
    /// The question to translate
    query: Option<String>,

    /// Known tables, comma-separated (overrides the config file)
    #[arg(short, long)]
    tables: Option<String>,

    /// Config file path
    #[arg(short, long, env = "SQLTOK_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how a question is resolved
    Explain {
        /// The question to explain
        query: String,
    },
    /// Print example questions
    Suggest {
        /// Use every configured table, not just the first few
        #[arg(long)]
        all: bool,
    },
    /// Interactive REPL mode
    Repl,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "sqltok=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(tables) = &cli.tables {
        config = config.with_tables(tables);
    }

    match &cli.command {
        Some(Commands::Explain { query }) => explain_query(query, &config),
        Some(Commands::Suggest { all }) => show_suggestions(&config, *all),
        Some(Commands::Repl) => run_repl(&config)?,
        None => match &cli.query {
            Some(query) => {
                let mut session = Session::from_config(&config);
                let translation = session.submit(query);
                print_translation(&translation, cli.format)?;
            }
            None => {
                println!("{}", "🧠 SQLtOK — Your SQL Assistant".cyan().bold());
                println!();
                println!("Usage: sqltok <QUESTION> [OPTIONS]");
                println!();
                println!("Try: sqltok --help");
            }
        },
    }

    Ok(())
}

fn print_translation(translation: &Translation, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", translation.to_json()?);
        }
        OutputFormat::Text if translation.is_success() => {
            println!("{}", "✅ Query processed successfully!".green().bold());
            println!();
            println!("{}", "🔍 Generated SQL".cyan().bold());
            println!("{}", translation.sql.white());
            println!();
            println!("{}", "💬 Explanation".cyan().bold());
            println!("{}", translation.explanation);
            println!();
            print_details(&QueryDetails::from(&translation.intent));
        }
        OutputFormat::Text => print_not_understood(),
    }
    Ok(())
}

fn print_details(details: &QueryDetails) {
    println!("{}", "🔧 Query Details".cyan().bold());
    println!("  {:8} {}", "Intent:".dimmed(), details.intent.yellow());
    println!("  {:8} {}", "Table:".dimmed(), details.table.white());
    println!("  {:8} {}", "Column:".dimmed(), details.column.white());
    println!("  {:8} {}", "Filter:".dimmed(), details.filter.white());
}

fn print_not_understood() {
    eprintln!("{}", "❌ Could not understand your query".red().bold());
    eprintln!();
    eprintln!("{}", "Suggestions:".yellow());
    eprintln!("  - Try simpler phrases like \"show all products\" or \"count users\"");
    eprintln!("  - Make sure table names match your configuration");
    eprintln!("  - Use keywords like: show, count, total, average, maximum, minimum");
}

fn explain_query(query: &str, config: &Config) {
    println!("{}", "🧠 SQLtOK Query Explanation".cyan().bold());
    println!();
    println!("{} {}", "Question:".dimmed(), query.yellow());
    println!("{} {}", "Tables:".dimmed(), config.tables.join(", ").white());
    println!();

    let intent = resolve(query, &config.tables, Some(&config.schema));
    println!("{}", "Resolved Intent:".green().bold());
    println!("  {} {}", "Kind:".dimmed(), intent.kind().to_string().cyan());
    match &intent {
        Intent::Unknown { query } => {
            println!("  {} {}", "Normalized:".dimmed(), query.white());
        }
        _ => {
            if let Some(table) = intent.table() {
                println!("  {} {}", "Table:".dimmed(), table.white());
            }
            if let Some(column) = intent.column() {
                println!("  {} {}", "Column:".dimmed(), column.white());
            }
            match &intent {
                Intent::FilterByColumn { value, .. } => {
                    println!("  {} {}", "Value:".dimmed(), value.yellow())
                }
                Intent::FilterByCity { city, .. } => {
                    println!("  {} {}", "City:".dimmed(), city.yellow())
                }
                Intent::Limit { limit, .. } => {
                    println!("  {} {}", "Limit:".dimmed(), limit.yellow())
                }
                _ => {}
            }
        }
    }

    println!();
    println!("{}", "Generated SQL:".green().bold());
    for line in intent.to_sql().lines() {
        println!("  {}", line.white());
    }
    println!();
    println!("{}", intent.explain());
}

fn show_suggestions(config: &Config, all: bool) {
    let tables = if all {
        config.tables.as_slice()
    } else {
        config.suggestion_tables()
    };
    println!("{}", "💡 Query Examples".cyan().bold());
    for example in suggestions(tables) {
        println!("  {}", example);
    }
}

fn run_repl(config: &Config) -> Result<()> {
    use rustyline::DefaultEditor;
    use rustyline::error::ReadlineError;

    println!("{}", "🧠 SQLtOK REPL — Interactive Mode".cyan().bold());
    println!("{}", "Ask a question to see the SQL. Commands:".dimmed());
    println!("  {}  - Exit the REPL", ".exit".yellow());
    println!("  {} - Show all commands", ".help".yellow());
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| SqltokError::Repl(e.to_string()))?;

    let history_path = dirs::home_dir()
        .map(|p| p.join(".sqltok_history"))
        .unwrap_or_default();
    let _ = rl.load_history(&history_path);

    let mut session = Session::from_config(config);

    loop {
        let prompt = "sqltok> ".cyan().bold().to_string();
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                let (command, rest) = line
                    .split_once(char::is_whitespace)
                    .map(|(c, r)| (c, r.trim()))
                    .unwrap_or((line, ""));

                match command {
                    ".exit" | ".quit" | "exit" | "quit" => {
                        println!("{}", "Goodbye! 👋".green());
                        break;
                    }
                    ".help" | "help" => show_repl_help(),
                    ".clear" | "clear" => print!("\x1B[2J\x1B[1;1H"),
                    ".history" => show_history(&session),
                    ".reuse" => match rest.parse::<usize>() {
                        Ok(index) => match session.reuse(index, RECENT_HISTORY) {
                            Ok(translation) => print_repl_translation(&translation),
                            Err(e) => eprintln!("{} {}", "✗".red(), e.to_string().red()),
                        },
                        Err(_) => eprintln!("{} {}", "✗".red(), "Usage: .reuse <N>".red()),
                    },
                    ".examples" => {
                        for example in suggestions(config.suggestion_tables()) {
                            println!("  {}", example);
                        }
                    }
                    ".tables" => show_tables(&session),
                    ".schema" => save_schema(&mut session, rest),
                    _ => {
                        let translation = session.submit(line);
                        print_repl_translation(&translation);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".dimmed());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye! 👋".green());
                break;
            }
            Err(err) => {
                eprintln!("{} {:?}", "Error:".red(), err);
                break;
            }
        }
    }

    let _ = rl.save_history(&history_path);
    Ok(())
}

fn print_repl_translation(translation: &Translation) {
    if translation.is_success() {
        for line in translation.sql.lines() {
            println!("{} {}", "→".green(), line.white().bold());
        }
        println!("  {}", translation.explanation.dimmed());
    } else {
        eprintln!(
            "{} {}",
            "✗".red(),
            "Could not understand your query. Type .help for examples.".red()
        );
    }
    println!();
}

fn show_history(session: &Session) {
    if session.history().is_empty() {
        println!("{}", "(no history yet)".dimmed());
        return;
    }
    println!("{}", "📚 Query History".cyan().bold());
    for (i, entry) in session.recent(RECENT_HISTORY).enumerate() {
        let mark = if entry.success { "✓".green() } else { "✗".red() };
        println!(
            "  {} {} {} - {}",
            i.to_string().yellow(),
            mark,
            entry.timestamp.dimmed(),
            entry.short_query()
        );
    }
}

fn show_tables(session: &Session) {
    println!("{}", "📊 Database Tables".cyan().bold());
    for table in session.tables() {
        match session.schema().get(table) {
            Some(columns) => println!("  {} ({})", table.white(), columns.join(", ").dimmed()),
            None => println!("  {}", table.white()),
        }
    }
}

fn save_schema(session: &mut Session, args: &str) {
    let Some((table, columns)) = args.split_once(char::is_whitespace) else {
        eprintln!("{} {}", "✗".red(), "Usage: .schema <table> <col,col,...>".red());
        return;
    };
    let table = table.to_lowercase();
    session.save_schema(&table, sqltok::schema::parse_column_list(columns));
    println!("{} Schema saved for {}", "✓".green(), table.cyan());
}

fn show_repl_help() {
    println!("{}", "SQLtOK REPL Commands:".cyan().bold());
    println!("  {}              - Exit the REPL", ".exit".yellow());
    println!("  {}              - Show this help", ".help".yellow());
    println!("  {}             - Clear screen", ".clear".yellow());
    println!("  {}           - Show the last {} questions", ".history".yellow(), RECENT_HISTORY);
    println!("  {}           - Ask history entry N again", ".reuse N".yellow());
    println!("  {}          - Show example questions", ".examples".yellow());
    println!("  {}            - List known tables", ".tables".yellow());
    println!("  {} - Save columns for a table", ".schema T a,b,c".yellow());
    println!();
    println!("{}", "Question Examples:".cyan().bold());
    println!("  show all products");
    println!("  count users");
    println!("  average amount");
    println!("  top 10 orders");
    println!("  customers in london");
    println!();
}
