use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use quiz_core::{ConfigError, SessionConfig};
use services::{AnswerResult, CategoryCatalog, Clock, QuizService, QuizSession, SessionSnapshot};
use storage::JsonQuestionBank;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingBank,
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingBank => write!(f, "a question bank is required (--bank or QUIZ_BANK)"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- --bank <questions.json> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --catalog <categories.json>  resolve --categories ids through a catalog");
    eprintln!("  --questions <n>              questions per game (default 10)");
    eprintln!("  --time <seconds>             time limit per question (default 20)");
    eprintln!("  --mode <mode>                game mode (default classic)");
    eprintln!("  --categories <a,b,...>       restrict questions to these categories");
    eprintln!("  --shuffle                    shuffle the question bank");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK, QUIZ_CATALOG, QUIZ_QUESTIONS, QUIZ_TIME, QUIZ_MODE, QUIZ_CATEGORIES");
    eprintln!("  RUST_LOG (default: info)");
}

struct Args {
    bank: PathBuf,
    catalog: Option<PathBuf>,
    config: SessionConfig,
    shuffle: bool,
}

enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    /// `env` looks up `QUIZ_*` variables; flags override them.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut bank = env("QUIZ_BANK").map(PathBuf::from);
        let mut catalog = env("QUIZ_CATALOG").map(PathBuf::from);
        let mut shuffle = false;

        let mut pairs: Vec<(&'static str, String)> = [
            ("questions", "QUIZ_QUESTIONS"),
            ("time", "QUIZ_TIME"),
            ("mode", "QUIZ_MODE"),
            ("categories", "QUIZ_CATEGORIES"),
        ]
        .into_iter()
        .filter_map(|(key, var)| env(var).map(|value| (key, value)))
        .collect();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => bank = Some(PathBuf::from(require_value(args, "--bank")?)),
                "--catalog" => catalog = Some(PathBuf::from(require_value(args, "--catalog")?)),
                "--questions" => pairs.push(("questions", require_value(args, "--questions")?)),
                "--time" => pairs.push(("time", require_value(args, "--time")?)),
                "--mode" => pairs.push(("mode", require_value(args, "--mode")?)),
                "--categories" => {
                    pairs.push(("categories", require_value(args, "--categories")?));
                }
                "--shuffle" => shuffle = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let config = SessionConfig::from_query_pairs(pairs).map_err(ArgsError::Config)?;
        Ok(Parsed::Run(Self {
            bank: bank.ok_or(ArgsError::MissingBank)?,
            catalog,
            config,
            shuffle,
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Answer(usize),
    Go(usize),
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        match (parts.next()?, parts.next()) {
            ("q" | "quit", None) => Some(Self::Quit),
            ("g" | "go", Some(target)) => target.parse().ok().map(Self::Go),
            (choice, None) => choice.parse().ok().map(Self::Answer),
            _ => None,
        }
    }
}

fn render(out: &mut impl Write, snapshot: &SessionSnapshot) -> io::Result<()> {
    let bar: String = snapshot
        .dots
        .iter()
        .map(|dot| match (dot.is_current, dot.answered_correct) {
            (true, _) => format!("({})", dot.index),
            (false, Some(true)) => format!(" {}+", dot.index),
            (false, Some(false)) => format!(" {}-", dot.index),
            (false, None) if dot.is_next => format!(" {}*", dot.index),
            (false, None) => format!(" {} ", dot.index),
        })
        .collect();
    writeln!(out)?;
    writeln!(out, "{bar}")?;
    writeln!(
        out,
        "[{}] {}",
        snapshot.question.topic(),
        snapshot.question.prompt()
    )?;
    for (i, answer) in snapshot.question.answers().iter().enumerate() {
        writeln!(out, "  {}. {answer}", i + 1)?;
    }
    if snapshot.answers_locked {
        writeln!(out, "  (answered)")?;
    }
    Ok(())
}

fn report(out: &mut impl Write, snapshot: &SessionSnapshot, result: &AnswerResult) -> io::Result<()> {
    if result.feedback.correct {
        writeln!(out, "Correct!")?;
    } else if let Some(answer) = result
        .feedback
        .reveal
        .and_then(|i| snapshot.question.answers().get(i))
    {
        writeln!(out, "Wrong, the answer was: {answer}")?;
    }
    if let Some(summary) = &result.summary {
        writeln!(
            out,
            "Game over: {}/{} correct in {}s.",
            summary.correct(),
            summary.total(),
            summary.duration().num_seconds()
        )?;
    }
    Ok(())
}

fn play(svc: &QuizService, quiz: &mut QuizSession) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let catalog = svc.catalog();

    while !quiz.is_complete() {
        let snapshot = quiz.snapshot()?;
        if let Some(color) = catalog.and_then(|c| c.color_for_topic(snapshot.question.topic())) {
            tracing::debug!(color, "theme for current topic");
        }
        render(&mut out, &snapshot)?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match Command::parse(&line) {
            Some(Command::Quit) => {
                if let Some(warning) = quiz.leave_warning() {
                    writeln!(out, "{warning}")?;
                }
                break;
            }
            Some(Command::Go(target)) => {
                if quiz.select_question(target).is_ignored() {
                    writeln!(out, "Question {target} is not unlocked yet.")?;
                }
            }
            Some(Command::Answer(choice)) => {
                let Some(answer) = choice
                    .checked_sub(1)
                    .and_then(|i| snapshot.question.answers().get(i))
                else {
                    writeln!(out, "Pick an answer between 1 and {}.", snapshot.question.answers().len())?;
                    continue;
                };
                match svc.answer_current(quiz, answer) {
                    Ok(result) => report(&mut out, &snapshot, &result)?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            None => writeln!(out, "Commands: <answer number>, g <question>, q")?,
        }
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |var| std::env::var(var).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    let bank = JsonQuestionBank::from_path(&args.bank)?;
    let mut svc = QuizService::new(Clock::system(), Arc::new(bank)).with_shuffle(args.shuffle);
    if let Some(path) = &args.catalog {
        svc = svc.with_catalog(Arc::new(CategoryCatalog::from_path(path)?));
    }

    let mut quiz = svc.start_session(&args.config).await?;
    play(&svc, &mut quiz)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
