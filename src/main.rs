use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use clap::{Arg, ArgAction, Command};
use codic_namer::naming::{
    AcronymKind, CasingKind, CodicProvider, MockMode, MockTranslationService, NavigationEngine,
    PresentationLayer, ResultAction, SelectOutcome, Selection, Settings, SideEffect,
    SubmitOutcome, TranslationService,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

fn print_layer(layer: &PresentationLayer) {
    let result = &layer.result_item;
    println!(
        "  0) {}{}    {}",
        result.label,
        if result.is_final { " (default)" } else { "" },
        result.description
    );
    for item in &layer.word_items {
        println!(
            "  {}) {}{}",
            item.source_candidate_index + 1,
            item.label,
            if item.is_terminal { "" } else { " + ?" }
        );
    }
}

fn perform(effect: SideEffect) {
    match effect {
        SideEffect::SetClipboard(text) => println!("{}", text),
        SideEffect::OpenBrowser { url, private } => {
            println!("{}{}", url, if private { " (private mode)" } else { "" })
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("codic-namer")
        .version("0.1.0")
        .about("Turn a phrase into an identifier with Codic, one word at a time")
        .arg(
            Arg::new("text")
                .help("Phrase to name (e.g. \"ユーザー名を取得する\")")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Settings file (toml)"),
        )
        .arg(
            Arg::new("section")
                .long("section")
                .short('s')
                .help("Section name or item label to take defaults from"),
        )
        .arg(
            Arg::new("casing")
                .long("casing")
                .help("camel, pascal, lower underscore, upper underscore, hyphen or none"),
        )
        .arg(
            Arg::new("acronym-style")
                .long("acronym-style")
                .help("ms naming guidelines, camel strict or literal"),
        )
        .arg(
            Arg::new("project")
                .long("project")
                .short('p')
                .help("Codic project (dictionary) id"),
        )
        .arg(
            Arg::new("action")
                .long("action")
                .short('a')
                .help("copy_result, browse, browse_private or copy_url")
                .default_value("copy_result"),
        )
        .arg(
            Arg::new("default")
                .long("default")
                .short('d')
                .help("Take the whole-result translation without drilling down")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the offline mock service instead of the Codic API")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches
        .get_many::<String>("text")
        .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    let action: ResultAction = matches
        .get_one::<String>("action")
        .map(|name| name.parse())
        .transpose()?
        .unwrap_or_default();

    let settings = match matches.get_one::<String>("config") {
        Some(path) => Settings::load(Path::new(path))?,
        None => Settings::default(),
    };
    let mut section = match matches.get_one::<String>("section") {
        Some(name) => settings
            .section(name)
            .cloned()
            .ok_or_else(|| format!("Unknown section: {}", name))?,
        None => settings.sections.first().cloned().unwrap_or_default(),
    };
    if let Some(casing) = matches.get_one::<String>("casing") {
        section.casing = CasingKind::from_config(casing)
            .ok_or_else(|| format!("Unknown casing: {}", casing))?;
    }
    if let Some(style) = matches.get_one::<String>("acronym-style") {
        section.acronym_style = AcronymKind::from_config(style)
            .ok_or_else(|| format!("Unknown acronym style: {}", style))?;
    }
    if let Some(project) = matches.get_one::<String>("project") {
        section.project_id = project.clone();
    }

    let service: Arc<dyn TranslationService> = if matches.get_flag("mock") {
        Arc::new(MockTranslationService::new(MockMode::Echo))
    } else {
        let Some(token) = settings.access_token() else {
            eprintln!("❌ No Codic access token configured");
            eprintln!("   Set it with: export CODIC_ACCESS_TOKEN=your_token");
            eprintln!("   Or add access_token to the [defaults] section of your settings");
            eprintln!("   Or use --mock to use the offline mock service");
            return Err("Missing access token".into());
        };
        Arc::new(CodicProvider::new(token)?)
    };

    let engine = NavigationEngine::new(service).with_quiet_interval(settings.idle_time);
    let mut layer = match engine.submit(section.query(&text)).await {
        SubmitOutcome::Presented(layer) => layer,
        SubmitOutcome::Failed(item) => {
            eprintln!("❌ {}: {}", item.label, item.description);
            return Err(item.description.into());
        }
        SubmitOutcome::Skipped | SubmitOutcome::Superseded => {
            eprintln!("Nothing to translate");
            return Ok(());
        }
    };

    if matches.get_flag("default") {
        if let SelectOutcome::Finalized(name) = engine.select(Selection::Result)? {
            perform(action.resolve(&name)?);
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_layer(&layer);
        print!("Select [Enter = 0, q = quit]: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            engine.reset();
            return Ok(());
        };
        let selection = match line.trim() {
            "q" | "Q" => {
                engine.reset();
                return Ok(());
            }
            "" | "0" => Selection::Result,
            choice => match choice.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                Some(index) => Selection::Candidate(index),
                None => {
                    eprintln!("Enter a number from the list, or q to quit");
                    continue;
                }
            },
        };

        match engine.select(selection) {
            Ok(SelectOutcome::Presenting(next)) => layer = next,
            Ok(SelectOutcome::Finalized(name)) => {
                perform(action.resolve(&name)?);
                engine.reset();
                return Ok(());
            }
            Err(err) => eprintln!("❌ {}", err),
        }
    }
}
