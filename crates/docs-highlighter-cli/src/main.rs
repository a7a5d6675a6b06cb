mod formatter;

use anyhow::{Context, Result, bail};
use docs_highlighter_config::{Config, Mode};
use docs_highlighter_engine::{
    DocumentSource, EditSink, JsonFileSource, JsonLinesSink, PassOutput, RegionSettings,
    StyleTables, instance_pass, region_pass,
};
use formatter::CommandFormatter;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::Duration;
use std::{env, io, process, thread};

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    document: Option<PathBuf>,
    once: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--once" => parsed.once = true,
            flag if flag.starts_with("--") => bail!("unknown option `{flag}`"),
            path if parsed.document.is_none() => parsed.document = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument `{extra}`"),
        }
    }
    Ok(parsed)
}

struct Highlighter {
    document_id: String,
    config: Config,
    tables: StyleTables,
    formatter: CommandFormatter,
    source: JsonFileSource,
    sink: Box<dyn EditSink>,
}

impl Highlighter {
    fn new(config: Config) -> Result<Self> {
        let sink: Box<dyn EditSink> = match &config.edits_path {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("opening edits file {}", path.display()))?;
                Box::new(JsonLinesSink::new(file))
            }
            None => Box::new(JsonLinesSink::new(io::stdout())),
        };

        Ok(Self {
            document_id: config.document.to_string_lossy().into_owned(),
            formatter: CommandFormatter::new(&config.formatters),
            tables: StyleTables::builtin(),
            source: JsonFileSource::default(),
            sink,
            config,
        })
    }

    /// Fetch, compute and submit against one snapshot.
    fn run_pass(&mut self) -> Result<usize> {
        let doc = self.source.fetch(&self.document_id)?;
        let PassOutput { edits, diagnostics } = match self.config.mode {
            Mode::Instances => instance_pass(&doc, &self.tables, &self.formatter),
            Mode::Region => region_pass(&doc, &self.tables, &self.region_settings()),
        };

        if !diagnostics.is_empty() {
            log::info!("{} markup problems in {}", diagnostics.len(), self.document_id);
        }
        if edits.is_empty() {
            log::debug!("nothing to submit");
            return Ok(0);
        }
        self.sink.submit(&self.document_id, &edits)?;
        Ok(edits.len())
    }

    fn region_settings(&self) -> RegionSettings {
        RegionSettings {
            language: self.config.region_language.clone(),
            theme: self.config.region_theme.clone(),
            markers: self.config.markers.clone(),
        }
    }

    fn poll(&mut self) -> ! {
        let interval = Duration::from_millis(self.config.poll_interval_ms);
        loop {
            match self.run_pass() {
                Ok(submitted) => log::info!("pass done, {submitted} edits submitted"),
                // the next pass starts from a fresh snapshot
                Err(e) => log::warn!("pass abandoned: {e:#}"),
            }
            thread::sleep(interval);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("docs-highlighter");
    let config_path = Config::config_path();

    let parsed = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} [document.json] [--once]");
            process::exit(1);
        }
    };

    let config = match (Config::load(), parsed.document) {
        (Ok(Some(mut config)), Some(document)) => {
            config.document = document;
            config
        }
        (Ok(Some(config)), None) => config,
        (Ok(None), Some(document)) => Config::new(document),
        (Ok(None), None) => {
            eprintln!("Error: No document provided and no config file found");
            eprintln!("Usage: {program} [document.json] [--once]");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        (Err(e), _) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    log::info!(
        "highlighting {} ({:?} mode)",
        config.document.display(),
        config.mode
    );
    let mut highlighter = Highlighter::new(config)?;

    if parsed.once {
        let submitted = highlighter.run_pass()?;
        log::info!("{submitted} edits submitted");
        return Ok(());
    }
    highlighter.poll()
}
