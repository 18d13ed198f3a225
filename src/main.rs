//! Command-line front end for Qt Linguist catalogs.
//!
//! - `ts-catalog stats <PATH>...` - translation progress as JSON
//! - `ts-catalog check <PATH>...` - report problems; exits with 1 on errors
//! - `ts-catalog tr` - look up a message the way the application would
//! - `ts-catalog locales [DIR]` - list the catalogs of a project
//! - `ts-catalog normalize <FILE>` - rewrite a catalog in canonical layout

use std::io::{
    self,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use clap::{
    Args,
    Parser,
    Subcommand,
};
use serde::Serialize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use ts_catalog::config::{
    CatalogSettings,
    ConfigError,
    ConfigManager,
    DiagnosticsConfig,
    FileMatcher,
    MatcherError,
};
use ts_catalog::diagnostics::{
    CatalogStats,
    Diagnostic,
    Severity,
    check_catalog,
};
use ts_catalog::indexer::{
    IndexerError,
    WorkspaceIndexer,
};
use ts_catalog::input::{
    ParseError,
    load_catalog_file,
    parse_catalog,
};
use ts_catalog::ir::Catalog;
use ts_catalog::output::{
    WriteError,
    save_catalog_file,
    write_catalog,
};
use ts_catalog::placeholder::substitute_args;
use ts_catalog::translator::{
    Translator,
    TranslatorOptions,
    TranslatorStack,
};

#[derive(Parser, Debug)]
#[command(name = "ts-catalog", version, about = "Inspect and query Qt Linguist .ts catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Settings file (default: .ts-catalog.json in the project directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print statistics for catalog files or project directories
    Stats {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Check catalogs for problems
    Check {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Also report unfinished translations
        #[arg(long)]
        unfinished: bool,
    },

    /// Translate a message
    Tr(TrArgs),

    /// List the locales of a project and the files they come from
    Locales {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Rewrite a catalog in canonical layout
    Normalize {
        file: PathBuf,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct TrArgs {
    /// Catalog file to translate with
    #[arg(long, required_unless_present = "locale", conflicts_with = "locale")]
    catalog: Option<PathBuf>,

    /// Locale to translate to, using the catalogs of the project in --dir
    #[arg(long)]
    locale: Option<String>,

    /// Project directory searched with --locale
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    #[arg(long)]
    context: String,

    /// Source text of the message
    source: String,

    /// Disambiguating comment
    #[arg(long, default_value = "")]
    comment: String,

    /// Quantity for numerus messages
    #[arg(short = 'n', allow_negative_numbers = true)]
    count: Option<i64>,

    /// Values for %1, %2, ... in order
    #[arg(long = "arg")]
    args: Vec<String>,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Matcher(#[from] MatcherError),
    #[error(transparent)]
    Indexer(#[from] IndexerError),
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error("No catalog files found in {}", .0.display())]
    NothingFound(PathBuf),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn init_logging(level: &str, log_file: Option<&Path>) -> io::Result<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (writer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
            tracing_appender::non_blocking(file)
        }
        None => tracing_appender::non_blocking(io::stderr()),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(log_file.is_none())
        .init();
    Ok(guard)
}

fn load_settings(config: Option<&Path>, project_dir: &Path) -> Result<CatalogSettings, CliError> {
    let mut manager = ConfigManager::new();
    match config {
        Some(path) => manager.load_settings_file(path)?,
        None => manager.load_settings(Some(project_dir.to_path_buf()))?,
    }
    Ok(manager.get_settings().clone())
}

/// Files named on the command line, with directories expanded to their catalogs.
fn expand_paths(paths: &[PathBuf], settings: &CatalogSettings) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let matcher = FileMatcher::new(path.clone(), settings)?;
            let found = WorkspaceIndexer::find_catalog_files(path, &matcher);
            if found.is_empty() {
                return Err(CliError::NothingFound(path.clone()));
            }
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn load(path: &Path) -> Result<Catalog, CliError> {
    load_catalog_file(path).map_err(|source| CliError::Parse { path: path.to_path_buf(), source })
}

#[derive(Serialize)]
struct FileStats<'a> {
    path: &'a Path,
    language: Option<&'a str>,
    #[serde(flatten)]
    stats: CatalogStats,
    percent_finished: usize,
}

fn stats(
    paths: &[PathBuf],
    settings: &CatalogSettings,
    out: &mut impl Write,
) -> Result<ExitCode, CliError> {
    let files = expand_paths(paths, settings)?;
    let catalogs =
        files.iter().map(|path| Ok((path, load(path)?))).collect::<Result<Vec<_>, CliError>>()?;

    let report: Vec<FileStats<'_>> = catalogs
        .iter()
        .map(|(path, catalog)| {
            let stats = CatalogStats::from(catalog);
            FileStats {
                path,
                language: catalog.language.as_deref(),
                stats,
                percent_finished: stats.percent_finished(),
            }
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(ExitCode::SUCCESS)
}

fn check(
    paths: &[PathBuf],
    unfinished: bool,
    settings: &CatalogSettings,
    out: &mut impl Write,
) -> Result<ExitCode, CliError> {
    let files = expand_paths(paths, settings)?;
    let config = DiagnosticsConfig {
        unfinished: unfinished || settings.diagnostics.unfinished,
        ..settings.diagnostics
    };

    let mut failed = false;
    for path in &files {
        let diagnostics: Vec<Diagnostic> = match load_catalog_file(path) {
            Ok(catalog) => check_catalog(&catalog, &config),
            Err(e) => {
                writeln!(out, "{}: error [parse] {e}", path.display())?;
                failed = true;
                continue;
            }
        };
        for diagnostic in &diagnostics {
            writeln!(out, "{}: {diagnostic}", path.display())?;
        }
        failed |= diagnostics.iter().any(|d| d.severity == Severity::Error);
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

async fn tr(
    args: &TrArgs,
    settings: &CatalogSettings,
    out: &mut impl Write,
) -> Result<ExitCode, CliError> {
    let options = TranslatorOptions { include_unfinished: settings.include_unfinished };

    let mut stack = TranslatorStack::new();
    if let Some(path) = &args.catalog {
        let translator = Translator::from_file(path, options)
            .map_err(|source| CliError::Parse { path: path.clone(), source })?;
        stack.install(translator.into());
    } else if let Some(locale) = &args.locale {
        let set = WorkspaceIndexer::new().load_workspace(&args.dir, settings).await?;
        let fallbacks = settings.primary_languages.clone().unwrap_or_default();
        stack = TranslatorStack::for_locale(&set, locale, &fallbacks, options);
    }

    let text = match args.count {
        Some(n) => stack.tr_n(&args.context, &args.source, &args.comment, n),
        None => stack.tr(&args.context, &args.source, &args.comment),
    };
    let text = if args.args.is_empty() { text } else { substitute_args(&text, &args.args) };

    writeln!(out, "{text}")?;
    Ok(ExitCode::SUCCESS)
}

async fn locales(
    dir: &Path,
    settings: &CatalogSettings,
    out: &mut impl Write,
) -> Result<ExitCode, CliError> {
    let set = WorkspaceIndexer::new().load_workspace(dir, settings).await?;
    if set.is_empty() {
        return Err(CliError::NothingFound(dir.to_path_buf()));
    }

    for loaded in set.locales() {
        let files: Vec<String> =
            loaded.files.iter().map(|file| file.display().to_string()).collect();
        writeln!(
            out,
            "{}\t{}\t{}",
            loaded.locale,
            loaded.catalog.message_count(),
            files.join(", ")
        )?;
    }
    Ok(ExitCode::SUCCESS)
}

fn normalize(
    file: &Path,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<ExitCode, CliError> {
    // Parsed without file name detection so that no attribute is added.
    let content = std::fs::read_to_string(file)?;
    let catalog = parse_catalog(&content)
        .map_err(|source| CliError::Parse { path: file.to_path_buf(), source })?;

    match output {
        Some(path) => save_catalog_file(path, &catalog)?,
        None => out.write_all(write_catalog(&catalog).as_bytes())?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Directory whose `.ts-catalog.json` applies to the command.
fn project_dir(command: &Command) -> io::Result<PathBuf> {
    let dir = match command {
        Command::Locales { dir } => Some(dir.clone()),
        Command::Tr(args) if args.locale.is_some() => Some(args.dir.clone()),
        Command::Stats { paths } | Command::Check { paths, .. } => {
            paths.iter().find(|path| path.is_dir()).cloned()
        }
        _ => None,
    };
    dir.map_or_else(std::env::current_dir, Ok)
}

async fn run(cli: &Cli, out: &mut impl Write) -> Result<ExitCode, CliError> {
    let settings = load_settings(cli.config.as_deref(), &project_dir(&cli.command)?)?;

    match &cli.command {
        Command::Stats { paths } => stats(paths, &settings, out),
        Command::Check { paths, unfinished } => check(paths, *unfinished, &settings, out),
        Command::Tr(args) => tr(args, &settings, out).await,
        Command::Locales { dir } => locales(dir, &settings, out).await,
        Command::Normalize { file, output } => normalize(file, output.as_deref(), out),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match init_logging(&cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            let _ = writeln!(io::stderr(), "ts-catalog: cannot open log file: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &mut io::stdout().lock()).await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            let _ = writeln!(io::stderr(), "ts-catalog: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use tempfile::TempDir;

    use super::*;

    const GERMAN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1">
<context>
    <name>AddItemDialog</name>
    <message>
        <location filename="../src/additemdialog.ui" line="14"/>
        <source>Add Items to %1</source>
        <translation>Teile zu %1 hinzufügen</translation>
    </message>
</context>
<context>
    <name>Document</name>
    <message numerus="yes">
        <location filename="../src/document.cpp" line="201"/>
        <source>Added %n item(s)</source>
        <translation>
            <numerusform>%n Teil hinzugefügt</numerusform>
            <numerusform>%n Teile hinzugefügt</numerusform>
        </translation>
    </message>
</context>
</TS>"#;

    const DUPLICATE: &str = r#"<TS version="2.1" language="de"><context><name>Window</name>
<message><source>Close</source><translation>Schließen</translation></message>
<message><source>Close</source><translation>Zumachen</translation></message>
</context></TS>"#;

    const MISMATCH: &str = r#"<TS version="2.1" language="de"><context><name>Window</name>
<message><source>Open %1</source><translation>Öffnen</translation></message>
</context></TS>"#;

    fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn output(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ts-catalog").chain(args.iter().copied())).unwrap()
    }

    #[googletest::test]
    fn test_check_clean_catalog_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(temp_dir.path(), "brickstore_de.ts", GERMAN);
        let mut out = Vec::new();

        let code = check(&[path], false, &CatalogSettings::default(), &mut out).unwrap();

        expect_that!(code, eq(ExitCode::SUCCESS));
        expect_that!(output(out), eq(""));
    }

    #[googletest::test]
    fn test_check_fails_on_duplicate_message() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(temp_dir.path(), "brickstore_de.ts", DUPLICATE);
        let mut out = Vec::new();

        let code = check(&[path], false, &CatalogSettings::default(), &mut out).unwrap();

        expect_that!(code, eq(ExitCode::FAILURE));
        expect_that!(output(out), contains_substring("error [duplicate-message] Window"));
    }

    #[googletest::test]
    fn test_check_warnings_do_not_fail() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(temp_dir.path(), "brickstore_de.ts", MISMATCH);
        let mut out = Vec::new();

        let code = check(&[path], false, &CatalogSettings::default(), &mut out).unwrap();

        expect_that!(code, eq(ExitCode::SUCCESS));
        expect_that!(output(out), contains_substring("warning [placeholder-mismatch]"));
    }

    #[googletest::test]
    fn test_check_reports_parse_failure_and_continues() {
        let temp_dir = TempDir::new().unwrap();
        let broken = write(temp_dir.path(), "brickstore_fr.ts", "<TS><context>");
        let duplicate = write(temp_dir.path(), "brickstore_de.ts", DUPLICATE);
        let mut out = Vec::new();

        let code =
            check(&[broken, duplicate], false, &CatalogSettings::default(), &mut out).unwrap();

        let text = output(out);
        expect_that!(code, eq(ExitCode::FAILURE));
        expect_that!(text, contains_substring("brickstore_fr.ts: error [parse]"));
        expect_that!(text, contains_substring("[duplicate-message]"));
    }

    #[googletest::test]
    fn test_expand_paths_walks_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "translations/brickstore_de.ts", GERMAN);
        write(root, "translations/brickstore_fr.ts", GERMAN);
        let single = write(root, "other/extra.ts", GERMAN);

        let files =
            expand_paths(&[root.to_path_buf(), single.clone()], &CatalogSettings::default())
                .unwrap();

        assert_eq!(
            files,
            vec![
                root.join("translations/brickstore_de.ts"),
                root.join("translations/brickstore_fr.ts"),
                single
            ]
        );
    }

    #[googletest::test]
    fn test_expand_paths_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = expand_paths(&[temp_dir.path().to_path_buf()], &CatalogSettings::default());

        assert!(matches!(result, Err(CliError::NothingFound(ref dir)) if dir == temp_dir.path()));
    }

    #[googletest::test]
    fn test_stats_reports_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(temp_dir.path(), "brickstore_de.ts", GERMAN);
        let mut out = Vec::new();

        stats(&[path], &CatalogSettings::default(), &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[0]["language"], serde_json::json!("de"));
        assert_eq!(json[0]["messages"], serde_json::json!(2));
        assert_eq!(json[0]["percent_finished"], serde_json::json!(100));
    }

    #[tokio::test]
    async fn test_tr_substitutes_args_after_lookup() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(temp_dir.path(), "brickstore_de.ts", GERMAN);
        let cli = parse(&[
            "tr",
            "--catalog",
            path.to_str().unwrap(),
            "--context",
            "AddItemDialog",
            "Add Items to %1",
            "--arg",
            "Set 6020",
        ]);
        let Command::Tr(args) = &cli.command else { panic!("not a tr command") };
        let mut out = Vec::new();

        tr(args, &CatalogSettings::default(), &mut out).await.unwrap();

        assert_eq!(output(out), "Teile zu Set 6020 hinzufügen\n");
    }

    #[tokio::test]
    async fn test_tr_with_locale_and_count() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "translations/brickstore_de.ts", GERMAN);
        let cli = parse(&[
            "tr",
            "--locale",
            "de_AT",
            "--dir",
            temp_dir.path().to_str().unwrap(),
            "--context",
            "Document",
            "-n",
            "-3",
            "Added %n item(s)",
        ]);
        let Command::Tr(args) = &cli.command else { panic!("not a tr command") };
        let mut out = Vec::new();

        tr(args, &CatalogSettings::default(), &mut out).await.unwrap();

        assert_eq!(output(out), "-3 Teile hinzugefügt\n");
    }

    #[googletest::test]
    fn test_normalize_adds_no_language_from_file_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(temp_dir.path(), "brickstore_de.ts", GERMAN);
        let mut out = Vec::new();

        let code = normalize(&path, None, &mut out).unwrap();

        expect_that!(code, eq(ExitCode::SUCCESS));
        assert_eq!(output(out), GERMAN);
    }

    #[googletest::test]
    fn test_normalize_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(temp_dir.path(), "brickstore_de.ts", DUPLICATE);
        let target = temp_dir.path().join("normalized.ts");
        let mut out = Vec::new();

        normalize(&path, Some(&target), &mut out).unwrap();

        expect_that!(out, is_empty());
        let written = fs::read_to_string(target).unwrap();
        expect_that!(written.matches("<message>").count(), eq(1));
        expect_that!(written, ends_with("</TS>"));
    }

    #[tokio::test]
    async fn test_locales_lists_each_locale() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "translations/brickstore_de.ts", GERMAN);
        write(temp_dir.path(), "translations/brickstore_fr.ts", GERMAN);
        let mut out = Vec::new();

        locales(temp_dir.path(), &CatalogSettings::default(), &mut out).await.unwrap();

        let lines: Vec<String> = output(out)
            .lines()
            .map(|line| line.split('\t').take(2).collect::<Vec<_>>().join(" "))
            .collect();
        assert_eq!(lines, vec!["de 2", "fr 2"]);
    }

    #[googletest::test]
    fn test_project_dir_follows_directory_argument() {
        let temp_dir = TempDir::new().unwrap();
        let file = write(temp_dir.path(), "brickstore_de.ts", GERMAN);
        let dir = temp_dir.path().to_str().unwrap();

        let check_dir = project_dir(&parse(&["check", file.to_str().unwrap(), dir]).command);
        let stats_file = project_dir(&parse(&["stats", file.to_str().unwrap()]).command);

        expect_that!(check_dir.unwrap(), eq(temp_dir.path()));
        expect_that!(stats_file.unwrap(), eq(&std::env::current_dir().unwrap()));
    }

    #[googletest::test]
    fn test_project_settings_apply_to_directory_argument() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "translations/brickstore_de.ts", GERMAN);
        write(root, "translations/qtbase_de.ts", GERMAN);
        write(
            root,
            ".ts-catalog.json",
            r#"{"translationFiles": {"excludePatterns": ["**/qtbase_*.ts"]}}"#,
        );
        let cli = parse(&["stats", root.to_str().unwrap()]);

        let settings = load_settings(None, &project_dir(&cli.command).unwrap()).unwrap();
        let files = expand_paths(&[root.to_path_buf()], &settings).unwrap();

        assert_eq!(files, vec![root.join("translations/brickstore_de.ts")]);
    }
}
