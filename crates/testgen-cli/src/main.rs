//! TestGen CLI
//!
//! The `testgen` command proposes test plans for source files and prints
//! the canned test code for a chosen plan.
//!
//! ## Commands
//!
//! - `summarize`: Classify local files into test plan summaries
//! - `generate`: Print the test code for one summary id
//! - `remote`: Classify a GitHub repository (live or fixture data)
//! - `frameworks`: List the supported test frameworks

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use futures::future::join_all;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use testgen_core::{
    find_framework, frameworks_for_language, generate_tests, summarize_files, CodeArtifact,
    SubmittedFile, TestFramework, TestPlanSummary, METRICS, SUPPORTED_FRAMEWORKS,
};
use testgen_github::{
    simulate_pull_request, GitHubClient, GitHubConfig, PullRequest, PullRequestDraft, RepoRef,
    RepositorySource, Source,
};
use testgen_core::language::UNKNOWN_LANGUAGE;
use tracing::{info, warn, Level};

/// Upper bound on directories visited while walking a remote repository.
const MAX_REMOTE_DIRECTORIES: usize = 64;

#[derive(Parser)]
#[command(name = "testgen")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rule-based test plan and test code generator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output and JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Propose test plans for local source files
    Summarize {
        /// Files to classify
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Project root that absolute paths are made relative to
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Print the test code for a summary id
    Generate {
        /// Summary id (e.g. react-components, hooks-tests)
        #[arg(short, long)]
        summary: String,

        /// Files the summary applies to
        paths: Vec<PathBuf>,

        /// Project root that absolute paths are made relative to
        #[arg(long)]
        root: Option<PathBuf>,

        /// Write the code to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify the files of a GitHub repository
    Remote {
        /// Repository as owner/name
        #[arg(short, long)]
        repo: String,

        /// GitHub token (falls back to GITHUB_TOKEN)
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Also generate code for this summary id
        #[arg(short, long)]
        summary: Option<String>,

        /// Simulate opening a pull request with the generated code
        #[arg(long, requires = "summary")]
        pr: bool,

        /// Maximum number of files to fetch
        #[arg(long, default_value = "50")]
        max_files: usize,
    },

    /// List supported test frameworks
    Frameworks {
        /// Only show frameworks for this language (e.g. TypeScript)
        #[arg(short, long, conflicts_with = "id")]
        language: Option<String>,

        /// Show a single framework by id (e.g. playwright)
        #[arg(long)]
        id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    testgen_core::init_tracing(cli.json, level);

    let result = match cli.command {
        Commands::Summarize { paths, root } => {
            project_root(root).and_then(|root| cmd_summarize(&paths, &root, cli.json))
        }
        Commands::Generate {
            summary,
            paths,
            root,
            output,
        } => project_root(root).and_then(|root| {
            cmd_generate(&summary, &paths, &root, output.as_deref(), cli.json)
        }),
        Commands::Remote {
            repo,
            token,
            summary,
            pr,
            max_files,
        } => {
            let repo: RepoRef = repo.parse()?;
            let client = GitHubClient::new(GitHubConfig::from_env())
                .context("Failed to build GitHub client")?;
            cmd_remote(
                &client,
                &repo,
                token.as_deref(),
                summary.as_deref(),
                pr,
                max_files,
                cli.json,
            )
            .await
        }
        Commands::Frameworks { language, id } => {
            cmd_frameworks(language.as_deref(), id.as_deref(), cli.json)
        }
    };

    METRICS.flush();
    result
}

/// Resolve `--root`, defaulting to the current directory.
fn project_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(match root {
        Some(root) if root.is_absolute() => root,
        Some(root) => cwd.join(root),
        None => cwd,
    })
}

/// Path as the classifier sees it: relative to the project, `/`-separated.
///
/// Relative paths are kept as given (minus a leading `./`). Absolute paths
/// are made relative to `root`; one outside `root` is reduced to its file
/// name so directories above the project never reach the path rules.
fn submission_path(path: &Path, root: &Path) -> String {
    let relative = if path.is_absolute() {
        match path.strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => {
                warn!(
                    path = %path.display(),
                    root = %root.display(),
                    "file is outside the project root"
                );
                path.file_name().map(Path::new).unwrap_or(path)
            }
        }
    } else {
        path.strip_prefix(".").unwrap_or(path)
    };

    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Read local files for submission.
///
/// Files that are not valid UTF-8 are submitted with empty content so they
/// can still match path rules.
fn read_submitted_files(paths: &[PathBuf], root: &Path) -> Result<Vec<SubmittedFile>> {
    paths
        .iter()
        .map(|path| {
            let bytes =
                std::fs::read(path).context(format!("Failed to read source file: {:?}", path))?;
            let content = String::from_utf8(bytes).unwrap_or_else(|_| {
                warn!(path = %path.display(), "file is not UTF-8, submitting without content");
                String::new()
            });
            let file = SubmittedFile::new(submission_path(path, root), content);
            Ok(file.with_detected_language())
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_summaries_text(summaries: &[TestPlanSummary]) -> String {
    if summaries.is_empty() {
        return "No test plans apply to these files.\n".to_string();
    }

    let mut out = String::new();
    for summary in summaries {
        out.push_str(&format!("{}  {}\n", summary.id, summary.title));
        out.push_str(&format!("    {}\n", summary.description));
        out.push_str(&format!("    framework:  {}\n", summary.framework));
        out.push_str(&format!(
            "    effort:     {:?}, {}\n",
            summary.complexity, summary.estimated_time
        ));
        out.push_str(&format!("    files:      {}\n", summary.files.len()));
        for file in &summary.files {
            out.push_str(&format!("      {}\n", file));
        }
    }
    out
}

/// Classify local files
fn cmd_summarize(paths: &[PathBuf], root: &Path, json: bool) -> Result<()> {
    let files = read_submitted_files(paths, root)?;
    let summaries = summarize_files(&files)?;

    if json {
        print_json(&summaries)
    } else {
        print!("{}", render_summaries_text(&summaries));
        Ok(())
    }
}

/// Write or print generated test code
fn cmd_generate(
    summary_id: &str,
    paths: &[PathBuf],
    root: &Path,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    let files = read_submitted_files(paths, root)?;
    let artifact = generate_tests(summary_id, &files)?;

    if let Some(output) = output {
        std::fs::write(output, &artifact.code)
            .context(format!("Failed to write test file: {:?}", output))?;
        info!(path = %output.display(), "wrote generated tests");
        if !json {
            println!(
                "Wrote {} ({}) to {}",
                artifact.filename,
                artifact.framework,
                output.display()
            );
            return Ok(());
        }
    }

    if json {
        print_json(&artifact)
    } else {
        println!("// {} ({})", artifact.filename, artifact.framework);
        println!("{}", artifact.code);
        Ok(())
    }
}

/// Walk a repository and fetch every file it lists.
///
/// Directory listings may overlap (fixture listings are flat), so paths are
/// de-duplicated. The result is tagged `Fallback` if any read fell back.
async fn collect_repository_files(
    source: &dyn RepositorySource,
    repo: &RepoRef,
    token: Option<&str>,
    max_files: usize,
) -> (Source, Vec<SubmittedFile>) {
    let mut origin = Source::Live;
    let mut pending = vec![String::new()];
    let mut visited = HashSet::new();
    let mut seen_files = HashSet::new();
    let mut file_paths = Vec::new();

    while let Some(dir) = pending.pop() {
        if visited.len() >= MAX_REMOTE_DIRECTORIES || !visited.insert(dir.clone()) {
            continue;
        }
        let listing = source
            .list_contents(&repo.owner, &repo.name, &dir, token)
            .await;
        if listing.is_fallback() {
            origin = Source::Fallback;
        }
        for entry in listing.value {
            if entry.is_file() {
                if file_paths.len() < max_files && seen_files.insert(entry.path.clone()) {
                    file_paths.push(entry.path);
                }
            } else if !visited.contains(&entry.path) {
                pending.push(entry.path);
            }
        }
    }

    let fetches = file_paths
        .iter()
        .map(|path| source.file_content(&repo.owner, &repo.name, path, token));
    let mut files = Vec::with_capacity(file_paths.len());
    for fetched in join_all(fetches).await {
        if fetched.is_fallback() {
            origin = Source::Fallback;
        }
        files.push(SubmittedFile::from(fetched.value));
    }

    (origin, files)
}

#[derive(Serialize)]
struct RemoteReport {
    repository: String,
    source: Source,
    files: Vec<String>,
    languages: Vec<String>,
    summaries: Vec<TestPlanSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artifact: Option<CodeArtifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pull_request: Option<PullRequest>,
}

async fn build_remote_report(
    source: &dyn RepositorySource,
    repo: &RepoRef,
    token: Option<&str>,
    summary_id: Option<&str>,
    open_pr: bool,
    max_files: usize,
) -> Result<RemoteReport> {
    let (origin, files) = collect_repository_files(source, repo, token, max_files).await;
    info!(repo = %repo, source = %origin, files = files.len(), "collected repository files");

    let summaries = if files.is_empty() {
        Vec::new()
    } else {
        summarize_files(&files)?
    };

    let artifact = summary_id
        .map(|id| generate_tests(id, &files))
        .transpose()?;

    let pull_request = match (&artifact, open_pr) {
        (Some(artifact), true) => {
            let draft = PullRequestDraft::for_generated_tests(&artifact.filename, &artifact.code);
            Some(simulate_pull_request(&repo.owner, &repo.name, &draft))
        }
        _ => None,
    };

    Ok(RemoteReport {
        repository: repo.to_string(),
        source: origin,
        files: files.iter().map(|f| f.path.clone()).collect(),
        languages: detected_languages(&files),
        summaries,
        artifact,
        pull_request,
    })
}

/// Distinct recognised languages of `files`, sorted.
fn detected_languages(files: &[SubmittedFile]) -> Vec<String> {
    files
        .iter()
        .map(SubmittedFile::effective_language)
        .filter(|lang| *lang != UNKNOWN_LANGUAGE)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Classify a GitHub repository
async fn cmd_remote(
    source: &dyn RepositorySource,
    repo: &RepoRef,
    token: Option<&str>,
    summary_id: Option<&str>,
    open_pr: bool,
    max_files: usize,
    json: bool,
) -> Result<()> {
    let report =
        build_remote_report(source, repo, token, summary_id, open_pr, max_files).await?;

    if json {
        return print_json(&report);
    }

    println!(
        "Repository {} ({} data, {} files)",
        report.repository,
        report.source,
        report.files.len()
    );
    if report.source == Source::Fallback {
        println!("GitHub was not reachable with these credentials; showing demo data.");
    }
    if !report.languages.is_empty() {
        println!("Languages: {}", report.languages.join(", "));
    }
    println!();
    print!("{}", render_summaries_text(&report.summaries));

    if let Some(artifact) = &report.artifact {
        println!();
        println!("// {} ({})", artifact.filename, artifact.framework);
        println!("{}", artifact.code);
    }
    if let Some(pr) = &report.pull_request {
        println!();
        println!("Simulated pull request #{}: {}", pr.number, pr.html_url);
    }

    Ok(())
}

fn render_frameworks_text(frameworks: &[&TestFramework]) -> String {
    let mut out = String::new();
    for fw in frameworks {
        out.push_str(&format!("{:<12} {}\n", fw.id, fw.name));
        out.push_str(&format!("             {}\n", fw.description));
        out.push_str(&format!("             languages: {}\n", fw.languages.join(", ")));
        for step in fw.setup {
            out.push_str(&format!("             $ {}\n", step));
        }
    }
    out
}

fn select_frameworks(
    language: Option<&str>,
    id: Option<&str>,
) -> Result<Vec<&'static TestFramework>> {
    if let Some(id) = id {
        return match find_framework(id) {
            Some(fw) => Ok(vec![fw]),
            None => bail!("Unknown framework id: {id}"),
        };
    }
    Ok(match language {
        Some(lang) => frameworks_for_language(lang),
        None => SUPPORTED_FRAMEWORKS.iter().collect(),
    })
}

/// List supported frameworks
fn cmd_frameworks(language: Option<&str>, id: Option<&str>, json: bool) -> Result<()> {
    let frameworks = select_frameworks(language, id)?;

    if json {
        return print_json(&frameworks);
    }
    if frameworks.is_empty() {
        println!("No frameworks found for {:?}", language.unwrap_or_default());
        return Ok(());
    }
    print!("{}", render_frameworks_text(&frameworks));
    Ok(())
}
