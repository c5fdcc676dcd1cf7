use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roadmap::catalog::{self, Catalog};
use roadmap::config::{get_config_path, RoadmapConfig, DATA_ENV};
use roadmap::query::{sort_stories, FilterParams, FilterStats, SortKey};
use roadmap::render::{self, OutputFormat, StoryView};

#[derive(Parser)]
#[command(name = "rdmp")]
#[command(about = "Query the product roadmap: stories, phases, progress and breakdowns")]
struct Cli {
    /// Catalog file to use instead of the bundled roadmap
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List stories matching every given filter
    Stories {
        #[command(flatten)]
        filters: FilterArgs,

        /// Ordering of the listed stories
        #[arg(long, value_enum, default_value = "definition")]
        sort: SortKey,

        /// Output format; defaults to the configured format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show one story with its phase and epic
    Story {
        /// Story reference, e.g. F1-013
        id: String,
    },
    /// Render phases, epics and stories as a tree
    Tree {
        /// Only render this phase
        #[arg(long)]
        phase: Option<String>,
    },
    /// Totals, progress and per-sprint / per-responsible breakdowns
    Stats {
        #[arg(short, long, value_enum, default_value = "table")]
        format: StatsFormat,
    },
    /// List phases with declared and actual point totals
    Phases,
    /// Check the catalog for consistency problems
    Validate,
    /// Update the saved configuration and print it
    Config {
        /// Catalog file to load by default
        #[arg(long)]
        data_path: Option<PathBuf>,

        /// Format used by `stories` when `--format` is not given
        #[arg(long, value_enum)]
        default_format: Option<OutputFormat>,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum StatsFormat {
    #[default]
    Table,
    Json,
}

/// Filter flags; `all` or an empty value means no constraint.
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Case-insensitive text over item, id, feature, note and functionality
    #[arg(short, long)]
    search: Option<String>,
    #[arg(long)]
    phase: Option<String>,
    #[arg(long)]
    sprint: Option<String>,
    /// e.g. "Backend Python", "Frontend 1"
    #[arg(long)]
    responsible: Option<String>,
    /// pending, in_progress or completed
    #[arg(long)]
    status: Option<String>,
    /// Core, UI, UX, Integration, Security, Tool, Compliance or Product
    #[arg(long = "type")]
    story_type: Option<String>,
    /// simple, medium, hard or very_hard
    #[arg(long)]
    complexity: Option<String>,
    /// Engineering or Product
    #[arg(long)]
    team: Option<String>,
}

impl From<FilterArgs> for FilterParams {
    fn from(args: FilterArgs) -> Self {
        FilterParams {
            search: args.search,
            phase: args.phase,
            sprint: args.sprint,
            responsible: args.responsible,
            status: args.status,
            story_type: args.story_type,
            complexity: args.complexity,
            team: args.team,
        }
    }
}

/// Initialize tracing on stderr so stdout stays clean for JSON and CSV.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "roadmap=info,rdmp=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Catalog::bundled().context("Bundled roadmap is invalid"),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = RoadmapConfig::load();
    let data_path = config.resolve_data_path(cli.data, std::env::var(DATA_ENV).ok());
    if let Some(path) = &data_path {
        tracing::info!("Using catalog {}", path.display());
    }

    let command = cli.command.unwrap_or(Commands::Stats {
        format: StatsFormat::default(),
    });

    match command {
        Commands::Stories {
            filters,
            sort,
            format,
        } => {
            let catalog = load_catalog(data_path.as_ref())?;
            let format = format.unwrap_or(config.default_format);

            let filter = FilterParams::from(filters).into_filter();
            let mut stories = catalog.filter(&filter);
            sort_stories(&mut stories, sort);
            tracing::debug!("{} stories matched", stories.len());

            match format {
                OutputFormat::Table => {
                    print!("{}", render::stories_table(&stories));
                    println!();
                    let stats = FilterStats::from_refs(&stories);
                    if filter.is_active() {
                        println!(
                            "{}",
                            render::filter_summary(&stats, catalog.all_stories().len())
                        );
                    } else {
                        println!("{} stories, {} pts", stats.total, stats.total_points);
                    }
                }
                OutputFormat::Json => println!("{}", render::stories_json(&stories)?),
                OutputFormat::Csv => println!("{}", render::export_csv(&stories)),
            }
        }
        Commands::Story { id } => {
            let catalog = load_catalog(data_path.as_ref())?;
            let found = catalog
                .find_story(&id)
                .ok_or_else(|| anyhow::anyhow!("Story {} not found", id))?;
            println!(
                "{}",
                serde_json::to_string_pretty(&StoryView::from(&found))?
            );
        }
        Commands::Tree { phase } => {
            let catalog = load_catalog(data_path.as_ref())?;
            match phase {
                Some(id) => {
                    let phase = catalog
                        .phase(&id)
                        .ok_or_else(|| anyhow::anyhow!("Phase {} not found", id))?;
                    print!("{}", render::render_tree(std::slice::from_ref(phase)));
                }
                None => print!("{}", render::render_tree(catalog.phases())),
            }
        }
        Commands::Stats { format } => {
            let catalog = load_catalog(data_path.as_ref())?;
            let stats = catalog.stats();
            match format {
                StatsFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
                StatsFormat::Table => print!("{}", render::stats_report(&stats)),
            }
        }
        Commands::Phases => {
            let catalog = load_catalog(data_path.as_ref())?;
            for phase in catalog.phases() {
                println!(
                    "{}  {}  {}  {} pts declared, {} pts actual, {}%",
                    phase.id,
                    phase.title,
                    phase.duration,
                    phase.story_points,
                    phase.actual_points(),
                    phase.progress()
                );
                for milestone in &phase.milestones {
                    println!("    - {}", milestone);
                }
            }
        }
        Commands::Validate => {
            // Parse without validating so every issue can be listed.
            let catalog = match &data_path {
                Some(path) => Catalog::from_path_unchecked(path)?,
                None => Catalog::from_json_str_unchecked(catalog::BUNDLED)?,
            };
            let issues = catalog::validate(&catalog);
            if issues.is_empty() {
                println!(
                    "Catalog is consistent: {} phases, {} stories, {} pts",
                    catalog.phases().len(),
                    catalog.all_stories().len(),
                    catalog.total_points()
                );
            } else {
                for issue in &issues {
                    println!("{}", issue);
                }
                anyhow::bail!("{} consistency issue(s) found", issues.len());
            }
        }
        Commands::Config {
            data_path,
            default_format,
        } => {
            let path = get_config_path()?;
            let mut updated = config;
            if let Some(data_path) = data_path {
                updated.data_path = Some(data_path);
            }
            if let Some(format) = default_format {
                updated.default_format = format;
            }
            updated.save_to(&path)?;
            tracing::info!("Saved config to {}", path.display());
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
    }

    Ok(())
}
