//! Command-line interface orchestration for the ramita sampler.
//!
//! Offers a single `sample` command: build the adjacency matrix of a grid on
//! a chosen surface, draw a spanning tree (plus optional extra edges), and
//! render the result as matrix rows or an edge list.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use ramita_core::{SampledTree, SamplerBuilder, SamplerError};
use ramita_providers_grid::{GridError, GridGraphProvider, SurfaceTopology};

const DEFAULT_GRID_SIZE: usize = 4;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "ramita", about = "Sample random spanning trees of surface grids.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Sample a spanning tree (plus extra edges) of a surface grid.
    Sample(SampleCommand),
}

/// Options accepted by the `sample` command.
#[derive(Debug, Args, Clone)]
pub struct SampleCommand {
    /// Side length of the square grid.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Surface the grid is embedded on.
    #[arg(long, value_enum, default_value = "plane")]
    pub topology: TopologyArg,

    /// Extra edges to add on top of the spanning tree (clamped to capacity).
    #[arg(long = "extra-edges", default_value_t = 0)]
    pub extra_edges: usize,

    /// Fixed RNG seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format for the sampled graph.
    #[arg(long, value_enum, default_value = "matrix")]
    pub format: OutputFormat,
}

/// Surface topologies selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TopologyArg {
    /// Flat grid with a free boundary.
    Plane,
    /// Straight vertical seam.
    Cylinder,
    /// Straight vertical and horizontal seams.
    Torus,
    /// Reversed vertical seam.
    MoebiusBand,
    /// Straight vertical seam, reversed horizontal seam.
    KleinBottle,
    /// Both seams reversed.
    ProjectivePlane,
    /// Vertical seam plus pole vertices.
    Sphere,
}

impl From<TopologyArg> for SurfaceTopology {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::Plane => Self::Plane,
            TopologyArg::Cylinder => Self::Cylinder,
            TopologyArg::Torus => Self::Torus,
            TopologyArg::MoebiusBand => Self::MoebiusBand,
            TopologyArg::KleinBottle => Self::KleinBottle,
            TopologyArg::ProjectivePlane => Self::ProjectivePlane,
            TopologyArg::Sphere => Self::Sphere,
        }
    }
}

/// How the sampled adjacency matrix is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Space-separated 0/1 rows.
    Matrix,
    /// One `u v` pair per line, sorted.
    Edges,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Grid construction failed.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Sampling failed.
    #[error(transparent)]
    Sampler(#[from] SamplerError),
}

impl CliError {
    /// Returns the stable code of the underlying error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Grid(error) => error.code().as_str(),
            Self::Sampler(error) => error.code().as_str(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct SampleSummary {
    /// The surface the grid was embedded on.
    pub topology: SurfaceTopology,
    /// Side length of the sampled grid.
    pub size: usize,
    /// The sampled tree plus extras.
    pub tree: SampledTree,
    /// Requested output format.
    pub format: OutputFormat,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when grid construction or sampling fails.
///
/// # Examples
/// ```
/// use ramita_cli::cli::{Cli, Command, OutputFormat, SampleCommand, TopologyArg, run_cli};
///
/// let cli = Cli {
///     command: Command::Sample(SampleCommand {
///         size: 3,
///         topology: TopologyArg::Torus,
///         extra_edges: 2,
///         seed: Some(9),
///         format: OutputFormat::Edges,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tree.tree_edge_count(), 8);
/// assert_eq!(summary.tree.extra_edge_count(), 2);
/// # Ok::<(), ramita_cli::cli::CliError>(())
/// ```
pub fn run_cli(cli: Cli) -> Result<SampleSummary, CliError> {
    match cli.command {
        Command::Sample(sample) => run_sample(sample),
    }
}

fn run_sample(command: SampleCommand) -> Result<SampleSummary, CliError> {
    let topology = SurfaceTopology::from(command.topology);
    let provider = GridGraphProvider::new(command.size, topology)?;
    let graph = provider.adjacency_matrix()?;

    let mut builder = SamplerBuilder::new().with_extra_edges(command.extra_edges);
    if let Some(seed) = command.seed {
        builder = builder.with_seed(seed);
    }
    let tree = builder.build().sample(&graph)?;

    Ok(SampleSummary {
        topology,
        size: command.size,
        tree,
        format: command.format,
    })
}

/// Renders `summary` to `writer`: a header with the counts, then the graph
/// in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use ramita_cli::cli::{Cli, Command, OutputFormat, SampleCommand, TopologyArg};
/// use ramita_cli::cli::{render_summary, run_cli};
///
/// let cli = Cli {
///     command: Command::Sample(SampleCommand {
///         size: 2,
///         topology: TopologyArg::Plane,
///         extra_edges: 0,
///         seed: Some(1),
///         format: OutputFormat::Edges,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner()).expect("output is UTF-8");
/// assert!(text.starts_with("topology: plane"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &SampleSummary, mut writer: impl Write) -> io::Result<()> {
    let matrix = summary.tree.matrix();
    writeln!(writer, "topology: {}", summary.topology)?;
    writeln!(writer, "size: {}", summary.size)?;
    writeln!(writer, "vertices: {}", matrix.order())?;
    writeln!(writer, "tree edges: {}", summary.tree.tree_edge_count())?;
    writeln!(writer, "extra edges: {}", summary.tree.extra_edge_count())?;

    match summary.format {
        OutputFormat::Matrix => {
            for row in matrix.rows() {
                let cells: Vec<String> = row.iter().map(u8::to_string).collect();
                writeln!(writer, "{}", cells.join(" "))?;
            }
        }
        OutputFormat::Edges => {
            for u in 0..matrix.order() {
                for v in (u + 1)..matrix.order() {
                    if matrix.has_edge(u, v) {
                        writeln!(writer, "{u} {v}")?;
                    }
                }
            }
        }
    }
    Ok(())
}
