//! gostyle: GO ID selections for SwissBioPics diagrams.
//!
//! gostyle manages a small list of GO IDs, each with a fill color and an
//! opacity, and turns it into the stylesheet and markup that drive the
//! `sib-swissbiopics-sl` web component. Selections are exchanged as
//! tab-separated text, the same shape a spreadsheet copy produces.
//!
//! # Modules
//!
//! - [`model`]: GO IDs, colors, opacities and the [`model::AnnotationSet`]
//! - [`tsv`]: Tab-separated import and export
//! - [`style`]: Per-record CSS rules
//! - [`page`]: Embedding snippet for the visualization component
//! - [`session`]: Session state and the command set applied to it
//! - [`error`]: Error types for gostyle operations

pub mod error;
pub mod model;
pub mod page;
pub mod session;
pub mod style;
pub mod tsv;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

pub use error::GoStyleError;

use model::{AnnotationRecord, AnnotationSet, GoId, HexColor, Opacity, TaxonomyId};
use session::{Command, Outcome, Session};
use style::{Stroke, StyleOptions};

/// The gostyle CLI application.
#[derive(Parser)]
#[command(name = "gostyle")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the selection as a table or JSON.
    Show(ShowArgs),
    /// Print the comma-separated GO ID list.
    Ids(InputArgs),
    /// Print the stylesheet for the selection.
    Css(CssArgs),
    /// Print the HTML snippet embedding the SwissBioPics component.
    Html(HtmlArgs),
    /// Bulk-import one or more pasted tables and print the merged selection.
    Import(ImportArgs),
    /// Add a GO ID and print the resulting selection.
    Add(AddArgs),
    /// Change a GO ID's color and opacity and print the resulting selection.
    Edit(EditArgs),
    /// Remove a GO ID and print the resulting selection.
    Delete(DeleteArgs),
}

/// A selection read from a tab-separated file.
#[derive(clap::Args)]
struct InputArgs {
    /// Selection file ('-' for stdin).
    input: PathBuf,
}

/// Options shared by commands that render styles.
#[derive(clap::Args)]
struct StyleArgs {
    /// Stroke color for outlined ('.coloured') regions.
    /// A hex color or a CSS color name.
    #[arg(long, env = "GOSTYLE_STROKE", default_value = "black")]
    stroke: Stroke,
}

impl StyleArgs {
    fn options(&self) -> StyleOptions {
        StyleOptions {
            stroke: self.stroke.clone(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ShowFormat {
    Text,
    Json,
}

/// Arguments for the show subcommand.
#[derive(clap::Args)]
struct ShowArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    output: ShowFormat,
}

/// Arguments for the css subcommand.
#[derive(clap::Args)]
struct CssArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    style: StyleArgs,

    /// Print the number of rules to stderr.
    #[arg(long)]
    stats: bool,
}

/// Arguments for the html subcommand.
#[derive(clap::Args)]
struct HtmlArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    style: StyleArgs,

    /// Taxonomy ID of the organism diagram.
    #[arg(long, env = "GOSTYLE_TAX_ID", default_value = "9606")]
    tax_id: TaxonomyId,
}

/// Arguments for the import subcommand.
#[derive(clap::Args)]
struct ImportArgs {
    /// Tables to import, applied in order ('-' for stdin).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write the merged selection here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print an import report for each input to stderr.
    #[arg(long)]
    report: bool,
}

/// Arguments for the add subcommand.
#[derive(clap::Args)]
struct AddArgs {
    /// Existing selection to add to; starts empty when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// GO ID (e.g. 5634 or GO:0005634).
    #[arg(long)]
    id: GoId,

    /// Fill color as hex, with or without '#'.
    #[arg(long, default_value = "#FF0000")]
    color: HexColor,

    /// Fill opacity between 0 and 1.
    #[arg(long, default_value = "0.5")]
    opacity: Opacity,

    /// Write the selection here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Arguments for the edit subcommand.
#[derive(clap::Args)]
struct EditArgs {
    /// Selection containing the GO ID.
    #[arg(short, long)]
    input: PathBuf,

    /// GO ID to change.
    #[arg(long)]
    id: GoId,

    /// New fill color.
    #[arg(long)]
    color: HexColor,

    /// New fill opacity.
    #[arg(long)]
    opacity: Opacity,

    /// Write the selection here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Arguments for the delete subcommand.
#[derive(clap::Args)]
struct DeleteArgs {
    /// Selection containing the GO ID.
    #[arg(short, long)]
    input: PathBuf,

    /// GO ID to remove.
    #[arg(long)]
    id: GoId,

    /// Write the selection here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Run the gostyle CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), GoStyleError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Show(args)) => run_show(args),
        Some(Commands::Ids(args)) => {
            let set = load_selection(&args.input)?;
            if set.is_empty() {
                warn_no_selection();
                return Ok(());
            }
            println!("{}", set.id_list());
            Ok(())
        }
        Some(Commands::Css(args)) => run_css(args),
        Some(Commands::Html(args)) => run_html(args),
        Some(Commands::Import(args)) => run_import(args),
        Some(Commands::Add(args)) => {
            let set = match &args.input {
                Some(path) => load_selection(path)?,
                None => AnnotationSet::new(),
            };
            let record = AnnotationRecord::new(args.id, args.color, args.opacity);
            apply_and_write(set, Command::Add(record), args.output.as_deref())
        }
        Some(Commands::Edit(args)) => {
            let set = load_selection(&args.input)?;
            let command = Command::Edit {
                id: args.id,
                color: args.color,
                opacity: args.opacity,
            };
            apply_and_write(set, command, args.output.as_deref())
        }
        Some(Commands::Delete(args)) => {
            let set = load_selection(&args.input)?;
            apply_and_write(set, Command::Delete(args.id), args.output.as_deref())
        }
        None => {
            println!("gostyle {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Build GO ID selections for SwissBioPics diagrams.");
            println!();
            println!("Run 'gostyle --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the show subcommand.
fn run_show(args: ShowArgs) -> Result<(), GoStyleError> {
    let set = load_selection(&args.input.input)?;

    match args.output {
        ShowFormat::Json => {
            let json = serde_json::to_string_pretty(&set)
                .map_err(|source| GoStyleError::JsonSerialize { source })?;
            println!("{}", json);
        }
        ShowFormat::Text => {
            if set.is_empty() {
                println!("No GO IDs to display");
                return Ok(());
            }
            println!("{:<10}  {:<9}  {}", "ID", "Color", "Opacity");
            for record in &set {
                println!(
                    "{:<10}  {:<9}  {}",
                    record.id.to_string(),
                    record.color.as_str(),
                    record.opacity
                );
            }
            println!();
            println!("{} GO ID(s) selected", set.len());
        }
    }

    Ok(())
}

/// Execute the css subcommand.
fn run_css(args: CssArgs) -> Result<(), GoStyleError> {
    let set = load_selection(&args.input.input)?;
    if set.is_empty() {
        warn_no_selection();
        return Ok(());
    }
    let css = set.render_styles(&args.style.options());

    print!("{}", css);
    if args.stats {
        eprintln!(
            "{} rule(s) for {} GO ID(s)",
            style::rule_count(&css),
            set.len()
        );
    }
    Ok(())
}

/// Execute the html subcommand.
fn run_html(args: HtmlArgs) -> Result<(), GoStyleError> {
    let set = load_selection(&args.input.input)?;
    let session = Session::with_selection(set, args.tax_id);
    let surface = session.surface(&args.style.options())?;

    print!("{}", page::render_page(&surface));
    Ok(())
}

/// Execute the import subcommand.
fn run_import(args: ImportArgs) -> Result<(), GoStyleError> {
    let mut session = Session::new();

    for input in &args.inputs {
        let text = read_input(input)?;
        if let Outcome::Imported(report) = session.apply(Command::Paste(text))? {
            if args.report {
                eprint!("{}: {}", input.display(), report);
            } else if !report.is_clean() {
                eprintln!(
                    "{}: {} notice(s), rerun with --report for details",
                    input.display(),
                    report.issues.len()
                );
            }
        }
    }

    let text = session.selection().export()?;
    write_output(args.output.as_deref(), &text)
}

/// Applies one command to a selection and writes the exported result.
fn apply_and_write(
    set: AnnotationSet,
    command: Command,
    output: Option<&Path>,
) -> Result<(), GoStyleError> {
    let mut session = Session::with_selection(set, TaxonomyId::default());
    if let Outcome::Unchanged = session.apply(command)? {
        eprintln!("Selection unchanged");
    }
    let text = session.into_selection().export()?;
    write_output(output, &text)
}

/// Tells the user there is nothing to render; not an error for `ids`/`css`.
fn warn_no_selection() {
    eprintln!("Warning: {}", GoStyleError::NoSelection);
}

/// Reads a selection file, or stdin when the path is `-`.
fn load_selection(path: &Path) -> Result<AnnotationSet, GoStyleError> {
    let text = read_input(path)?;
    tsv::from_tsv_str(&text)
}

fn read_input(path: &Path) -> Result<String, GoStyleError> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<(), GoStyleError> {
    match path {
        Some(path) => fs::write(path, text)?,
        None => print!("{}", text),
    }
    Ok(())
}
