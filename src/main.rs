use clap::{Parser, Subcommand};
use royalbit_redtable::cli;
use royalbit_redtable::core::ConvertOptions;
use royalbit_redtable::error::RedtableResult;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "redtable")]
#[command(about = "Convert spreadsheet tables to Redmine table markup.")]
#[command(long_about = "Redtable - spreadsheet → Redmine table markup
Reads .xlsx .xlsm .xlsb .xls .ods

COMMANDS:
  convert   - Convert a worksheet to Redmine markup
  sheets    - List worksheets in a workbook

CONTROL CELLS:
  (empty)   Horizontal merge: leave cells empty, write the value in the last one
  #HSPLIT   Row ends the current table; several tables per sheet
  #EMPTY    Cell stays blank
  #STR      Row is plain text; the next cell holds the text
  #VJOIN    Cell merges into the cell above

EXAMPLES:
  redtable convert report.ods                      # Print markup
  redtable convert report.xlsx --out table.txt     # Save markup
  redtable convert report.xlsx --bold-rows 1 --bold-columns 1
  redtable convert report.xlsx --sheet Q3 --watch  # Regenerate on save")]
#[command(version)]
struct Cli {
    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert a worksheet to Redmine table markup.

The sheet is split into separate tables at every #HSPLIT row; bold
settings apply to each table. Use --one-table when the sheet holds a
single table to skip splitting.

Without --out the markup is printed to standard output.")]
    /// Convert a worksheet to Redmine table markup
    Convert {
        /// Path to spreadsheet file
        file: PathBuf,

        /// File to save the markup to (prints to stdout when absent)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Number of top rows to make bold
        #[arg(long, visible_alias = "br", default_value_t = 0, env = "REDTABLE_BOLD_ROWS")]
        bold_rows: usize,

        /// Number of left columns to make bold
        #[arg(long, visible_alias = "bc", default_value_t = 0, env = "REDTABLE_BOLD_COLUMNS")]
        bold_columns: usize,

        /// The sheet holds one table; render it without splitting
        #[arg(short = 't', long, alias = "OneTable")]
        one_table: bool,

        /// Worksheet to convert (defaults to the first one)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Convert again whenever the file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// List worksheets in a workbook
    Sheets {
        /// Path to spreadsheet file
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "royalbit_redtable=debug" } else { "royalbit_redtable=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> RedtableResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            file,
            out,
            bold_rows,
            bold_columns,
            one_table,
            sheet,
            watch,
        } => {
            let options = ConvertOptions::new(bold_rows, bold_columns).one_table(one_table);
            cli::convert(file, out, sheet, options, watch)
        }

        Commands::Sheets { file } => cli::sheets(file),
    }
}
