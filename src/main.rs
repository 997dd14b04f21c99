use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};
use sparse_matrix::{
    read_matrix_with, write_matrix, MatrixError, MultiplyConfig, MultiplyStrategy, Operation,
    ParseOptions, SparseMatrix,
};

#[derive(Parser)]
#[command(name = "sparse-matrix")]
#[command(about = "Add, subtract or multiply two sparse matrix files")]
#[command(version)]
struct Cli {
    /// Left operand (matrix A)
    a: PathBuf,

    /// Right operand (matrix B)
    b: PathBuf,

    /// Where to write the result
    #[arg(short, long, default_value = "results.txt")]
    output: PathBuf,

    /// add, subtract, multiply or the menu number 1-3; prompts when omitted
    #[arg(long)]
    operation: Option<String>,

    /// Lookup strategy for the right operand of a product
    #[arg(long, value_enum, default_value_t = StrategyArg::RowIndexed)]
    strategy: StrategyArg,

    /// Split products into parallel row blocks
    #[arg(long)]
    parallel: bool,

    /// Warn about and drop entries outside the declared dimensions instead of failing
    #[arg(long)]
    skip_out_of_bounds: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    RowIndexed,
    ColumnScan,
}

impl From<StrategyArg> for MultiplyStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::RowIndexed => MultiplyStrategy::RowIndexed,
            StrategyArg::ColumnScan => MultiplyStrategy::ColumnScan,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(MatrixError::UnknownOperation(selection)) => {
            error!("unrecognized operation selection {:?}", selection);
            eprintln!("Invalid operation selected.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> sparse_matrix::Result<()> {
    let options = if cli.skip_out_of_bounds {
        ParseOptions::skipping_out_of_bounds()
    } else {
        ParseOptions::default()
    };

    let a: SparseMatrix<i64> = read_matrix_with(&cli.a, &options)?;
    let b: SparseMatrix<i64> = read_matrix_with(&cli.b, &options)?;

    let operation: Operation = match &cli.operation {
        Some(selection) => selection.parse()?,
        None => prompt_operation()?.parse()?,
    };

    let config = MultiplyConfig::default()
        .with_strategy(cli.strategy.into())
        .with_parallel(cli.parallel);

    info!("running {} on {:?} and {:?}", operation, a.shape(), b.shape());
    let result = operation.apply(&a, &b, &config)?;

    write_matrix(&cli.output, &result)?;
    println!(
        "{} result ({}x{}, {} non-zeros) written to {}",
        operation,
        result.n_rows(),
        result.n_cols(),
        result.nnz(),
        cli.output.display()
    );
    Ok(())
}

/// Prints the operation menu and reads one line from stdin
fn prompt_operation() -> sparse_matrix::Result<String> {
    let console_err = |e| MatrixError::Io {
        path: PathBuf::from("<console>"),
        source: e,
    };

    print!("{}", Operation::menu());
    io::stdout().flush().map_err(console_err)?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).map_err(console_err)?;
    Ok(line)
}
