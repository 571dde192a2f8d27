use clap::{error::ErrorKind, CommandFactory, Parser};
use linegen::{
    resolve_output_path, Config, FileGenerator, DEFAULT_FILE_NAME, DEFAULT_LINE_COUNT,
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, VERSION,
};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "generate_file",
    about = "Writes lines of the form {line number}_{payload}_{payload length}",
    disable_version_flag = true
)]
struct Args {
    /// Output file name or path
    #[arg(short = 'o', long = "output_file", value_name = "FILE", default_value = DEFAULT_FILE_NAME)]
    output_file: String,

    /// Number of lines to generate
    #[arg(short = 'l', long = "output_lines", value_name = "N", default_value_t = DEFAULT_LINE_COUNT)]
    output_lines: u64,

    /// Lower bound of the payload range
    #[arg(short = 'm', long = "min_line_length", value_name = "N", default_value_t = DEFAULT_MIN_LENGTH)]
    min_line_length: usize,

    /// Upper bound of the payload range; payloads are at most max - min long
    #[arg(short = 'M', long = "max_line_length", value_name = "N", default_value_t = DEFAULT_MAX_LENGTH)]
    max_line_length: usize,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print version
    #[arg(long)]
    version: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.version {
        println!("{}", VERSION);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let config = Config {
        output_path: resolve_output_path(&args.output_file)?,
        line_count: args.output_lines,
        min_length: args.min_line_length,
        max_length: args.max_line_length,
    };
    if let Err(err) = config.validate() {
        Args::command()
            .error(ErrorKind::ValueValidation, err)
            .exit();
    }

    FileGenerator::new(config).generate()?;
    Ok(())
}
