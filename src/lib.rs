use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context};
use rand::{distributions::Alphanumeric, rngs::SmallRng, Rng, SeedableRng};

pub const VERSION: &str = "1.0";

pub const DEFAULT_FILE_NAME: &str = "largefile.txt";
pub const DEFAULT_LINE_COUNT: u64 = 10;
pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const DEFAULT_MAX_LENGTH: usize = 1000;

const DATA_DIR: &str = "data";

/// Builds a random alphanumeric string.
///
/// An upper bound `u` is drawn uniformly from `[0, max)` and one character is
/// emitted for every integer in `min..=u`, so the result is empty whenever
/// `u < min` and at most `max - min` long. Fails if `max` is zero.
pub fn random_string<R: Rng + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
) -> anyhow::Result<String> {
    ensure!(max > 0, "maximum length must be positive");
    let upper = rng.gen_range(0..max);
    Ok((min..=upper)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub output_path: PathBuf,
    pub line_count: u64,
    pub min_length: usize,
    pub max_length: usize,
}

impl Config {
    pub fn new<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
            line_count: DEFAULT_LINE_COUNT,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.max_length > 0,
            "maximum line length must be at least 1"
        );
        ensure!(
            self.min_length <= self.max_length,
            "minimum line length ({}) exceeds maximum line length ({})",
            self.min_length,
            self.max_length
        );
        Ok(())
    }
}

fn has_separator(file_name: &str) -> bool {
    file_name.chars().any(std::path::is_separator)
}

/// Names containing a path separator are used verbatim.
pub fn resolve_output_path(file_name: &str) -> anyhow::Result<PathBuf> {
    if has_separator(file_name) {
        return Ok(PathBuf::from(file_name));
    }
    let exe = std::env::current_exe().context("failed to locate the running executable")?;
    let program_dir = exe
        .parent()
        .with_context(|| format!("executable {:?} has no parent directory", exe))?;
    Ok(resolve_output_path_from(program_dir, file_name))
}

// `<program_dir>/../data` when that is a directory, else `program_dir`.
pub fn resolve_output_path_from(program_dir: &Path, file_name: &str) -> PathBuf {
    let dir = program_dir
        .parent()
        .map(|parent| parent.join(DATA_DIR))
        .filter(|data| data.is_dir())
        .unwrap_or_else(|| program_dir.to_path_buf());
    dir.join(file_name)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub path: PathBuf,
    pub lines: u64,
    pub bytes: u64,
}

pub struct FileGenerator {
    config: Config,
}

impl FileGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn write_lines<W: Write, R: Rng + ?Sized>(
        &self,
        out: &mut W,
        rng: &mut R,
    ) -> anyhow::Result<u64> {
        let Config {
            line_count,
            min_length,
            max_length,
            ..
        } = self.config;
        for j in 1..=line_count {
            let payload = random_string(rng, min_length, max_length)?;
            writeln!(out, "{}_{}_{}", j, payload, payload.len())?;
        }
        Ok(line_count)
    }

    pub fn generate(&self) -> anyhow::Result<Summary> {
        self.generate_with(&mut SmallRng::from_entropy())
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> anyhow::Result<Summary> {
        let path = &self.config.output_path;
        tracing::debug!(config = ?self.config, "generating");

        let file = File::create(path).with_context(|| format!("failed to create {:?}", path))?;
        let mut out = BufWriter::new(file);
        let lines = self
            .write_lines(&mut out, rng)
            .with_context(|| format!("failed to write {:?}", path))?;
        out.flush()
            .with_context(|| format!("failed to flush {:?}", path))?;
        let bytes = out.get_ref().metadata()?.len();

        tracing::info!(path = ?path, lines, bytes, "generated");
        Ok(Summary {
            path: path.clone(),
            lines,
            bytes,
        })
    }
}
