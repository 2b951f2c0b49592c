use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context;
use olydb_model::{Competition, Database};

/// Destination of a command report: stdout, or a file given with `--output`.
pub struct Output {
    writer: BufWriter<Box<dyn Write>>,
    target: String,
}

impl Output {
    pub fn open(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let (writer, target): (Box<dyn Write>, _) = match path {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                (Box::new(file), path.display().to_string())
            }
            None => (Box::new(io::stdout().lock()), "stdout".to_owned()),
        };
        Ok(Self {
            writer: BufWriter::new(writer),
            target,
        })
    }

    /// Writes `value` as pretty JSON followed by a newline, then flushes.
    pub fn write_json<T>(mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        self.write_report("JSON", |out| {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)
        })
    }

    /// Runs `report` against this output, then flushes.
    pub fn write_report<F>(&mut self, what: &str, report: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        report(self)
            .and_then(|()| self.flush())
            .with_context(|| format!("Failed to write {what} to {}", self.target))
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Read a results snapshot from a JSON file
///
/// # Errors
///
/// Returns error if file cannot be opened or parsed
pub fn read_database<P>(path: P) -> anyhow::Result<Database>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let started = Instant::now();
    let db = Database::from_path(path)
        .with_context(|| format!("Failed to load database: {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        elapsed_ms = started.elapsed().as_millis(),
        "database loaded"
    );
    Ok(db)
}

/// Look up a competition by id, case-insensitively
pub fn find_competition<'a>(db: &'a Database, id: &str) -> anyhow::Result<&'a Competition> {
    if let Some(competition) = db.competition(id) {
        return Ok(competition);
    }
    db.competitions
        .values()
        .find(|c| c.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| {
            let mut known = db
                .competitions_sorted()
                .iter()
                .map(|c| c.id.as_str())
                .take(5)
                .collect::<Vec<_>>()
                .join(", ");
            if db.competitions.len() > 5 {
                known.push_str(", ...");
            }
            anyhow::anyhow!("Competition {id} not found (known: {known})")
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("olydb-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_write_json_to_file() {
        let path = temp_path("report.json");
        let output = Output::open(Some(path.clone())).unwrap();
        output.write_json(&[1, 2]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(text, "[\n  1,\n  2\n]\n");
    }

    #[test]
    fn test_write_report_error_names_target() {
        let path = temp_path("failing.txt");
        let mut output = Output::open(Some(path.clone())).unwrap();
        let err = output
            .write_report("summary", |_| Err(io::Error::other("disk full")))
            .unwrap_err();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            err.to_string(),
            format!("Failed to write summary to {}", path.display())
        );
    }
}
