//! File logging for the CLI
//!
//! Everything goes to `finquest.log` in the data directory; the terminal is
//! left to the game output.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "finquest.log";

const ROTATED_MARKER: &[u8] = b"--- earlier entries trimmed ---\n";

/// A size-capped log file in the data directory.
struct LogFile {
    path: PathBuf,
    /// Size at which the file gets trimmed
    max_bytes: u64,
    /// Tail length kept by a trim
    keep_bytes: u64,
}

impl LogFile {
    fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(LOG_FILE_NAME),
            max_bytes: 5 * 1024 * 1024,
            keep_bytes: 1024 * 1024,
        }
    }

    fn needs_trim(&self) -> io::Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() > self.max_bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Cut the file down to its newest whole lines. Returns false when the
    /// file was already under the cap.
    fn trim(&self) -> io::Result<bool> {
        if !self.needs_trim()? {
            return Ok(false);
        }

        let tail = {
            let mut file = File::open(&self.path)?;
            let len = file.metadata()?.len();
            file.seek(SeekFrom::Start(len.saturating_sub(self.keep_bytes)))?;
            let mut buf = Vec::with_capacity(self.keep_bytes as usize);
            file.read_to_end(&mut buf)?;
            buf
        };
        let first_whole_line = tail
            .iter()
            .position(|&b| b == b'\n')
            .map_or(tail.len(), |i| i + 1);

        let mut out = File::create(&self.path)?;
        out.write_all(ROTATED_MARKER)?;
        out.write_all(&tail[first_whole_line..])?;
        Ok(true)
    }

    fn open_append(&self) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(&self.path)
    }
}

/// Route `tracing` output into the data directory's log file.
///
/// `RUST_LOG` overrides `level` when set. Calling this twice is an error.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log = LogFile::in_dir(data_dir);
    let trimmed = log.trim().unwrap_or_else(|e| {
        eprintln!("Warning: could not trim {}: {e}", log.path.display());
        false
    });
    let file = log.open_append()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("finquest={level},finquest_core=warn")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(path = %log.path.display(), trimmed, "logging to file");
    Ok(())
}
