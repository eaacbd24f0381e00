use std::io::{self, Write};

use bubblesort::{bubble_sort_passes, write_line};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries only the sorted line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut data = [43, 96, 69, 13, 21, 7, 66, 69, 99, 1];
    let passes = bubble_sort_passes(&mut data);
    debug!(len = data.len(), passes, "sorted");

    let mut stdout = io::stdout().lock();
    write_line(&mut stdout, &data)?;
    stdout.flush()?;
    Ok(())
}
