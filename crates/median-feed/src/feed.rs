use std::fmt::{Display, Formatter};
use std::future::Future;

use median::{MedianError, MedianTracker};
use rand::Rng;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("invalid configuration: {0}")]
    Config(#[from] envy::Error),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: `{input}` is not a finite number")]
    Parse { line: usize, input: String },
    #[error(transparent)]
    Median(#[from] MedianError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub skipped: usize,
    pub median: Option<f64>,
    pub interrupted: bool,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.median {
            Some(median) => write!(f, "count: {} median: {}", self.count, median)?,
            None => write!(f, "no values")?,
        }
        if self.skipped > 0 {
            write!(f, " (skipped {} invalid lines)", self.skipped)?;
        }
        if self.interrupted {
            write!(f, " (interrupted)")?;
        }
        Ok(())
    }
}

/// Parses one input line; blank lines and `#` comments yield `None`.
/// NaN and infinities are rejected like any other non-number.
pub fn parse_line(line: usize, input: &str) -> Result<Option<f64>, FeedError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(FeedError::Parse {
            line,
            input: trimmed.to_string(),
        }),
    }
}

#[derive(Debug)]
pub struct Feed {
    tracker: MedianTracker<f64>,
    report_every: usize,
    skipped: usize,
}

impl Feed {
    pub fn new(report_every: usize) -> Self {
        Self {
            tracker: MedianTracker::new(),
            report_every,
            skipped: 0,
        }
    }

    pub fn push(&mut self, value: f64) -> Result<(), FeedError> {
        self.tracker.insert(value);
        let count = self.tracker.len();
        if self.report_every > 0 && count % self.report_every == 0 {
            let median = self.tracker.median()?;
            tracing::info!(count, median, "running median");
        }
        Ok(())
    }

    pub fn push_line(&mut self, line: usize, input: &str) -> Result<(), FeedError> {
        match parse_line(line, input) {
            Ok(Some(value)) => self.push(value),
            Ok(None) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "skipping input line");
                self.skipped += 1;
                Ok(())
            }
        }
    }

    pub fn summary(&self, interrupted: bool) -> Summary {
        Summary {
            count: self.tracker.len(),
            skipped: self.skipped,
            median: self.tracker.median_checked(),
            interrupted,
        }
    }
}

/**
Feeds every line of `reader` until it is exhausted or `shutdown` resolves.
Returns whether the shutdown cut the input short.
*/
pub async fn read_lines<R, S>(reader: R, feed: &mut Feed, shutdown: S) -> Result<bool, FeedError>
where
    R: AsyncBufRead + Unpin,
    S: Future<Output = ()>,
{
    let mut lines = reader.lines();
    let mut line = 0;
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                tracing::info!(line, "feed received shutdown signal");
                return Ok(true);
            }
            next = lines.next_line() => {
                match next? {
                    Some(input) => {
                        line += 1;
                        feed.push_line(line, &input)?;
                    }
                    None => return Ok(false),
                }
            }
        }
    }
}

/// Feeds `samples` values drawn uniformly from `0.0..1000.0`.
pub fn generate<R: Rng>(rng: &mut R, samples: usize, feed: &mut Feed) -> Result<(), FeedError> {
    for _ in 0..samples {
        feed.push(rng.gen_range(0.0..1000.0))?;
    }
    Ok(())
}
