use crate::{
    info,
    plex::{PlexApi, PlexError},
    success,
    types::RefreshTarget,
    warning,
};

/// Receives the progress notifications of [`refresh_all`].
pub trait RefreshReporter {
    /// Called right before the refresh request of `target` is sent.
    fn refreshing(&mut self, target: &RefreshTarget);

    /// Called when the refresh request of `target` failed.
    fn failed(&mut self, target: &RefreshTarget, error: &PlexError);

    /// Called once after the last target, whatever the individual outcomes.
    fn finished(&mut self);
}

/// Prints refresh progress to the console.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    attempted: usize,
    failed: usize,
}

impl ConsoleReporter {
    /// Number of refresh requests started so far.
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Number of refresh requests that failed so far.
    pub fn failures(&self) -> usize {
        self.failed
    }
}

impl RefreshReporter for ConsoleReporter {
    fn refreshing(&mut self, target: &RefreshTarget) {
        self.attempted += 1;
        info!("refreshing {}", target.label);
    }

    fn failed(&mut self, target: &RefreshTarget, error: &PlexError) {
        self.failed += 1;
        warning!("Failed to refresh {}: {}", target.label, error);
    }

    fn finished(&mut self) {
        success!("refresh success");
        if self.failed > 0 {
            warning!("{} of {} refreshes failed", self.failed, self.attempted);
        }
    }
}

/// Refreshes the metadata of every target, one request at a time.
///
/// Each request is awaited before the next one is sent, so the server never
/// sees two refreshes from this tool at once and the console output follows
/// the order of `targets`. A failed request is reported and the loop moves on
/// to the next target.
///
/// # Example
///
/// ```
/// let targets = aggregate(&items, RefreshMode::Movies)?;
/// refresh_all(&client, &targets, &mut ConsoleReporter::default()).await;
/// ```
pub async fn refresh_all<A, R>(api: &A, targets: &[RefreshTarget], reporter: &mut R)
where
    A: PlexApi + ?Sized,
    R: RefreshReporter,
{
    for target in targets {
        reporter.refreshing(target);
        if let Err(e) = api.refresh_metadata(&target.id).await {
            reporter.failed(target, &e);
        }
    }

    reporter.finished();
}
