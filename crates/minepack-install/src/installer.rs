use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::event::InstallEvent;
use crate::notify::ProgressNotifier;
use crate::plan::MigrationPlan;
use crate::source::AssetSource;

/// One-shot background installer for the bundled data archive.
///
/// A run stages the bundled asset into a scratch file, migrates legacy
/// user data, then stream-extracts the archive into the target directory,
/// strictly in that order on a single worker. Progress and the single
/// terminal outcome arrive as [`InstallEvent`]s; the host notifier is
/// driven alongside. There is no cancellation and no retry.
pub struct Installer<S, N> {
    source: S,
    notifier: Arc<N>,
    asset_name: String,
    legacy_dir: PathBuf,
    target_dir: PathBuf,
    plan: MigrationPlan,
}

impl<S, N> Installer<S, N>
where
    S: AssetSource,
    N: ProgressNotifier + 'static,
{
    pub fn new(
        source: S,
        notifier: N,
        asset_name: impl Into<String>,
        legacy_dir: impl Into<PathBuf>,
        target_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source,
            notifier: Arc::new(notifier),
            asset_name: asset_name.into(),
            legacy_dir: legacy_dir.into(),
            target_dir: target_dir.into(),
            plan: MigrationPlan::default(),
        }
    }

    pub fn with_plan(mut self, plan: MigrationPlan) -> Self {
        self.plan = plan;
        self
    }

    /// Run on the blocking pool of the current tokio runtime.
    ///
    /// The caller is never blocked; it observes the run through the
    /// returned event stream. Once started, the run proceeds to its
    /// terminal event.
    pub fn spawn(self) -> (JoinHandle<()>, UnboundedReceiver<InstallEvent>)
    where
        S: Send + 'static,
    {
        let (events, rx) = mpsc::unbounded_channel();
        let handle = tokio::task::spawn_blocking(move || self.run(&events));
        (handle, rx)
    }

    /// Execute the pipeline synchronously, emitting events on `events`.
    ///
    /// Exactly one terminal event is sent, after all progress events; the
    /// notifier is shown before any work and dismissed after the outcome.
    pub fn run(&self, events: &UnboundedSender<InstallEvent>) {
        self.notifier.show();

        match self.execute(events) {
            Ok(()) => {
                info!(target_dir = %self.target_dir.display(), "install finished");
                let _ = events.send(InstallEvent::Completed);
            }
            Err(e) => {
                warn!(error = %e, "install aborted");
                let _ = events.send(InstallEvent::Failed(e.to_string()));
            }
        }

        self.notifier.dismiss();
    }

    fn execute(&self, events: &UnboundedSender<InstallEvent>) -> Result<()> {
        let scratch = tempfile::Builder::new()
            .prefix("minepack-")
            .tempdir()
            .map_err(|e| Error::Stage {
                name: self.asset_name.clone(),
                source: e,
            })?;
        let staged = self.stage(scratch.path())?;

        if self.plan.migrate(&self.legacy_dir, &self.target_dir)? {
            info!(legacy = %self.legacy_dir.display(), "migrated legacy user data");
        }

        let total = self.probe(&staged);
        self.extract(&staged, total, events)?;

        // The staged copy is deleted once, after the whole extraction
        // loop; the scratch directory cleans itself up on drop as well.
        fs::remove_file(&staged).map_err(|e| Error::Cleanup { source: e })?;
        Ok(())
    }

    fn stage(&self, scratch: &Path) -> Result<PathBuf> {
        let staged = scratch.join(&self.asset_name);
        let stage_err = |source| Error::Stage {
            name: self.asset_name.clone(),
            source,
        };

        let mut asset = self.source.open(&self.asset_name).map_err(stage_err)?;
        let mut out = File::create(&staged).map_err(stage_err)?;
        io::copy(&mut asset, &mut out).map_err(stage_err)?;

        debug!(staged = %staged.display(), "staged bundled asset");
        Ok(staged)
    }

    /// Count the archive entries once, up front. A failed probe degrades
    /// progress reporting instead of aborting the run.
    fn probe(&self, staged: &Path) -> Option<usize> {
        let counted = File::open(staged)
            .map_err(minepack_archive::Error::from)
            .and_then(minepack_archive::count_entries);

        match counted {
            Ok(total) => Some(total),
            Err(e) => {
                warn!(error = %e, "could not size the staged archive");
                self.notifier.report_transient(&e.to_string());
                None
            }
        }
    }

    fn extract(
        &self,
        staged: &Path,
        total: Option<usize>,
        events: &UnboundedSender<InstallEvent>,
    ) -> Result<()> {
        let archive = File::open(staged).map_err(minepack_archive::Error::from)?;

        let events = events.clone();
        let notifier = Arc::clone(&self.notifier);
        let mut options = minepack_archive::ExtractOptions::default().on_progress(Arc::new(
            move |progress: minepack_archive::Progress| {
                let percent = progress.percent();
                notifier.update(percent);
                let _ = events.send(InstallEvent::Progress(percent));
            },
        ));
        if let Some(total) = total {
            options = options.expected_total_entries(total);
        }

        let report = minepack_archive::extract(archive, &self.target_dir, &options)?;
        debug!(
            entries = report.entry_count,
            bytes = report.total_bytes,
            "extraction complete"
        );
        Ok(())
    }
}
