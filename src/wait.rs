use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

use tracing::{debug, trace};

/// Delay between successive existence passes while a wait is unsatisfied.
/// Fixed, not configurable; worst-case detection latency is one interval.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How a wait ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every path reached its target state.
    Satisfied,
    /// The deadline passed with at least one path still in the wrong state.
    TimedOut,
    /// A termination signal arrived mid-wait.
    Interrupted,
}

/// A single path plus the existence state it must reach.
#[derive(Clone, Debug)]
pub struct PathWait {
    path: PathBuf,
    until_gone: bool,
}

impl PathWait {
    /// Creates a wait that completes when `path` exists, or with
    /// `until_gone`, when it no longer exists.
    pub fn new<T>(path: T, until_gone: bool) -> Self
    where
        T: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            until_gone,
        }
    }

    /// Checks whether this path is currently in its target state.
    /// Non-blocking.
    pub fn satisfied(&self) -> bool {
        if self.until_gone {
            !entry_present(&self.path)
        } else {
            entry_present(&self.path)
        }
    }
}

/// Whether any filesystem entry is present at `path`.
///
/// Checked with `symlink_metadata` so a dangling symlink still counts as
/// present. Permission errors and every other access failure count as
/// absent, never as fatal.
fn entry_present(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Blocks until every wait is satisfied at once, the timeout elapses, or
/// `interrupted` flips to true.
///
/// A condition that already holds on the first pass returns immediately,
/// without a poll tick. The interrupt flag is checked first each iteration,
/// so a signal beats a deadline that expired during the same sleep.
pub fn wait_all(waits: &[PathWait], timeout: Option<Duration>, interrupted: &AtomicBool) -> Outcome {
    // One absolute deadline for the whole path set, fixed at entry so the
    // remaining time never drifts across iterations. An instant past the
    // representable range degrades to no deadline at all.
    let deadline = timeout.and_then(|limit| Instant::now().checked_add(limit));
    debug!(
        "waiting on {} path(s), deadline {}",
        waits.len(),
        if deadline.is_some() { "set" } else { "none" }
    );

    loop {
        let start = Instant::now();

        if interrupted.load(Ordering::Relaxed) {
            return Outcome::Interrupted;
        }

        if waits.iter().all(PathWait::satisfied) {
            return Outcome::Satisfied;
        }

        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                return Outcome::TimedOut;
            }
        }

        trace!("not yet satisfied; sleeping");
        let pass_time = start.elapsed();
        if POLL_INTERVAL > pass_time {
            std::thread::sleep(POLL_INTERVAL - pass_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::sync::Arc;

    use super::*;

    fn no_interrupt() -> AtomicBool {
        AtomicBool::new(false)
    }

    #[test]
    fn existing_paths_satisfy_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ready");
        File::create(&file).unwrap();

        let waits = [PathWait::new(dir.path(), false), PathWait::new(file, false)];
        let start = Instant::now();
        assert_eq!(
            wait_all(&waits, Some(Duration::from_secs(5)), &no_interrupt()),
            Outcome::Satisfied
        );
        assert!(start.elapsed() < POLL_INTERVAL);
    }

    #[test]
    fn absent_paths_satisfy_deletion_mode_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let waits = [PathWait::new(dir.path().join("gone"), true)];
        let start = Instant::now();
        assert_eq!(wait_all(&waits, None, &no_interrupt()), Outcome::Satisfied);
        assert!(start.elapsed() < POLL_INTERVAL);
    }

    #[test]
    fn missing_path_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let waits = [PathWait::new(dir.path().join("never"), false)];
        let timeout = Duration::from_millis(300);

        let start = Instant::now();
        assert_eq!(
            wait_all(&waits, Some(timeout), &no_interrupt()),
            Outcome::TimedOut
        );

        let elapsed = start.elapsed();
        assert!(elapsed >= timeout, "returned after {elapsed:?}");
        assert!(
            elapsed < timeout + 2 * POLL_INTERVAL,
            "returned after {elapsed:?}"
        );
    }

    #[test]
    fn one_wrong_path_blocks_the_set() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present");
        File::create(&present).unwrap();

        let waits = [
            PathWait::new(present, false),
            PathWait::new(dir.path().join("absent"), false),
        ];
        assert_eq!(
            wait_all(&waits, Some(Duration::from_millis(200)), &no_interrupt()),
            Outcome::TimedOut
        );
    }

    #[test]
    fn creation_mid_wait_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let late = dir.path().join("late");

        let writer = {
            let late = late.clone();
            std::thread::spawn(move || {
                std::thread::sleep(Duration::from_millis(250));
                File::create(late).unwrap();
            })
        };

        let waits = [PathWait::new(&late, false)];
        let start = Instant::now();
        assert_eq!(
            wait_all(&waits, Some(Duration::from_secs(5)), &no_interrupt()),
            Outcome::Satisfied
        );
        assert!(start.elapsed() < Duration::from_secs(1));
        writer.join().unwrap();
    }

    #[test]
    fn deletion_mid_wait_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let doomed = dir.path().join("doomed");
        File::create(&doomed).unwrap();

        let remover = {
            let doomed = doomed.clone();
            std::thread::spawn(move || {
                std::thread::sleep(Duration::from_millis(250));
                fs::remove_file(doomed).unwrap();
            })
        };

        let waits = [PathWait::new(&doomed, true)];
        assert_eq!(
            wait_all(&waits, Some(Duration::from_secs(5)), &no_interrupt()),
            Outcome::Satisfied
        );
        remover.join().unwrap();
    }

    #[test]
    fn interrupt_flag_wins_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let waits = [PathWait::new(dir.path().join("never"), false)];

        // Set before entry: not even one pass runs to completion.
        let interrupted = AtomicBool::new(true);
        let start = Instant::now();
        assert_eq!(
            wait_all(&waits, Some(Duration::from_secs(5)), &interrupted),
            Outcome::Interrupted
        );
        assert!(start.elapsed() < POLL_INTERVAL);
    }

    #[test]
    fn interrupt_mid_wait_unwinds_promptly() {
        let dir = tempfile::tempdir().unwrap();
        let waits = [PathWait::new(dir.path().join("never"), false)];

        let interrupted = Arc::new(AtomicBool::new(false));
        let trigger = {
            let interrupted = Arc::clone(&interrupted);
            std::thread::spawn(move || {
                std::thread::sleep(Duration::from_millis(250));
                interrupted.store(true, Ordering::Relaxed);
            })
        };

        let start = Instant::now();
        assert_eq!(wait_all(&waits, None, &interrupted), Outcome::Interrupted);
        assert!(start.elapsed() < Duration::from_secs(1));
        trigger.join().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_present() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("missing-target"), &link).unwrap();

        assert!(PathWait::new(&link, false).satisfied());
        assert!(!PathWait::new(&link, true).satisfied());
    }

    #[test]
    fn unrepresentable_deadline_degrades_to_no_limit() {
        // Duration::MAX overflows any Instant; the wait must still complete
        // on a satisfied condition instead of erroring or wrapping.
        let dir = tempfile::tempdir().unwrap();
        let waits = [PathWait::new(dir.path(), false)];
        assert_eq!(
            wait_all(&waits, Some(Duration::MAX), &no_interrupt()),
            Outcome::Satisfied
        );
    }
}
