// system-tests/tests/helpers/artifacts.rs
// ============================================================================
// Module: Test Artifacts
// Description: Artifact helpers for system-tests.
// Purpose: Create per-test run roots and write deterministic summaries.
// Dependencies: system-tests, serde, serde_jcs
// ============================================================================

//! ## Overview
//! The reporter is attached once at suite start and flushed once at suite
//! end: cases are recorded as they complete, and `finish` writes the
//! canonical `summary.json` plus a markdown rendering. A `Drop` guard
//! writes a summary even when the test dies without finishing.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use serde_jcs;
use system_tests::config::SystemTestConfig;

/// One recorded case outcome.
#[derive(Debug, Clone, Serialize)]
pub struct CaseRecord {
    /// Case label, matching the suite's declaration order.
    pub case: String,
    /// Outcome: `pass` or `fail`.
    pub status: String,
    /// Failure detail for failed cases.
    pub detail: Option<String>,
}

/// Final summary written for one suite run.
#[derive(Debug, Serialize)]
struct SuiteSummary {
    /// Name of the test that produced this summary.
    test_name: String,
    /// Overall run status.
    status: String,
    /// Start timestamp in milliseconds since the epoch.
    started_at_ms: u128,
    /// End timestamp in milliseconds since the epoch.
    ended_at_ms: u128,
    /// Run duration in milliseconds.
    duration_ms: u128,
    /// Per-case outcomes in execution order.
    cases: Vec<CaseRecord>,
    /// Free-form notes from the suite.
    notes: Vec<String>,
    /// Artifact names written alongside the summary.
    artifacts: Vec<String>,
}

/// Returns the current wall-clock time in milliseconds.
fn now_millis() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

/// Returns the default artifact root for a test.
fn default_run_root(test_name: &str) -> PathBuf {
    let stamp = now_millis();
    PathBuf::from("target/system-tests").join(format!("run_{stamp}")).join(test_name)
}

/// Artifact manager for a single system-test.
#[derive(Debug, Clone)]
pub struct TestArtifacts {
    /// Root directory receiving this test's artifacts.
    root: PathBuf,
}

impl TestArtifacts {
    /// Creates the artifact root for a test.
    pub fn new(test_name: &str) -> io::Result<Self> {
        let config =
            SystemTestConfig::load().map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        let root = config.run_root.unwrap_or_else(|| default_run_root(test_name));
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
        })
    }

    /// Returns the root directory for the test artifacts.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a JSON artifact using canonical JCS serialization.
    pub fn write_json<T: Serialize>(&self, name: &str, value: &T) -> io::Result<PathBuf> {
        let path = self.root.join(name);
        let bytes = serde_jcs::to_vec(value)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Writes a text artifact with UTF-8 encoding.
    pub fn write_text(&self, name: &str, value: &str) -> io::Result<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, value.as_bytes())?;
        Ok(path)
    }
}

/// Reporter that records per-case outcomes and writes summaries even when a
/// test panics.
pub struct SuiteReporter {
    /// Artifact manager for this run.
    artifacts: TestArtifacts,
    /// Name of the owning test.
    test_name: String,
    /// Start timestamp in milliseconds since the epoch.
    started_at_ms: u128,
    /// Case outcomes recorded so far.
    cases: Vec<CaseRecord>,
    /// Set once `finish` has written the summary.
    finalized: bool,
}

impl SuiteReporter {
    /// Creates a reporter for the named test.
    pub fn new(test_name: &str) -> io::Result<Self> {
        Ok(Self {
            artifacts: TestArtifacts::new(test_name)?,
            test_name: test_name.to_string(),
            started_at_ms: now_millis(),
            cases: Vec::new(),
            finalized: false,
        })
    }

    /// Returns the artifact manager.
    pub fn artifacts(&self) -> &TestArtifacts {
        &self.artifacts
    }

    /// Records one case outcome.
    pub fn record_case(&mut self, case: &str, status: &str, detail: Option<String>) {
        self.cases.push(CaseRecord {
            case: case.to_string(),
            status: status.to_string(),
            detail,
        });
    }

    /// Writes the final summary for the test.
    pub fn finish(
        &mut self,
        status: &str,
        notes: Vec<String>,
        artifacts: Vec<String>,
    ) -> io::Result<()> {
        let ended_at_ms = now_millis();
        let summary = SuiteSummary {
            test_name: self.test_name.clone(),
            status: status.to_string(),
            started_at_ms: self.started_at_ms,
            ended_at_ms,
            duration_ms: ended_at_ms.saturating_sub(self.started_at_ms),
            cases: self.cases.clone(),
            notes,
            artifacts,
        };
        self.artifacts.write_json("summary.json", &summary)?;
        self.artifacts.write_text("summary.md", &summary_markdown(&summary))?;
        self.finalized = true;
        Ok(())
    }
}

impl Drop for SuiteReporter {
    fn drop(&mut self) {
        if self.finalized {
            return;
        }
        let status = if std::thread::panicking() { "panic" } else { "unknown" };
        let _ = self.finish(
            status,
            vec!["test terminated without explicit summary".to_string()],
            Vec::new(),
        );
    }
}

/// Renders a summary as markdown.
fn summary_markdown(summary: &SuiteSummary) -> String {
    let mut out = String::new();
    out.push_str("# System-Test Summary\n\n");
    out.push_str("## Status\n\n");
    out.push_str(&format!("- Test: {}\n", summary.test_name));
    out.push_str(&format!("- Status: {}\n", summary.status));
    out.push_str(&format!("- Duration (ms): {}\n", summary.duration_ms));
    out.push_str("\n## Cases\n\n");
    if summary.cases.is_empty() {
        out.push_str("- None\n");
    } else {
        for record in &summary.cases {
            match &record.detail {
                Some(detail) => {
                    out.push_str(&format!("- {}: {} ({detail})\n", record.case, record.status));
                }
                None => out.push_str(&format!("- {}: {}\n", record.case, record.status)),
            }
        }
    }
    out.push_str("\n## Notes\n\n");
    if summary.notes.is_empty() {
        out.push_str("- None\n");
    } else {
        for note in &summary.notes {
            out.push_str(&format!("- {}\n", note));
        }
    }
    out.push_str("\n## Artifacts\n\n");
    if summary.artifacts.is_empty() {
        out.push_str("- None\n");
    } else {
        for artifact in &summary.artifacts {
            out.push_str(&format!("- {}\n", artifact));
        }
    }
    out
}
