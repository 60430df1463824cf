//! Batch Extraction
//!
//! Sequentially extracts a palette from each image in a job, optionally
//! attaching the pairwise contrast matrix and the color-vision report to
//! every result. The runner is synchronous; the progress callback fires
//! inline after each image. Raw image bytes are validated when the job
//! runs, so one bad buffer fails the job while keeping the results that
//! were already produced.

use std::cmp::Reverse;

use serde::Serialize;

use crate::cvd::{CvdReport, simulate_cvd};
use crate::error::{Error, Result};
use crate::extract::{ExtractOptions, ImageBuffer, Quality, extract_palette};
use crate::palette::Palette;
use crate::project::slug_id;
use crate::wcag::{WcagReport, evaluate_palette_wcag};

/// Raw RGBA bytes awaiting validation
///
/// Buffers are validated at run time, not at job creation, so a job can
/// carry a bad image and fail cleanly when it is processed.
#[derive(Debug, Clone)]
pub struct BatchImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Job lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// Per-job extraction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOptions {
    /// Colors per extracted palette
    pub palette_size: usize,
    pub quality: Quality,
    /// Attach the pairwise WCAG matrix to each result
    pub include_wcag: bool,
    /// Attach the color-vision report to each result
    pub include_cvd: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            palette_size: 5,
            quality: Quality::default(),
            include_wcag: false,
            include_cvd: false,
        }
    }
}

/// Output for one processed image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub palette: Palette,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wcag: Option<Vec<WcagReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvd: Option<CvdReport>,
}

/// One batch job and everything it has produced so far
#[derive(Debug, Clone, Serialize)]
pub struct BatchJob {
    pub id: String,
    pub name: String,
    #[serde(skip)]
    pub images: Vec<BatchImage>,
    pub options: BatchOptions,
    pub status: BatchStatus,
    /// Integer percent, updated after each image
    pub progress: u8,
    pub results: Vec<BatchResult>,
    /// Epoch milliseconds, supplied by the caller
    pub created_at: i64,
}

/// In-memory job queue and executor
#[derive(Debug, Default)]
pub struct BatchRunner {
    jobs: Vec<BatchJob>,
    next_id: u64,
}

impl BatchRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a job and return its id
    pub fn create_job(
        &mut self,
        name: impl Into<String>,
        images: Vec<BatchImage>,
        options: BatchOptions,
        now_ms: i64,
    ) -> String {
        let name = name.into();
        self.next_id += 1;
        let id = slug_id(&name, "job", self.next_id);
        self.jobs.push(BatchJob {
            id: id.clone(),
            name,
            images,
            options,
            status: BatchStatus::Pending,
            progress: 0,
            results: Vec::new(),
            created_at: now_ms,
        });
        id
    }

    /// Process every image in a job, invoking `progress` with the percent
    /// after each one
    ///
    /// Re-running a job clears its previous results. A buffer that fails
    /// validation marks the job failed and stops processing; results from
    /// earlier images stay on the job. The error return is reserved for an
    /// unknown job id.
    pub fn run<F: FnMut(u8)>(&mut self, job_id: &str, mut progress: F) -> Result<&BatchJob> {
        let idx = self
            .jobs
            .iter()
            .position(|j| j.id == job_id)
            .ok_or_else(|| Error::JobNotFound(job_id.to_string()))?;

        let job = &mut self.jobs[idx];
        job.status = BatchStatus::Processing;
        job.progress = 0;
        job.results.clear();

        let total = job.images.len();
        for i in 0..total {
            let image = &job.images[i];
            let buffer = match ImageBuffer::new(image.width, image.height, image.data.clone()) {
                Ok(buffer) => buffer,
                Err(_) => {
                    job.status = BatchStatus::Failed;
                    return Ok(&self.jobs[idx]);
                }
            };

            let options = ExtractOptions {
                count: job.options.palette_size,
                quality: job.options.quality,
            };
            let palette = extract_palette(
                &buffer,
                format!("{} #{}", job.name, i + 1),
                &options,
                job.created_at,
            );
            let wcag = job
                .options
                .include_wcag
                .then(|| evaluate_palette_wcag(&palette.colors));
            let cvd = job.options.include_cvd.then(|| simulate_cvd(&palette.colors));
            job.results.push(BatchResult { palette, wcag, cvd });

            job.progress = (((i + 1) as f64 / total as f64) * 100.0).round() as u8;
            progress(job.progress);
        }

        job.status = BatchStatus::Completed;
        Ok(&self.jobs[idx])
    }

    /// Look up one job by id
    pub fn job(&self, id: &str) -> Option<&BatchJob> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// All jobs, most recently created first
    pub fn jobs(&self) -> Vec<&BatchJob> {
        let mut all: Vec<&BatchJob> = self.jobs.iter().collect();
        all.sort_by_key(|j| Reverse(j.created_at));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(rgba: [u8; 4]) -> BatchImage {
        BatchImage {
            width: 4,
            height: 4,
            data: rgba.repeat(16),
        }
    }

    fn truncated_image() -> BatchImage {
        BatchImage {
            width: 4,
            height: 4,
            data: vec![0; 63],
        }
    }

    #[test]
    fn test_run_completes_and_reports_progress() {
        let mut runner = BatchRunner::new();
        let id = runner.create_job(
            "Shoot",
            vec![solid_image([255, 0, 0, 255]), solid_image([0, 0, 255, 255])],
            BatchOptions::default(),
            1_000,
        );
        assert_eq!(id, "shoot-1");

        let mut ticks = Vec::new();
        let job = runner.run(&id, |p| ticks.push(p)).unwrap();

        assert_eq!(job.status, BatchStatus::Completed);
        assert_eq!(job.progress, 100);
        assert_eq!(ticks, vec![50, 100]);
        assert_eq!(job.results.len(), 2);
        assert_eq!(job.results[0].palette.name, "Shoot #1");
        assert_eq!(job.results[0].palette.colors[0].hex, "#FF0000");
        assert_eq!(job.results[1].palette.colors[0].hex, "#0000FF");
        assert!(job.results[0].wcag.is_none());
        assert!(job.results[0].cvd.is_none());
    }

    #[test]
    fn test_optional_reports_attach() {
        let mut runner = BatchRunner::new();
        let id = runner.create_job(
            "Audit",
            vec![solid_image([0, 128, 64, 255])],
            BatchOptions {
                palette_size: 3,
                include_wcag: true,
                include_cvd: true,
                ..Default::default()
            },
            1_000,
        );

        let job = runner.run(&id, |_| {}).unwrap();
        let result = &job.results[0];
        assert_eq!(result.palette.len(), 3);
        // C(3, 2) contrast pairs
        assert_eq!(result.wcag.as_ref().unwrap().len(), 3);
        assert_eq!(result.cvd.as_ref().unwrap().original.len(), 3);
    }

    #[test]
    fn test_bad_buffer_fails_job_but_keeps_results() {
        let mut runner = BatchRunner::new();
        let id = runner.create_job(
            "Mixed",
            vec![solid_image([10, 20, 30, 255]), truncated_image()],
            BatchOptions::default(),
            1_000,
        );

        let mut ticks = Vec::new();
        let job = runner.run(&id, |p| ticks.push(p)).unwrap();

        assert_eq!(job.status, BatchStatus::Failed);
        assert_eq!(job.results.len(), 1);
        assert_eq!(job.progress, 50);
        assert_eq!(ticks, vec![50]);
    }

    #[test]
    fn test_unknown_job_is_an_error() {
        let mut runner = BatchRunner::new();
        let err = runner.run("missing-1", |_| {}).unwrap_err();
        assert!(matches!(err, Error::JobNotFound(id) if id == "missing-1"));
    }

    #[test]
    fn test_jobs_sorted_by_creation() {
        let mut runner = BatchRunner::new();
        runner.create_job("First", vec![], BatchOptions::default(), 10);
        runner.create_job("Second", vec![], BatchOptions::default(), 20);

        let names: Vec<&str> = runner.jobs().iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn test_rerun_clears_previous_results() {
        let mut runner = BatchRunner::new();
        let id = runner.create_job(
            "Redo",
            vec![solid_image([200, 100, 50, 255])],
            BatchOptions::default(),
            1_000,
        );
        runner.run(&id, |_| {}).unwrap();
        let job = runner.run(&id, |_| {}).unwrap();
        assert_eq!(job.results.len(), 1);
        assert_eq!(job.status, BatchStatus::Completed);
    }

    #[test]
    fn test_job_serializes_without_image_bytes() {
        let mut runner = BatchRunner::new();
        let id = runner.create_job(
            "Shoot",
            vec![solid_image([255, 0, 0, 255])],
            BatchOptions::default(),
            1_000,
        );
        runner.run(&id, |_| {}).unwrap();

        let json = serde_json::to_value(runner.job(&id).unwrap()).unwrap();
        assert_eq!(json["id"], "shoot-1");
        assert_eq!(json["status"], "completed");
        assert!(json.get("images").is_none());
        assert_eq!(json["results"][0]["palette"]["name"], "Shoot #1");
    }
}
