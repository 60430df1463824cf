//! Project and batch workflows end to end
//!
//! The engine-side unit tests pin each store operation in isolation;
//! these runs chain the real pipeline: synthetic images through a batch
//! job, extracted palettes filed into projects, and the reports a job
//! attaches compared against direct evaluation of the same palette.

use oxpal_core::{
    BatchImage, BatchOptions, BatchRunner, BatchStatus, ExtractOptions, Palette, ProjectStore,
    Quality, evaluate_palette_wcag, extract_with, simulate_cvd,
};
use pal_tests::corpus::FIXTURE_STAMP;
use pal_tests::patterns::{TestPattern, generate_pattern, image};

const RED: [u8; 3] = [255, 0, 0];
const GREEN: [u8; 3] = [0, 255, 0];
const BLUE: [u8; 3] = [0, 0, 255];
const WHITE: [u8; 3] = [255, 255, 255];

fn quadrant_image() -> BatchImage {
    BatchImage {
        width: 20,
        height: 20,
        data: generate_pattern(TestPattern::Quadrants([RED, GREEN, BLUE, WHITE]), 20, 20),
    }
}

#[test]
fn batch_results_file_into_a_project() {
    let images = vec![
        quadrant_image(),
        BatchImage {
            width: 12,
            height: 12,
            data: generate_pattern(TestPattern::SkinTones, 12, 12),
        },
    ];
    let mut runner = BatchRunner::new();
    let job_id = runner.create_job(
        "Moodboard",
        images,
        BatchOptions {
            palette_size: 4,
            quality: Quality::Exact,
            ..Default::default()
        },
        FIXTURE_STAMP,
    );
    assert_eq!(job_id, "moodboard-1");

    let mut ticks = Vec::new();
    let job = runner.run(&job_id, |p| ticks.push(p)).unwrap();
    assert_eq!(job.status, BatchStatus::Completed);
    assert_eq!(ticks, vec![50, 100]);
    assert_eq!(job.results.len(), 2);

    let palettes: Vec<Palette> = job.results.iter().map(|r| r.palette.clone()).collect();
    assert_eq!(palettes[0].name, "Moodboard #1");
    assert_eq!(palettes[0].created_at, FIXTURE_STAMP);
    assert_eq!(palettes[1].name, "Moodboard #2");
    assert_eq!(palettes[1].len(), 4);

    // The job extracts exactly what a direct call would
    let direct = extract_with(
        &image(TestPattern::Quadrants([RED, GREEN, BLUE, WHITE]), 20, 20),
        &ExtractOptions {
            count: 4,
            quality: Quality::Exact,
        },
    );
    let batch_hexes: Vec<&str> = palettes[0].colors.iter().map(|c| c.hex.as_str()).collect();
    let direct_hexes: Vec<&str> = direct.iter().map(|c| c.hex.as_str()).collect();
    assert_eq!(batch_hexes, direct_hexes);
    assert_eq!(batch_hexes[0], "#FF0000");

    let mut store = ProjectStore::new();
    let project_id = store
        .create_project(
            "Client Refresh",
            "landing page rework",
            &["web"],
            FIXTURE_STAMP,
        )
        .id
        .clone();
    for palette in palettes {
        store
            .add_palette(&project_id, palette, FIXTURE_STAMP + 1)
            .unwrap();
    }

    let project = store.project(&project_id).unwrap();
    assert_eq!(project.palettes.len(), 2);
    assert_eq!(project.updated_at, FIXTURE_STAMP + 1);

    let hits = store.search("landing", &[]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].palettes[1].name, "Moodboard #2");
}

#[test]
fn three_image_jobs_tick_in_thirds() {
    let images: Vec<BatchImage> = [
        TestPattern::Black,
        TestPattern::White,
        TestPattern::Random(3),
    ]
    .into_iter()
    .map(|p| BatchImage {
        width: 8,
        height: 8,
        data: generate_pattern(p, 8, 8),
    })
    .collect();

    let mut runner = BatchRunner::new();
    let id = runner.create_job(
        "Thirds",
        images,
        BatchOptions {
            palette_size: 1,
            ..Default::default()
        },
        5,
    );

    let mut ticks = Vec::new();
    let job = runner.run(&id, |p| ticks.push(p)).unwrap();
    assert_eq!(ticks, vec![33, 67, 100]);
    assert_eq!(job.results[0].palette.colors[0].hex, "#000000");
    assert_eq!(job.results[1].palette.colors[0].hex, "#FFFFFF");
}

#[test]
fn attached_reports_match_direct_evaluation() -> anyhow::Result<()> {
    let mut runner = BatchRunner::new();
    let id = runner.create_job(
        "Audit",
        vec![quadrant_image()],
        BatchOptions {
            palette_size: 4,
            quality: Quality::Exact,
            include_wcag: true,
            include_cvd: true,
        },
        1_000,
    );
    let job = runner.run(&id, |_| {})?;
    let result = &job.results[0];

    let wcag = result.wcag.as_ref().map(Vec::as_slice).unwrap_or(&[]);
    assert_eq!(wcag.len(), 6);
    let direct = evaluate_palette_wcag(&result.palette.colors);
    assert_eq!(
        serde_json::to_value(wcag)?,
        serde_json::to_value(&direct)?
    );

    let direct_cvd = simulate_cvd(&result.palette.colors);
    assert_eq!(
        serde_json::to_value(&result.cvd)?,
        serde_json::to_value(Some(direct_cvd))?
    );
    Ok(())
}

#[test]
fn tag_filters_intersect_the_query() {
    let mut store = ProjectStore::new();
    store.create_project(
        "Autumn Campaign",
        "seasonal landing pages",
        &["web", "seasonal"],
        10,
    );
    store.create_project("Print Refresh", "brochure rework", &["print"], 20);

    let hits = store.search("landing", &[]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "autumn-campaign-1");

    let hits = store.search("", &["print"]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "print-refresh-2");

    // The name matches but the tag filter rules it out
    assert!(store.search("refresh", &["web"]).is_empty());
}

#[test]
fn removing_an_absent_palette_still_bumps_the_clock() {
    let mut store = ProjectStore::new();
    store.create_project("A", "", &[], 10);
    store.create_project("B", "", &[], 20);
    assert_eq!(store.projects()[0].name, "B");

    store.remove_palette("a-1", "Ghost", 30).unwrap();
    let top = store.projects()[0];
    assert_eq!(top.name, "A");
    assert_eq!(top.updated_at, 30);
    assert!(top.palettes.is_empty());
}

#[test]
fn blank_job_names_fall_back_to_fixed_ids() {
    let mut runner = BatchRunner::new();
    let id = runner.create_job("   ", Vec::new(), BatchOptions::default(), 0);
    assert_eq!(id, "job-1");

    // No images means instant completion with no progress ticks
    let mut ticks = Vec::new();
    let job = runner.run(&id, |p| ticks.push(p)).unwrap();
    assert_eq!(job.status, BatchStatus::Completed);
    assert_eq!(job.progress, 0);
    assert!(ticks.is_empty());
}

#[test]
fn queued_jobs_serialize_without_image_bytes() -> anyhow::Result<()> {
    let mut runner = BatchRunner::new();
    runner.create_job("Older", Vec::new(), BatchOptions::default(), 10);
    let id = runner.create_job(
        "Newer",
        vec![quadrant_image()],
        BatchOptions {
            palette_size: 4,
            quality: Quality::Exact,
            ..Default::default()
        },
        20,
    );

    let names: Vec<&str> = runner.jobs().iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, ["Newer", "Older"]);

    let json = serde_json::to_value(runner.job(&id).unwrap_or_else(|| unreachable!()))?;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["progress"], 0);
    assert_eq!(json["options"]["quality"], "exact");
    assert_eq!(json["options"]["palette_size"], 4);
    assert!(json.get("images").is_none());
    assert_eq!(json["results"].as_array().map(Vec::len), Some(0));
    Ok(())
}
