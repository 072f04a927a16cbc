extern crate image;
extern crate mandelbrot;
extern crate rand;
extern crate tempfile;

use mandelbrot::capture::{capture_filename, save_capture};
use mandelbrot::engine::{fill_rows, partition_rows, shade};
use mandelbrot::palette::BOUNDED;
use mandelbrot::{
    compute, compute_single, ComputationRequest, MandelError, Region, Resolution, Viewer,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn request(region: Region, width: usize, height: usize, workers: usize) -> ComputationRequest {
    ComputationRequest::new(region, Resolution::new(width, height).unwrap(), 160, workers).unwrap()
}

#[test]
fn four_by_four_classic_view() {
    let buffer = compute(&request(Region::default(), 4, 4, 2)).unwrap();
    assert_eq!((buffer.width(), buffer.height()), (4, 4));

    // (2, 2) is -0.5+0i and (2, 3) is 0.25+0i, both inside the set.
    assert_eq!(buffer.get(2, 2), Some(BOUNDED));
    assert_eq!(buffer.get(2, 3), Some(BOUNDED));

    // (0, 0) is -2+1i, which escapes on the first step.
    let corner = buffer.get(0, 0).unwrap();
    assert_ne!(corner, BOUNDED);
    assert_eq!(corner, mandelbrot::color_of(mandelbrot::EscapeResult::Escaped(1), 160));
}

#[test]
fn random_requests_do_not_depend_on_worker_count() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..12 {
        let x_min = rng.gen_range(-2.5, 0.5);
        let y_min = rng.gen_range(-1.5, 0.5);
        let region = Region::new(
            x_min,
            x_min + rng.gen_range(0.001, 2.0),
            y_min,
            y_min + rng.gen_range(0.001, 2.0),
        )
        .unwrap();
        let width = rng.gen_range(1, 48);
        let height = rng.gen_range(1, 48);
        let workers = rng.gen_range(2, 70);

        let one = compute(&request(region, width, height, 1)).unwrap();
        let many = compute(&request(region, width, height, workers)).unwrap();
        assert_eq!(one, many, "{:?} {}x{} with {} workers", region, width, height, workers);
        assert_eq!(one, compute_single(&request(region, width, height, 1)));
    }
}

#[test]
fn every_pixel_is_written() {
    let req = request(Region::default(), 19, 13, 5);
    let mapper = req.mapper();
    let mut cells = vec![None; 19 * 13];
    let bands = partition_rows(13, 5);
    fill_rows(&mut cells, 19, &bands, &|row: usize, col: usize| {
        Some(shade(&mapper, 160, row, col))
    })
    .unwrap();
    assert!(cells.iter().all(|c| c.is_some()));

    let buffer = compute(&req).unwrap();
    let filled: Vec<_> = cells.into_iter().map(|c| c.unwrap()).collect();
    assert_eq!(filled.as_slice(), buffer.pixels());
}

#[test]
fn more_workers_than_rows_still_works() {
    let buffer = compute(&request(Region::default(), 10, 3, 64)).unwrap();
    assert_eq!(buffer, compute_single(&request(Region::default(), 10, 3, 1)));
}

#[test]
fn capture_round_trips_through_png() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(Region::default(), 16, 9, 3);
    let buffer = compute(&req).unwrap();

    let path = save_capture(dir.path(), &req, &buffer).unwrap();
    assert_eq!(path, dir.path().join(capture_filename(&req)));

    let written = image::open(&path).unwrap().to_rgb();
    assert_eq!(written.into_raw(), buffer.to_rgb_bytes());
}

#[test]
fn capture_into_missing_directory_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let req = request(Region::default(), 8, 8, 2);
    let buffer = compute(&req).unwrap();
    let copy = buffer.clone();

    assert_eq!(
        save_capture(&missing, &req, &buffer),
        Err(MandelError::MissingCaptureDir(missing.clone()))
    );
    assert_eq!(buffer, copy);
}

#[test]
fn zoom_session_writes_distinct_captures() {
    let dir = tempfile::tempdir().unwrap();
    let viewer = Viewer::new(request(Region::default(), 40, 30, 4)).unwrap();
    let first = viewer.frame().capture(dir.path()).unwrap();
    let second = viewer
        .zoom(mandelbrot::Pixel(30, 25), mandelbrot::Pixel(10, 5))
        .unwrap()
        .capture(dir.path())
        .unwrap();
    assert_ne!(first, second);
    assert!(first.is_file());
    assert!(second.is_file());
}

#[test]
fn capture_blocked_by_a_directory_reports_the_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(Region::default(), 8, 8, 2);
    let buffer = compute(&req).unwrap();
    let copy = buffer.clone();

    let blocked = dir.path().join(capture_filename(&req));
    std::fs::create_dir(&blocked).unwrap();

    match save_capture(dir.path(), &req, &buffer) {
        Err(MandelError::CaptureFailed { path, .. }) => assert_eq!(path, blocked),
        other => panic!("expected a write failure, got {:?}", other),
    }
    assert_eq!(buffer, copy);
}

#[test]
fn zoom_outside_the_frame_keeps_the_current_view() {
    let viewer = Viewer::new(request(Region::default(), 60, 40, 4)).unwrap();
    let before = viewer.frame();
    let result = viewer.zoom(mandelbrot::Pixel(0, 0), mandelbrot::Pixel(5000, 5000));
    match result {
        Err(MandelError::SelectionOutsideFrame { .. }) => {}
        other => panic!("expected the selection to be refused, got {:?}", other.map(|f| f.request)),
    }
    assert_eq!(viewer.frame().request, before.request);
}
