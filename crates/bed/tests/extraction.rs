//! Integration tests for recovering beads from bounding boxes

use std::cell::Cell;

use pbtools_bed::{
    extract_beads, read_xyzr, BoundingBoxSource, Bounds, BoundsCsv, ExtractOptions,
    RadiusEstimate,
};
use rstest::{fixture, rstest};

#[fixture]
fn options() -> ExtractOptions {
    ExtractOptions {
        disable_progress: true,
        ..Default::default()
    }
}

#[fixture]
fn source() -> BoundsCsv {
    BoundsCsv::new("./data/objects.csv").with_container("./data/container.csv")
}

#[rstest]
fn csv_source_reads_every_row(source: BoundsCsv) {
    let objects = source.object_bounds().unwrap();
    assert_eq!(objects.len(), 5);
    assert_eq!(objects[0], Bounds::new(-1.0, 1.0, -1.0, 1.0, 0.0, 2.0));
    assert_eq!(objects[1], Bounds::from_array([1.0, 3.0, -1.0, 1.05, 0.0, 1.95]));
}

#[rstest]
fn csv_container_is_merged(source: BoundsCsv) {
    let container = source.container_bounds().unwrap().unwrap();
    assert_eq!(container, Bounds::new(-4.0, 4.0, -4.0, 4.0, -1.0, 12.0));
}

#[rstest]
fn global_bounds_enclose_everything(source: BoundsCsv) {
    let objects = source.object_bounds().unwrap();
    let global = source.global_bounds(&objects).unwrap().unwrap();
    assert_eq!(global, Bounds::new(-4.0, 4.0, -4.0, 4.0, -0.5, 12.0));
}

/// Counts how many times the objects are read
struct CountingSource {
    boxes: Vec<Bounds>,
    reads: Cell<usize>,
}

impl BoundingBoxSource for CountingSource {
    fn object_bounds(&self) -> pbtools_bed::Result<Vec<Bounds>> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.boxes.clone())
    }
}

#[rstest]
fn objects_are_read_once(options: ExtractOptions) {
    let source = CountingSource {
        boxes: vec![
            Bounds::from_array([-1.0, 1.0, -1.0, 1.0, 0.0, 2.0]),
            Bounds::from_array([-4.0, 4.0, -4.0, 4.0, -0.5, 12.0]),
        ],
        reads: Cell::new(0),
    };

    let extraction = extract_beads(&source, &options).unwrap();
    assert_eq!(source.reads.get(), 1);
    assert_eq!(
        extraction.global,
        Some(Bounds::new(-4.0, 4.0, -4.0, 4.0, -0.5, 12.0))
    );
}

#[rstest]
fn column_is_rejected(source: BoundsCsv, options: ExtractOptions) {
    let extraction = extract_beads(&source, &options).unwrap();
    assert_eq!(extraction.found, 5);
    assert_eq!(extraction.accepted(), 4);
    assert_eq!(extraction.rejected, vec![3]);
    assert!(extraction.has_rejections());
    assert!(extraction.container.is_some());
}

#[rstest]
#[case(0.1, 0.0, 4)] // default tolerance
#[case(0.01, 0.0, 2)] // only the perfect cubes
#[case(0.0, 0.1, 4)] // absolute tolerance only
#[case(2.0, 0.0, 5)] // anything goes
fn tolerances_control_acceptance(
    source: BoundsCsv,
    mut options: ExtractOptions,
    #[case] rtol: f64,
    #[case] atol: f64,
    #[case] expected: usize,
) {
    options.rtol = rtol;
    options.atol = atol;
    let extraction = extract_beads(&source, &options).unwrap();
    assert_eq!(extraction.accepted(), expected);
}

#[rstest]
#[case(RadiusEstimate::MaxExtent, 1.025)]
#[case(RadiusEstimate::MeanExtent, 1.0)]
fn radius_estimates(mut options: ExtractOptions, #[case] estimate: RadiusEstimate, #[case] r: f64) {
    let boxes = vec![Bounds::new(1.0, 3.0, -1.0, 1.05, 0.0, 1.95)];
    options.radius_estimate = estimate;

    let extraction = extract_beads(&boxes, &options).unwrap();
    let bead = extraction.bed.beads()[0];
    assert!((bead.r - r).abs() < 1e-12);
    assert!((bead.x - 2.0).abs() < 1e-12);
    assert!((bead.y - 0.025).abs() < 1e-12);
    assert!((bead.z - 0.975).abs() < 1e-12);
}

#[rstest]
fn empty_source_gives_empty_bed(options: ExtractOptions) {
    let boxes: Vec<Bounds> = Vec::new();
    let extraction = extract_beads(&boxes, &options).unwrap();
    assert_eq!(extraction.found, 0);
    assert!(extraction.bed.is_empty());
    assert!(extraction.global.is_none());
}

#[rstest]
fn inverted_box_is_an_error(options: ExtractOptions) {
    let boxes = vec![Bounds::new(1.0, -1.0, -1.0, 1.0, -1.0, 1.0)];
    assert!(extract_beads(boxes.as_slice(), &options).is_err());
}

#[rstest]
fn xyzr_round_trip(source: BoundsCsv, options: ExtractOptions) {
    let extraction = extract_beads(&source, &options).unwrap();
    let path = std::env::temp_dir().join(format!("pbtools_xyzr_{}.csv", std::process::id()));

    extraction.bed.write(&path).unwrap();
    let bed = read_xyzr(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(bed.beads(), extraction.bed.beads());
}

#[test]
fn read_reference_xyzr() {
    let mut bed = read_xyzr("./data/xyzr.csv").unwrap();
    assert_eq!(bed.size(), 3);

    let bounds = *bed.update_bounds().unwrap();
    assert_eq!(bounds.xmin, -3.0);
    assert_eq!(bounds.rmax, 1.025);
    assert!((bounds.xmax - 3.025).abs() < 1e-12);
    assert!((bounds.zmin + 0.05).abs() < 1e-12);
}
