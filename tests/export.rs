use radial_velocity::export::{snapshot, sweep};
use radial_velocity::kinematics::{OrbitalConfig, SpecialAngleClassifier};
use radial_velocity::scene::{self, Scene};

#[test]
fn sweep_csv_has_header_and_blank_unmatched_cells() {
    let config = OrbitalConfig::default();
    let classifier = SpecialAngleClassifier::default();
    let scenes = scene::sweep(&config, 0.0, 90.0, 30.0).expect("sweep");

    let mut buf = Vec::new();
    let rows = sweep::write_records(&mut buf, scenes.iter().map(|s| s.to_record(&classifier)))
        .expect("csv");
    assert_eq!(rows, 4);

    let mut reader = csv::Reader::from_reader(buf.as_slice());
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), sweep::HEADER.to_vec());

    let records: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().expect("rows");
    assert_eq!(records.len(), 4);
    // θ = 60°: the star's velocity is 30° off the line of sight.
    assert_eq!(&records[2][13], "30.0");
    assert_eq!(&records[2][14], "");
    // θ = 0°: both bodies move across the line of sight.
    assert_eq!(&records[0][13], "");
}

#[test]
fn empty_sweep_still_writes_header() {
    let mut buf = Vec::new();
    let rows = sweep::write_records(&mut buf, std::iter::empty()).expect("csv");
    assert_eq!(rows, 0);
    let text = String::from_utf8(buf).expect("utf8");
    assert_eq!(text.trim_end(), sweep::HEADER.join(","));
}

#[test]
fn snapshot_json_is_pretty_printed() {
    let scene = Scene::from_degrees(&OrbitalConfig::default(), 45.0);
    let snap = scene.to_snapshot(&SpecialAngleClassifier::default());
    let mut buf = Vec::new();
    snapshot::write_json(&mut buf, &snap).expect("json");
    let text = String::from_utf8(buf).expect("utf8");
    assert!(text.starts_with("{\n"));
    assert!(text.contains("\"theta_deg\": 45.0"));
    assert!(text.contains("\"ratio_label\": \"√2/2\""));
    assert!(text.contains("\"special_angle_deg\": null"));
    assert!(text.ends_with("}\n"));
}

#[test]
fn writer_for_path_creates_parent_directories() {
    use std::io::Write;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested/out/sweep.csv");
    {
        let mut writer = radial_velocity::export::writer_for_path(&path).expect("writer");
        writeln!(writer, "hello").expect("write");
    }
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "hello\n");
}
