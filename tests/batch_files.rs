//! batch 命令的端到端测试（临时目录）

use murange::cli::batch::BatchArgs;
use murange::commands::batch;
use murange::models::PropagationStatus;
use murange::physics::RangeEnergyModel;

use std::fs;
use std::path::Path;

fn args(input: &Path, output: Option<&Path>) -> BatchArgs {
    BatchArgs {
        input: input.to_path_buf(),
        output: output.map(Path::to_path_buf),
        pattern: "*.csv".to_string(),
        depth: None,
        jobs: 2,
        recursive: false,
        overwrite: false,
    }
}

fn read_statuses(path: &Path) -> Vec<PropagationStatus> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .deserialize::<murange::models::PropagatedEvent>()
        .map(|r| r.unwrap().status)
        .collect()
}

#[test]
fn batch_directory_writes_propagated_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("run1.csv"),
        "energy_gev,cos_zenith\n500,1.0\n5,1.0\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("run2.csv"),
        "# shallow events\nenergy_gev,cos_zenith,depth_m\n50,0.8,10\n50,-0.3,10\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not an event file").unwrap();

    let model = RangeEnergyModel::standard_rock().unwrap();
    batch::execute(args(dir.path(), None), &model).unwrap();

    let out1 = dir.path().join("run1_propagated.csv");
    let out2 = dir.path().join("run2_propagated.csv");
    assert_eq!(
        read_statuses(&out1),
        vec![PropagationStatus::Ok, PropagationStatus::Stopped]
    );
    assert_eq!(
        read_statuses(&out2),
        vec![PropagationStatus::Ok, PropagationStatus::InvalidAngle]
    );
}

#[test]
fn batch_skips_existing_outputs_and_own_results() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("events.csv");
    fs::write(&input, "energy_gev,cos_zenith\n1000,0.9\n").unwrap();

    let model = RangeEnergyModel::standard_rock().unwrap();
    batch::execute(args(dir.path(), None), &model).unwrap();

    let output = dir.path().join("events_propagated.csv");
    let first = fs::read_to_string(&output).unwrap();

    // 第二次运行：已有结果被跳过，结果文件本身不会被当作输入
    fs::write(&input, "energy_gev,cos_zenith\n2000,0.9\n").unwrap();
    batch::execute(args(dir.path(), None), &model).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), first);
    assert!(!dir.path().join("events_propagated_propagated.csv").exists());

    let mut overwrite = args(dir.path(), None);
    overwrite.overwrite = true;
    batch::execute(overwrite, &model).unwrap();
    assert_ne!(fs::read_to_string(&output).unwrap(), first);
}

#[test]
fn batch_separate_output_directory() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    let out = output_dir.path().join("nested");
    let input = input_dir.path().join("single.csv");
    fs::write(&input, "energy_gev,cos_zenith\n100,1.0\n").unwrap();

    let model = RangeEnergyModel::standard_rock().unwrap();
    let mut a = args(&input, Some(&out));
    a.depth = Some(10.0);
    batch::execute(a, &model).unwrap();

    let statuses = read_statuses(&out.join("single_propagated.csv"));
    assert_eq!(statuses, vec![PropagationStatus::Ok]);
}

#[test]
fn batch_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let model = RangeEnergyModel::standard_rock().unwrap();
    assert!(batch::execute(args(&dir.path().join("missing"), None), &model).is_err());
}

#[test]
fn batch_same_stem_in_subdirectories_keeps_both_outputs() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    for (sub, content) in [
        ("a", "energy_gev,cos_zenith\n500,1.0\n"),
        ("b", "energy_gev,cos_zenith\n500,1.0\n5,1.0\n"),
    ] {
        fs::create_dir(input_dir.path().join(sub)).unwrap();
        fs::write(input_dir.path().join(sub).join("run.csv"), content).unwrap();
    }

    let model = RangeEnergyModel::standard_rock().unwrap();
    let mut a = args(input_dir.path(), Some(output_dir.path()));
    a.recursive = true;
    batch::execute(a, &model).unwrap();

    assert_eq!(
        read_statuses(&output_dir.path().join("a").join("run_propagated.csv")),
        vec![PropagationStatus::Ok]
    );
    assert_eq!(
        read_statuses(&output_dir.path().join("b").join("run_propagated.csv")),
        vec![PropagationStatus::Ok, PropagationStatus::Stopped]
    );
    assert!(!output_dir.path().join("run_propagated.csv").exists());
}

#[test]
fn batch_header_only_input_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.csv");
    fs::write(&input, "energy_gev,cos_zenith\n").unwrap();

    let model = RangeEnergyModel::standard_rock().unwrap();
    batch::execute(args(&input, None), &model).unwrap();

    let text = fs::read_to_string(dir.path().join("empty_propagated.csv")).unwrap();
    assert_eq!(
        text.trim_end(),
        "energy_gev,cos_zenith,depth_m,slant_depth_m,residual_energy_gev,flux_weight,status"
    );
}

#[test]
fn batch_refuses_its_own_output_as_single_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("x_propagated.csv");
    fs::write(&output, "energy_gev,cos_zenith\n100,1.0\n").unwrap();

    let model = RangeEnergyModel::standard_rock().unwrap();
    assert!(batch::execute(args(&output, None), &model).is_err());
    assert!(!dir.path().join("x_propagated_propagated.csv").exists());
}
