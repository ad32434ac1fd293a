use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "--seed", "3", "--max-rounds", "20"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    let rounds = v["rounds_played"].as_u64().expect("rounds_played");
    assert!((1..=20).contains(&rounds));
    assert_eq!(v["summary"]["rounds"].as_array().map(Vec::len), Some(rounds as usize));
}
