use std::process::{Command, Output};

fn inject_kubeconfig(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_inject-kubeconfig"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn missing_cluster_document_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let output = inject_kubeconfig(&[missing.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Patching"));
}

#[test]
fn no_arguments_fails() {
    let output = inject_kubeconfig(&[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}
