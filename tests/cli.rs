use pixelstash::io::{read_image, write_image};
use pixelstash::PixelGrid;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn pixelstash_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pixelstash"))
}

fn run_in(dir: &Path, args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(pixelstash_command().current_dir(dir).args(args).output()?)
}

fn gradient(rows: usize, cols: usize) -> PixelGrid {
    PixelGrid::new(
        rows,
        cols,
        (0..rows * cols)
            .map(|i| [(i % 200) as u8, 128, (255 - i % 100) as u8])
            .collect(),
    )
}

#[test]
fn cli_encode_decode_flow() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let image = dir.path().join("cover.png");
    let secret = dir.path().join("secret.txt");
    write_image(&image, &gradient(20, 20))?;
    fs::write(&secret, "Attack at dawn, bring snacks.")?;

    for (placement, perturbation) in [
        ("seq", "simple"),
        ("seq", "split"),
        ("spread", "simple"),
        ("spread", "split"),
    ] {
        let out_dir = dir.path().join(format!("out-{placement}-{perturbation}"));
        let encode = run_in(
            dir.path(),
            &[
                "encode",
                "cover.png",
                "secret.txt",
                placement,
                perturbation,
                "--output",
                out_dir.to_str().unwrap(),
            ],
        )?;
        assert!(
            encode.status.success(),
            "encode failed: {}",
            String::from_utf8_lossy(&encode.stderr)
        );
        assert!(String::from_utf8(encode.stdout)?.contains("Stored 29 characters"));

        let altered = out_dir.join("output-cover.png");
        assert!(altered.exists(), "{} should exist", altered.display());

        let decode = run_in(
            dir.path(),
            &["decode", "cover.png", altered.to_str().unwrap(), perturbation],
        )?;
        assert!(
            decode.status.success(),
            "decode failed: {}",
            String::from_utf8_lossy(&decode.stderr)
        );
        let stdout = String::from_utf8(decode.stdout)?;
        assert!(
            stdout.contains("The secret is:\n\nAttack at dawn, bring snacks.\n"),
            "unexpected output: {stdout}"
        );
    }

    Ok(())
}

#[test]
fn decode_save_writes_secret_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let image = dir.path().join("cover.png");
    let secret = dir.path().join("secret.txt");
    write_image(&image, &gradient(8, 8))?;
    fs::write(&secret, "saved")?;

    let encode = run_in(
        dir.path(),
        &["e", "cover.png", "secret.txt", "spread", "simple", "--output", "."],
    )?;
    assert!(encode.status.success());

    let decode = run_in(
        dir.path(),
        &["d", "cover.png", "output-cover.png", "split", "--save"],
    )?;
    assert!(
        decode.status.success(),
        "decode failed: {}",
        String::from_utf8_lossy(&decode.stderr)
    );
    assert_eq!(fs::read_to_string(dir.path().join("output-secret.txt"))?, "saved");

    Ok(())
}

#[test]
fn encode_over_capacity_fails_without_output() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    write_image(&dir.path().join("tiny.png"), &gradient(2, 2))?;
    fs::write(dir.path().join("secret.txt"), "five!")?;

    let encode = run_in(
        dir.path(),
        &["encode", "tiny.png", "secret.txt", "seq", "simple"],
    )?;
    assert!(!encode.status.success());
    assert!(String::from_utf8(encode.stderr)?.contains("Error:"));
    assert!(!dir.path().join("outputs/output-tiny.png").exists());

    Ok(())
}

#[test]
fn decode_dimension_mismatch_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    write_image(&dir.path().join("a.png"), &gradient(3, 4))?;
    write_image(&dir.path().join("b.png"), &gradient(4, 3))?;

    let decode = run_in(dir.path(), &["decode", "a.png", "b.png", "simple"])?;
    assert!(!decode.status.success());
    assert!(String::from_utf8(decode.stderr)?.contains("dimensions differ"));

    Ok(())
}

#[test]
fn rejects_unknown_strategy() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let encode = run_in(
        dir.path(),
        &["encode", "a.png", "secret.txt", "diagonal", "simple"],
    )?;
    assert!(!encode.status.success());
    Ok(())
}

#[test]
fn info_reports_capacity_and_changes() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    write_image(&dir.path().join("cover.png"), &gradient(5, 7))?;
    fs::write(dir.path().join("secret.txt"), "abc")?;

    let encode = run_in(
        dir.path(),
        &["encode", "cover.png", "secret.txt", "seq", "split", "--output", "."],
    )?;
    assert!(encode.status.success());
    let altered = read_image(&dir.path().join("output-cover.png"))?;
    assert_eq!(altered.dimensions(), (5, 7));

    let info = run_in(
        dir.path(),
        &["info", "cover.png", "--altered", "output-cover.png"],
    )?;
    let stdout = String::from_utf8(info.stdout)?;
    assert!(stdout.contains("Pixels: 35"));
    assert!(stdout.contains("Changed pixels: 3"));

    let json = run_in(dir.path(), &["info", "cover.png", "--json"])?;
    let report: serde_json::Value = serde_json::from_slice(&json.stdout)?;
    assert_eq!(report["sequential_capacity"], 35);

    Ok(())
}

#[test]
fn version_flag_prints_version() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let out = run_in(dir.path(), &["--version"])?;
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout)?.starts_with("pixelstash "));
    Ok(())
}
