use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

const MB: u64 = 1024 * 1024;

// Helper function to get the path to the compiled binary
fn mediascan_cmd() -> Command {
    Command::cargo_bin("mediascan").expect("Failed to find mediascan binary")
}

fn scaffold() -> Result<TempDir, Box<dyn Error>> {
    let root = tempdir()?;
    fs::create_dir_all(root.path().join("input/videos"))?;
    fs::create_dir_all(root.path().join("input/metadata"))?;
    File::create(root.path().join("input/metadata/catalog.csv"))?;
    Ok(root)
}

fn add_video(root: &Path, name: &str, bytes: u64) -> Result<(), Box<dyn Error>> {
    File::create(root.join("input/videos").join(name))?.set_len(bytes)?;
    Ok(())
}

fn read_log(root: &Path) -> String {
    fs::read_to_string(root.join("logs/automation.log")).unwrap_or_default()
}

fn reports(root: &Path) -> Vec<PathBuf> {
    match fs::read_dir(root.join("output")) {
        Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn test_help_exits_zero() {
    mediascan_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--min-duration"));
}

#[test]
fn test_invalid_argument_exits_one() {
    mediascan_cmd()
        .arg("--min-size-mb=abc")
        .assert()
        .code(1)
        .stderr(contains("not a number"));
}

#[test]
fn test_missing_ffprobe_fails() -> Result<(), Box<dyn Error>> {
    let root = scaffold()?;
    let missing_tool = root.path().join("no-such-ffprobe");

    mediascan_cmd()
        .arg("--root")
        .arg(root.path())
        .arg("--ffprobe")
        .arg(&missing_tool)
        .assert()
        .code(1)
        .stderr(contains("[ERROR]"))
        .stderr(contains("is not installed or not available in PATH"));

    let log = read_log(root.path());
    assert!(log.contains(" - INFO - Media automation started"));
    assert!(log.contains(" - ERROR - "));
    assert!(reports(root.path()).is_empty());
    Ok(())
}

#[cfg(unix)]
mod with_fake_ffprobe {
    use super::*;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    /// Shell script answering `-version` and returning canned JSON per file
    /// name. NoMoov.mp4 fails with two stderr lines; anything unlisted exits 1.
    const FAKE_FFPROBE: &str = r#"#!/bin/sh
if [ "$1" = "-version" ]; then
    echo "ffprobe version fake"
    exit 0
fi
for last; do :; done
case "$last" in
    *A.mp4) echo '{"streams":[{"width":1920,"height":1080,"duration":"10.500000"}]}' ;;
    *B.mp4) echo '{"streams":[{"width":1280,"height":720,"duration":"30.000000"}]}' ;;
    *Short.mp4) echo '{"streams":[{"width":640,"height":480,"duration":"0.400000"}]}' ;;
    *NoMoov.mp4)
        echo "[mov,mp4,m4a,3gp,3g2,mj2 @ 0x55d0c8] moov atom not found" >&2
        echo "$last: Invalid data found when processing input" >&2
        exit 1 ;;
    *AudioOnly.mp4) echo '{"programs":[],"streams":[]}' ;;
    *) echo "Invalid data found when processing input" >&2; exit 1 ;;
esac
"#;

    fn install_fake_ffprobe(dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
        let path = dir.join("fake-ffprobe");
        {
            let mut file = File::create(&path)?;
            file.write_all(FAKE_FFPROBE.as_bytes())?;
            file.sync_all()?;
        }
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(path)
    }

    #[test]
    fn test_successful_run() -> Result<(), Box<dyn Error>> {
        let root = scaffold()?;
        let tools = tempdir()?;
        let ffprobe = install_fake_ffprobe(tools.path())?;
        add_video(root.path(), "A.mp4", 5 * MB + MB / 4)?;
        add_video(root.path(), "B.mp4", 12 * MB)?;

        mediascan_cmd()
            .arg("--root")
            .arg(root.path())
            .arg("--ffprobe")
            .arg(&ffprobe)
            .arg("--probe-timeout")
            .arg("30")
            .assert()
            .success()
            .stdout(contains("[SUCCESS] Media automation completed successfully"));

        let written = reports(root.path());
        assert_eq!(written.len(), 1);
        let report = fs::read_to_string(&written[0])?;
        assert!(report.contains("Total Videos: 2\n"));
        assert!(report.contains("- A.mp4 | 10.5s | 1920x1080 | 5.25MB\n"));
        assert!(report.contains("- B.mp4 | 30.0s | 1280x720 | 12.0MB\n"));

        let log = read_log(root.path());
        assert!(log.contains(" - INFO - Processed video: A.mp4"));
        assert!(log.contains(" - INFO - Processed video: B.mp4"));
        assert!(log.contains(" - INFO - Media automation completed successfully"));
        Ok(())
    }

    #[test]
    fn test_log_is_appended_across_runs() -> Result<(), Box<dyn Error>> {
        let root = scaffold()?;
        let tools = tempdir()?;
        let ffprobe = install_fake_ffprobe(tools.path())?;
        add_video(root.path(), "A.mp4", 2 * MB)?;

        for _ in 0..2 {
            mediascan_cmd()
                .arg("--root")
                .arg(root.path())
                .arg("--ffprobe")
                .arg(&ffprobe)
                .assert()
                .success();
        }

        let log = read_log(root.path());
        assert_eq!(log.matches("Media automation started").count(), 2);
        assert_eq!(reports(root.path()).len(), 2);
        Ok(())
    }

    #[test]
    fn test_missing_input_folder() -> Result<(), Box<dyn Error>> {
        let root = tempdir()?;
        let tools = tempdir()?;
        let ffprobe = install_fake_ffprobe(tools.path())?;

        mediascan_cmd()
            .arg("--root")
            .arg(root.path())
            .arg("--ffprobe")
            .arg(&ffprobe)
            .assert()
            .code(1)
            .stderr(contains("Input folder does not exist"));
        Ok(())
    }

    #[test]
    fn test_missing_metadata_csv() -> Result<(), Box<dyn Error>> {
        let root = tempdir()?;
        fs::create_dir_all(root.path().join("input/videos"))?;
        fs::create_dir_all(root.path().join("input/metadata"))?;
        add_video(root.path(), "A.mp4", 2 * MB)?;
        let tools = tempdir()?;
        let ffprobe = install_fake_ffprobe(tools.path())?;

        mediascan_cmd()
            .arg("--root")
            .arg(root.path())
            .arg("--ffprobe")
            .arg(&ffprobe)
            .assert()
            .code(1)
            .stderr(contains("No metadata CSV file found"));

        assert!(reports(root.path()).is_empty());
        Ok(())
    }

    #[test]
    fn test_no_videos() -> Result<(), Box<dyn Error>> {
        let root = scaffold()?;
        let tools = tempdir()?;
        let ffprobe = install_fake_ffprobe(tools.path())?;

        mediascan_cmd()
            .arg("--root")
            .arg(root.path())
            .arg("--ffprobe")
            .arg(&ffprobe)
            .assert()
            .code(1)
            .stderr(contains("No MP4 videos found in videos folder"));

        assert!(reports(root.path()).is_empty());
        Ok(())
    }

    #[test]
    fn test_short_video_aborts_run() -> Result<(), Box<dyn Error>> {
        let root = scaffold()?;
        let tools = tempdir()?;
        let ffprobe = install_fake_ffprobe(tools.path())?;
        add_video(root.path(), "A.mp4", 2 * MB)?;
        add_video(root.path(), "Short.mp4", 2 * MB)?;

        mediascan_cmd()
            .arg("--root")
            .arg(root.path())
            .arg("--ffprobe")
            .arg(&ffprobe)
            .assert()
            .code(1)
            .stderr(contains("Video duration too short"));

        assert!(reports(root.path()).is_empty());
        Ok(())
    }

    #[test]
    fn test_unreadable_video_is_probe_failure() -> Result<(), Box<dyn Error>> {
        let root = scaffold()?;
        let tools = tempdir()?;
        let ffprobe = install_fake_ffprobe(tools.path())?;
        add_video(root.path(), "Corrupt.mp4", 2 * MB)?;

        mediascan_cmd()
            .arg("--root")
            .arg(root.path())
            .arg("--ffprobe")
            .arg(&ffprobe)
            .assert()
            .code(1)
            .stderr(contains("ffprobe failed for video"))
            .stderr(contains("Corrupt.mp4"));

        let log = read_log(root.path());
        assert!(log.contains(" - ERROR - ffprobe failed for video"));
        Ok(())
    }

    #[test]
    fn test_multi_line_tool_error_prints_single_line() -> Result<(), Box<dyn Error>> {
        let root = scaffold()?;
        let tools = tempdir()?;
        let ffprobe = install_fake_ffprobe(tools.path())?;
        add_video(root.path(), "NoMoov.mp4", 2 * MB)?;

        let assert = mediascan_cmd()
            .arg("--root")
            .arg(root.path())
            .arg("--ffprobe")
            .arg(&ffprobe)
            .assert()
            .code(1);

        let stderr = String::from_utf8(assert.get_output().stderr.clone())?;
        assert_eq!(stderr.trim_end().lines().count(), 1, "stderr: {stderr}");
        assert!(stderr.contains("moov atom not found; "));
        assert!(stderr.contains("Invalid data found when processing input"));

        let log = read_log(root.path());
        let error_lines: Vec<_> = log.lines().filter(|l| l.contains(" - ERROR - ")).collect();
        assert_eq!(error_lines.len(), 1);
        assert!(error_lines[0].contains("Invalid data found when processing input"));
        assert!(!log.lines().any(|l| l.starts_with('/')), "continuation line in log: {log}");
        Ok(())
    }

    #[test]
    fn test_no_video_stream_message() -> Result<(), Box<dyn Error>> {
        let root = scaffold()?;
        let tools = tempdir()?;
        let ffprobe = install_fake_ffprobe(tools.path())?;
        add_video(root.path(), "AudioOnly.mp4", 2 * MB)?;

        mediascan_cmd()
            .arg("--root")
            .arg(root.path())
            .arg("--ffprobe")
            .arg(&ffprobe)
            .assert()
            .code(1)
            .stderr(contains("No video stream found: "))
            .stderr(contains("AudioOnly.mp4"));
        Ok(())
    }
}
