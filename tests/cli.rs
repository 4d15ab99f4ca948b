use std::{
    fs,
    path::{Path, PathBuf},
    process::{self, Command},
    sync::atomic::{AtomicUsize, Ordering},
};

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// A scratch directory that is removed when it goes out of scope.
struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "fontrom-cli-{}-{}-{}",
            process::id(),
            NEXT_DIR.fetch_add(1, Ordering::Relaxed),
            name
        ));
        fs::create_dir_all(&path).expect("Failed to create scratch directory");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn join(&self, file: &str) -> PathBuf {
        self.path.join(file)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn font2rom() -> Command {
    Command::new(env!("CARGO_BIN_EXE_font2rom"))
}

fn rom2mem() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rom2mem"))
}

#[test]
fn font2rom_writes_rom_in_working_directory() {
    let dir = ScratchDir::new("font2rom");
    let status = font2rom().current_dir(dir.path()).status().unwrap();
    assert!(status.success());

    let rom = fs::read_to_string(dir.join("Fixed-16x16.rom")).unwrap();
    assert_eq!(rom.lines().count(), glyphs::FONT_SIZE / 2);
    assert!(rom.ends_with('\n'));
    assert!(
        rom.lines()
            .all(|l| l.len() == 16 && l.bytes().all(|b| b == b'0' || b == b'1'))
    );
}

#[test]
fn font2rom_runs_are_identical() {
    let dir = ScratchDir::new("font2rom-twice");
    assert!(font2rom().current_dir(dir.path()).status().unwrap().success());
    let first = fs::read(dir.join("Fixed-16x16.rom")).unwrap();
    assert!(font2rom().current_dir(dir.path()).status().unwrap().success());
    let second = fs::read(dir.join("Fixed-16x16.rom")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn font2rom_fails_when_destination_unavailable() {
    let dir = ScratchDir::new("font2rom-blocked");
    // A directory in place of the output file cannot be opened for writing, even as root.
    fs::create_dir(dir.join("Fixed-16x16.rom")).unwrap();
    let status = font2rom().current_dir(dir.path()).status().unwrap();
    assert!(!status.success());
    assert!(dir.join("Fixed-16x16.rom").is_dir());
}

#[test]
fn rom2mem_translates_generated_rom() {
    let dir = ScratchDir::new("rom2mem");
    assert!(font2rom().current_dir(dir.path()).status().unwrap().success());
    let status = rom2mem()
        .current_dir(dir.path())
        .args(["Fixed-16x16.rom", "Fixed-16x16.mem"])
        .status()
        .unwrap();
    assert!(status.success());

    let mem = fs::read_to_string(dir.join("Fixed-16x16.mem")).unwrap();
    assert!(mem.starts_with("@0000\n"));
    assert_eq!(mem.lines().count(), 1 + glyphs::FONT_SIZE / 2);
}

#[test]
fn rom2mem_requires_arguments() {
    let dir = ScratchDir::new("rom2mem-usage");
    let status = rom2mem().current_dir(dir.path()).status().unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn rom2mem_fails_on_missing_input() {
    let dir = ScratchDir::new("rom2mem-missing");
    let status = rom2mem()
        .current_dir(dir.path())
        .args(["absent.rom", "out.mem"])
        .status()
        .unwrap();
    assert!(!status.success());
    assert!(!dir.join("out.mem").exists());
}
