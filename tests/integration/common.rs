use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_schedgrid"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Mixed field naming, one overlap-free week and one record on Sunday.
pub const SAMPLE_SCHEDULE: &str = r#"[
  { "day": "Lunes", "startTime": "08:00", "endTime": "10:00",
    "subjectName": "Cálculo I", "instructorName": "Dr. Pérez", "room": "A-101" },
  { "dia": "Miércoles", "hora_inicio": "10:00", "hora_fin": "12:00",
    "asignatura": "Bases de Datos", "aula": "B-204", "codigo": "INF220" },
  { "dia_semana": "Domingo", "inicio": "09:00", "fin": "11:00",
    "nombre": "Química" },
  { "day": "mi", "startTime": "14:00", "endTime": "15:00",
    "subjectName": "Cálculo I" }
]"#;

pub fn write_schedule(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("horario.json");
    fs::write(&path, contents).unwrap();
    path
}

pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, contents).unwrap();
    path
}

/// Runs the binary inside `dir` with colors off unless `args` says otherwise.
pub fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
