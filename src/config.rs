// Configuración por entorno (.env incluido).
use std::path::{Path, PathBuf};

pub const DATA_FOLDER_ENV: &str = "DATA_FOLDER";
pub const BIND_ENV: &str = "TOPICSHIFT_BIND";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Carga `.env` del directorio actual. Que no exista no es un error.
pub fn load_dotenv() -> Result<(), dotenv::Error> {
    ignore_missing(dotenv::dotenv().map(|_| ()))
}

/// Igual que `load_dotenv` pero con un archivo explícito.
pub fn load_dotenv_from(path: &Path) -> Result<(), dotenv::Error> {
    ignore_missing(dotenv::from_path(path))
}

fn ignore_missing(result: Result<(), dotenv::Error>) -> Result<(), dotenv::Error> {
    match result {
        Err(e) if e.not_found() => Ok(()),
        other => other,
    }
}

/// Carpeta del periodo: `<data_folder>/<slug>`.
pub fn period_path(data_folder: &Path, period_slug: &str) -> PathBuf {
    data_folder.join(period_slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_period_path() {
        assert_eq!(period_path(Path::new("/data"), "2026-02"), PathBuf::from("/data/2026-02"));
    }

    #[test]
    fn test_dotenv_missing_is_ok_malformed_is_error() {
        let tmp = TempDir::new().unwrap();
        assert!(load_dotenv_from(&tmp.path().join(".env")).is_ok());

        let bad = tmp.path().join("bad.env");
        fs::write(&bad, "this line is not valid\n").unwrap();
        assert!(load_dotenv_from(&bad).is_err());
    }
}
