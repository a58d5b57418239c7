use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::ledger::Ledger;

use super::{Result, StorageBackend};

const DEFAULT_DIR_NAME: &str = ".pocket_ledger";
const SLOT_FILE: &str = "ledger.json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.pocket_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("POCKET_LEDGER_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Stores the whole ledger as pretty JSON in one slot file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    slot: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self {
            slot: root.join(SLOT_FILE),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn slot_path(&self) -> &Path {
        &self.slot
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Ledger> {
        if !self.slot.exists() {
            return Ok(Ledger::default());
        }
        let data = fs::read_to_string(&self.slot)?;
        match serde_json::from_str(&data) {
            Ok(ledger) => Ok(ledger),
            Err(err) => {
                tracing::warn!(
                    "discarding malformed ledger slot {}: {err}",
                    self.slot.display()
                );
                Ok(Ledger::default())
            }
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_string_pretty(ledger)?;
        write_atomic(&self.slot, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    fn sample_ledger() -> Ledger {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut ledger = Ledger::new();
        ledger.add_earning("Salary", 1200.0, date).unwrap();
        ledger.add_expense("Rent", 700.0, date).unwrap();
        ledger.set_budget(400.0).unwrap();
        ledger
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let ledger = sample_ledger();
        storage.save(&ledger).expect("save ledger");

        let loaded = storage.load().expect("load ledger");
        assert_eq!(loaded.earnings, ledger.earnings);
        assert_eq!(loaded.expenses, ledger.expenses);
        assert_eq!(loaded.budget, 400.0);
    }

    #[test]
    fn absent_slot_loads_zero_state() {
        let (storage, _guard) = storage_with_temp_dir();
        let loaded = storage.load().expect("load ledger");
        assert!(loaded.is_empty());
        assert_eq!(loaded.budget, 0.0);
    }

    #[test]
    fn malformed_slot_loads_zero_state() {
        let (storage, _guard) = storage_with_temp_dir();
        fs::write(storage.slot_path(), "{ not json").expect("write garbage");

        let loaded = storage.load().expect("load ledger");
        assert!(loaded.is_empty());
        assert_eq!(loaded.budget, 0.0);
    }

    #[test]
    fn save_overwrites_prior_slot() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.save(&sample_ledger()).expect("first save");

        let mut replacement = Ledger::new();
        replacement
            .add_earning("Freelance", 55.0, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap())
            .unwrap();
        storage.save(&replacement).expect("second save");

        let loaded = storage.load().expect("load ledger");
        assert_eq!(loaded.earnings.len(), 1);
        assert_eq!(loaded.earnings[0].source, "Freelance");
        assert!(loaded.expenses.is_empty());
    }
}
