//! Blob-per-key persistence of records and settings
//!
//! Two independent JSON blobs in the backing store: the full record list
//! and the admin settings. Every insert rewrites the whole list; there is
//! no partial update, no transaction, and no cross-blob integrity. Single
//! tab, single writer; two tabs editing at once is last-write-wins.

use crate::mock;
use crate::model::{Student, StudentForm};
use crate::platform;
use crate::settings::{Settings, SettingsPatch};
use crate::storage::{CorruptedStoreError, StorageBackend};

/// Key of the records blob, kept from the original web app so existing
/// datasets carry over
pub const RECORDS_KEY: &str = "aischool_data_v2";
/// Key of the settings blob
pub const SETTINGS_KEY: &str = "aischool_settings_v1";

/// Record store and access gate over an injected key-value backend
#[derive(Debug)]
pub struct PortfolioStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PortfolioStore<B> {
    /// Open the store over `backend`, seeding the mock dataset on first
    /// run.
    ///
    /// Seeding happens here, once per session, so reads never mutate
    /// state. An existing records blob that fails to parse surfaces
    /// [`CorruptedStoreError`] at open rather than mid-session; the blob
    /// is never overwritten on corruption.
    pub fn open(backend: B, seed: u64) -> Result<Self, CorruptedStoreError> {
        let mut store = Self { backend };
        match store.backend.get(RECORDS_KEY) {
            Some(raw) => {
                let records = parse_records(&raw)?;
                log::info!("Loaded {} portfolio records", records.len());
            }
            None => {
                let students = mock::generate(seed, platform::now_ms());
                store.write_records(&students);
                log::info!("Seeded {} mock portfolio records", students.len());
            }
        }
        Ok(store)
    }

    /// Full record list in persisted order, newest first.
    ///
    /// Pure read: no re-seed, no re-shuffle. Returns an empty list when
    /// the blob is missing (possible only if it was cleared externally
    /// after open).
    pub fn list_records(&self) -> Result<Vec<Student>, CorruptedStoreError> {
        match self.backend.get(RECORDS_KEY) {
            Some(raw) => parse_records(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Build a record from `form`, prepend it, persist the whole list,
    /// and return it. Id and timestamp come from the wall clock; field
    /// validation is the form's job.
    pub fn add_record(&mut self, form: StudentForm) -> Result<Student, CorruptedStoreError> {
        let now = platform::now_ms();
        let student = form.into_student(now.to_string(), now);

        let mut records = self.list_records()?;
        records.insert(0, student.clone());
        self.write_records(&records);
        Ok(student)
    }

    /// Persisted settings, or the empty default when none were saved.
    ///
    /// Never fails: an unparseable settings blob logs a warning and falls
    /// back to defaults. Settings are low-value admin preferences, so the
    /// hard-fail policy of the records blob does not apply here.
    pub fn settings(&self) -> Settings {
        let Some(raw) = self.backend.get(SETTINGS_KEY) else {
            return Settings::default();
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Settings blob unreadable ({err}), using defaults");
                Settings::default()
            }
        }
    }

    /// Merge `patch` over the stored settings and persist the result.
    /// Shallow, key-presence merge: fields absent from the patch keep
    /// their stored values.
    pub fn save_settings(&mut self, patch: SettingsPatch) {
        let mut settings = self.settings();
        settings.merge(patch);
        if let Ok(json) = serde_json::to_string(&settings) {
            self.backend.set(SETTINGS_KEY, &json);
        }
    }

    /// Gate for the admin view: plain string equality against the stored
    /// password, default password when none was ever set
    pub fn check_password(&self, candidate: &str) -> bool {
        candidate == self.settings().effective_password()
    }

    fn write_records(&mut self, records: &[Student]) {
        if let Ok(json) = serde_json::to_string(records) {
            self.backend.set(RECORDS_KEY, &json);
        }
    }
}

fn parse_records(raw: &str) -> Result<Vec<Student>, CorruptedStoreError> {
    serde_json::from_str(raw).map_err(|source| CorruptedStoreError {
        key: RECORDS_KEY.to_string(),
        source,
    })
}
