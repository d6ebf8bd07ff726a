//! AISchool Portfolio - data layer for a kindergarten learning-portfolio
//! gallery
//!
//! Core modules:
//! - `model`: Student records and the closed grade/class/content vocabularies
//! - `storage`: Key-value backend (LocalStorage on web, in-memory for tests)
//! - `mock`: Seed-reproducible synthetic dataset for first run
//! - `settings`: Admin settings, merge semantics, and the password gate
//! - `store`: Blob-per-key persistence of records and settings
//! - `platform`: Browser/native clock and logging split
//! - `web`: `#[wasm_bindgen]` surface for the page scripts (wasm32 only)

pub mod mock;
pub mod model;
pub mod platform;
pub mod settings;
pub mod storage;
pub mod store;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use model::{ClassName, ContentType, Gender, Grade, Student, StudentForm};
pub use settings::{Settings, SettingsPatch};
pub use storage::{CorruptedStoreError, MemoryStorage, StorageBackend};
pub use store::PortfolioStore;
