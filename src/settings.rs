//! Admin settings and the password gate
//!
//! Two optional values: an override password for the admin view and the
//! URL of a future spreadsheet-backed endpoint. Persisted as one JSON
//! blob; merges are shallow and key-presence based, so a patch only
//! touches the fields it actually carries (an explicit empty string is a
//! real value, an absent field is not).
//!
//! The gate is a convenience lock for a kindergarten tool, not a security
//! boundary: plain string comparison, no hashing, no lockout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback admin password when none was ever configured
pub const DEFAULT_PASSWORD: &str = "AISchool";

/// Minimum length accepted for a new admin password
pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_app_url: Option<String>,
}

/// Partial settings update. `None` fields leave the stored value alone;
/// `Some` fields overwrite, including `Some("")`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub password: Option<String>,
    pub web_app_url: Option<String>,
}

impl Settings {
    /// Apply a patch; key presence wins, absence preserves
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(password) = patch.password {
            self.password = Some(password);
        }
        if let Some(url) = patch.web_app_url {
            self.web_app_url = Some(url);
        }
    }

    /// Password the gate compares against. An empty stored password counts
    /// as unset, same as the original web app.
    pub fn effective_password(&self) -> &str {
        match self.password.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_PASSWORD,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("password must be at least {MIN_PASSWORD_LEN} characters")]
pub struct PasswordTooShort;

/// Settings-form check for a candidate new password. Rejected passwords
/// are never persisted; the form shows the error and keeps the old value.
pub fn validate_password(candidate: &str) -> Result<(), PasswordTooShort> {
    if candidate.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordTooShort);
    }
    Ok(())
}

/// Copyable Google Apps Script for the future spreadsheet-backed endpoint.
/// Reference text only; nothing in this crate ever calls the endpoint.
pub const APPS_SCRIPT_TEMPLATE: &str = r##"
// ----------------------------------------------------
// Google Apps Script (Code.gs) for
// 愛愛幼兒園學習歷程系統 (Love Love Kindergarten)
// ----------------------------------------------------

// 1. Setup global variables
const SHEET_ID = 'YOUR_GOOGLE_SHEET_ID_HERE';
const SHEET_NAME = 'Students';

// 2. Serve the Web App (GET Request)
function doGet(e) {
  return HtmlService.createTemplateFromFile('index')
      .evaluate()
      .setTitle('愛愛幼兒園學習歷程系統')
      .setXFrameOptionsMode(HtmlService.XFrameOptionsMode.ALLOWALL)
      .addMetaTag('viewport', 'width=device-width, initial-scale=1');
}

// 3. Handle Form Submission (POST Request)
function doPost(e) {
  const lock = LockService.getScriptLock();
  lock.tryLock(10000);

  try {
    const sheet = SpreadsheetApp.openById(SHEET_ID).getSheetByName(SHEET_NAME);
    const data = JSON.parse(e.postData.contents);

    // Add timestamp
    const timestamp = new Date();

    sheet.appendRow([
      timestamp,
      data.id,
      data.name,
      data.grade,
      data.className,
      data.gender,
      data.contentType,
      data.link,
      data.description
    ]);

    return ContentService.createTextOutput(JSON.stringify({ 'result': 'success' }))
      .setMimeType(ContentService.MimeType.JSON);

  } catch (e) {
    return ContentService.createTextOutput(JSON.stringify({ 'result': 'error', 'error': e }))
      .setMimeType(ContentService.MimeType.JSON);
  } finally {
    lock.releaseLock();
  }
}

// 4. Helper function to setup sheet headers (Run once)
function setupSheet() {
  const sheet = SpreadsheetApp.openById(SHEET_ID).getSheetByName(SHEET_NAME);
  if (sheet.getLastRow() === 0) {
    sheet.appendRow(['Timestamp', 'ID', 'Name', 'Grade', 'Class', 'Gender', 'Type', 'Link', 'Description']);
  }
}
"##;
