//! JSON flat-file store for the expense document

use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::BoxError;

pub const DEFAULT_WEEKLY_BUDGET: f64 = 200.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub note: String,
}

/// The persisted document: the full expense history plus the single
/// weekly budget threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    pub expenses: Vec<Expense>,
    pub weekly_budget: f64,
}

impl Default for StoreDocument {
    fn default() -> Self {
        StoreDocument {
            expenses: Vec::new(),
            weekly_budget: DEFAULT_WEEKLY_BUDGET,
        }
    }
}

#[derive(Clone)]
pub struct ExpenseStore {
    inner: Arc<Mutex<BaseExpenseStore>>,
}

impl ExpenseStore {
    /// Opens the store at `file_path`, creating the file (and its parent
    /// folder) if needed. A file that cannot be parsed as a document is
    /// replaced by the default document rather than reported as an error.
    pub fn open(file_path: String) -> Result<Self, BoxError> {
        Ok(ExpenseStore {
            inner: Arc::new(Mutex::new(BaseExpenseStore::open(file_path)?)),
        })
    }

    pub fn append(&self, expense: Expense) -> Result<(), BoxError> {
        let mut inner = self.inner.lock().unwrap();
        inner.document.expenses.push(expense);
        inner.save()
    }

    pub fn list(&self) -> Vec<Expense> {
        let inner = self.inner.lock().unwrap();
        inner.document.expenses.clone()
    }

    pub fn set_budget(&self, amount: f64) -> Result<(), BoxError> {
        let mut inner = self.inner.lock().unwrap();
        inner.document.weekly_budget = amount;
        inner.save()
    }

    pub fn get_budget(&self) -> f64 {
        let inner = self.inner.lock().unwrap();
        inner.document.weekly_budget
    }

    /// Empties the expense history. The weekly budget is kept.
    pub fn clear(&self) -> Result<(), BoxError> {
        let mut inner = self.inner.lock().unwrap();
        inner.document.expenses.clear();
        inner.save()
    }

    pub fn is_empty(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.document.expenses.is_empty()
    }
}

struct BaseExpenseStore {
    file_path: String,
    document: StoreDocument,
}

impl BaseExpenseStore {
    fn open(file_path: String) -> Result<Self, BoxError> {
        if !fs::exists(&file_path)? {
            // split and get folder, create folder if necessary
            let folder_path = file_path.split("/").collect::<Vec<&str>>()
                [..(file_path.split("/").count() - 1)]
                .join("/");
            if !folder_path.is_empty() && !fs::exists(&folder_path)? {
                fs::create_dir_all(&folder_path)?;
                info!("Created folder: {}", folder_path);
            }

            File::create(&file_path)?;
            info!("Created file: {}", file_path);
        }

        let content = fs::read_to_string(&file_path)?;

        let mut store = BaseExpenseStore {
            file_path,
            document: StoreDocument::default(),
        };

        if content.is_empty() {
            store.save()?;
        } else {
            match serde_json::from_str::<StoreDocument>(&content) {
                Ok(document) => store.document = document,
                Err(e) => {
                    // corrupt or foreign content: reset to the default
                    // document instead of failing
                    warn!(
                        "Unreadable store file {}, resetting to defaults: {}",
                        store.file_path, e
                    );
                    store.save()?;
                }
            }
        }

        Ok(store)
    }

    fn save(&mut self) -> Result<(), BoxError> {
        let content = serde_json::to_string_pretty(&self.document)?;

        let tmp_path = format!("{}.tmp", &self.file_path);
        let mut file = File::create(&tmp_path)?; // this truncates the exiting file if any
        file.write_all(content.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &self.file_path)?; // this replaces the existing file

        info!("Saved file: {}", self.file_path);

        Ok(())
    }
}
