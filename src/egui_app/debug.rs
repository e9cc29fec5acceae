use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugLevel::Debug => write!(f, "DEBUG"),
            DebugLevel::Info => write!(f, "INFO"),
            DebugLevel::Warn => write!(f, "WARN"),
            DebugLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugCategory {
    Auth,
    Books,
    Storage,
    Network,
    UI,
    Other,
}

impl DebugCategory {
    pub const ALL: [DebugCategory; 6] = [
        DebugCategory::Auth,
        DebugCategory::Books,
        DebugCategory::Storage,
        DebugCategory::Network,
        DebugCategory::UI,
        DebugCategory::Other,
    ];
}

impl fmt::Display for DebugCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugCategory::Auth => write!(f, "AUTH"),
            DebugCategory::Books => write!(f, "BOOKS"),
            DebugCategory::Storage => write!(f, "STORE"),
            DebugCategory::Network => write!(f, "NET"),
            DebugCategory::UI => write!(f, "UI"),
            DebugCategory::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DebugEntry {
    pub timestamp: String,
    pub level: DebugLevel,
    pub category: DebugCategory,
    pub message: String,
}

impl fmt::Display for DebugEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} {}",
            self.timestamp, self.level, self.category, self.message
        )
    }
}

/// Bounded in-app log shown by the debug console.
///
/// Every entry is also emitted as a `tracing` event.
pub struct DebugLogger {
    entries: Mutex<VecDeque<DebugEntry>>,
    max_entries: usize,
}

impl DebugLogger {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            max_entries,
        }
    }

    pub fn log(&self, level: DebugLevel, category: DebugCategory, message: impl Into<String>) {
        let entry = DebugEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level,
            category,
            message: message.into(),
        };

        match level {
            DebugLevel::Debug => tracing::debug!(category = %category, "{}", entry.message),
            DebugLevel::Info => tracing::info!(category = %category, "{}", entry.message),
            DebugLevel::Warn => tracing::warn!(category = %category, "{}", entry.message),
            DebugLevel::Error => tracing::error!(category = %category, "{}", entry.message),
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.push_back(entry);
            while entries.len() > self.max_entries {
                entries.pop_front();
            }
        }
    }

    pub fn debug(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Debug, category, msg);
    }

    pub fn info(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Info, category, msg);
    }

    pub fn warn(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Warn, category, msg);
    }

    pub fn error(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Error, category, msg);
    }

    pub fn get_entries(&self) -> Vec<DebugEntry> {
        self.entries
            .lock()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn get_entries_by_category(&self, category: DebugCategory) -> Vec<DebugEntry> {
        self.entries
            .lock()
            .map(|e| {
                e.iter()
                    .filter(|entry| entry.category == category)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn count(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }
}
