use std::fs;
use std::path::{Path, PathBuf};

use lc_mechanics::{Character, DocumentStore, FieldChange, FieldUpdate, SessionContext};
use serde_json::{Map, Value};

/// Top-level key holding the current session number. The engine does not
/// read it; it lives next to the sheet fields so each call knows the session.
const SESSION_KEY: &str = "session";

/// A character sheet stored as one JSON document on disk.
pub struct SheetFile {
    path: PathBuf,
    doc: Value,
}

impl SheetFile {
    /// Write a fresh document for `character`. Refuses to overwrite unless `force`.
    pub fn create(path: &Path, character: &Character, force: bool) -> Result<Self, String> {
        if path.exists() && !force {
            return Err(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ));
        }
        let mut doc = serde_json::to_value(character).map_err(|e| e.to_string())?;
        if let Value::Object(map) = &mut doc {
            map.insert(
                SESSION_KEY.to_string(),
                Value::from(SessionContext::default().number()),
            );
        }
        let file = Self {
            path: path.to_path_buf(),
            doc,
        };
        file.save()?;
        Ok(file)
    }

    /// Load an existing document.
    pub fn open(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let doc: Value = serde_json::from_str(&text)
            .map_err(|e| format!("{} is not a sheet: {e}", path.display()))?;
        if !doc.is_object() {
            return Err(format!("{} is not a sheet", path.display()));
        }
        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// Decode the mechanical state.
    pub fn character(&self) -> Result<Character, String> {
        serde_json::from_value(self.doc.clone())
            .map_err(|e| format!("{} is not a valid sheet: {e}", self.path.display()))
    }

    /// The session the sheet is in.
    pub fn session(&self) -> SessionContext {
        self.doc
            .get(SESSION_KEY)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .map(SessionContext::new)
            .unwrap_or_default()
    }

    /// Apply `updates` and move the sheet to `session` in one save.
    pub fn commit_with_session(
        &mut self,
        updates: &[FieldUpdate],
        session: SessionContext,
    ) -> Result<(), String> {
        let mut doc = self.updated(updates)?;
        if let Value::Object(map) = &mut doc {
            map.insert(SESSION_KEY.to_string(), Value::from(session.number()));
        }
        self.doc = doc;
        self.save()
    }

    /// A copy of the document with `updates` applied.
    fn updated(&self, updates: &[FieldUpdate]) -> Result<Value, String> {
        let mut doc = self.doc.clone();
        for update in updates {
            let target = update.entity.0.to_string();
            if self.document_id() != Some(target.as_str()) {
                return Err(format!(
                    "update for character {} does not belong to {}",
                    update.entity,
                    self.path.display()
                ));
            }
            apply(&mut doc, &update.change)?;
        }
        Ok(doc)
    }

    fn save(&self) -> Result<(), String> {
        tracing::debug!(path = %self.path.display(), "saving sheet");
        let text = serde_json::to_string_pretty(&self.doc).map_err(|e| e.to_string())?;
        fs::write(&self.path, text + "\n")
            .map_err(|e| format!("cannot write {}: {e}", self.path.display()))
    }

    fn document_id(&self) -> Option<&str> {
        self.doc.get("id").and_then(Value::as_str)
    }
}

impl DocumentStore for SheetFile {
    type Error = String;

    fn commit(&mut self, updates: &[FieldUpdate]) -> Result<(), String> {
        self.doc = self.updated(updates)?;
        tracing::debug!(updates = updates.len(), "committed updates");
        self.save()
    }
}

/// Apply one change to a document.
fn apply(doc: &mut Value, change: &FieldChange) -> Result<(), String> {
    let path = change.path();
    let mut segments: Vec<&str> = path.split('.').collect();
    let Some(last) = segments.pop() else {
        return Err("empty field path".to_string());
    };

    let mut node = doc;
    for segment in segments {
        let Value::Object(map) = node else {
            return Err(format!("{path}: {segment} is not inside an object"));
        };
        node = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    let Value::Object(map) = node else {
        return Err(format!("{path}: parent is not an object"));
    };

    match change {
        FieldChange::Set { value, .. } => {
            map.insert(last.to_string(), value.clone());
        }
        FieldChange::Remove { .. } => {
            map.remove(last);
        }
    }
    Ok(())
}
