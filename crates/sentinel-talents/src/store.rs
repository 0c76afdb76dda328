//! JSON persistence for the talent save.
//!
//! Loading never fails: a missing file is a fresh profile, and corrupt
//! data is logged and replaced with defaults rather than surfaced as an
//! error. Saving reports I/O problems to the caller.

use std::fs;
use std::path::Path;

use crate::tree::TalentState;

/// Write the save payload as pretty JSON, creating parent directories as
/// needed.
pub fn save_to_file(path: &Path, state: &TalentState) -> Result<(), String> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| format!("Failed to create save directory: {e}"))?;
    }
    let json = serde_json::to_string_pretty(state)
        .map_err(|e| format!("Failed to serialize talent save: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write talent save: {e}"))?;
    Ok(())
}

/// Load the save payload, falling back to defaults on any problem.
/// Missing fields in an otherwise valid payload take their defaults, so
/// saves written before a node existed still load.
pub fn load_or_default(path: &Path) -> TalentState {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return TalentState::default(),
        Err(e) => {
            log::warn!("failed to read talent save at {}: {e}", path.display());
            return TalentState::default();
        }
    };
    match serde_json::from_str(&json) {
        Ok(state) => state,
        Err(e) => {
            log::warn!(
                "talent save at {} is corrupt, starting fresh: {e}",
                path.display()
            );
            TalentState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{TalentId, CURRENT_VERSION};

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");

        let mut state = TalentState::default();
        state.add_currency(120, 20);
        state.upgrade(TalentId::Cooldown).unwrap();
        state.upgrade(TalentId::SpawnRate).unwrap();

        save_to_file(&path, &state).unwrap();
        let loaded = load_or_default(&path);
        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_or_default(&dir.path().join("nope.json"));
        assert_eq!(loaded, TalentState::default());
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, "{ not json").unwrap();
        let loaded = load_or_default(&path);
        assert_eq!(loaded, TalentState::default());
    }

    #[test]
    fn partial_payload_merges_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(
            &path,
            r#"{ "levels": { "cooldown": 2 }, "total_fragments": 55 }"#,
        )
        .unwrap();

        let loaded = load_or_default(&path);
        assert_eq!(loaded.levels.cooldown, 2);
        assert_eq!(loaded.levels.damage, 0);
        assert_eq!(loaded.total_fragments, 55);
        assert_eq!(loaded.total_cores, 0);
        assert_eq!(loaded.version, CURRENT_VERSION);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/profile/save.json");
        save_to_file(&path, &TalentState::default()).unwrap();
        assert!(path.exists());
    }
}
