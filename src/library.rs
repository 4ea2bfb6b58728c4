//! A small registry of machine descriptions embedded in the binary, parsed
//! once on first access.

use crate::loader::Loader;
use crate::types::{MachineError, Table};

use std::sync::RwLock;

// Default embedded machine descriptions
const MACHINE_TEXTS: [(&str, &str); 3] = [
    ("accept-one", include_str!("../machines/accept-one.tm")),
    ("flip-bits", include_str!("../machines/flip-bits.tm")),
    ("ones-parity", include_str!("../machines/ones-parity.tm")),
];

lazy_static::lazy_static! {
    pub static ref MACHINES: RwLock<Vec<(String, Table)>> = RwLock::new(Vec::new());
}

pub struct MachineLibrary;

impl MachineLibrary {
    /// Parse the embedded descriptions into the registry.
    pub fn load() -> Result<(), MachineError> {
        let mut machines = Vec::new();

        for (name, text) in MACHINE_TEXTS {
            match Loader::load_from_text(text) {
                Ok(table) => machines.push((name.to_string(), table)),
                Err(e) => eprintln!("Failed to parse embedded machine {}: {}", name, e),
            }
        }

        if let Ok(mut write_guard) = MACHINES.write() {
            *write_guard = machines;
        } else {
            return Err(MachineError::File(
                "Failed to acquire write lock".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the number of embedded machines
    pub fn count() -> usize {
        let _ = Self::load();

        MACHINES.read().map(|machines| machines.len()).unwrap_or(0)
    }

    /// List all embedded machine names
    pub fn names() -> Vec<String> {
        let _ = Self::load();

        MACHINES
            .read()
            .map(|machines| machines.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_else(|_| Vec::new())
    }

    /// Get an embedded machine's table by name
    pub fn get(name: &str) -> Result<Table, MachineError> {
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| MachineError::File("Failed to acquire read lock".to_string()))?
            .iter()
            .find(|(machine_name, _)| machine_name == name)
            .map(|(_, table)| table.clone())
            .ok_or_else(|| MachineError::File(format!("Machine '{}' not found", name)))
    }

    /// Get the original description text of an embedded machine by name
    pub fn text(name: &str) -> Result<&'static str, MachineError> {
        MACHINE_TEXTS
            .iter()
            .find(|(machine_name, _)| *machine_name == name)
            .map(|(_, text)| *text)
            .ok_or_else(|| MachineError::File(format!("Machine '{}' not found", name)))
    }
}
