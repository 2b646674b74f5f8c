//! Display code generation
//!
//! Codes are cosmetic labels shown next to records; arena handles are the
//! real identities. Generators are injected into the registry so code
//! assignment is deterministic under test.

use sha2::{Digest, Sha256};
use rustc_hash::FxHashMap;
use std::fmt;

/// Source of employee and department display codes
pub trait IdGenerator: fmt::Debug + Send {
    /// Code for a new employee, derived from their name
    fn employee_code(&mut self, first_name: &str, last_name: &str) -> String;

    /// Code for a new department, derived from its name
    fn department_code(&mut self, name: &str) -> String;
}

/// `A` + `LEE` style prefix, or `None` when either name is blank
fn employee_prefix(first_name: &str, last_name: &str) -> Option<String> {
    let first = first_name.trim().chars().next()?;
    let last = last_name.trim();
    if last.is_empty() {
        return None;
    }
    let mut prefix: String = first.to_uppercase().collect();
    prefix.push_str(&last.to_uppercase());
    Some(prefix)
}

/// First three letters upper-cased, or `None` for a blank name
fn department_prefix(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(name.chars().take(3).collect::<String>().to_uppercase())
}

/// Monotonic counter suffixes: `ALEE001`, `MUS002`, `EMP0003`
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `start` instead of 1
    pub fn starting_at(start: u64) -> Self {
        SequentialIds {
            next: start.saturating_sub(1),
        }
    }

    fn bump(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}

impl IdGenerator for SequentialIds {
    fn employee_code(&mut self, first_name: &str, last_name: &str) -> String {
        let n = self.bump();
        match employee_prefix(first_name, last_name) {
            Some(prefix) => format!("{}{:03}", prefix, n),
            None => format!("EMP{:04}", n),
        }
    }

    fn department_code(&mut self, name: &str) -> String {
        let n = self.bump();
        match department_prefix(name) {
            Some(prefix) => format!("{}{:03}", prefix, n),
            None => format!("DEPT{:03}", n),
        }
    }
}

/// Content-derived suffixes
///
/// The suffix is the first four hex digits of SHA-256 over the normalized name
/// and how many times that name has been seen, so replaying the same inputs in
/// the same order reproduces the same codes.
#[derive(Debug, Default, Clone)]
pub struct HashedIds {
    seen: FxHashMap<String, u32>,
}

impl HashedIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn suffix(&mut self, kind: &str, name: &str) -> String {
        let key = format!("{}:{}", kind, name.trim().to_lowercase());
        let occurrence = self.seen.entry(key.clone()).or_insert(0);
        *occurrence += 1;

        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        hasher.update(occurrence.to_be_bytes());
        let digest = hasher.finalize();

        format!("{:02X}{:02X}", digest[0], digest[1])
    }
}

impl IdGenerator for HashedIds {
    fn employee_code(&mut self, first_name: &str, last_name: &str) -> String {
        let suffix = self.suffix("employee", &format!("{} {}", first_name.trim(), last_name.trim()));
        match employee_prefix(first_name, last_name) {
            Some(prefix) => format!("{}{}", prefix, suffix),
            None => format!("EMP{}", suffix),
        }
    }

    fn department_code(&mut self, name: &str) -> String {
        let suffix = self.suffix("department", name);
        match department_prefix(name) {
            Some(prefix) => format!("{}{}", prefix, suffix),
            None => format!("DEPT{}", suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_codes() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.employee_code("amy", "Lee"), "ALEE001");
        assert_eq!(ids.department_code("Music"), "MUS002");
        assert_eq!(ids.employee_code("", "Lee"), "EMP0003");
        assert_eq!(ids.department_code("  "), "DEPT004");
        assert_eq!(ids.department_code("IT"), "IT005");
    }

    #[test]
    fn test_sequential_start() {
        let mut ids = SequentialIds::starting_at(100);
        assert_eq!(ids.employee_code("Ben", "Ng"), "BNG100");
    }

    #[test]
    fn test_hashed_codes_are_reproducible() {
        let mut a = HashedIds::new();
        let mut b = HashedIds::new();
        let first = a.employee_code("Amy", "Lee");
        assert_eq!(first, b.employee_code("Amy", "Lee"));
        assert!(first.starts_with("ALEE"));
        assert_eq!(first.len(), "ALEE".len() + 4);

        // A second Amy Lee gets a different suffix
        let second = a.employee_code("amy", "lee");
        assert_ne!(first, second);
    }

    #[test]
    fn test_hashed_department_codes() {
        let mut ids = HashedIds::new();
        assert!(ids.department_code("Science").starts_with("SCI"));
        assert!(ids.department_code("").starts_with("DEPT"));
    }
}
