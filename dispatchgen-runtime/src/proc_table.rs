use std::collections::HashMap;

/// Predicate over the extension state deciding whether an entry resolves.
pub type Gate<E> = fn(&E) -> bool;

struct Entry<E, P> {
    proc: P,
    gate: Option<Gate<E>>,
}

/// Name -> entry-point table built once by a generated resolver.
///
/// `E` is the generated extension-flag struct, `P` the generated tagged
/// function reference. Gates are evaluated on every lookup, so enabling an
/// extension after the table is built is observed immediately.
pub struct ProcTable<E, P> {
    entries: HashMap<&'static str, Entry<E, P>>,
}

impl<E, P: Copy> ProcTable<E, P> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register an entry that always resolves.
    pub fn insert(&mut self, name: &'static str, proc: P) {
        self.entries.insert(name, Entry { proc, gate: None });
    }

    /// Register an entry that resolves only while `gate` holds.
    pub fn insert_gated(&mut self, name: &'static str, proc: P, gate: Gate<E>) {
        self.entries.insert(
            name,
            Entry {
                proc,
                gate: Some(gate),
            },
        );
    }

    /// Look up `name` by exact match.
    ///
    /// Returns `None` for unknown names and for entries whose gate rejects
    /// the current extension state.
    pub fn resolve(&self, name: &str, extensions: &E) -> Option<P> {
        let Some(entry) = self.entries.get(name) else {
            tracing::debug!(name, "no such entry point");
            return None;
        };
        match entry.gate {
            Some(gate) if !gate(extensions) => {
                tracing::debug!(name, "entry point requires an inactive extension");
                None
            }
            _ => Some(entry.proc),
        }
    }
}

impl<E, P: Copy> Default for ProcTable<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, P> std::fmt::Debug for ProcTable<E, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcTable")
            .field("entries", &self.entries.len())
            .finish()
    }
}
