//! Available-memory precheck.

use sysinfo::System;

/// Memory needed to run the default model (llama2), in GB.
pub const REQUIRED_MEMORY_GB: f64 = 8.4;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Source of the currently available system memory.
pub trait MemoryProbe {
    /// Available memory in bytes.
    fn available_bytes(&self) -> u64;
}

impl<T: MemoryProbe + ?Sized> MemoryProbe for &T {
    fn available_bytes(&self) -> u64 {
        (**self).available_bytes()
    }
}

/// Reads available memory from the operating system via `sysinfo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMemory;

impl MemoryProbe for SystemMemory {
    fn available_bytes(&self) -> u64 {
        let mut system = System::new();
        system.refresh_memory();
        system.available_memory()
    }
}

/// Outcome of [`check_system_memory`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryCheck {
    pub sufficient: bool,
    pub available_gb: f64,
}

/// Compares available memory against `required_gb`.
pub fn check_system_memory(probe: &impl MemoryProbe, required_gb: f64) -> MemoryCheck {
    let available_gb = probe.available_bytes() as f64 / BYTES_PER_GB;
    MemoryCheck {
        sufficient: available_gb >= required_gb,
        available_gb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u64);

    impl MemoryProbe for Fixed {
        fn available_bytes(&self) -> u64 {
            self.0
        }
    }

    const GB: u64 = 1024 * 1024 * 1024;

    #[test]
    fn test_below_threshold() {
        let check = check_system_memory(&Fixed(4 * GB), REQUIRED_MEMORY_GB);
        assert!(!check.sufficient);
        assert!((check.available_gb - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_at_or_above_threshold() {
        assert!(check_system_memory(&Fixed(16 * GB), REQUIRED_MEMORY_GB).sufficient);
        assert!(check_system_memory(&Fixed(8 * GB), 8.0).sufficient);
    }
}
