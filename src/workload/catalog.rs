//! @ai:module:intent Compiled-in benchmark workloads
//! @ai:module:layer domain
//! @ai:module:public_api builtin_workloads
//! @ai:module:stateless true

use crate::workload::task::Workload;

/// (name, mask, min_length, max_length)
const BUILTIN_WORKLOADS: &[(&str, &str, u32, u32)] = &[
    ("9digits", "?d?d?d?d?d?d?d?d?d", 9, 9),
    ("upper-5lower-digit", "?u?l?l?l?l?l?d", 7, 7),
    ("1-8digits", "?d?d?d?d?d?d?d?d", 1, 8),
];

/// @ai:intent All workloads the harness benchmarks, in run order
/// @ai:effects pure
pub fn builtin_workloads() -> Vec<Workload> {
    BUILTIN_WORKLOADS
        .iter()
        .map(|(name, mask, min, max)| Workload::new(name, mask, *min, *max))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_workloads_are_valid() {
        for workload in builtin_workloads() {
            assert!(workload.validate().is_ok(), "{} invalid", workload.name);
        }
    }

    #[test]
    fn test_builtin_names_unique() {
        let workloads = builtin_workloads();
        let names: HashSet<_> = workloads.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names.len(), workloads.len());
    }
}
