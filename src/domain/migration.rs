//! Migration domain types
//!
//! Defines the ordered set of migration units this tool knows about.
//! The registry is a static in-memory table; nothing mutates it at runtime.

use crate::error::ConfigError;

/// One discrete, ordered SQL change script, applied exactly once in sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationUnit {
    /// Position in the application order, starting at 1
    pub sequence: u32,
    /// File name expected under the migrations directory
    pub file_name: &'static str,
    /// Human-readable summary, informational only
    pub description: &'static str,
}

/// Ordered sequence of migration units. Insertion order is application order.
#[derive(Debug, Clone)]
pub struct MigrationSet {
    units: &'static [MigrationUnit],
}

impl MigrationSet {
    pub const fn new(units: &'static [MigrationUnit]) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[MigrationUnit] {
        self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Sequence numbers must be contiguous starting at 1. A violating set is
    /// a configuration error, not something the verifier works around.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, unit) in self.units.iter().enumerate() {
            let expected = (i + 1) as u32;
            if unit.sequence != expected {
                return Err(ConfigError::NonContiguousSequence {
                    expected,
                    found: unit.sequence,
                });
            }
        }
        Ok(())
    }

    /// Look up a description by three-digit sequence prefix (e.g. "009").
    /// Unknown prefixes yield an empty string rather than an error.
    pub fn description_for_prefix(&self, prefix: &str) -> &'static str {
        let Ok(sequence) = prefix.parse::<u32>() else {
            return "";
        };
        self.units
            .iter()
            .find(|unit| unit.sequence == sequence)
            .map(|unit| unit.description)
            .unwrap_or("")
    }
}

/// The migrations this tool manages, in application order.
const UNITS: &[MigrationUnit] = &[
    MigrationUnit {
        sequence: 1,
        file_name: "001_create_schema.sql",
        description: "Create base schema (users, organizations, bilans, etc.)",
    },
    MigrationUnit {
        sequence: 2,
        file_name: "002_expand_assessments_schema.sql",
        description: "Expand assessments schema",
    },
    MigrationUnit {
        sequence: 3,
        file_name: "003_expand_assessment_questions.sql",
        description: "Expand assessment questions",
    },
    MigrationUnit {
        sequence: 4,
        file_name: "004_expand_assessment_answers.sql",
        description: "Expand assessment answers",
    },
    MigrationUnit {
        sequence: 5,
        file_name: "005_create_assessment_competencies.sql",
        description: "Create assessment competencies",
    },
    MigrationUnit {
        sequence: 6,
        file_name: "006_create_assessment_drafts.sql",
        description: "Create assessment drafts",
    },
    MigrationUnit {
        sequence: 7,
        file_name: "007_seed_assessment_questions.sql",
        description: "Seed 16 template questions",
    },
    MigrationUnit {
        sequence: 8,
        file_name: "008_create_qualiopi_indicators.sql",
        description: "Create QUALIOPI indicators",
    },
    MigrationUnit {
        sequence: 9,
        file_name: "009_create_organization_qualiopi_status.sql",
        description: "Create organization QUALIOPI status",
    },
    MigrationUnit {
        sequence: 10,
        file_name: "010_create_qualiopi_evidence.sql",
        description: "Create QUALIOPI evidence",
    },
    MigrationUnit {
        sequence: 11,
        file_name: "011_create_satisfaction_surveys.sql",
        description: "Create satisfaction surveys",
    },
    MigrationUnit {
        sequence: 12,
        file_name: "012_create_document_archive.sql",
        description: "Create document archive",
    },
    MigrationUnit {
        sequence: 13,
        file_name: "013_create_qualiopi_audit_log.sql",
        description: "Create QUALIOPI audit log",
    },
    MigrationUnit {
        sequence: 14,
        file_name: "014_create_availability_slots.sql",
        description: "Create availability slots",
    },
    MigrationUnit {
        sequence: 15,
        file_name: "015_create_session_bookings.sql",
        description: "Create session bookings",
    },
    MigrationUnit {
        sequence: 16,
        file_name: "016_create_session_reminders.sql",
        description: "Create session reminders",
    },
    MigrationUnit {
        sequence: 17,
        file_name: "017_create_session_analytics.sql",
        description: "Create session analytics",
    },
];

/// The full registry of known migrations.
pub static REGISTRY: MigrationSet = MigrationSet::new(UNITS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_seventeen_units() {
        assert_eq!(REGISTRY.len(), 17);
        assert!(!REGISTRY.is_empty());
    }

    #[test]
    fn test_registry_is_contiguous() {
        REGISTRY.validate().expect("registry must be contiguous from 1");
    }

    #[test]
    fn test_registry_file_names_are_ordered_and_unique() {
        let names: Vec<&str> = REGISTRY.units().iter().map(|u| u.file_name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_description_lookup_known_prefix() {
        assert_eq!(
            REGISTRY.description_for_prefix("001"),
            "Create base schema (users, organizations, bilans, etc.)"
        );
        assert_eq!(
            REGISTRY.description_for_prefix("009"),
            "Create organization QUALIOPI status"
        );
    }

    #[test]
    fn test_description_lookup_unknown_prefix_is_empty() {
        assert_eq!(REGISTRY.description_for_prefix("999"), "");
        assert_eq!(REGISTRY.description_for_prefix("abc"), "");
        assert_eq!(REGISTRY.description_for_prefix(""), "");
    }

    #[test]
    fn test_validate_rejects_gap_in_sequence() {
        const GAPPED: &[MigrationUnit] = &[
            MigrationUnit {
                sequence: 1,
                file_name: "001_a.sql",
                description: "a",
            },
            MigrationUnit {
                sequence: 3,
                file_name: "003_c.sql",
                description: "c",
            },
        ];
        let set = MigrationSet::new(GAPPED);
        let err = set.validate().unwrap_err();
        assert!(matches!(
            err,
            crate::error::ConfigError::NonContiguousSequence {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_validate_rejects_set_not_starting_at_one() {
        const OFFSET: &[MigrationUnit] = &[MigrationUnit {
            sequence: 2,
            file_name: "002_b.sql",
            description: "b",
        }];
        let set = MigrationSet::new(OFFSET);
        assert!(set.validate().is_err());
    }
}
