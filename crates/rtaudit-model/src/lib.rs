pub mod block;
pub mod error;
pub mod field;
pub mod modality;
pub mod report;

pub use block::{Member, StudyBlock, StudyRecord};
pub use error::{AuditError, Result};
pub use field::FieldSpec;
pub use modality::{DEFAULT_REQUIRED, RequiredModalities};
pub use report::{GroupGap, StudyGaps};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_required_set() {
        let required = RequiredModalities::default();
        assert_eq!(required.len(), 4);
        let names: Vec<&str> = required.iter().collect();
        assert_eq!(names, vec!["CT", "RTDOSE", "RTPLAN", "RTSTRUCT"]);
    }

    #[test]
    fn missing_from_is_sorted_and_set_based() {
        let required = RequiredModalities::default();
        // Duplicates in the observed list collapse to set membership.
        let missing = required.missing_from(["CT", "CT", "RTDOSE"]);
        assert_eq!(missing, vec!["RTPLAN".to_string(), "RTSTRUCT".to_string()]);
    }

    #[test]
    fn missing_from_superset_is_empty() {
        let required = RequiredModalities::default();
        let missing = required.missing_from(["CT", "RTSTRUCT", "RTPLAN", "RTDOSE", "MR"]);
        assert!(missing.is_empty());
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let required = RequiredModalities::default();
        let missing = required.missing_from(["ct", "rtstruct", "rtplan", "rtdose"]);
        assert_eq!(missing.len(), 4);
    }

    #[test]
    fn gap_report_serializes() {
        let gaps = StudyGaps {
            urn: "12345".to_string(),
            groups: vec![GroupGap {
                group: 1,
                missing: vec!["RTPLAN".to_string(), "RTSTRUCT".to_string()],
            }],
        };
        let json = serde_json::to_string(&gaps).expect("serialize gaps");
        let round: StudyGaps = serde_json::from_str(&json).expect("deserialize gaps");
        assert_eq!(round, gaps);
        assert_eq!(round.missing_count(), 2);
    }

    #[test]
    fn error_messages_name_the_urn() {
        let error = AuditError::DuplicateIdentifier {
            urn: "98765".to_string(),
        };
        assert!(error.to_string().contains("98765"));
        let error = AuditError::MalformedBlock {
            urn: "98765".to_string(),
            tokens: 3,
        };
        assert!(error.to_string().contains('3'));
    }
}
