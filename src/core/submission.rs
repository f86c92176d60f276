use crate::core::store::RecordStore;
use crate::core::validator;
use crate::domain::model::{SubmitOutcome, Submission};

/// Fixed confirmation line shown when a submission is accepted.
pub const SUCCESS_MESSAGE: &str = "✅ Artwork successfully registered!";

/// Collects one warning per failed validation rule, in the fixed field order
/// year/period, dimensions, place of production. Empty means acceptance.
pub fn collect_warnings(submission: &Submission) -> Vec<String> {
    let mut warnings = Vec::new();
    if !validator::year_or_period_is_valid(&submission.year_or_period) {
        warnings.push(validator::YEAR_WARNING.to_string());
    }
    if !validator::dimensions_are_valid(&submission.dimensions) {
        warnings.push(validator::DIMENSIONS_WARNING.to_string());
    }
    if !validator::location_is_valid(&submission.place_of_production) {
        warnings.push(validator::LOCATION_WARNING.to_string());
    }
    warnings
}

/// Handles one submit event: any failed check rejects the whole submission
/// and leaves the store untouched; otherwise the record is built verbatim
/// from the raw fields and appended. All-or-nothing, never an error.
pub fn submit(store: &mut RecordStore, submission: Submission) -> SubmitOutcome {
    let warnings = collect_warnings(&submission);
    if !warnings.is_empty() {
        tracing::debug!(count = warnings.len(), "submission rejected");
        return SubmitOutcome::Rejected(warnings);
    }

    store.append(submission.into_record());
    tracing::debug!(total = store.len(), "artwork registered");
    SubmitOutcome::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> Submission {
        Submission {
            inventory_number: "INV001".to_string(),
            title: "Starry Field".to_string(),
            artist: "A. Painter".to_string(),
            year_or_period: "1990".to_string(),
            technique: "Oil".to_string(),
            dimensions: "30x40 cm".to_string(),
            place_of_production: "Paris".to_string(),
            provenance: "Private collection".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_is_appended() {
        let mut store = RecordStore::new();
        let outcome = submit(&mut store, valid_submission());
        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].inventory_number, "INV001");
    }

    #[test]
    fn test_rejection_leaves_store_unchanged() {
        let mut store = RecordStore::new();
        let mut submission = valid_submission();
        submission.place_of_production = "paris".to_string();
        let outcome = submit(&mut store, submission);
        match outcome {
            SubmitOutcome::Rejected(warnings) => {
                assert_eq!(warnings, vec![validator::LOCATION_WARNING.to_string()]);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_all_three_checks_fail_in_field_order() {
        let mut store = RecordStore::new();
        let submission = Submission {
            year_or_period: "90".to_string(),
            dimensions: "30x40".to_string(),
            place_of_production: "rome2".to_string(),
            ..Default::default()
        };
        match submit(&mut store, submission) {
            SubmitOutcome::Rejected(warnings) => {
                assert_eq!(
                    warnings,
                    vec![
                        validator::YEAR_WARNING.to_string(),
                        validator::DIMENSIONS_WARNING.to_string(),
                        validator::LOCATION_WARNING.to_string(),
                    ]
                );
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_unchecked_fields_accept_anything() {
        let mut store = RecordStore::new();
        let mut submission = valid_submission();
        submission.inventory_number = String::new();
        submission.title = "Comma, quote \" and\nnewline".to_string();
        submission.provenance = String::new();
        assert_eq!(submit(&mut store, submission), SubmitOutcome::Accepted);
        assert_eq!(store.len(), 1);
    }
}
