use crewdesk_model::{Bucket, Candidate, Cell, RawRow, UserAccount};
use crewdesk_query::{project_rows, Classified};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn arbitrary_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        any::<bool>().prop_map(Cell::Bool),
        (-1e9f64..1e9f64).prop_map(Cell::Number),
        ".{0,12}".prop_map(Cell::Text),
    ]
}

fn arbitrary_sheet() -> impl Strategy<Value = Vec<RawRow>> {
    prop::collection::vec(prop::collection::vec(arbitrary_cell(), 0..24), 0..16)
}

proptest! {
    #![proptest_config(Config::with_cases(192))]
    #[test]
    fn projection_is_total_over_arbitrary_sheets(sheet in arbitrary_sheet()) {
        // Rows shorter than the highest referenced index must substitute empty
        // strings, never fail; every projected record lands in a defined bucket.
        let candidates: Vec<Candidate> = project_rows(&sheet);
        for candidate in &candidates {
            let _ = candidate.bucket();
        }

        let users: Vec<UserAccount> = project_rows(&sheet);
        for user in &users {
            prop_assert!(matches!(
                user.bucket(),
                Bucket::Pending | Bucket::Neither
            ));
        }
    }

    #[test]
    fn projected_record_count_never_exceeds_data_rows(sheet in arbitrary_sheet()) {
        let users: Vec<UserAccount> = project_rows(&sheet);
        prop_assert!(users.len() <= sheet.len());
    }
}
