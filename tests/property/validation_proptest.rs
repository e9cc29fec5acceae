//! Property-based tests for form validation

use bookstore_admin::shared::validation::{
    validate_book_draft, validate_login, validate_registration, MIN_PASSWORD_LEN,
};
use bookstore_admin::shared::{BookDraft, Field};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_blank_username_always_blocks_login(blank in "[ \t]{0,5}", password in ".{4,20}") {
        let report = validate_login(&blank, &password);
        prop_assert!(!report.is_valid());
        prop_assert!(report.error_for(Field::Username).is_some());
    }

    #[test]
    fn test_short_password_always_blocks_login(username in "[a-z]{1,12}", password in "[a-z]{1,3}") {
        let report = validate_login(&username, &password);
        prop_assert!(password.chars().count() < MIN_PASSWORD_LEN);
        prop_assert_eq!(
            report.error_for(Field::Password),
            Some("Password must be at least 4 characters")
        );
    }

    #[test]
    fn test_registration_valid_iff_confirm_matches(
        username in "[a-z]{1,12}",
        password in "[a-z0-9]{4,16}",
        confirm in "[a-z0-9]{4,16}",
    ) {
        let report = validate_registration(&username, &password, &confirm);
        prop_assert_eq!(report.is_valid(), password == confirm);
    }

    #[test]
    fn test_summary_never_blocks_a_filled_draft(
        title in "[A-Za-z]{1,20}",
        summary in ".{0,40}",
        price in "[0-9]{1,4}",
        quantity in "[0-9]{1,3}",
    ) {
        let draft = BookDraft {
            title: title.clone(),
            author: title,
            summary,
            price,
            quantity,
        };
        prop_assert!(validate_book_draft(&draft).is_valid());
    }
}
