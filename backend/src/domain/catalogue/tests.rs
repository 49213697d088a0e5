//! Unit tests for catalogue draft construction.

use rstest::rstest;
use rust_decimal::Decimal;

use super::*;

fn price(raw: &str) -> Decimal {
    raw.parse().expect("valid decimal literal")
}

#[rstest]
fn part_draft_trims_and_normalises_fields() {
    let draft = PartDraft::try_new(
        "  Oil filter ",
        " fits most sedans ",
        price("7.5"),
        Some("   "),
        4,
        0,
    )
    .expect("valid part");

    assert_eq!(draft.name(), "Oil filter");
    assert_eq!(draft.description(), "fits most sedans");
    assert_eq!(draft.image_url(), None);
    assert_eq!(draft.quantity(), 0);
}

#[rstest]
#[case("0")]
#[case("-3.10")]
#[case("0.004")]
fn part_draft_rejects_non_positive_price(#[case] raw: &str) {
    let result = PartDraft::try_new("Bulb", "", price(raw), None, 1, 1);
    assert!(matches!(
        result,
        Err(CatalogueValidationError::NonPositivePrice { .. })
    ));
}

#[rstest]
fn part_draft_rounds_price_to_cents() {
    let draft = PartDraft::try_new("Bulb", "", price("2.345"), None, 1, 1).expect("valid part");
    assert_eq!(draft.price(), price("2.34"));
}

#[rstest]
fn part_draft_accepts_max_price_and_rejects_beyond() {
    assert!(PartDraft::try_new("Engine", "", MAX_PRICE, None, 1, 1).is_ok());
    let result = PartDraft::try_new("Engine", "", price("10000000000"), None, 1, 1);
    assert!(matches!(
        result,
        Err(CatalogueValidationError::PriceOutOfRange { .. })
    ));
}

#[rstest]
fn part_draft_rejects_negative_quantity() {
    let result = PartDraft::try_new("Bulb", "", price("1"), None, 1, -1);
    assert_eq!(
        result,
        Err(CatalogueValidationError::NegativeValue {
            field: "part.quantity",
            value: -1,
        })
    );
}

#[rstest]
#[case(0)]
#[case(-2)]
fn part_draft_rejects_non_positive_subcategory(#[case] subcategory_id: i32) {
    let result = PartDraft::try_new("Bulb", "", price("1"), None, subcategory_id, 1);
    assert_eq!(
        result,
        Err(CatalogueValidationError::InvalidReference {
            field: "part.subcategory_id",
            value: subcategory_id,
        })
    );
}

#[rstest]
#[case::group(GroupDraft::try_new(" ").map(|_| ()), "group.name")]
#[case::category(CategoryDraft::try_new(1, "", "desc").map(|_| ()), "category.name")]
#[case::subcategory(SubcategoryDraft::try_new(1, "\t").map(|_| ()), "subcategory.name")]
#[case::part(PartDraft::try_new("", "", Decimal::ONE, None, 1, 1).map(|_| ()), "part.name")]
fn drafts_reject_blank_names(
    #[case] result: Result<(), CatalogueValidationError>,
    #[case] field: &'static str,
) {
    assert_eq!(result, Err(CatalogueValidationError::EmptyField { field }));
}

#[rstest]
fn category_draft_allows_empty_description() {
    let draft = CategoryDraft::try_new(2, "Filters", "").expect("valid category");
    assert_eq!(draft.description(), "");
    assert_eq!(draft.group_id(), 2);
}

#[rstest]
fn category_draft_requires_group_reference() {
    let result = CategoryDraft::try_new(0, "Filters", "");
    assert!(matches!(
        result,
        Err(CatalogueValidationError::InvalidReference {
            field: "category.group_id",
            ..
        })
    ));
}

#[rstest]
fn validation_errors_render_readable_messages() {
    let err = CatalogueValidationError::NonPositivePrice {
        price: Decimal::ZERO,
    };
    assert_eq!(err.to_string(), "price must be greater than zero (got 0)");
}

#[rstest]
fn part_serialises_price_as_string_and_skips_missing_image() {
    let now = chrono::Utc::now();
    let part = Part {
        id: 1,
        name: "Spark plug".to_owned(),
        description: String::new(),
        price: price("4.20"),
        image_url: None,
        subcategory_id: 3,
        quantity: 12,
        created_at: now,
        updated_at: now,
    };
    let value = serde_json::to_value(&part).expect("serialise part");
    assert_eq!(value["price"], "4.20");
    assert!(value.get("image_url").is_none());
    assert_eq!(value["subcategory_id"], 3);
}
