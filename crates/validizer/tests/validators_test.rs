//! Table-driven tests for the built-in validators.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use validizer::prelude::*;

// ============================================================================
// TEMPLATES
// ============================================================================

#[rstest]
#[case("a1b2c3", "A1B-2C3")]
#[case("A1B 2C3", "A1B-2C3")]
#[case(" a1b-2c3 ", "A1B-2C3")]
#[case("(a)1(b)2(c)3", "A1B-2C3")]
fn postal_code_normalizes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(PostalCode::default().validate(input).unwrap(), expected);
}

#[rstest]
#[case("a1b2c", ErrorKind::WrongLength)]
#[case("a1b2c3d", ErrorKind::WrongLength)]
#[case("11b2c3", ErrorKind::BadCharacter)]
#[case("", ErrorKind::WrongLength)]
fn postal_code_rejects(#[case] input: &str, #[case] kind: ErrorKind) {
    assert_eq!(PostalCode::default().validate(input).unwrap_err().kind, kind);
}

#[rstest]
#[case("7095551234", "+1 (709) 555-1234")]
#[case("1 709 555 1234", "+1 (709) 555-1234")]
#[case("+1 (709) 555-1234", "+1 (709) 555-1234")]
fn phone_normalizes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(Phone::default().validate(input).unwrap(), expected);
}

#[rstest]
#[case("abc123", "ABC 123")]
#[case("ABC-123", "ABC 123")]
fn licence_plate_normalizes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(LicencePlate::default().validate(input).unwrap(), expected);
}

#[test]
fn template_letters_upper_case_one_char_each() {
    let matcher = TemplateMatcher::parse("XXX 999").unwrap();
    let output = matcher.validate("aßc123").unwrap();
    assert_eq!(output, "AßC 123");
    assert_eq!(output.chars().count(), 7);
    assert_eq!(TemplateMatcher::parse("9x9").unwrap().validate("12").unwrap(), "1x2");
}

#[test]
fn custom_template_output_matches_template_length() {
    let matcher = TemplateMatcher::parse("99/99/XX").unwrap();
    let output = matcher.validate("1231ab").unwrap();
    assert_eq!(output, "12/31/AB");
    assert_eq!(output.len(), matcher.template().as_str().len());
}

// ============================================================================
// DIGIT GROUPS
// ============================================================================

#[rstest]
#[case("4111111111111111", Ok("4111-1111-1111-1111"))]
#[case("5500 0000 0000 0004", Ok("5500-0000-0000-0004"))]
#[case("3782-8224-6310-0050", Ok("3782-8224-6310-0050"))]
#[case("9111111111111111", Err(ErrorKind::UnknownCategory))]
#[case("411111111111111", Err(ErrorKind::WrongLength))]
#[case("4111-1111-1111-111x", Err(ErrorKind::BadCharacter))]
fn bank_card(#[case] input: &str, #[case] expected: Result<&str, ErrorKind>) {
    let result = BankCard::default().validate(input);
    assert_eq!(result.as_deref().map_err(|e| e.kind), expected);
}

#[test]
fn bank_card_issuer_lookup() {
    let card = BankCard::default();
    assert_eq!(card.issuer("4111-1111-1111-1111"), Some("Visa"));
    assert_eq!(card.issuer("9111"), None);
    assert_eq!(card.issuer_names(), "Amex, Visa, MasterCard");
}

// ============================================================================
// OPTIONS
// ============================================================================

fn genres() -> OptionSet {
    OptionSet::parse("Rock, Pop, Jazz, Rap")
}

#[rstest]
#[case("ro", Ok("Rock"))]
#[case("JA", Ok("Jazz"))]
#[case("  pop  ", Ok("Pop"))]
#[case("r", Err(ErrorKind::AmbiguousMatch))]
#[case("metal", Err(ErrorKind::NoMatch))]
#[case("", Err(ErrorKind::Blank))]
fn autocomplete(#[case] input: &str, #[case] expected: Result<&str, ErrorKind>) {
    let matcher = OptionMatcher::new(genres()).autocomplete(true);
    let result = matcher.validate(input);
    assert_eq!(result.as_deref().map_err(|e| e.kind), expected);
}

#[rstest]
#[case("rock", Ok("Rock"))]
#[case("ro", Err(ErrorKind::NoMatch))]
fn exact_options(#[case] input: &str, #[case] expected: Result<&str, ErrorKind>) {
    let matcher = OptionMatcher::new(genres());
    let result = matcher.validate(input);
    assert_eq!(result.as_deref().map_err(|e| e.kind), expected);
}

#[test]
fn ambiguous_match_lists_candidates() {
    let error = OptionMatcher::new(genres())
        .autocomplete(true)
        .validate("r")
        .unwrap_err();
    assert_eq!(error.param("matches"), Some("Rock, Rap"));
}

// ============================================================================
// NUMBERS AND RANGES
// ============================================================================

#[rstest]
#[case("5-10", true)]
#[case("5 - 10", true)]
#[case("5 to 10", false)]
#[case("10-5", false)]
#[case("5-5", true)]
#[case("0.5-1.5", true)]
#[case("-5-10", true)]
#[case("-10--5", true)]
#[case("-5--10", false)]
fn range(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(Range::new().validate(input).is_ok(), ok, "input {input:?}");
}

#[rstest]
#[case("10-5", ErrorKind::MalformedRange)]
#[case("5", ErrorKind::MalformedRange)]
#[case("1-2-3", ErrorKind::MalformedRange)]
#[case("a-b", ErrorKind::BadCharacter)]
fn range_errors(#[case] input: &str, #[case] kind: ErrorKind) {
    assert_eq!(Range::new().validate(input).unwrap_err().kind, kind);
}

#[test]
fn negative_range_bounds_number() {
    let bounds = Range::new().validate("-5-10").unwrap();
    assert_eq!(bounds.lo(), NumberValue::Float(-5.0));

    let number = Number::new().range_str("-5-5").unwrap();
    assert_eq!(number.validate("-3").unwrap(), NumberOutput::Integer(-3));
}

#[test]
fn integer_coercion_overflow_is_out_of_range() {
    let number = Number::new().format(NumberFormat::Integer);
    assert_eq!(
        number.validate("1e30").unwrap_err().kind,
        ErrorKind::OutOfRange
    );
}

#[rstest]
#[case(NumberFormat::Any, "2.5", NumberOutput::Float(2.5))]
#[case(NumberFormat::Any, "2", NumberOutput::Integer(2))]
#[case(NumberFormat::Integer, "2.9", NumberOutput::Integer(2))]
#[case(NumberFormat::Float, "2", NumberOutput::Float(2.0))]
#[case(NumberFormat::Currency, "2", NumberOutput::Currency("$2.00".into()))]
fn number_formats(
    #[case] format: NumberFormat,
    #[case] input: &str,
    #[case] expected: NumberOutput,
) {
    assert_eq!(Number::new().format(format).validate(input).unwrap(), expected);
}

#[test]
fn number_range_is_inclusive() {
    let number = Number::new().range_str("5-10").unwrap();
    assert!(number.validate("5").is_ok());
    assert!(number.validate("10").is_ok());
    assert_eq!(
        number.validate("10.01").unwrap_err().kind,
        ErrorKind::OutOfRange
    );
}

// ============================================================================
// DATES AND NAMES
// ============================================================================

#[rstest]
#[case("2024-02-29", Some((2024, 2, 29)))]
#[case("2023-02-29", None)]
#[case("2000 02 29", Some((2000, 2, 29)))]
#[case("1900 02 29", None)]
#[case("2023 04 31", None)]
#[case("2023 12 31", Some((2023, 12, 31)))]
fn dates(#[case] input: &str, #[case] expected: Option<(i32, u32, u32)>) {
    let expected =
        expected.map(|(y, m, d)| DateValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap()));
    assert_eq!(Date::new().validate(input).ok(), expected);
}

#[rstest]
#[case("john smith", "John Smith")]
#[case("  JANE   doe ", "Jane Doe")]
#[case("o'brien-smith", "O'Brien-Smith")]
fn names(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(Name::default().validate(input).unwrap(), expected);
}

// ============================================================================
// REGISTRY
// ============================================================================

#[rstest]
#[case("phone number", "7095551234", Value::Text("+1 (709) 555-1234".into()))]
#[case("Bank-Card", "4111111111111111", Value::Text("4111-1111-1111-1111".into()))]
#[case("MCP", "123456789012", Value::Text("123 456 789 012".into()))]
#[case("number", "-3", Value::Integer(-3))]
#[case(
    "date",
    "2024 02 29",
    Value::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
)]
fn registry_dispatch(#[case] name: &str, #[case] input: &str, #[case] expected: Value) {
    let registry = Registry::new(ValidatorConfig::default()).unwrap();
    assert_eq!(registry.validate_named(name, input).unwrap(), expected);
}

#[test]
fn registry_values_serialize() {
    let registry = Registry::new(ValidatorConfig::default()).unwrap();
    let range = registry.validate(ValidatorKind::Range, "5-10").unwrap();
    assert_eq!(serde_json::to_string(&range).unwrap(), "[5.0,10.0]");

    let date = registry.validate(ValidatorKind::Date, "2024 2 29").unwrap();
    assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-02-29\"");
}
