//! Integration tests for the built-in format catalog.

use rstest::rstest;
use tessera_validator::prelude::*;

// ============================================================================
// CANONICAL EXAMPLES: every row of the table
// ============================================================================

#[test]
fn every_example_conforms() {
    let v = Validator::default();
    for format in Format::ALL {
        assert!(v.check(*format, format.example(), Plain), "{format}: {}", format.example());

        let outcome = v.check(*format, format.example(), Verbose);
        assert!(outcome.is_valid, "{format}");
        assert_eq!(outcome.kind, OutcomeKind::Matched);
        assert!(outcome.matches.is_some(), "{format}");
    }
}

#[test]
fn every_counterexample_is_rejected() {
    let v = Validator::default();
    for format in Format::ALL {
        assert!(
            !v.check(*format, format.counterexample(), Plain),
            "{format}: {}",
            format.counterexample()
        );

        let outcome = v.check(*format, format.counterexample(), Verbose);
        assert_eq!(outcome.kind, OutcomeKind::NoMatch, "{format}");
        assert!(outcome.matches.is_none());
    }
}

#[test]
fn empty_value_is_rejected_by_content_formats() {
    let v = Validator::default();
    for format in [Format::Email, Format::Uuid, Format::Ipv4, Format::Integer, Format::Md5] {
        assert!(!v.check(format, "", Plain), "{format}");
    }
}

// ============================================================================
// PER-FORMAT TABLE
// ============================================================================

#[rstest]
#[case::email_subaddress(Format::Email, "first.last+tag@sub.example.co.uk", true)]
#[case::email_double_at(Format::Email, "user@@example.com", false)]
#[case::url_localhost(Format::Url, "http://localhost:8080/health", true)]
#[case::url_without_scheme(Format::Url, "example.com", false)]
#[case::ipv4_zero(Format::Ipv4, "0.0.0.0", true)]
#[case::ipv4_broadcast(Format::Ipv4, "255.255.255.255", true)]
#[case::ipv4_leading_zero(Format::Ipv4, "01.2.3.4", false)]
#[case::ipv6_loopback(Format::Ipv6, "::1", true)]
#[case::ipv6_link_local(Format::Ipv6, "fe80::", true)]
#[case::ipv6_too_many_groups(Format::Ipv6, "1:2:3:4:5:6:7:8:9", false)]
#[case::mac_dashes(Format::MacAddress, "00-1A-2B-3C-4D-5E", true)]
#[case::domain_short(Format::Domain, "a.io", true)]
#[case::domain_single_label(Format::Domain, "localhost", false)]
#[case::port_min(Format::Port, "0", true)]
#[case::port_max(Format::Port, "65535", true)]
#[case::port_leading_zero(Format::Port, "080", false)]
#[case::integer_negative(Format::Integer, "-42", true)]
#[case::integer_fraction(Format::Integer, "4.2", false)]
#[case::decimal_negative(Format::Decimal, "-0.5", true)]
#[case::hex_prefixed(Format::Hexadecimal, "0xFF", true)]
#[case::binary(Format::Binary, "1010", true)]
#[case::binary_bad_digit(Format::Binary, "102", false)]
#[case::octal_prefixed(Format::Octal, "0o17", true)]
#[case::percentage(Format::Percentage, "99.5%", true)]
#[case::currency(Format::Currency, "$1,234.56", true)]
#[case::latitude_min(Format::Latitude, "-90", true)]
#[case::latitude_over(Format::Latitude, "90.5", false)]
#[case::longitude_min(Format::Longitude, "-180.0", true)]
#[case::longitude_over(Format::Longitude, "181", false)]
#[case::alpha(Format::Alpha, "Hello", true)]
#[case::alpha_digit(Format::Alpha, "Hello1", false)]
#[case::alphanumeric(Format::Alphanumeric, "abc123", true)]
#[case::ascii(Format::Ascii, "plain text", true)]
#[case::ascii_accent(Format::Ascii, "café", false)]
#[case::slug(Format::Slug, "my-post-title", true)]
#[case::slug_spaces(Format::Slug, "My Post", false)]
#[case::username(Format::Username, "john_doe", true)]
#[case::hashtag(Format::Hashtag, "#rust", true)]
#[case::mention(Format::Mention, "@alice", true)]
#[case::hex_color_short(Format::HexColor, "#fff", true)]
#[case::hex_color_long(Format::HexColor, "#abcdef", true)]
#[case::rgb_black(Format::RgbColor, "rgb(0,0,0)", true)]
#[case::base64(Format::Base64, "SGVsbG8=", true)]
#[case::jwt(Format::Jwt, "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxIn0.abc", true)]
#[case::semver(Format::Semver, "1.0.0", true)]
#[case::semver_two_parts(Format::Semver, "1.0", false)]
#[case::time24(Format::Time24, "23:59", true)]
#[case::time24_overflow(Format::Time24, "24:00", false)]
#[case::time12(Format::Time12, "12:30 PM", true)]
#[case::time12_overflow(Format::Time12, "13:00 PM", false)]
#[case::iso8601(Format::Iso8601, "2023-12-31T23:59:59Z", true)]
#[case::phone_e164(Format::Phone, "+14155552671", true)]
#[case::credit_card(Format::CreditCard, "4111111111111111", true)]
#[case::html_tag_embedded(Format::HtmlTag, "hello <b>world</b>", true)]
#[case::html_tag_comparison(Format::HtmlTag, "a < b", false)]
#[case::mime_type(Format::MimeType, "application/json", true)]
#[case::language_code(Format::LanguageCode, "en-US", true)]
#[case::country_code(Format::CountryCode, "US", true)]
#[case::currency_code(Format::CurrencyCode, "EUR", true)]
#[case::currency_code_lower(Format::CurrencyCode, "eur", false)]
#[case::camel_case(Format::CamelCase, "camelCase", true)]
#[case::camel_case_upper_start(Format::CamelCase, "CamelCase", false)]
#[case::pascal_case(Format::PascalCase, "PascalCase", true)]
#[case::snake_case(Format::SnakeCase, "snake_case", true)]
#[case::kebab_case(Format::KebabCase, "kebab-case", true)]
#[case::screaming_snake(Format::ScreamingSnakeCase, "SCREAMING_SNAKE", true)]
#[case::md5(Format::Md5, "d41d8cd98f00b204e9800998ecf8427e", true)]
#[case::md5_short(Format::Md5, "d41d8cd98f00b204e9800998ecf8427", false)]
#[case::sha1(Format::Sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709", true)]
#[case::uuid_uppercase(Format::Uuid, "550E8400-E29B-41D4-A716-446655440000", true)]
#[case::uuid_bad_variant(Format::Uuid, "550e8400-e29b-41d4-c716-446655440000", false)]
#[case::uuid_version_zero(Format::Uuid, "550e8400-e29b-01d4-a716-446655440000", false)]
#[case::isbn10(Format::Isbn10, "0-306-40615-2", true)]
#[case::isbn13(Format::Isbn13, "978-0-306-40615-7", true)]
#[case::ssn(Format::Ssn, "123-45-6789", true)]
#[case::iban(Format::Iban, "GB82WEST12345698765432", true)]
#[case::object_id(Format::ObjectId, "507f1f77bcf86cd799439011", true)]
#[case::vin(Format::Vin, "1HGCM82633A004352", true)]
fn format_table(#[case] format: Format, #[case] value: &str, #[case] expected: bool) {
    let v = Validator::default();
    assert_eq!(v.check(format, value, Plain), expected);
    assert_eq!(v.check(format, value, Verbose).is_valid, expected);
}

// ============================================================================
// FACADE METHODS
// ============================================================================

#[rstest]
#[case("user@example.com", true)]
#[case("user@example", false)]
fn named_method_matches_check(#[case] value: &str, #[case] expected: bool) {
    let v = Validator::default();
    assert_eq!(v.is_email(value, Plain), expected);
    assert_eq!(v.is_email(value, Verbose), v.check(Format::Email, value, Verbose));
}

#[test]
fn rgb_color_captures_channels() {
    let outcome = Validator::default().is_rgb_color("rgb(255, 128, 0)", Verbose);
    let matches = outcome.matches.expect("match data");
    let channels: Vec<_> = matches.iter().skip(1).map(|c| c.as_deref()).collect();
    assert_eq!(channels, [Some("255"), Some("128"), Some("0")]);
}

#[test]
fn html_tag_reports_the_tag_found() {
    let outcome = Validator::default().contains_html_tag("hello <b>world</b>", Verbose);
    assert_eq!(outcome.matched_text(), Some("<b>"));
}

#[test]
fn format_names_round_trip_through_from_str() {
    for format in Format::ALL {
        assert_eq!(format.to_string().parse::<Format>().unwrap(), *format);
    }
    assert_eq!("IPV4".parse::<Format>().unwrap(), Format::Ipv4);
}
