//! Quote lifecycle integration tests for quotedesk-core.
//! Exercises creation, mutation, pricing, numbering and localization
//! together, the way a host backend drives the engine.

use chrono::{Duration, TimeZone, Utc};
use quotedesk_core::catalog::{format_amount, standard_terms, translate};
use quotedesk_core::clock::FixedClock;
use quotedesk_core::number::generate_unique_document_number;
use quotedesk_core::{
    CurrencyCode, DiscountPolicy, LabelKey, Language, LineItem, Quote, QuoteDraft, QuoteError,
    TaxRate,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::str::FromStr;

/// Helper: parse a decimal literal.
fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Helper: build a line item from string literals.
fn item(description: &str, quantity: &str, unit_price: &str) -> LineItem {
    LineItem::new(description, d(quantity), d(unit_price))
}

/// Helper: a frozen clock on a known issue date.
fn march_7() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 3, 7, 9, 30, 0).unwrap())
}

#[test]
fn full_quote_lifecycle() {
    let clock = march_7();
    let mut rng = StdRng::seed_from_u64(7);

    // Quotes start empty; the editor adds rows one by one.
    let quote = Quote::create(QuoteDraft::default(), &clock, &mut rng).unwrap();
    assert!(quote.total().is_zero());

    let quote = quote.add_item(item("Website redesign", "1", "1500.00")).unwrap();
    let quote = quote.add_item(item("Hosting (12 months)", "12", "58.33")).unwrap();
    assert_eq!(quote.subtotal().amount, d("2199.96"));

    // Sales applies a 10% discount, then the 15% levy.
    let quote = quote
        .set_discount(DiscountPolicy::Percentage { value: d("10") })
        .unwrap();
    let quote = quote.set_tax_rate(TaxRate::from_percent(d("15"))).unwrap();

    assert_eq!(quote.discount_amount().amount, d("220.00"));
    assert_eq!(quote.tax_amount().amount, d("296.99"));
    assert_eq!(quote.total().amount, d("2276.95"));

    // The derived fields always agree with the stored inputs.
    let totals = quote.totals();
    assert_eq!(
        totals.total,
        (totals.subtotal - totals.discount_amount + totals.tax_amount).max(Decimal::ZERO)
    );
}

#[test]
fn mutations_are_snapshots_and_failed_ones_change_nothing() {
    let clock = march_7();
    let mut rng = StdRng::seed_from_u64(7);

    let draft = QuoteDraft {
        items: vec![item("Retainer", "1", "1000.00")],
        ..QuoteDraft::default()
    };
    let original = Quote::create(draft, &clock, &mut rng).unwrap();

    // A rejected mutation returns the error and leaves the input as-is.
    let err = original.add_item(item("", "1", "10.00")).unwrap_err();
    assert!(matches!(err, QuoteError::Validation(_)));
    assert_eq!(original.items().len(), 1);
    assert_eq!(original.total().amount, d("1000.00"));

    // A successful mutation yields a new value; the original still stands.
    let updated = original
        .set_discount(DiscountPolicy::Fixed { amount: d("100.00") })
        .unwrap();
    assert_eq!(updated.total().amount, d("900.00"));
    assert_eq!(original.total().amount, d("1000.00"));
    assert_eq!(updated.id(), original.id());
}

#[test]
fn document_numbers_are_unique_against_a_store() {
    let clock = march_7();
    let mut rng = StdRng::seed_from_u64(3);

    // The host checks candidates against its store; here, a set.
    let mut taken: HashSet<String> = HashSet::new();
    let mut quotes = Vec::new();

    for _ in 0..50 {
        let number =
            generate_unique_document_number(&clock, &mut rng, |n| taken.contains(n)).unwrap();
        taken.insert(number.clone());

        let draft = QuoteDraft {
            document_number: Some(number),
            ..QuoteDraft::default()
        };
        quotes.push(Quote::create(draft, &clock, &mut rng).unwrap());
    }

    let numbers: HashSet<&str> = quotes.iter().map(|q| q.document_number()).collect();
    assert_eq!(numbers.len(), 50);
    assert!(numbers.iter().all(|n| n.starts_with("QT-20250307-")));
}

#[test]
fn saturated_number_space_fails_loudly() {
    let clock = march_7();
    let mut rng = StdRng::seed_from_u64(3);

    let err = generate_unique_document_number(&clock, &mut rng, |_| true).unwrap_err();
    match err {
        QuoteError::IdentifierCollision { attempts } => assert_eq!(attempts, 5),
        other => panic!("expected IdentifierCollision, got {other:?}"),
    }
}

#[test]
fn reissue_refreshes_dates_and_nothing_else() {
    let clock = march_7();
    let mut rng = StdRng::seed_from_u64(11);

    let draft = QuoteDraft {
        items: vec![item("Design sprint", "2", "2400.00")],
        discount: DiscountPolicy::Percentage { value: d("5") },
        tax_rate: TaxRate::from_percent(d("12.5")),
        ..QuoteDraft::default()
    };
    let quote = Quote::create(draft, &clock, &mut rng).unwrap();

    // Customer came back after the window lapsed.
    let after_expiry = quote.valid_until() + Duration::days(3);
    assert!(quote.is_expired(after_expiry));

    let reissued = quote.reissue(after_expiry);
    assert_eq!(reissued.issued_at(), after_expiry);
    assert_eq!(reissued.valid_until(), after_expiry + Duration::days(15));
    assert!(!reissued.is_expired(after_expiry));

    assert_eq!(reissued.document_number(), quote.document_number());
    assert_eq!(reissued.items(), quote.items());
    assert_eq!(reissued.totals(), quote.totals());
}

#[test]
fn spanish_ttd_document_renders_from_catalog() {
    let clock = march_7();
    let mut rng = StdRng::seed_from_u64(21);

    let draft = QuoteDraft {
        items: vec![item("Rediseño del sitio web", "1", "15000.00")],
        tax_rate: TaxRate::from_percent(d("12.5")),
        currency: CurrencyCode::Ttd,
        language: Language::Es,
        ..QuoteDraft::default()
    };
    let quote = Quote::create(draft, &clock, &mut rng).unwrap();

    // The pieces a renderer would pull for the header and totals block.
    let lang = quote.language();
    assert_eq!(translate(LabelKey::Quote, lang), "COTIZACIÓN");
    assert_eq!(translate(LabelKey::ValidUntil, lang), "Válido Hasta");
    assert_eq!(translate(LabelKey::Tax, lang), "Impuesto");

    assert_eq!(
        format_amount(quote.total().amount, quote.currency()),
        "TT$16,875.00"
    );
    assert_eq!(format!("{}", quote.total()), "TT$16,875.00");

    // Terms print in full, in order.
    let terms = standard_terms(lang);
    assert_eq!(terms.len(), 9);
    assert!(terms[0].starts_with("Se requiere el pago"));
}

#[test]
fn clamped_discount_never_drives_total_negative() {
    let clock = march_7();
    let mut rng = StdRng::seed_from_u64(31);

    let draft = QuoteDraft {
        items: vec![item("Small fix", "1", "80.00")],
        discount: DiscountPolicy::Fixed { amount: d("500.00") },
        tax_rate: TaxRate::from_percent(d("15")),
        ..QuoteDraft::default()
    };
    let quote = Quote::create(draft, &clock, &mut rng).unwrap();

    assert_eq!(quote.discount_amount().amount, d("80.00"));
    assert_eq!(quote.tax_amount().amount, d("0.00"));
    assert_eq!(quote.total().amount, d("0.00"));
}

#[test]
fn persistence_round_trip_preserves_the_document() {
    let clock = march_7();
    let mut rng = StdRng::seed_from_u64(41);

    let draft = QuoteDraft {
        items: vec![
            item("Discovery workshop", "1", "1200.00"),
            item("Implementation", "37.5", "95.00"),
        ],
        discount: DiscountPolicy::Fixed { amount: d("250.00") },
        tax_rate: TaxRate::from_percent(d("15")),
        currency: CurrencyCode::Eur,
        notes: Some("Workshop can run remote if preferred.".to_string()),
        ..QuoteDraft::default()
    };
    let quote = Quote::create(draft, &clock, &mut rng).unwrap();

    // Host persists the JSON payload and loads it back later.
    let json = serde_json::to_string(&quote).unwrap();
    let loaded: Quote = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded.id(), quote.id());
    assert_eq!(loaded.document_number(), quote.document_number());
    assert_eq!(loaded.issued_at(), quote.issued_at());
    assert_eq!(loaded.valid_until(), quote.valid_until());
    assert_eq!(loaded.items(), quote.items());
    assert_eq!(loaded.totals(), quote.totals());
    assert_eq!(loaded.currency(), CurrencyCode::Eur);

    // And the loaded copy keeps behaving like the engine built it.
    let touched = loaded.add_item(item("Support", "1", "100.00")).unwrap();
    assert_eq!(
        touched.subtotal().amount,
        quote.subtotal().amount + d("100.00")
    );
}
