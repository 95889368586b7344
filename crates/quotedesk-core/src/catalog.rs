//! # Currency & Localization Catalog
//!
//! Static catalogs the quote documents draw from: supported currencies,
//! supported languages, the closed set of document labels, and the
//! standard terms block.
//!
//! ## Design: Closed Enums, Fallible Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   "USD" ──► CurrencyCode::from_code ──┐   fallible (ConfigurationError) │
//! │   "es"  ──► Language::from_code ──────┤                                 │
//! │   "qty" ──► LabelKey::from_key ───────┘                                 │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │        closed enums, total functions from here on:                      │
//! │        translate(key, lang)   format_amount(x, ccy)   standard_terms    │
//! │                                                                         │
//! │   A typo'd key fails loudly at the boundary. It never ships as an      │
//! │   untranslated or mis-priced document.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigurationError;
use crate::money::round2;

// =============================================================================
// Currency Code
// =============================================================================

/// The currencies quotes can be denominated in.
///
/// One currency per quote; the engine never converts between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// United States dollar.
    Usd,
    /// Trinidad and Tobago dollar.
    Ttd,
    /// Euro.
    Eur,
}

impl CurrencyCode {
    /// The ISO 4217 code, as stored and transmitted.
    pub const fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Ttd => "TTD",
            CurrencyCode::Eur => "EUR",
        }
    }

    /// The symbol printed in front of amounts.
    pub const fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Ttd => "TT$",
            CurrencyCode::Eur => "€",
        }
    }

    /// Parses an ISO code. Unknown codes are an error, never a default.
    pub fn from_code(code: &str) -> Result<Self, ConfigurationError> {
        match code {
            "USD" => Ok(CurrencyCode::Usd),
            "TTD" => Ok(CurrencyCode::Ttd),
            "EUR" => Ok(CurrencyCode::Eur),
            other => Err(ConfigurationError::UnknownCurrency(other.to_string())),
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        CurrencyCode::Usd
    }
}

// =============================================================================
// Language
// =============================================================================

/// The languages documents can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Spanish.
    Es,
}

impl Language {
    /// The two-letter code, as stored and transmitted.
    pub const fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Parses a language code. Unknown codes are an error, never a default.
    pub fn from_code(code: &str) -> Result<Self, ConfigurationError> {
        match code {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(ConfigurationError::UnknownLanguage(other.to_string())),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

// =============================================================================
// Label Key
// =============================================================================

/// The closed set of labels a quote document uses.
///
/// Renderers ask for labels by key; the compiler guarantees every key has
/// a translation in every language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LabelKey {
    /// Document title.
    Quote,
    /// Sender block heading.
    From,
    /// Recipient block heading.
    To,
    /// Issue date caption.
    IssueDate,
    /// Validity date caption.
    ValidUntil,
    /// Items table: description column.
    Description,
    /// Items table: quantity column.
    Qty,
    /// Items table: unit price column.
    Price,
    /// Items table: row total column.
    Total,
    /// Totals block: subtotal row.
    Subtotal,
    /// Totals block: discount row.
    Discount,
    /// Totals block: tax row.
    Tax,
    /// Free-form notes heading.
    Notes,
    /// Terms block heading.
    TermsAndConditions,
    /// Footer message.
    ThankYou,
}

impl LabelKey {
    /// The snake_case key, as used in templates and serialized payloads.
    pub const fn key(&self) -> &'static str {
        match self {
            LabelKey::Quote => "quote",
            LabelKey::From => "from",
            LabelKey::To => "to",
            LabelKey::IssueDate => "issue_date",
            LabelKey::ValidUntil => "valid_until",
            LabelKey::Description => "description",
            LabelKey::Qty => "qty",
            LabelKey::Price => "price",
            LabelKey::Total => "total",
            LabelKey::Subtotal => "subtotal",
            LabelKey::Discount => "discount",
            LabelKey::Tax => "tax",
            LabelKey::Notes => "notes",
            LabelKey::TermsAndConditions => "terms_and_conditions",
            LabelKey::ThankYou => "thank_you",
        }
    }

    /// All keys, in document order. Handy for coverage checks and exports.
    pub const ALL: [LabelKey; 15] = [
        LabelKey::Quote,
        LabelKey::From,
        LabelKey::To,
        LabelKey::IssueDate,
        LabelKey::ValidUntil,
        LabelKey::Description,
        LabelKey::Qty,
        LabelKey::Price,
        LabelKey::Total,
        LabelKey::Subtotal,
        LabelKey::Discount,
        LabelKey::Tax,
        LabelKey::Notes,
        LabelKey::TermsAndConditions,
        LabelKey::ThankYou,
    ];

    /// Parses a label key. Unknown keys are an error, never a default.
    pub fn from_key(key: &str) -> Result<Self, ConfigurationError> {
        match key {
            "quote" => Ok(LabelKey::Quote),
            "from" => Ok(LabelKey::From),
            "to" => Ok(LabelKey::To),
            "issue_date" => Ok(LabelKey::IssueDate),
            "valid_until" => Ok(LabelKey::ValidUntil),
            "description" => Ok(LabelKey::Description),
            "qty" => Ok(LabelKey::Qty),
            "price" => Ok(LabelKey::Price),
            "total" => Ok(LabelKey::Total),
            "subtotal" => Ok(LabelKey::Subtotal),
            "discount" => Ok(LabelKey::Discount),
            "tax" => Ok(LabelKey::Tax),
            "notes" => Ok(LabelKey::Notes),
            "terms_and_conditions" => Ok(LabelKey::TermsAndConditions),
            "thank_you" => Ok(LabelKey::ThankYou),
            other => Err(ConfigurationError::UnknownLabel(other.to_string())),
        }
    }
}

// =============================================================================
// Translation
// =============================================================================

/// Returns the label text for a key in a language.
///
/// Total: once the inputs are parsed into the closed enums, every
/// combination has a translation.
pub const fn translate(key: LabelKey, language: Language) -> &'static str {
    match language {
        Language::En => match key {
            LabelKey::Quote => "QUOTE",
            LabelKey::From => "FROM",
            LabelKey::To => "TO",
            LabelKey::IssueDate => "Issue Date",
            LabelKey::ValidUntil => "Valid Until",
            LabelKey::Description => "DESCRIPTION",
            LabelKey::Qty => "QTY",
            LabelKey::Price => "PRICE",
            LabelKey::Total => "TOTAL",
            LabelKey::Subtotal => "Subtotal",
            LabelKey::Discount => "Discount",
            LabelKey::Tax => "Tax",
            LabelKey::Notes => "Notes",
            LabelKey::TermsAndConditions => "Terms & Conditions",
            LabelKey::ThankYou => "Thank you for your business!",
        },
        Language::Es => match key {
            LabelKey::Quote => "COTIZACIÓN",
            LabelKey::From => "DE",
            LabelKey::To => "PARA",
            LabelKey::IssueDate => "Fecha Emisión",
            LabelKey::ValidUntil => "Válido Hasta",
            LabelKey::Description => "DESCRIPCIÓN",
            LabelKey::Qty => "CANT",
            LabelKey::Price => "PRECIO",
            LabelKey::Total => "TOTAL",
            LabelKey::Subtotal => "Subtotal",
            LabelKey::Discount => "Descuento",
            LabelKey::Tax => "Impuesto",
            LabelKey::Notes => "Notas",
            LabelKey::TermsAndConditions => "Términos y Condiciones",
            LabelKey::ThankYou => "¡Gracias por su preferencia!",
        },
    }
}

// =============================================================================
// Standard Terms
// =============================================================================

/// English standard terms, printed on every quote in order.
const TERMS_EN: [&str; 9] = [
    "Payment of the first month is required to start the service.",
    "This quote is valid for the period specified above.",
    "Services are billed on a monthly or yearly basis unless otherwise specified.",
    "Prices are subject to change with 30 days prior notice.",
    "Cancellation requires 15 days written notice before the next billing cycle.",
    "Late payments beyond 5 days may result in temporary service suspension.",
    "You retain ownership of your content (text, images, customer data). The agency retains rights to the platform code and architecture.",
    "Acceptance of this quote constitutes agreement to the agency's full Terms & Conditions.",
    "The agency's total liability is limited to the amount paid for services in the current billing period.",
];

/// Spanish standard terms, same order and semantics as the English set.
const TERMS_ES: [&str; 9] = [
    "Se requiere el pago del primer mes para iniciar el servicio.",
    "Esta cotización es válida por el período indicado arriba.",
    "Los servicios se facturan mensual o anualmente salvo indicación contraria.",
    "Los precios están sujetos a cambios con 30 días de aviso previo.",
    "La cancelación requiere aviso por escrito con 15 días antes del próximo ciclo.",
    "Pagos atrasados más de 5 días pueden resultar en suspensión temporal del servicio.",
    "Usted conserva la propiedad de su contenido. La agencia retiene los derechos del código y arquitectura.",
    "La aceptación de esta cotización constituye acuerdo con los Términos y Condiciones completos de la agencia.",
    "La responsabilidad total de la agencia está limitada al monto pagado en el período de facturación actual.",
];

/// Returns the ordered standard terms for a language.
///
/// The list is fixed; it is attached verbatim to every document.
pub const fn standard_terms(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &TERMS_EN,
        Language::Es => &TERMS_ES,
    }
}

// =============================================================================
// Amount Formatting
// =============================================================================

/// Formats an amount for display: symbol, thousands separators, exactly
/// two decimals. Negative amounts carry the sign in front of the symbol.
///
/// ## Example
/// ```rust
/// use quotedesk_core::catalog::{format_amount, CurrencyCode};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("1234567.5").unwrap();
/// assert_eq!(format_amount(amount, CurrencyCode::Ttd), "TT$1,234,567.50");
/// ```
pub fn format_amount(amount: Decimal, currency: CurrencyCode) -> String {
    let rounded = round2(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = rounded.abs();

    // "1234567.50" → units "1234567", cents "50"
    let fixed = format!("{:.2}", abs);
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!(
        "{}{}{}.{}",
        sign,
        currency.symbol(),
        group_thousands(units),
        cents
    )
}

/// Inserts `,` every three digits from the right: "1234567" → "1,234,567".
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
