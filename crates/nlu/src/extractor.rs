//! Entity extraction — free text to typed slots.
//!
//! Each slot owns an ordered list of patterns; within a slot the first
//! matching pattern wins, and slots extract independently of each other
//! (the same span of text may feed several slots). A slot with no match
//! stays `None` — extraction never fails past the blank-input check, it
//! degrades to fewer known entities.
//!
//! All patterns are compiled once at program start via
//! `once_cell::sync::Lazy`.

use chrono::{Datelike, NaiveDate, Utc, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use shopmate_core::entities::Entities;
use shopmate_core::error::QueryError;
use tracing::debug;

// ── Slot pattern tables (order matters — first match wins per slot) ───────

static PRICE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)under\s*\$(\d+\.?\d*)").unwrap(),
        Regex::new(r"(?i)less than\s*\$(\d+\.?\d*)").unwrap(),
        Regex::new(r"(?i)cheaper than\s*\$(\d+\.?\d*)").unwrap(),
        Regex::new(r"(?i)\$(\d+\.?\d*)\s*or less").unwrap(),
        Regex::new(r"\$(\d+\.?\d*)").unwrap(),
    ]
});

static SIZE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)size[:\s]\s*(\w+)").unwrap(),
        Regex::new(r"(?i)in\s+(\w+)\s+size").unwrap(),
    ]
});

/// Closed color vocabulary; word-boundary matched so "blue" never fires
/// inside "blueberry".
static COLOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(white|black|blue|red|green|yellow|floral)\b").unwrap()
});

static CODE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r#"(?i)discount\s+code\s+['"]?([A-Za-z0-9]+)['"]?"#).unwrap(),
        Regex::new(r#"(?i)\bcode\s+['"]?([A-Za-z0-9]+)['"]?"#).unwrap(),
        Regex::new(r#"(?i)\bcoupon\s+['"]?([A-Za-z0-9]+)['"]?"#).unwrap(),
    ]
});

static DEADLINE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b(?:by|before)\s+(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b")
            .unwrap(),
        Regex::new(r"(?i)(?:arrive|deliver(?:ed|y)?)\s+by\s+(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b")
            .unwrap(),
    ]
});

/// Explicit "by <month> <day>" deadlines, resolved against the reference
/// year.
static DATE_DEADLINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:by|before)\s+(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{1,2})\b")
        .unwrap()
});

static RETURN_CUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)return policy|can i return|\breturns?\b|refund|exchange").unwrap()
});

// ── Product term patterns ─────────────────────────────────────────────────

static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"['"]([^'"]+)['"]"#).unwrap());

/// Verb-led noun phrases, bounded by a price/size/source cue or the end of
/// the sentence.
static PRODUCT_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"(?:looking for|find|need|want)\s+(?:a|an)?\s*([\w\s]+?)(?:\s+under|\s*\$|\s*\(|\s+in size|\s+with size|\s+color|\s+from|\s+at|\?|\.|,|$)",
        )
        .unwrap(),
        Regex::new(
            r"(?:find|get|show)\s+(?:me\s+)?(?:a|an)?\s*([\w\s]+?)(?:\s+under|\s*\$|\s*\(|\s+in size|\s+with size|\s+color|\s+from|\s+at|\?|\.|,|$)",
        )
        .unwrap(),
    ]
});

static FILLER_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(a|an|the|some)\b").unwrap());

/// Garment nouns the fallback recognizes, with an optional leading
/// adjective.
const PRODUCT_TYPES: &[&str] = &["skirt", "dress", "jacket", "sneakers", "shoes", "top"];

const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const WEEKDAYS: &[(&str, Weekday)] = &[
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Rule-based entity extractor.
///
/// Holds the catalog's known store names (unknown store mentions are
/// ignored, not errored) and a reference date for resolving weekday
/// deadlines (today by default; injectable for deterministic tests).
pub struct EntityExtractor {
    stores: Vec<String>,
    reference_date: NaiveDate,
}

impl EntityExtractor {
    pub fn new(stores: Vec<String>) -> Self {
        Self {
            stores,
            reference_date: Utc::now().date_naive(),
        }
    }

    /// Pin the date weekday deadlines resolve against.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    /// Extract all slots from the query text.
    ///
    /// Blank input is the only rejected case; every other miss leaves the
    /// slot absent.
    pub fn extract(&self, text: &str) -> Result<Entities, QueryError> {
        if text.trim().is_empty() {
            return Err(QueryError::Empty);
        }

        let lowered = text.to_lowercase();
        let mut entities = Entities {
            product_term: extract_product_term(&lowered),
            max_price: first_capture(&PRICE_PATTERNS, text).and_then(|s| s.parse().ok()),
            size: first_capture(&SIZE_PATTERNS, text).map(|s| s.to_uppercase()),
            color: COLOR_PATTERN
                .captures(&lowered)
                .map(|c| c[1].to_string()),
            store: self.extract_store(text),
            discount_code: first_capture(&CODE_PATTERNS, text),
            delivery_deadline: self.extract_deadline(&lowered),
            return_subject: None,
        };

        // The return subject is the mentioned store, when return cues
        // appear at all.
        if RETURN_CUE.is_match(&lowered) {
            entities.return_subject = entities.store.clone();
        }

        debug!(?entities, "extracted entities");
        Ok(entities)
    }

    /// Match any known store name on a word boundary. Mentions outside the
    /// known set are ignored.
    fn extract_store(&self, text: &str) -> Option<String> {
        for store in &self.stores {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(store));
            if let Ok(re) = Regex::new(&pattern)
                && re.is_match(text)
            {
                return Some(store.clone());
            }
        }
        None
    }

    /// Resolve a deadline: "by <weekday>" to the next occurrence of that
    /// weekday strictly after the reference date, or "by <month> <day>"
    /// to the next occurrence of that calendar date.
    fn extract_deadline(&self, lowered: &str) -> Option<NaiveDate> {
        self.weekday_deadline(lowered)
            .or_else(|| self.month_day_deadline(lowered))
    }

    fn weekday_deadline(&self, lowered: &str) -> Option<NaiveDate> {
        let day_name = first_capture(&DEADLINE_PATTERNS, lowered)?;
        let target = WEEKDAYS
            .iter()
            .find(|(name, _)| *name == day_name)
            .map(|(_, day)| *day)?;

        let current = self.reference_date.weekday().num_days_from_monday() as i64;
        let wanted = target.num_days_from_monday() as i64;
        let mut days_until = (wanted - current).rem_euclid(7);
        if days_until == 0 {
            // "by Monday" said on a Monday means next Monday.
            days_until = 7;
        }
        self.reference_date
            .checked_add_days(chrono::Days::new(days_until as u64))
    }

    fn month_day_deadline(&self, lowered: &str) -> Option<NaiveDate> {
        let captures = DATE_DEADLINE_PATTERN.captures(lowered)?;
        let month = MONTHS.iter().position(|m| *m == &captures[1])? as u32 + 1;
        let day: u32 = captures[2].parse().ok()?;

        let date = NaiveDate::from_ymd_opt(self.reference_date.year(), month, day)?;
        if date > self.reference_date {
            Some(date)
        } else {
            // The date already passed this year; the next occurrence is
            // meant.
            NaiveDate::from_ymd_opt(self.reference_date.year() + 1, month, day)
        }
    }
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.captures(text).map(|c| c[1].trim().to_string()))
        .filter(|s| !s.is_empty())
}

/// Best-effort product term extraction.
///
/// Priority: quoted phrase (unless it follows a code cue), then verb-led
/// indicator phrases, then a known garment noun with its leading adjective.
/// The result may be imprecise on loosely-bounded queries; that is a
/// documented limitation of the rule-based approach.
fn extract_product_term(lowered: &str) -> Option<String> {
    // Match and slice the same string: lowercasing can change byte
    // lengths, so offsets from the original text are not valid here.
    if let Some(m) = QUOTED.captures(lowered) {
        let quote_start = m.get(0).map(|g| g.start()).unwrap_or(0);
        // A quote right after "code"/"coupon" is the discount code, not
        // the product.
        let prefix = &lowered[..quote_start];
        if !prefix.contains("code") && !prefix.contains("coupon") {
            return Some(m[1].trim().to_string());
        }
    }

    for re in PRODUCT_INDICATORS.iter() {
        if let Some(m) = re.captures(lowered) {
            let cleaned = FILLER_WORDS.replace_all(&m[1], "");
            let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
            if !cleaned.is_empty() {
                return Some(cleaned);
            }
        }
    }

    for kind in PRODUCT_TYPES {
        if lowered.contains(kind) {
            let adj = Regex::new(&format!(r"(\w+)\s+{kind}")).ok()?;
            if let Some(m) = adj.captures(lowered) {
                let word = &m[1];
                if !FILLER_WORDS.is_match(word) {
                    return Some(format!("{word} {kind}"));
                }
            }
            return Some((*kind).to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(vec![
            "StoreA".into(),
            "StoreB".into(),
            "StoreC".into(),
        ])
        // A Wednesday.
        .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap())
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(extractor().extract("   ").unwrap_err(), QueryError::Empty);
        assert_eq!(extractor().extract("").unwrap_err(), QueryError::Empty);
    }

    #[test]
    fn full_search_query() {
        let e = extractor()
            .extract("Find a floral skirt under $140 in size S. Is it in stock, and can I apply a discount code 'SAVE10'?")
            .unwrap();
        assert_eq!(e.product_term.as_deref(), Some("floral skirt"));
        assert_eq!(e.max_price, Some(140.0));
        assert_eq!(e.size.as_deref(), Some("S"));
        assert_eq!(e.color.as_deref(), Some("floral"));
        assert_eq!(e.discount_code.as_deref(), Some("SAVE10"));
        assert_eq!(e.delivery_deadline, None);
    }

    #[test]
    fn sneaker_query_with_deadline() {
        let e = extractor()
            .extract("I need white sneakers (size 8) for under $80 that can arrive by Monday.")
            .unwrap();
        assert_eq!(e.product_term.as_deref(), Some("white sneakers"));
        assert_eq!(e.max_price, Some(80.0));
        assert_eq!(e.size.as_deref(), Some("8"));
        assert_eq!(e.color.as_deref(), Some("white"));
        // Wednesday the 12th → next Monday is the 17th.
        assert_eq!(
            e.delivery_deadline,
            Some(NaiveDate::from_ymd_opt(2024, 6, 17).unwrap())
        );
    }

    #[test]
    fn quoted_product_beats_indicators() {
        let e = extractor()
            .extract("I found a 'casual denim jacket' at $79 on StoreA. Any better deals?")
            .unwrap();
        assert_eq!(e.product_term.as_deref(), Some("casual denim jacket"));
        assert_eq!(e.max_price, Some(79.0));
        assert_eq!(e.store.as_deref(), Some("StoreA"));
    }

    #[test]
    fn quoted_code_is_not_a_product() {
        let e = extractor()
            .extract("Can I apply discount code 'SAVE10'?")
            .unwrap();
        assert_eq!(e.discount_code.as_deref(), Some("SAVE10"));
        assert_eq!(e.product_term, None);
    }

    #[test]
    fn bare_code_token_is_recognized() {
        let e = extractor().extract("does code SUMMER20 work?").unwrap();
        assert_eq!(e.discount_code.as_deref(), Some("SUMMER20"));
    }

    #[test]
    fn missing_price_stays_absent_not_zero() {
        let e = extractor().extract("find a cocktail dress").unwrap();
        assert_eq!(e.max_price, None);
        assert_eq!(e.product_term.as_deref(), Some("cocktail dress"));
    }

    #[test]
    fn price_pattern_priority_prefers_bound_phrases() {
        // "under $50" must win over the bare "$90" even though both match.
        let e = extractor()
            .extract("I saw it at $90 but want it under $50")
            .unwrap();
        assert_eq!(e.max_price, Some(50.0));
    }

    #[test]
    fn unknown_store_is_ignored() {
        let e = extractor().extract("find a skirt from MegaMart").unwrap();
        assert_eq!(e.store, None);
    }

    #[test]
    fn garment_fallback_picks_adjective() {
        let e = extractor().extract("any blue jacket in stock?").unwrap();
        assert_eq!(e.product_term.as_deref(), Some("blue jacket"));
    }

    #[test]
    fn return_subject_set_on_return_queries() {
        let e = extractor()
            .extract("I want to buy a cocktail dress from StoreB, but only if returns are hassle-free. Do they accept returns?")
            .unwrap();
        assert_eq!(e.store.as_deref(), Some("StoreB"));
        assert_eq!(e.return_subject.as_deref(), Some("StoreB"));
    }

    #[test]
    fn deadline_on_same_weekday_rolls_a_week() {
        // Reference date is a Wednesday; "by Wednesday" means the next one.
        let e = extractor().extract("deliver the skirt by Wednesday").unwrap();
        assert_eq!(
            e.delivery_deadline,
            Some(NaiveDate::from_ymd_opt(2024, 6, 19).unwrap())
        );
    }

    #[test]
    fn multibyte_text_before_a_quote_is_handled() {
        // Lowercasing 'İ' grows the string by a byte per character; the
        // quote offsets must come from the string being sliced.
        let e = extractor().extract("İİİab 'floral skirt' please").unwrap();
        assert_eq!(e.product_term.as_deref(), Some("floral skirt"));
    }

    #[test]
    fn explicit_month_day_deadline() {
        let e = extractor()
            .extract("I need the dress delivered by June 15")
            .unwrap();
        assert_eq!(
            e.delivery_deadline,
            Some(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        );
    }

    #[test]
    fn passed_month_day_deadline_rolls_to_next_year() {
        // June 12 is the reference date itself; the next June 12 is meant.
        let e = extractor().extract("deliver the skirt by June 12").unwrap();
        assert_eq!(
            e.delivery_deadline,
            Some(NaiveDate::from_ymd_opt(2025, 6, 12).unwrap())
        );
    }

    #[test]
    fn impossible_month_day_stays_absent() {
        let e = extractor().extract("need it by February 31").unwrap();
        assert_eq!(e.delivery_deadline, None);
    }

    #[test]
    fn size_colon_form() {
        let e = extractor().extract("dress size: M please").unwrap();
        assert_eq!(e.size.as_deref(), Some("M"));
    }

    #[test]
    fn gibberish_degrades_to_empty_entities() {
        let e = extractor().extract("qwxz blorp???").unwrap();
        assert!(e.is_empty());
    }
}
