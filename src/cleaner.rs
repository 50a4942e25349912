use anyhow::{Context, anyhow};
use regex::Regex;

use crate::record::{CleanedRecord, ThemeRecord};

/// What a field does when it still can't be parsed after stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnParseError {
    Fail,
    Default(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// Parsed as a decimal and truncated toward zero.
    Decimal,
    /// Parsed as an integer as-is.
    Integer,
}

/// How one raw text field becomes an integer.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    /// Removed everywhere in the raw text before parsing.
    pub strip: &'static str,
    pub number: NumberKind,
    /// Multiply by 1000 when the raw text carried a `K` suffix.
    pub scale_thousands: bool,
    pub on_error: OnParseError,
}

pub const PRICE: FieldRule = FieldRule {
    field: "price",
    strip: r"[$,]",
    number: NumberKind::Decimal,
    scale_thousands: false,
    on_error: OnParseError::Default(0),
};

pub const RATING_COUNT: FieldRule = FieldRule {
    field: "rating count",
    strip: r"[()K]",
    number: NumberKind::Decimal,
    scale_thousands: true,
    on_error: OnParseError::Fail,
};

// Unlike ratings, a "K" in the sales count is dropped without scaling.
pub const SALES_COUNT: FieldRule = FieldRule {
    field: "sales count",
    strip: r"K|Sales",
    number: NumberKind::Integer,
    scale_thousands: false,
    on_error: OnParseError::Fail,
};

struct CompiledRule {
    rule: FieldRule,
    strip: Regex,
}

impl CompiledRule {
    fn new(rule: FieldRule) -> anyhow::Result<Self> {
        let strip = Regex::new(rule.strip)
            .with_context(|| format!("bad strip pattern for {}", rule.field))?;
        Ok(Self { rule, strip })
    }

    fn apply(&self, raw: &str) -> anyhow::Result<i64> {
        let stripped = self.strip.replace_all(raw, "");
        let text = stripped.trim();
        let parsed = match self.rule.number {
            NumberKind::Decimal => {
                let scale = if self.rule.scale_thousands && raw.contains('K') {
                    1000.0
                } else {
                    1.0
                };
                text.parse::<f64>().ok().and_then(|v| truncate_to_i64(v * scale))
            }
            NumberKind::Integer => text.parse::<i64>().ok(),
        };
        match (parsed, self.rule.on_error) {
            (Some(value), _) => Ok(value),
            (None, OnParseError::Default(value)) => Ok(value),
            (None, OnParseError::Fail) => {
                Err(anyhow!("can't parse {} from {raw:?}", self.rule.field))
            }
        }
    }
}

/// 2^63, the first value past `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Truncates toward zero. Values that don't fit an `i64` (and NaN/inf) count
/// as unparseable rather than saturating.
fn truncate_to_i64(value: f64) -> Option<i64> {
    let value = value.trunc();
    (value >= -I64_LIMIT && value < I64_LIMIT).then_some(value as i64)
}

/// Turns scraped text fields into integers, one [`FieldRule`] per field.
pub struct Cleaner {
    price: CompiledRule,
    rating_count: CompiledRule,
    sales_count: CompiledRule,
}

impl Cleaner {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            price: CompiledRule::new(PRICE)?,
            rating_count: CompiledRule::new(RATING_COUNT)?,
            sales_count: CompiledRule::new(SALES_COUNT)?,
        })
    }

    pub fn price(&self, raw: &str) -> anyhow::Result<i64> {
        self.price.apply(raw)
    }

    pub fn rating_count(&self, raw: &str) -> anyhow::Result<i64> {
        self.rating_count.apply(raw)
    }

    pub fn sales_count(&self, raw: &str) -> anyhow::Result<i64> {
        self.sales_count.apply(raw)
    }

    pub fn clean_record(&self, record: ThemeRecord) -> anyhow::Result<CleanedRecord> {
        Ok(CleanedRecord {
            price: self.price(&record.price)?,
            rating_count: self.rating_count(&record.rating_count)?,
            sales_count: self.sales_count(&record.sales_count)?,
            name: record.name,
            author: record.author,
        })
    }

    /// Cleans every record, failing on the first field that won't parse.
    pub fn clean_records(
        &self,
        records: Vec<ThemeRecord>,
    ) -> anyhow::Result<Vec<CleanedRecord>> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                self.clean_record(record)
                    .with_context(|| format!("failed to clean record {index}"))
            })
            .collect()
    }
}
