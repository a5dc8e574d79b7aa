use rust_decimal::Decimal;
use tracing::debug;

use crate::analysis::constants::*;
use crate::error::RowError;
use crate::models::{Column, DailySales, MenuItem, Price, RawRow};

/// Validate one raw row and build a `MenuItem` from it.
///
/// Checks run in a fixed order and stop at the first violation:
/// required columns, price, ratings, daily sales, then the text fields.
pub fn validate_row(row: &RawRow) -> Result<MenuItem, RowError> {
    let missing: Vec<Column> = Column::REQUIRED
        .into_iter()
        .filter(|c| row.get(c.as_str()).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(RowError::MissingColumn {
            row: row.index,
            columns: missing,
        });
    }

    let field = |c: Column| row.get(c.as_str()).unwrap_or_default();

    let price = parse_price(row.index, field(Column::Price))?;
    let ratings = parse_ratings(row.index, field(Column::Ratings))?;
    let daily_sales = parse_daily_sales(row.index, field(Column::SalesPerDay))?;
    let name = non_empty(row.index, Column::Item, field(Column::Item))?;
    let category = non_empty(row.index, Column::Category, field(Column::Category))?;

    debug!(row = row.index, item = %name, "row validated");
    Ok(MenuItem::from_validated(
        name,
        price,
        category,
        ratings,
        daily_sales,
    ))
}

/// Parse a price with exactly `PRICE_DECIMALS` fractional digits into cents.
pub fn parse_price(row: usize, raw: &str) -> Result<Price, RowError> {
    let value = raw.trim();
    let malformed = || RowError::MalformedNumber {
        row,
        column: Column::Price,
        value: raw.to_string(),
    };

    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(frac) {
        return Err(malformed());
    }
    if frac.len() != PRICE_DECIMALS {
        return Err(RowError::Precision {
            row,
            value: raw.to_string(),
        });
    }

    let whole: u64 = whole.parse().map_err(|_| malformed())?;
    let frac: u64 = frac.parse().map_err(|_| malformed())?;
    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac))
        .ok_or_else(malformed)?;

    if negative || cents == 0 {
        return Err(RowError::Range {
            row,
            column: Column::Price,
            value: raw.to_string(),
            reason: "price must be greater than 0",
        });
    }

    Ok(Price::from_cents(cents))
}

/// Parse a comma-separated list of ratings, each within the rating scale.
///
/// Ratings stay exact decimals so averaging never depends on binary rounding.
pub fn parse_ratings(row: usize, raw: &str) -> Result<Vec<Decimal>, RowError> {
    if raw.trim().is_empty() {
        return Err(RowError::EmptyField {
            row,
            column: Column::Ratings,
        });
    }

    raw.split(',')
        .map(str::trim)
        .map(|part| -> Result<Decimal, RowError> {
            let rating: Decimal = part.parse().map_err(|_| RowError::MalformedNumber {
                row,
                column: Column::Ratings,
                value: part.to_string(),
            })?;
            if !(RATING_SCALE_MIN..=RATING_SCALE_MAX).contains(&rating) {
                return Err(RowError::Range {
                    row,
                    column: Column::Ratings,
                    value: part.to_string(),
                    reason: "rating must be between 0 and 5",
                });
            }
            Ok(rating)
        })
        .collect()
}

/// Parse exactly `DAYS_PER_WEEK` comma-separated non-negative sales counts.
pub fn parse_daily_sales(row: usize, raw: &str) -> Result<DailySales, RowError> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != DAYS_PER_WEEK {
        return Err(RowError::CountMismatch {
            row,
            expected: DAYS_PER_WEEK,
            found: parts.len(),
            value: raw.to_string(),
        });
    }

    let mut counts = [0u32; DAYS_PER_WEEK];
    for (slot, part) in counts.iter_mut().zip(parts) {
        let malformed = || RowError::MalformedNumber {
            row,
            column: Column::SalesPerDay,
            value: part.to_string(),
        };
        let signed: i64 = part.parse().map_err(|_| malformed())?;
        if signed < 0 {
            return Err(RowError::Range {
                row,
                column: Column::SalesPerDay,
                value: part.to_string(),
                reason: "sales must not be negative",
            });
        }
        *slot = u32::try_from(signed).map_err(|_| malformed())?;
    }

    Ok(DailySales::new(counts))
}

fn non_empty(row: usize, column: Column, raw: &str) -> Result<String, RowError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RowError::EmptyField { row, column });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        RawRow::from_pairs(1, pairs.iter().copied())
    }

    fn valid_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("item", "Garlic Bread"),
            ("price", "6.99"),
            ("category", "Starter"),
            ("ratings", "4.8,4.9,4.7"),
            ("sales_per_day", "10,5,1,15,3,5,10"),
        ]
    }

    #[test]
    fn test_valid_row() {
        let item = validate_row(&row(&valid_pairs())).unwrap();
        assert_eq!(item.name(), "Garlic Bread");
        assert_eq!(item.price().cents(), 699);
        assert_eq!(item.category(), "Starter");
        assert_eq!(item.ratings(), &[dec!(4.8), dec!(4.9), dec!(4.7)]);
        assert_eq!(item.daily_sales().counts(), &[10, 5, 1, 15, 3, 5, 10]);
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let mut pairs = valid_pairs();
        pairs[0] = ("item", "  Garlic Bread ");
        let item = validate_row(&row(&pairs)).unwrap();
        assert_eq!(item.name(), "Garlic Bread");
    }

    #[test]
    fn test_missing_columns_reported_together() {
        let pairs: Vec<_> = valid_pairs()
            .into_iter()
            .filter(|(k, _)| *k != "price" && *k != "category")
            .collect();
        let err = validate_row(&row(&pairs)).unwrap_err();
        assert_eq!(
            err,
            RowError::MissingColumn {
                row: 1,
                columns: vec![Column::Price, Column::Category],
            }
        );
    }

    #[test]
    fn test_price_precision() {
        assert!(matches!(parse_price(1, "20"), Err(RowError::Precision { .. })));
        assert!(matches!(parse_price(1, "9.5"), Err(RowError::Precision { .. })));
        assert!(matches!(parse_price(1, "9.999"), Err(RowError::Precision { .. })));
        assert_eq!(parse_price(1, " 19.99 ").unwrap().cents(), 1999);
    }

    #[test]
    fn test_price_malformed_and_range() {
        assert!(matches!(
            parse_price(1, "abc"),
            Err(RowError::MalformedNumber { .. })
        ));
        assert!(matches!(
            parse_price(1, "1e2"),
            Err(RowError::MalformedNumber { .. })
        ));
        assert!(matches!(parse_price(1, "0.00"), Err(RowError::Range { .. })));
        assert!(matches!(parse_price(1, "-1.50"), Err(RowError::Range { .. })));
    }

    #[test]
    fn test_single_rating_is_valid() {
        assert_eq!(parse_ratings(1, "5.0").unwrap(), vec![dec!(5.0)]);
    }

    #[test]
    fn test_ratings_keep_their_decimal_text() {
        let ratings = parse_ratings(1, "4.02, 4.97").unwrap();
        assert_eq!(ratings, vec![dec!(4.02), dec!(4.97)]);
        assert_eq!(ratings[0].to_string(), "4.02");
        assert!(matches!(
            parse_ratings(1, "5.000000001"),
            Err(RowError::Range { .. })
        ));
    }

    #[test]
    fn test_rating_errors() {
        assert!(matches!(
            parse_ratings(1, ""),
            Err(RowError::EmptyField { .. })
        ));
        assert!(matches!(
            parse_ratings(1, "4.5,good"),
            Err(RowError::MalformedNumber { .. })
        ));
        assert!(matches!(
            parse_ratings(1, "4.5,NaN"),
            Err(RowError::MalformedNumber { .. })
        ));
        assert!(matches!(
            parse_ratings(1, "4.5,5.1"),
            Err(RowError::Range { .. })
        ));
        assert!(matches!(
            parse_ratings(1, "-0.5"),
            Err(RowError::Range { .. })
        ));
    }

    #[test]
    fn test_sales_count_mismatch() {
        let six = parse_daily_sales(1, "1,2,3,4,5,6").unwrap_err();
        assert!(matches!(six, RowError::CountMismatch { found: 6, .. }));
        let eight = parse_daily_sales(1, "1,2,3,4,5,6,7,8").unwrap_err();
        assert!(matches!(eight, RowError::CountMismatch { found: 8, .. }));
    }

    #[test]
    fn test_sales_values() {
        assert!(matches!(
            parse_daily_sales(1, "1,2,3,-4,5,6,7"),
            Err(RowError::Range { .. })
        ));
        assert!(matches!(
            parse_daily_sales(1, "1,2,3,4.5,5,6,7"),
            Err(RowError::MalformedNumber { .. })
        ));
        assert_eq!(
            parse_daily_sales(1, "0, 0, 0, 0, 0, 0, 0").unwrap().total(),
            0
        );
    }

    #[test]
    fn test_empty_item_name() {
        let mut pairs = valid_pairs();
        pairs[0] = ("item", "   ");
        assert_eq!(
            validate_row(&row(&pairs)).unwrap_err(),
            RowError::EmptyField {
                row: 1,
                column: Column::Item,
            }
        );
    }

    #[test]
    fn test_checks_run_in_order() {
        // Bad price and bad sales: the price error wins.
        let mut pairs = valid_pairs();
        pairs[1] = ("price", "6.9");
        pairs[4] = ("sales_per_day", "1,2");
        assert!(matches!(
            validate_row(&row(&pairs)),
            Err(RowError::Precision { .. })
        ));
    }
}
