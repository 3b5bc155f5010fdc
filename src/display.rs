//! Human-readable presentation of TRON transactions.

use chrono::{DateTime, Datelike as _, Local};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use serde::Serialize;
use tronda::trongrid::Transaction;

// Non-standard "Thur" and "Sept" abbreviations are load-bearing: existing consumers match on the
// exact output strings.
const DAYS_OF_THE_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thur", "Fri", "Sat"];
const MONTHS_OF_THE_YEAR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// A transaction reshaped for human consumption.
///
/// Serializes with the presentation-layer key names (`HASH`, `From Address`, ...) used by the
/// tabular view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FormattedTransaction {
    /// Ellipsified transaction hash.
    #[serde(rename = "HASH")]
    pub hash: String,

    /// Sender address, verbatim from the provider.
    #[serde(rename = "From Address")]
    pub from_address: String,

    /// Recipient address, verbatim from the provider.
    #[serde(rename = "To Address")]
    pub to_address: String,

    /// Raw transfer amount in SUN.
    #[serde(rename = "Amount")]
    pub amount: i64,

    /// Transfer amount scaled to TRX, rendered as an exact decimal string. Only present when
    /// requested.
    #[serde(rename = "Amount (no decimals)", skip_serializing_if = "Option::is_none")]
    pub amount_no_decimals: Option<String>,

    /// Transaction timestamp, formatted in the local time zone.
    #[serde(rename = "Time of Transaction")]
    pub time: String,
}

impl FormattedTransaction {
    /// Reshape a validated provider [`Transaction`] into a display record.
    pub fn new(tx: &Transaction, include_no_decimal_amount: bool) -> Self {
        Self {
            hash: ellipsify(tx.txid.as_str(), None),
            from_address: tx.owner_address.clone(),
            to_address: tx.to_address.clone(),
            amount: tx.amount,
            amount_no_decimals: include_no_decimal_amount
                .then(|| tx.amount_trx().normalize().to_string()),
            time: format_date(tx.timestamp.with_timezone(&Local)),
        }
    }
}

/// Shorten a string by replacing its middle with an ellipsis (`...`).
///
/// When `pad` is `None`, it defaults to `ceil(len / 3)`. A pad over 8 is reduced by 3 to keep the
/// output short; this is a soft cap, not a clamp. When the pad reaches half the string length or
/// more, the head and tail slices overlap and characters repeat; callers depend on that exact
/// slicing behavior.
pub fn ellipsify(s: &str, pad: Option<usize>) -> String {
    let len = s.chars().count();
    let pad = pad.unwrap_or(len.div_ceil(3));
    let pad = if pad > 8 { pad - 3 } else { pad };

    let head: String = s.chars().take(pad).collect();
    let tail: String = s.chars().skip(len.saturating_sub(pad)).collect();

    format!("{head}...{tail}")
}

/// Format a local date as `"<Weekday>, <Month> <Day>, <Year>"`, e.g. `"Sat, Sept 18, 2021"`.
///
/// The day of month is not zero padded.
pub fn format_date(date: DateTime<Local>) -> String {
    let weekday = DAYS_OF_THE_WEEK[date.weekday().num_days_from_sunday() as usize];
    let month = MONTHS_OF_THE_YEAR[date.month0() as usize];

    format!("{weekday}, {month} {}, {}", date.day(), date.year())
}

/// Render a result set as a table for the console.
///
/// Batch slots whose lookup was rejected by the provider render as placeholder rows.
pub fn render_table<'a, I>(rows: I, include_no_decimal_amount: bool) -> Table
where
    I: IntoIterator<Item = Option<&'a FormattedTransaction>>,
{
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["HASH", "From Address", "To Address", "Amount"];
    if include_no_decimal_amount {
        header.push("Amount (no decimals)");
    }
    header.push("Time of Transaction");
    let columns = header.len();
    table.set_header(header);

    for row in rows {
        match row {
            Some(tx) => {
                let mut cells = vec![
                    tx.hash.clone(),
                    tx.from_address.clone(),
                    tx.to_address.clone(),
                    tx.amount.to_string(),
                ];
                if include_no_decimal_amount {
                    cells.push(tx.amount_no_decimals.clone().unwrap_or_default());
                }
                cells.push(tx.time.clone());
                table.add_row(cells);
            }
            None => {
                table.add_row(vec!["-"; columns]);
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbtest::arbtest;
    use chrono::TimeZone as _;

    #[test]
    fn test_ellipsify_default_pad() {
        // ceil(15 / 3) = 5
        assert_eq!(ellipsify("abcdefghijklmno", None), "abcde...klmno");
    }

    #[test]
    fn test_ellipsify_explicit_pad() {
        assert_eq!(ellipsify("abcdefghijklmno", Some(2)), "ab...no");
    }

    #[test]
    fn test_ellipsify_pad_reduction() {
        // ceil(30 / 3) = 10, reduced to 7.
        let s = "abcdefghijklmnopqrstuvwxyz0123";
        assert_eq!(ellipsify(s, None), "abcdefg...xyz0123");
    }

    #[test]
    fn test_ellipsify_txid() {
        // A 64-char hash: ceil(64 / 3) = 22, reduced to 19.
        let txid = "d0807adb3c5412aa150787b944c96ee898c997debdc27e2f6a643c771edb5933";
        assert_eq!(
            ellipsify(txid, None),
            "d0807adb3c5412aa150...e2f6a643c771edb5933"
        );
        assert_eq!(ellipsify(txid, None).len(), 19 + 3 + 19);
    }

    #[test]
    fn test_ellipsify_overlapping_slices() {
        // Pad at or beyond half the length repeats characters. This matches plain slice
        // semantics and is intentional.
        assert_eq!(ellipsify("abcd", Some(3)), "abc...bcd");
        assert_eq!(ellipsify("ab", Some(5)), "ab...ab");
        assert_eq!(ellipsify("", None), "...");
    }

    #[test]
    fn prop_test_ellipsify() {
        arbtest(|u| {
            let s: String = u.arbitrary()?;
            let pad: Option<usize> = u
                .arbitrary::<Option<u8>>()?
                .map(|pad| usize::from(pad) % 32);

            let out = ellipsify(&s, pad);

            let len = s.chars().count();
            let expected_pad = match pad.unwrap_or(len.div_ceil(3)) {
                pad if pad > 8 => pad - 3,
                pad => pad,
            };
            let head: String = s.chars().take(expected_pad).collect();
            let tail: String = s.chars().skip(len.saturating_sub(expected_pad)).collect();

            assert!(out.starts_with(&head));
            assert!(out.ends_with(&tail));
            assert_eq!(out.chars().count(), head.chars().count() + 3 + tail.chars().count());

            Ok(())
        })
        .budget_ms(250)
        .run();
    }

    #[test]
    fn test_format_date() {
        let date = Local.with_ymd_and_hms(2021, 9, 18, 12, 0, 0).unwrap();
        assert_eq!(format_date(date), "Sat, Sept 18, 2021");
    }

    #[test]
    fn test_format_date_thursday_unpadded_day() {
        let date = Local.with_ymd_and_hms(2021, 9, 2, 12, 0, 0).unwrap();
        assert_eq!(format_date(date), "Thur, Sept 2, 2021");
    }

    #[test]
    fn test_format_date_months() {
        let date = Local.with_ymd_and_hms(2022, 1, 3, 12, 0, 0).unwrap();
        assert_eq!(format_date(date), "Mon, Jan 3, 2022");

        let date = Local.with_ymd_and_hms(2021, 12, 25, 12, 0, 0).unwrap();
        assert_eq!(format_date(date), "Sat, Dec 25, 2021");
    }

    fn formatted(amount: i64) -> FormattedTransaction {
        FormattedTransaction {
            hash: "d0807adb3c5412aa150...e2f6a643c771edb5933".to_string(),
            from_address: "41a7d8a35b260395c14aa456297662092ba3b76fc0".to_string(),
            to_address: "41e9d79cc47518930bc322d9bf7cddd260a0260a8d".to_string(),
            amount,
            amount_no_decimals: None,
            time: "Sat, Sept 18, 2021".to_string(),
        }
    }

    #[test]
    fn test_render_table() {
        let row = formatted(16_000_000);
        let table = render_table([Some(&row), None], false);
        let rendered = table.to_string();

        assert!(rendered.contains("HASH"));
        assert!(rendered.contains("Time of Transaction"));
        assert!(!rendered.contains("Amount (no decimals)"));
        assert!(rendered.contains("16000000"));
        assert!(rendered.contains("d0807adb3c5412aa150...e2f6a643c771edb5933"));
    }

    #[test]
    fn test_render_table_with_trx_column() {
        let mut row = formatted(16_000_000);
        row.amount_no_decimals = Some("16".to_string());
        let table = render_table([Some(&row)], true);
        let rendered = table.to_string();

        assert!(rendered.contains("Amount (no decimals)"));
        assert!(rendered.contains("16"));
    }

    #[test]
    fn test_serialize_record_keys() {
        let mut row = formatted(1_000_000);
        let value = serde_json::to_value(&row).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "HASH",
            "From Address",
            "To Address",
            "Amount",
            "Time of Transaction",
        ] {
            assert!(object.contains_key(key), "missing key `{key}`");
        }
        // The TRX column is omitted entirely when not requested.
        assert!(!object.contains_key("Amount (no decimals)"));
        assert_eq!(object.len(), 5);

        row.amount_no_decimals = Some("1".to_string());
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["Amount (no decimals)"], "1");
    }
}
