//! pt-BR display formatting for numbers, currency, and dates.
//!
//! The backend ships ISO dates and plain floats; everything user-visible is
//! formatted here so cards and tests agree on one rendering.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group an integer with `.` thousands separators (`1234567` → `"1.234.567"`).
#[must_use]
pub fn format_int_pt_br(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a square-meter measurement (`1234.0` → `"1.234 m²"`,
/// `87.5` → `"87,50 m²"`).
#[must_use]
pub fn format_area_m2(value: f64) -> String {
    format!("{} m²", format_number_pt_br(value))
}

/// Format a BRL amount with two decimals (`15000.0` → `"R$ 15.000,00"`).
#[must_use]
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    #[allow(clippy::cast_possible_truncation)]
    let cents = (value.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;
    let amount = format!("R$ {},{frac:02}", format_int_pt_br(whole));
    if negative {
        format!("-{amount}")
    } else {
        amount
    }
}

/// Render an ISO date (or RFC 3339 timestamp) as `dd/mm/yyyy`.
///
/// Malformed input is returned unchanged rather than erroring; a bad date in
/// one row must not take down the page.
#[must_use]
pub fn format_date_br(iso: &str) -> String {
    let date = iso.get(..10).unwrap_or(iso);
    let parts = date.split('-').collect::<Vec<_>>();
    let [year, month, day] = parts.as_slice() else {
        return iso.to_owned();
    };
    let well_formed = year.len() == 4
        && month.len() == 2
        && day.len() == 2
        && [*year, *month, *day]
            .iter()
            .all(|p| p.chars().all(|c| c.is_ascii_digit()));
    if !well_formed {
        return iso.to_owned();
    }
    format!("{day}/{month}/{year}")
}

/// Zero-padded display code for a maintenance request (`7` → `"#0007"`).
#[must_use]
pub fn format_request_code(id: i64) -> String {
    format!("#{id:04}")
}

fn format_number_pt_br(value: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let hundredths = (value * 100.0).round() as i64;
    let whole = hundredths / 100;
    let frac = hundredths % 100;
    if frac == 0 {
        format_int_pt_br(whole)
    } else {
        format!("{},{:02}", format_int_pt_br(whole), frac.abs())
    }
}
