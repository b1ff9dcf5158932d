/// Persian display helpers for prices and counts.
///
/// Prices are stored in tomans as plain integers; display surfaces show a
/// billions/millions/thousands breakdown with Persian digits.

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Substitute Latin digits with Persian digits; every other character
/// (including a minus sign) passes through unchanged.
pub fn to_persian_number(value: impl std::fmt::Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => PERSIAN_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Format a toman amount as a magnitude breakdown, e.g.
/// `۸ میلیارد و ۵۰۰ میلیون تومان`. Total over all integers: amounts below
/// one million fall back to the thousands bucket (zero included), and a
/// negative amount renders as the formatted absolute value with a leading
/// minus sign.
pub fn format_price(tomans: i64) -> String {
    if tomans < 0 {
        return format!("-{}", format_price_magnitude(tomans.unsigned_abs()));
    }
    format_price_magnitude(tomans as u64)
}

fn format_price_magnitude(tomans: u64) -> String {
    let billions = tomans / 1_000_000_000;
    let millions = (tomans % 1_000_000_000) / 1_000_000;

    let mut result = String::new();
    if billions > 0 {
        result.push_str(&to_persian_number(billions));
        result.push_str(" میلیارد");
        if millions > 0 {
            result.push_str(" و ");
            result.push_str(&to_persian_number(millions));
            result.push_str(" میلیون");
        }
    } else if millions > 0 {
        result.push_str(&to_persian_number(millions));
        result.push_str(" میلیون");
    } else {
        let thousands = tomans / 1_000;
        result.push_str(&to_persian_number(thousands));
        result.push_str(" هزار");
    }

    result.push_str(" تومان");
    result
}

/// Format a square-meter area, e.g. `۳۵۰ متر مربع`.
pub fn format_area(sqm: i64) -> String {
    format!("{} متر مربع", to_persian_number(sqm))
}
