/// Parse a free-text duration ("1 hr 30 min", "25 minutes", "45") into
/// total minutes.
///
/// Returns `None` when nothing can be extracted. Zero is a legitimate
/// duration and must stay distinguishable from absence, so an empty or
/// unreadable string is never reported as 0.
pub fn parse_minutes(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut total: u32 = 0;
    let mut found_unit = false;

    let tokens: Vec<&str> = text.split_whitespace().collect();
    for pair in tokens.windows(2) {
        let Some(amount) = parse_number(pair[0]) else {
            continue;
        };
        match unit_kind(pair[1]) {
            Some(UnitKind::Hours) => {
                total = total.saturating_add(amount.saturating_mul(60));
                found_unit = true;
            }
            Some(UnitKind::Minutes) => {
                total = total.saturating_add(amount);
                found_unit = true;
            }
            None => {}
        }
    }

    if found_unit {
        return Some(total);
    }

    // No unit keyword anywhere: treat the whole string as bare minutes
    text.parse::<u32>().ok()
}

enum UnitKind {
    Hours,
    Minutes,
}

/// "1" or "1.5"; fractional hours are rounded down to whole numbers of
/// the unit they precede
fn parse_number(token: &str) -> Option<u32> {
    if let Ok(n) = token.parse::<u32>() {
        return Some(n);
    }
    token
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n as u32)
}

fn unit_kind(token: &str) -> Option<UnitKind> {
    let token = token.trim_end_matches(['.', ',']);
    if token.eq_ignore_ascii_case("hours")
        || token.eq_ignore_ascii_case("hour")
        || token.eq_ignore_ascii_case("hrs")
        || token.eq_ignore_ascii_case("hr")
        || token.eq_ignore_ascii_case("h")
    {
        return Some(UnitKind::Hours);
    }
    if token.eq_ignore_ascii_case("minutes")
        || token.eq_ignore_ascii_case("minute")
        || token.eq_ignore_ascii_case("mins")
        || token.eq_ignore_ascii_case("min")
        || token.eq_ignore_ascii_case("m")
    {
        return Some(UnitKind::Minutes);
    }
    None
}
