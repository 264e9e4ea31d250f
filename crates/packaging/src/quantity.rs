use std::sync::LazyLock;

use regex::Regex;

/// Grams assumed when no unit pattern matches ("1 banana", "a handful").
pub const DEFAULT_GRAMS: u32 = 100;

static ML_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*ml").unwrap());
static GRAMS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*g").unwrap());
static CUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*cup").unwrap());
static TBSP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*tbsp").unwrap());
static TSP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*tsp").unwrap());

/// Estimate the mass of a free-text recipe quantity in grams.
///
/// Lossy by design: smoothie liquids sit near 1 g/ml and a "cup" is taken
/// as 200 g flat, which is wrong for dense or fluffy ingredients and fine
/// for a packing-slip display. The first matching unit wins, in the order
/// ml, g, cup, tbsp, tsp; mixed-unit strings are not supported and
/// anything unrecognized falls back to [`DEFAULT_GRAMS`].
pub fn to_grams(quantity_text: &str) -> u32 {
    let text = quantity_text.to_lowercase();

    if let Some(ml) = capture_u32(&ML_RE, &text) {
        return ml;
    }
    if let Some(g) = capture_u32(&GRAMS_RE, &text) {
        return g;
    }
    if let Some(caps) = CUP_RE.captures(&text) {
        if let Ok(cups) = caps[1].parse::<f64>() {
            return (cups * 200.0).round() as u32;
        }
    }
    if let Some(tbsp) = capture_u32(&TBSP_RE, &text) {
        return tbsp * 15;
    }
    if let Some(tsp) = capture_u32(&TSP_RE, &text) {
        return tsp * 5;
    }

    DEFAULT_GRAMS
}

fn capture_u32(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text).and_then(|caps| caps[1].parse().ok())
}
