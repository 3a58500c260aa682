//! Display formatting for calculator values
//!
//! Numbers are rounded to a number of significant digits before printing so
//! that `2 3 ^` shows `8` rather than the last-bit noise of `exp(3 ln 2)`.

use crate::stack::Stack;
use num_complex::Complex64;

/// Significant digits shown when nothing else is configured
pub const DEFAULT_PRECISION: usize = 10;

/// Format a real number to `precision` significant digits
pub fn format_number(x: f64, precision: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = precision.clamp(1, 17);
    let rounded: f64 = format!("{:.*e}", precision - 1, x)
        .parse()
        .unwrap_or(x);

    if rounded == 0.0 {
        return "0".to_string();
    }
    let magnitude = rounded.abs();
    if !(1e-6..1e15).contains(&magnitude) {
        format!("{:e}", rounded)
    } else if rounded.fract() == 0.0 {
        // No trailing .0 for integers
        format!("{}", rounded as i64)
    } else {
        rounded.to_string()
    }
}

/// Format a complex value as `re`, `imi` or `re+imi`.
///
/// A component smaller than the other by more than `precision` digits is
/// shown as zero.
pub fn format_value(z: Complex64, precision: usize) -> String {
    let scale = z.re.abs().max(z.im.abs()) * 10f64.powi(-(precision.clamp(1, 17) as i32));
    let negligible = |x: f64| x.is_finite() && x.abs() < scale;
    let re = if negligible(z.re) { 0.0 } else { z.re };
    let im = if negligible(z.im) { 0.0 } else { z.im };
    let re = format_number(re, precision);
    let im = format_number(im, precision);
    if im == "0" {
        re
    } else if re == "0" {
        format!("{}i", im)
    } else if im.starts_with('-') {
        format!("{}{}i", re, im)
    } else {
        format!("{}+{}i", re, im)
    }
}

/// Stack fill as `depth/capacity`
pub fn format_status(stack: &Stack) -> String {
    format!("{}/{}", stack.depth(), stack.capacity())
}

/// List the stack deepest level first, values right-aligned to `width`
pub fn format_stack(stack: &Stack, precision: usize, width: usize) -> String {
    let depth = stack.depth();
    stack
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let label = format!("{}:", depth - i);
            let value = format_value(*value, precision);
            let pad = width.saturating_sub(label.len() + value.len()).max(1);
            format!("{}{}{}", label, " ".repeat(pad), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Two-line summary for a character display of `width` columns:
/// the top value, then the stack status right-aligned.
pub fn format_lines(stack: &Stack, precision: usize, width: usize) -> [String; 2] {
    let top = stack
        .top()
        .map(|z| format_value(z, precision))
        .unwrap_or_default();
    [
        truncate_str(&top, width),
        format!("{:>width$}", format_status(stack), width = width),
    ]
}

/// Truncate to at most `max_width` characters, marking the cut with `…`
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width == 0 {
        String::new()
    } else {
        let kept: String = s.chars().take(max_width - 1).collect();
        format!("{}…", kept)
    }
}
