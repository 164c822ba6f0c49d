// Scroll progress indicator.

/// How far down the page has been scrolled, as a percentage in `0.0..=100.0`.
///
/// A page that fits in the viewport, or a non-finite offset, reports 0.
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 || !scrollable.is_finite() || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Width of the indicator bar as a CSS value.
pub fn indicator_width(percent: f64) -> String {
    format!("{}%", percent)
}
