use tracing::{info_span, Span};
use tracing_indicatif::{span_ext::IndicatifSpanExt, style::ProgressStyle};

/// Span that carries a progress bar. The bar is drawn by the `IndicatifLayer`
/// installed in `main` while the span is entered, so log lines print above it.
pub fn progress_span(len: u64, msg: &str) -> Span {
    let span = info_span!("progress");

    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise} / {eta_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
    {
        span.pb_set_style(&style.progress_chars("##-"));
    }
    span.pb_set_length(len);
    span.pb_set_message(msg);

    span
}
