use leptos::prelude::*;
use pandash_core::{LineKind, OutputLine};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// CSS class for a line kind
fn kind_class(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Neutral => css::textFg,
        LineKind::Success => css::textGreen,
        LineKind::Error => css::textRed,
        LineKind::Info => css::textYellow,
        LineKind::Ascii => css::ascii,
    }
}

/// One scrollback line. Text may carry inline markup and is set as HTML.
#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    let class = kind_class(line.kind);
    match line.kind {
        LineKind::Ascii => view! {
            <pre class=format!("{} glow", class) inner_html=line.text></pre>
        }
        .into_any(),
        _ if line.text.is_empty() => view! { <div class=css::lineEmpty></div> }.into_any(),
        _ => view! {
            <div class=format!("{} {}", css::line, class) inner_html=line.text></div>
        }
        .into_any(),
    }
}
