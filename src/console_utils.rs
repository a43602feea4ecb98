//! Log output formatting.

use std::str::FromStr;

use tracing_core::{Event, Subscriber, metadata::Level};
use tracing_subscriber::{
    EnvFilter,
    filter::{Directive, LevelFilter, ParseError},
    fmt::{
        FmtContext, FormatEvent, FormatFields,
        format::{self, Format},
    },
    registry::LookupSpan,
};

/// Prints INFO events of this binary as plain messages and everything else in
/// the default format.
pub struct TracingFormatter;

impl<S, N> FormatEvent<S, N> for TracingFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();

        if *metadata.level() == Level::INFO && is_own_target(metadata.target()) {
            ctx.format_fields(writer.by_ref(), event)?;
            writeln!(writer)
        } else {
            let default_format = Format::default().without_time();
            default_format.format_event(ctx, writer, event)
        }
    }
}

/// Returns true for targets of this crate, not of the library crates.
fn is_own_target(target: &str) -> bool {
    target.split("::").next() == Some(env!("CARGO_CRATE_NAME"))
}

/// Constructs a default [`EnvFilter`] that is used when the user did not
/// specify a custom `RUST_LOG`.
///
/// The core library only reports warnings unless debug output was requested.
pub fn get_default_env_filter(verbose: LevelFilter) -> Result<EnvFilter, ParseError> {
    let core_level = if verbose >= LevelFilter::DEBUG {
        verbose
    } else {
        LevelFilter::WARN.min(verbose)
    };

    let result = EnvFilter::new(format!("variation_selector={verbose}"))
        .add_directive(Directive::from_str(&format!("variation_selector_core={core_level}"))?)
        .add_directive(Directive::from_str(&format!("variation_selector_types={core_level}"))?);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_target() {
        assert!(is_own_target("variation_selector"));
        assert!(is_own_target("variation_selector::catalog"));
        assert!(!is_own_target("variation_selector_core::sort_order"));
        assert!(!is_own_target("variation_selector_types"));
    }

    #[test]
    fn test_default_env_filter() {
        let filter = get_default_env_filter(LevelFilter::INFO).unwrap();
        assert!(filter.to_string().contains("variation_selector_core=warn"));

        let filter = get_default_env_filter(LevelFilter::TRACE).unwrap();
        assert!(filter.to_string().contains("variation_selector_core=trace"));

        let filter = get_default_env_filter(LevelFilter::ERROR).unwrap();
        assert!(filter.to_string().contains("variation_selector_core=error"));
    }
}
