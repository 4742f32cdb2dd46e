use std::path::Path;

use qdii_deploy::config::ConfigWarning;
use qdii_deploy::DriverError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, Tone};

/// Exit code for an error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DriverError>()
        .map(DriverError::exit_code)
        .unwrap_or(1)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        paint(&err.to_string(), Tone::Error, supports_color)
    );

    for cause in err.chain().skip(1) {
        out.push_str(&paint(&format!("  caused by: {cause}"), Tone::Dim, supports_color));
        out.push('\n');
    }

    if let Some(DriverError::TargetNotFound { .. }) = err.downcast_ref::<DriverError>() {
        out.push_str(&paint(
            "  Run 'qdii-deploy --list' to see every target and its commands.",
            Tone::Dim,
            supports_color,
        ));
        out.push('\n');
    }

    out
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let doc = qdii_deploy::presentation::output::error_json(&err.to_string(), exit_code_for(err));
        println!("{doc}");
        return;
    }

    if let Some(file) = err.downcast_ref::<DriverError>().and_then(DriverError::file) {
        if let Some(annotation) = github_annotation(&err.to_string(), file) {
            println!("{annotation}");
        }
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}

/// `::error file=...::message` when running under GitHub Actions.
fn github_annotation(message: &str, file: &Path) -> Option<String> {
    std::env::var_os("GITHUB_ACTIONS")?;
    let escape = |s: &str| s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A");
    Some(format!(
        "::error file={}::{}",
        escape(&file.display().to_string()),
        escape(message)
    ))
}

pub fn format_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            paint(
                &format!("Unknown config key '{}' in {}", w.key, location),
                Tone::Warning,
                supports_color
            )
        ));
        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

/// Warnings go to stderr in every mode; `--json` only claims stdout.
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if warnings.is_empty() {
        return;
    }
    eprint!("{}", format_config_warnings(warnings, ui.color, ui.unicode));
}
