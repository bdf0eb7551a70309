//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success/Safe:  green   (safe datasets, clean workspace)
//!   - Warning:       yellow  (dangling references)
//!   - Error/Impact:  red     (impact warnings, orphan counts)
//!   - Info/Reference: cyan   (dataset ARNs)
//!   - Muted:         dimmed  (field labels, record ids)
//!   - Emphasis:      bold    (section headers)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Colorize a dataset ARN (cyan).
pub(crate) fn colorize_arn(arn: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return arn.to_string();
    }
    arn.cyan().to_string()
}

/// Colorize an orphan count: red and bold when any exist, green when zero.
pub(crate) fn colorize_orphan_count(count: usize, config: &OutputConfig) -> String {
    let text = count.to_string();
    if !config.use_colors {
        return text;
    }
    if count > 0 {
        text.red().bold().to_string()
    } else {
        text.green().to_string()
    }
}

/// Get a colored usage icon for a dataset, with ASCII fallback support.
pub(crate) fn colored_usage_icon(orphan: bool, config: &OutputConfig) -> String {
    let icon = if config.use_ascii {
        if orphan { "o" } else { "*" }
    } else if orphan {
        "○"
    } else {
        "●"
    };

    if !config.use_colors {
        return icon.to_string();
    }

    if orphan {
        icon.red().to_string()
    } else {
        icon.green().to_string()
    }
}

/// Get a colored warning icon, with ASCII fallback support.
pub(crate) fn warning_icon(config: &OutputConfig) -> String {
    let icon = if config.use_ascii { "!" } else { "⚠" };
    if !config.use_colors {
        return icon.to_string();
    }
    icon.red().to_string()
}

/// Get a colored success icon, with ASCII fallback support.
pub(crate) fn success_icon(config: &OutputConfig) -> String {
    let icon = if config.use_ascii { "+" } else { "✓" };
    if !config.use_colors {
        return icon.to_string();
    }
    icon.green().to_string()
}

/// Apply dimmed style to text (for labels/field names).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for section headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}
