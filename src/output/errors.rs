use std::fmt::Display;

use console::style;

/// Numbered listing of conversion errors under a header with their count.
pub fn make_error_report<I>(errors: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let lines: Vec<String> = errors
        .into_iter()
        .enumerate()
        .map(|(i, err)| format!("{:>4}. {}\n", i + 1, err))
        .collect();

    let noun = if lines.len() == 1 { "error" } else { "errors" };
    let header = format!("{} conversion {}", lines.len(), noun);

    format!("{}\n{}", style(header).red().bold(), lines.concat())
}

pub fn print_errors<I>(errors: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    eprint!("\n{}", make_error_report(errors));
}
