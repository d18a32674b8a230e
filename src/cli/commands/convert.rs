use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::convert::Conversion;
use crate::errors::{AppError, AppResult};
use crate::files::{read_input, write_output, write_report};
use crate::ui::messages::{info, reserve_stdout, warning};
use crate::utils::path::expand_tilde;

/// How many skip reasons are echoed on the console before summarising.
const SKIP_PREVIEW: usize = 5;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        input,
        output,
        mode,
        to_stdout,
        report,
        report_format,
        force,
        verbose,
    } = cmd
    {
        if *to_stdout {
            reserve_stdout();
        }

        let mode = mode.unwrap_or(cfg.direction_mode);
        let content = read_input(input)?;

        let result = Conversion::run(&content, mode, *verbose);

        if !result.skipped.is_empty() {
            warning(format!(
                "Skipped {} line(s) that could not be converted",
                result.skipped.len()
            ));
            for s in result.skipped.iter().take(SKIP_PREVIEW) {
                warning(format!("  line {}: {}", s.line, s.reason));
            }
            if result.skipped.len() > SKIP_PREVIEW {
                warning(format!(
                    "  … and {} more",
                    result.skipped.len() - SKIP_PREVIEW
                ));
            }
        }

        if let Some(report_path) = report {
            let fmt = report_format.unwrap_or(cfg.report_format);
            write_report(&expand_tilde(report_path), &result.skipped, fmt, *force)?;
        }

        if result.is_empty() {
            return Err(AppError::EmptyOutput);
        }

        if *to_stdout {
            println!("{}", result.output);
            return Ok(());
        }

        let target = output.as_deref().unwrap_or(&cfg.output_file);
        write_output(&expand_tilde(target), &result.output, *force)?;

        info(format!(
            "Converted {} line(s) using '{}' mode",
            result.converted(),
            mode.as_str()
        ));
    }
    Ok(())
}
