use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::convert::Conversion;
use crate::core::formatter::direction_flag;
use crate::errors::AppResult;
use crate::files::read_input;
use crate::ui::messages::{header, info, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Inspect { input, mode, limit } = cmd {
        let mode = mode.unwrap_or(cfg.direction_mode);
        let content = read_input(input)?;
        let result = Conversion::run(&content, mode, false);

        header(format!("Parsed records ({} mode)", mode.as_str()));

        let mut table = Table::new(vec![
            Column::new("#"),
            Column::new("Employee"),
            Column::new("Timestamp"),
            Column::new("Valid"),
            Column::new("Log type"),
            Column::new("Flag"),
        ]);

        let shown = limit.unwrap_or(result.records.len());
        for (i, rec) in result.records.iter().take(shown).enumerate() {
            let flag = direction_flag(rec, mode).map_or("-", |f| f.as_code());
            table.add_row(vec![
                (i + 1).to_string(),
                rec.employee_id.clone(),
                rec.timestamp.clone(),
                if rec.datetime().is_some() { "yes" } else { "no" }.to_string(),
                rec.log_type().unwrap_or_else(|| "-".to_string()),
                flag.to_string(),
            ]);
        }
        print!("{}", table.render());

        if shown < result.records.len() {
            info(format!(
                "{} more record(s) not shown",
                result.records.len() - shown
            ));
        }

        if !result.skipped.is_empty() {
            header("Skipped lines");
            let mut skipped = Table::new(vec![
                Column::new("Line"),
                Column::new("Reason"),
                Column::new("Content"),
            ]);
            for s in &result.skipped {
                skipped.add_row(vec![
                    s.line.to_string(),
                    s.reason.to_string(),
                    s.content.replace('\t', " ⇥ "),
                ]);
            }
            print!("{}", skipped.render());
            warning(format!("{} line(s) would be skipped", result.skipped.len()));
        }

        info(format!(
            "{} record(s) would be converted",
            result.converted()
        ));
    }
    Ok(())
}
