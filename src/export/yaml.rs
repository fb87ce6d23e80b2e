//! YAML export of the dashboard

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::DashboardExport;

/// Write the snapshot as YAML, preceded by a comment header
pub fn export_yaml<W: Write>(export: &DashboardExport, writer: &mut W) -> FinanceResult<()> {
    let io_err = |e: std::io::Error| FinanceError::Export(e.to_string());

    writeln!(writer, "# gofinances dashboard export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| FinanceError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MalformedRecordPolicy, Settings};
    use crate::locale::LocaleFormat;
    use crate::models::UserId;
    use crate::reports::aggregate;

    #[test]
    fn test_yaml_export() {
        let summary =
            aggregate(&[], &LocaleFormat::default(), MalformedRecordPolicy::Skip).unwrap();
        let user = UserId::parse("7").unwrap();
        let export = DashboardExport::new(&user, &Settings::default(), summary);

        let mut out = Vec::new();
        export_yaml(&export, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# gofinances dashboard export"));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed["user"].as_str(), Some("7"));
        assert_eq!(
            parsed["expense"]["last_transaction"].as_str(),
            Some("Nenhuma transação")
        );
        assert_eq!(parsed["transactions"].as_sequence().map(Vec::len), Some(0));
    }
}
