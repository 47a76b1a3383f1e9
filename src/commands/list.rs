//! List the known migration units

use crate::domain::MigrationSet;
use crate::ui::Printer;

pub fn execute(set: &MigrationSet, printer: &Printer) {
    printer.plain(&format!("{} migration units:", set.len()));
    for unit in set.units() {
        printer.plain(&format!(
            "  {:03}  {:<50} {}",
            unit.sequence, unit.file_name, unit.description
        ));
    }
}
