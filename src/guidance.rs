//! Operator guidance
//!
//! Narrative text only. The dashboard and CLI tool described here are never
//! called programmatically by this binary.

use crate::config::Settings;
use crate::ui::Printer;

pub fn print_execution_options(printer: &Printer, settings: &Settings) {
    printer.step(3, 4, "Available Execution Options");
    printer.plain("");

    printer.info("  Option A: Manual via project dashboard (RECOMMENDED)");
    printer.plain("    Time: 30-45 minutes");
    printer.plain("    Steps:");
    printer.plain(&format!("      1. Open {} and sign in", settings.project_url));
    printer.plain("      2. Go to SQL Editor -> New Query");
    printer.plain("      3. Copy migration SQL from files -> Paste -> Run");
    printer.plain("      4. Repeat for each migration in order (001-017)");
    printer.plain("    Safest option: verify each step before moving on, easy rollback");
    printer.plain("");

    printer.info("  Option B: supabase CLI (FASTEST)");
    printer.plain("    Time: 15-20 minutes");
    printer.plain("    Commands:");
    printer.plain("      $ supabase link --project-ref <project-ref>");
    printer.plain("      $ supabase db push");
    printer.plain("    Applies all migrations at once; best for CI/CD");
    printer.plain("");

    printer.info("  Option C: Automated execution (NOT IMPLEMENTED)");
    printer.plain("    Requires the service role key in the environment.");
    printer.plain("    This tool only prepares the run; use Option A or B to execute.");
}

pub fn print_next_steps(printer: &Printer) {
    printer.step(4, 4, "Next Steps");
    printer.plain("");
    printer.plain("  1. Choose an execution method (Option A or B above)");
    printer.plain("  2. Apply the migrations in sequence order");
    printer.plain("  3. Verify success:");
    printer.plain("     - Run the verification queries from the migration guide");
    printer.plain("     - Check that all expected tables were created");
    printer.plain("     - Confirm the template questions were seeded");
    printer.plain("  4. Restart the backend and smoke-test the auth API");
}
